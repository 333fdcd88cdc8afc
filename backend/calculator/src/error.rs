use std::{io, path::PathBuf};

use thiserror::Error;

use crate::factors::Category;

#[derive(Error, Debug)]
pub enum FactorsError {
    #[error("Failed to read emission factors from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed emission factors in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown {category} key {key:?}, expected one of {:?}", .category.known_keys())]
    UnknownKey { category: Category, key: String },

    #[error("Invalid {category} factor {key:?}: {value}")]
    InvalidFactor {
        category: Category,
        key: String,
        value: f64,
    },
}
