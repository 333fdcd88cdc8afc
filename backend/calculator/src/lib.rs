//! # Calculator
//!
//! Monthly carbon footprint from a handful of lifestyle quantities.
//!
//! ## Flow
//!
//! 1. Load the emission factors once at startup with [`load_factors`].
//! 2. Parse user input into an [`EstimateInput`]. Parsing never fails, bad numbers become zero.
//! 3. [`calculate`] gives the per-category breakdown and total.
//! 4. [`assess`] also attaches recommendations and the ecological footprint.
//! 5. [`render_report`] turns a result into plain text.
//!
//! ## Factors File
//!
//! JSON, one object per category.
//! ```json
//! {
//!   "transport": { "car_petrol": 0.192, "bus": 0.105 },
//!   "electricity": { "grid_avg": 0.82 },
//!   "diet": { "vegetarian": 1.7 },
//!   "fuel": { "lpg": 2.983 }
//! }
//! ```
//!
//! A missing file is not an error, the built-in table is used instead. Keys
//! outside the known variants are.
use std::{fs, io::ErrorKind, path::Path};

use tracing::{info, warn};

pub mod error;
pub mod estimate;
pub mod factors;
pub mod footprint;
pub mod input;
pub mod recommendations;
pub mod report;

pub use error::FactorsError;
pub use estimate::{Breakdown, EstimateResult, UNITS, assess, calculate};
pub use factors::{Category, DEFAULT_FACTORS_PATH, EmissionFactors};
pub use footprint::{Footprint, FootprintStatus, get_ecological_footprint};
pub use input::{DietType, EstimateInput, FuelType, TransportMode, Variant, parse_quantity};
pub use recommendations::get_recommendations;
pub use report::{Report, render_report};

pub fn load_factors(path: impl AsRef<Path>) -> Result<EmissionFactors, FactorsError> {
    let path = path.as_ref();

    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Emission factors not found at {path:?}, using built-in table");
            return Ok(EmissionFactors::builtin());
        }
        Err(source) => {
            return Err(FactorsError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let factors: EmissionFactors =
        serde_json::from_str(&data).map_err(|source| FactorsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    factors.validate()?;

    info!(
        "Loaded emission factors from {path:?}: {} transport, {} electricity, {} diet, {} fuel",
        factors.transport.len(),
        factors.electricity.len(),
        factors.diet.len(),
        factors.fuel.len()
    );

    Ok(factors)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let temp_dir = TempDir::new().unwrap();

        let factors = load_factors(temp_dir.path().join("absent.json")).unwrap();

        assert_eq!(factors, EmissionFactors::builtin());
    }

    #[test]
    fn loads_factors_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("factors.json");
        fs::write(
            &path,
            r#"{"transport": {"train": 0.041}, "diet": {"vegan": 1.5}}"#,
        )
        .unwrap();

        let factors = load_factors(&path).unwrap();

        assert_eq!(factors.factor(Category::Transport, Some("train")), 0.041);
        assert_eq!(factors.factor(Category::Diet, Some("vegan")), 1.5);
        assert!(factors.fuel.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("factors.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_factors(&path), Err(FactorsError::Parse { .. })));
    }

    #[test]
    fn negative_factor_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("factors.json");
        fs::write(&path, r#"{"fuel": {"coal": -1.0}}"#).unwrap();

        assert!(matches!(
            load_factors(&path),
            Err(FactorsError::InvalidFactor { .. })
        ));
    }

    #[test]
    fn unselectable_key_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("factors.json");
        fs::write(
            &path,
            r#"{"transport": {"car_petrol": 0.192, "motorbike": 0.1}}"#,
        )
        .unwrap();

        assert!(matches!(
            load_factors(&path),
            Err(FactorsError::UnknownKey { .. })
        ));
    }

    #[test]
    fn directory_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();

        assert!(matches!(
            load_factors(temp_dir.path()),
            Err(FactorsError::Read { .. })
        ));
    }

    #[test]
    fn bundled_table_covers_every_variant() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../..")
            .join(DEFAULT_FACTORS_PATH);
        let table = load_factors(path).unwrap();

        for &mode in TransportMode::KNOWN {
            assert!(table.transport.contains_key(mode.key().unwrap()));
        }
        for &diet in DietType::KNOWN {
            assert!(table.diet.contains_key(diet.key().unwrap()));
        }
        for &fuel in FuelType::KNOWN {
            assert!(table.fuel.contains_key(fuel.key().unwrap()));
        }
        assert!(table.electricity.contains_key(factors::GRID_AVERAGE));

        let result = calculate(&table, &EstimateInput::default());
        assert!((result.total - 51.0).abs() < 1e-9);
    }
}
