use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use calculator::DEFAULT_FACTORS_PATH;
use tracing::{info, warn};

use crate::error::AppError;

pub const DEFAULT_PORT: &str = "5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub factors_path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Ok(Self {
            port: try_load("CARBON_PORT", DEFAULT_PORT)?,
            factors_path: try_load("EMISSION_FACTORS_PATH", DEFAULT_FACTORS_PATH)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            factors_path: PathBuf::from(DEFAULT_FACTORS_PATH),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, AppError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");

            AppError::Config {
                key: key.to_string(),
                message: e.to_string(),
            }
        })
}
