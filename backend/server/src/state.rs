use std::sync::Arc;

use calculator::{EmissionFactors, load_factors};

use super::{config::Config, error::AppError};

pub struct State {
    pub config: Config,
    pub factors: EmissionFactors,
}

impl State {
    pub fn new() -> Result<Arc<Self>, AppError> {
        let config = Config::load()?;
        let factors = load_factors(&config.factors_path)?;

        Ok(Self::with_factors(config, factors))
    }

    pub fn with_factors(config: Config, factors: EmissionFactors) -> Arc<Self> {
        Arc::new(Self { config, factors })
    }
}
