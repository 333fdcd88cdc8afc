//! # Ecological Footprint
//!
//! "If everyone lived like you" figures.
//!
//! - Sustainable share is ~166.7 kg CO2e/month (2 tons/year)
//! - Earths needed = total / sustainable share, floored at 0.5
//! - Temperature rise: 1.5°C within one Earth, otherwise 1.2°C plus 0.5°C per
//!   extra Earth
//!
//! The temperature branch reads the unclamped ratio. Only the reported
//! `earths_needed` is floored.
use serde::Serialize;

pub const SUSTAINABLE_MONTHLY_EMISSIONS: f64 = 166.7;
pub const MIN_EARTHS_NEEDED: f64 = 0.5;
pub const TARGET_TEMP_RISE: f64 = 1.5;
/// Earths at which the resource consumption gauge is full.
pub const RESOURCE_SCALE_EARTHS: f64 = 5.0;

const BASE_TEMP_RISE: f64 = 1.2;
const TEMP_RISE_PER_EARTH: f64 = 0.5;
const OVERSHOOT_LIMIT: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FootprintStatus {
    /// Within planetary boundaries
    Sustainable,
    /// Up to three Earths
    Overshoot,
    Critical,
}

impl FootprintStatus {
    pub fn from_earths(earths_needed: f64) -> Self {
        if earths_needed <= 1.0 {
            Self::Sustainable
        } else if earths_needed <= OVERSHOOT_LIMIT {
            Self::Overshoot
        } else {
            Self::Critical
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Sustainable => "Sustainable! You are living within planetary boundaries.",
            Self::Overshoot => "Overshoot! We'd need more resources than Earth has.",
            Self::Critical => "Critical! This lifestyle is highly unsustainable.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Footprint {
    pub earths_needed: f64,
    pub temp_rise: f64,
    pub status: FootprintStatus,
}

impl Footprint {
    /// Degrees above the 1.5°C target.
    pub fn target_delta(&self) -> f64 {
        round_tenth(self.temp_rise - TARGET_TEMP_RISE)
    }

    /// Share of the resource gauge in use, capped at 1.
    pub fn resource_share(&self) -> f64 {
        (self.earths_needed / RESOURCE_SCALE_EARTHS).min(1.0)
    }
}

pub fn get_ecological_footprint(total: f64) -> Footprint {
    let earths_needed = total / SUSTAINABLE_MONTHLY_EMISSIONS;

    let temp_rise = if earths_needed <= 1.0 {
        TARGET_TEMP_RISE
    } else {
        BASE_TEMP_RISE + (earths_needed - 1.0) * TEMP_RISE_PER_EARTH
    };

    let earths_needed = round_tenth(earths_needed.max(MIN_EARTHS_NEEDED));

    Footprint {
        earths_needed,
        temp_rise: round_tenth(temp_rise),
        status: FootprintStatus::from_earths(earths_needed),
    }
}

/// Rounds the exact binary value once, so `x.x5` ties that are stored just
/// below the half stay down.
fn round_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
