//! Rule-based advice for an estimate.
//!
//! A single threshold rule on the monthly total. Diet-specific advice would
//! slot in here once it is defined.

/// Monthly kg CO2e above which advice is given. Exclusive.
pub const HIGH_EMISSIONS_THRESHOLD: f64 = 500.0;

pub const HIGH_EMISSIONS_ADVICE: [&str; 2] = [
    "Consider switching to public transport or carpooling.",
    "Switch to LED bulbs and energy-efficient appliances.",
];

pub fn get_recommendations(total: f64) -> Vec<String> {
    if total > HIGH_EMISSIONS_THRESHOLD {
        HIGH_EMISSIONS_ADVICE.iter().map(|advice| advice.to_string()).collect()
    } else {
        Vec::new()
    }
}
