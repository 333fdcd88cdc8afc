//! Plain-text report over an estimate.
use std::fmt;

use crate::{estimate::EstimateResult, recommendations::get_recommendations};

pub const REPORT_TITLE: &str = "CarbonZero Report";
pub const LOW_EMISSIONS_MESSAGE: &str = "Great job! Your emissions are low.";

pub fn render_report(result: &EstimateResult) -> String {
    Report(result).to_string()
}

pub struct Report<'a>(pub &'a EstimateResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "{REPORT_TITLE}")?;
        writeln!(f, "{}", "=".repeat(REPORT_TITLE.len()))?;
        writeln!(f)?;
        writeln!(f, "Total Monthly Emissions: {:.2} kg CO2e", result.total)?;
        writeln!(f)?;

        writeln!(f, "Emission Breakdown:")?;
        for (category, emission) in result.breakdown.iter() {
            writeln!(f, "- {}: {emission:.2} kg CO2e", category.title())?;
        }
        writeln!(f)?;

        let recommendations = match &result.recommendations {
            Some(recommendations) => recommendations.clone(),
            None => get_recommendations(result.total),
        };

        writeln!(f, "Recommendations:")?;
        if recommendations.is_empty() {
            writeln!(f, "{LOW_EMISSIONS_MESSAGE}")?;
        }
        for recommendation in &recommendations {
            writeln!(f, "- {recommendation}")?;
        }

        if let Some(footprint) = &result.footprint {
            writeln!(f)?;
            writeln!(f, "If everyone lived like you:")?;
            writeln!(f, "- Earths needed: {:.1}x", footprint.earths_needed)?;
            writeln!(
                f,
                "- 2050 temperature rise: +{:.1}°C ({:+.1}°C vs target)",
                footprint.temp_rise,
                footprint.target_delta()
            )?;
            writeln!(f, "- {}", footprint.status.message())?;
            writeln!(
                f,
                "- Resource consumption: {:.0}% of the 5-Earth scale. You are using {:.1}x the renewable resources Earth generates in a year.",
                footprint.resource_share() * 100.0,
                footprint.earths_needed
            )?;
        }

        Ok(())
    }
}
