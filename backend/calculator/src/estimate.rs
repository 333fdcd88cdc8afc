//! # Emission Estimate
//!
//! Monthly kg CO2e per category:
//! - transport: distance × transport factor
//! - electricity: usage × grid average factor, regardless of input
//! - diet: daily diet factor × 30 days
//! - fuel: usage × fuel factor
use serde::Serialize;

use crate::{
    factors::{Category, EmissionFactors, GRID_AVERAGE},
    footprint::{Footprint, get_ecological_footprint},
    input::{EstimateInput, Variant},
    recommendations::get_recommendations,
};

pub const UNITS: &str = "kg CO2e/month";
pub const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Breakdown {
    pub transport: f64,
    pub electricity: f64,
    pub diet: f64,
    pub fuel: f64,
}

impl Breakdown {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transport => self.transport,
            Category::Electricity => self.electricity,
            Category::Diet => self.diet,
            Category::Fuel => self.fuel,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateResult {
    pub breakdown: Breakdown,
    pub total: f64,
    pub units: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub footprint: Option<Footprint>,
}

pub fn calculate(factors: &EmissionFactors, input: &EstimateInput) -> EstimateResult {
    let electricity_factor = factors.factor(Category::Electricity, Some(GRID_AVERAGE));

    let breakdown = Breakdown {
        transport: input.distance * input.transport_mode.factor(factors),
        electricity: input.electricity_usage * electricity_factor,
        diet: input.diet_type.factor(factors) * DAYS_PER_MONTH,
        fuel: input.fuel_usage * input.fuel_type.factor(factors),
    };

    EstimateResult {
        total: breakdown.total(),
        breakdown,
        units: UNITS,
        recommendations: None,
        footprint: None,
    }
}

/// Estimate plus recommendations and footprint, what the front ends display.
pub fn assess(factors: &EmissionFactors, input: &EstimateInput) -> EstimateResult {
    let mut result = calculate(factors, input);

    result.recommendations = Some(get_recommendations(result.total));
    result.footprint = Some(get_ecological_footprint(result.total));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{DietType, FuelType, TransportMode};

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    fn table() -> EmissionFactors {
        serde_json::from_str(
            r#"{
                "transport": {"car_petrol": 0.192, "bus": 0.105},
                "electricity": {"grid_avg": 0.82},
                "diet": {"vegetarian": 1.7, "heavy_meat": 3.3},
                "fuel": {"lpg": 2.983, "coal": 2.42}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn empty_input_is_a_vegetarian_month() {
        let result = calculate(&EmissionFactors::builtin(), &EstimateInput::default());

        assert_eq!(result.breakdown.transport, 0.0);
        assert_eq!(result.breakdown.electricity, 0.0);
        assert_eq!(result.breakdown.fuel, 0.0);
        assert!(close(result.breakdown.diet, 51.0));
        assert!(close(result.total, 51.0));
        assert_eq!(result.units, "kg CO2e/month");
        assert!(result.recommendations.is_none());
        assert!(result.footprint.is_none());
    }

    #[test]
    fn petrol_car_distance() {
        let input = EstimateInput {
            distance: 100.0,
            transport_mode: TransportMode::CarPetrol,
            ..Default::default()
        };

        let result = calculate(&table(), &input);

        assert!(close(result.breakdown.transport, 19.2));
    }

    #[test]
    fn every_category_contributes() {
        let input = EstimateInput {
            transport_mode: TransportMode::Bus,
            distance: 200.0,
            electricity_usage: 300.0,
            diet_type: DietType::HeavyMeat,
            fuel_type: FuelType::Coal,
            fuel_usage: 10.0,
        };

        let result = calculate(&table(), &input);

        assert!(close(result.breakdown.transport, 21.0));
        assert!(close(result.breakdown.electricity, 246.0));
        assert!(close(result.breakdown.diet, 99.0));
        assert!(close(result.breakdown.fuel, 24.2));
        assert!(close(result.total, 21.0 + 246.0 + 99.0 + 24.2));
    }

    #[test]
    fn unknown_variants_use_default_factors() {
        let input = EstimateInput {
            transport_mode: TransportMode::Other,
            distance: 10.0,
            diet_type: DietType::Other,
            fuel_type: FuelType::Other,
            fuel_usage: 1.0,
            ..Default::default()
        };

        let result = calculate(&table(), &input);

        assert!(close(result.breakdown.transport, 1.92));
        assert!(close(result.breakdown.diet, 51.0));
        assert!(close(result.breakdown.fuel, 2.983));
    }

    #[test]
    fn known_variant_missing_from_table_uses_default() {
        let input = EstimateInput {
            transport_mode: TransportMode::Flight,
            distance: 1000.0,
            ..Default::default()
        };

        let result = calculate(&table(), &input);

        assert!(close(result.breakdown.transport, 192.0));
    }

    #[test]
    fn monotonic_in_distance() {
        let factors = table();
        let mut previous = f64::MIN;

        for distance in [0.0, 0.5, 1.0, 10.0, 250.0, 1e6] {
            let input = EstimateInput {
                distance,
                ..Default::default()
            };
            let total = calculate(&factors, &input).total;

            assert!(total >= previous);
            previous = total;
        }
    }

    #[test]
    fn calculate_is_pure() {
        let factors = table();
        let input = EstimateInput {
            distance: 42.0,
            electricity_usage: 17.5,
            ..Default::default()
        };

        assert_eq!(calculate(&factors, &input), calculate(&factors, &input));
    }

    #[test]
    fn assess_attaches_recommendations_and_footprint() {
        let input = EstimateInput {
            electricity_usage: 1000.0,
            ..Default::default()
        };

        let result = assess(&table(), &input);

        assert_eq!(result.recommendations.as_ref().map(Vec::len), Some(2));
        assert!(result.footprint.is_some());

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["recommendations"].is_array());
        assert!(json["footprint"]["earths_needed"].is_number());
    }

    #[test]
    fn bare_estimate_omits_optional_fields() {
        let result = calculate(&table(), &EstimateInput::default());
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("recommendations").is_none());
        assert!(json.get("footprint").is_none());
        assert_eq!(json["breakdown"].as_object().unwrap().len(), 4);
    }
}
