//! # Emission Factors
//!
//! Coefficients table, kg CO2e per unit of activity.
//!
//! ## Layout
//!
//! - One map per category: `transport`, `electricity`, `diet`, `fuel`
//! - Each map goes from a variant key (`car_petrol`, `grid_avg`, ...) to a factor
//! - Transport is per km, electricity per kWh, diet per day, fuel per kg or m³
//!
//! ## Lookup
//!
//! Lookups never fail. A key missing from the table, or an input that did not
//! name a known variant, falls back to the category default below.
//!
//! A table may only hold keys an input can name: the known transport, diet and
//! fuel variants, and `grid_avg` for electricity. Anything else is rejected at
//! load, so the published table and the priced table agree.
use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    error::FactorsError,
    input::{DietType, FuelType, TransportMode, Variant},
};

pub const DEFAULT_TRANSPORT_FACTOR: f64 = 0.192;
pub const DEFAULT_ELECTRICITY_FACTOR: f64 = 0.82;
pub const DEFAULT_DIET_FACTOR: f64 = 1.7;
pub const DEFAULT_FUEL_FACTOR: f64 = 2.983;

pub const GRID_AVERAGE: &str = "grid_avg";
pub const DEFAULT_FACTORS_PATH: &str = "data/emission_factors.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transport,
    Electricity,
    Diet,
    Fuel,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Transport,
        Category::Electricity,
        Category::Diet,
        Category::Fuel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Electricity => "electricity",
            Category::Diet => "diet",
            Category::Fuel => "fuel",
        }
    }

    pub fn default_factor(self) -> f64 {
        match self {
            Category::Transport => DEFAULT_TRANSPORT_FACTOR,
            Category::Electricity => DEFAULT_ELECTRICITY_FACTOR,
            Category::Diet => DEFAULT_DIET_FACTOR,
            Category::Fuel => DEFAULT_FUEL_FACTOR,
        }
    }

    /// Table keys an input can select.
    pub fn known_keys(self) -> Vec<&'static str> {
        match self {
            Category::Transport => variant_keys::<TransportMode>(),
            Category::Electricity => vec![GRID_AVERAGE],
            Category::Diet => variant_keys::<DietType>(),
            Category::Fuel => variant_keys::<FuelType>(),
        }
    }

    /// Capitalized name for reports.
    pub fn title(self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Electricity => "Electricity",
            Category::Diet => "Diet",
            Category::Fuel => "Fuel",
        }
    }
}

fn variant_keys<V: Variant>() -> Vec<&'static str> {
    V::KNOWN.iter().filter_map(|variant| variant.key()).collect()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only coefficients table. Built once at startup and shared by reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    #[serde(default)]
    pub transport: BTreeMap<String, f64>,
    #[serde(default)]
    pub electricity: BTreeMap<String, f64>,
    #[serde(default)]
    pub diet: BTreeMap<String, f64>,
    #[serde(default)]
    pub fuel: BTreeMap<String, f64>,
}

impl EmissionFactors {
    /// Fallback table used when no factors file is present.
    pub fn builtin() -> Self {
        Self {
            transport: BTreeMap::from([("car_petrol".to_string(), DEFAULT_TRANSPORT_FACTOR)]),
            electricity: BTreeMap::from([(GRID_AVERAGE.to_string(), DEFAULT_ELECTRICITY_FACTOR)]),
            diet: BTreeMap::from([("vegetarian".to_string(), DEFAULT_DIET_FACTOR)]),
            fuel: BTreeMap::from([("lpg".to_string(), DEFAULT_FUEL_FACTOR)]),
        }
    }

    pub fn category(&self, category: Category) -> &BTreeMap<String, f64> {
        match category {
            Category::Transport => &self.transport,
            Category::Electricity => &self.electricity,
            Category::Diet => &self.diet,
            Category::Fuel => &self.fuel,
        }
    }

    /// Factor for `key` in `category`, or the category default when `key` is
    /// `None` or not in the table.
    pub fn factor(&self, category: Category, key: Option<&str>) -> f64 {
        key.and_then(|key| self.category(category).get(key))
            .copied()
            .unwrap_or_else(|| category.default_factor())
    }

    pub fn validate(&self) -> Result<(), FactorsError> {
        for category in Category::ALL {
            let known_keys = category.known_keys();

            for (key, &value) in self.category(category) {
                if !known_keys.contains(&key.as_str()) {
                    return Err(FactorsError::UnknownKey {
                        category,
                        key: key.clone(),
                    });
                }
                if !value.is_finite() || value < 0.0 {
                    return Err(FactorsError::InvalidFactor {
                        category,
                        key: key.clone(),
                        value,
                    });
                }
            }
        }

        Ok(())
    }
}
