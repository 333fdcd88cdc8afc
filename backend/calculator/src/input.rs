//! # Estimate Input
//!
//! User-reported monthly quantities.
//!
//! ## Coercion
//!
//! Front ends send whatever the user typed, so nothing here rejects a value:
//! - Quantities: missing, null, empty, `false`, negative, non-finite, or
//!   unparseable all become `0.0`. Numeric strings are trimmed and parsed.
//! - Variant keys: a missing key takes the category's default variant. Any
//!   other unrecognized value (unknown string, null, number) becomes `Other`,
//!   which is priced at the category default factor.
//!
//! The older form field names `electricity`, `diet` and `lpg` are accepted
//! as aliases.
use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::IgnoredAny,
};

use crate::factors::{Category, EmissionFactors};

/// Closed set of variant keys for one category.
pub trait Variant: Copy + PartialEq + 'static {
    const CATEGORY: Category;
    const KNOWN: &'static [Self];
    const OTHER: Self;

    /// Table key, `None` for the fallback variant.
    fn key(self) -> Option<&'static str>;

    fn from_key(key: &str) -> Self {
        Self::KNOWN
            .iter()
            .copied()
            .find(|variant| variant.key() == Some(key))
            .unwrap_or(Self::OTHER)
    }

    fn factor(self, factors: &EmissionFactors) -> f64 {
        factors.factor(Self::CATEGORY, self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransportMode {
    #[default]
    CarPetrol,
    CarDiesel,
    Bus,
    Train,
    Flight,
    Other,
}

impl Variant for TransportMode {
    const CATEGORY: Category = Category::Transport;
    const KNOWN: &'static [Self] = &[
        Self::CarPetrol,
        Self::CarDiesel,
        Self::Bus,
        Self::Train,
        Self::Flight,
    ];
    const OTHER: Self = Self::Other;

    fn key(self) -> Option<&'static str> {
        match self {
            Self::CarPetrol => Some("car_petrol"),
            Self::CarDiesel => Some("car_diesel"),
            Self::Bus => Some("bus"),
            Self::Train => Some("train"),
            Self::Flight => Some("flight"),
            Self::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DietType {
    HeavyMeat,
    MediumMeat,
    LowMeat,
    #[default]
    Vegetarian,
    Vegan,
    Other,
}

impl Variant for DietType {
    const CATEGORY: Category = Category::Diet;
    const KNOWN: &'static [Self] = &[
        Self::HeavyMeat,
        Self::MediumMeat,
        Self::LowMeat,
        Self::Vegetarian,
        Self::Vegan,
    ];
    const OTHER: Self = Self::Other;

    fn key(self) -> Option<&'static str> {
        match self {
            Self::HeavyMeat => Some("heavy_meat"),
            Self::MediumMeat => Some("medium_meat"),
            Self::LowMeat => Some("low_meat"),
            Self::Vegetarian => Some("vegetarian"),
            Self::Vegan => Some("vegan"),
            Self::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FuelType {
    #[default]
    Lpg,
    NaturalGas,
    Coal,
    Other,
}

impl Variant for FuelType {
    const CATEGORY: Category = Category::Fuel;
    const KNOWN: &'static [Self] = &[Self::Lpg, Self::NaturalGas, Self::Coal];
    const OTHER: Self = Self::Other;

    fn key(self) -> Option<&'static str> {
        match self {
            Self::Lpg => Some("lpg"),
            Self::NaturalGas => Some("natural_gas"),
            Self::Coal => Some("coal"),
            Self::Other => None,
        }
    }
}

macro_rules! display_variant {
    ($($variant:ty),*) => {
        $(
            impl fmt::Display for $variant {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.key().unwrap_or("other"))
                }
            }
        )*
    };
}

display_variant!(TransportMode, DietType, FuelType);

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct EstimateInput {
    #[serde(default, deserialize_with = "lenient_variant")]
    pub transport_mode: TransportMode,

    /// km per month
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub distance: f64,

    /// kWh per month
    #[serde(default, alias = "electricity", deserialize_with = "lenient_quantity")]
    pub electricity_usage: f64,

    #[serde(default, alias = "diet", deserialize_with = "lenient_variant")]
    pub diet_type: DietType,

    #[serde(default, deserialize_with = "lenient_variant")]
    pub fuel_type: FuelType,

    /// kg or m³ per month
    #[serde(default, alias = "lpg", deserialize_with = "lenient_quantity")]
    pub fuel_usage: f64,
}

/// Coerce free text into a non-negative quantity, `0.0` when it is not one.
pub fn parse_quantity(text: &str) -> f64 {
    text.trim().parse().map(non_negative).unwrap_or(0.0)
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Number(f64),
    Text(String),
    Flag(bool),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Text(String),
    Other(IgnoredAny),
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawQuantity::deserialize(deserializer)? {
        RawQuantity::Number(value) => non_negative(value),
        RawQuantity::Text(text) => parse_quantity(&text),
        RawQuantity::Flag(flag) => f64::from(u8::from(flag)),
        RawQuantity::Other(_) => 0.0,
    })
}

fn lenient_variant<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    V: Variant,
{
    Ok(match RawKey::deserialize(deserializer)? {
        RawKey::Text(key) => V::from_key(&key),
        RawKey::Other(_) => V::OTHER,
    })
}
