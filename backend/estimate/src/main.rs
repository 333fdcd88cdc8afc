//! estimate - print a carbon footprint report from the command line.
use std::path::PathBuf;

use anyhow::{Context, Result};
use calculator::{
    DEFAULT_FACTORS_PATH, DietType, EstimateInput, FuelType, TransportMode, Variant, assess,
    load_factors, parse_quantity, render_report,
};
use clap::Parser;
use tracing::{Level, debug, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// car_petrol, car_diesel, bus, train or flight
    #[arg(long, default_value = "car_petrol")]
    transport_mode: String,

    /// Distance travelled (km/month)
    #[arg(long, default_value = "0")]
    distance: String,

    /// Electricity usage (kWh/month)
    #[arg(long, default_value = "0")]
    electricity: String,

    /// heavy_meat, medium_meat, low_meat, vegetarian or vegan
    #[arg(long, default_value = "vegetarian")]
    diet: String,

    /// lpg, natural_gas or coal
    #[arg(long, default_value = "lpg")]
    fuel_type: String,

    /// Fuel usage (kg or m³/month)
    #[arg(long, default_value = "0")]
    fuel_usage: String,

    /// Path to the emission factors file
    #[arg(long, default_value = DEFAULT_FACTORS_PATH)]
    factors: PathBuf,

    /// Print the JSON result instead of the report
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn input(&self) -> EstimateInput {
        EstimateInput {
            transport_mode: variant(&self.transport_mode),
            distance: parse_quantity(&self.distance),
            electricity_usage: parse_quantity(&self.electricity),
            diet_type: variant::<DietType>(&self.diet),
            fuel_type: variant::<FuelType>(&self.fuel_type),
            fuel_usage: parse_quantity(&self.fuel_usage),
        }
    }
}

fn variant<V: Variant>(key: &str) -> V {
    let variant = V::from_key(key);

    if variant == V::OTHER {
        warn!("Unknown {} option {key:?}, using the default factor", V::CATEGORY);
    }

    variant
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set subscriber: {e}");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let factors = load_factors(&args.factors)
        .with_context(|| format!("Failed to load emission factors from {:?}", args.factors))?;

    let input = args.input();
    debug!("Input: {input:?}");

    let result = assess(&factors, &input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&result));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_an_empty_request() {
        let args = Args::parse_from(["estimate"]);

        assert_eq!(args.input(), EstimateInput::default());
        assert_eq!(args.factors, PathBuf::from(DEFAULT_FACTORS_PATH));
    }

    #[test]
    fn flags_build_the_input() {
        let args = Args::parse_from([
            "estimate",
            "--transport-mode",
            "train",
            "--distance",
            "400",
            "--electricity",
            "abc",
            "--diet",
            "vegan",
            "--fuel-type",
            "coal",
            "--fuel-usage",
            "3.5",
        ]);

        let input = args.input();

        assert_eq!(input.transport_mode, TransportMode::Train);
        assert_eq!(input.distance, 400.0);
        assert_eq!(input.electricity_usage, 0.0);
        assert_eq!(input.diet_type, DietType::Vegan);
        assert_eq!(input.fuel_type, FuelType::Coal);
        assert_eq!(input.fuel_usage, 3.5);
    }

    #[test]
    fn unknown_option_falls_back() {
        let args = Args::parse_from(["estimate", "--transport-mode", "rocket"]);

        assert_eq!(args.input().transport_mode, TransportMode::Other);
    }
}
