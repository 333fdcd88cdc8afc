//! # CarbonZero Server
//!
//! JSON API in front of the emission [`calculator`].
//!
//!
//!
//! # Endpoints
//!
//! ## `POST /calculate`
//!
//! Body is a JSON object, every field optional.
//! ```json
//! {
//!   "transport_mode": "car_petrol",
//!   "distance": 100,
//!   "electricity_usage": 250,
//!   "diet_type": "vegetarian",
//!   "fuel_type": "lpg",
//!   "fuel_usage": 12
//! }
//! ```
//!
//! - Numbers may also be sent as strings, anything unparseable counts as zero
//! - Unknown transport/diet/fuel keys are priced at the category default
//! - Older form names `electricity`, `diet` and `lpg` are accepted
//!
//! Response has the breakdown, total, units, recommendations and footprint.
//! A body that is not a JSON object gets `400` with `{"error": "..."}`.
//!
//! ## `GET /factors`
//!
//! The loaded emission factors table, for populating selectors.
//!
//!
//!
//! # Configuration
//!
//! | Variable | Default |
//! |----------|---------|
//! | `CARBON_PORT` | `5000` |
//! | `EMISSION_FACTORS_PATH` | `data/emission_factors.json` |
//! | `RUST_LOG` | unset |
//!
//! The factors file is read once at startup. If it is missing the built-in
//! table is used. A malformed file stops the server.
//!
//!
//!
//! # Setup
//!
//! Run locally.
//! ```sh
//! RUST_LOG=info cargo run -p carbon
//! ```
//!
//! Try it.
//! ```sh
//! curl -X POST localhost:5000/calculate \
//!   -H 'Content-Type: application/json' \
//!   -d '{"transport_mode": "bus", "distance": 300}'
//! ```
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use error::AppError;
use routes::{calculate_handler, factors_handler};
use state::State;

pub async fn start_server() -> Result<(), AppError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new()?;

    info!("Starting server...");

    let app = router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/factors", get(factors_handler))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
