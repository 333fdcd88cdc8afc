use std::sync::Arc;

use axum::{
    Json,
    extract::{State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use calculator::{EstimateInput, assess};
use serde_json::Value;
use tracing::debug;

use crate::{error::AppError, state::State};

pub async fn calculate_handler(
    AxumState(state): AxumState<Arc<State>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::MalformedPayload(e.body_text()))?;
    let input = parse_input(payload)?;

    let result = assess(&state.factors, &input);
    debug!("Estimated {:.2} {} for {input:?}", result.total, result.units);

    Ok((StatusCode::OK, Json(result)))
}

pub async fn factors_handler(AxumState(state): AxumState<Arc<State>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.factors.clone()))
}

fn parse_input(payload: Value) -> Result<EstimateInput, AppError> {
    if !payload.is_object() {
        return Err(AppError::MalformedPayload(
            "expected a JSON object".to_string(),
        ));
    }

    serde_json::from_value(payload).map_err(|e| AppError::MalformedPayload(e.to_string()))
}
