// api/mod.rs
//
// HTTP surface of the service: JSON in, JSON out. Handlers translate
// payloads to and from the route-analyzer core; every error leaves as a
// structured `{"error": ...}` payload.

pub mod handlers;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::error::PredictError;
use crate::inference::model_store::ModelStore;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub models: Arc<ModelStore>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/predict", post(handlers::predict))
        .route("/predict-route", post(handlers::predict_route))
        .route("/predict-route-details", post(handlers::predict_route_details))
        .route("/available-routes", post(handlers::available_routes))
        .route("/optimal-route", post(handlers::optimal_route))
        .with_state(state)
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        let status = match &self {
            PredictError::ModelUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PredictError::InvalidInput(_)
            | PredictError::InvalidPlaceName(_)
            | PredictError::RoadPrediction { .. } => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
