// handlers.rs

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::AppState;
use crate::error::PredictError;
use crate::route_analyzer::{place_validator, route_aggregator, route_comparator};
use crate::shared_data::{RoadObservation, RouteMap};

/// Landing page with the map UI; everything else on it talks JSON to the
/// endpoints below.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub hour: f64,
    pub day: f64,
    pub speed: f64,
    pub vehicles: f64,
}

/// `POST /predict` — congestion class for a single road.
pub async fn predict(
    State(state): State<AppState>,
    Json(body): Json<PredictRequest>,
) -> Result<Json<Value>, PredictError> {
    let predictor = state.models.get_or_load()?;
    let road = RoadObservation {
        hour: body.hour,
        day: body.day,
        speed: body.speed,
        vehicles: body.vehicles,
        time: 0.0,
    };
    let class = predictor.predicted_class(&road)?;
    log::info!(
        "predicted {} for road (hour={}, day={}, speed={}, vehicles={})",
        class.label(),
        body.hour,
        body.day,
        body.speed,
        body.vehicles
    );
    Ok(Json(json!({ "prediction": class.label() })))
}

#[derive(Debug, Deserialize)]
pub struct RoutesRequest {
    pub routes: RouteMap,
}

fn require_routes(routes: &RouteMap) -> Result<(), PredictError> {
    if routes.is_empty() {
        return Err(PredictError::InvalidInput(
            "routes mapping is missing or empty".to_string(),
        ));
    }
    Ok(())
}

/// `POST /predict-route` — one congestion class per named route.
pub async fn predict_route(
    State(state): State<AppState>,
    Json(body): Json<RoutesRequest>,
) -> Result<Json<IndexMap<String, &'static str>>, PredictError> {
    require_routes(&body.routes)?;
    let predictor = state.models.get_or_load()?;
    let mut results = IndexMap::new();
    for (name, roads) in &body.routes {
        let class = route_aggregator::aggregate(&predictor, roads)?;
        results.insert(name.clone(), class.label());
    }
    Ok(Json(results))
}

/// `POST /predict-route-details` — per-road breakdown plus the route-level
/// verdict and total travel time. Route names are validated against the
/// place allow-list before any prediction runs; the first unknown name
/// aborts the whole request.
pub async fn predict_route_details(
    State(state): State<AppState>,
    Json(body): Json<RoutesRequest>,
) -> Result<Json<Value>, PredictError> {
    require_routes(&body.routes)?;
    if let Some(bad_route) = place_validator::first_unrecognized_route(&body.routes) {
        log::info!("rejecting request: unrecognized place in route '{}'", bad_route);
        return Err(PredictError::InvalidPlaceName(bad_route.to_string()));
    }

    let predictor = state.models.get_or_load()?;
    let mut route_details = IndexMap::new();
    for (name, roads) in &body.routes {
        let detail = route_aggregator::aggregate_with_detail(&predictor, roads)?;
        route_details.insert(name.clone(), detail);
    }
    Ok(Json(json!({ "route_details": route_details })))
}

/// `POST /available-routes` — travel-time summary per route. Does not
/// touch the model at all.
pub async fn available_routes(
    Json(body): Json<RoutesRequest>,
) -> Result<Json<Value>, PredictError> {
    let comparison = route_comparator::compare(&body.routes)?;
    Ok(Json(json!({ "available_routes": comparison.route_details })))
}

/// `POST /optimal-route` — full detail for every route plus the fastest
/// route singled out.
pub async fn optimal_route(
    Json(body): Json<RoutesRequest>,
) -> Result<Json<Value>, PredictError> {
    let comparison = route_comparator::compare(&body.routes)?;
    let mut route_details = IndexMap::new();
    for (name, roads) in &body.routes {
        let summary = &comparison.route_details[name.as_str()];
        route_details.insert(
            name.clone(),
            json!({
                "total_time": summary.total_time,
                "number_of_roads": summary.number_of_roads,
                "roads": roads,
            }),
        );
    }
    log::info!(
        "optimal route '{}' with total time {}",
        comparison.optimal_route.name,
        comparison.optimal_route.total_time
    );
    Ok(Json(json!({
        "route_details": route_details,
        "optimal_route": comparison.optimal_route,
    })))
}
