// End-to-end checks over the library surface: artifacts loaded through the
// model store, routes aggregated and compared the way the HTTP handlers
// drive them.

use std::fs;
use std::path::PathBuf;

use traffic_predictor::error::PredictError;
use traffic_predictor::inference::model_store::ModelStore;
use traffic_predictor::route_analyzer::{place_validator, route_aggregator, route_comparator};
use traffic_predictor::shared_data::{RoadObservation, RouteMap};

fn artifact_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("traffic_predictor_pipeline_test")
        .join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes a scaler plus a zero-weight model whose prediction is the argmax
/// of `dense_bias`, which makes route-level expectations exact.
fn write_artifacts(dir: &PathBuf, dense_bias: [f64; 3]) -> (PathBuf, PathBuf) {
    let scaler_path = dir.join("scaler.json");
    let model_path = dir.join("traffic_lstm.json");
    fs::write(
        &scaler_path,
        r#"{"mean":[11.5,3.0,34.2,177.5],"scale":[6.9,2.0,11.8,83.1]}"#,
    )
    .unwrap();
    let units = 2;
    let gates = 4 * units;
    let model = serde_json::json!({
        "units": units,
        "kernel": vec![vec![0.0; gates]; 4],
        "recurrent_kernel": vec![vec![0.0; gates]; units],
        "bias": vec![0.0; gates],
        "dense_kernel": vec![vec![0.0; 3]; units],
        "dense_bias": dense_bias,
    });
    fs::write(&model_path, model.to_string()).unwrap();
    (model_path, scaler_path)
}

fn road(hour: f64, day: f64, speed: f64, vehicles: f64) -> RoadObservation {
    RoadObservation {
        hour,
        day,
        speed,
        vehicles,
        time: 0.0,
    }
}

#[test]
fn mumbai_route_predicts_low_with_zero_total_time() {
    let dir = artifact_dir("mumbai_low");
    let (model_path, scaler_path) = write_artifacts(&dir, [2.0, 0.0, 0.0]);
    let store = ModelStore::new(model_path, scaler_path);
    let predictor = store.get_or_load().unwrap();

    let mut routes = RouteMap::new();
    routes.insert(
        "Mumbai Route".to_string(),
        vec![road(10.0, 2.0, 35.0, 150.0), road(10.0, 2.0, 30.0, 180.0)],
    );

    assert_eq!(place_validator::first_unrecognized_route(&routes), None);

    let detail =
        route_aggregator::aggregate_with_detail(&predictor, &routes["Mumbai Route"]).unwrap();
    assert_eq!(detail.individual_predictions.len(), 2);
    for row in &detail.individual_predictions {
        assert_eq!(row.label, "LOW");
        let distribution = row.distribution.unwrap();
        let sum: f64 = distribution.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
    assert_eq!(detail.overall_prediction, "LOW");
    // No `time` fields in the payload, so the total is zero.
    assert_eq!(detail.total_time, 0.0);
}

#[test]
fn unrecognized_route_name_short_circuits_validation() {
    let mut routes = RouteMap::new();
    routes.insert("Route via Mumbai".to_string(), vec![road(10.0, 2.0, 35.0, 150.0)]);
    routes.insert("Route via Atlantis".to_string(), vec![road(10.0, 2.0, 35.0, 150.0)]);
    assert_eq!(
        place_validator::first_unrecognized_route(&routes),
        Some("Route via Atlantis")
    );
}

#[test]
fn available_routes_totals_match_travel_times() {
    let mut routes = RouteMap::new();
    routes.insert(
        "Route1".to_string(),
        vec![
            RoadObservation { time: 3.0, ..road(10.0, 2.0, 35.0, 150.0) },
            RoadObservation { time: 4.0, ..road(10.0, 2.0, 30.0, 180.0) },
        ],
    );
    routes.insert(
        "Route2".to_string(),
        vec![RoadObservation { time: 5.0, ..road(11.0, 2.0, 40.0, 120.0) }],
    );

    let comparison = route_comparator::compare(&routes).unwrap();
    assert_eq!(comparison.route_details["Route1"].total_time, 7.0);
    assert_eq!(comparison.route_details["Route1"].number_of_roads, 2);
    assert_eq!(comparison.route_details["Route2"].total_time, 5.0);
    assert_eq!(comparison.route_details["Route2"].number_of_roads, 1);
    assert_eq!(comparison.optimal_route.name, "Route2");
}

#[test]
fn empty_routes_mapping_is_rejected_before_any_prediction() {
    let routes = RouteMap::new();
    let err = route_comparator::compare(&routes).unwrap_err();
    assert!(matches!(err, PredictError::InvalidInput(_)));
}

#[test]
fn shipped_artifact_format_parses_and_predicts() {
    // The repo's own artifacts must load through the same path the server
    // uses and produce a normalized distribution.
    let model_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("model/traffic_lstm.json");
    let scaler_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("model/scaler.json");
    let store = ModelStore::new(model_path, scaler_path);
    let predictor = store.get_or_load().unwrap();
    let distribution = predictor.predict(&road(10.0, 2.0, 35.0, 150.0)).unwrap();
    let sum: f64 = distribution.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert!(distribution.iter().all(|&p| p >= 0.0));
}
