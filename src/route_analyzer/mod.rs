// route_analyzer/mod.rs
pub mod place_validator;
pub mod road_predictor;
pub mod route_aggregator;
pub mod route_comparator;
