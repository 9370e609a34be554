// inference/mod.rs
pub mod classifier;
pub mod model_store;
pub mod scaler;
