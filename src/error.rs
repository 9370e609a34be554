// src/error.rs

use thiserror::Error;

/// Closed set of failures the service reports to clients. The display
/// strings here are the only error text that ever reaches a response
/// payload; internal panics or IO details stay in the logs.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The model or scaler artifact failed to load.
    #[error("prediction model is unavailable: {0}")]
    ModelUnavailable(String),

    /// Malformed request shape: empty routes mapping, empty road list,
    /// or a feature value the model cannot consume.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Route name does not contain any recognized place.
    #[error("route '{0}' does not reference a recognized place")]
    InvalidPlaceName(String),

    /// A single road's prediction failed; callers record this inline
    /// rather than aborting the surrounding route.
    #[error("prediction failed for road {index}: {reason}")]
    RoadPrediction { index: usize, reason: String },
}
