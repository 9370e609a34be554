// model_store.rs
//
// Process-wide, lazily-initialized scaler + model pair. The first request
// pays for the artifact load; everyone after that shares the loaded
// predictor. First-time initialization is a check-then-act race, so the
// slot lives behind a mutex: concurrent first callers block until the one
// load finishes. A failed load leaves the slot empty, so a later request
// retries instead of serving a cached failure.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::PredictError;
use crate::inference::classifier::CongestionClassifier;
use crate::inference::scaler::FeatureScaler;
use crate::route_analyzer::road_predictor::RoadPredictor;

pub struct ModelStore {
    model_path: PathBuf,
    scaler_path: PathBuf,
    loaded: Mutex<Option<Arc<RoadPredictor>>>,
}

impl ModelStore {
    pub fn new(model_path: PathBuf, scaler_path: PathBuf) -> Self {
        Self {
            model_path,
            scaler_path,
            loaded: Mutex::new(None),
        }
    }

    /// Returns the shared predictor, loading both artifacts on first use.
    pub fn get_or_load(&self) -> Result<Arc<RoadPredictor>, PredictError> {
        let mut slot = self.loaded.lock().map_err(|_| {
            PredictError::ModelUnavailable("model store lock is poisoned".to_string())
        })?;
        if let Some(predictor) = slot.as_ref() {
            return Ok(Arc::clone(predictor));
        }

        log::info!(
            "loading scaler from {} and model from {}",
            self.scaler_path.display(),
            self.model_path.display()
        );
        let scaler = FeatureScaler::load(&self.scaler_path)?;
        let classifier = CongestionClassifier::load(&self.model_path)?;
        let predictor = Arc::new(RoadPredictor::new(scaler, classifier));
        *slot = Some(Arc::clone(&predictor));
        log::info!("model artifacts loaded");
        Ok(predictor)
    }
}
