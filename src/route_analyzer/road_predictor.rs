// road_predictor.rs
//
// Scores one road segment: scale the raw features, feed them through the
// classifier as a one-timestep sequence, and expose either the full class
// distribution or the arg-max class.

use crate::error::PredictError;
use crate::inference::classifier::CongestionClassifier;
use crate::inference::scaler::FeatureScaler;
use crate::shared_data::{
    CongestionClass, CongestionDistribution, RoadObservation, FEATURE_NAMES,
};

pub struct RoadPredictor {
    scaler: FeatureScaler,
    classifier: CongestionClassifier,
}

impl RoadPredictor {
    pub fn new(scaler: FeatureScaler, classifier: CongestionClassifier) -> Self {
        Self { scaler, classifier }
    }

    /// Full class distribution for one road.
    pub fn predict(
        &self,
        road: &RoadObservation,
    ) -> Result<CongestionDistribution, PredictError> {
        let features = road.features();
        for (i, value) in features.iter().enumerate() {
            if !value.is_finite() {
                return Err(PredictError::InvalidInput(format!(
                    "feature '{}' is not a finite number",
                    FEATURE_NAMES[i]
                )));
            }
        }
        let scaled = self.scaler.transform(features);
        // The model was trained on sequences; a single observation is the
        // one-timestep case.
        Ok(self.classifier.classify(std::slice::from_ref(&scaled)))
    }

    /// Arg-max class for one road; ties resolve to the lowest ordinal.
    pub fn predicted_class(
        &self,
        road: &RoadObservation,
    ) -> Result<CongestionClass, PredictError> {
        Ok(CongestionClass::from_distribution(&self.predict(road)?))
    }
}
