// scaler.rs
//
// Feature-scaling artifact exported alongside the trained model. The
// scaler was fitted on the four training features (hour, day, speed,
// vehicles) and is applied to every observation before inference.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::PredictError;

/// Standard-score scaler: `scaled = (raw - mean) / scale` per feature.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureScaler {
    pub mean: [f64; 4],
    pub scale: [f64; 4],
}

impl FeatureScaler {
    /// Loads the scaler artifact from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, PredictError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            PredictError::ModelUnavailable(format!(
                "cannot read scaler artifact {}: {}",
                path.display(),
                e
            ))
        })?;
        let scaler: FeatureScaler = serde_json::from_str(&raw).map_err(|e| {
            PredictError::ModelUnavailable(format!(
                "cannot parse scaler artifact {}: {}",
                path.display(),
                e
            ))
        })?;
        for (i, &s) in scaler.scale.iter().enumerate() {
            if s == 0.0 || !s.is_finite() {
                return Err(PredictError::ModelUnavailable(format!(
                    "scaler artifact has degenerate scale {} for feature {}",
                    s, i
                )));
            }
        }
        Ok(scaler)
    }

    /// Normalizes one raw feature tuple to the range the model was trained on.
    /// No range validation happens here; out-of-distribution values are
    /// scaled and fed through like any other.
    pub fn transform(&self, raw: [f64; 4]) -> [f64; 4] {
        let mut scaled = [0.0; 4];
        for i in 0..4 {
            scaled[i] = (raw[i] - self.mean[i]) / self.scale[i];
        }
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_centers_and_scales_each_feature() {
        let scaler = FeatureScaler {
            mean: [12.0, 3.0, 30.0, 200.0],
            scale: [6.0, 2.0, 10.0, 100.0],
        };
        let scaled = scaler.transform([18.0, 3.0, 20.0, 350.0]);
        assert_eq!(scaled, [1.0, 0.0, -1.0, 1.5]);
    }

    #[test]
    fn load_rejects_zero_scale() {
        let dir = std::env::temp_dir().join("traffic_predictor_scaler_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("degenerate_scaler.json");
        std::fs::write(&path, r#"{"mean":[0,0,0,0],"scale":[1,0,1,1]}"#).unwrap();
        let err = FeatureScaler::load(&path).unwrap_err();
        assert!(matches!(err, PredictError::ModelUnavailable(_)));
    }

    #[test]
    fn load_reports_missing_file_as_model_unavailable() {
        let err =
            FeatureScaler::load(Path::new("/nonexistent/scaler.json")).unwrap_err();
        assert!(matches!(err, PredictError::ModelUnavailable(_)));
    }
}
