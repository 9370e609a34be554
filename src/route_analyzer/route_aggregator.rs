// route_aggregator.rs
//
// Combines per-road class predictions into one route-level verdict. The
// route's class is the mean of its roads' class ordinals pushed through a
// pair of fixed thresholds.

use serde::Serialize;

use crate::error::PredictError;
use crate::route_analyzer::road_predictor::RoadPredictor;
use crate::shared_data::{CongestionClass, CongestionDistribution, RoadObservation};

/// Decision thresholds on the route's ordinal average. These are fixed
/// design constants, not symmetric class boundaries: an average in
/// [0.5, 0.7) is still LOW and one in [1.4, 1.5) is already HIGH, so this
/// must not be replaced with rounding.
const MEDIUM_THRESHOLD: f64 = 0.7;
const HIGH_THRESHOLD: f64 = 1.4;

/// Maps an ordinal average onto a congestion class.
pub fn class_for_average(average: f64) -> CongestionClass {
    if average < MEDIUM_THRESHOLD {
        CongestionClass::Low
    } else if average < HIGH_THRESHOLD {
        CongestionClass::Medium
    } else {
        CongestionClass::High
    }
}

/// Sum of per-road travel times. A missing `time` field deserializes to 0,
/// so the total is independent of the congestion prediction.
pub fn total_route_time(roads: &[RoadObservation]) -> f64 {
    roads.iter().map(|road| road.time).sum()
}

/// Route-level congestion class: mean of per-road ordinals, thresholded.
pub fn aggregate(
    predictor: &RoadPredictor,
    roads: &[RoadObservation],
) -> Result<CongestionClass, PredictError> {
    if roads.is_empty() {
        return Err(PredictError::InvalidInput(
            "route has no roads to aggregate".to_string(),
        ));
    }
    let mut total = 0usize;
    for road in roads {
        total += predictor.predicted_class(road)?.ordinal();
    }
    let average = total as f64 / roads.len() as f64;
    Ok(class_for_average(average))
}

/// One row of the detailed per-road breakdown. A road whose prediction
/// failed carries the literal label "Error" and a reason instead of a
/// distribution.
#[derive(Debug, Clone, Serialize)]
pub struct RoadPredictionRow {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<CongestionDistribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Detailed view of one route: every road's outcome, the route-level
/// verdict, and the summed travel time.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDetail {
    pub individual_predictions: Vec<RoadPredictionRow>,
    pub overall_prediction: String,
    pub total_time: f64,
}

/// Detailed variant of [`aggregate`]. Per-road failures are recorded
/// inline and do not abort the route. The overall class intentionally goes
/// through the plain [`aggregate`] path, which re-predicts every road and
/// knows nothing about rows marked "Error"; when that separate pass fails,
/// the overall label is also reported as "Error". The two passes can
/// therefore disagree about a partially-failing route.
pub fn aggregate_with_detail(
    predictor: &RoadPredictor,
    roads: &[RoadObservation],
) -> Result<RouteDetail, PredictError> {
    if roads.is_empty() {
        return Err(PredictError::InvalidInput(
            "route has no roads to aggregate".to_string(),
        ));
    }

    let mut rows = Vec::with_capacity(roads.len());
    for (index, road) in roads.iter().enumerate() {
        match predictor.predict(road) {
            Ok(distribution) => {
                let class = CongestionClass::from_distribution(&distribution);
                rows.push(RoadPredictionRow {
                    label: class.label().to_string(),
                    distribution: Some(distribution),
                    error: None,
                });
            }
            Err(e) => {
                log::warn!("prediction failed for road {}: {}", index, e);
                let failure = PredictError::RoadPrediction {
                    index,
                    reason: e.to_string(),
                };
                rows.push(RoadPredictionRow {
                    label: "Error".to_string(),
                    distribution: None,
                    error: Some(failure.to_string()),
                });
            }
        }
    }

    let overall = match aggregate(predictor, roads) {
        Ok(class) => class.label().to_string(),
        Err(e) => {
            log::warn!("overall aggregation failed for route: {}", e);
            "Error".to_string()
        }
    };

    Ok(RouteDetail {
        individual_predictions: rows,
        overall_prediction: overall,
        total_time: total_route_time(roads),
    })
}
