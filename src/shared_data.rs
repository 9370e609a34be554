// src/shared_data.rs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Class labels in ordinal order, matching the trained model's output head.
pub const CLASS_LABELS: [&str; 3] = ["LOW", "MEDIUM", "HIGH"];

/// Feature names in the order the scaler and model were fitted on.
pub const FEATURE_NAMES: [&str; 4] = ["hour", "day", "speed", "vehicles"];

/// A single measured road segment inside a route.
///
/// `day` uses whatever day-of-week encoding the model was trained with;
/// it is passed through to the scaler without validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoadObservation {
    pub hour: f64,
    pub day: f64,
    pub speed: f64,
    pub vehicles: f64,
    /// Travel-time contribution of this segment; most payloads omit it.
    #[serde(default)]
    pub time: f64,
}

impl RoadObservation {
    /// The raw feature tuple in model input order.
    pub fn features(&self) -> [f64; 4] {
        [self.hour, self.day, self.speed, self.vehicles]
    }
}

/// Probability distribution over the three congestion classes,
/// indexed by class ordinal.
pub type CongestionDistribution = [f64; 3];

/// Congestion level for a road or route, ordered LOW < MEDIUM < HIGH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CongestionClass {
    Low,
    Medium,
    High,
}

impl CongestionClass {
    /// Integer index used when averaging classes across a route.
    pub fn ordinal(self) -> usize {
        match self {
            CongestionClass::Low => 0,
            CongestionClass::Medium => 1,
            CongestionClass::High => 2,
        }
    }

    pub fn label(self) -> &'static str {
        CLASS_LABELS[self.ordinal()]
    }

    /// Arg-max of a class distribution. Ties resolve to the lowest ordinal,
    /// so `[0.5, 0.5, 0.0]` maps to LOW.
    pub fn from_distribution(distribution: &CongestionDistribution) -> Self {
        let mut best = 0;
        for i in 1..3 {
            if distribution[i] > distribution[best] {
                best = i;
            }
        }
        match best {
            0 => CongestionClass::Low,
            1 => CongestionClass::Medium,
            _ => CongestionClass::High,
        }
    }
}

/// Routes as they arrive on the wire: name -> ordered road list.
/// `IndexMap` keeps the JSON object order, which tie-breaking in the
/// route comparator depends on.
pub type RouteMap = IndexMap<String, Vec<RoadObservation>>;
