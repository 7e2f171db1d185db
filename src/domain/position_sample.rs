use crate::domain::GeoPoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    pub point: GeoPoint,
    pub observed_at: DateTime<Utc>,
    // Not interpreted by the monitor, fix quality is filtered upstream
    #[serde(default, rename = "accuracy_m", skip_serializing_if = "Option::is_none")]
    pub accuracy_meters: Option<f64>,
}

impl PositionSample {
    pub fn new(point: GeoPoint, observed_at: DateTime<Utc>) -> Self {
        PositionSample {
            point,
            observed_at,
            accuracy_meters: None,
        }
    }

    pub fn with_accuracy(mut self, accuracy_meters: f64) -> Self {
        self.accuracy_meters = Some(accuracy_meters);
        self
    }
}
