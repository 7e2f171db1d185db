use crate::domain::PositionSample;
use serde::Serialize;

/// Emitted once when the subject moves from inside a safe zone to outside of it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BreachEvent {
    pub zone_id: String,
    pub zone_name: String,
    pub sample: PositionSample,
    #[serde(rename = "distance_m")]
    pub distance_meters: f64,
}
