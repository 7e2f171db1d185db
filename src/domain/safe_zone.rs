use crate::domain::GeoPoint;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SafeZone {
    pub id: String,
    pub name: String,
    pub center: GeoPoint,
    #[serde(rename = "radius_m")]
    pub radius_meters: f64,
}

impl SafeZone {
    pub fn new(id: impl Into<String>, name: impl Into<String>, center: GeoPoint, radius_meters: f64) -> Self {
        SafeZone {
            id: id.into(),
            name: name.into(),
            center,
            radius_meters,
        }
    }
}
