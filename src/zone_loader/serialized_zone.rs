use crate::domain::{GeoPoint, SafeZone};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct SerializedZone {
    id: String,
    name: String,
    center: GeoPoint,
    #[serde(alias = "radius")]
    radius_m: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SerializedZoneFile {
    Many(Vec<SerializedZone>),
    Single(SerializedZone),
}

pub fn from_json(json: &str) -> Result<Vec<SafeZone>, ZoneFactoryError> {
    let file: SerializedZoneFile = serde_json::from_str(json)?;
    let serialized_zones = match file {
        SerializedZoneFile::Many(zones) => zones,
        SerializedZoneFile::Single(zone) => vec![zone],
    };

    serialized_zones.into_iter().map(to_zone).collect()
}

fn to_zone(serialized: SerializedZone) -> Result<SafeZone, ZoneFactoryError> {
    if serialized.id.trim().is_empty() {
        return Err(ZoneFactoryError::MissingId);
    }

    if !(serialized.radius_m.is_finite() && serialized.radius_m > 0.0) {
        return Err(ZoneFactoryError::InvalidRadius {
            zone_id: serialized.id,
            radius: serialized.radius_m,
        });
    }

    Ok(SafeZone::new(serialized.id, serialized.name, serialized.center, serialized.radius_m))
}

#[derive(Error, Debug)]
pub enum ZoneFactoryError {
    #[error("invalid zone JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("zone id must not be empty")]
    MissingId,
    #[error("invalid radius {radius} for zone '{zone_id}'")]
    InvalidRadius { zone_id: String, radius: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn parses_a_single_zone() {
        let json = r#"{ "id": "z1", "name": "Central Park Safe Zone", "center": { "lat": 40.758, "lng": -73.9855 }, "radius_m": 500 }"#;

        let zones = from_json(json).unwrap();

        assert_eq!(
            zones,
            vec![SafeZone::new("z1", "Central Park Safe Zone", GeoPoint::new(40.758, -73.9855), 500.0)]
        );
    }

    #[test]
    fn parses_a_list_of_zones() {
        let json = r#"[
            { "id": "z1", "name": "Central Park Safe Zone", "center": { "latitude": 40.758, "longitude": -73.9855 }, "radius_m": 500 },
            { "id": "z2", "name": "Times Square Area", "center": { "latitude": 40.7505, "longitude": -73.9934 }, "radius": 300 }
        ]"#;

        let zones = from_json(json).unwrap();

        let ids: Vec<&str> = zones.iter().map(|zone| zone.id.as_str()).collect();
        assert_eq!(ids, vec!["z1", "z2"]);
        assert_eq!(zones[1].radius_meters, 300.0);
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-1.0)]
    fn fails_for_a_non_positive_radius(#[case] radius: f64) {
        let json = format!(r#"{{ "id": "z1", "name": "Park", "center": {{ "lat": 0, "lng": 0 }}, "radius_m": {} }}"#, radius);

        let result = from_json(&json);

        assert!(matches!(result, Err(ZoneFactoryError::InvalidRadius { zone_id, .. }) if zone_id == "z1"));
    }

    #[test]
    fn fails_for_an_empty_id() {
        let json = r#"{ "id": " ", "name": "Park", "center": { "lat": 0, "lng": 0 }, "radius_m": 10 }"#;
        assert!(matches!(from_json(json), Err(ZoneFactoryError::MissingId)));
    }

    #[rstest]
    #[case::out_of_range_center(r#"{ "id": "z1", "name": "Park", "center": { "lat": 95, "lng": 0 }, "radius_m": 10 }"#)]
    #[case::missing_radius(r#"{ "id": "z1", "name": "Park", "center": { "lat": 0, "lng": 0 } }"#)]
    #[case::not_json("zone")]
    fn fails_for_malformed_zones(#[case] json: &str) {
        assert!(matches!(from_json(json), Err(ZoneFactoryError::InvalidJson(_))));
    }
}
