use crate::domain::{GeoPoint, PositionSample, SafeZone};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InvalidInputError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    InvalidLongitude(f64),
    #[error("invalid radius {radius} for zone '{zone_id}', must be a positive number of meters")]
    InvalidRadius { zone_id: String, radius: f64 },
    #[error("zone id '{0}' is used by more than one zone")]
    DuplicateZoneId(String),
}

pub(crate) fn validate_point(point: &GeoPoint) -> Result<(), InvalidInputError> {
    if !(point.latitude >= -90.0 && point.latitude <= 90.0) {
        return Err(InvalidInputError::InvalidLatitude(point.latitude));
    }

    if !(point.longitude >= -180.0 && point.longitude <= 180.0) {
        return Err(InvalidInputError::InvalidLongitude(point.longitude));
    }

    Ok(())
}

pub(crate) fn validate_zones(zones: &[SafeZone]) -> Result<(), InvalidInputError> {
    let mut seen = HashSet::with_capacity(zones.len());

    for zone in zones {
        if !seen.insert(zone.id.as_str()) {
            return Err(InvalidInputError::DuplicateZoneId(zone.id.clone()));
        }

        if !(zone.radius_meters.is_finite() && zone.radius_meters > 0.0) {
            return Err(InvalidInputError::InvalidRadius {
                zone_id: zone.id.clone(),
                radius: zone.radius_meters,
            });
        }

        validate_point(&zone.center)?;
    }

    Ok(())
}

pub(crate) fn validate(sample: &PositionSample, zones: &[SafeZone]) -> Result<(), InvalidInputError> {
    validate_point(&sample.point)?;
    validate_zones(zones)
}
