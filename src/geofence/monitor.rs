use crate::domain::{BreachEvent, PositionSample, SafeZone};
use crate::geofence::haversine::haversine_meters;
use crate::geofence::validation::{InvalidInputError, validate};
use std::collections::HashMap;
use tracing::{debug, info, instrument, trace};

/// Tracks which safe zones a single subject is inside of and reports every exit once.
///
/// Membership is recorded lazily: the first evaluation against a zone only classifies the subject,
/// breaches are reported on later inside to outside transitions. Re-entering a zone is silent.
/// A monitor belongs to exactly one subject, track several subjects with several monitors.
#[derive(Debug, Default)]
pub struct GeofenceMonitor {
    memberships: HashMap<String, bool>,
}

impl GeofenceMonitor {
    pub fn new() -> Self {
        GeofenceMonitor::default()
    }

    /// Classifies `sample` against every zone in order and returns the breaches it caused.
    ///
    /// Input is validated before any membership is touched, an error leaves the monitor unchanged.
    #[instrument(skip_all, fields(latitude = sample.point.latitude, longitude = sample.point.longitude))]
    pub fn evaluate(&mut self, sample: &PositionSample, zones: &[SafeZone]) -> Result<Vec<BreachEvent>, InvalidInputError> {
        validate(sample, zones)?;

        let mut breaches = Vec::new();
        for zone in zones {
            let distance = haversine_meters(&sample.point, &zone.center);
            let is_inside = distance <= zone.radius_meters;

            match self.memberships.insert(zone.id.clone(), is_inside) {
                None => debug!(zone_id = zone.id, "📍 First position for zone '{}', inside: {}", zone.name, is_inside),
                Some(true) if !is_inside => {
                    info!(zone_id = zone.id, "🚨 Left zone '{}', {:.0} m from its center", zone.name, distance);
                    breaches.push(BreachEvent {
                        zone_id: zone.id.clone(),
                        zone_name: zone.name.clone(),
                        sample: sample.clone(),
                        distance_meters: distance,
                    });
                }
                Some(false) if is_inside => debug!(zone_id = zone.id, "📍 Re-entered zone '{}'", zone.name),
                Some(_) => trace!(zone_id = zone.id, distance, "No change for zone '{}'", zone.name),
            }
        }

        Ok(breaches)
    }

    /// Forgets the membership of one zone, or of all zones when `zone_id` is `None`.
    pub fn reset(&mut self, zone_id: Option<&str>) {
        match zone_id {
            Some(zone_id) => {
                self.memberships.remove(zone_id);
            }
            None => self.memberships.clear(),
        }
    }

    pub fn membership(&self, zone_id: &str) -> Option<bool> {
        self.memberships.get(zone_id).copied()
    }

    pub fn tracked_zones(&self) -> usize {
        self.memberships.len()
    }

    pub(crate) fn retain_zones(&mut self, zones: &[SafeZone]) {
        self.memberships.retain(|zone_id, _| zones.iter().any(|zone| &zone.id == zone_id));
    }
}
