use crate::domain::{PositionSample, SafeZone};

#[derive(Debug)]
pub enum Event {
    PositionReported(PositionSample),
    ZonesUpdated(Vec<SafeZone>),
    Reset { zone_id: Option<String> },
}
