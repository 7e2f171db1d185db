mod breach_event;
pub mod events;
mod geo_point;
mod position_sample;
mod safe_zone;

pub use breach_event::BreachEvent;
pub use geo_point::GeoPoint;
pub use position_sample::PositionSample;
pub use safe_zone::SafeZone;
