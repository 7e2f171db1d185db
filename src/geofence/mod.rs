mod haversine;
mod monitor;
mod validation;

pub use haversine::{EARTH_RADIUS_M, haversine_meters};
pub use monitor::GeofenceMonitor;
pub use validation::InvalidInputError;
