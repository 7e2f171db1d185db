//! Geofence breach detection for a tracked subject.
//!
//! [`geofence::GeofenceMonitor`] classifies position samples against circular safe zones and
//! reports each exit from a zone exactly once. The remaining modules wire a monitor between a
//! location feed, a directory of zone definitions and a set of alert sinks.

pub mod alerts;
pub mod app_config;
pub mod domain;
pub mod geofence;
mod geo_point_deserializer;
pub mod location_feed;
pub mod watcher;
pub mod zone_loader;
