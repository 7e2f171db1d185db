use crate::alerts::sink::{AlertError, AlertSink};
use crate::domain::BreachEvent;
use async_trait::async_trait;
use tracing::{instrument, warn};

#[derive(Debug, Default)]
pub struct LogAlertSink;

pub const LOG_SINK_NAME: &str = "log";

#[async_trait]
impl AlertSink for LogAlertSink {
    fn name(&self) -> &'static str {
        LOG_SINK_NAME
    }

    #[instrument(skip_all)]
    async fn notify(&self, event: &BreachEvent) -> Result<(), AlertError> {
        warn!(
            zone_id = event.zone_id,
            distance_m = event.distance_meters,
            observed_at = %event.sample.observed_at,
            "🚨 Subject left safe zone '{}' at {}, {}",
            event.zone_name,
            event.sample.point.latitude,
            event.sample.point.longitude
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, PositionSample};
    use chrono::Utc;
    use test_log::test;

    #[test(tokio::test)]
    async fn notify_always_succeeds() {
        let event = BreachEvent {
            zone_id: "z1".to_string(),
            zone_name: "Park".to_string(),
            sample: PositionSample::new(GeoPoint::new(40.768, -73.9855), Utc::now()),
            distance_meters: 1112.0,
        };

        assert!(LogAlertSink.notify(&event).await.is_ok());
        assert_eq!(LogAlertSink.name(), "log");
    }
}
