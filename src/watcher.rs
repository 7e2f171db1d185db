use crate::domain::events::Event;
use crate::domain::{BreachEvent, SafeZone};
use crate::geofence::GeofenceMonitor;
use tokio::sync::mpsc::{Receiver, Sender};
use tracing::{debug, info, instrument, warn};

/// Sole owner of the monitor of one subject. Events are handled one at a time in arrival order.
#[derive(Debug)]
pub struct Watcher {
    monitor: GeofenceMonitor,
    zones: Vec<SafeZone>,
    rx: Receiver<Event>,
    alert_tx: Sender<BreachEvent>,
}

impl Watcher {
    pub fn new(zones: Vec<SafeZone>, rx: Receiver<Event>, alert_tx: Sender<BreachEvent>) -> Self {
        Watcher {
            monitor: GeofenceMonitor::new(),
            zones,
            rx,
            alert_tx,
        }
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            match event {
                Event::PositionReported(sample) => {
                    let breaches = match self.monitor.evaluate(&sample, &self.zones) {
                        Ok(breaches) => breaches,
                        Err(err) => {
                            warn!("⚠️ Ignoring position at {}: {}", sample.observed_at, err);
                            continue;
                        }
                    };

                    for breach in breaches {
                        if self.alert_tx.send(breach).await.is_err() {
                            warn!("⚠️ Alert channel closed, stopping watcher");
                            return;
                        }
                    }
                }
                Event::ZonesUpdated(zones) => {
                    self.monitor.retain_zones(&zones);
                    info!("🔵 Watching {} zone(s), {} with a known membership", zones.len(), self.monitor.tracked_zones());
                    self.zones = zones;
                }
                Event::Reset { zone_id } => {
                    self.monitor.reset(zone_id.as_deref());
                    info!("🔵 Reset membership of {}", zone_id.as_deref().unwrap_or("all zones"));
                }
            }
        }

        debug!("🔵 Event channel closed");
    }

    pub fn monitor(&self) -> &GeofenceMonitor {
        &self.monitor
    }
}
