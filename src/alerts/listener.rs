use crate::alerts::sink::AlertSink;
use crate::domain::BreachEvent;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, instrument, warn};

/// Delivers every received breach to every sink, in order. Returns the number of breaches received.
#[instrument(skip_all)]
pub async fn alert_listener(mut rx: Receiver<BreachEvent>, sinks: Vec<Box<dyn AlertSink>>) -> usize {
    let mut received = 0;
    while let Some(event) = rx.recv().await {
        received += 1;
        debug!(zone_id = event.zone_id, "🔔 Dispatching breach of zone '{}' to {} sink(s)", event.zone_name, sinks.len());

        for sink in &sinks {
            if let Err(err) = sink.notify(&event).await {
                warn!(sink = sink.name(), zone_id = event.zone_id, "⚠️ Could not deliver alert: {}", err);
            }
        }
    }

    info!("🔔 Alert channel closed after {} breach(es)", received);
    received
}
