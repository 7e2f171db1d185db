use safezone::alerts::{AlertSink, FileAlertSink, LogAlertSink, alert_listener};
use safezone::app_config::AppConfig;
use safezone::domain::BreachEvent;
use safezone::domain::events::Event;
use safezone::location_feed::replay;
use safezone::watcher::Watcher;
use safezone::zone_loader::load_zones_from;
use tokio::sync::mpsc;
use tokio::task;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let zones = load_zones_from(config.zones().directory(), "json").await?;
    for zone in &zones {
        info!(zone_id = zone.id, "🛡️ Safe zone '{}', {} m around {}, {}", zone.name, zone.radius_meters, zone.center.latitude, zone.center.longitude);
    }

    let (tx, rx) = mpsc::channel::<Event>(config.core().event_buffer_size());
    let (alert_tx, alert_rx) = mpsc::channel::<BreachEvent>(config.core().alert_buffer_size());

    let mut sinks: Vec<Box<dyn AlertSink>> = vec![Box::new(LogAlertSink)];
    if let Some(path) = config.alerts().file() {
        sinks.push(Box::new(FileAlertSink::new(path)));
    }
    let alerts = task::spawn(alert_listener(alert_rx, sinks));
    info!("✅  Initialized alert listener");

    let mut watcher = Watcher::new(zones, rx, alert_tx);
    let watcher = task::spawn(async move {
        watcher.listen().await;
    });
    info!("✅  Initialized watcher");

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));
    let sent = replay(config.feed().path(), config.feed().interval(), tx).await?;

    watcher.await?;
    let breaches = alerts.await?;
    info!("🏁 Processed {} position(s), {} breach(es)", sent, breaches);

    Ok(())
}
