use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    zones: Zones,
    feed: Feed,
    #[serde(default)]
    alerts: Alerts,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("config").required(true))
                .add_source(File::with_name("config_local").required(false))
                .add_source(Environment::with_prefix("SAFEZONE").separator("__")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn zones(&self) -> &Zones {
        &self.zones
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn alerts(&self) -> &Alerts {
        &self.alerts
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
    alert_buffer_size: usize,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }

    pub fn alert_buffer_size(&self) -> usize {
        self.alert_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Zones {
    directory: String,
}

impl Zones {
    pub fn directory(&self) -> &str {
        &self.directory
    }
}

#[derive(Debug, Deserialize)]
pub struct Feed {
    path: String,
    #[serde(with = "humantime_serde")]
    interval: Duration,
}

impl Feed {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Alerts {
    file: Option<String>,
}

impl Alerts {
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
