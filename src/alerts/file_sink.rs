use crate::alerts::sink::{AlertError, AlertSink};
use crate::domain::BreachEvent;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

/// Appends every breach as a JSON line to a file, creating the file when needed.
#[derive(Debug)]
pub struct FileAlertSink {
    path: PathBuf,
}

pub const FILE_SINK_NAME: &str = "file";

impl FileAlertSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileAlertSink { path: path.into() }
    }
}

#[async_trait]
impl AlertSink for FileAlertSink {
    fn name(&self) -> &'static str {
        FILE_SINK_NAME
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    async fn notify(&self, event: &BreachEvent) -> Result<(), AlertError> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path).await?;
        file.write_all(&line).await?;
        file.flush().await?;

        debug!(zone_id = event.zone_id, "📝 Appended alert for zone '{}'", event.zone_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, PositionSample};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::env::temp_dir;
    use test_log::test;
    use tokio::fs;

    fn breach(zone_id: &str) -> BreachEvent {
        BreachEvent {
            zone_id: zone_id.to_string(),
            zone_name: "Park".to_string(),
            sample: PositionSample::new(GeoPoint::new(40.768, -73.9855), Utc.with_ymd_and_hms(2025, 6, 1, 12, 5, 0).unwrap()),
            distance_meters: 1112.0,
        }
    }

    #[test(tokio::test)]
    async fn appends_one_json_line_per_alert() -> Result<(), AlertError> {
        let path = temp_dir().join(format!("safezone-alerts-{}.jsonl", std::process::id()));
        let _ = fs::remove_file(&path).await;
        let sink = FileAlertSink::new(&path);

        sink.notify(&breach("z1")).await?;
        sink.notify(&breach("z2")).await?;

        let content = fs::read_to_string(&path).await?;
        let lines: Vec<Value> = content.lines().map(serde_json::from_str::<Value>).collect::<Result<_, _>>()?;
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            json!({
                "zone_id": "z1",
                "zone_name": "Park",
                "sample": {
                    "point": { "latitude": 40.768, "longitude": -73.9855 },
                    "observed_at": "2025-06-01T12:05:00Z"
                },
                "distance_m": 1112.0
            })
        );
        assert_eq!(lines[1]["zone_id"], "z2");

        fs::remove_file(&path).await?;
        Ok(())
    }

    #[test(tokio::test)]
    async fn fails_when_the_file_cannot_be_opened() {
        let sink = FileAlertSink::new(temp_dir().join("safezone-missing-dir").join("nested").join("alerts.jsonl"));

        let result = sink.notify(&breach("z1")).await;

        assert!(matches!(result, Err(AlertError::Io(_))));
    }
}
