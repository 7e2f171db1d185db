use crate::domain::PositionSample;
use crate::domain::events::Event;
use std::io;
use std::time::Duration;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::Sender;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// Replays the position samples of a JSON Lines file into the event channel, `interval` apart.
///
/// Blank lines and lines starting with `#` are ignored, malformed lines are skipped with a warning.
/// Returns the number of samples sent.
#[instrument(skip(tx))]
pub async fn replay(path: &str, interval: Duration, tx: Sender<Event>) -> Result<usize, FeedError> {
    info!("🛰️ Replaying location feed...");
    let file = File::open(path).await?;
    let mut lines = BufReader::new(file).lines();

    let mut line_number = 0;
    let mut sent = 0;
    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        let Some(sample) = parse_line(&line, line_number) else {
            continue;
        };

        if sent > 0 && !interval.is_zero() {
            sleep(interval).await;
        }

        debug!(line_number, "🛰️ Position {}, {} at {}", sample.point.latitude, sample.point.longitude, sample.observed_at);
        tx.send(Event::PositionReported(sample)).await.map_err(|_| FeedError::ChannelClosed)?;
        sent += 1;
    }

    info!("🛰️ Replaying location feed... OK, {} sample(s) sent", sent);
    Ok(sent)
}

fn parse_line(line: &str, line_number: usize) -> Option<PositionSample> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    match serde_json::from_str::<PositionSample>(trimmed) {
        Ok(sample) => Some(sample),
        Err(err) => {
            warn!(line_number, "⚠️ Skipping invalid position sample on line {}: {}", line_number, err);
            None
        }
    }
}

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("could not read location feed: {0}")]
    Io(#[from] io::Error),
    #[error("event channel closed")]
    ChannelClosed,
}
