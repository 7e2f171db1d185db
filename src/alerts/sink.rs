use crate::domain::BreachEvent;
use async_trait::async_trait;
use std::fmt::Debug;
use std::io;
use thiserror::Error;

/// Destination for breach events, such as a log or a guardian notification channel.
#[async_trait]
pub trait AlertSink: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    async fn notify(&self, event: &BreachEvent) -> Result<(), AlertError>;
}

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("could not write alert: {0}")]
    Io(#[from] io::Error),
    #[error("could not serialize alert: {0}")]
    Serialize(#[from] serde_json::Error),
}
