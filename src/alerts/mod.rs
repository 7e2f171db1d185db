mod file_sink;
mod listener;
mod log_sink;
mod sink;

pub use file_sink::FileAlertSink;
pub use listener::alert_listener;
pub use log_sink::LogAlertSink;
pub use sink::{AlertError, AlertSink};
