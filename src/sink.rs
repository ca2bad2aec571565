//! Notification sinks
//!
//! The logger reports what it does (each recorded reading, each flush) as
//! human-readable lines. Where those lines go is decided by the host through
//! a [`NotificationSink`]; none of this output is part of the persisted log.

use crossbeam_channel::Sender;
use serde::Deserialize;

/// Destination for human-readable status lines
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink {
    /// Deliver one status line
    fn notify(&mut self, message: &str);
}

/// Prints each line to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl NotificationSink for StdoutSink {
    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Emits each line as a `tracing` info event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, message: &str) {
        tracing::info!(target: "sensor_logger::notify", "{}", message);
    }
}

/// Discards every line
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl NotificationSink for SilentSink {
    fn notify(&mut self, _message: &str) {}
}

/// Forwards each line over a crossbeam channel
///
/// Lines sent after the receiver is dropped are silently discarded.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<String>,
}

impl ChannelSink {
    pub fn new(tx: Sender<String>) -> Self {
        Self { tx }
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&mut self, message: &str) {
        let _ = self.tx.send(message.to_string());
    }
}

/// Sink selection in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMode {
    /// Print to standard output
    #[default]
    Stdout,
    /// Route through `tracing`
    Tracing,
    /// Discard
    Silent,
}

impl NotificationMode {
    /// Build the sink this mode selects
    pub fn build(self) -> Box<dyn NotificationSink> {
        match self {
            NotificationMode::Stdout => Box::new(StdoutSink),
            NotificationMode::Tracing => Box::new(TracingSink),
            NotificationMode::Silent => Box::new(SilentSink),
        }
    }
}

impl std::fmt::Display for NotificationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationMode::Stdout => write!(f, "stdout"),
            NotificationMode::Tracing => write!(f, "tracing"),
            NotificationMode::Silent => write!(f, "silent"),
        }
    }
}
