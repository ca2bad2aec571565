//! Buffered data logger
//!
//! [`DataLogger`] accumulates readings in memory and appends them to its
//! target file when [`DataLogger::flush`] is called. Statistics are computed
//! over the buffer only; once flushed, readings no longer contribute.
//!
//! # Example
//!
//! ```no_run
//! use sensor_logger::DataLogger;
//!
//! let mut logger = DataLogger::new("test.csv");
//! logger.record("TempSensor", 25.5, "C");
//! logger.record("TempSensor", 26.0, "C");
//!
//! let stats = logger.statistics("TempSensor").unwrap();
//! assert_eq!(stats.count, 2);
//!
//! logger.flush()?;
//! assert!(logger.statistics("TempSensor").is_none());
//! # Ok::<(), sensor_logger::LoggerError>(())
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::config::LoggerConfig;
use crate::error::Result;
use crate::sink::{NotificationSink, StdoutSink};
use crate::storage;
use crate::types::{Reading, Statistics};

/// Default target file when none is given
pub const DEFAULT_LOG_PATH: &str = "sensor_log.txt";

/// Notification emitted when flushing an empty buffer
pub const NOTHING_TO_SAVE: &str = "No data to save.";

/// Source of reading timestamps
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock local time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// In-memory reading buffer with append-on-demand persistence
pub struct DataLogger {
    /// Target file for flushed readings
    path: PathBuf,
    /// Readings recorded since the last successful flush
    buffer: Vec<Reading>,
    /// Where status lines go
    sink: Box<dyn NotificationSink>,
    /// Timestamp source for new readings
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for DataLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataLogger")
            .field("path", &self.path)
            .field("buffered", &self.buffer.len())
            .finish_non_exhaustive()
    }
}

impl Default for DataLogger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

impl DataLogger {
    /// Create a logger writing to `path`, notifying on stdout
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            buffer: Vec::new(),
            sink: Box::new(StdoutSink),
            clock: Box::new(SystemClock),
        }
    }

    /// Create a logger from loaded configuration
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.file_path.clone()).with_boxed_sink(config.notifications.build())
    }

    /// Replace the notification sink
    pub fn with_sink(self, sink: impl NotificationSink + 'static) -> Self {
        self.with_boxed_sink(Box::new(sink))
    }

    /// Replace the notification sink with an already boxed one
    pub fn with_boxed_sink(mut self, sink: Box<dyn NotificationSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the timestamp source
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Target file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Buffered readings in insertion order
    pub fn readings(&self) -> &[Reading] {
        &self.buffer
    }

    /// Number of buffered readings
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the buffer holds no readings
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Distinct source names in the buffer, in first-seen order
    pub fn sources(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for reading in &self.buffer {
            if !names.contains(&reading.source_name()) {
                names.push(reading.source_name());
            }
        }
        names
    }

    /// Buffer a reading stamped with the current time and announce it
    pub fn record(&mut self, source_name: &str, value: f64, unit: &str) {
        let reading = Reading::at(&self.clock.now(), source_name, value, unit);
        tracing::debug!(
            source = reading.source_name(),
            value = reading.value(),
            buffered = self.buffer.len() + 1,
            "Recorded reading"
        );
        self.sink.notify(&reading.notification());
        self.buffer.push(reading);
    }

    /// Buffer a reading that has no unit
    pub fn record_value(&mut self, source_name: &str, value: f64) {
        self.record(source_name, value, "");
    }

    /// Append every buffered reading to the target file and clear the buffer.
    ///
    /// Returns the number of readings written; `Ok(0)` when there was
    /// nothing to write, in which case the file is not touched. On error the
    /// buffer is kept as-is, although some lines may already be in the file.
    pub fn flush(&mut self) -> Result<usize> {
        if self.buffer.is_empty() {
            tracing::debug!(path = ?self.path, "Flush skipped, buffer empty");
            self.sink.notify(NOTHING_TO_SAVE);
            return Ok(0);
        }

        let written = match storage::append_readings(&self.path, &self.buffer) {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(
                    "Flush of {} readings to {:?} failed: {}",
                    self.buffer.len(),
                    self.path,
                    e
                );
                return Err(e);
            }
        };

        self.buffer.clear();
        tracing::info!("Flushed {} readings to {:?}", written, self.path);
        self.sink.notify(&format!(
            "Saved {} readings to {}",
            written,
            self.path.display()
        ));
        Ok(written)
    }

    /// Count, average, min and max of buffered values for `source_name`
    pub fn statistics(&self, source_name: &str) -> Option<Statistics> {
        Statistics::from_values(
            self.buffer
                .iter()
                .filter(|r| r.source_name() == source_name)
                .map(Reading::value),
        )
    }
}
