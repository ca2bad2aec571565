//! Test data builders for creating loggers

use super::mock_helpers::{capture_sink, SteppingClock};
use crossbeam_channel::Receiver;
use sensor_logger::DataLogger;
use std::path::PathBuf;
use tempfile::TempDir;

/// A logger writing into its own temporary directory, with captured output
pub struct TestLogger {
    pub logger: DataLogger,
    pub messages: Receiver<String>,
    pub path: PathBuf,
    // Dropped last so the directory outlives the logger
    _dir: TempDir,
}

impl TestLogger {
    /// Notifications received so far
    pub fn drain_messages(&self) -> Vec<String> {
        self.messages.try_iter().collect()
    }
}

/// Builder for creating test loggers
pub struct LoggerBuilder {
    file_name: String,
    start_millis: i64,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            file_name: "test.csv".to_string(),
            start_millis: 0,
        }
    }

    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    pub fn start_millis(mut self, millis: i64) -> Self {
        self.start_millis = millis;
        self
    }

    pub fn build(self) -> TestLogger {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(&self.file_name);
        let (sink, messages) = capture_sink();
        let logger = DataLogger::new(&path)
            .with_sink(sink)
            .with_clock(SteppingClock::starting_at_millis(self.start_millis));
        TestLogger {
            logger,
            messages,
            path,
            _dir: dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_builder() {
        let t = LoggerBuilder::new().file_name("x.csv").build();
        assert!(t.logger.is_empty());
        assert!(t.path.ends_with("x.csv"));
        assert_eq!(t.logger.path(), t.path.as_path());
    }
}
