//! # sensor-logger: Buffered Sensor Data Logger
//!
//! Collects timestamped sensor readings in memory, appends them on demand to
//! a comma-separated text file, and summarizes the buffered values per
//! source.
//!
//! ## Architecture
//!
//! - **Logger**: [`DataLogger`] owns the reading buffer and the target path
//! - **Storage**: append-mode line writer, one `timestamp,source,value,unit`
//!   line per reading
//! - **Sinks**: injectable [`NotificationSink`] for human-readable status
//!   lines (stdout, tracing, crossbeam channel, or nothing)
//! - **Config**: [`LoggerConfig`] loaded from TOML
//!
//! Acquiring readings from hardware is left to the caller.
//!
//! ## Example
//!
//! ```no_run
//! use sensor_logger::DataLogger;
//!
//! let mut logger = DataLogger::new("drone_sensors.csv");
//! logger.record("VL53L0X_Distance", 150.0, "mm");
//! logger.record("VL53L0X_Distance", 145.0, "mm");
//!
//! if let Some(stats) = logger.statistics("VL53L0X_Distance") {
//!     println!("avg {:.2}mm over {} readings", stats.average, stats.count);
//! }
//!
//! logger.flush()?;
//! # Ok::<(), sensor_logger::LoggerError>(())
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod sink;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use logger::{Clock, DataLogger, SystemClock, DEFAULT_LOG_PATH};
pub use sink::{ChannelSink, NotificationMode, NotificationSink, SilentSink, StdoutSink, TracingSink};
pub use types::{Reading, Statistics};
