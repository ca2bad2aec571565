//! Sensor Logger - Demonstration Driver
//!
//! Seeds the logger with simulated gyro and distance readings, prints the
//! distance statistics, and flushes everything to disk.
//!
//! Usage: `sensor-logger [CONFIG.toml]`

use anyhow::Context;
use sensor_logger::{DataLogger, LoggerConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output file used when no config file is given
const DEMO_LOG_PATH: &str = "drone_sensors.csv";

/// Directory for rolling log files, if set
const LOG_DIR_ENV: &str = "SENSOR_LOGGER_LOG_DIR";

const ROUNDS: u32 = 10;
const SAMPLE_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> anyhow::Result<()> {
    // Keep the appender guard alive so buffered log lines are written on exit
    let _log_guard = init_logging();

    tracing::info!("Starting sensor logger demo");

    let config = match std::env::args().nth(1) {
        Some(path) => LoggerConfig::load(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => LoggerConfig {
            file_path: PathBuf::from(DEMO_LOG_PATH),
            ..LoggerConfig::default()
        },
    };

    let mut logger = DataLogger::from_config(&config);

    println!("=== Sensor logging started ===\n");

    for i in 0..ROUNDS {
        // Stand-in values; a real host would read these from the sensors
        let i = f64::from(i);
        let gyro_x = 0.5 + i * 0.1;
        let gyro_y = -0.3 + i * 0.05;
        let distance = 150.0 - i * 5.0;

        logger.record("MPU6050_GyroX", gyro_x, "deg/s");
        logger.record("MPU6050_GyroY", gyro_y, "deg/s");
        logger.record("VL53L0X_Distance", distance, "mm");

        std::thread::sleep(SAMPLE_INTERVAL);
    }

    println!("\n=== Statistics ===");
    if let Some(stats) = logger.statistics("VL53L0X_Distance") {
        println!(
            "Distance sensor - average: {:.2}mm, min: {}mm, max: {}mm",
            stats.average, stats.min, stats.max
        );
    }

    println!("\n=== Saving data ===");
    logger
        .flush()
        .with_context(|| format!("flushing readings to {}", logger.path().display()))?;
    println!("\nDone!");

    Ok(())
}

fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let (file_layer, guard) = match std::env::var_os(LOG_DIR_ENV) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "sensor-logger.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sensor_logger=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}
