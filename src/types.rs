//! Core data types used throughout the sensor logger
//!
//! This module contains the fundamental types for representing buffered
//! readings and the summary statistics computed over them.
//!
//! # Main Types
//!
//! - [`Reading`] - One timestamped (source, value, unit) observation
//! - [`Statistics`] - Count, average, min and max for a single source
//!
//! # Formatting
//!
//! Timestamps are local time with millisecond precision
//! (`YYYY-MM-DD HH:MM:SS.mmm`). Values are rendered by [`format_value`],
//! which is shared by console notifications and persisted lines so both
//! always agree.

use chrono::{DateTime, Local};

/// chrono format string for reading timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Format a local time as a reading timestamp
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Magnitudes at or above this are written in scientific notation
const SCIENTIFIC_UPPER: f64 = 1e16;

/// Non-zero magnitudes below this are written in scientific notation
const SCIENTIFIC_LOWER: f64 = 1e-4;

/// Render a value the way it appears in notifications and log lines.
///
/// Integral values keep a trailing `.0` so that `26.0` is written as `26.0`
/// rather than `26`. Very large and very small magnitudes use a signed,
/// two-digit exponent (`1e+16`, `1.5e-07`).
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let s = if value > 0.0 { "inf" } else { "-inf" };
        s.to_string()
    } else if magnitude != 0.0 && !(SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&magnitude) {
        format_scientific(value)
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn format_scientific(value: f64) -> String {
    let shortest = format!("{:e}", value);
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        Err(_) => shortest,
    }
}

/// A single sensor observation
///
/// Readings are immutable once created; fields are only exposed through
/// accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    timestamp: String,
    source_name: String,
    value: f64,
    unit: String,
}

impl Reading {
    /// Create a reading with an explicit timestamp string
    pub fn new(
        timestamp: impl Into<String>,
        source_name: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            source_name: source_name.into(),
            value,
            unit: unit.into(),
        }
    }

    /// Create a reading stamped with the given local time
    pub fn at(
        time: &DateTime<Local>,
        source_name: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self::new(format_timestamp(time), source_name, value, unit)
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Human-readable notification line: `[timestamp] source: value unit`
    pub fn notification(&self) -> String {
        format!(
            "[{}] {}: {} {}",
            self.timestamp,
            self.source_name,
            format_value(self.value),
            self.unit
        )
    }
}

/// Descriptive statistics over the buffered values of one source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Number of matching readings
    pub count: usize,
    /// Arithmetic mean
    pub average: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl Statistics {
    /// Compute statistics over `values`, or `None` if there are none
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut acc = Accumulator::new();
        for value in values {
            acc.push(value);
        }
        acc.finish()
    }
}

/// Running count/sum/min/max accumulator
#[derive(Debug, Clone)]
struct Accumulator {
    count: usize,
    sum: f64,
    min: f64,
    max: f64,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::MAX,
            max: f64::MIN,
        }
    }

    #[inline]
    fn push(&mut self, value: f64) {
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.count += 1;
        self.sum += value;
    }

    fn finish(self) -> Option<Statistics> {
        if self.count == 0 {
            return None;
        }
        Some(Statistics {
            count: self.count,
            average: self.sum / self.count as f64,
            min: self.min,
            max: self.max,
        })
    }
}
