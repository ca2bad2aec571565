//! Persisted line format and append-mode writer
//!
//! Each reading becomes one line `timestamp,source_name,value,unit`. Fields
//! are written as-is; callers must keep commas and newlines out of source
//! names and units.

use crate::error::{LoggerError, Result};
use crate::types::{format_value, Reading};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Field separator for persisted lines
pub const FIELD_SEPARATOR: char = ',';

/// Render one reading as a persisted line, without the trailing newline
pub fn format_line(reading: &Reading) -> String {
    format!(
        "{ts}{sep}{name}{sep}{value}{sep}{unit}",
        ts = reading.timestamp(),
        name = reading.source_name(),
        value = format_value(reading.value()),
        unit = reading.unit(),
        sep = FIELD_SEPARATOR,
    )
}

/// Append `readings` to the file at `path`, one line each, in order.
///
/// The file is created if missing and existing content is preserved. The
/// handle is closed before returning on every path. On error, lines written
/// before the failure may remain in the file.
pub fn append_readings(path: &Path, readings: &[Reading]) -> Result<usize> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggerError::storage(path, e))?;

    let mut writer = BufWriter::new(file);
    for reading in readings {
        writeln!(writer, "{}", format_line(reading)).map_err(|e| LoggerError::storage(path, e))?;
    }
    writer.flush().map_err(|e| LoggerError::storage(path, e))?;

    Ok(readings.len())
}
