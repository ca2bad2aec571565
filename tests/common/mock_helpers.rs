//! Sink and clock helpers

use chrono::{DateTime, Local, TimeZone};
use crossbeam_channel::{unbounded, Receiver};
use sensor_logger::{ChannelSink, Clock};
use std::cell::Cell;

/// Create a sink whose notifications can be read back from the receiver
pub fn capture_sink() -> (ChannelSink, Receiver<String>) {
    let (tx, rx) = unbounded();
    (ChannelSink::new(tx), rx)
}

/// Clock that advances one millisecond on every call
pub struct SteppingClock {
    base: DateTime<Local>,
    step: Cell<i64>,
}

impl SteppingClock {
    pub fn starting_at_millis(millis: i64) -> Self {
        let base = Local.with_ymd_and_hms(2024, 11, 20, 14, 0, 0).unwrap();
        Self {
            base,
            step: Cell::new(millis),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Local> {
        let n = self.step.get();
        self.step.set(n + 1);
        self.base + chrono::Duration::milliseconds(n)
    }
}
