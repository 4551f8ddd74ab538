//! Wall-clock time source backed by the local timezone.

use chrono::{Local, Timelike};
use watchface_common::{ClockReading, TimeSource};

/// System clock in the device-local timezone. Read-only; the face only
/// ever samples it, once per render.
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> ClockReading {
        let now = Local::now();
        ClockReading::new(now.hour() as u8, now.minute() as u8, now.second() as u8)
    }
}
