//! Timing constants and the host redraw timer.
//!
//! These use `std::time` types which are not available in `no_std`
//! environments, so they live here rather than in the common crate.

use std::time::{Duration, Instant};

use watchface_common::RedrawTimer;

/// Target frame time for the event loop (~50 FPS). The loop sleeps this
/// long between polls; redraws only happen when the face timer fires.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Cancel token handed out by [`HostTimer::start`].
pub struct TimerHandle;

struct Armed {
    period: Duration,
    next: Instant,
}

/// `Instant`-based repeating timer implementing the widget's redraw seam.
///
/// The simulator polls it from the event loop; each elapsed period rearms
/// relative to the moment it was observed, so the cadence is best-effort
/// and drifts with redraw cost, which is acceptable for a 1 Hz dial.
pub struct HostTimer {
    armed: Option<Armed>,
}

impl HostTimer {
    /// Create an unarmed timer.
    pub const fn new() -> Self { Self { armed: None } }

    /// Check whether a period has elapsed, rearming if so.
    pub fn poll(&mut self) -> bool {
        match &mut self.armed {
            Some(armed) if Instant::now() >= armed.next => {
                armed.next = Instant::now() + armed.period;
                true
            }
            _ => false,
        }
    }
}

impl RedrawTimer for HostTimer {
    type Handle = TimerHandle;

    /// Arm the timer. The first firing is due immediately so a freshly
    /// attached face paints without waiting out a full period.
    fn start(
        &mut self,
        period_ms: u32,
    ) -> TimerHandle {
        self.armed = Some(Armed {
            period: Duration::from_millis(u64::from(period_ms)),
            next: Instant::now(),
        });
        TimerHandle
    }

    fn cancel(
        &mut self,
        _handle: TimerHandle,
    ) {
        self.armed = None;
    }
}

// =============================================================================
// Tests
// =============================================================================
