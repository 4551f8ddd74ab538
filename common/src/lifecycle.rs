//! Attach/detach lifecycle and the host redraw timer seam.
//!
//! The widget has exactly two states: `Detached` and `Running`. Attaching
//! to a visible surface starts the host's repeating redraw timer;
//! detaching synchronously flips the state back so a callback that is
//! already queued observes `Detached` through [`UpdateLoop::tick`] and
//! removes itself instead of rescheduling. Everything runs on the host UI
//! thread, so a plain flag is enough.

// =============================================================================
// Run State
// =============================================================================

/// Lifecycle state of a watch face instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    /// Not attached to a surface; no redraws are scheduled.
    #[default]
    Detached,
    /// Attached and redrawing once per second.
    Running,
}

/// Tracks the running flag across attach/detach transitions.
#[derive(Debug, Default)]
pub struct UpdateLoop {
    state: RunState,
}

impl UpdateLoop {
    /// Create a new loop in the `Detached` state.
    pub const fn new() -> Self {
        Self {
            state: RunState::Detached,
        }
    }

    /// Transition `Detached` -> `Running`. Returns `true` only when the
    /// transition happened; attaching while already running is a no-op.
    pub fn attach(&mut self) -> bool {
        match self.state {
            RunState::Detached => {
                self.state = RunState::Running;
                true
            }
            RunState::Running => false,
        }
    }

    /// Transition to `Detached`. Takes effect synchronously so any
    /// already-queued timer callback observes the flag as stopped.
    pub fn detach(&mut self) { self.state = RunState::Detached; }

    /// Current state.
    pub const fn state(&self) -> RunState { self.state }

    /// Whether the loop is running.
    pub const fn is_running(&self) -> bool { matches!(self.state, RunState::Running) }

    /// Observation point for the timer callback: `true` means invalidate
    /// and reschedule, `false` means the callback must remove itself.
    pub const fn tick(&self) -> bool { self.is_running() }
}

// =============================================================================
// Redraw Timer
// =============================================================================

/// Host-owned repeating redraw timer.
///
/// [`start`](Self::start) returns a cancel handle; the host keeps it and
/// passes it back to [`cancel`](Self::cancel) when the view detaches. The
/// cadence is best-effort: hosts rearm relative to the completed redraw,
/// not an absolute schedule, so drift accumulates and that is acceptable.
pub trait RedrawTimer {
    /// Cancel token returned by `start`.
    type Handle;

    /// Begin firing every `period_ms` milliseconds.
    fn start(
        &mut self,
        period_ms: u32,
    ) -> Self::Handle;

    /// Stop firing. Consumes the handle; a canceled timer never fires
    /// again.
    fn cancel(
        &mut self,
        handle: Self::Handle,
    );
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::ManualTimer;

    #[test]
    fn test_starts_detached() {
        let run = UpdateLoop::new();
        assert_eq!(run.state(), RunState::Detached);
        assert!(!run.tick());
    }

    #[test]
    fn test_attach_transitions_once() {
        let mut run = UpdateLoop::new();
        assert!(run.attach());
        assert!(run.is_running());
        assert!(!run.attach(), "second attach must not re-transition");
    }

    #[test]
    fn test_detach_stops_ticks_synchronously() {
        let mut run = UpdateLoop::new();
        run.attach();
        assert!(run.tick());
        run.detach();
        // A callback that was already queued now observes the flag.
        assert!(!run.tick());
        assert!(!run.tick(), "stale callbacks never resurrect the loop");
    }

    #[test]
    fn test_reattach_after_detach() {
        let mut run = UpdateLoop::new();
        run.attach();
        run.detach();
        assert!(run.attach());
        assert!(run.tick());
    }

    #[test]
    fn test_manual_timer_records_lifecycle() {
        let mut timer = ManualTimer::default();
        let handle = timer.start(1000);
        assert_eq!(timer.started, 1);
        assert_eq!(timer.period_ms, Some(1000));
        timer.cancel(handle);
        assert_eq!(timer.canceled, 1);
    }
}
