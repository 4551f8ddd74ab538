//! Debug logging utilities.
//!
//! Provides a ring buffer for short diagnostic messages (lifecycle
//! transitions, face switches) that a host can display or dump on exit.
//! No timestamps and no allocation, so the buffer works on `no_std`
//! targets as well as in the simulator.

use heapless::{Deque, String};

/// Maximum number of log lines kept in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 40;

/// Ring buffer for debug log messages.
///
/// Old messages are dropped automatically when the buffer is full; long
/// messages are truncated to [`LOG_LINE_LENGTH`].
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    /// Create a new empty debug log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a log message. If the buffer is full, the oldest is dropped.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for (i, c) in msg.chars().enumerate() {
            if i >= LOG_LINE_LENGTH - 1 {
                break;
            }
            line.push(c).ok();
        }

        self.buffer.push_back(line).ok();
    }

    /// Iterate over log messages (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(heapless::string::StringInner::as_str) }

    /// Number of log entries.
    #[inline]
    pub const fn len(&self) -> usize { self.buffer.len() }

    /// Check if the log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_len() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        log.push("Attached");
        log.push("Detached");
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().next(), Some("Attached"));
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut log = DebugLog::new();
        for _ in 0..LOG_BUFFER_SIZE {
            log.push("old");
        }
        log.push("new");
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().last(), Some("new"));
    }

    #[test]
    fn test_truncates_long_lines() {
        let mut log = DebugLog::new();
        let long_msg = "a line far longer than the maximum stored line length allows";
        log.push(long_msg);
        let stored = log.iter().next().unwrap();
        assert!(stored.len() < LOG_LINE_LENGTH);
    }
}
