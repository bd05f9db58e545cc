//! Transient user notifications.
//!
//! Replaces blocking alert dialogs with a FIFO of short-lived notices. One
//! notice is visible at a time; it expires after a fixed number of ticks and
//! the next queued notice (if any) surfaces.

use std::collections::VecDeque;

/// Ticks a notice stays visible (ticks arrive every ~100ms).
const NOTICE_TICKS: u8 = 30;

/// Severity of a notice, used for styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational ("Copied to clipboard").
    Info,
    /// Validation or request failure.
    Error,
}

/// A single transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity for styling.
    pub level: NoticeLevel,
    /// Human-readable message.
    pub text: String,
}

/// FIFO of pending notices with tick-based expiry.
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    queue: VecDeque<Notice>,
    remaining_ticks: u8,
}

impl NoticeQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a notice. It becomes visible once earlier notices expire.
    pub fn push(&mut self, level: NoticeLevel, text: impl Into<String>) {
        if self.queue.is_empty() {
            self.remaining_ticks = NOTICE_TICKS;
        }
        self.queue.push_back(Notice { level, text: text.into() });
    }

    /// The notice currently visible. `None` if the queue is empty.
    pub fn current(&self) -> Option<&Notice> {
        self.queue.front()
    }

    /// Advance one tick. Returns `true` if the visible notice changed.
    pub fn tick(&mut self) -> bool {
        if self.queue.is_empty() {
            return false;
        }
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            self.queue.pop_front();
            self.remaining_ticks = NOTICE_TICKS;
            return true;
        }
        false
    }

    /// Drop all pending notices.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_expire_in_order() {
        let mut notices = NoticeQueue::new();
        notices.push(NoticeLevel::Info, "first");
        notices.push(NoticeLevel::Error, "second");

        assert_eq!(notices.current().map(|n| n.text.as_str()), Some("first"));

        let mut changed = false;
        for _ in 0..NOTICE_TICKS {
            changed = notices.tick();
        }
        assert!(changed);
        assert_eq!(notices.current().map(|n| n.text.as_str()), Some("second"));
    }

    #[test]
    fn tick_on_empty_queue_is_noop() {
        let mut notices = NoticeQueue::new();
        assert!(!notices.tick());
        assert!(notices.current().is_none());
    }
}
