//! # Notices
//!
//! Transient user notifications ("Please, input text", send failures).
//! The only capability the core needs is `warn`. The TUI renders whatever
//! `NoticeBoard` currently holds; a newer notice replaces the older one and
//! each expires on its own after [`NOTICE_TTL`].

use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::warn;

/// How long a notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

pub trait Notifier: Send + Sync {
    fn warn(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub raised_at: Instant,
}

impl Notice {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= NOTICE_TTL
    }
}

#[derive(Default)]
pub struct NoticeBoard {
    current: Mutex<Option<Notice>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notice to display at `now`, dropping it once expired.
    pub fn current(&self, now: Instant) -> Option<Notice> {
        let mut slot = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if slot.as_ref().is_some_and(|n| n.is_expired(now)) {
            *slot = None;
        }
        slot.clone()
    }

    fn raise(&self, message: &str, at: Instant) {
        let mut slot = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(Notice {
            message: message.to_string(),
            raised_at: at,
        });
    }
}

impl Notifier for NoticeBoard {
    fn warn(&self, message: &str) {
        warn!("Notice: {}", message);
        self.raise(message, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_starts_empty() {
        let board = NoticeBoard::new();
        assert!(board.current(Instant::now()).is_none());
    }

    #[test]
    fn test_warn_is_visible_until_ttl() {
        let board = NoticeBoard::new();
        let start = Instant::now();
        board.raise("Please, input text", start);

        let shown = board.current(start + Duration::from_secs(1)).unwrap();
        assert_eq!(shown.message, "Please, input text");
        assert!(board.current(start + NOTICE_TTL).is_none());
        // Stays cleared
        assert!(board.current(start + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn test_newer_notice_replaces_older() {
        let board = NoticeBoard::new();
        board.warn("first");
        board.warn("second");
        assert_eq!(board.current(Instant::now()).unwrap().message, "second");
    }
}
