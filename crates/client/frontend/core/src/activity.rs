//! Bounded feed of recent score events for UI message panels.
use std::collections::VecDeque;

/// Fixed-capacity FIFO of event descriptions shown to the player.
///
/// Once full, pushing drops the oldest entry. Capacity is clamped to at
/// least one.
#[derive(Clone, Debug)]
pub struct ActivityLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, text: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(text.into());
    }

    /// Up to `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().take(limit).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_drops_oldest_beyond_capacity() {
        let mut log = ActivityLog::new(2);
        log.push("first");
        log.push("second");
        log.push("third");

        let all: Vec<_> = log.iter().collect();
        assert_eq!(all, vec!["second", "third"]);
    }

    #[test]
    fn recent_yields_newest_first() {
        let mut log = ActivityLog::new(8);
        log.push("one");
        log.push("two");
        log.push("three");

        let recent: Vec<_> = log.recent(2).collect();
        assert_eq!(recent, vec!["three", "two"]);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut log = ActivityLog::new(0);
        log.push("only");

        assert_eq!(log.iter().count(), 1);
    }
}
