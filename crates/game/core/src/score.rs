//! Authoritative score table and running session counter.
//!
//! [`ScoreBoard`] owns two pieces of state: a per-player score table keyed by
//! name, and a running counter accumulated during live play. Clients read the
//! table either as ready-to-display strings (`entries_by_name`,
//! `entries_by_score`) or as typed [`ScoreEntry`] values.
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ScoreError;

/// One row of the score table: a player name paired with their score.
///
/// The `Display` impl produces the canonical `"<Name> : <Score>"` line used
/// everywhere a leaderboard is rendered; there is no other place that format
/// is defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: i64,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.score)
    }
}

/// Per-player score table plus the running score of the live session.
///
/// Names are case-sensitive and unique; re-setting a name's score overwrites
/// the previous value. Entries iterate in byte-wise lexicographic name order,
/// which is also the by-name display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    entries: BTreeMap<String, i64>,
    current: i64,
}

impl ScoreBoard {
    /// Creates an empty board with a zeroed running counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`'s score to `value`, inserting the player if absent.
    ///
    /// # Errors
    ///
    /// - [`ScoreError::InvalidPlayerName`] if `name` is empty or contains
    ///   anything other than ASCII letters and digits
    /// - [`ScoreError::InvalidScoreValue`] if `value` is negative
    pub fn set_score(&mut self, name: &str, value: i64) -> Result<(), ScoreError> {
        if !is_valid_name(name) {
            return Err(ScoreError::InvalidPlayerName(name.to_string()));
        }
        if value < 0 {
            return Err(ScoreError::InvalidScoreValue(value));
        }

        self.entries.insert(name.to_string(), value);
        Ok(())
    }

    /// Adds `delta` points to the running session counter.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidScoreValue`] if `delta` is negative; the
    /// counter only ever moves forward within a session.
    pub fn increase_score(&mut self, delta: i64) -> Result<(), ScoreError> {
        if delta < 0 {
            return Err(ScoreError::InvalidScoreValue(delta));
        }

        self.current += delta;
        Ok(())
    }

    /// The running score accumulated since the session started (or since the
    /// last [`reset_current_score`](Self::reset_current_score)).
    pub fn current_score(&self) -> i64 {
        self.current
    }

    /// Returns the running counter to zero for a fresh session.
    pub fn reset_current_score(&mut self) {
        self.current = 0;
    }

    /// Looks up `name`'s recorded score.
    pub fn score(&self, name: &str) -> Option<i64> {
        self.entries.get(name).copied()
    }

    /// Display lines ordered by player name, ascending.
    pub fn entries_by_name(&self) -> Vec<String> {
        self.entries().map(|entry| entry.to_string()).collect()
    }

    /// Display lines ordered by score, descending; ties fall back to name
    /// order, ascending.
    pub fn entries_by_score(&self) -> Vec<String> {
        let mut rows: Vec<ScoreEntry> = self.entries().collect();
        rows.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        rows.into_iter().map(|entry| entry.to_string()).collect()
    }

    /// Typed entries in name order, for code that wants values rather than
    /// display strings.
    pub fn entries(&self) -> impl Iterator<Item = ScoreEntry> + '_ {
        self.entries
            .iter()
            .map(|(name, score)| ScoreEntry::new(name.clone(), *score))
    }

    /// Number of players on the board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no player has a recorded score yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_score_inserts_and_overwrites() {
        let mut board = ScoreBoard::new();
        board.set_score("Alex", 100).unwrap();
        board.set_score("Alex", 250).unwrap();

        assert_eq!(board.score("Alex"), Some(250));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn set_score_rejects_bad_names() {
        let mut board = ScoreBoard::new();

        assert_eq!(
            board.set_score("", 10),
            Err(ScoreError::InvalidPlayerName(String::new()))
        );
        assert_eq!(
            board.set_score("not a name", 10),
            Err(ScoreError::InvalidPlayerName("not a name".to_string()))
        );
        assert!(board.is_empty());
    }

    #[test]
    fn set_score_rejects_negative_values() {
        let mut board = ScoreBoard::new();

        assert_eq!(
            board.set_score("Alex", -1),
            Err(ScoreError::InvalidScoreValue(-1))
        );
        assert!(board.is_empty());
    }

    #[test]
    fn increase_score_accumulates() {
        let mut board = ScoreBoard::new();
        board.increase_score(500).unwrap();
        board.increase_score(350).unwrap();

        assert_eq!(board.current_score(), 850);
    }

    #[test]
    fn increase_score_rejects_negative_delta() {
        let mut board = ScoreBoard::new();
        board.increase_score(100).unwrap();

        assert_eq!(
            board.increase_score(-50),
            Err(ScoreError::InvalidScoreValue(-50))
        );
        assert_eq!(board.current_score(), 100);
    }

    #[test]
    fn reset_current_score_zeroes_counter_only() {
        let mut board = ScoreBoard::new();
        board.set_score("Alex", 100).unwrap();
        board.increase_score(42).unwrap();

        board.reset_current_score();

        assert_eq!(board.current_score(), 0);
        assert_eq!(board.score("Alex"), Some(100));
    }

    #[test]
    fn entries_by_name_sorts_lexicographically() {
        let mut board = ScoreBoard::new();
        board.set_score("Yeet", 69420).unwrap();
        board.set_score("Alex", 100).unwrap();
        board.set_score("Meme", 1000).unwrap();

        assert_eq!(
            board.entries_by_name(),
            vec!["Alex : 100", "Meme : 1000", "Yeet : 69420"]
        );
    }

    #[test]
    fn entries_by_score_sorts_descending() {
        let mut board = ScoreBoard::new();
        board.set_score("Alex", 100).unwrap();
        board.set_score("Meme", 1000).unwrap();
        board.set_score("Yeet", 69420).unwrap();

        assert_eq!(
            board.entries_by_score(),
            vec!["Yeet : 69420", "Meme : 1000", "Alex : 100"]
        );
    }

    #[test]
    fn entries_by_score_breaks_ties_by_name() {
        let mut board = ScoreBoard::new();
        board.set_score("Zed", 500).unwrap();
        board.set_score("Amy", 500).unwrap();
        board.set_score("Mia", 900).unwrap();

        assert_eq!(
            board.entries_by_score(),
            vec!["Mia : 900", "Amy : 500", "Zed : 500"]
        );
    }

    #[test]
    fn entry_display_uses_canonical_format() {
        assert_eq!(ScoreEntry::new("Meme", 1337).to_string(), "Meme : 1337");
    }

    #[test]
    fn zero_scores_are_valid() {
        let mut board = ScoreBoard::new();
        board.set_score("Alex", 0).unwrap();

        assert_eq!(board.score("Alex"), Some(0));
        assert_eq!(board.entries_by_name(), vec!["Alex : 0"]);
    }
}
