//! Pull-based view model caching score state as display-ready strings.

use pacman_core::{ScoreBoard, ScoreError};

use crate::property::StringProperty;

/// Leaderboard ordering applied when the view model refreshes.
///
/// The strum serializations are the exact labels bound into UIs, so the enum
/// and its display strings cannot drift apart.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
pub enum SortMode {
    #[default]
    #[strum(serialize = "Sorted by Name")]
    ByName,
    #[strum(serialize = "Sorted by Score")]
    ByScore,
}

impl SortMode {
    /// The other ordering.
    pub fn toggled(self) -> Self {
        match self {
            SortMode::ByName => SortMode::ByScore,
            SortMode::ByScore => SortMode::ByName,
        }
    }
}

/// Caching adapter between a [`ScoreBoard`] and a rendering layer.
///
/// The view model never holds the board; callers pass it into each operation,
/// which keeps ownership with the game session and all calls on one thread of
/// control. Cached outputs reflect the board as of the last
/// [`update`](Self::update); the UI decides exactly when a
/// re-render-triggering refresh happens.
///
/// # Invariants
///
/// - `entries`, `current_score`, and `sorted_by` all describe the same
///   snapshot; `update` is the only operation that moves them, and it moves
///   all three.
/// - `switch_score_order` touches only the pending mode; no cached output
///   changes until the next `update`.
#[derive(Clone, Debug)]
pub struct ScoreViewModel {
    /// Cached `"Score : <N>"` line.
    current_score: StringProperty,
    /// Cached sort-mode label.
    sorted_by: StringProperty,
    /// Cached leaderboard lines in the order of the last committed mode.
    entries: Vec<String>,
    /// Mode the next `update` will apply.
    pending_sort: SortMode,
}

impl ScoreViewModel {
    /// Binds a view model to the given board.
    ///
    /// The entry list is seeded in the default by-name order so a freshly
    /// bound UI has a leaderboard to draw. The score line starts at
    /// `"Score : 0"` regardless of the board's running counter; only an
    /// explicit [`update`](Self::update) reads the counter into the cache.
    pub fn new(scores: &ScoreBoard) -> Self {
        Self {
            current_score: StringProperty::new(score_line(0)),
            sorted_by: StringProperty::new(SortMode::ByName.to_string()),
            entries: scores.entries_by_name(),
            pending_sort: SortMode::ByName,
        }
    }

    /// The board's running score, read live past the cache.
    pub fn current_score(&self, scores: &ScoreBoard) -> i64 {
        scores.current_score()
    }

    /// Cached score line for label binding; moves only on `update`.
    pub fn current_score_property(&self) -> &StringProperty {
        &self.current_score
    }

    /// Cached leaderboard lines from the last snapshot.
    pub fn scores(&self) -> &[String] {
        &self.entries
    }

    /// Cached sort-mode label; trails `switch_score_order` until `update`.
    pub fn sorted_by(&self) -> &StringProperty {
        &self.sorted_by
    }

    /// The ordering the next `update` will apply.
    pub fn pending_sort(&self) -> SortMode {
        self.pending_sort
    }

    /// Flips the pending ordering. Takes effect on the next `update`.
    pub fn switch_score_order(&mut self) {
        self.pending_sort = self.pending_sort.toggled();
    }

    /// Writes `value` through to the board under `name`, bypassing the cache.
    ///
    /// The new entry is visible immediately through the board's own accessors;
    /// the cached leaderboard keeps its old snapshot until `update`.
    ///
    /// # Errors
    ///
    /// Propagates [`ScoreError`] from [`ScoreBoard::set_score`] unchanged.
    pub fn set_player_score(
        &self,
        scores: &mut ScoreBoard,
        name: &str,
        value: i64,
    ) -> Result<(), ScoreError> {
        scores.set_score(name, value)
    }

    /// Pulls a fresh snapshot: entry list under the pending mode, score line
    /// from the running counter, and the committed mode label.
    pub fn update(&mut self, scores: &ScoreBoard) {
        self.entries = match self.pending_sort {
            SortMode::ByName => scores.entries_by_name(),
            SortMode::ByScore => scores.entries_by_score(),
        };
        self.current_score.set(score_line(scores.current_score()));
        self.sorted_by.set(self.pending_sort.to_string());
    }
}

fn score_line(score: i64) -> String {
    format!("Score : {score}")
}
