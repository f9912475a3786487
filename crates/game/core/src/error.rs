//! Error types for score table mutations.

/// Errors surfaced while mutating a [`crate::ScoreBoard`].
///
/// Every rejected mutation leaves the board untouched; callers decide whether
/// to retry with corrected input or report the failure upstream.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    /// Player names must be non-empty and contain only ASCII letters and
    /// digits.
    #[error("invalid player name {0:?}: names must be non-empty and alphanumeric")]
    InvalidPlayerName(String),

    /// Score values and increments must be zero or positive.
    #[error("invalid score value {0}: scores must be zero or positive")]
    InvalidScoreValue(i64),
}
