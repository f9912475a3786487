//! Game session object owning the score state for one play-through.

use crate::score::ScoreBoard;

/// One play session of the game.
///
/// The session owns the [`ScoreBoard`] for its lifetime; view models and other
/// presentation adapters borrow the board per call and never hold it. Title
/// and author are free-form metadata carried for display.
#[derive(Clone, Debug)]
pub struct GameSession {
    title: String,
    author: String,
    scores: ScoreBoard,
}

impl GameSession {
    /// Creates a session with an empty score board.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            scores: ScoreBoard::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Read access to the session's score state.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Mutable access for game logic that awards or records points.
    pub fn scores_mut(&mut self) -> &mut ScoreBoard {
        &mut self.scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_with_empty_board() {
        let session = GameSession::new("Pacman", "Namco");

        assert_eq!(session.title(), "Pacman");
        assert_eq!(session.author(), "Namco");
        assert!(session.scores().is_empty());
        assert_eq!(session.scores().current_score(), 0);
    }

    #[test]
    fn scores_mut_exposes_the_owned_board() {
        let mut session = GameSession::new("Pacman", "Namco");
        session.scores_mut().increase_score(10).unwrap();

        assert_eq!(session.scores().current_score(), 10);
    }
}
