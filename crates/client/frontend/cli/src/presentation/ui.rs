//! UI rendering composing the score widgets into the full terminal layout.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::presentation::{terminal::Tui, widgets};
use pacman_core::GameSession;
use pacman_frontend_core::{ActivityLog, ScoreViewModel};

const ACTIVITY_PANEL_HEIGHT: u16 = 7;

/// Rendering context containing all state needed to draw one frame.
pub struct RenderContext<'a> {
    pub session: &'a GameSession,
    pub view_model: &'a ScoreViewModel,
    pub activity: &'a ActivityLog,
    pub player_name: &'a str,
}

/// Render the terminal UI: header, leaderboard, activity feed, footer.
///
/// Widgets read the view model's cached strings directly; the header is the
/// only place that also shows the live counter, so the difference between a
/// stale display and the board's running score stays visible on screen.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                      // Header
                Constraint::Min(0),                         // Leaderboard
                Constraint::Length(ACTIVITY_PANEL_HEIGHT),  // Activity feed
                Constraint::Length(2),                      // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx);
        widgets::leaderboard::render(frame, chunks[1], ctx.view_model);
        widgets::activity::render(frame, chunks[2], ctx.activity);
        widgets::footer::render(frame, chunks[3]);
    })?;

    Ok(())
}
