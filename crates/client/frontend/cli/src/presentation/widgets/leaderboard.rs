//! Leaderboard widget rendering the view model's cached entry lines.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use pacman_frontend_core::ScoreViewModel;

/// Render the leaderboard panel.
///
/// Lines come straight from the cached snapshot; the panel title carries the
/// committed sort-mode label so a pending switch is not visible here until
/// the next refresh.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ScoreViewModel) {
    let mut lines = Vec::new();

    if view_model.scores().is_empty() {
        lines.push(Line::from(Span::styled(
            "No scores recorded",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (rank, entry) in view_model.scores().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>3}. ", rank + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(entry.clone()),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Leaderboard ({}) ", view_model.sorted_by().get())),
    );

    frame.render_widget(paragraph, area);
}
