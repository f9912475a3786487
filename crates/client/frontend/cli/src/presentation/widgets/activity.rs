//! Activity feed widget showing recent score events.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use pacman_frontend_core::ActivityLog;

/// Render the activity panel, newest entries first.
pub fn render(frame: &mut Frame, area: Rect, activity: &ActivityLog) {
    let visible = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = activity
        .recent(visible)
        .map(|entry| {
            Line::from(Span::styled(
                entry.to_string(),
                Style::default().fg(Color::Gray),
            ))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Activity "),
    );

    frame.render_widget(paragraph, area);
}
