//! Footer widget listing the key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the key-hint footer.
pub fn render(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("Space", Style::default().fg(Color::Yellow)),
        Span::raw(" pellet  "),
        Span::styled("g", Style::default().fg(Color::Yellow)),
        Span::raw(" ghost  "),
        Span::styled("s", Style::default().fg(Color::Yellow)),
        Span::raw(" save run  "),
        Span::styled("c", Style::default().fg(Color::Yellow)),
        Span::raw(" reset  "),
        Span::styled("o", Style::default().fg(Color::Yellow)),
        Span::raw(" sort order  "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(" refresh  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]);

    frame.render_widget(Paragraph::new(hints), area);
}
