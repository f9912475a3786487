//! Header widget displaying the cached score line next to the live counter.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::ui::RenderContext;

/// Render the header panel.
///
/// Shows the view model's cached `"Score : N"` line alongside the board's
/// live running counter; the two diverge until the player refreshes.
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let live = ctx.view_model.current_score(ctx.session.scores());

    let text = vec![Line::from(vec![
        Span::styled(
            ctx.view_model.current_score_property().get().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Live: "),
        Span::styled(live.to_string(), Style::default().fg(Color::LightGreen)),
        Span::raw(" | Player: "),
        Span::styled(
            ctx.player_name.to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ])];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", ctx.session.title())),
    );

    frame.render_widget(paragraph, area);
}
