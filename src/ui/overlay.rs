use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use meterdash::view::LOADING_TEXT;

use super::layout::centered_rect;
use super::theme::Palette;

/// Render the loading overlay shown during a manual refresh
pub fn render_loading_overlay(f: &mut Frame, area: Rect, palette: &Palette) {
    let overlay_area = centered_rect(area, 24, 3);

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base());

    let text = Paragraph::new(Line::from(vec![
        Span::styled("⟳ ", Style::default().fg(palette.accent)),
        Span::styled(
            LOADING_TEXT,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, overlay_area);
}
