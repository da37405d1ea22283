use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use meterdash::model::{Class, Element, Slot};
use meterdash::view::{Screen, ViewPort};

use super::theme::Palette;

/// Render the header: title on the left, controls on the right
pub fn render_header(f: &mut Frame, area: Rect, screen: &Screen, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(palette.base());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled("⚡ ", Style::default().fg(palette.warning)),
        Span::styled(
            "Electricity Meter",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(title, halves[0]);

    // Disabled control is greyed out while a refresh runs
    let refresh_style = if screen.has_class(Element::RefreshControl, Class::Disabled) {
        Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    };

    let controls = Paragraph::new(Line::from(vec![
        Span::styled(screen.text(Slot::ThemeIcon).to_string(), palette.key()),
        Span::styled(" t", Style::default().fg(palette.muted)),
        Span::raw("   "),
        Span::styled(screen.text(Slot::RefreshLabel).to_string(), refresh_style),
        Span::styled(" r ", Style::default().fg(palette.muted)),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(controls, halves[1]);
}
