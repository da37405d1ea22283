use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use meterdash::model::{Class, Element, Field, Slot};
use meterdash::view::{Screen, ViewPort};

use super::theme::Palette;

/// Border colour and modifiers for a card, from its alert classes
pub fn card_border_style(screen: &Screen, field: Field, palette: &Palette) -> Style {
    let card = Element::Card(field);

    if screen.has_class(card, Class::CriticalBalance) {
        Style::default()
            .fg(palette.error)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
    } else if screen.has_class(card, Class::LowBalance) {
        Style::default().fg(palette.warning).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border)
    }
}

fn value_color(screen: &Screen, field: Field, palette: &Palette) -> Color {
    let card = Element::Card(field);
    if screen.has_class(card, Class::CriticalBalance) {
        palette.error
    } else if screen.has_class(card, Class::LowBalance) {
        palette.warning
    } else {
        palette.text
    }
}

/// Render one meter card
pub fn render_card(f: &mut Frame, area: Rect, screen: &Screen, field: Field, palette: &Palette) {
    let border_type = if field == Field::RemainingBalance {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", field.label()),
            Style::default().fg(palette.muted),
        ))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(card_border_style(screen, field, palette))
        .style(palette.base());

    let mut value_style = Style::default()
        .fg(value_color(screen, field, palette))
        .add_modifier(Modifier::BOLD);

    // Cards stay dim until their first successful render
    if !screen.has_class(Element::Card(field), Class::FadeIn) {
        value_style = value_style.fg(palette.muted).remove_modifier(Modifier::BOLD);
    }

    // Vertically center a single line of text
    let padding = area.height.saturating_sub(3) / 2;
    let mut lines = vec![Line::raw(""); padding as usize];
    lines.push(Line::from(Span::styled(
        screen.text(Slot::Field(field)).to_string(),
        value_style,
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
