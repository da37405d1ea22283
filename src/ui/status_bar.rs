use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(palette: &Palette) -> Vec<Span<'static>> {
    vec![
        Span::styled("r", palette.key()),
        Span::raw(":Refresh  "),
        Span::styled("t", palette.key()),
        Span::raw(":Theme  "),
        Span::styled("q", palette.key()),
        Span::raw(":Quit"),
    ]
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    source_label: &str,
    seconds_until_poll: u64,
    palette: &Palette,
) {
    let mut spans = vec![
        Span::styled("Source: ", Style::default().fg(palette.muted)),
        Span::raw(source_label.to_string()),
        Span::styled(" │ ", Style::default().fg(palette.border)),
        Span::styled("Next update: ", Style::default().fg(palette.muted)),
        Span::raw(format!("{}s", seconds_until_poll)),
        Span::styled(" │ ", Style::default().fg(palette.border)),
    ];
    spans.extend(build_hotkey_spans(palette));

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(palette.base()),
    );

    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use meterdash::Theme;

    #[test]
    fn test_hotkeys_listed() {
        let spans = build_hotkey_spans(&Palette::for_theme(Theme::Light));
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "r:Refresh  t:Theme  q:Quit");
    }
}
