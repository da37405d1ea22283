use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

use meterdash::logic::notifications::BannerPhase;
use meterdash::model::Notification;

use super::theme::Palette;

const BANNER_HEIGHT: u16 = 3;
const MAX_BANNER_WIDTH: u16 = 50;
const TOP_OFFSET: u16 = 1;

/// Width needed for a banner: border, icon, gap, message, padding
pub fn banner_width(message: &str) -> u16 {
    (UnicodeWidthStr::width(message) + 6) as u16
}

/// Slot for the `index`-th banner, stacked downward from the top-right
///
/// Returns `None` once the stack runs out of vertical room.
pub fn banner_area(area: Rect, index: usize, width: u16) -> Option<Rect> {
    let width = width.min(MAX_BANNER_WIDTH).min(area.width);
    let y = TOP_OFFSET + index as u16 * BANNER_HEIGHT;
    if y + BANNER_HEIGHT > area.height {
        return None;
    }

    Some(Rect {
        x: area.x + area.width - width,
        y: area.y + y,
        width,
        height: BANNER_HEIGHT,
    })
}

/// Render every live banner, oldest on top
pub fn render_toasts(f: &mut Frame, area: Rect, banners: &[Notification], now: Instant, palette: &Palette) {
    let live = banners
        .iter()
        .map(|banner| (banner, banner.phase(now)))
        .filter(|(_, phase)| *phase != BannerPhase::Gone);

    for (index, (banner, phase)) in live.enumerate() {
        let Some(toast_area) = banner_area(area, index, banner_width(&banner.message)) else {
            break;
        };

        // Clear the area first to prevent background bleed-through
        f.render_widget(Clear, toast_area);

        let color = palette.severity(banner.severity);
        let mut border_style = Style::default().fg(color);
        let mut text_style = Style::default().fg(palette.text);

        // Entering and leaving banners are drawn faded
        if phase != BannerPhase::Visible {
            border_style = border_style.add_modifier(Modifier::DIM);
            text_style = text_style.add_modifier(Modifier::DIM);
        }

        let line = Line::from(vec![
            Span::styled(
                format!("{} ", banner.severity.icon()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(banner.message.clone(), text_style),
        ]);

        let toast = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(palette.base()),
        );

        f.render_widget(toast, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banners_stack_downward_on_the_right() {
        let area = Rect::new(0, 0, 100, 30);
        let first = banner_area(area, 0, 30).unwrap();
        let second = banner_area(area, 1, 20).unwrap();

        assert_eq!(first.x + first.width, 100);
        assert_eq!(second.x + second.width, 100);
        assert_eq!(second.y, first.y + BANNER_HEIGHT);
    }

    #[test]
    fn test_banner_stack_stops_at_bottom() {
        let area = Rect::new(0, 0, 100, 8);
        assert!(banner_area(area, 1, 20).is_some());
        assert!(banner_area(area, 2, 20).is_none());
    }

    #[test]
    fn test_width_counts_display_columns() {
        assert_eq!(banner_width("Data refreshed successfully!"), 34);
        assert_eq!(banner_width("電気"), 10);
    }
}
