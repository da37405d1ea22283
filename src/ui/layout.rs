use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Cards per grid row
pub const CARD_COLUMNS: usize = 3;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Title, theme icon and refresh control
    pub header_area: Rect,
    /// One area per meter card, row-major
    pub card_areas: Vec<Rect>,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, card_count: usize) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (top border, text, bottom border)
            Constraint::Min(6),    // Card grid
            Constraint::Length(3), // Status bar
        ])
        .split(terminal_size);

    let rows = card_count.div_ceil(CARD_COLUMNS).max(1);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(main_chunks[1]);

    let mut card_areas = Vec::with_capacity(card_count);
    for row in row_areas.iter() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, CARD_COLUMNS as u32); CARD_COLUMNS])
            .split(*row);
        card_areas.extend(columns.iter().copied());
    }
    card_areas.truncate(card_count);

    LayoutInfo {
        header_area: main_chunks[0],
        card_areas,
        status_area: main_chunks[2],
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_cards_in_two_rows() {
        let info = calculate_layout(Rect::new(0, 0, 120, 40), 6);

        assert_eq!(info.header_area.height, 3);
        assert_eq!(info.status_area.height, 3);
        assert_eq!(info.card_areas.len(), 6);

        // First three share a row, the next three sit below
        assert_eq!(info.card_areas[0].y, info.card_areas[2].y);
        assert!(info.card_areas[3].y > info.card_areas[0].y);
        assert!(info.card_areas[1].x > info.card_areas[0].x);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(area, 50, 50), area);
    }
}
