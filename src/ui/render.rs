use ratatui::{widgets::Block, Frame};
use std::time::Instant;

use meterdash::model::{Class, Element, Field};
use meterdash::view::ViewPort;

use crate::App;

use super::{cards, header, layout, overlay, status_bar, theme::Palette, toast};

/// Main render function - paints the screen state held by the controller
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let now = Instant::now();
    let screen = app.dashboard.view();
    let palette = Palette::for_theme(app.dashboard.theme());

    f.render_widget(Block::default().style(palette.base()), size);

    let layout_info = layout::calculate_layout(size, Field::ALL.len());

    header::render_header(f, layout_info.header_area, screen, &palette);

    for (field, area) in Field::ALL.iter().zip(layout_info.card_areas.iter()) {
        cards::render_card(f, *area, screen, *field, &palette);
    }

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &app.source_label,
        app.schedule.seconds_remaining(now),
        &palette,
    );

    if screen.has_class(Element::LoadingOverlay, Class::Show) {
        overlay::render_loading_overlay(f, size, &palette);
    }

    // Banners sit above everything else
    toast::render_toasts(f, size, app.dashboard.notifications().active(), now, &palette);
}
