// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - theme: Light/dark colour palettes
// - layout: Calculates screen layout (header, card grid, status bar)
// - render: Main orchestration function that coordinates all rendering
// - header: Title, theme icon and refresh control
// - cards: The six meter cards with balance alert styling
// - overlay: Loading overlay shown during a manual refresh
// - status_bar: Data source, poll countdown and hotkey legend
// - toast: Notification banners stacked top-right

pub mod cards;
pub mod header;
pub mod layout;
pub mod overlay;
pub mod render;
pub mod status_bar;
pub mod theme;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
