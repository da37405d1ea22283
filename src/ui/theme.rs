use ratatui::style::{Color, Modifier, Style};

use meterdash::model::Severity;
use meterdash::Theme;

/// Colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub warning: Color,
    pub error: Color,
    pub success: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                background: Color::Rgb(245, 246, 250),
                text: Color::Rgb(33, 37, 41),
                muted: Color::Rgb(134, 142, 150),
                accent: Color::Rgb(37, 99, 235),
                border: Color::Rgb(206, 212, 218),
                warning: Color::Rgb(217, 119, 6),
                error: Color::Rgb(220, 38, 38),
                success: Color::Rgb(22, 163, 74),
            },
            Theme::Dark => Palette {
                background: Color::Rgb(17, 24, 39),
                text: Color::Rgb(229, 231, 235),
                muted: Color::Rgb(107, 114, 128),
                accent: Color::Rgb(96, 165, 250),
                border: Color::Rgb(55, 65, 81),
                warning: Color::Rgb(251, 191, 36),
                error: Color::Rgb(248, 113, 113),
                success: Color::Rgb(74, 222, 128),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn severity(&self, severity: Severity) -> Color {
        match severity {
            Severity::Success => self.success,
            Severity::Error => self.error,
            Severity::Info => self.accent,
        }
    }

    pub fn key(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}
