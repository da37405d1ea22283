//! Dashboard Model
//!
//! Vocabulary shared by the controller, the view port and the renderer:
//!
//! - **Field**: the six display values on the meter cards
//! - **Slot / Element / Class**: addressable text and styling on the screen
//! - **Theme**: light/dark preference
//! - **NotificationQueue**: transient banners
//! - **PollSchedule**: fixed-period load timer

pub mod notification;
pub mod schedule;

pub use notification::{Notification, NotificationQueue, Severity};
pub use schedule::PollSchedule;

use std::fmt;
use std::str::FromStr;

/// The six values shown on meter cards, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RemainingBalance,
    ReadingTime,
    RechargeAmount,
    RechargeDate,
    AccountNumber,
    LastUpdated,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::RemainingBalance,
        Field::ReadingTime,
        Field::RechargeAmount,
        Field::RechargeDate,
        Field::AccountNumber,
        Field::LastUpdated,
    ];

    /// Card title
    pub fn label(&self) -> &'static str {
        match self {
            Field::RemainingBalance => "Remaining Balance",
            Field::ReadingTime => "Reading Time",
            Field::RechargeAmount => "Last Recharge",
            Field::RechargeDate => "Recharge Date",
            Field::AccountNumber => "Account Number",
            Field::LastUpdated => "Last Updated",
        }
    }
}

/// Text-bearing parts of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Field(Field),
    RefreshLabel,
    ThemeIcon,
}

/// Parts of the screen that carry styling classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Root,
    Card(Field),
    RefreshControl,
    LoadingOverlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// Card has been painted with data at least once
    FadeIn,
    LowBalance,
    CriticalBalance,
    /// Overlay is showing
    Show,
    Disabled,
    /// Root is using the dark palette
    Dark,
}

/// Colour scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle control: it advertises the theme you'd switch to
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => anyhow::bail!("Unknown theme '{}'", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip_str() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" Light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_toggle_icon_shows_next_action() {
        assert_eq!(Theme::Dark.toggle_icon(), "☀");
        assert_eq!(Theme::Light.toggle_icon(), "☾");
    }

    #[test]
    fn test_field_order() {
        assert_eq!(Field::ALL.len(), 6);
        assert_eq!(Field::ALL[0], Field::RemainingBalance);
        assert_eq!(Field::ALL[5], Field::LastUpdated);
    }
}
