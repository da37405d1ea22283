//! Keyboard Input Handler

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Refresh,
    ToggleTheme,
    Quit,
}

/// Map a key press to a dashboard action
pub fn action_for(key: KeyEvent) -> Option<KeyAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('r') | KeyCode::F(5) => Some(KeyAction::Refresh),
        KeyCode::Char('t') => Some(KeyAction::ToggleTheme),
        _ => None,
    }
}

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let Some(action) = action_for(key) else {
        return;
    };

    tracing::debug!(?action, "key pressed");

    match action {
        KeyAction::Refresh => app.request_refresh(),
        KeyAction::ToggleTheme => {
            app.dashboard.toggle_theme();
        }
        KeyAction::Quit => app.should_quit = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_refresh_keys() {
        assert_eq!(action_for(press(KeyCode::Char('r'))), Some(KeyAction::Refresh));
        assert_eq!(action_for(press(KeyCode::F(5))), Some(KeyAction::Refresh));
    }

    #[test]
    fn test_theme_key() {
        assert_eq!(action_for(press(KeyCode::Char('t'))), Some(KeyAction::ToggleTheme));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for(press(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(action_for(press(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(
            action_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(action_for(press(KeyCode::Char('c'))), None);
        assert_eq!(action_for(press(KeyCode::Char('x'))), None);
        assert_eq!(action_for(press(KeyCode::Enter)), None);
    }
}
