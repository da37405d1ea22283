use meterdash::controller::LoadOutcome;
use meterdash::services::fetch::FetchResponse;

use crate::App;

/// Apply a fetch response to the dashboard
pub fn handle_fetch_response(app: &mut App, response: FetchResponse) -> LoadOutcome {
    let seq = response.seq;
    let origin = response.origin;

    let outcome = app.dashboard.apply_fetch(response);

    match outcome {
        LoadOutcome::Applied => tracing::debug!(seq, ?origin, "snapshot applied"),
        LoadOutcome::Stale => tracing::debug!(seq, ?origin, "stale snapshot dropped"),
        LoadOutcome::Empty | LoadOutcome::Failed => {
            tracing::debug!(seq, ?origin, ?outcome, "load did not produce data")
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use meterdash::config::Config;
    use meterdash::controller::REFRESH_OK_MESSAGE;
    use meterdash::model::{Field, Slot};
    use meterdash::prefs::MemoryPrefs;
    use meterdash::view::{ViewPort, REFRESH_IDLE_LABEL};
    use meterdash::Theme;

    use crate::handlers::handle_key;

    fn app_for(path: &std::path::Path) -> App {
        let config = Config {
            data_source: path.display().to_string(),
            ..Config::default()
        };
        App::with_prefs(&config, Box::new(MemoryPrefs::new()))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_key_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"{"remaining_balance": "$640.00"}"#).unwrap();
        let mut app = app_for(&path);

        press(&mut app, KeyCode::Char('r'));
        assert!(app.dashboard.is_refreshing());

        let response = app.fetch_rx.recv().await.unwrap();
        assert_eq!(handle_fetch_response(&mut app, response), LoadOutcome::Applied);

        assert!(!app.dashboard.is_refreshing());
        assert_eq!(app.dashboard.view().text(Slot::RefreshLabel), REFRESH_IDLE_LABEL);
        assert_eq!(
            app.dashboard.view().text(Slot::Field(Field::RemainingBalance)),
            "$640.00"
        );
        assert_eq!(app.dashboard.notifications().active()[0].message, REFRESH_OK_MESSAGE);
    }

    #[tokio::test]
    async fn test_scheduled_poll_renders_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"{"account_number": "A-17"}"#).unwrap();
        let mut app = app_for(&path);

        app.request_poll();
        let response = app.fetch_rx.recv().await.unwrap();
        handle_fetch_response(&mut app, response);

        assert_eq!(
            app.dashboard.view().text(Slot::Field(Field::AccountNumber)),
            "A-17"
        );
        assert!(app.dashboard.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_theme_and_quit_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_for(&dir.path().join("data.json"));

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.dashboard.theme(), Theme::Dark);

        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
