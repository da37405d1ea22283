//! Dashboard controller
//!
//! Owns the view port, the preference store and the notification queue, and
//! implements every user-visible behaviour: loading, rendering, balance
//! alerts, manual refresh, banners and theme switching.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::time::Instant;

use crate::api::{MeterSnapshot, SnapshotSource};
use crate::logic::balance::{classify_balance, BalanceLevel};
use crate::logic::formatting::{display_value, relative_time, ERROR_TEXT};
use crate::model::{Class, Element, Field, NotificationQueue, Severity, Slot, Theme};
use crate::prefs::{PreferenceStore, THEME_KEY};
use crate::services::fetch::{
    execute_fetch, FetchOrigin, FetchRequest, FetchResponse, RequestSequence,
};
use crate::view::{ViewPort, REFRESH_BUSY_LABEL, REFRESH_IDLE_LABEL};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load meter data";
pub const NO_DATA_MESSAGE: &str = "No data available";
pub const REFRESH_OK_MESSAGE: &str = "Data refreshed successfully!";
pub const REFRESH_FAILED_MESSAGE: &str = "Failed to refresh data";

/// Result of consuming one fetch response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Snapshot rendered
    Applied,
    /// Payload was null; "No data available" shown
    Empty,
    /// Fetch failed; error state shown
    Failed,
    /// Older than the last applied response; discarded
    Stale,
}

pub struct Dashboard<V, P> {
    view: V,
    prefs: P,
    notifications: NotificationQueue,
    sequence: RequestSequence,
    last_applied_seq: Option<u64>,
}

impl<V: ViewPort, P: PreferenceStore> Dashboard<V, P> {
    /// Build the controller and apply the persisted theme
    pub fn new(view: V, prefs: P) -> Self {
        let mut dashboard = Self {
            view,
            prefs,
            notifications: NotificationQueue::new(),
            sequence: RequestSequence::new(),
            last_applied_seq: None,
        };
        dashboard.load_theme();
        dashboard
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Sequence allocator to hand to the fetch service
    pub fn sequence(&self) -> RequestSequence {
        self.sequence.clone()
    }

    // ============================================
    // LOADING
    // ============================================

    /// Fetch from `source` and render the result
    pub async fn load_data<S>(&mut self, source: &S) -> LoadOutcome
    where
        S: SnapshotSource + Sync,
    {
        self.fetch_and_apply(source, FetchOrigin::Scheduled).await
    }

    async fn fetch_and_apply<S>(&mut self, source: &S, origin: FetchOrigin) -> LoadOutcome
    where
        S: SnapshotSource + Sync,
    {
        let seq = self.sequence.next();
        let response = execute_fetch(source, origin, seq).await;
        self.apply_fetch(response)
    }

    pub fn apply_fetch(&mut self, response: FetchResponse) -> LoadOutcome {
        self.apply_fetch_at(response, Utc::now())
    }

    /// Consume a fetch response as of `now`
    ///
    /// Responses older than the last applied one are dropped so a slow
    /// request can't overwrite newer data. A manual response always
    /// completes its refresh, stale or not.
    pub fn apply_fetch_at(&mut self, response: FetchResponse, now: DateTime<Utc>) -> LoadOutcome {
        let stale = self
            .last_applied_seq
            .is_some_and(|last| response.seq < last);

        let outcome = if stale {
            tracing::debug!(
                seq = response.seq,
                last = ?self.last_applied_seq,
                "discarding stale response"
            );
            LoadOutcome::Stale
        } else {
            self.last_applied_seq = Some(response.seq);
            match response.result {
                Ok(Some(snapshot)) => {
                    self.render_at(Some(&snapshot), now);
                    LoadOutcome::Applied
                }
                Ok(None) => {
                    self.render_at(None, now);
                    LoadOutcome::Empty
                }
                Err(failure) => {
                    tracing::error!(
                        seq = response.seq,
                        error_type = failure.error_type.as_str(),
                        "Error loading data: {}",
                        failure.message
                    );
                    self.show_error(LOAD_FAILED_MESSAGE);
                    LoadOutcome::Failed
                }
            }
        };

        if response.origin == FetchOrigin::Manual {
            self.finish_refresh(Ok(outcome));
        }

        outcome
    }

    // ============================================
    // RENDERING
    // ============================================

    pub fn render(&mut self, snapshot: Option<&MeterSnapshot>) {
        self.render_at(snapshot, Utc::now());
    }

    /// Paint a snapshot; relative times are computed against `now`
    pub fn render_at(&mut self, snapshot: Option<&MeterSnapshot>, now: DateTime<Utc>) {
        let Some(snapshot) = snapshot else {
            self.show_error(NO_DATA_MESSAGE);
            return;
        };

        let values = [
            (Field::RemainingBalance, snapshot.remaining_balance.as_deref()),
            (Field::ReadingTime, snapshot.reading_time.as_deref()),
            (Field::RechargeAmount, snapshot.last_recharge_amount.as_deref()),
            (Field::RechargeDate, snapshot.last_recharge_date.as_deref()),
            (Field::AccountNumber, snapshot.account_number.as_deref()),
        ];
        for (field, value) in values {
            self.view.set_text(Slot::Field(field), display_value(value));
        }

        let updated = relative_time(snapshot.timestamp.as_deref(), now);
        self.view.set_text(Slot::Field(Field::LastUpdated), &updated);

        for field in Field::ALL {
            self.view.add_class(Element::Card(field), Class::FadeIn);
        }

        self.classify_balance(snapshot.remaining_balance.as_deref());
    }

    /// Recompute low/critical styling on the balance card
    ///
    /// An unavailable balance leaves the current styling untouched.
    pub fn classify_balance(&mut self, balance: Option<&str>) {
        let Some(balance) = balance else {
            return;
        };

        let card = Element::Card(Field::RemainingBalance);
        self.view.remove_class(card, Class::LowBalance);
        self.view.remove_class(card, Class::CriticalBalance);

        match classify_balance(balance) {
            BalanceLevel::Critical => self.view.add_class(card, Class::CriticalBalance),
            BalanceLevel::Low => self.view.add_class(card, Class::LowBalance),
            BalanceLevel::Normal => {}
        }
    }

    /// Put "Error" in every field and raise an error banner
    pub fn show_error(&mut self, message: &str) {
        for field in Field::ALL {
            self.view.set_text(Slot::Field(field), ERROR_TEXT);
        }
        self.notify(message, Severity::Error);
    }

    // ============================================
    // MANUAL REFRESH
    // ============================================

    pub fn is_refreshing(&self) -> bool {
        self.view.has_class(Element::RefreshControl, Class::Disabled)
    }

    /// Put the refresh control into its busy state
    ///
    /// Returns the request to dispatch, or `None` if a refresh is already
    /// running (the control is disabled).
    pub fn begin_refresh(&mut self) -> Option<FetchRequest> {
        if self.is_refreshing() {
            return None;
        }

        self.view.add_class(Element::LoadingOverlay, Class::Show);
        self.view.set_text(Slot::RefreshLabel, REFRESH_BUSY_LABEL);
        self.view.add_class(Element::RefreshControl, Class::Disabled);

        Some(FetchRequest::manual())
    }

    /// Report the refresh result and restore the control to idle
    ///
    /// A load that ran to completion is a successful refresh even if it
    /// showed the error state; only a refresh that never produced a load
    /// (`Err`) is reported as failed.
    pub fn finish_refresh(&mut self, result: Result<LoadOutcome>) {
        match result {
            Ok(outcome) => {
                tracing::debug!(?outcome, "refresh completed");
                self.notify(REFRESH_OK_MESSAGE, Severity::Success);
            }
            Err(e) => {
                tracing::error!("Refresh failed: {:#}", e);
                self.notify(REFRESH_FAILED_MESSAGE, Severity::Error);
            }
        }

        self.view.remove_class(Element::LoadingOverlay, Class::Show);
        self.view.set_text(Slot::RefreshLabel, REFRESH_IDLE_LABEL);
        self.view.remove_class(Element::RefreshControl, Class::Disabled);
    }

    /// Busy state, minimum latency, fetch, then restore
    ///
    /// Returns `None` when a refresh was already in progress.
    pub async fn refresh<S>(&mut self, source: &S) -> Option<LoadOutcome>
    where
        S: SnapshotSource + Sync,
    {
        let request = self.begin_refresh()?;
        tokio::time::sleep(request.delay).await;
        Some(self.fetch_and_apply(source, request.origin).await)
    }

    // ============================================
    // NOTIFICATIONS
    // ============================================

    pub fn notify(&mut self, message: &str, severity: Severity) {
        self.notify_at(message, severity, Instant::now());
    }

    pub fn notify_at(&mut self, message: &str, severity: Severity, now: Instant) {
        let id = self.notifications.push(message, severity, now);
        tracing::debug!(id, ?severity, message, "notification raised");
    }

    /// Drop banners whose exit animation has finished
    pub fn expire_notifications(&mut self, now: Instant) {
        self.notifications.expire(now);
    }

    // ============================================
    // THEME
    // ============================================

    /// Theme currently applied to the screen
    pub fn theme(&self) -> Theme {
        if self.view.has_class(Element::Root, Class::Dark) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Apply the persisted theme, defaulting to light
    pub fn load_theme(&mut self) -> Theme {
        let theme = match self.prefs.get(THEME_KEY) {
            Ok(Some(stored)) => stored.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme: {}", e);
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {:#}", e);
                Theme::default()
            }
        };

        self.apply_theme(theme);
        theme
    }

    /// Switch to the other theme and persist it
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme().toggled();
        self.apply_theme(theme);

        if let Err(e) = self.prefs.set(THEME_KEY, theme.as_str()) {
            tracing::warn!("Failed to save theme preference: {:#}", e);
        }

        theme
    }

    fn apply_theme(&mut self, theme: Theme) {
        match theme {
            Theme::Dark => self.view.add_class(Element::Root, Class::Dark),
            Theme::Light => self.view.remove_class(Element::Root, Class::Dark),
        }
        self.view.set_text(Slot::ThemeIcon, theme.toggle_icon());
    }
}
