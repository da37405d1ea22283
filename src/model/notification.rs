//! Notification Model
//!
//! Transient banners. Every `push` creates an independent banner with its
//! own clock; nothing is merged, deduplicated or queued behind another.

use std::time::Instant;

use crate::logic::notifications::{banner_phase, should_remove_banner, BannerPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✗",
            Severity::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
}

impl Notification {
    pub fn phase(&self, now: Instant) -> BannerPhase {
        banner_phase(now.saturating_duration_since(self.created_at).as_millis())
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a banner created at `now`, returning its id
    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            created_at: now,
        });
        id
    }

    /// Remove banners whose exit animation has finished; returns how many went
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|n| {
            !should_remove_banner(now.saturating_duration_since(n.created_at).as_millis())
        });
        before - self.items.len()
    }

    /// Banners still on screen, oldest first
    pub fn active(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
