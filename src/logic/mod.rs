//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - balance: Balance parsing and low/critical classification
//! - errors: Fetch error classification
//! - formatting: Field normalization and relative-time phrasing
//! - notifications: Banner lifecycle timing
//! - schedule: Poll cadence decisions

pub mod balance;
pub mod errors;
pub mod formatting;
pub mod notifications;
pub mod schedule;
