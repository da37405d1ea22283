//! Electricity meter dashboard library
//!
//! Exposes the controller and its collaborators so the terminal front end
//! and the integration tests share one implementation.

pub mod api;
pub mod config;
pub mod controller;
pub mod logic;
pub mod model;
pub mod prefs;
pub mod services;
pub mod utils;
pub mod view;

pub use controller::Dashboard;
pub use model::Theme;
