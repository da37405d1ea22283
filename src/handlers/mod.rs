//! Event Handlers
//!
//! - api: responses from the background fetch service
//! - keyboard: user keyboard input
//!
//! Handlers take `&mut App`; all dashboard state changes go through the
//! controller.

pub mod api;
pub mod keyboard;

pub use api::handle_fetch_response;
pub use keyboard::handle_key;
