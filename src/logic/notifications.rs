//! Notification banner lifecycle timing

/// Delay before a new banner slides in
pub const ENTER_DELAY_MS: u128 = 100;

/// Time from creation until the banner starts leaving
pub const DWELL_MS: u128 = 3000;

/// Duration of the exit animation
pub const EXIT_MS: u128 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    Entering,
    Visible,
    Leaving,
    Gone,
}

/// Lifecycle phase of a banner that has existed for `elapsed_ms`
///
/// # Examples
/// ```
/// use meterdash::logic::notifications::{banner_phase, BannerPhase};
///
/// assert_eq!(banner_phase(0), BannerPhase::Entering);
/// assert_eq!(banner_phase(1500), BannerPhase::Visible);
/// assert_eq!(banner_phase(3100), BannerPhase::Leaving);
/// assert_eq!(banner_phase(3300), BannerPhase::Gone);
/// ```
pub fn banner_phase(elapsed_ms: u128) -> BannerPhase {
    if elapsed_ms < ENTER_DELAY_MS {
        BannerPhase::Entering
    } else if elapsed_ms < DWELL_MS {
        BannerPhase::Visible
    } else if elapsed_ms < DWELL_MS + EXIT_MS {
        BannerPhase::Leaving
    } else {
        BannerPhase::Gone
    }
}

/// Whether a banner should be removed from the screen
pub fn should_remove_banner(elapsed_ms: u128) -> bool {
    banner_phase(elapsed_ms) == BannerPhase::Gone
}
