//! Poll cadence logic

use std::time::Duration;

/// Default period between scheduled loads
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Perceived latency enforced before a manual refresh fetches
pub const MIN_REFRESH_LATENCY: Duration = Duration::from_secs(1);

/// Check if a scheduled poll is due
///
/// Polls run on a fixed period: no back-off after failures and no jitter.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use meterdash::logic::schedule::should_poll;
///
/// let interval = Duration::from_secs(30);
/// assert!(!should_poll(Duration::from_secs(29), interval));
/// assert!(should_poll(Duration::from_secs(30), interval));
/// ```
pub fn should_poll(since_last_poll: Duration, interval: Duration) -> bool {
    since_last_poll >= interval
}

/// Whole seconds until the next poll, for the status bar
pub fn seconds_until_poll(since_last_poll: Duration, interval: Duration) -> u64 {
    let remaining = interval.saturating_sub(since_last_poll);
    // Round up so the countdown reads 1 until the poll actually fires
    remaining.as_millis().div_ceil(1000) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_poll_exact_boundary() {
        assert!(should_poll(Duration::from_secs(30), DEFAULT_POLL_INTERVAL));
        assert!(!should_poll(Duration::from_millis(29_999), DEFAULT_POLL_INTERVAL));
    }

    #[test]
    fn test_should_poll_overdue() {
        assert!(should_poll(Duration::from_secs(95), DEFAULT_POLL_INTERVAL));
    }

    #[test]
    fn test_seconds_until_poll() {
        assert_eq!(seconds_until_poll(Duration::ZERO, DEFAULT_POLL_INTERVAL), 30);
        assert_eq!(seconds_until_poll(Duration::from_millis(29_500), DEFAULT_POLL_INTERVAL), 1);
        assert_eq!(seconds_until_poll(Duration::from_secs(31), DEFAULT_POLL_INTERVAL), 0);
    }
}
