//! Balance severity classification

/// Balances strictly below this are critical
pub const CRITICAL_THRESHOLD: f64 = 100.0;

/// Balances strictly below this (and not critical) are low
pub const LOW_THRESHOLD: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceLevel {
    Normal,
    Low,
    Critical,
}

/// Extract the numeric amount from currency-like text
///
/// Every character other than ASCII digits and `.` is dropped, then the
/// longest leading decimal number is parsed. Signs are dropped along with
/// everything else, so "-$20" reads as 20.
///
/// # Examples
/// ```
/// use meterdash::logic::balance::parse_balance;
///
/// assert_eq!(parse_balance("$1,234.50"), Some(1234.5));
/// assert_eq!(parse_balance("KES 45"), Some(45.0));
/// assert_eq!(parse_balance("1.2.3"), Some(1.2));
/// assert_eq!(parse_balance("none"), None);
/// ```
pub fn parse_balance(text: &str) -> Option<f64> {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    for (idx, c) in stripped.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = idx + 1;
    }

    let number = &stripped[..end];
    if !number.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    number.parse::<f64>().ok()
}

/// Severity for a numeric balance
pub fn level_for(amount: f64) -> BalanceLevel {
    if amount < CRITICAL_THRESHOLD {
        BalanceLevel::Critical
    } else if amount < LOW_THRESHOLD {
        BalanceLevel::Low
    } else {
        BalanceLevel::Normal
    }
}

/// Severity for balance text; unparseable text is `Normal`
pub fn classify_balance(text: &str) -> BalanceLevel {
    parse_balance(text).map(level_for).unwrap_or(BalanceLevel::Normal)
}
