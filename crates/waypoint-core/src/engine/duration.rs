//! Duration inference from goal text.

use std::sync::LazyLock;

use jiff::{SignedDuration, Timestamp};
use regex::Regex;

/// Upper bound on inferred plan length, keeps date arithmetic in range.
pub const MAX_PLAN_DAYS: i64 = 365_000;

/// Days assumed for goals that mention shipping something.
pub const SHIPPING_FALLBACK_DAYS: i64 = 14;

/// Days assumed for every other goal without an explicit duration.
pub const DEFAULT_FALLBACK_DAYS: i64 = 30;

const SHIPPING_KEYWORDS: [&str; 3] = ["launch", "ship", "release"];

static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*(day|days|week|weeks|month|months)")
        .expect("duration pattern is a valid regex")
});

/// Inferred length of a goal, in whole days, and the resulting deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    /// Always within `1..=MAX_PLAN_DAYS`
    pub days: i64,
    pub deadline: Timestamp,
}

impl Duration {
    fn from_days(days: i64, now: Timestamp) -> Self {
        let days = days.clamp(1, MAX_PLAN_DAYS);
        let deadline = now
            .checked_add(SignedDuration::from_hours(days * 24))
            .unwrap_or(Timestamp::MAX);
        Self { days, deadline }
    }
}

/// Infers a duration from free text. Never fails.
///
/// The first `<number> <unit>` phrase wins, with weeks counted as 7 days and
/// months as 30. Without one, goals mentioning a launch, ship or release get
/// two weeks and anything else gets thirty days.
pub fn parse_duration(text: &str, now: Timestamp) -> Duration {
    let text = text.to_lowercase();

    let days = match DURATION_PATTERN.captures(&text) {
        Some(caps) => {
            let count = caps[1].parse::<i64>().unwrap_or(i64::MAX);
            let factor = match &caps[2] {
                unit if unit.starts_with("week") => 7,
                unit if unit.starts_with("month") => 30,
                _ => 1,
            };
            count.saturating_mul(factor)
        }
        None if SHIPPING_KEYWORDS.iter().any(|k| text.contains(k)) => SHIPPING_FALLBACK_DAYS,
        None => DEFAULT_FALLBACK_DAYS,
    };

    Duration::from_days(days, now)
}
