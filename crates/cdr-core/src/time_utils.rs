use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Local, NaiveDate};
use regex::Regex;
use tracing::debug;

/// Weekday labels indexed Sunday = 0 through Saturday = 6.
pub const WEEKDAY_LABELS: [&str; 7] = ["周日", "周一", "周二", "周三", "周四", "周五", "周六"];

/// Display format used for report generation times.
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── CallTime ──────────────────────────────────────────────────────────────────

/// The structural parts of a call start timestamp needed for bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallTime {
    /// Calendar date of the call.
    pub date: NaiveDate,
    /// Hour of day, `0..=23`.
    pub hour: u32,
}

impl CallTime {
    /// Parse the first `YYYY-MM-DD HH:MM` occurrence inside `text`.
    ///
    /// Returns `None` when the pattern is absent, when the hour is outside
    /// `0..=23`, or when the date does not exist on the calendar.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = timestamp_regex().captures(text)?;
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        let hour: u32 = caps[4].parse().ok()?;

        if hour > 23 {
            debug!("Ignoring timestamp with out-of-range hour: {}", text);
            return None;
        }

        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            debug!("Ignoring timestamp with impossible date: {}", text);
            return None;
        };

        Some(Self { date, hour })
    }

    /// Day of week with Sunday = 0 .. Saturday = 6.
    pub fn weekday_index(&self) -> usize {
        self.date.weekday().num_days_from_sunday() as usize
    }
}

/// The date component of a timestamp string: everything before the first
/// space, e.g. `"2025-01-02 09:23:55"` → `"2025-01-02"`.
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split(' ').next().unwrap_or(timestamp)
}

/// Render a local time the way report headers show it.
pub fn format_generated_at(at: DateTime<Local>) -> String {
    at.format(GENERATED_AT_FORMAT).to_string()
}

fn timestamp_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{4})-(\d{2})-(\d{2})\s+(\d{2}):(\d{2})").expect("regex is valid")
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
