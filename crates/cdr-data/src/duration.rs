//! Duration text → seconds, for the three conventions seen in exports.

use std::sync::OnceLock;

use cdr_core::models::DurationFormat;
use regex::{Captures, Regex};

/// A duration field that matched one of the recognised conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDuration {
    pub seconds: u64,
    pub format: DurationFormat,
}

/// Parse a free-text duration field.
///
/// Conventions are tried in priority order and the first match wins:
/// `H:MM:SS`, then `N分M秒`, then `N秒`. Patterns are searched anywhere in
/// the text. Returns `None` when nothing matches.
pub fn parse_duration(text: &str) -> Option<ParsedDuration> {
    if let Some(seconds) = clock_regex().captures(text).and_then(|c| clock_seconds(&c)) {
        return Some(ParsedDuration {
            seconds,
            format: DurationFormat::Clock,
        });
    }

    if let Some(seconds) = minutes_regex()
        .captures(text)
        .and_then(|c| minutes_seconds(&c))
    {
        return Some(ParsedDuration {
            seconds,
            format: DurationFormat::MinutesSeconds,
        });
    }

    seconds_regex()
        .captures(text)
        .and_then(|c| number(&c, 1))
        .map(|seconds| ParsedDuration {
            seconds,
            format: DurationFormat::Seconds,
        })
}

/// Seconds for `text`, or `0` when it is not a recognised duration.
pub fn duration_seconds_or_zero(text: &str) -> u64 {
    parse_duration(text).map(|d| d.seconds).unwrap_or(0)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn clock_seconds(caps: &Captures<'_>) -> Option<u64> {
    let hours = number(caps, 1)?;
    let minutes = number(caps, 2)?;
    let seconds = number(caps, 3)?;
    Some(hours * 3600 + minutes * 60 + seconds)
}

fn minutes_seconds(caps: &Captures<'_>) -> Option<u64> {
    let minutes = number(caps, 1)?;
    let seconds = number(caps, 2)?;
    minutes.checked_mul(60)?.checked_add(seconds)
}

/// Digit runs too long for `u64` count as a non-match.
fn number(caps: &Captures<'_>, group: usize) -> Option<u64> {
    caps.get(group)?.as_str().parse().ok()
}

fn clock_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{1,2}):(\d{2}):(\d{2})").expect("regex is valid"))
}

fn minutes_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)分(\d+)秒").expect("regex is valid"))
}

fn seconds_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)秒").expect("regex is valid"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
