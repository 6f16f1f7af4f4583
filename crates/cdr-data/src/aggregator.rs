//! Whole-corpus statistics, contact profiles and time distributions.

use std::collections::HashMap;

use cdr_core::formatting::{
    format_hour_label, format_hours_minutes_seconds, format_minutes_seconds, format_seconds,
    rounded_mean, rounded_percentage,
};
use cdr_core::models::{
    CallRecord, CallTypeCounts, ContactAnalysis, ContactProfile, DayCount, Direction, Statistics,
    TimeAnalysis,
};
use cdr_core::time_utils::{CallTime, WEEKDAY_LABELS};
use tracing::debug;

/// Maximum number of profiles returned in each contact list.
pub const CONTACT_LIST_LIMIT: usize = 50;
/// A stranger's single call lasted strictly less than this many seconds.
pub const STRANGER_MAX_SECONDS: u64 = 10;
/// Frequent contacts have strictly more calls than this.
pub const FREQUENT_MIN_CALLS: usize = 20;
/// Hours of day counted as night calls.
pub const NIGHT_HOURS: [usize; 8] = [22, 23, 0, 1, 2, 3, 4, 5];

// ── CorpusAggregator ──────────────────────────────────────────────────────────

/// Owns the current corpus and the self-number used to filter it.
#[derive(Debug, Clone, Default)]
pub struct CorpusAggregator {
    records: Vec<CallRecord>,
    self_number: Option<String>,
}

impl CorpusAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current corpus in discovery order.
    pub fn records(&self) -> &[CallRecord] {
        &self.records
    }

    /// The configured self-number, if any.
    pub fn self_number(&self) -> Option<&str> {
        self.self_number.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the whole corpus. Records matching the current self-number
    /// are dropped on the way in.
    pub fn replace_all(&mut self, records: Vec<CallRecord>) {
        self.records = records;
        self.retain_non_self();
    }

    /// Set (or clear, with a blank value) the self-number and drop every
    /// record whose counterparty equals it. Idempotent.
    pub fn set_self_number(&mut self, number: &str) {
        let number = number.trim();
        self.self_number = (!number.is_empty()).then(|| number.to_string());
        self.retain_non_self();
    }

    /// Empty the corpus and forget the self-number.
    pub fn clear(&mut self) {
        self.records.clear();
        self.self_number = None;
    }

    fn retain_non_self(&mut self) {
        if let Some(own) = self.self_number.as_deref() {
            let before = self.records.len();
            self.records.retain(|r| r.counterparty_number != own);
            debug!(
                "Self-number filter removed {} records",
                before - self.records.len()
            );
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// Call volume, duration totals and the direction split.
    pub fn statistics(&self) -> Statistics {
        let total_calls = self.records.len();
        let total_duration_seconds = self
            .records
            .iter()
            .map(|r| r.duration_seconds)
            .fold(0u64, u64::saturating_add);
        let avg_duration_seconds = rounded_mean(total_duration_seconds, total_calls as u64);

        let mut call_types = CallTypeCounts::default();
        for record in &self.records {
            match record.direction {
                Direction::Incoming => call_types.incoming += 1,
                Direction::Outgoing => call_types.outgoing += 1,
                Direction::Unknown => call_types.unknown += 1,
            }
        }

        Statistics {
            total_calls,
            total_duration_seconds,
            total_duration: format_hours_minutes_seconds(total_duration_seconds),
            avg_duration_seconds,
            avg_duration: format_seconds(avg_duration_seconds),
            call_types,
        }
    }

    /// Per-number profiles ranked by call count, plus stranger and frequent
    /// classifications over the full profile set.
    pub fn contact_analysis(&self) -> ContactAnalysis {
        let profiles = build_profiles(&self.records);

        let strangers: Vec<&ContactProfile> = profiles
            .iter()
            .filter(|c| c.call_count == 1 && c.total_duration_seconds < STRANGER_MAX_SECONDS)
            .collect();
        let frequent: Vec<&ContactProfile> = profiles
            .iter()
            .filter(|c| c.call_count > FREQUENT_MIN_CALLS)
            .collect();

        ContactAnalysis {
            total_contacts: profiles.len(),
            stranger_count: strangers.len(),
            strangers: capped(&strangers),
            frequent_count: frequent.len(),
            frequent: capped(&frequent),
            top_contacts: profiles.iter().take(CONTACT_LIST_LIMIT).cloned().collect(),
        }
    }

    /// Hour-of-day and day-of-week histograms with peak and night figures.
    pub fn time_analysis(&self) -> TimeAnalysis {
        let mut hours = [0usize; 24];
        let mut days = [0usize; 7];

        for time in self
            .records
            .iter()
            .filter_map(|r| CallTime::parse(&r.start_timestamp))
        {
            hours[time.hour as usize] += 1;
            days[time.weekday_index()] += 1;
        }

        let night_calls: usize = NIGHT_HOURS.iter().map(|&h| hours[h]).sum();

        let max_hour = hours.iter().copied().max().unwrap_or(0);
        let peak_hours = if max_hour == 0 {
            Vec::new()
        } else {
            (0..24)
                .filter(|&h| hours[h] == max_hour)
                .map(format_hour_label)
                .collect()
        };

        // All-zero buckets tie at Sunday.
        let max_day = days.iter().copied().max().unwrap_or(0);
        let peak_index = days.iter().position(|&c| c == max_day).unwrap_or(0);
        let peak_day = WEEKDAY_LABELS[peak_index].to_string();

        TimeAnalysis {
            hour_distribution: hours.to_vec(),
            day_distribution: WEEKDAY_LABELS
                .iter()
                .zip(days)
                .map(|(day, count)| DayCount {
                    day: (*day).to_string(),
                    count,
                })
                .collect(),
            peak_hours,
            peak_day,
            night_calls,
            night_rate: rounded_percentage(night_calls, self.records.len()),
        }
    }
}

// ── Private helpers ───────────────────────────────────────────────────────────

/// Profiles in first-seen order, then stably sorted by descending call count.
fn build_profiles(records: &[CallRecord]) -> Vec<ContactProfile> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut profiles: Vec<ContactProfile> = Vec::new();

    for record in records {
        let number = record.counterparty_number.as_str();
        let slot = *index.entry(number).or_insert_with(|| {
            profiles.push(ContactProfile {
                number: number.to_string(),
                ..ContactProfile::default()
            });
            profiles.len() - 1
        });

        let profile = &mut profiles[slot];
        profile.call_count += 1;
        profile.total_duration_seconds = profile
            .total_duration_seconds
            .saturating_add(record.duration_seconds);
        match record.direction {
            Direction::Incoming => profile.incoming += 1,
            Direction::Outgoing => profile.outgoing += 1,
            Direction::Unknown => {}
        }

        let ts = record.start_timestamp.as_str();
        if !ts.is_empty() && profile.last_call.as_deref().map_or(true, |last| ts > last) {
            profile.last_call = Some(ts.to_string());
        }
    }

    for profile in &mut profiles {
        profile.duration_text = format_minutes_seconds(profile.total_duration_seconds);
    }

    profiles.sort_by(|a, b| b.call_count.cmp(&a.call_count));
    profiles
}

fn capped(profiles: &[&ContactProfile]) -> Vec<ContactProfile> {
    profiles
        .iter()
        .take(CONTACT_LIST_LIMIT)
        .map(|&p| p.clone())
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
