use serde::{Deserialize, Serialize};

use crate::time_utils::WEEKDAY_LABELS;

/// Whether a call was received or placed by the account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The account holder was called (`被叫`).
    Incoming,
    /// The account holder placed the call (`主叫`).
    Outgoing,
    /// The export carried a label we do not recognise.
    Unknown,
}

impl Direction {
    /// Map an export direction label onto a [`Direction`].
    ///
    /// Surrounding whitespace is ignored; unrecognised labels map to
    /// [`Direction::Unknown`].
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "被叫" => Direction::Incoming,
            "主叫" => Direction::Outgoing,
            _ => Direction::Unknown,
        }
    }
}

/// Which textual convention a duration field was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationFormat {
    /// `H:MM:SS` / `HH:MM:SS`.
    Clock,
    /// `<N>分<M>秒`.
    MinutesSeconds,
    /// `<N>秒`.
    Seconds,
}

/// One normalised call event read from an export row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Normalised call direction.
    pub direction: Direction,
    /// Direction label exactly as it appeared in the export.
    pub direction_label: String,
    /// Number of the other party. Contains at least 7 ASCII digits.
    pub counterparty_number: String,
    /// Start time as exported, canonically `YYYY-MM-DD HH:MM[:SS]`.
    pub start_timestamp: String,
    /// Raw duration text the seconds value was derived from.
    pub duration_text: String,
    /// Call duration in seconds; `0` when the text was not recognised.
    pub duration_seconds: u64,
    /// Recognised duration convention, or `None` when the value defaulted to 0.
    pub duration_format: Option<DurationFormat>,
    /// Location where the call was made or received.
    pub location: String,
    /// Fee as exported, `"0"` when absent.
    pub fee_text: String,
    /// Billing product / package name.
    #[serde(default)]
    pub product_text: String,
    /// Free-form remark column.
    #[serde(default)]
    pub remark_text: String,
}

impl CallRecord {
    /// `true` when the duration was parsed from a recognised convention
    /// rather than defaulted to zero.
    pub fn has_parsed_duration(&self) -> bool {
        self.duration_format.is_some()
    }
}

/// Count the ASCII digit characters in a phone number string.
pub fn digit_count(number: &str) -> usize {
    number.chars().filter(char::is_ascii_digit).count()
}

// ── Analysis outputs ──────────────────────────────────────────────────────────

/// Incoming / outgoing split of the corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallTypeCounts {
    pub incoming: usize,
    pub outgoing: usize,
    /// Records whose direction label was not recognised.
    pub unknown: usize,
}

/// Whole-corpus volume figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_calls: usize,
    pub total_duration_seconds: u64,
    /// Total duration rendered as `"{H}小时{M}分{S}秒"`.
    pub total_duration: String,
    /// Mean call length rounded to the nearest second, `0` for an empty corpus.
    pub avg_duration_seconds: u64,
    /// Mean call length rendered as `"{N}秒"`.
    pub avg_duration: String,
    pub call_types: CallTypeCounts,
}

/// Per-counterparty behaviour summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactProfile {
    pub number: String,
    pub call_count: usize,
    pub total_duration_seconds: u64,
    /// Summed duration rendered as `"{M}分{S}秒"`.
    pub duration_text: String,
    pub incoming: usize,
    pub outgoing: usize,
    /// Lexicographically greatest start timestamp seen for this number.
    pub last_call: Option<String>,
}

/// Ranked contacts plus stranger / frequent classifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAnalysis {
    /// Number of distinct counterparty numbers.
    pub total_contacts: usize,
    /// At most 50 profiles, descending by call count.
    pub top_contacts: Vec<ContactProfile>,
    /// Uncapped number of strangers.
    pub stranger_count: usize,
    /// At most 50 stranger profiles.
    pub strangers: Vec<ContactProfile>,
    /// Uncapped number of frequent contacts.
    pub frequent_count: usize,
    /// At most 50 frequent profiles.
    pub frequent: Vec<ContactProfile>,
}

/// One bucket of the day-of-week histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    /// Weekday label, `周日` through `周六`.
    pub day: String,
    pub count: usize,
}

/// Temporal usage pattern of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeAnalysis {
    /// Calls per hour of day, index 0 = 00:00.
    pub hour_distribution: Vec<usize>,
    /// Calls per weekday, Sunday first.
    pub day_distribution: Vec<DayCount>,
    /// Every hour tied for the maximum, formatted `HH:00`.
    pub peak_hours: Vec<String>,
    /// Busiest weekday label, first bucket winning ties (`周日` when nothing
    /// could be bucketed).
    pub peak_day: String,
    /// Calls starting between 22:00 and 05:59.
    pub night_calls: usize,
    /// `night_calls` as a whole-number percentage of all records.
    pub night_rate: u32,
}

impl Default for TimeAnalysis {
    /// The analysis of an empty corpus: all buckets zero, Sunday as peak day.
    fn default() -> Self {
        Self {
            hour_distribution: vec![0; 24],
            day_distribution: WEEKDAY_LABELS
                .iter()
                .map(|day| DayCount {
                    day: (*day).to_string(),
                    count: 0,
                })
                .collect(),
            peak_hours: Vec::new(),
            peak_day: WEEKDAY_LABELS[0].to_string(),
            night_calls: 0,
            night_rate: 0,
        }
    }
}

/// The three analysis outputs bundled for rendering or export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Local time the report was produced, `%Y-%m-%d %H:%M:%S`.
    pub generated_at: String,
    pub statistics: Statistics,
    pub contacts: ContactAnalysis,
    pub time: TimeAnalysis,
}
