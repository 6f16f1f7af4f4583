//! Format-independent section content shared by the renderers.

use cdr_core::formatting::format_hour_label;
use cdr_core::models::{AnalysisReport, ContactProfile};
use cdr_core::time_utils::date_part;

/// Number of ranked contacts shown in the report table.
pub const TOP_CONTACTS_SHOWN: usize = 10;

pub const TOP_CONTACT_HEADERS: [&str; 5] = ["排名", "号码", "次数", "时长", "最后通话"];

/// `(label, value)` pairs of the overview table.
pub fn overview_rows(report: &AnalysisReport) -> Vec<(&'static str, String)> {
    let stats = &report.statistics;
    vec![
        ("总通话次数", format!("{} 次", stats.total_calls)),
        ("总通话时长", stats.total_duration.clone()),
        ("平均单次时长", stats.avg_duration.clone()),
        ("联系人数", format!("{} 人", report.contacts.total_contacts)),
        ("收到呼叫", format!("{} 次", stats.call_types.incoming)),
        ("呼叫他人", format!("{} 次", stats.call_types.outgoing)),
    ]
}

/// Rows of the top-contact table, at most [`TOP_CONTACTS_SHOWN`].
pub fn top_contact_rows(report: &AnalysisReport) -> Vec<Vec<String>> {
    report
        .contacts
        .top_contacts
        .iter()
        .take(TOP_CONTACTS_SHOWN)
        .enumerate()
        .map(|(i, c)| {
            vec![
                (i + 1).to_string(),
                c.number.clone(),
                format!("{} 次", c.call_count),
                c.duration_text.clone(),
                last_call_date(c),
            ]
        })
        .collect()
}

/// `(label, value)` pairs of the time summary table.
pub fn time_rows(report: &AnalysisReport) -> Vec<(&'static str, String)> {
    let time = &report.time;
    let peak_hours = if time.peak_hours.is_empty() {
        "-".to_string()
    } else {
        time.peak_hours.join("、")
    };
    vec![
        ("通话高峰时段", peak_hours),
        ("通话高峰日", time.peak_day.clone()),
        ("熬夜通话次数", format!("{} 次", time.night_calls)),
        ("熬夜通话占比", format!("{}%", time.night_rate)),
    ]
}

/// `(label, count)` per hour, or `None` when no call could be bucketed.
pub fn hour_rows(report: &AnalysisReport) -> Option<Vec<(String, usize)>> {
    let hours = &report.time.hour_distribution;
    if hours.iter().all(|&c| c == 0) {
        return None;
    }
    Some(
        hours
            .iter()
            .enumerate()
            .map(|(h, &count)| (format_hour_label(h), count))
            .collect(),
    )
}

/// `(weekday, count)` pairs, or `None` when no call could be bucketed.
pub fn day_rows(report: &AnalysisReport) -> Option<Vec<(String, usize)>> {
    let days = &report.time.day_distribution;
    if days.iter().all(|d| d.count == 0) {
        return None;
    }
    Some(days.iter().map(|d| (d.day.clone(), d.count)).collect())
}

fn last_call_date(profile: &ContactProfile) -> String {
    profile
        .last_call
        .as_deref()
        .map(date_part)
        .filter(|d| !d.is_empty())
        .unwrap_or("-")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(number: &str, count: usize, last_call: Option<&str>) -> ContactProfile {
        ContactProfile {
            number: number.to_string(),
            call_count: count,
            total_duration_seconds: 65,
            duration_text: "1分5秒".to_string(),
            incoming: count,
            outgoing: 0,
            last_call: last_call.map(str::to_string),
        }
    }

    #[test]
    fn test_top_contact_rows_limited_to_ten() {
        let mut report = AnalysisReport::default();
        report.contacts.top_contacts = (0..15)
            .map(|i| profile(&format!("1380000{:04}", i), 15 - i, None))
            .collect();
        let rows = top_contact_rows(&report);
        assert_eq!(rows.len(), TOP_CONTACTS_SHOWN);
        assert_eq!(rows[0][0], "1");
        assert_eq!(rows[0][2], "15 次");
    }

    #[test]
    fn test_last_call_shows_date_part_or_dash() {
        let mut report = AnalysisReport::default();
        report.contacts.top_contacts = vec![
            profile("13800000001", 2, Some("2025-01-02 09:23:55")),
            profile("13800000002", 1, None),
        ];
        let rows = top_contact_rows(&report);
        assert_eq!(rows[0][4], "2025-01-02");
        assert_eq!(rows[1][4], "-");
    }

    #[test]
    fn test_time_rows_empty_corpus() {
        let rows = time_rows(&AnalysisReport::default());
        assert_eq!(rows[0].1, "-");
        assert_eq!(rows[1].1, "周日");
        assert_eq!(rows[3].1, "0%");
    }

    #[test]
    fn test_time_rows_joins_peak_hours() {
        let mut report = AnalysisReport::default();
        report.time.peak_hours = vec!["09:00".to_string(), "14:00".to_string()];
        report.time.peak_day = "周三".to_string();
        let rows = time_rows(&report);
        assert_eq!(rows[0].1, "09:00、14:00");
        assert_eq!(rows[1].1, "周三");
    }

    #[test]
    fn test_distribution_rows_none_when_all_zero() {
        let mut report = AnalysisReport::default();
        assert!(hour_rows(&report).is_none());
        assert!(day_rows(&report).is_none());

        report.time.hour_distribution[9] = 2;
        let hours = hour_rows(&report).unwrap();
        assert_eq!(hours.len(), 24);
        assert_eq!(hours[9], ("09:00".to_string(), 2));
    }
}
