//! Markdown rendering of an [`AnalysisReport`].

use std::fmt::Write as _;

use cdr_core::models::{AnalysisReport, ContactProfile};

use crate::sections::{
    day_rows, hour_rows, overview_rows, time_rows, top_contact_rows, TOP_CONTACT_HEADERS,
};
use crate::NO_DATA;

/// Render the full report as a Markdown document.
pub fn render_markdown(report: &AnalysisReport) -> String {
    let mut md = String::new();

    md.push_str("# 📱 话单分析报告\n\n");
    if !report.generated_at.is_empty() {
        let _ = writeln!(md, "> 生成时间: {}\n", report.generated_at);
    }

    md.push_str("## 一、通话统计\n\n");
    push_key_value_table(&mut md, &overview_rows(report));

    md.push_str("\n## 二、联系人分析\n\n");

    md.push_str("### 🔥 通话频次 TOP10\n\n");
    let top = top_contact_rows(report);
    if top.is_empty() {
        push_placeholder(&mut md);
    } else {
        push_table(&mut md, &TOP_CONTACT_HEADERS, &top);
    }

    md.push_str("\n### 👤 陌生人识别（仅1次通话，通话<10秒）\n\n");
    push_number_list(&mut md, &report.contacts.strangers, |_| String::new());
    if report.contacts.stranger_count > 0 {
        let _ = writeln!(md, "\n> 共识别 {} 个陌生人", report.contacts.stranger_count);
    }

    md.push_str("\n### 📞 高频联系人（通话>20次）\n\n");
    push_number_list(&mut md, &report.contacts.frequent, |c| {
        format!("（{} 次，{}）", c.call_count, c.duration_text)
    });
    if report.contacts.frequent_count > 0 {
        let _ = writeln!(md, "\n> 共 {} 个高频联系人", report.contacts.frequent_count);
    }

    md.push_str("\n## 三、时间分析\n\n");
    push_key_value_table(&mut md, &time_rows(report));

    md.push_str("\n### 按小时分布\n\n");
    match hour_rows(report) {
        Some(rows) => {
            for (label, count) in rows {
                let _ = writeln!(md, "{} - {}次", label, count);
            }
        }
        None => push_placeholder(&mut md),
    }

    md.push_str("\n### 按星期分布\n\n");
    match day_rows(report) {
        Some(rows) => {
            for (day, count) in rows {
                let _ = writeln!(md, "{}: {}次", day, count);
            }
        }
        None => push_placeholder(&mut md),
    }

    md
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn push_placeholder(md: &mut String) {
    let _ = writeln!(md, "_{}_", NO_DATA);
}

fn push_key_value_table(md: &mut String, rows: &[(&str, String)]) {
    md.push_str("| 指标 | 数值 |\n");
    md.push_str("|------|------|\n");
    for (label, value) in rows {
        let _ = writeln!(md, "| {} | {} |", label, value);
    }
}

fn push_table(md: &mut String, headers: &[&str], rows: &[Vec<String>]) {
    let _ = writeln!(md, "| {} |", headers.join(" | "));
    let rule: Vec<&str> = headers.iter().map(|_| "------").collect();
    let _ = writeln!(md, "|{}|", rule.join("|"));
    for row in rows {
        let _ = writeln!(md, "| {} |", row.join(" | "));
    }
}

fn push_number_list(
    md: &mut String,
    profiles: &[ContactProfile],
    suffix: impl Fn(&ContactProfile) -> String,
) {
    if profiles.is_empty() {
        push_placeholder(md);
        return;
    }
    for profile in profiles {
        let _ = writeln!(md, "- {}{}", profile.number, suffix(profile));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdr_core::models::Statistics;

    fn profile(number: &str, count: usize, secs: u64) -> ContactProfile {
        ContactProfile {
            number: number.to_string(),
            call_count: count,
            total_duration_seconds: secs,
            duration_text: format!("{}分{}秒", secs / 60, secs % 60),
            incoming: 0,
            outgoing: count,
            last_call: Some("2025-01-02 09:23:55".to_string()),
        }
    }

    fn empty_report() -> AnalysisReport {
        AnalysisReport {
            generated_at: "2025-01-31 12:00:00".to_string(),
            statistics: Statistics {
                total_duration: "0小时0分0秒".to_string(),
                avg_duration: "0秒".to_string(),
                ..Statistics::default()
            },
            ..AnalysisReport::default()
        }
    }

    #[test]
    fn test_empty_report_uses_placeholders() {
        let md = render_markdown(&empty_report());

        assert!(md.contains("> 生成时间: 2025-01-31 12:00:00"));
        assert!(md.contains("| 总通话次数 | 0 次 |"));
        assert!(md.contains("| 平均单次时长 | 0秒 |"));
        // Top-10, strangers, frequent, hourly, weekly.
        assert_eq!(md.matches("_暂无数据_").count(), 5);
        assert!(!md.contains("| 排名 |"));
        assert!(!md.contains("共识别"));
        assert!(md.contains("| 通话高峰时段 | - |"));
        assert!(md.contains("| 通话高峰日 | 周日 |"));
    }

    #[test]
    fn test_top_contacts_table() {
        let mut report = empty_report();
        report.contacts.top_contacts = vec![profile("13800138000", 3, 125)];
        let md = render_markdown(&report);

        assert!(md.contains("| 排名 | 号码 | 次数 | 时长 | 最后通话 |"));
        assert!(md.contains("|------|------|------|------|------|"));
        assert!(md.contains("| 1 | 13800138000 | 3 次 | 2分5秒 | 2025-01-02 |"));
    }

    #[test]
    fn test_stranger_and_frequent_lists() {
        let mut report = empty_report();
        report.contacts.strangers = vec![profile("13900139000", 1, 3)];
        report.contacts.stranger_count = 1;
        report.contacts.frequent = vec![profile("13700137000", 25, 600)];
        report.contacts.frequent_count = 1;
        let md = render_markdown(&report);

        assert!(md.contains("- 13900139000\n"));
        assert!(md.contains("> 共识别 1 个陌生人"));
        assert!(md.contains("- 13700137000（25 次，10分0秒）"));
        assert!(md.contains("> 共 1 个高频联系人"));
    }

    #[test]
    fn test_distributions_rendered_when_present() {
        let mut report = empty_report();
        report.time.hour_distribution[9] = 4;
        report.time.day_distribution[3].count = 4;
        report.time.peak_hours = vec!["09:00".to_string()];
        report.time.peak_day = "周三".to_string();
        let md = render_markdown(&report);

        assert!(md.contains("09:00 - 4次\n"));
        assert!(md.contains("00:00 - 0次\n"));
        assert!(md.contains("周三: 4次\n"));
        assert!(md.contains("| 通话高峰时段 | 09:00 |"));
    }
}
