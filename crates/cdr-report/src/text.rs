//! Plain-text rendering with display-width aware column alignment.
//!
//! CJK characters occupy two terminal columns, so padding is computed
//! with [`unicode_width`] rather than `char` counts.

use std::fmt::Write as _;

use cdr_core::models::{AnalysisReport, ContactProfile};
use unicode_width::UnicodeWidthStr;

use crate::sections::{
    day_rows, hour_rows, overview_rows, time_rows, top_contact_rows, TOP_CONTACT_HEADERS,
};
use crate::NO_DATA;

/// Widest histogram bar, in cells.
const BAR_WIDTH: usize = 30;
const COLUMN_GAP: &str = "  ";

/// Render the full report as aligned plain text.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    push_title(&mut out, "话单分析报告");
    if !report.generated_at.is_empty() {
        let _ = writeln!(out, "生成时间: {}", report.generated_at);
    }

    push_heading(&mut out, "一、通话统计");
    out.push_str(&align_pairs(&overview_rows(report)));

    push_heading(&mut out, "通话频次 TOP10");
    let top = top_contact_rows(report);
    if top.is_empty() {
        push_placeholder(&mut out);
    } else {
        out.push_str(&align_table(&TOP_CONTACT_HEADERS, &top));
    }

    push_heading(&mut out, "陌生人识别（仅1次通话，通话<10秒）");
    push_numbers(&mut out, &report.contacts.strangers, report.contacts.stranger_count);

    push_heading(&mut out, "高频联系人（通话>20次）");
    push_numbers(&mut out, &report.contacts.frequent, report.contacts.frequent_count);

    push_heading(&mut out, "三、时间分析");
    out.push_str(&align_pairs(&time_rows(report)));

    push_heading(&mut out, "按小时分布");
    match hour_rows(report) {
        Some(rows) => out.push_str(&histogram(&rows)),
        None => push_placeholder(&mut out),
    }

    push_heading(&mut out, "按星期分布");
    match day_rows(report) {
        Some(rows) => out.push_str(&histogram(&rows)),
        None => push_placeholder(&mut out),
    }

    out
}

/// Pad `s` with spaces to `width` display columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    let mut padded = s.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(current)));
    padded
}

/// Align rows under headers, one line per row, columns separated by two spaces.
pub fn align_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(UnicodeWidthStr::width(cell.as_str()));
            }
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_aligned_row(&mut out, &header_cells, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_aligned_row(&mut out, &rule, &widths);
    for row in rows {
        push_aligned_row(&mut out, row, &widths);
    }
    out
}

fn push_aligned_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| pad_to_width(cell, w))
        .collect();
    let _ = writeln!(out, "{}", line.join(COLUMN_GAP).trim_end());
}

fn align_pairs(rows: &[(&str, String)]) -> String {
    let width = rows
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(*label))
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "{}{}{}", pad_to_width(label, width), COLUMN_GAP, value);
    }
    out
}

fn histogram(rows: &[(String, usize)]) -> String {
    let max = rows.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let label_width = rows
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(label.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, count) in rows {
        let bar_len = if max == 0 { 0 } else { count * BAR_WIDTH / max };
        let bar = "█".repeat(bar_len);
        let _ = writeln!(
            out,
            "{}{}{:>5}次 {}",
            pad_to_width(label, label_width),
            COLUMN_GAP,
            count,
            bar
        );
    }
    out
}

fn push_numbers(out: &mut String, profiles: &[ContactProfile], total: usize) {
    if profiles.is_empty() {
        push_placeholder(out);
        return;
    }
    for profile in profiles {
        let _ = writeln!(
            out,
            "  {}  {} 次  {}",
            profile.number, profile.call_count, profile.duration_text
        );
    }
    let _ = writeln!(out, "共 {} 个", total);
}

fn push_title(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "=".repeat(UnicodeWidthStr::width(title)));
}

fn push_heading(out: &mut String, heading: &str) {
    let _ = writeln!(out, "\n{}", heading);
    let _ = writeln!(out, "{}", "-".repeat(UnicodeWidthStr::width(heading)));
}

fn push_placeholder(out: &mut String) {
    let _ = writeln!(out, "（{}）", NO_DATA);
}
