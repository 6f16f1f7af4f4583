/// Format a second count as `"{H}小时{M}分{S}秒"`.
///
/// # Examples
///
/// ```
/// use cdr_core::formatting::format_hours_minutes_seconds;
///
/// assert_eq!(format_hours_minutes_seconds(0), "0小时0分0秒");
/// assert_eq!(format_hours_minutes_seconds(332), "0小时5分32秒");
/// assert_eq!(format_hours_minutes_seconds(3_725), "1小时2分5秒");
/// ```
pub fn format_hours_minutes_seconds(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{}小时{}分{}秒", hours, minutes, secs)
}

/// Format a second count as `"{M}分{S}秒"`; hours fold into the minutes.
///
/// # Examples
///
/// ```
/// use cdr_core::formatting::format_minutes_seconds;
///
/// assert_eq!(format_minutes_seconds(9), "0分9秒");
/// assert_eq!(format_minutes_seconds(3_725), "62分5秒");
/// ```
pub fn format_minutes_seconds(seconds: u64) -> String {
    format!("{}分{}秒", seconds / 60, seconds % 60)
}

/// Format a second count as `"{N}秒"`.
pub fn format_seconds(seconds: u64) -> String {
    format!("{}秒", seconds)
}

/// Format an hour-of-day bucket as `"HH:00"`.
///
/// # Examples
///
/// ```
/// use cdr_core::formatting::format_hour_label;
///
/// assert_eq!(format_hour_label(9), "09:00");
/// assert_eq!(format_hour_label(23), "23:00");
/// ```
pub fn format_hour_label(hour: usize) -> String {
    format!("{:02}:00", hour)
}

/// Divide `total` by `count`, rounding half up to the nearest integer.
///
/// Returns `0` when `count` is zero to avoid division by zero. Never
/// overflows, even for `total == u64::MAX`.
///
/// # Examples
///
/// ```
/// use cdr_core::formatting::rounded_mean;
///
/// assert_eq!(rounded_mean(10, 4), 3);
/// assert_eq!(rounded_mean(10, 3), 3);
/// assert_eq!(rounded_mean(99, 0), 0);
/// ```
pub fn rounded_mean(total: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    let remainder = u128::from(total % count);
    total / count + u64::from(remainder * 2 >= u128::from(count))
}

/// Calculate `part / whole * 100` rounded half up to a whole percentage.
///
/// Returns `0` if `whole` is zero.
///
/// # Examples
///
/// ```
/// use cdr_core::formatting::rounded_percentage;
///
/// assert_eq!(rounded_percentage(1, 3), 33);
/// assert_eq!(rounded_percentage(1, 8), 13);
/// assert_eq!(rounded_percentage(5, 0), 0);
/// ```
pub fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = part as u128;
    let whole = whole as u128;
    ((part * 200 + whole) / (whole * 2)) as u32
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_hours_minutes_seconds ─────────────────────────────────────────

    #[test]
    fn test_format_hms_zero() {
        assert_eq!(format_hours_minutes_seconds(0), "0小时0分0秒");
    }

    #[test]
    fn test_format_hms_exact_hour() {
        assert_eq!(format_hours_minutes_seconds(3600), "1小时0分0秒");
    }

    #[test]
    fn test_format_hms_large() {
        assert_eq!(format_hours_minutes_seconds(100 * 3600 + 59), "100小时0分59秒");
    }

    // ── format_minutes_seconds ───────────────────────────────────────────────

    #[test]
    fn test_format_minutes_seconds_under_minute() {
        assert_eq!(format_minutes_seconds(45), "0分45秒");
    }

    #[test]
    fn test_format_minutes_seconds_exact() {
        assert_eq!(format_minutes_seconds(120), "2分0秒");
    }

    // ── format_seconds / format_hour_label ───────────────────────────────────

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0), "0秒");
        assert_eq!(format_seconds(332), "332秒");
    }

    #[test]
    fn test_format_hour_label_midnight() {
        assert_eq!(format_hour_label(0), "00:00");
    }

    // ── rounded_mean ─────────────────────────────────────────────────────────

    #[test]
    fn test_rounded_mean_half_rounds_up() {
        // 5 / 2 = 2.5 → 3
        assert_eq!(rounded_mean(5, 2), 3);
    }

    #[test]
    fn test_rounded_mean_below_half_rounds_down() {
        // 7 / 3 = 2.33 → 2
        assert_eq!(rounded_mean(7, 3), 2);
    }

    #[test]
    fn test_rounded_mean_zero_count() {
        assert_eq!(rounded_mean(0, 0), 0);
    }

    #[test]
    fn test_rounded_mean_at_u64_max() {
        assert_eq!(rounded_mean(u64::MAX, 1), u64::MAX);
        // (2^64 - 1) / 2 = 2^63 - 0.5 → 2^63
        assert_eq!(rounded_mean(u64::MAX, 2), 1 << 63);
        assert_eq!(rounded_mean(u64::MAX, u64::MAX), 1);
    }

    // ── rounded_percentage ───────────────────────────────────────────────────

    #[test]
    fn test_rounded_percentage_full() {
        assert_eq!(rounded_percentage(7, 7), 100);
    }

    #[test]
    fn test_rounded_percentage_half_rounds_up() {
        // 1 / 200 = 0.5% → 1
        assert_eq!(rounded_percentage(1, 200), 1);
    }

    #[test]
    fn test_rounded_percentage_zero_part() {
        assert_eq!(rounded_percentage(0, 40), 0);
    }

    #[test]
    fn test_rounded_percentage_huge_counts() {
        assert_eq!(rounded_percentage(usize::MAX, usize::MAX), 100);
    }
}
