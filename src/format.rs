//! Display Formatting
//!
//! Currency, date and badge-class helpers shared by the views. Wire values
//! are plain strings; everything here is lenient and display-only.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::{ContactStatus, DealStage, TaskPriority, TaskStatus};

/// Parse a backend timestamp: RFC 3339, naive ISO datetime, or bare date
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// "Oct 10, 2024"; falls through to the raw string when unparseable
pub fn format_date(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// "Oct 10, 2024 14:03"
pub fn format_date_time(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        None => value.to_string(),
    }
}

/// "Just now" / "5m ago" / "3h ago" / "2d ago" / absolute date
pub fn format_relative_time(value: &str) -> String {
    match parse_timestamp(value) {
        Some(then) => relative_from(then, Utc::now()),
        None => value.to_string(),
    }
}

pub fn relative_from(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(then);
    let mins = diff.num_minutes();
    if mins < 1 {
        return "Just now".to_string();
    }
    if mins < 60 {
        return format!("{}m ago", mins);
    }
    let hours = diff.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    let days = diff.num_days();
    if days < 7 {
        return format!("{}d ago", days);
    }
    then.format("%b %-d, %Y").to_string()
}

/// The date-input portion of a backend timestamp ("2024-10-01")
pub fn date_input_value(value: &str) -> String {
    value.split('T').next().unwrap_or(value).to_string()
}

/// A pending task with a due date in the past is overdue
pub fn is_overdue(due_date: Option<&str>, is_completed: bool) -> bool {
    match due_date {
        Some(due) if !is_completed => overdue_at(due, Utc::now()),
        _ => false,
    }
}

pub fn overdue_at(due_date: &str, now: DateTime<Utc>) -> bool {
    parse_timestamp(due_date).map(|due| due < now).unwrap_or(false)
}

/// Whole-dollar en-US currency: "$12,345"
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let mut n = value.abs().round() as u64;
    let mut groups = Vec::new();
    loop {
        let chunk = n % 1000;
        n /= 1000;
        if n == 0 {
            groups.push(chunk.to_string());
            break;
        }
        groups.push(format!("{:03}", chunk));
    }
    groups.reverse();
    format!("{}${}", if negative { "-" } else { "" }, groups.join(","))
}

/// Axis-label currency: "$1.2M" / "$45K" / "$780"
pub fn format_compact_currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.0}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

/// Up to two uppercase initials for avatar fallbacks
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}

pub fn month_short(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

// Badge class maps, one entry per closed enum value

pub fn stage_color(stage: DealStage) -> &'static str {
    match stage {
        DealStage::Lead => "badge-slate",
        DealStage::Qualified => "badge-blue",
        DealStage::Proposal => "badge-purple",
        DealStage::Negotiation => "badge-amber",
        DealStage::ClosedWon => "badge-green",
        DealStage::ClosedLost => "badge-red",
    }
}

pub fn status_color(status: ContactStatus) -> &'static str {
    match status {
        ContactStatus::Lead => "badge-slate",
        ContactStatus::Prospect => "badge-blue",
        ContactStatus::Customer => "badge-green",
        ContactStatus::Churned => "badge-red",
    }
}

pub fn priority_color(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Low => "badge-slate",
        TaskPriority::Medium => "badge-blue",
        TaskPriority::High => "badge-amber",
        TaskPriority::Urgent => "badge-red",
    }
}

pub fn task_status_color(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "badge-slate",
        TaskStatus::InProgress => "badge-blue",
        TaskStatus::Completed => "badge-green",
        TaskStatus::Cancelled => "badge-red",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(780.0), "$780");
        assert_eq!(format_currency(12345.0), "$12,345");
        assert_eq!(format_currency(1_234_567.4), "$1,234,567");
        assert_eq!(format_currency(-9500.0), "-$9,500");
    }

    #[test]
    fn compact_currency_scales() {
        assert_eq!(format_compact_currency(780.0), "$780");
        assert_eq!(format_compact_currency(45_000.0), "$45K");
        assert_eq!(format_compact_currency(1_200_000.0), "$1.2M");
    }

    #[test]
    fn parses_backend_timestamp_shapes() {
        assert!(parse_timestamp("2024-10-10T08:30:00Z").is_some());
        assert!(parse_timestamp("2024-10-10T08:30:00.123456").is_some());
        assert!(parse_timestamp("2024-10-10").is_some());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn formats_dates() {
        assert_eq!(format_date("2024-10-10T08:30:00Z"), "Oct 10, 2024");
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("garbage"), "garbage");
    }

    #[test]
    fn relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 10, 10, 12, 0, 0).unwrap();
        let at = |h: u32, m: u32| Utc.with_ymd_and_hms(2024, 10, 10, h, m, 0).unwrap();
        assert_eq!(relative_from(at(11, 59), now), "1m ago");
        assert_eq!(relative_from(now, now), "Just now");
        assert_eq!(relative_from(at(9, 0), now), "3h ago");
        let two_days = Utc.with_ymd_and_hms(2024, 10, 8, 12, 0, 0).unwrap();
        assert_eq!(relative_from(two_days, now), "2d ago");
        let old = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
        assert_eq!(relative_from(old, now), "Sep 1, 2024");
    }

    #[test]
    fn overdue_only_when_pending_and_past() {
        let now = Utc.with_ymd_and_hms(2024, 10, 10, 12, 0, 0).unwrap();
        assert!(overdue_at("2024-10-01", now));
        assert!(!overdue_at("2024-12-01", now));
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Leslie Watson"), "LW");
        assert_eq!(initials("Ada Augusta Lovelace"), "AA");
        assert_eq!(initials("plato"), "P");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn date_input_strips_time() {
        assert_eq!(date_input_value("2024-10-01T00:00:00"), "2024-10-01");
        assert_eq!(date_input_value("2024-10-01"), "2024-10-01");
    }
}
