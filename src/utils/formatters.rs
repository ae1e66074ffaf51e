use crate::models::business::DayHours;
use chrono::{DateTime, NaiveDate, Utc};

pub fn format_rating(rating: f64, max_rating: f64) -> String {
    format!("{:.1}", rating.min(max_rating).max(0.0))
}

pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

/// Miles by default: "< 0.1 mi", "0.4 mi", "3 mi".
pub fn format_distance(distance: f64, unit: &str) -> String {
    if distance < 0.1 {
        return format!("< 0.1 {}", unit);
    }
    if distance < 1.0 {
        return format!("{:.1} {}", distance, unit);
    }
    format!("{} {}", distance.round(), unit)
}

/// Cuts `text` so that, including `suffix`, it is at most `max_length` chars.
pub fn truncate_text(text: &str, max_length: usize, suffix: &str) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let keep = max_length.saturating_sub(suffix.chars().count());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(suffix);
    truncated
}

pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        11 if digits.starts_with('1') => {
            format!("+1 ({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..])
        }
        _ => phone.to_string(),
    }
}

/// Medium date style, e.g. "Mar 1, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    const INTERVALS: [(&str, i64); 7] = [
        ("year", 31_536_000),
        ("month", 2_592_000),
        ("week", 604_800),
        ("day", 86_400),
        ("hour", 3_600),
        ("minute", 60),
        ("second", 1),
    ];
    let elapsed = (now - then).num_seconds();
    for (label, seconds) in INTERVALS {
        let count = elapsed / seconds;
        if count >= 1 {
            let plural = if count > 1 { "s" } else { "" };
            return format!("{} {}{} ago", count, label, plural);
        }
    }
    "just now".to_string()
}

fn hours_for<'a>(hours: &'a [DayHours], weekday: &str) -> Option<&'a DayHours> {
    hours.iter().find(|h| h.day == weekday)
}

/// Summary of today's opening hours. `weekday` is the full English name.
pub fn format_business_hours(hours: &[DayHours], weekday: &str) -> String {
    match hours_for(hours, weekday) {
        None => "Hours not available".to_string(),
        Some(today) if today.is_closed() => "Closed today".to_string(),
        Some(today) => format!("Open today: {} - {}", today.open, today.close),
    }
}

/// `time` is "HH:MM"; bounds are inclusive.
pub fn is_open_at(hours: &[DayHours], weekday: &str, time: &str) -> bool {
    match hours_for(hours, weekday) {
        Some(today) if !today.is_closed() => {
            time >= today.open.as_str() && time <= today.close.as_str()
        }
        _ => false,
    }
}
