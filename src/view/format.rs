//! Number and timestamp formatting
//!
//! Grouped numbers with up to three fraction digits, currency suffixes and
//! "date hour:minute" timestamps. Missing or non-finite values render as
//! zero, never as NaN.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use std::fmt::Write;

use crate::config::DisplayConfig;

/// Placeholder for values that cannot be shown
pub const NOT_AVAILABLE: &str = "N/A";

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Group a number, keeping at most three fraction digits
pub fn format_number(value: f64, display: &DisplayConfig) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    // Halves round away from zero
    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let rendered = format!("{:.3}", rounded);
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, &display.thousands_separator));
    if !frac_part.is_empty() {
        out.push_str(&display.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

/// Group an integer count
pub fn format_count(value: u64, display: &DisplayConfig) -> String {
    group_digits(&value.to_string(), &display.thousands_separator)
}

/// Grouped amount with the currency suffix; absent counts as zero
pub fn format_amount(value: Option<f64>, display: &DisplayConfig) -> String {
    format!(
        "{} {}",
        format_number(value.unwrap_or(0.0), display),
        display.currency
    )
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Parse the timestamp shapes the backend emits
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// "date hour:minute", or "N/A" when absent or unparsable
pub fn format_date_time(value: Option<&str>, display: &DisplayConfig) -> String {
    let Some(dt) = value.and_then(parse_date_time) else {
        return NOT_AVAILABLE.to_string();
    };

    let mut out = String::new();
    let written = write!(
        out,
        "{} {}",
        dt.format(&display.date_format),
        dt.format(&display.time_format)
    );

    if written.is_err() {
        // Bad user-supplied format string
        let (date_format, time_format) = (&display.date_format, &display.time_format);
        tracing::warn!(
            %date_format,
            %time_format,
            "Invalid display format, falling back to ISO"
        );
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> DisplayConfig {
        DisplayConfig::default()
    }

    #[test]
    fn test_format_number_grouping() {
        let d = display();
        assert_eq!(format_number(0.0, &d), "0");
        assert_eq!(format_number(999.0, &d), "999");
        assert_eq!(format_number(1000.0, &d), "1,000");
        assert_eq!(format_number(1234567.0, &d), "1,234,567");
        assert_eq!(format_number(2500.5, &d), "2,500.5");
        assert_eq!(format_number(1.23456, &d), "1.235");
        assert_eq!(format_number(-45000.0, &d), "-45,000");
        assert_eq!(format_number(-0.0001, &d), "0");
    }

    #[test]
    fn test_format_number_rounds_half_up() {
        let d = display();
        assert_eq!(format_number(0.0625, &d), "0.063");
        assert_eq!(format_number(1.0625, &d), "1.063");
        assert_eq!(format_number(-2.0625, &d), "-2.063");
    }

    #[test]
    fn test_format_number_never_nan() {
        let d = display();
        assert_eq!(format_number(f64::NAN, &d), "0");
        assert_eq!(format_number(f64::INFINITY, &d), "0");
    }

    #[test]
    fn test_custom_separators() {
        let d = DisplayConfig {
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            ..DisplayConfig::default()
        };
        assert_eq!(format_number(1234567.25, &d), "1.234.567,25");
    }

    #[test]
    fn test_format_amount() {
        let d = display();
        assert_eq!(format_amount(Some(40000.0), &d), "40,000 RWF");
        assert_eq!(format_amount(None, &d), "0 RWF");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1691, &display()), "1,691");
        assert_eq!(format_count(12, &display()), "12");
    }

    #[test]
    fn test_format_date_time() {
        let d = display();
        assert_eq!(
            format_date_time(Some("2024-05-11 18:43:49"), &d),
            "5/11/2024 06:43 PM"
        );
        assert_eq!(
            format_date_time(Some("2024-01-02T09:05:00"), &d),
            "1/2/2024 09:05 AM"
        );
        assert_eq!(format_date_time(Some("2024-03-04"), &d), "3/4/2024 12:00 AM");
    }

    #[test]
    fn test_format_date_time_missing_or_garbage() {
        let d = display();
        assert_eq!(format_date_time(None, &d), "N/A");
        assert_eq!(format_date_time(Some(""), &d), "N/A");
        assert_eq!(format_date_time(Some("yesterday-ish"), &d), "N/A");
    }

    #[test]
    fn test_invalid_format_string_falls_back() {
        let d = DisplayConfig {
            date_format: "%Q".to_string(),
            ..DisplayConfig::default()
        };
        assert_eq!(
            format_date_time(Some("2024-05-11 18:43:49"), &d),
            "2024-05-11 18:43"
        );
    }
}
