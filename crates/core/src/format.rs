//! Value formatting helpers used by the presenter.

use case_types::FieldValue;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt::Write as _;

/// Converts a `[0, 1]` certainty into a whole percentage.
///
/// Rounds half away from zero, so `0.125` becomes `13`. Booleans count as `1` and `0`, and blank
/// text counts as `0`. Returns `None` when the value cannot be read as a number.
pub fn percent(certainty: &FieldValue) -> Option<i64> {
    let value = match certainty {
        FieldValue::Bool(b) => f64::from(u8::from(*b)),
        FieldValue::Text(text) if text.trim().is_empty() => 0.0,
        other => other.number().ok()?,
    };
    value.is_finite().then(|| (value * 100.0).round() as i64)
}

/// Renders a certainty for display: a rounded percentage, or the raw value with a `%` suffix
/// when it is not numeric.
pub fn certainty_display(certainty: &FieldValue) -> String {
    match percent(certainty) {
        Some(p) => format!("{p}%"),
        None => format!("{certainty}%"),
    }
}

/// Renders a value followed by its unit, or just the value when no unit is given.
pub fn value_with_unit(value: &FieldValue, unit: Option<&FieldValue>) -> String {
    match unit {
        Some(unit) => format!("{value} {unit}"),
        None => value.to_string(),
    }
}

/// Returns true when `format` contains only valid chrono strftime specifiers.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Parses a date-like value into a calendar date.
///
/// Accepted shapes:
/// - `YYYY-MM-DD`
/// - RFC 3339 timestamps (the date as written, ignoring the offset)
/// - `YYYY-MM-DDTHH:MM:SS` without an offset
/// - numbers, read as milliseconds since the Unix epoch (UTC)
pub fn parse_date(value: &FieldValue) -> Option<NaiveDate> {
    match value {
        FieldValue::Text(text) => {
            let text = text.trim();
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .or_else(|| {
                    DateTime::parse_from_rfc3339(text)
                        .ok()
                        .map(|dt| dt.date_naive())
                })
                .or_else(|| {
                    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                        .ok()
                        .map(|dt| dt.date())
                })
        }
        FieldValue::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        _ => None,
    }
}

/// Formats a date-like value as a short date. Values that are not dates are shown verbatim.
pub fn short_date(value: &FieldValue, format: &str) -> String {
    let Some(date) = parse_date(value) else {
        return value.to_string();
    };

    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_DATE_FORMAT;

    #[test]
    fn test_percent_rounds_half_away_from_zero() {
        assert_eq!(percent(&FieldValue::from_f64(0.5).unwrap()), Some(50));
        assert_eq!(percent(&FieldValue::from_f64(0.333).unwrap()), Some(33));
        assert_eq!(percent(&FieldValue::from_f64(0.125).unwrap()), Some(13));
        assert_eq!(percent(&FieldValue::from(1)), Some(100));
        assert_eq!(percent(&FieldValue::from(0)), Some(0));
    }

    #[test]
    fn test_percent_reads_numeric_text() {
        assert_eq!(percent(&FieldValue::from("0.75")), Some(75));
        assert_eq!(percent(&FieldValue::from("likely")), None);
    }

    #[test]
    fn test_certainty_coerces_booleans_and_blank_text() {
        assert_eq!(certainty_display(&FieldValue::from(true)), "100%");
        assert_eq!(certainty_display(&FieldValue::from(false)), "0%");
        assert_eq!(certainty_display(&FieldValue::from("")), "0%");
        assert_eq!(certainty_display(&FieldValue::from("  ")), "0%");
    }

    #[test]
    fn test_certainty_display_falls_back_to_raw_value() {
        assert_eq!(certainty_display(&FieldValue::from_f64(0.9).unwrap()), "90%");
        assert_eq!(certainty_display(&FieldValue::from("likely")), "likely%");
    }

    #[test]
    fn test_value_with_unit() {
        let value = FieldValue::from_f64(39.4).unwrap();
        assert_eq!(
            value_with_unit(&value, Some(&FieldValue::from("°C"))),
            "39.4 °C"
        );
        assert_eq!(value_with_unit(&value, None), "39.4");
    }

    #[test]
    fn test_short_date_formats_iso_date() {
        let date = FieldValue::from("2024-01-15");
        assert_eq!(short_date(&date, DEFAULT_DATE_FORMAT), "15.1.2024");
        assert_eq!(short_date(&date, "%Y/%m/%d"), "2024/01/15");
    }

    #[test]
    fn test_short_date_keeps_written_date_of_timestamp() {
        let ts = FieldValue::from("2024-03-09T23:30:00-05:00");
        assert_eq!(short_date(&ts, DEFAULT_DATE_FORMAT), "9.3.2024");

        let naive = FieldValue::from("2024-03-09T08:15:00");
        assert_eq!(short_date(&naive, DEFAULT_DATE_FORMAT), "9.3.2024");
    }

    #[test]
    fn test_short_date_reads_epoch_millis() {
        let millis = FieldValue::from(1_704_067_200_000);
        assert_eq!(short_date(&millis, DEFAULT_DATE_FORMAT), "1.1.2024");
    }

    #[test]
    fn test_short_date_shows_unparseable_text_verbatim() {
        assert_eq!(
            short_date(&FieldValue::from("next week"), DEFAULT_DATE_FORMAT),
            "next week"
        );
    }

    #[test]
    fn test_date_format_validation() {
        assert!(is_valid_date_format(DEFAULT_DATE_FORMAT));
        assert!(is_valid_date_format("%d.%m.%Y"));
        assert!(!is_valid_date_format("%Q"));
    }
}
