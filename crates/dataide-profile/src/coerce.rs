//! Best-effort type coercion.
//!
//! Coercion never fails: a value that cannot be converted becomes `None`
//! and the profilers work with whatever converted successfully.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use dataide_model::CellValue;

/// Date-time layouts tried after RFC 3339, in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S", // US first
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%b-%Y %H:%M:%S",
];

/// Date-only layouts, in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",  // US: 01/15/2024
    "%d/%m/%Y",  // European: 15/01/2024
    "%d.%m.%Y",  // 15.01.2024
    "%d-%b-%Y",  // 15-Jan-2024
    "%d-%B-%Y",  // 15-January-2024
    "%b %d, %Y", // Jan 15, 2024
    "%B %d, %Y", // January 15, 2024
    "%d %b %Y",  // 15 Jan 2024
    "%d %B %Y",  // 15 January 2024
    "%Y%m%d",    // 20240115
];

/// Numeric value of a single cell.
///
/// Numbers pass through, text is trimmed and parsed. Booleans, nulls,
/// unparseable text and non-finite results are `None`.
pub fn numeric_value(value: &CellValue) -> Option<f64> {
    let number = match value {
        CellValue::Number(number) => *number,
        CellValue::Text(text) => text.trim().parse::<f64>().ok()?,
        CellValue::Null | CellValue::Bool(_) => return None,
    };
    number.is_finite().then_some(number)
}

/// Calendar date of a single cell. Only text is considered.
pub fn date_value(value: &CellValue) -> Option<NaiveDate> {
    match value {
        CellValue::Text(text) => parse_date(text),
        _ => None,
    }
}

/// Coerces every value to a number, keeping positions.
pub fn coerce_numeric<'a, I>(values: I) -> Vec<Option<f64>>
where
    I: IntoIterator<Item = &'a CellValue>,
{
    values.into_iter().map(numeric_value).collect()
}

/// Coerces every value to a calendar date, keeping positions.
pub fn coerce_datetime<'a, I>(values: I) -> Vec<Option<NaiveDate>>
where
    I: IntoIterator<Item = &'a CellValue>,
{
    values.into_iter().map(date_value).collect()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Offsets are dropped, not normalized: the local calendar date is kept.
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local().date());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn numeric_coercion_per_variant() {
        assert_eq!(numeric_value(&CellValue::Number(2.5)), Some(2.5));
        assert_eq!(numeric_value(&CellValue::from(" 42 ")), Some(42.0));
        assert_eq!(numeric_value(&CellValue::from("1e3")), Some(1000.0));
        assert_eq!(numeric_value(&CellValue::from("abc")), None);
        assert_eq!(numeric_value(&CellValue::from("")), None);
        assert_eq!(numeric_value(&CellValue::Bool(true)), None);
        assert_eq!(numeric_value(&CellValue::Null), None);
    }

    #[test]
    fn non_finite_numbers_are_absent() {
        assert_eq!(numeric_value(&CellValue::from("NaN")), None);
        assert_eq!(numeric_value(&CellValue::from("inf")), None);
        assert_eq!(numeric_value(&CellValue::Number(f64::INFINITY)), None);
    }

    #[test]
    fn coerce_numeric_keeps_positions() {
        let values = vec![CellValue::from("1"), CellValue::Null, CellValue::Number(3.0)];
        assert_eq!(coerce_numeric(&values), vec![Some(1.0), None, Some(3.0)]);
    }

    #[test]
    fn date_formats() {
        let cases = [
            ("2025-01-15", date(2025, 1, 15)),
            ("2025/01/15", date(2025, 1, 15)),
            ("2025-01-15T10:30:00", date(2025, 1, 15)),
            ("2025-01-15 10:30", date(2025, 1, 15)),
            ("2025-01-15T23:30:00+05:00", date(2025, 1, 15)),
            ("2025-01-15T10:30:00.250Z", date(2025, 1, 15)),
            ("15-Jan-2025", date(2025, 1, 15)),
            ("Jan 15, 2025", date(2025, 1, 15)),
            ("15 January 2025", date(2025, 1, 15)),
            ("15.01.2025", date(2025, 1, 15)),
            ("20250115", date(2025, 1, 15)),
        ];
        for (input, expected) in cases {
            assert_eq!(date_value(&CellValue::from(input)), Some(expected), "{input}");
        }
    }

    #[test]
    fn slash_dates_prefer_month_first() {
        assert_eq!(date_value(&CellValue::from("03/04/2025")), Some(date(2025, 3, 4)));
        assert_eq!(date_value(&CellValue::from("25/12/2025")), Some(date(2025, 12, 25)));
    }

    #[test]
    fn non_text_and_garbage_are_not_dates() {
        assert_eq!(date_value(&CellValue::Number(20250115.0)), None);
        assert_eq!(date_value(&CellValue::from("bad-date")), None);
        assert_eq!(date_value(&CellValue::from("2025-13-01")), None);
        assert_eq!(date_value(&CellValue::Null), None);
    }

    #[test]
    fn coerce_datetime_keeps_positions() {
        let values = vec![CellValue::from("2025-01-01"), CellValue::from("x")];
        assert_eq!(coerce_datetime(&values), vec![Some(date(2025, 1, 1)), None]);
    }
}
