//! Boundary date handling.
//!
//! The UI-facing date formats (`DD/MM/YYYY` on screen, `YYYY-MM-DD` from
//! date inputs) are normalized to [`NaiveDate`] here, before they reach
//! the filter state. The engines themselves only ever compare dates.

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Parse a calendar day from either `DD/MM/YYYY` or ISO `YYYY-MM-DD`.
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    let s = input.trim();
    NaiveDate::parse_from_str(s, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| Error::InvalidDate(input.to_string()))
}

/// Format a calendar day as `DD/MM/YYYY`.
pub fn format_day(day: NaiveDate) -> String {
    day.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_day_month_year() {
        assert_eq!(parse_day("01/06/2024").unwrap(), day(2024, 6, 1));
        assert_eq!(parse_day("28/02/2026").unwrap(), day(2026, 2, 28));
    }

    #[test]
    fn parses_iso() {
        assert_eq!(parse_day("2024-06-01").unwrap(), day(2024, 6, 1));
    }

    #[test]
    fn both_formats_normalize_to_same_day() {
        assert_eq!(
            parse_day("01/06/2024").unwrap(),
            parse_day("2024-06-01").unwrap()
        );
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_day(" 15/08/2026 ").unwrap(), day(2026, 8, 15));
    }

    #[test]
    fn rejects_garbage() {
        for input in ["", "junk", "32/01/2024", "2024-13-01", "06/2024"] {
            let err = parse_day(input).unwrap_err();
            assert!(matches!(err, Error::InvalidDate(_)), "accepted {input:?}");
        }
    }

    #[test]
    fn format_round_trips() {
        let d = day(2026, 8, 6);
        assert_eq!(format_day(d), "06/08/2026");
        assert_eq!(parse_day(&format_day(d)).unwrap(), d);
    }
}
