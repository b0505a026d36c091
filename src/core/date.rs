//! Strict `YYYYMMDD` / `YYYY-MM-DD` date normalization.
//!
//! UBL carries dates as `2024-06-15`, CII as `20240615`. Both are reduced to
//! the same fixed-position pattern and re-emitted as `YYYY-MM-DD`. Anything
//! else becomes an [`IllegalDate`] that quotes the raw input, so the
//! rendered document shows the operator exactly what was wrong.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A date whose year, month and day each passed their range check.
///
/// No calendar check is applied: `2024-02-31` is a valid `CanonicalDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalDate {
    /// 1..=9999
    pub year: u16,
    /// 1..=12
    pub month: u8,
    /// 1..=31
    pub day: u8,
}

impl CanonicalDate {
    /// The calendar date, if it exists (rejects e.g. February 30th).
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(i32::from(self.year), u32::from(self.month), u32::from(self.day))
    }
}

impl std::fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A date value that failed normalization. Carries the raw input verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("ILLEGAL DATE FORMAT of \"{raw}\".")]
pub struct IllegalDate {
    pub raw: String,
}

/// Normalize a raw date value.
///
/// Whitespace is normalized and all hyphens removed; the first four
/// characters are the year, the next two the month, the next two the day.
/// Trailing characters (e.g. a time part) are ignored.
pub fn normalize_date(raw: &str) -> Result<CanonicalDate, IllegalDate> {
    let cleaned: Vec<char> = normalize_space(raw).chars().filter(|c| *c != '-').collect();

    let year = field(&cleaned, 0, 4).filter(|y| (1..=9999).contains(y));
    let month = field(&cleaned, 4, 2).filter(|m| (1..=12).contains(m));
    let day = field(&cleaned, 6, 2).filter(|d| (1..=31).contains(d));

    match (year, month, day) {
        (Some(year), Some(month), Some(day)) => Ok(CanonicalDate {
            year: year as u16,
            month: month as u8,
            day: day as u8,
        }),
        _ => Err(IllegalDate {
            raw: raw.to_string(),
        }),
    }
}

/// The text written to the intermediate document: the canonical date, or
/// the failure message.
pub fn date_text(raw: &str) -> String {
    match normalize_date(raw) {
        Ok(date) => date.to_string(),
        Err(illegal) => illegal.to_string(),
    }
}

/// Parse `len` ASCII digits starting at `start`. `None` if the slice is
/// short or contains anything but digits.
fn field(chars: &[char], start: usize, len: usize) -> Option<u32> {
    let digits = chars.get(start..start + len)?;
    digits
        .iter()
        .try_fold(0u32, |acc, c| c.to_digit(10).map(|d| acc * 10 + d))
}

/// Trim and collapse runs of XML whitespace into single spaces.
fn normalize_space(s: &str) -> String {
    s.split(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r'))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: u16, month: u8, day: u8) -> CanonicalDate {
        CanonicalDate { year, month, day }
    }

    #[test]
    fn accepts_compact_and_hyphenated() {
        assert_eq!(normalize_date("20240105"), Ok(ymd(2024, 1, 5)));
        assert_eq!(normalize_date("2024-01-05"), Ok(ymd(2024, 1, 5)));
        assert_eq!(normalize_date("2024-0105"), Ok(ymd(2024, 1, 5)));
        assert_eq!(date_text("20240105"), "2024-01-05");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(date_text("  2024-06-15\n"), "2024-06-15");
    }

    #[test]
    fn trailing_characters_are_ignored() {
        assert_eq!(date_text("2024-06-15T10:00:00"), "2024-06-15");
        assert_eq!(date_text("2024061599"), "2024-06-15");
    }

    #[test]
    fn zero_padding_is_preserved() {
        assert_eq!(date_text("0001-01-01"), "0001-01-01");
        assert_eq!(date_text("00010101"), "0001-01-01");
    }

    #[test]
    fn no_calendar_check() {
        assert_eq!(date_text("2023-02-31"), "2023-02-31");
        assert_eq!(ymd(2023, 2, 31).to_naive_date(), None);
        assert_eq!(
            ymd(2024, 2, 29).to_naive_date(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn out_of_range_fields() {
        for raw in [
            "0000-01-01",
            "2024-00-10",
            "2024-13-10",
            "2024-01-00",
            "2024-01-32",
        ] {
            assert_eq!(
                date_text(raw),
                format!("ILLEGAL DATE FORMAT of \"{raw}\"."),
                "{raw}"
            );
        }
    }

    #[test]
    fn non_numeric_and_short_inputs() {
        for raw in ["2024-Jan-05", "20240", "2024-1-5", "+024-01-05", "2024 01 05", "abcdefgh"] {
            assert!(normalize_date(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn failure_quotes_raw_input_verbatim() {
        assert_eq!(date_text(""), "ILLEGAL DATE FORMAT of \"\".");
        assert_eq!(date_text("   "), "ILLEGAL DATE FORMAT of \"   \".");
        assert_eq!(
            date_text(" 15.06.2024 "),
            "ILLEGAL DATE FORMAT of \" 15.06.2024 \"."
        );
    }

    #[test]
    fn non_ascii_digits_rejected() {
        // Arabic-Indic digits
        assert!(normalize_date("٢٠٢٤٠١٠٥").is_err());
    }

    #[test]
    fn output_is_idempotent() {
        let once = date_text("20991231");
        assert_eq!(date_text(&once), once);
    }
}
