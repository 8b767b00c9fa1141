//! Date and time normalisation between what the user types and what the
//! backend stores.
//!
//! The user sees dates as `DD/MM/YYYY` and times as `HH:MM`. The backend
//! receives naive local date-times (`YYYY-MM-DDTHH:MM:SS`, no offset) and may
//! answer with either naive or RFC 3339 timestamps. No timezone shifting
//! happens on the way out; on the way in, offset-carrying timestamps are
//! projected into the runtime's local zone for display.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{DateTimeError, DateTimeResult};

/// Maximum number of digits accepted in a display date (`DDMMYYYY`).
pub const MAX_DATE_DIGITS: usize = 8;

const BACKEND_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Re-formats raw text from the date field as the user types.
///
/// Non-digits are dropped, at most eight digits are kept and `/` is placed
/// between day, month and year once a digit follows the boundary, giving the
/// progression `D`, `DD`, `DD/M`, `DD/MM`, `DD/MM/Y` ... `DD/MM/YYYY`.
pub fn format_as_typed(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DATE_DIGITS)
        .collect();

    let mut formatted = String::with_capacity(MAX_DATE_DIGITS + 2);
    for (idx, digit) in digits.into_iter().enumerate() {
        if idx == 2 || idx == 4 {
            formatted.push('/');
        }
        formatted.push(digit);
    }
    formatted
}

/// Converts `DD/MM/YYYY` into the backend's `YYYY-MM-DD`.
///
/// An empty input yields an empty string. Anything other than three
/// non-empty numeric segments is rejected. Day and month are zero-padded; the
/// calendar itself is not checked here (see [`to_backend_instant`]).
pub fn to_backend_date(display: &str) -> DateTimeResult<String> {
    if display.is_empty() {
        return Ok(String::new());
    }
    let (day, month, year) = split_display(display)?;
    Ok(format!("{}-{:0>2}-{:0>2}", year, month, day))
}

/// Converts the backend's `YYYY-MM-DD` (as produced by a native date picker)
/// into `DD/MM/YYYY`.
pub fn to_display_date(backend: &str) -> DateTimeResult<String> {
    let malformed = || DateTimeError::MalformedDate(backend.to_string());
    let mut parts = backend.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };
    if ![year, month, day].iter().all(|part| is_numeric(part)) {
        return Err(malformed());
    }
    Ok(format!("{:0>2}/{:0>2}/{}", day, month, year))
}

/// Start and end of a booking slot, in the backend's naive format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendInterval {
    pub start: String,
    pub end: String,
}

/// Combines a display date and an `HH:MM` time into a one-hour slot.
///
/// The end is computed on the calendar, so a slot starting at 23:45 ends at
/// 00:45 on the following day.
pub fn to_backend_instant(display: &str, time: &str) -> DateTimeResult<BackendInterval> {
    let date = parse_display_date(display)?;
    let time = parse_time(time)?;

    let start = NaiveDateTime::new(date, time);
    let end = start
        .checked_add_signed(Duration::hours(1))
        .ok_or_else(|| DateTimeError::InvalidDate(display.to_string()))?;

    Ok(BackendInterval {
        start: start.format(BACKEND_FORMAT).to_string(),
        end: end.format(BACKEND_FORMAT).to_string(),
    })
}

/// A backend timestamp projected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayInstant {
    /// `DD/MM/YYYY`
    pub date: String,
    /// `HH:MM`, 24-hour clock.
    pub time: String,
}

/// Formats a backend timestamp as display date and time.
///
/// Offset-carrying timestamps are shifted into local time; naive ones are
/// taken as already local. This is a projection for display, not an exact
/// inverse of [`to_backend_instant`].
pub fn from_backend_instant(instant: &str) -> DateTimeResult<DisplayInstant> {
    let local = parse_instant(instant)?;
    Ok(DisplayInstant {
        date: local.format("%d/%m/%Y").to_string(),
        time: local.format("%H:%M").to_string(),
    })
}

/// Parses a backend timestamp into naive local time.
pub fn parse_instant(instant: &str) -> DateTimeResult<NaiveDateTime> {
    let instant = instant.trim();
    if let Ok(zoned) = DateTime::parse_from_rfc3339(instant) {
        return Ok(zoned.with_timezone(&Local).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(instant, fmt).ok())
        .ok_or_else(|| DateTimeError::InvalidInstant(instant.to_string()))
}

/// Naive local timestamp as exchanged with the backend.
///
/// Deserialises from anything [`parse_instant`] accepts and serialises as
/// `YYYY-MM-DDTHH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn display(&self) -> DisplayInstant {
        DisplayInstant {
            date: self.0.format("%d/%m/%Y").to_string(),
            time: self.0.format("%H:%M").to_string(),
        }
    }

    /// Long form, e.g. `Wednesday 24 December 2025`.
    pub fn long_date(&self) -> String {
        self.0.format("%A %-d %B %Y").to_string()
    }

    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }
}

impl TryFrom<String> for Timestamp {
    type Error = DateTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_instant(&value).map(Timestamp)
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BACKEND_FORMAT))
    }
}

/// Typed date-field buffer, re-classified on every keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateInput {
    #[default]
    Empty,
    /// Incomplete, or complete but not a real calendar date.
    Partial(String),
    Complete(NaiveDate),
}

impl DateInput {
    pub fn parse(raw: &str) -> Self {
        let text = format_as_typed(raw);
        if text.is_empty() {
            return DateInput::Empty;
        }
        match parse_display_date(&text) {
            Ok(date) => DateInput::Complete(date),
            Err(_) => DateInput::Partial(text),
        }
    }

    /// Text to show in the input field.
    pub fn text(&self) -> String {
        match self {
            DateInput::Empty => String::new(),
            DateInput::Partial(text) => text.clone(),
            DateInput::Complete(date) => date.format("%d/%m/%Y").to_string(),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DateInput::Complete(date) => Some(*date),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, DateInput::Complete(_))
    }

    /// Value for a native `<input type="date">`.
    pub fn picker_value(&self) -> Option<String> {
        self.date().map(|date| date.format("%Y-%m-%d").to_string())
    }
}

fn split_display(display: &str) -> DateTimeResult<(&str, &str, &str)> {
    let mut parts = display.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(day), Some(month), Some(year), None)
            if is_numeric(day) && is_numeric(month) && is_numeric(year) =>
        {
            Ok((day, month, year))
        }
        _ => Err(DateTimeError::MalformedDate(display.to_string())),
    }
}

fn parse_display_date(display: &str) -> DateTimeResult<NaiveDate> {
    if display.is_empty() {
        return Err(DateTimeError::Empty);
    }
    let (day, month, year) = split_display(display)?;
    if year.len() != 4 || day.len() > 2 || month.len() > 2 {
        return Err(DateTimeError::MalformedDate(display.to_string()));
    }
    let invalid = || DateTimeError::InvalidDate(display.to_string());
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

fn parse_time(time: &str) -> DateTimeResult<NaiveTime> {
    let malformed = || DateTimeError::MalformedTime(time.to_string());
    let (hours, minutes) = time.split_once(':').ok_or_else(malformed)?;
    if !is_numeric(hours) || !is_numeric(minutes) || hours.len() > 2 || minutes.len() != 2 {
        return Err(malformed());
    }
    let hours: u32 = hours.parse().map_err(|_| malformed())?;
    let minutes: u32 = minutes.parse().map_err(|_| malformed())?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
        .ok_or_else(|| DateTimeError::InvalidTime(time.to_string()))
}

fn is_numeric(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_progressively() {
        assert_eq!(format_as_typed(""), "");
        assert_eq!(format_as_typed("2"), "2");
        assert_eq!(format_as_typed("24"), "24");
        assert_eq!(format_as_typed("241"), "24/1");
        assert_eq!(format_as_typed("2412"), "24/12");
        assert_eq!(format_as_typed("24122"), "24/12/2");
        assert_eq!(format_as_typed("24122025"), "24/12/2025");
    }

    #[test]
    fn strips_separators_and_noise_before_reformatting() {
        assert_eq!(format_as_typed("24/12/2025"), "24/12/2025");
        assert_eq!(format_as_typed("24/1"), "24/1");
        assert_eq!(format_as_typed("24-12.20a25"), "24/12/2025");
        assert_eq!(format_as_typed("24/12/20251999"), "24/12/2025");
    }

    #[test]
    fn typed_output_shape_holds_for_every_length() {
        let source = "3112199907";
        for len in 0..=source.len() {
            let out = format_as_typed(&source[..len]);
            let digits = len.min(MAX_DATE_DIGITS);
            assert!(out.len() <= 10, "{out:?} too long");
            let slashes = out.matches('/').count();
            if digits >= 5 {
                assert_eq!(slashes, 2, "{out:?}");
            } else if digits >= 3 {
                assert_eq!(slashes, 1, "{out:?}");
            } else {
                assert_eq!(slashes, 0, "{out:?}");
            }
            assert!(!out.ends_with('/'));
        }
    }

    #[test]
    fn backend_date_pads_day_and_month() {
        assert_eq!(to_backend_date("24/12/2025").unwrap(), "2025-12-24");
        assert_eq!(to_backend_date("1/2/2025").unwrap(), "2025-02-01");
        assert_eq!(to_backend_date("").unwrap(), "");
    }

    #[test]
    fn backend_date_rejects_short_or_garbled_input() {
        for bad in ["24", "24/12", "24/12/", "/12/2025", "24/12/2025/1", "aa/bb/cccc"] {
            assert_eq!(
                to_backend_date(bad),
                Err(DateTimeError::MalformedDate(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn display_and_backend_dates_round_trip() {
        let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        while date <= last {
            let backend = date.format("%Y-%m-%d").to_string();
            let display = to_display_date(&backend).unwrap();
            assert_eq!(to_backend_date(&display).unwrap(), backend);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn picker_value_becomes_display_date() {
        assert_eq!(to_display_date("2025-12-24").unwrap(), "24/12/2025");
        assert!(to_display_date("2025-12").is_err());
        assert!(to_display_date("").is_err());
    }

    #[test]
    fn one_hour_slot() {
        let slot = to_backend_instant("24/12/2025", "10:30").unwrap();
        assert_eq!(slot.start, "2025-12-24T10:30:00");
        assert_eq!(slot.end, "2025-12-24T11:30:00");
    }

    #[test]
    fn late_slot_rolls_into_next_day() {
        let slot = to_backend_instant("24/12/2025", "23:45").unwrap();
        assert_eq!(slot.start, "2025-12-24T23:45:00");
        assert_eq!(slot.end, "2025-12-25T00:45:00");

        let slot = to_backend_instant("31/12/2025", "23:00").unwrap();
        assert_eq!(slot.end, "2026-01-01T00:00:00");
    }

    #[test]
    fn slot_validation() {
        assert_eq!(to_backend_instant("", "10:00"), Err(DateTimeError::Empty));
        assert_eq!(
            to_backend_instant("24/12", "10:00"),
            Err(DateTimeError::MalformedDate("24/12".to_string()))
        );
        assert_eq!(
            to_backend_instant("31/02/2025", "10:00"),
            Err(DateTimeError::InvalidDate("31/02/2025".to_string()))
        );
        assert_eq!(
            to_backend_instant("24/12/2025", "1030"),
            Err(DateTimeError::MalformedTime("1030".to_string()))
        );
        assert_eq!(
            to_backend_instant("24/12/2025", "24:00"),
            Err(DateTimeError::InvalidTime("24:00".to_string()))
        );
    }

    #[test]
    fn naive_instants_display_unchanged() {
        let shown = from_backend_instant("2025-12-24T10:30:00").unwrap();
        assert_eq!(shown.date, "24/12/2025");
        assert_eq!(shown.time, "10:30");

        let shown = from_backend_instant("2025-12-24T09:05:00.123456").unwrap();
        assert_eq!(shown.time, "09:05");
    }

    #[test]
    fn zoned_instants_follow_local_time() {
        let expected = DateTime::parse_from_rfc3339("2025-12-24T10:30:00Z")
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(parse_instant("2025-12-24T10:30:00Z").unwrap(), expected);
    }

    #[test]
    fn garbage_instant_is_rejected() {
        assert!(matches!(
            from_backend_instant("tomorrow"),
            Err(DateTimeError::InvalidInstant(_))
        ));
    }

    #[test]
    fn timestamp_serde() {
        let ts: Timestamp = serde_json::from_str("\"2025-12-24T10:30:00\"").unwrap();
        assert_eq!(ts.to_string(), "2025-12-24T10:30:00");
        assert_eq!(serde_json::to_string(&ts).unwrap(), "\"2025-12-24T10:30:00\"");
        assert_eq!(ts.day_of_month(), 24);
        assert_eq!(ts.long_date(), "Wednesday 24 December 2025");
        assert!(serde_json::from_str::<Timestamp>("\"nope\"").is_err());
    }

    #[test]
    fn date_input_classification() {
        assert_eq!(DateInput::parse(""), DateInput::Empty);
        assert_eq!(DateInput::parse("2412"), DateInput::Partial("24/12".to_string()));
        assert_eq!(
            DateInput::parse("31022025"),
            DateInput::Partial("31/02/2025".to_string())
        );

        let input = DateInput::parse("24122025");
        assert!(input.is_complete());
        assert_eq!(input.text(), "24/12/2025");
        assert_eq!(input.picker_value().as_deref(), Some("2025-12-24"));
    }
}
