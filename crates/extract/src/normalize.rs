//! Normalization of raw profile strings into numeric values.

use exn::{OptionExt, ResultExt};
use time::{Date, Month};
use tracing::instrument;

use crate::consts;
use crate::error::{ErrorKind, Result};

/// Genitive month names as they appear in birth dates ("5 марта 1990").
const MONTHS: [(&str, Month); 12] = [
    ("января", Month::January),
    ("февраля", Month::February),
    ("марта", Month::March),
    ("апреля", Month::April),
    ("мая", Month::May),
    ("июня", Month::June),
    ("июля", Month::July),
    ("августа", Month::August),
    ("сентября", Month::September),
    ("октября", Month::October),
    ("ноября", Month::November),
    ("декабря", Month::December),
];

/// Converts a raw height ("188 см[1]", "185 [cm]") into centimetres.
///
/// Only the text up to and including the first `[` or space is considered,
/// and the last run of digits within it is the height. Text without either
/// delimiter is considered whole.
#[instrument(level = "trace")]
pub fn height(raw: &str) -> Result<u32> {
    let raw = raw.trim();
    let prefix = match raw.find(['[', ' ']) {
        Some(end) => &raw[..=end],
        None => raw,
    };
    let digits = consts::DIGITS_REGEX.find_iter(prefix).last().ok_or_raise(|| ErrorKind::ParseError {
        field: "height",
        value: raw.to_string(),
    })?;
    digits.as_str().parse::<u32>().or_raise(|| ErrorKind::ParseError {
        field: "height",
        value: raw.to_string(),
    })
}

/// Converts a raw birth date ("5 марта 1990 (34 года)") into seconds since
/// the Unix epoch, taken at midnight UTC.
#[instrument(level = "trace")]
pub fn birth(raw: &str) -> Result<i64> {
    Ok(birth_date(raw)?.midnight().assume_utc().unix_timestamp())
}

/// Parses a raw birth date into a calendar date.
pub fn birth_date(raw: &str) -> Result<Date> {
    let text = raw.split(['(', '[']).next().unwrap_or_default().trim();
    let parse_error = || ErrorKind::ParseError {
        field: "birth",
        value: raw.to_string(),
    };
    let captures = consts::BIRTH_REGEX.captures(text).ok_or_raise(parse_error)?;
    let day = captures[1].parse::<u8>().or_raise(parse_error)?;
    let month = month(&captures[2]).ok_or_raise(parse_error)?;
    let year = captures[3].parse::<i32>().or_raise(parse_error)?;
    Date::from_calendar_date(year, month, day).or_raise(parse_error)
}

/// Looks up a month by its genitive name, or by its number.
fn month(token: &str) -> Option<Month> {
    let lowered = token.to_lowercase();
    MONTHS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, month)| *month)
        .or_else(|| token.parse::<u8>().ok().and_then(|n| Month::try_from(n).ok()))
}
