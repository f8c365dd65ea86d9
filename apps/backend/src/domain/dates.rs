//! ISO-8601 handling for employee adjustment dates.
//!
//! Accepted: `YYYY-MM-DD`, optionally followed by `T` or a single space and
//! `HH:MM`, `HH:MM:SS` or `HH:MM:SS.ffffff`, optionally followed by `Z` or a
//! `±HH:MM` offset. Offset-carrying values are normalised to UTC and the
//! offset is dropped.

use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time, UtcOffset};

use crate::errors::domain::DomainError;

fn malformed(raw: &str) -> DomainError {
    DomainError::malformed_date(format!(
        "Invalid date format '{raw}'; expected ISO-8601 such as 2024-01-01T00:00:00"
    ))
}

/// Split a trailing `Z` or `±HH:MM` off the time component.
fn split_offset(time_part: &str) -> Option<(&str, UtcOffset)> {
    if let Some(rest) = time_part.strip_suffix('Z') {
        return Some((rest, UtcOffset::UTC));
    }
    let idx = time_part.rfind(|c: char| c == '+' || c == '-')?;
    let offset = UtcOffset::parse(
        &time_part[idx..],
        format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
    )
    .ok()?;
    Some((&time_part[..idx], offset))
}

fn parse_time(raw: &str) -> Option<Time> {
    let parsed = match raw.len() {
        5 => Time::parse(raw, format_description!("[hour]:[minute]")),
        8 => Time::parse(raw, format_description!("[hour]:[minute]:[second]")),
        _ if raw.len() > 9 && raw.as_bytes()[8] == b'.' => Time::parse(
            raw,
            format_description!("[hour]:[minute]:[second].[subsecond]"),
        ),
        _ => return None,
    };
    parsed.ok()
}

/// Parse an adjustment date, normalising any offset to UTC.
pub fn parse_adjustment_date(raw: &str) -> Result<PrimitiveDateTime, DomainError> {
    if raw.len() < 10 || !raw.is_char_boundary(10) {
        return Err(malformed(raw));
    }
    let (date_part, rest) = raw.split_at(10);
    let date = Date::parse(date_part, format_description!("[year]-[month]-[day]"))
        .map_err(|_| malformed(raw))?;

    if rest.is_empty() {
        return Ok(date.midnight());
    }

    let time_part = rest
        .strip_prefix('T')
        .or_else(|| rest.strip_prefix(' '))
        .ok_or_else(|| malformed(raw))?;

    let (clock, offset) = match split_offset(time_part) {
        Some((clock, offset)) => (clock, Some(offset)),
        None => (time_part, None),
    };
    let time = parse_time(clock).ok_or_else(|| malformed(raw))?;
    let local = PrimitiveDateTime::new(date, time);

    match offset {
        Some(offset) => {
            // Shifting to UTC can leave the representable year range near its edges
            let utc = local
                .assume_offset(offset)
                .checked_to_offset(UtcOffset::UTC)
                .ok_or_else(|| malformed(raw))?;
            Ok(PrimitiveDateTime::new(utc.date(), utc.time()))
        }
        None => Ok(local),
    }
}

/// Render as `YYYY-MM-DDTHH:MM:SS`, adding microseconds only when non-zero.
pub fn format_adjustment_date(value: PrimitiveDateTime) -> String {
    let formatted = if value.nanosecond() == 0 {
        value.format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second]"
        ))
    } else {
        value.format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]"
        ))
    };
    // Both descriptions only use components a PrimitiveDateTime always has
    formatted.unwrap_or_else(|_| value.to_string())
}
