use crate::domain::model::BirthDate;
use crate::utils::error::{NumerologyError, Result};

/// Parses a date of birth typed as `DD/MM/YYYY` or `DDMMYYYY`.
///
/// The slash form is positional: segments are taken as day, month and year in
/// that order whatever their size, so `1990/05/12` yields day 1990. No calendar
/// checks are made. Each of day, month and year must parse to a non-zero value.
pub fn parse_dob(input: &str) -> Result<BirthDate> {
    let fields = if input.contains('/') {
        let parts: Vec<&str> = input.split('/').collect();
        match parts.as_slice() {
            [day, month, year] => Some((
                parse_int_prefix(day),
                parse_int_prefix(month),
                parse_int_prefix(year),
            )),
            _ => None,
        }
    } else if input.chars().count() == 8 {
        let chars: Vec<char> = input.chars().collect();
        let segment = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
        Some((
            parse_int_prefix(&segment(0..2)),
            parse_int_prefix(&segment(2..4)),
            parse_int_prefix(&segment(4..8)),
        ))
    } else {
        None
    };

    match fields {
        Some((Some(day), Some(month), Some(year))) if day > 0 && month > 0 && year > 0 => {
            Ok(BirthDate::new(day, month, year))
        }
        _ => {
            tracing::debug!("Rejected date of birth {:?}", input);
            Err(NumerologyError::DateParseError {
                input: input.to_string(),
            })
        }
    }
}

/// Integer-prefix parse: leading whitespace, an optional sign, then as many
/// ASCII digits as follow. Trailing characters are ignored. Returns `None`
/// when no digit is found, when the value is negative, or when it does not fit in a `u64`.
fn parse_int_prefix(segment: &str) -> Option<u64> {
    let rest = segment.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value = rest[..digits_len].parse::<u64>().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}
