//! This module implements parsing of the `xs:date`, `xs:dateTime` and
//! `xs:time` lexical forms into a `TemporalValue`.
//!
//! Hosts normally hand over values they have already parsed and
//! normalized; these parsers exist for hosts that keep the lexical form.

use core::{iter::Peekable, str::Chars};

use num_traits::ToPrimitive;

use crate::{
    iso::{IsoDate, IsoTime},
    FormatError, FormatResult, TemporalValue,
};

type Cursor<'a> = Peekable<Chars<'a>>;

pub(crate) fn parse_date(source: &str) -> FormatResult<TemporalValue> {
    let mut cursor = source.chars().peekable();
    let date = parse_date_fields(&mut cursor)?;
    finish(TemporalValue::from_date(date), &mut cursor)
}

pub(crate) fn parse_date_time(source: &str) -> FormatResult<TemporalValue> {
    let mut cursor = source.chars().peekable();
    let date = parse_date_fields(&mut cursor)?;
    expect(&mut cursor, 'T')?;
    let time = parse_time_fields(&mut cursor)?;
    finish(TemporalValue::from_date_time(date, time), &mut cursor)
}

pub(crate) fn parse_time(source: &str) -> FormatResult<TemporalValue> {
    let mut cursor = source.chars().peekable();
    let time = parse_time_fields(&mut cursor)?;
    finish(TemporalValue::from_time(time), &mut cursor)
}

/// Parses the optional timezone and confirms the full source was consumed.
fn finish(value: TemporalValue, cursor: &mut Cursor<'_>) -> FormatResult<TemporalValue> {
    let value = match parse_timezone(cursor)? {
        Some(minutes) => value.with_offset(minutes)?,
        None => value,
    };
    if cursor.peek().is_some() {
        return Err(FormatError::syntax().with_message("Unexpected character at end of input."));
    }
    Ok(value)
}

fn parse_date_fields(cursor: &mut Cursor<'_>) -> FormatResult<IsoDate> {
    let negative = cursor.next_if_eq(&'-').is_some();
    let (year, digits) = parse_digits(cursor)?;
    if digits < 4 {
        return Err(FormatError::syntax().with_message("Year must have at least four digits."));
    }
    let leading = (digits - 1)
        .to_u32()
        .and_then(|exponent| 10_i64.checked_pow(exponent))
        .ok_or_else(|| FormatError::range().with_message("Year exceeds the supported range."))?;
    if digits > 4 && year < leading {
        return Err(FormatError::syntax().with_message("Year has a leading zero."));
    }
    expect(cursor, '-')?;
    let month = parse_two_digits(cursor)?;
    expect(cursor, '-')?;
    let day = parse_two_digits(cursor)?;

    let year = if negative { -year } else { year };
    IsoDate::new(year, month, day)
}

fn parse_time_fields(cursor: &mut Cursor<'_>) -> FormatResult<IsoTime> {
    let hour = parse_two_digits(cursor)?;
    expect(cursor, ':')?;
    let minute = parse_two_digits(cursor)?;
    expect(cursor, ':')?;
    let second = parse_two_digits(cursor)?;

    let mut nanosecond = 0;
    if cursor.next_if_eq(&'.').is_some() {
        let mut scale = 100_000_000;
        let mut any = false;
        while let Some(digit) = cursor.next_if(char::is_ascii_digit) {
            any = true;
            // Digits beyond nanosecond precision are dropped.
            nanosecond += digit.to_digit(10).unwrap_or(0) * scale;
            scale /= 10;
        }
        if !any {
            return Err(non_ascii_digit());
        }
    }

    IsoTime::new(hour, minute, second, nanosecond)
}

fn parse_timezone(cursor: &mut Cursor<'_>) -> FormatResult<Option<i16>> {
    let sign = match cursor.peek() {
        Some('Z') => {
            cursor.next();
            return Ok(Some(0));
        }
        Some('+') => 1,
        Some('-') => -1,
        _ => return Ok(None),
    };
    cursor.next();
    let hours = parse_two_digits(cursor)?;
    expect(cursor, ':')?;
    let minutes = parse_two_digits(cursor)?;
    if minutes > 59 {
        return Err(FormatError::range().with_message("Offset minutes must be below 60."));
    }
    Ok(Some((i16::from(hours) * 60 + i16::from(minutes)) * sign))
}

fn parse_digits(cursor: &mut Cursor<'_>) -> FormatResult<(i64, usize)> {
    let mut value: i64 = 0;
    let mut count = 0;
    while let Some(digit) = cursor.next_if(char::is_ascii_digit) {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(digit.to_digit(10).unwrap_or(0))))
            .ok_or(FormatError::range().with_message("Year exceeds the supported range."))?;
        count += 1;
    }
    if count == 0 {
        return Err(cursor.peek().map_or(abrupt_end(), |_| non_ascii_digit()));
    }
    Ok((value, count))
}

fn parse_two_digits(cursor: &mut Cursor<'_>) -> FormatResult<u8> {
    let mut value = 0;
    for _ in 0..2 {
        let digit = cursor.next().ok_or_else(abrupt_end)?;
        let digit = digit.to_digit(10).ok_or_else(non_ascii_digit)?;
        value = value * 10 + digit as u8;
    }
    Ok(value)
}

fn expect(cursor: &mut Cursor<'_>, expected: char) -> FormatResult<()> {
    match cursor.next() {
        Some(ch) if ch == expected => Ok(()),
        Some(_) => Err(FormatError::syntax().with_message("Unexpected character in temporal value.")),
        None => Err(abrupt_end()),
    }
}

#[inline]
fn abrupt_end() -> FormatError {
    FormatError::syntax().with_message("Abrupt end while parsing temporal value.")
}

#[inline]
fn non_ascii_digit() -> FormatError {
    FormatError::syntax().with_message("Non ascii digit found while parsing temporal value.")
}
