//! This module implements the ISO field records of a temporal value.
//!
//! An `IsoDate` holds a proleptic Gregorian year, month and day. Years
//! follow the no-year-zero convention of the host's lexical forms: `-1` is
//! the year 1 BC. All calendar arithmetic is performed on the astronomical
//! year, see [`IsoDate::astronomical_year`].
//!
//! An `IsoTime` holds the time of day down to nanoseconds.

use date_equations::gregorian;

use crate::{FormatError, FormatResult};

/// The smallest and largest supported offsets, in minutes.
pub(crate) const MAX_OFFSET_MINUTES: i16 = 14 * 60;

/// `IsoDate` serves as the record for the year, month and day fields.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i64,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i64, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `IsoDate`.
    pub fn new(year: i64, month: u8, day: u8) -> FormatResult<Self> {
        if year == 0 {
            return Err(FormatError::range().with_message("year zero is not a valid year."));
        }
        // Keep room for the 400 year shifts of the day counting equations.
        if year.unsigned_abs() > i64::MAX as u64 / 1_000 {
            return Err(FormatError::range().with_message("year is outside the supported range."));
        }
        if !(1..=12).contains(&month) {
            return Err(FormatError::range().with_message("month is not within 1..=12."));
        }
        let date = Self::new_unchecked(year, month, day);
        if !(1..=gregorian::days_in_month(date.astronomical_year(), month)).contains(&day) {
            return Err(FormatError::range().with_message("day is not valid for the month."));
        }
        Ok(date)
    }

    /// Returns the astronomical year, where 1 BC is year 0.
    #[inline]
    pub const fn astronomical_year(&self) -> i64 {
        if self.year < 0 {
            self.year + 1
        } else {
            self.year
        }
    }

    /// Returns the number of days since 1970-01-01.
    #[inline]
    pub(crate) const fn to_epoch_days(self) -> i64 {
        gregorian::epoch_days_from_ymd(self.astronomical_year(), self.month, self.day)
    }
}

/// An `IsoTime` record that contains the time of day fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,        // 0..=23
    pub minute: u8,      // 0..=59
    pub second: u8,      // 0..=59
    pub nanosecond: u32, // 0..=999_999_999
}

impl IsoTime {
    /// Creates a new validated `IsoTime`.
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> FormatResult<Self> {
        if hour > 23 || minute > 59 || second > 59 || nanosecond > 999_999_999 {
            return Err(FormatError::range().with_message("IsoTime is not valid."));
        }
        Ok(Self {
            hour,
            minute,
            second,
            nanosecond,
        })
    }
}

/// Validates a timezone offset in minutes.
pub(crate) fn validate_offset(minutes: i16) -> FormatResult<i16> {
    if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
        return Err(
            FormatError::range().with_message("timezone offset is outside of -14:00..=+14:00.")
        );
    }
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_dates() {
        assert!(IsoDate::new(0, 1, 1).is_err());
        assert!(IsoDate::new(2003, 13, 1).is_err());
        assert!(IsoDate::new(2003, 2, 29).is_err());
        assert!(IsoDate::new(2004, 2, 29).is_ok());
        // 1 BC is astronomically year 0, which is a leap year.
        assert!(IsoDate::new(-1, 2, 29).is_ok());
        assert!(IsoDate::new(-2, 2, 29).is_err());
    }

    #[test]
    fn astronomical_years() {
        assert_eq!(IsoDate::new(-55, 3, 15).unwrap().astronomical_year(), -54);
        assert_eq!(IsoDate::new(1, 1, 1).unwrap().astronomical_year(), 1);
        assert_eq!(IsoDate::new(1970, 1, 1).unwrap().to_epoch_days(), 0);
    }

    #[test]
    fn time_and_offset_ranges() {
        assert!(IsoTime::new(24, 0, 0, 0).is_err());
        assert!(IsoTime::new(23, 59, 59, 999_999_999).is_ok());
        assert!(validate_offset(-840).is_ok());
        assert!(validate_offset(841).is_err());
    }
}
