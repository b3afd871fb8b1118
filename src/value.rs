//! The temporal value handed to the formatter by the host.

use core::str::FromStr;

use crate::{
    iso::{validate_offset, IsoDate, IsoTime},
    parsers, FormatError, FormatResult,
};

/// The host type a `TemporalValue` was created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Date,
    DateTime,
    Time,
}

/// A normalized date, date-time or time with an optional timezone offset.
///
/// Components that the host type does not carry (for instance the hour of
/// a date) are absent, and formatting them fails at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemporalValue {
    date: Option<IsoDate>,
    time: Option<IsoTime>,
    offset_minutes: Option<i16>,
}

impl TemporalValue {
    /// Creates a date value.
    pub const fn from_date(date: IsoDate) -> Self {
        Self {
            date: Some(date),
            time: None,
            offset_minutes: None,
        }
    }

    /// Creates a date-time value.
    pub const fn from_date_time(date: IsoDate, time: IsoTime) -> Self {
        Self {
            date: Some(date),
            time: Some(time),
            offset_minutes: None,
        }
    }

    /// Creates a time value.
    pub const fn from_time(time: IsoTime) -> Self {
        Self {
            date: None,
            time: Some(time),
            offset_minutes: None,
        }
    }

    /// Creates a date value from its fields.
    pub fn try_new_date(year: i64, month: u8, day: u8) -> FormatResult<Self> {
        Ok(Self::from_date(IsoDate::new(year, month, day)?))
    }

    /// Returns this value with a timezone offset in minutes.
    pub fn with_offset(mut self, minutes: i16) -> FormatResult<Self> {
        self.offset_minutes = Some(validate_offset(minutes)?);
        Ok(self)
    }

    /// Parses an `xs:date` lexical value, e.g. `2003-09-07` or `-0055-03-15Z`.
    pub fn parse_date(source: &str) -> FormatResult<Self> {
        parsers::parse_date(source)
    }

    /// Parses an `xs:dateTime` lexical value, e.g. `2003-09-07T09:15:06.5+01:00`.
    pub fn parse_date_time(source: &str) -> FormatResult<Self> {
        parsers::parse_date_time(source)
    }

    /// Parses an `xs:time` lexical value, e.g. `09:15:06-05:00`.
    pub fn parse_time(source: &str) -> FormatResult<Self> {
        parsers::parse_time(source)
    }

    /// Returns the kind of host value.
    pub fn kind(&self) -> ValueKind {
        match (self.date.is_some(), self.time.is_some()) {
            (true, true) => ValueKind::DateTime,
            (false, true) => ValueKind::Time,
            _ => ValueKind::Date,
        }
    }

    /// Returns the date fields, if present.
    #[inline]
    pub fn date(&self) -> Option<&IsoDate> {
        self.date.as_ref()
    }

    /// Returns the time fields, if present.
    #[inline]
    pub fn time(&self) -> Option<&IsoTime> {
        self.time.as_ref()
    }

    /// Returns the timezone offset in minutes, if present.
    #[inline]
    pub fn offset_minutes(&self) -> Option<i16> {
        self.offset_minutes
    }
}

impl FromStr for TemporalValue {
    type Err = FormatError;

    /// Parses any of the `xs:date`, `xs:dateTime` and `xs:time` lexical forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('T') {
            Self::parse_date_time(s)
        } else if s.as_bytes().get(2) == Some(&b':') {
            Self::parse_time(s)
        } else {
            Self::parse_date(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_present_fields() {
        let date = TemporalValue::try_new_date(2003, 9, 7).unwrap();
        assert_eq!(date.kind(), ValueKind::Date);
        assert!(date.time().is_none());

        let time = TemporalValue::from_time(IsoTime::new(9, 15, 6, 0).unwrap());
        assert_eq!(time.kind(), ValueKind::Time);

        let dt: TemporalValue = "2003-09-07T09:15:06+01:00".parse().unwrap();
        assert_eq!(dt.kind(), ValueKind::DateTime);
        assert_eq!(dt.offset_minutes(), Some(60));
    }

    #[test]
    fn offsets_are_validated() {
        let date = TemporalValue::try_new_date(2003, 9, 7).unwrap();
        assert!(date.with_offset(-14 * 60).is_ok());
        assert!(date.with_offset(15 * 60).is_err());
    }
}
