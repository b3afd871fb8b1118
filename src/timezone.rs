//! Timezone offset notations.
//!
//! Offsets are rendered from the signed minute offset of the value:
//! numerically (`+05:30`, `+5:30`, `+0530`), as a military letter (`[ZZ]`)
//! or as an abbreviation looked up from the `place` argument (`[ZN]`).

use num_traits::ToPrimitive;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    numbering::digits::{family_digit, DigitPattern},
    FormatError, FormatResult,
};

/// The shape of a numeric offset, derived from a marker's digit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetFormat {
    /// `0`, `01`: hours, followed by `:mm` only when the minutes are not zero.
    Hours { zero: char, hour_width: usize },
    /// `01:01`, `0.00`: hours, a separator and two minute digits.
    Separated {
        zero: char,
        hour_width: usize,
        separator: char,
    },
    /// `0001`, `999`: hours and two minute digits without separator.
    Compact { zero: char, hour_width: usize },
}

impl OffsetFormat {
    /// The `01:01` format.
    pub const DEFAULT: Self = Self::Separated {
        zero: '0',
        hour_width: 2,
        separator: ':',
    };

    /// Derives the offset shape from a digit pattern.
    pub fn from_pattern(pattern: &DigitPattern) -> FormatResult<Self> {
        let zero = pattern.zero();
        let signs = pattern.digit_signs();
        let hour_width = pattern.mandatory().saturating_sub(2).max(1);
        match (pattern.separator_count(), signs) {
            (0, 1 | 2) => Ok(Self::Hours {
                zero,
                hour_width: pattern.mandatory(),
            }),
            (0, 3 | 4) => Ok(Self::Compact { zero, hour_width }),
            (1, 3 | 4) => match pattern.grouping().regular() {
                Some((2, separator)) => Ok(Self::Separated {
                    zero,
                    hour_width,
                    separator,
                }),
                _ => Err(invalid_offset_pattern()),
            },
            _ => Err(invalid_offset_pattern()),
        }
    }

    fn zero(self) -> char {
        match self {
            Self::Hours { zero, .. } | Self::Separated { zero, .. } | Self::Compact { zero, .. } => {
                zero
            }
        }
    }
}

fn invalid_offset_pattern() -> FormatError {
    FormatError::invalid_picture()
        .with_message("timezone digit patterns must have one to four digits.")
}

/// A signed offset ready to be written in an `OffsetFormat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattedOffset {
    minutes: i16,
    format: OffsetFormat,
    utc_as_z: bool,
}

impl FormattedOffset {
    pub fn new(minutes: i16, format: OffsetFormat) -> Self {
        Self {
            minutes,
            format,
            utc_as_z: false,
        }
    }

    /// Writes a zero offset as `Z`.
    #[must_use]
    pub fn with_utc_as_z(mut self, utc_as_z: bool) -> Self {
        self.utc_as_z = utc_as_z;
        self
    }

    fn write_number<W: core::fmt::Write + ?Sized>(
        &self,
        value: u16,
        width: usize,
        sink: &mut W,
    ) -> core::fmt::Result {
        let zero = self.format.zero();
        let mut digits = [0u8; 5];
        let mut len = 0;
        let mut n = value;
        loop {
            digits[len] = (n % 10) as u8;
            n /= 10;
            len += 1;
            if n == 0 {
                break;
            }
        }
        for _ in len..width {
            sink.write_char(zero)?;
        }
        for digit in digits[..len].iter().rev() {
            sink.write_char(family_digit(zero, *digit))?;
        }
        Ok(())
    }
}

impl Writeable for FormattedOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.utc_as_z && self.minutes == 0 {
            return sink.write_char('Z');
        }
        sink.write_char(if self.minutes < 0 { '-' } else { '+' })?;
        let hours = self.minutes.unsigned_abs() / 60;
        let minutes = self.minutes.unsigned_abs() % 60;
        match self.format {
            OffsetFormat::Hours { hour_width, .. } => {
                self.write_number(hours, hour_width, sink)?;
                if minutes != 0 {
                    sink.write_char(':')?;
                    self.write_number(minutes, 2, sink)?;
                }
            }
            OffsetFormat::Separated {
                hour_width,
                separator,
                ..
            } => {
                self.write_number(hours, hour_width, sink)?;
                sink.write_char(separator)?;
                self.write_number(minutes, 2, sink)?;
            }
            OffsetFormat::Compact { hour_width, .. } => {
                self.write_number(hours, hour_width, sink)?;
                self.write_number(minutes, 2, sink)?;
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::between(1, 8)
    }
}

impl_display_with_writeable!(FormattedOffset);

/// Returns the military letter for an offset, or `None` when the offset
/// is not a whole hour within `-12..=+12`.
///
/// A value without timezone is `J`, the local time letter.
pub fn military_letter(offset_minutes: Option<i16>) -> Option<char> {
    let Some(minutes) = offset_minutes else {
        return Some('J');
    };
    if minutes % 60 != 0 {
        return None;
    }
    let hours = (minutes / 60).to_i8()?;
    let letter = match hours {
        0 => b'Z',
        1..=9 => b'A' + hours.unsigned_abs() - 1,
        10..=12 => b'K' + hours.unsigned_abs() - 10,
        -12..=-1 => b'N' + hours.unsigned_abs() - 1,
        _ => return None,
    };
    Some(char::from(letter))
}

// (place, offset minutes, abbreviation)
const ZONE_ABBREVIATIONS: [(&str, i16, &str); 26] = [
    ("America/New_York", -300, "EST"),
    ("America/New_York", -240, "EDT"),
    ("America/Chicago", -360, "CST"),
    ("America/Chicago", -300, "CDT"),
    ("America/Denver", -420, "MST"),
    ("America/Denver", -360, "MDT"),
    ("America/Phoenix", -420, "MST"),
    ("America/Los_Angeles", -480, "PST"),
    ("America/Los_Angeles", -420, "PDT"),
    ("America/Anchorage", -540, "AKST"),
    ("America/Anchorage", -480, "AKDT"),
    ("Pacific/Honolulu", -600, "HST"),
    ("Europe/London", 0, "GMT"),
    ("Europe/London", 60, "BST"),
    ("Europe/Dublin", 0, "GMT"),
    ("Europe/Dublin", 60, "IST"),
    ("Europe/Paris", 60, "CET"),
    ("Europe/Paris", 120, "CEST"),
    ("Europe/Berlin", 60, "CET"),
    ("Europe/Berlin", 120, "CEST"),
    ("Asia/Kolkata", 330, "IST"),
    ("Asia/Tokyo", 540, "JST"),
    ("Australia/Sydney", 600, "AEST"),
    ("Australia/Sydney", 660, "AEDT"),
    ("UTC", 0, "UTC"),
    ("Etc/UTC", 0, "UTC"),
];

/// Returns the abbreviation of the zone in effect at `place` for the offset.
///
/// Without a place only the zero offset has a name, `UTC`.
pub fn zone_abbreviation(place: Option<&str>, offset_minutes: i16) -> Option<&'static str> {
    let Some(place) = place else {
        return (offset_minutes == 0).then_some("UTC");
    };
    ZONE_ABBREVIATIONS
        .iter()
        .find(|(zone, offset, _)| *zone == place && *offset == offset_minutes)
        .map(|(_, _, abbreviation)| *abbreviation)
}
