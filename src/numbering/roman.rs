//! Roman numerals.

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{FormatError, FormatResult};

const NUMERALS: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// The largest value expressible in standard subtractive notation.
pub const MAX_ROMAN: u16 = 3999;

/// A value in `1..=3999` formatted as a roman numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanNumeral {
    value: u16,
    lowercase: bool,
}

impl RomanNumeral {
    /// Creates a roman numeral, failing for values with no representation.
    pub fn try_new(value: u64, lowercase: bool) -> FormatResult<Self> {
        match u16::try_from(value) {
            Ok(value @ 1..=MAX_ROMAN) => Ok(Self { value, lowercase }),
            _ => Err(FormatError::range()
                .with_message("roman numerals are limited to values in 1..=3999.")),
        }
    }
}

impl Writeable for RomanNumeral {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let mut remaining = self.value;
        for (value, numeral) in NUMERALS {
            while remaining >= value {
                for ch in numeral.chars() {
                    sink.write_char(if self.lowercase {
                        ch.to_ascii_lowercase()
                    } else {
                        ch
                    })?;
                }
                remaining -= value;
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        // MMMDCCCLXXXVIII is the longest numeral.
        LengthHint::between(1, 15)
    }
}

impl_display_with_writeable!(RomanNumeral);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn roman(value: u64) -> alloc::string::String {
        RomanNumeral::try_new(value, false).unwrap().to_string()
    }

    #[test]
    fn subtractive_notation() {
        assert_eq!(roman(1), "I");
        assert_eq!(roman(4), "IV");
        assert_eq!(roman(9), "IX");
        assert_eq!(roman(14), "XIV");
        assert_eq!(roman(1987), "MCMLXXXVII");
        assert_eq!(roman(2003), "MMIII");
        assert_eq!(roman(3888), "MMMDCCCLXXXVIII");
        assert_eq!(
            RomanNumeral::try_new(49, true).unwrap().to_string(),
            "xlix"
        );
    }

    #[test]
    fn out_of_range() {
        assert!(RomanNumeral::try_new(0, false).is_err());
        assert!(RomanNumeral::try_new(4000, false).is_err());
    }
}
