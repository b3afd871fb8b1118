//! Bijective base-26 alphabetic numbering: `a, b, …, z, aa, ab, …`.

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{FormatError, FormatResult};

/// A positive value formatted as an alphabetic sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphabeticNumeral {
    value: u64,
    lowercase: bool,
}

impl AlphabeticNumeral {
    /// Creates an alphabetic numeral; zero has no representation.
    pub fn try_new(value: u64, lowercase: bool) -> FormatResult<Self> {
        if value == 0 {
            return Err(
                FormatError::range().with_message("alphabetic numbering starts at one.")
            );
        }
        Ok(Self { value, lowercase })
    }

    // Letters are produced least significant first.
    fn letters(&self) -> ([u8; 14], usize) {
        let base = if self.lowercase { b'a' } else { b'A' };
        let mut out = [0; 14];
        let mut len = 0;
        let mut n = self.value;
        while n > 0 {
            n -= 1;
            out[len] = base + (n % 26) as u8;
            n /= 26;
            len += 1;
        }
        (out, len)
    }
}

impl Writeable for AlphabeticNumeral {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let (letters, len) = self.letters();
        for letter in letters[..len].iter().rev() {
            sink.write_char(char::from(*letter))?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(self.letters().1)
    }
}

impl_display_with_writeable!(AlphabeticNumeral);
