//! Decimal digit patterns in arbitrary digit families.
//!
//! A digit pattern such as `01`, `#,##0` or `٠١` selects the family of
//! decimal glyphs, the number of mandatory and optional digits and the
//! grouping separators used when rendering a positional number.

use alloc::{string::String, vec::Vec};

use crate::{FormatError, FormatResult};

/// The zero codepoint of every supported decimal digit block.
const DIGIT_FAMILY_ZEROS: [u32; 63] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x16A60, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E950, 0x1FBF0,
];

/// Returns the zero of the digit family `ch` belongs to, if `ch` is a decimal digit.
pub(crate) fn digit_family_zero(ch: char) -> Option<char> {
    let cp = u32::from(ch);
    DIGIT_FAMILY_ZEROS
        .iter()
        .find(|zero| (**zero..=**zero + 9).contains(&cp))
        .and_then(|zero| char::from_u32(*zero))
}

/// Returns the glyph for `digit` in the family starting at `zero`.
#[inline]
pub(crate) fn family_digit(zero: char, digit: u8) -> char {
    // Every family in the table has ten consecutive assigned codepoints.
    char::from_u32(u32::from(zero) + u32::from(digit)).unwrap_or('?')
}

/// How grouping separators are placed in the rendered digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Grouping {
    None,
    /// The same separator repeated every `interval` digits.
    Regular { interval: usize, separator: char },
    /// Separators at fixed positions, counted in digits from the right.
    Positions(Vec<(usize, char)>),
}

/// A parsed decimal digit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitPattern {
    zero: char,
    mandatory: usize,
    optional: usize,
    separators: usize,
    grouping: Grouping,
}

impl DigitPattern {
    /// The `1` pattern.
    pub(crate) const fn single() -> Self {
        Self {
            zero: '0',
            mandatory: 1,
            optional: 0,
            separators: 0,
            grouping: Grouping::None,
        }
    }

    /// The `01` pattern.
    pub(crate) const fn double() -> Self {
        Self {
            zero: '0',
            mandatory: 2,
            optional: 0,
            separators: 0,
            grouping: Grouping::None,
        }
    }

    /// Parses a decimal digit pattern, e.g. `001`, `#,##0` or `١`.
    pub fn parse(source: &str) -> FormatResult<Self> {
        let mut zero = None;
        let mut mandatory = 0;
        let mut optional = 0;
        // Separators with the count of digit signs to their left.
        let mut separators = Vec::new();
        let mut previous_was_separator = true;

        for ch in source.chars() {
            if ch == '#' {
                if mandatory > 0 {
                    return Err(invalid_pattern("'#' may not follow a mandatory digit"));
                }
                optional += 1;
                previous_was_separator = false;
            } else if let Some(family) = digit_family_zero(ch) {
                if zero.is_some_and(|z| z != family) {
                    return Err(invalid_pattern("digits must come from a single digit family"));
                }
                zero = Some(family);
                mandatory += 1;
                previous_was_separator = false;
            } else if ch.is_alphanumeric() {
                return Err(invalid_pattern("letters are not allowed in a digit pattern"));
            } else {
                if previous_was_separator {
                    return Err(invalid_pattern("grouping separators must be between digits"));
                }
                separators.push((mandatory + optional, ch));
                previous_was_separator = true;
            }
        }

        let Some(zero) = zero else {
            return Err(invalid_pattern("a digit pattern needs a mandatory digit"));
        };
        if previous_was_separator {
            return Err(invalid_pattern("a digit pattern may not end with a separator"));
        }

        let total = mandatory + optional;
        let separator_count = separators.len();
        let positions: Vec<(usize, char)> = separators
            .into_iter()
            .rev()
            .map(|(left, ch)| (total - left, ch))
            .collect();

        Ok(Self {
            zero,
            mandatory,
            optional,
            separators: separator_count,
            grouping: Grouping::from_positions(positions),
        })
    }

    /// The zero glyph of the digit family.
    #[inline]
    pub fn zero(&self) -> char {
        self.zero
    }

    /// The number of mandatory digits.
    #[inline]
    pub fn mandatory(&self) -> usize {
        self.mandatory
    }

    /// The number of digit signs, mandatory and optional.
    #[inline]
    pub fn digit_signs(&self) -> usize {
        self.mandatory + self.optional
    }

    /// The grouping separators of the pattern.
    #[inline]
    pub fn grouping(&self) -> &Grouping {
        &self.grouping
    }

    /// The number of grouping separators written in the pattern.
    #[inline]
    pub fn separator_count(&self) -> usize {
        self.separators
    }

    /// Returns the widths implied by the pattern when no width is given.
    ///
    /// A pattern with a single digit sign has no maximum, so `[Y1]` prints
    /// the full year while `[Y01]` keeps only its last two digits.
    pub(crate) fn implied_widths(&self) -> (usize, Option<usize>) {
        let max = (self.digit_signs() > 1).then_some(self.digit_signs());
        (self.mandatory, max)
    }

    /// Writes ASCII decimal `digits` into `sink` in this pattern's family,
    /// inserting the grouping separators.
    pub(crate) fn write_grouped(&self, digits: &str, sink: &mut String) {
        let len = digits.len();
        for (index, byte) in digits.bytes().enumerate() {
            sink.push(family_digit(self.zero, byte - b'0'));
            let to_the_right = len - index - 1;
            if to_the_right > 0 {
                if let Some(separator) = self.grouping.separator_at(to_the_right) {
                    sink.push(separator);
                }
            }
        }
    }
}

impl Grouping {
    fn from_positions(positions: Vec<(usize, char)>) -> Self {
        let Some(&(first, separator)) = positions.first() else {
            return Self::None;
        };
        let regular = positions
            .iter()
            .enumerate()
            .all(|(i, &(position, ch))| ch == separator && position == first * (i + 1));
        if regular {
            Self::Regular {
                interval: first,
                separator,
            }
        } else {
            Self::Positions(positions)
        }
    }

    fn separator_at(&self, digits_to_the_right: usize) -> Option<char> {
        match self {
            Self::None => None,
            Self::Regular {
                interval,
                separator,
            } => (digits_to_the_right % interval == 0).then_some(*separator),
            Self::Positions(positions) => positions
                .iter()
                .find(|(position, _)| *position == digits_to_the_right)
                .map(|(_, ch)| *ch),
        }
    }

    /// Returns the separator and interval of regular grouping.
    pub(crate) fn regular(&self) -> Option<(usize, char)> {
        match self {
            Self::Regular {
                interval,
                separator,
            } => Some((*interval, *separator)),
            _ => None,
        }
    }
}

fn invalid_pattern(reason: &'static str) -> FormatError {
    FormatError::invalid_picture().with_message(reason)
}
