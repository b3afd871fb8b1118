//! Numbering systems.
//!
//! A number is rendered as positional digits in any decimal digit family,
//! as a roman numeral, as an alphabetic sequence or in words of the
//! requested language.

use alloc::string::{String, ToString};

use writeable::Writeable;

use crate::{
    picture::{NumberForm, Presentation, Width},
    provider::LocaleNames,
    FormatError, FormatResult,
};

pub mod alphabetic;
pub mod digits;
pub mod roman;

pub use alphabetic::AlphabeticNumeral;
pub use digits::{DigitPattern, Grouping};
pub use roman::RomanNumeral;

/// Writes `value` into `sink` in the given presentation.
///
/// Widths apply to positional digits only.
pub(crate) fn write_number(
    value: u64,
    presentation: &Presentation,
    form: &NumberForm,
    width: Option<Width>,
    names: &LocaleNames,
    sink: &mut String,
) -> FormatResult<()> {
    let variation = match form {
        NumberForm::Ordinal(variation) => Some(variation.as_deref()),
        NumberForm::Cardinal => None,
    };
    match presentation {
        Presentation::Digits(pattern) => {
            let (min, max) = width.map_or_else(|| pattern.implied_widths(), |w| (w.min, w.max));
            write_digits(value, pattern, min, max, sink);
            if let Some(variation) = variation {
                let shown = max
                    .and_then(|max| u32::try_from(max).ok())
                    .and_then(|max| 10_u64.checked_pow(max))
                    .map_or(value, |limit| value % limit);
                sink.push_str(names.words().ordinal_suffix(shown, variation));
            }
        }
        Presentation::Roman { lowercase } => {
            sink.push_str(&RomanNumeral::try_new(value, *lowercase)?.write_to_string());
        }
        Presentation::Alphabetic { lowercase } => {
            sink.push_str(&AlphabeticNumeral::try_new(value, *lowercase)?.write_to_string());
        }
        Presentation::Words(case) => {
            let words = match variation {
                Some(variation) => names.words().ordinal(value, variation),
                None => names.words().cardinal(value),
            };
            case.write(&words, sink);
        }
        Presentation::Name(_) | Presentation::Offset(_) | Presentation::Military => {
            return Err(FormatError::assert());
        }
    }
    Ok(())
}

/// Writes `value` zero padded to `min` digits, keeping at most the `max`
/// low-order digits.
pub(crate) fn write_digits(
    value: u64,
    pattern: &DigitPattern,
    min: usize,
    max: Option<usize>,
    sink: &mut String,
) {
    let mut digits = value.to_string();
    if let Some(max) = max {
        if digits.len() > max {
            digits.drain(..digits.len() - max);
        }
    }
    if digits.len() < min {
        digits.insert_str(0, &"0".repeat(min - digits.len()));
    }
    pattern.write_grouped(&digits, sink);
}
