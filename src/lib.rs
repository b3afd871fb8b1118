//! The `temporal_picture` crate formats dates and times with the picture
//! strings of the XPath `format-date`, `format-dateTime` and `format-time`
//! functions.
//!
//! ```rust
//! use temporal_picture::{format_date, format_date_time_with, TemporalValue};
//!
//! let date: TemporalValue = "2003-09-07".parse().unwrap();
//! assert_eq!(format_date(&date, "[Y]-[M01]-[D]").unwrap(), "2003-09-7");
//! assert_eq!(format_date(&date, "[D1] [MI] [Y]").unwrap(), "7 IX 2003");
//!
//! let moment = TemporalValue::parse_date_time("2003-09-07T21:15:06+05:30").unwrap();
//! let formatted =
//!     format_date_time_with(&moment, "[FNn], [D1o] [MNn] [h].[m01] [Pn] [ZN]", Some("en"), None, None)
//!         .unwrap();
//! assert_eq!(formatted, "Sunday, 7th September 9.15 pm +05:30");
//! ```
//!
//! A picture is literal text with bracketed markers. A marker selects a
//! component (`Y`, `M`, `D`, `d`, `F`, `W`, `w`, `H`, `h`, `P`, `m`, `s`,
//! `f`, `Z`, `z`, `C`, `E`), optionally followed by a presentation such as
//! `01`, `I`, `a`, `Ww` or `Nn`, a second modifier (`o` for ordinals, `t`)
//! and a width after the last comma (`[Y,2-2]`).
//!
//! Pictures are compiled once per picture, language, calendar and place
//! and cached by the [`DateFormatter`]; the free functions share a
//! process wide formatter when the `std` feature is enabled. That formatter
//! caches at most [`DEFAULT_MAX_ENTRIES`] pictures; later pictures are
//! compiled on every call.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    unused_crate_dependencies,
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod calendar;
pub mod error;
pub mod iso;
pub mod numbering;
pub mod options;
pub mod picture;
pub mod provider;
pub mod timezone;
pub mod value;

#[cfg(feature = "std")]
mod cache;
mod format;
mod parsers;
mod render;

use alloc::string::String;

/// Re-export of `TinyAsciiStr` from `tinystr`.
pub use tinystr::TinyAsciiStr;

#[doc(inline)]
pub use error::FormatError;

#[cfg(feature = "std")]
pub use cache::{PictureCache, DEFAULT_MAX_ENTRIES};
pub use format::{CompiledPicture, DateFormatter};
pub use options::{EraStyle, FallbackPolicy, FormatArgs, FormatOptions};
pub use value::{TemporalValue, ValueKind};

/// The formatter result type
pub type FormatResult<T> = Result<T, FormatError>;

#[cfg(feature = "std")]
static DEFAULT_FORMATTER: std::sync::LazyLock<DateFormatter> = std::sync::LazyLock::new(|| {
    DateFormatter::default().with_cache(PictureCache::with_max_entries(DEFAULT_MAX_ENTRIES))
});

#[cfg(feature = "std")]
fn format_with_default(
    value: &TemporalValue,
    picture: &str,
    args: &FormatArgs<'_>,
) -> FormatResult<String> {
    DEFAULT_FORMATTER.format(value, picture, args)
}

#[cfg(not(feature = "std"))]
fn format_with_default(
    value: &TemporalValue,
    picture: &str,
    args: &FormatArgs<'_>,
) -> FormatResult<String> {
    DateFormatter::default().format(value, picture, args)
}

/// Formats a date value with the default language and calendar.
pub fn format_date(value: &TemporalValue, picture: &str) -> FormatResult<String> {
    format_with_default(value, picture, &FormatArgs::default())
}

/// Formats a date value.
///
/// `None` arguments select the defaults: English, the `AD` calendar and
/// no place.
pub fn format_date_with(
    value: &TemporalValue,
    picture: &str,
    language: Option<&str>,
    calendar: Option<&str>,
    place: Option<&str>,
) -> FormatResult<String> {
    format_with_default(value, picture, &FormatArgs::new(language, calendar, place))
}

/// Formats a date-time value with the default language and calendar.
pub fn format_date_time(value: &TemporalValue, picture: &str) -> FormatResult<String> {
    format_with_default(value, picture, &FormatArgs::default())
}

/// Formats a date-time value.
pub fn format_date_time_with(
    value: &TemporalValue,
    picture: &str,
    language: Option<&str>,
    calendar: Option<&str>,
    place: Option<&str>,
) -> FormatResult<String> {
    format_with_default(value, picture, &FormatArgs::new(language, calendar, place))
}

/// Formats a time value with the default language and calendar.
pub fn format_time(value: &TemporalValue, picture: &str) -> FormatResult<String> {
    format_with_default(value, picture, &FormatArgs::default())
}

/// Formats a time value.
pub fn format_time_with(
    value: &TemporalValue,
    picture: &str,
    language: Option<&str>,
    calendar: Option<&str>,
    place: Option<&str>,
) -> FormatResult<String> {
    format_with_default(value, picture, &FormatArgs::new(language, calendar, place))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn date(source: &str) -> TemporalValue {
        TemporalValue::parse_date(source).unwrap()
    }

    fn date_time(source: &str) -> TemporalValue {
        TemporalValue::parse_date_time(source).unwrap()
    }

    #[test]
    fn reference_scenarios() {
        let sept = date("2003-09-07");
        assert_eq!(format_date(&sept, "[Y]-[M01]-[D]").unwrap(), "2003-09-7");
        assert_eq!(format_date(&sept, "[D1] [MI] [Y]").unwrap(), "7 IX 2003");
        assert_eq!(format_date(&date("0985-03-01"), "[Y,2-2]").unwrap(), "85");
        assert_eq!(
            format_date(&date("1987-12-13+05:30"), "[ZZ]").unwrap(),
            "+05:30"
        );
        assert_eq!(
            format_date_time(&date_time("2003-09-07T09:15:06"), "[H]:[m]:[s1]").unwrap(),
            "9:15:6"
        );
        assert_eq!(format_date(&date("-0055-03-15"), "[Y][EN]").unwrap(), "55BC");
    }

    #[test]
    fn formatting_is_deterministic() {
        let value = date_time("2012-02-29T23:59:59.999+14:00");
        let picture = "[FNn] [D1o] [MNn,*-3] [Y0001] [H01]:[m]:[s].[f001] [z] [W] [dI]";
        let first = format_date_time(&value, picture).unwrap();
        for _ in 0..8 {
            assert_eq!(format_date_time(&value, picture).unwrap(), first);
        }
        assert_eq!(
            first,
            "Wednesday 29th Feb 2012 23:59:59.999 GMT+14:00 9 LX"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn shared_cache_is_bounded() {
        let value = date("2003-09-07");
        for i in 0..DEFAULT_MAX_ENTRIES + 64 {
            let picture = alloc::format!("[Y] {i}");
            assert_eq!(
                format_date(&value, &picture).unwrap(),
                alloc::format!("2003 {i}")
            );
        }
        assert!(DEFAULT_FORMATTER.cache().len().unwrap() <= DEFAULT_MAX_ENTRIES);
        assert_eq!(format_date(&value, "[Y] 0").unwrap(), "2003 0");
    }

    #[test]
    fn width_monotonicity() {
        let value = date("2003-09-07");
        for min in 1..=6 {
            let picture = alloc::format!("[D,{min}]");
            let out = format_date(&value, &picture).unwrap();
            assert_eq!(out.len(), min);
            assert!(out.ends_with('7'));
        }
        for max in 1..=4 {
            let picture = alloc::format!("[Y,1-{max}]");
            let out = format_date(&value, &picture).unwrap();
            assert_eq!(out, &"2003"[4 - max..]);
        }
    }

    #[test]
    fn roman_numerals_ignore_widths() {
        let value = date("2003-09-07");
        let plain = format_date(&value, "[YI]").unwrap();
        assert_eq!(plain, "MMIII");
        for picture in ["[YI,1-1]", "[YI,10]", "[YI,2-3]", "[Yi,*-2]"] {
            assert_eq!(format_date(&value, picture).unwrap().len(), plain.len());
        }
    }

    #[test]
    fn utc_offsets() {
        let utc = date_time("2003-09-07T12:00:00Z");
        assert_eq!(format_date_time(&utc, "[Z]").unwrap(), "+00:00");
        assert_eq!(format_date_time(&utc, "[Z0t]").unwrap(), "Z");
        assert_eq!(format_date_time(&utc, "[ZZ]").unwrap(), "Z");
        assert_eq!(format_date(&date("2003-09-07"), "[ZZ]").unwrap(), "J");
    }

    #[test]
    fn unavailable_components() {
        let value = date("2003-09-07");
        for picture in ["[H]", "[h]", "[P]", "[m]", "[s]", "[f]", "[z]"] {
            let err = format_date(&value, picture).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ComponentUnavailable, "{picture}");
            assert_eq!(err.kind().code(), Some("FOFD1350"));
        }
        let time = TemporalValue::parse_time("09:15:06").unwrap();
        assert_eq!(format_time(&time, "[H01].[m01]").unwrap(), "09.15");
        let err = format_time(&time, "[D]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ComponentUnavailable);
    }

    #[test]
    fn invalid_pictures() {
        let value = date("2003-09-07");
        for picture in ["[Y", "[Q]", "[Y,3-1]", "[PI]", "]"] {
            let err = format_date(&value, picture).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidPicture, "{picture}");
            assert_eq!(err.kind().code(), Some("FOFD1340"));
        }
    }

    #[test]
    fn languages_and_calendars() {
        let value = date("2003-09-07");
        assert_eq!(
            format_date_with(&value, "[D1o] [MNn] [Y]", Some("de"), None, None).unwrap(),
            "7. September 2003"
        );
        assert_eq!(
            format_date_with(&value, "[Dw] [Mn] [YWw]", Some("fr"), None, None).unwrap(),
            "sept septembre Deux Mille Trois"
        );
        assert_eq!(
            format_date_with(&value, "[D] [C]", None, Some("ISO"), None).unwrap(),
            "7 ISO"
        );
        assert_eq!(
            format_date_with(&value, "[Y]", Some("tlh"), Some("AH"), None).unwrap(),
            "[Calendar: AD][Language: en]2003"
        );
        let err = format_date_with(&value, "[Y]", None, Some("bogus"), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedLanguageOrCalendar);
    }
}
