//! Formatting options.
//!
//! The picture language leaves two behaviors to the implementation: the
//! era naming convention and what happens when a language or calendar is
//! not supported. Both are explicit configuration here.

use crate::{FormatError, FormatResult};
use core::{fmt, str::FromStr};

/// The convention used to name eras in the `[E]` component.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EraStyle {
    /// `AD` / `BC`
    #[default]
    AdBc,
    /// `CE` / `BCE`
    CeBce,
    /// `A.D.` / `B.C.`
    Dotted,
    /// `C.E.` / `B.C.E.`
    DottedCommon,
}

impl FromStr for EraStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ad-bc" => Ok(Self::AdBc),
            "ce-bce" => Ok(Self::CeBce),
            "dotted" => Ok(Self::Dotted),
            "dotted-common" => Ok(Self::DottedCommon),
            _ => Err(FormatError::range().with_message("EraStyle not an accepted value.")),
        }
    }
}

impl fmt::Display for EraStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdBc => "ad-bc",
            Self::CeBce => "ce-bce",
            Self::Dotted => "dotted",
            Self::DottedCommon => "dotted-common",
        }
        .fmt(f)
    }
}

/// What to do when the requested language or calendar is not supported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackPolicy {
    /// Format with the default language or calendar and prefix the output
    /// with a `[Language: en]` or `[Calendar: AD]` annotation.
    #[default]
    Fallback,
    /// Fail with an `UnsupportedLanguageOrCalendar` error.
    Reject,
}

impl FromStr for FallbackPolicy {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fallback" => Ok(Self::Fallback),
            "reject" => Ok(Self::Reject),
            _ => Err(FormatError::range().with_message("FallbackPolicy not an accepted value.")),
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fallback => "fallback",
            Self::Reject => "reject",
        }
        .fmt(f)
    }
}

/// Options applied by a `DateFormatter` to every call.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub era_style: EraStyle,
    pub fallback: FallbackPolicy,
}

impl FormatOptions {
    /// Creates a new set of options.
    pub const fn new(era_style: EraStyle, fallback: FallbackPolicy) -> Self {
        Self {
            era_style,
            fallback,
        }
    }

    /// Builds options from host configuration strings, using the default
    /// for any value that is not provided.
    pub fn try_from_strs(era_style: Option<&str>, fallback: Option<&str>) -> FormatResult<Self> {
        Ok(Self {
            era_style: parse_option(era_style)?.unwrap_or_default(),
            fallback: parse_option(fallback)?.unwrap_or_default(),
        })
    }
}

/// The optional `language`, `calendar` and `place` arguments of a call.
///
/// Absent arguments mean "use the default".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatArgs<'a> {
    pub language: Option<&'a str>,
    pub calendar: Option<&'a str>,
    pub place: Option<&'a str>,
}

impl<'a> FormatArgs<'a> {
    /// Creates the full argument set.
    pub const fn new(
        language: Option<&'a str>,
        calendar: Option<&'a str>,
        place: Option<&'a str>,
    ) -> Self {
        Self {
            language,
            calendar,
            place,
        }
    }

    /// Sets the language argument.
    pub const fn with_language(mut self, language: &'a str) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets the calendar argument.
    pub const fn with_calendar(mut self, calendar: &'a str) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Sets the place argument.
    pub const fn with_place(mut self, place: &'a str) -> Self {
        self.place = Some(place);
        self
    }
}

/// Parses a string option, returning an error on unknown values.
pub(crate) fn parse_option<T: FromStr<Err = FormatError>>(value: Option<&str>) -> FormatResult<Option<T>> {
    value.map(str::parse).transpose()
}
