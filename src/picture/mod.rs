//! The picture string language.
//!
//! A picture such as `[D1o] [MNn] [Y]` is a sequence of literal text and
//! bracketed markers. Each marker names a component of the temporal value
//! and optionally a presentation, a second modifier and a width:
//!
//! ```text
//! [ component presentation second-modifier , min-width - max-width ]
//! ```
//!
//! [`compile`] turns the picture into a [`Picture`] once; rendering it
//! against a value never reparses the string.

use alloc::{string::String, vec::Vec};

use crate::{numbering::digits::DigitPattern, provider::LetterCase, timezone::OffsetFormat};

mod parser;

#[cfg(test)]
mod tests;

pub use parser::compile;

/// The component of a temporal value a marker selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// `Y`
    Year,
    /// `M`
    Month,
    /// `D`
    Day,
    /// `d`
    DayOfYear,
    /// `F`
    DayOfWeek,
    /// `W`
    WeekOfYear,
    /// `w`
    WeekOfMonth,
    /// `H`
    Hour,
    /// `h`
    Hour12,
    /// `P`
    DayPeriod,
    /// `m`
    Minute,
    /// `s`
    Second,
    /// `f`
    FractionalSecond,
    /// `Z`
    Timezone,
    /// `z`
    GmtTimezone,
    /// `C`
    Calendar,
    /// `E`
    Era,
}

impl Component {
    /// Returns the component selected by a marker's first character.
    pub fn from_specifier(specifier: char) -> Option<Self> {
        let component = match specifier {
            'Y' => Self::Year,
            'M' => Self::Month,
            'D' => Self::Day,
            'd' => Self::DayOfYear,
            'F' => Self::DayOfWeek,
            'W' => Self::WeekOfYear,
            'w' => Self::WeekOfMonth,
            'H' => Self::Hour,
            'h' => Self::Hour12,
            'P' => Self::DayPeriod,
            'm' => Self::Minute,
            's' => Self::Second,
            'f' => Self::FractionalSecond,
            'Z' => Self::Timezone,
            'z' => Self::GmtTimezone,
            'C' => Self::Calendar,
            'E' => Self::Era,
            _ => return None,
        };
        Some(component)
    }

    /// The marker character of this component.
    pub fn specifier(self) -> char {
        match self {
            Self::Year => 'Y',
            Self::Month => 'M',
            Self::Day => 'D',
            Self::DayOfYear => 'd',
            Self::DayOfWeek => 'F',
            Self::WeekOfYear => 'W',
            Self::WeekOfMonth => 'w',
            Self::Hour => 'H',
            Self::Hour12 => 'h',
            Self::DayPeriod => 'P',
            Self::Minute => 'm',
            Self::Second => 's',
            Self::FractionalSecond => 'f',
            Self::Timezone => 'Z',
            Self::GmtTimezone => 'z',
            Self::Calendar => 'C',
            Self::Era => 'E',
        }
    }

    /// Whether the component is read from the date fields.
    pub fn is_date_component(self) -> bool {
        matches!(
            self,
            Self::Year
                | Self::Month
                | Self::Day
                | Self::DayOfYear
                | Self::DayOfWeek
                | Self::WeekOfYear
                | Self::WeekOfMonth
                | Self::Era
        )
    }

    /// Whether the component is read from the time fields.
    pub fn is_time_component(self) -> bool {
        matches!(
            self,
            Self::Hour
                | Self::Hour12
                | Self::DayPeriod
                | Self::Minute
                | Self::Second
                | Self::FractionalSecond
        )
    }

    /// The presentation used when a marker gives none.
    pub(crate) fn default_presentation(self) -> Presentation {
        match self {
            Self::Minute | Self::Second => Presentation::Digits(DigitPattern::double()),
            Self::DayOfWeek | Self::DayPeriod => Presentation::Name(Some(LetterCase::Lower)),
            Self::Calendar | Self::Era => Presentation::Name(None),
            Self::Timezone | Self::GmtTimezone => Presentation::Offset(OffsetFormat::DEFAULT),
            _ => Presentation::Digits(DigitPattern::single()),
        }
    }
}

/// How a component is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Presentation {
    /// Positional decimal digits, e.g. `1`, `01`, `#,##0`.
    Digits(DigitPattern),
    /// `I` or `i`.
    Roman { lowercase: bool },
    /// `A` or `a`.
    Alphabetic { lowercase: bool },
    /// `W`, `w` or `Ww`.
    Words(LetterCase),
    /// `N`, `n` or `Nn`; `None` keeps the name's own case.
    Name(Option<LetterCase>),
    /// A numeric timezone offset.
    Offset(OffsetFormat),
    /// `[ZZ]`, the military timezone letter.
    Military,
}

/// Whether a number is rendered as a cardinal or an ordinal.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum NumberForm {
    #[default]
    Cardinal,
    /// `o`, with the optional variation given as `o(-e)`.
    Ordinal(Option<String>),
}

/// The largest width bound a picture may give.
pub const MAX_WIDTH: usize = 1024;

/// The width modifier of a marker.
///
/// Both bounds are at most [`MAX_WIDTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Width {
    /// The minimum width, at least one.
    pub min: usize,
    /// The maximum width; `None` is unbounded.
    pub max: Option<usize>,
}

/// A bracketed variable marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker {
    pub(crate) component: Component,
    pub(crate) presentation: Presentation,
    pub(crate) form: NumberForm,
    pub(crate) traditional: bool,
    pub(crate) width: Option<Width>,
}

impl Marker {
    /// The component selected by the first character of the marker.
    pub fn component(&self) -> Component {
        self.component
    }

    /// The presentation, resolved to the component's default when absent.
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Whether numbers are written as cardinals or ordinals.
    pub fn form(&self) -> &NumberForm {
        &self.form
    }

    /// Whether the `t` second modifier was given.
    pub fn traditional(&self) -> bool {
        self.traditional
    }

    /// The explicit width modifier, if any.
    pub fn width(&self) -> Option<Width> {
        self.width
    }
}

/// A piece of a compiled picture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal text with the `[[` and `]]` escapes resolved.
    Literal(String),
    /// A variable marker.
    Marker(Marker),
}

/// A compiled picture string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Picture {
    segments: Vec<Segment>,
}

impl Picture {
    pub(crate) fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The literal and marker segments in picture order.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over the markers of the picture.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Marker(marker) => Some(marker),
            Segment::Literal(_) => None,
        })
    }
}
