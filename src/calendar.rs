//! The calendar engine.
//!
//! Every date component is computed from the proleptic Gregorian fields
//! with the pure equations of `date_equations`. The `calendar` argument
//! only selects the designator printed by `[C]`; calendars other than
//! `AD` and `ISO` are recognised but rendered in the Gregorian calendar.

use date_equations::gregorian;
use tinystr::{tinystr, TinyAsciiStr};

use crate::{iso::IsoDate, options::FallbackPolicy, FormatError, FormatResult};

/// The calendar used when no calendar argument is given.
pub const DEFAULT_CALENDAR: TinyAsciiStr<4> = tinystr!(4, "AD");

const SUPPORTED_CALENDARS: [&str; 2] = ["AD", "ISO"];

const KNOWN_CALENDARS: [&str; 26] = [
    "AH", "AME", "AM", "AP", "AS", "BE", "CB", "CE", "CL", "CS", "EE", "FE", "JE", "KE", "KY",
    "ME", "MS", "NS", "OS", "RS", "SE", "SH", "SS", "TE", "VE", "VS",
];

impl IsoDate {
    /// Whether the date falls in the common era (year 1 and later).
    #[inline]
    pub fn is_common_era(&self) -> bool {
        self.year > 0
    }

    /// The year number within its era.
    #[inline]
    pub fn era_year(&self) -> u64 {
        self.year.unsigned_abs()
    }

    /// The ordinal day of the year in `1..=366`.
    pub fn day_of_year(&self) -> u16 {
        gregorian::day_of_year(self.astronomical_year(), self.month, self.day)
    }

    /// The ISO day of the week, Monday is 1 and Sunday is 7.
    pub fn day_of_week(&self) -> u8 {
        gregorian::iso_weekday(self.to_epoch_days())
    }

    /// The ISO 8601 week number; week 1 holds the year's first Thursday.
    pub fn week_of_year(&self) -> u8 {
        gregorian::iso_week_date(self.astronomical_year(), self.month, self.day).week
    }

    /// The week of the month, counted the same way as ISO weeks.
    ///
    /// Days in a week whose Thursday falls in a neighbouring month belong
    /// to that month's week.
    pub fn week_of_month(&self) -> u8 {
        gregorian::week_of_month(self.astronomical_year(), self.month, self.day).week
    }
}

/// The outcome of resolving the calendar argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ResolvedCalendar {
    pub(crate) designator: TinyAsciiStr<4>,
    pub(crate) fell_back: bool,
}

impl Default for ResolvedCalendar {
    fn default() -> Self {
        Self {
            designator: DEFAULT_CALENDAR,
            fell_back: false,
        }
    }
}

/// Resolves the calendar argument.
///
/// Names that are neither a known designator nor an EQName are rejected
/// whatever the fallback policy.
pub(crate) fn resolve_calendar(
    requested: Option<&str>,
    policy: FallbackPolicy,
) -> FormatResult<ResolvedCalendar> {
    let Some(requested) = requested.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(ResolvedCalendar::default());
    };

    if SUPPORTED_CALENDARS.contains(&requested) {
        let designator = TinyAsciiStr::try_from_str(requested)
            .map_err(|_| FormatError::assert())?;
        return Ok(ResolvedCalendar {
            designator,
            fell_back: false,
        });
    }

    if !KNOWN_CALENDARS.contains(&requested) && !is_eqname(requested) {
        return Err(FormatError::unsupported().with_message("the calendar name is not valid."));
    }

    match policy {
        FallbackPolicy::Fallback => {
            #[cfg(feature = "log")]
            log::warn!("calendar {requested:?} is not supported, falling back to {DEFAULT_CALENDAR}");
            Ok(ResolvedCalendar {
                fell_back: true,
                ..ResolvedCalendar::default()
            })
        }
        FallbackPolicy::Reject => {
            Err(FormatError::unsupported().with_message("the requested calendar is not supported."))
        }
    }
}

/// Matches `Q{uri}local` with a non-empty local name.
fn is_eqname(name: &str) -> bool {
    name.strip_prefix("Q{")
        .and_then(|rest| rest.split_once('}'))
        .is_some_and(|(uri, local)| {
            !uri.contains('{')
                && local
                    .chars()
                    .next()
                    .is_some_and(|ch| ch.is_alphabetic() || ch == '_')
                && local
                    .chars()
                    .all(|ch| ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.'))
        })
}
