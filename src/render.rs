//! Rendering a compiled picture against a temporal value.

use alloc::{format, string::String};

use writeable::Writeable;

use crate::{
    calendar::ResolvedCalendar,
    numbering::{self, digits::family_digit, DigitPattern},
    options::EraStyle,
    picture::{Component, Marker, Picture, Presentation, Segment, Width},
    provider::{LetterCase, LocaleNames},
    timezone::{military_letter, zone_abbreviation, FormattedOffset, OffsetFormat},
    value::TemporalValue,
    FormatError, FormatResult,
};

/// Everything a picture is rendered against.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RenderContext<'a> {
    pub(crate) value: &'a TemporalValue,
    pub(crate) names: &'a LocaleNames,
    pub(crate) calendar: ResolvedCalendar,
    pub(crate) language_fell_back: bool,
    pub(crate) era_style: EraStyle,
    pub(crate) place: Option<&'a str>,
}

/// A component value before presentation.
enum RawValue<'a> {
    Number(u64),
    Name(&'a str),
    Nanoseconds(u32),
}

impl RenderContext<'_> {
    /// Renders `picture`, failing on the first marker that cannot be
    /// satisfied.
    pub(crate) fn render(&self, picture: &Picture) -> FormatResult<String> {
        let mut out = String::new();
        if self.calendar.fell_back {
            out.push_str("[Calendar: ");
            out.push_str(self.calendar.designator.as_str());
            out.push(']');
        }
        if self.language_fell_back {
            out.push_str("[Language: ");
            out.push_str(self.names.language().as_str());
            out.push(']');
        }

        for segment in picture.segments() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Marker(marker) => self.write_marker(marker, &mut out)?,
            }
        }
        Ok(out)
    }

    fn write_marker(&self, marker: &Marker, sink: &mut String) -> FormatResult<()> {
        if matches!(
            marker.component,
            Component::Timezone | Component::GmtTimezone
        ) {
            return self.write_timezone(marker, sink);
        }

        match (self.raw_value(marker)?, &marker.presentation) {
            (RawValue::Number(value), presentation) => numbering::write_number(
                value,
                presentation,
                &marker.form,
                marker.width,
                self.names,
                sink,
            ),
            (RawValue::Name(name), Presentation::Name(case)) => {
                write_name(name, *case, marker.width, sink);
                Ok(())
            }
            (RawValue::Nanoseconds(nanos), Presentation::Digits(pattern)) => {
                write_fraction(nanos, pattern, marker.width, sink);
                Ok(())
            }
            _ => Err(FormatError::assert()),
        }
    }

    fn raw_value(&self, marker: &Marker) -> FormatResult<RawValue<'_>> {
        let component = marker.component;
        let wants_name = matches!(marker.presentation, Presentation::Name(_));

        if component == Component::Calendar {
            return Ok(RawValue::Name(self.calendar.designator.as_str()));
        }

        if component.is_date_component() {
            let date = self.value.date().ok_or_else(|| unavailable(component))?;
            let raw = match component {
                Component::Year => RawValue::Number(date.era_year()),
                Component::Month if wants_name => RawValue::Name(self.names.month(date.month)?),
                Component::Month => RawValue::Number(date.month.into()),
                Component::Day => RawValue::Number(date.day.into()),
                Component::DayOfYear => RawValue::Number(date.day_of_year().into()),
                Component::DayOfWeek if wants_name => {
                    RawValue::Name(self.names.weekday(date.day_of_week())?)
                }
                Component::DayOfWeek => RawValue::Number(date.day_of_week().into()),
                Component::WeekOfYear => RawValue::Number(date.week_of_year().into()),
                Component::WeekOfMonth => RawValue::Number(date.week_of_month().into()),
                Component::Era => {
                    RawValue::Name(self.names.era(date.is_common_era(), self.era_style))
                }
                _ => return Err(FormatError::assert()),
            };
            return Ok(raw);
        }

        if component.is_time_component() {
            let time = self.value.time().ok_or_else(|| unavailable(component))?;
            let raw = match component {
                Component::Hour => RawValue::Number(time.hour.into()),
                Component::Hour12 => RawValue::Number(match time.hour % 12 {
                    0 => 12,
                    hour => hour.into(),
                }),
                Component::DayPeriod => RawValue::Name(self.names.am_pm(time.hour >= 12)),
                Component::Minute => RawValue::Number(time.minute.into()),
                Component::Second => RawValue::Number(time.second.into()),
                Component::FractionalSecond => RawValue::Nanoseconds(time.nanosecond),
                _ => return Err(FormatError::assert()),
            };
            return Ok(raw);
        }

        Err(FormatError::assert())
    }

    fn write_timezone(&self, marker: &Marker, sink: &mut String) -> FormatResult<()> {
        let offset = self.value.offset_minutes();
        if let (Presentation::Military, Some(letter)) =
            (&marker.presentation, military_letter(offset))
        {
            sink.push(letter);
            return Ok(());
        }

        let minutes = offset.ok_or_else(|| unavailable(marker.component))?;
        match &marker.presentation {
            Presentation::Offset(format) => {
                if marker.component == Component::GmtTimezone {
                    sink.push_str("GMT");
                }
                let offset = FormattedOffset::new(minutes, *format)
                    .with_utc_as_z(marker.traditional && marker.component == Component::Timezone);
                sink.push_str(&offset.write_to_string());
            }
            Presentation::Name(case) => match zone_abbreviation(self.place, minutes) {
                Some(abbreviation) => write_name(abbreviation, *case, marker.width, sink),
                None => sink.push_str(
                    &FormattedOffset::new(minutes, OffsetFormat::DEFAULT).write_to_string(),
                ),
            },
            // Offsets without a military letter.
            Presentation::Military => sink.push_str(
                &FormattedOffset::new(minutes, OffsetFormat::DEFAULT).write_to_string(),
            ),
            _ => return Err(FormatError::assert()),
        }
        Ok(())
    }
}

/// Writes a name in `case`, cut to the maximum width and padded with
/// spaces to the minimum width.
fn write_name(name: &str, case: Option<LetterCase>, width: Option<Width>, sink: &mut String) {
    let mut cased = String::new();
    match case {
        Some(case) => case.write(name, &mut cased),
        None => cased.push_str(name),
    }
    let (min, max) = width.map_or((0, None), |w| (w.min, w.max));
    let mut written = 0;
    for ch in cased.chars().take(max.unwrap_or(usize::MAX)) {
        sink.push(ch);
        written += 1;
    }
    for _ in written..min {
        sink.push(' ');
    }
}

/// Writes the fraction of a second without trailing zeros, padded on the
/// right to the minimum width and cut to the maximum width.
fn write_fraction(nanos: u32, pattern: &DigitPattern, width: Option<Width>, sink: &mut String) {
    let (min, max) = width.map_or_else(|| pattern.implied_widths(), |w| (w.min, w.max));
    let mut digits = format!("{nanos:09}");
    let significant = digits.trim_end_matches('0').len().max(1);
    digits.truncate(max.map_or(significant, |max| significant.min(max)));
    while digits.len() < min {
        digits.push('0');
    }
    for byte in digits.bytes() {
        sink.push(family_digit(pattern.zero(), byte - b'0'));
    }
}

fn unavailable(component: Component) -> FormatError {
    FormatError::component_unavailable().with_message(format!(
        "the value has no field for the [{}] component.",
        component.specifier()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        iso::{IsoDate, IsoTime},
        picture::{compile, MAX_WIDTH},
        provider::{ENGLISH, GERMAN},
    };

    fn context<'a>(value: &'a TemporalValue, names: &'a LocaleNames) -> RenderContext<'a> {
        RenderContext {
            value,
            names,
            calendar: ResolvedCalendar::default(),
            language_fell_back: false,
            era_style: EraStyle::AdBc,
            place: None,
        }
    }

    fn render(value: &TemporalValue, picture: &str) -> FormatResult<String> {
        context(value, &ENGLISH).render(&compile(picture)?)
    }

    fn date_time() -> TemporalValue {
        TemporalValue::from_date_time(
            IsoDate::new(2003, 9, 7).unwrap(),
            IsoTime::new(21, 5, 6, 120_000_000).unwrap(),
        )
    }

    #[test]
    fn names_and_widths() {
        let value = date_time();
        assert_eq!(render(&value, "[FNn], [D1o] [MNn]").unwrap(), "Sunday, 7th September");
        assert_eq!(render(&value, "[MNn,3-3] [F,2-2]").unwrap(), "Sep su");
        assert_eq!(render(&value, "[MN,*-4]").unwrap(), "SEPT");
        assert_eq!(render(&value, "[Pn,4]|").unwrap(), "pm  |");
        assert_eq!(render(&value, "[F1] [d] [W] [w]").unwrap(), "7 250 36 1");
    }

    #[test]
    fn widths_are_capped() {
        let value = date_time();
        let name = render(&value, &format!("[MNn,{MAX_WIDTH}]")).unwrap();
        assert_eq!(name.len(), MAX_WIDTH);
        assert!(name.starts_with("September "));
        let fraction = render(&value, &format!("[f,{MAX_WIDTH}]")).unwrap();
        assert_eq!(fraction.len(), MAX_WIDTH);
        assert!(fraction.starts_with("12000"));

        for picture in [
            "[Y,18446744073709551615]",
            "[MNn,1000000000000]",
            "[f,1025]",
            "[Y,1-1025]",
        ] {
            assert_eq!(
                render(&value, picture).unwrap_err().kind(),
                ErrorKind::InvalidPicture,
                "{picture}"
            );
        }
    }

    #[test]
    fn twelve_hour_clock() {
        let midnight = TemporalValue::from_time(IsoTime::new(0, 30, 0, 0).unwrap());
        assert_eq!(render(&midnight, "[h]:[m] [PN]").unwrap(), "12:30 AM");
        assert_eq!(render(&date_time(), "[h]:[m01] [P]").unwrap(), "9:05 pm");
    }

    #[test]
    fn fractional_seconds() {
        let value = date_time();
        assert_eq!(render(&value, "[s].[f]").unwrap(), "06.12");
        assert_eq!(render(&value, "[f001]").unwrap(), "120");
        assert_eq!(render(&value, "[f,1-1]").unwrap(), "1");
        assert_eq!(render(&value, "[f,5-*]").unwrap(), "12000");

        let whole = TemporalValue::from_time(IsoTime::new(1, 2, 3, 0).unwrap());
        assert_eq!(render(&whole, "[f]").unwrap(), "0");
    }

    #[test]
    fn missing_fields() {
        let date = TemporalValue::try_new_date(2003, 9, 7).unwrap();
        assert_eq!(render(&date, "[H]").unwrap_err().kind(), ErrorKind::ComponentUnavailable);
        assert_eq!(render(&date, "[Z]").unwrap_err().kind(), ErrorKind::ComponentUnavailable);
        assert_eq!(render(&date, "[ZZ]").unwrap(), "J");
        assert_eq!(render(&date, "[C]").unwrap(), "AD");

        let time = TemporalValue::from_time(IsoTime::new(1, 2, 3, 0).unwrap());
        assert_eq!(render(&time, "[E]").unwrap_err().kind(), ErrorKind::ComponentUnavailable);
    }

    #[test]
    fn timezones() {
        let value = date_time().with_offset(-300).unwrap();
        assert_eq!(render(&value, "[Z]").unwrap(), "-05:00");
        assert_eq!(render(&value, "[z]").unwrap(), "GMT-05:00");
        assert_eq!(render(&value, "[Z0]").unwrap(), "-5");
        assert_eq!(render(&value, "[ZZ]").unwrap(), "R");
        assert_eq!(render(&value, "[ZN]").unwrap(), "-05:00");

        let mut ctx = context(&value, &ENGLISH);
        ctx.place = Some("America/New_York");
        assert_eq!(ctx.render(&compile("[ZN]").unwrap()).unwrap(), "EST");

        let utc = date_time().with_offset(0).unwrap();
        assert_eq!(render(&utc, "[Z0t]").unwrap(), "Z");
        assert_eq!(render(&utc, "[Z]").unwrap(), "+00:00");
        assert_eq!(render(&utc, "[ZN]").unwrap(), "UTC");
    }

    #[test]
    fn eras_and_annotations() {
        let value = TemporalValue::try_new_date(-55, 3, 15).unwrap();
        let mut ctx = context(&value, &GERMAN);
        assert_eq!(ctx.render(&compile("[Y] [E]").unwrap()).unwrap(), "55 v. Chr.");

        ctx.names = &ENGLISH;
        ctx.era_style = EraStyle::DottedCommon;
        ctx.calendar.fell_back = true;
        ctx.language_fell_back = true;
        assert_eq!(
            ctx.render(&compile("[Y][E]").unwrap()).unwrap(),
            "[Calendar: AD][Language: en]55B.C.E."
        );
    }
}
