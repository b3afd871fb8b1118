//! Picture string compilation.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{iter::Peekable, str::Chars};

use crate::{
    numbering::digits::DigitPattern, provider::LetterCase, timezone::OffsetFormat, FormatError,
    FormatResult,
};

use super::{Component, Marker, NumberForm, Picture, Presentation, Segment, Width, MAX_WIDTH};

/// Compiles a picture string.
///
/// Literal text is kept verbatim apart from the `[[` and `]]` escapes.
/// Whether the markers can be satisfied by a particular value is decided
/// when the picture is rendered.
pub fn compile(source: &str) -> FormatResult<Picture> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '[' if chars.next_if_eq(&'[').is_some() => literal.push('['),
            ']' if chars.next_if_eq(&']').is_some() => literal.push(']'),
            '[' => {
                let body = marker_body(&mut chars)?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(core::mem::take(&mut literal)));
                }
                segments.push(Segment::Marker(parse_marker(&body)?));
            }
            ']' => return Err(invalid("unescaped ']' outside of a marker.")),
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(Picture::new(segments))
}

/// Collects the marker up to its closing bracket, dropping whitespace.
fn marker_body(chars: &mut Peekable<Chars<'_>>) -> FormatResult<String> {
    let mut body = String::new();
    loop {
        match chars.next() {
            Some(']') => return Ok(body),
            Some('[') => return Err(invalid("'[' inside a marker.")),
            Some(ch) if ch.is_whitespace() => {}
            Some(ch) => body.push(ch),
            None => return Err(invalid("marker is missing its closing ']'.")),
        }
    }
}

fn parse_marker(body: &str) -> FormatResult<Marker> {
    let mut chars = body.chars();
    let specifier = chars.next().ok_or_else(|| invalid("empty marker."))?;
    let component = Component::from_specifier(specifier)
        .ok_or_else(|| invalid("unknown component specifier."))?;

    let modifiers = chars.as_str();
    let (modifiers, width) = match modifiers.rfind(',') {
        Some(index) => (
            &modifiers[..index],
            Some(parse_width(&modifiers[index + 1..])?),
        ),
        None => (modifiers, None),
    };

    let (token, form, traditional) = split_second_modifier(modifiers)?;
    let presentation = resolve_presentation(component, PresentationToken::parse(token)?)?;

    Ok(Marker {
        component,
        presentation,
        form,
        traditional,
        width,
    })
}

/// Splits the trailing `c`, `o`, `o(…)`, `a` or `t` from the presentation.
fn split_second_modifier(modifiers: &str) -> FormatResult<(&str, NumberForm, bool)> {
    if let Some(inner) = modifiers.strip_suffix(')') {
        let open = inner
            .rfind("o(")
            .ok_or_else(|| invalid("unbalanced ')' in a marker."))?;
        let variation = &inner[open + 2..];
        let variation = (!variation.is_empty()).then(|| variation.to_string());
        return Ok((&modifiers[..open], NumberForm::Ordinal(variation), false));
    }

    let mut chars = modifiers.chars();
    let (Some(last), head) = (chars.next_back(), chars.as_str()) else {
        return Ok((modifiers, NumberForm::Cardinal, false));
    };
    // A lone `a` is the alphabetic presentation rather than a second modifier.
    if head.is_empty() && last == 'a' {
        return Ok((modifiers, NumberForm::Cardinal, false));
    }
    match last {
        'o' => Ok((head, NumberForm::Ordinal(None), false)),
        'c' | 'a' => Ok((head, NumberForm::Cardinal, false)),
        't' => Ok((head, NumberForm::Cardinal, true)),
        _ => Ok((modifiers, NumberForm::Cardinal, false)),
    }
}

/// A presentation token before it is checked against the component.
#[derive(Debug, PartialEq)]
enum PresentationToken {
    Default,
    Digits(DigitPattern),
    Roman { lowercase: bool },
    Alphabetic { lowercase: bool },
    Words(LetterCase),
    Name(LetterCase),
    Military,
}

impl PresentationToken {
    fn parse(token: &str) -> FormatResult<Self> {
        let token = match token {
            "" => Self::Default,
            "I" => Self::Roman { lowercase: false },
            "i" => Self::Roman { lowercase: true },
            "A" => Self::Alphabetic { lowercase: false },
            "a" => Self::Alphabetic { lowercase: true },
            "W" => Self::Words(LetterCase::Upper),
            "w" => Self::Words(LetterCase::Lower),
            "Ww" => Self::Words(LetterCase::Title),
            "N" => Self::Name(LetterCase::Upper),
            "n" => Self::Name(LetterCase::Lower),
            "Nn" => Self::Name(LetterCase::Title),
            "Z" => Self::Military,
            pattern => Self::Digits(DigitPattern::parse(pattern)?),
        };
        Ok(token)
    }
}

fn resolve_presentation(
    component: Component,
    token: PresentationToken,
) -> FormatResult<Presentation> {
    use Component as C;
    use PresentationToken as T;

    let presentation = match (component, token) {
        (_, T::Default) => component.default_presentation(),
        (C::FractionalSecond, T::Digits(pattern)) => Presentation::Digits(pattern),
        (C::DayPeriod | C::Calendar | C::Era, T::Name(case)) => Presentation::Name(Some(case)),
        (C::Timezone | C::GmtTimezone, T::Digits(pattern)) => {
            Presentation::Offset(OffsetFormat::from_pattern(&pattern)?)
        }
        (C::Timezone, T::Military) => Presentation::Military,
        (C::Timezone | C::Month | C::DayOfWeek, T::Name(case)) => Presentation::Name(Some(case)),
        (
            C::FractionalSecond
            | C::DayPeriod
            | C::Calendar
            | C::Era
            | C::Timezone
            | C::GmtTimezone,
            _,
        )
        | (_, T::Name(_) | T::Military) => {
            return Err(invalid("presentation is not applicable to the component."))
        }
        (_, T::Digits(pattern)) => Presentation::Digits(pattern),
        (_, T::Roman { lowercase }) => Presentation::Roman { lowercase },
        (_, T::Alphabetic { lowercase }) => Presentation::Alphabetic { lowercase },
        (_, T::Words(case)) => Presentation::Words(case),
    };
    Ok(presentation)
}

/// Parses `min`, `min-max`, `*`, `min-*` or `*-max`.
fn parse_width(source: &str) -> FormatResult<Width> {
    let (min, max) = match source.split_once('-') {
        Some((min, max)) => (min, Some(max)),
        None => (source, None),
    };
    let min = parse_width_bound(min)?.unwrap_or(1);
    let max = max.map(parse_width_bound).transpose()?.flatten();

    if min == 0 || max == Some(0) {
        return Err(invalid("width must be at least one."));
    }
    if max.is_some_and(|max| max < min) {
        return Err(invalid("maximum width is smaller than the minimum width."));
    }
    Ok(Width { min, max })
}

fn parse_width_bound(source: &str) -> FormatResult<Option<usize>> {
    if source == "*" {
        return Ok(None);
    }
    if source.is_empty() || !source.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("malformed width modifier."));
    }
    match source.parse::<usize>() {
        Ok(bound) if bound <= MAX_WIDTH => Ok(Some(bound)),
        _ => Err(invalid("width modifier is too large.")),
    }
}

fn invalid(reason: &'static str) -> FormatError {
    FormatError::invalid_picture().with_message(reason)
}
