//! The `NamesProvider` trait and the built-in locale name tables.
//!
//! A `LocaleNames` table holds everything language specific the renderer
//! needs: month, weekday, era and am/pm names and a number-word generator.
//! Tables are plain `static` data; a provider is handed to the formatter
//! explicitly so hosts can supply their own tables.

use alloc::string::String;
use core::fmt;

use icu_locale::LanguageIdentifier;
use tinystr::{tinystr, TinyAsciiStr};

use crate::{
    options::{EraStyle, FallbackPolicy},
    FormatError, FormatResult,
};

mod de;
mod en;
mod fr;

pub use de::GERMAN;
pub use en::ENGLISH;
pub use fr::FRENCH;

/// The language used when no language argument is given.
pub const DEFAULT_LANGUAGE: TinyAsciiStr<8> = tinystr!(8, "en");

/// Cardinal and ordinal number words for one language.
pub trait NumberWords {
    /// Returns the cardinal words for `value`, in lowercase.
    fn cardinal(&self, value: u64) -> String;

    /// Returns the ordinal words for `value`, in lowercase.
    ///
    /// `variation` is the optional `(…)` text following the `o` modifier,
    /// for instance `-e` to request a feminine form.
    fn ordinal(&self, value: u64, variation: Option<&str>) -> String;

    /// Returns the suffix appended to a numeric ordinal, e.g. `st` in `1st`.
    fn ordinal_suffix(&self, value: u64, variation: Option<&str>) -> &'static str;
}

/// Era names as `[before, after]` the start of the common era.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraNames {
    pub ad_bc: [&'static str; 2],
    pub ce_bce: [&'static str; 2],
    pub dotted: [&'static str; 2],
    pub dotted_common: [&'static str; 2],
}

impl EraNames {
    fn for_style(&self, style: EraStyle) -> &[&'static str; 2] {
        match style {
            EraStyle::AdBc => &self.ad_bc,
            EraStyle::CeBce => &self.ce_bce,
            EraStyle::Dotted => &self.dotted,
            EraStyle::DottedCommon => &self.dotted_common,
        }
    }
}

/// The name table of one language.
pub struct LocaleNames {
    language: TinyAsciiStr<8>,
    months: [&'static str; 12],
    weekdays: [&'static str; 7],
    am_pm: [&'static str; 2],
    eras: EraNames,
    words: &'static (dyn NumberWords + Sync),
}

impl LocaleNames {
    /// Creates a name table.
    ///
    /// `weekdays` starts with Monday.
    pub const fn new(
        language: TinyAsciiStr<8>,
        months: [&'static str; 12],
        weekdays: [&'static str; 7],
        am_pm: [&'static str; 2],
        eras: EraNames,
        words: &'static (dyn NumberWords + Sync),
    ) -> Self {
        Self {
            language,
            months,
            weekdays,
            am_pm,
            eras,
            words,
        }
    }

    /// The primary language subtag of this table.
    #[inline]
    pub fn language(&self) -> TinyAsciiStr<8> {
        self.language
    }

    /// Returns the name of `month` in `1..=12`.
    pub fn month(&self, month: u8) -> FormatResult<&'static str> {
        self.months
            .get(usize::from(month).wrapping_sub(1))
            .copied()
            .ok_or(FormatError::range().with_message("month is not within 1..=12."))
    }

    /// Returns the name of the ISO `weekday` in `1..=7`.
    pub fn weekday(&self, weekday: u8) -> FormatResult<&'static str> {
        self.weekdays
            .get(usize::from(weekday).wrapping_sub(1))
            .copied()
            .ok_or(FormatError::range().with_message("weekday is not within 1..=7."))
    }

    /// Returns the am or pm marker.
    #[inline]
    pub fn am_pm(&self, pm: bool) -> &'static str {
        self.am_pm[usize::from(pm)]
    }

    /// Returns the era name for the given convention.
    #[inline]
    pub fn era(&self, common_era: bool, style: EraStyle) -> &'static str {
        self.eras.for_style(style)[usize::from(common_era)]
    }

    /// The number-word generator.
    #[inline]
    pub fn words(&self) -> &'static (dyn NumberWords + Sync) {
        self.words
    }
}

impl fmt::Debug for LocaleNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleNames")
            .field("language", &self.language)
            .field("months", &self.months)
            .field("weekdays", &self.weekdays)
            .field("am_pm", &self.am_pm)
            .field("eras", &self.eras)
            .finish_non_exhaustive()
    }
}

/// The `NamesProvider` trait supplies the locale name tables.
pub trait NamesProvider {
    /// Returns the table for a lowercase primary language subtag.
    fn names(&self, language: &str) -> Option<&LocaleNames>;

    /// Returns the table used when a language is absent or unsupported.
    fn default_names(&self) -> &LocaleNames;
}

/// The compiled-in English, German and French tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinNames;

impl NamesProvider for BuiltinNames {
    fn names(&self, language: &str) -> Option<&LocaleNames> {
        match language {
            "en" => Some(&ENGLISH),
            "de" => Some(&GERMAN),
            "fr" => Some(&FRENCH),
            _ => None,
        }
    }

    fn default_names(&self) -> &LocaleNames {
        &ENGLISH
    }
}

/// The outcome of resolving the language argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ResolvedLanguage {
    pub(crate) tag: TinyAsciiStr<8>,
    pub(crate) fell_back: bool,
}

impl ResolvedLanguage {
    /// Returns the name table for this language.
    pub(crate) fn names<'p>(&self, provider: &'p impl NamesProvider) -> &'p LocaleNames {
        if self.fell_back {
            return provider.default_names();
        }
        provider
            .names(self.tag.as_str())
            .unwrap_or_else(|| provider.default_names())
    }
}

/// Resolves the language argument against the provider.
pub(crate) fn resolve_language(
    requested: Option<&str>,
    provider: &impl NamesProvider,
    policy: FallbackPolicy,
) -> FormatResult<ResolvedLanguage> {
    let default = ResolvedLanguage {
        tag: provider.default_names().language(),
        fell_back: false,
    };
    let Some(requested) = requested.filter(|s| !s.is_empty()) else {
        return Ok(default);
    };

    let supported = requested
        .parse::<LanguageIdentifier>()
        .ok()
        .and_then(|id| {
            let subtag = id.language.as_str();
            provider.names(subtag)?;
            TinyAsciiStr::try_from_str(subtag).ok()
        });

    match (supported, policy) {
        (Some(tag), _) => Ok(ResolvedLanguage {
            tag,
            fell_back: false,
        }),
        (None, FallbackPolicy::Fallback) => {
            #[cfg(feature = "log")]
            log::warn!(
                "language {requested:?} is not supported, falling back to {}",
                default.tag
            );
            Ok(ResolvedLanguage {
                fell_back: true,
                ..default
            })
        }
        (None, FallbackPolicy::Reject) => Err(FormatError::unsupported()
            .with_message("the requested language is not supported.")),
    }
}

/// Applies a case transform to lowercase words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    Upper,
    Lower,
    /// The first letter of every word in uppercase.
    Title,
}

impl LetterCase {
    /// Writes `text` into `sink` in this case.
    pub(crate) fn write(self, text: &str, sink: &mut String) {
        match self {
            Self::Upper => sink.extend(text.chars().flat_map(char::to_uppercase)),
            Self::Lower => sink.extend(text.chars().flat_map(char::to_lowercase)),
            Self::Title => {
                let mut word_start = true;
                for ch in text.chars() {
                    if word_start {
                        sink.extend(ch.to_uppercase());
                    } else {
                        sink.extend(ch.to_lowercase());
                    }
                    word_start = ch == ' ';
                }
            }
        }
    }
}

/// Uppercases the first letter of every space separated word.
#[cfg(test)]
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::new();
    LetterCase::Title.write(text, &mut out);
    out
}
