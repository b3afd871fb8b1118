//! The `DateFormatter` and compiled pictures.

use alloc::{string::String, sync::Arc};

use tinystr::TinyAsciiStr;

#[cfg(feature = "std")]
use crate::cache::{CacheKey, PictureCache};
use crate::{
    calendar::{resolve_calendar, ResolvedCalendar},
    options::{FormatArgs, FormatOptions},
    picture::{self, Picture},
    provider::{resolve_language, BuiltinNames, NamesProvider, ResolvedLanguage},
    render::RenderContext,
    value::TemporalValue,
    FormatResult,
};

/// A picture compiled for one language, calendar and place.
///
/// Compiled pictures are immutable and can be rendered against any number
/// of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPicture {
    picture: Picture,
    language: ResolvedLanguage,
    calendar: ResolvedCalendar,
    place: Option<String>,
}

impl CompiledPicture {
    /// The compiled picture string.
    #[inline]
    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    /// The language the picture renders names and words in.
    #[inline]
    pub fn language(&self) -> TinyAsciiStr<8> {
        self.language.tag
    }

    /// The calendar designator the picture renders with.
    #[inline]
    pub fn calendar(&self) -> TinyAsciiStr<4> {
        self.calendar.designator
    }

    #[inline]
    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    /// Whether the requested language or calendar was replaced by the
    /// default one.
    pub fn fell_back(&self) -> bool {
        self.language.fell_back || self.calendar.fell_back
    }
}

/// Formats temporal values with picture strings.
///
/// ```rust
/// use temporal_picture::{DateFormatter, FormatArgs, TemporalValue};
///
/// let formatter = DateFormatter::default();
/// let date: TemporalValue = "2003-09-07".parse().unwrap();
///
/// let args = FormatArgs::default().with_language("de");
/// let formatted = formatter.format(&date, "[D1o] [MNn] [Y]", &args).unwrap();
/// assert_eq!(formatted, "7. September 2003");
/// ```
#[derive(Debug)]
pub struct DateFormatter<P: NamesProvider = BuiltinNames> {
    options: FormatOptions,
    provider: P,
    #[cfg(feature = "std")]
    cache: PictureCache,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}

impl DateFormatter {
    /// Creates a formatter with the built-in English, German and French
    /// names.
    pub fn new(options: FormatOptions) -> Self {
        Self::with_provider(options, BuiltinNames)
    }
}

impl<P: NamesProvider> DateFormatter<P> {
    /// Creates a formatter that looks names up in `provider`.
    pub fn with_provider(options: FormatOptions, provider: P) -> Self {
        Self {
            options,
            provider,
            #[cfg(feature = "std")]
            cache: PictureCache::new(),
        }
    }

    /// Replaces the picture cache.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn with_cache(mut self, cache: PictureCache) -> Self {
        self.cache = cache;
        self
    }

    #[inline]
    pub fn options(&self) -> FormatOptions {
        self.options
    }

    #[inline]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    #[cfg(feature = "std")]
    #[inline]
    pub fn cache(&self) -> &PictureCache {
        &self.cache
    }

    /// Compiles `picture` for the language, calendar and place in `args`,
    /// reusing a cached compilation when there is one.
    #[cfg(feature = "std")]
    pub fn compile(
        &self,
        picture: &str,
        args: &FormatArgs<'_>,
    ) -> FormatResult<Arc<CompiledPicture>> {
        self.cache
            .get_or_compile(CacheKey::new(picture, args), || {
                self.compile_uncached(picture, args)
            })
    }

    /// Compiles `picture` for the language, calendar and place in `args`.
    #[cfg(not(feature = "std"))]
    pub fn compile(
        &self,
        picture: &str,
        args: &FormatArgs<'_>,
    ) -> FormatResult<Arc<CompiledPicture>> {
        self.compile_uncached(picture, args).map(Arc::new)
    }

    pub(crate) fn compile_uncached(
        &self,
        picture: &str,
        args: &FormatArgs<'_>,
    ) -> FormatResult<CompiledPicture> {
        let picture = picture::compile(picture)?;
        let language = resolve_language(args.language, &self.provider, self.options.fallback)?;
        let calendar = resolve_calendar(args.calendar, self.options.fallback)?;
        Ok(CompiledPicture {
            picture,
            language,
            calendar,
            place: args.place.map(String::from),
        })
    }

    /// Renders a compiled picture against `value`.
    pub fn render(
        &self,
        compiled: &CompiledPicture,
        value: &TemporalValue,
    ) -> FormatResult<String> {
        RenderContext {
            value,
            names: compiled.language.names(&self.provider),
            calendar: compiled.calendar,
            language_fell_back: compiled.language.fell_back,
            era_style: self.options.era_style,
            place: compiled.place(),
        }
        .render(&compiled.picture)
    }

    /// Formats `value` with `picture`.
    pub fn format(
        &self,
        value: &TemporalValue,
        picture: &str,
        args: &FormatArgs<'_>,
    ) -> FormatResult<String> {
        let compiled = self.compile(picture, args)?;
        self.render(&compiled, value)
    }
}
