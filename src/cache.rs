//! A shared cache of compiled pictures.
//!
//! Compiling a picture does not depend on the value being formatted, so a
//! compiled picture is kept per `(picture, language, calendar, place)` and
//! shared between threads. Compilation runs outside of the lock: two
//! threads missing the same key may both compile, and the first insert
//! wins.

use alloc::{string::String, sync::Arc};
use std::sync::RwLock;

use rustc_hash::FxHashMap;

use crate::{format::CompiledPicture, options::FormatArgs, FormatError, FormatResult};

/// The bound of the cache behind the `format_*` functions.
pub const DEFAULT_MAX_ENTRIES: usize = 1024;

/// The arguments a compiled picture depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    picture: String,
    language: Option<String>,
    calendar: Option<String>,
    place: Option<String>,
}

impl CacheKey {
    pub(crate) fn new(picture: &str, args: &FormatArgs<'_>) -> Self {
        Self {
            picture: picture.into(),
            language: args.language.map(String::from),
            calendar: args.calendar.map(String::from),
            place: args.place.map(String::from),
        }
    }
}

/// A thread safe map from picture arguments to compiled pictures.
#[derive(Debug, Default)]
pub struct PictureCache {
    entries: RwLock<FxHashMap<CacheKey, Arc<CompiledPicture>>>,
    max_entries: Option<usize>,
}

impl PictureCache {
    /// Creates an unbounded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache that stops inserting once it holds `max_entries`
    /// pictures.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: RwLock::default(),
            max_entries: Some(max_entries),
        }
    }

    /// The number of cached pictures.
    pub fn len(&self) -> FormatResult<usize> {
        Ok(self.entries.read().map_err(|_| lock_error())?.len())
    }

    pub fn is_empty(&self) -> FormatResult<bool> {
        self.len().map(|len| len == 0)
    }

    /// Drops every cached picture.
    pub fn clear(&self) -> FormatResult<()> {
        self.entries.write().map_err(|_| lock_error())?.clear();
        Ok(())
    }

    /// Returns the cached picture for `key`, compiling and inserting it
    /// when absent.
    pub(crate) fn get_or_compile<F>(&self, key: CacheKey, compile: F) -> FormatResult<Arc<CompiledPicture>>
    where
        F: FnOnce() -> FormatResult<CompiledPicture>,
    {
        if let Some(hit) = self.entries.read().map_err(|_| lock_error())?.get(&key) {
            return Ok(Arc::clone(hit));
        }

        let compiled = Arc::new(compile()?);

        let mut entries = self.entries.write().map_err(|_| lock_error())?;
        if let Some(existing) = entries.get(&key) {
            return Ok(Arc::clone(existing));
        }
        if self.max_entries.is_some_and(|max| entries.len() >= max) {
            return Ok(compiled);
        }
        #[cfg(feature = "log")]
        log::debug!("caching compiled picture {:?}", key.picture);
        entries.insert(key, Arc::clone(&compiled));
        Ok(compiled)
    }
}

fn lock_error() -> FormatError {
    FormatError::general("Unable to acquire lock")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DateFormatter, TemporalValue};
    use alloc::vec::Vec;

    #[test]
    fn compiles_once_per_key() {
        let formatter = DateFormatter::default();
        let cache = PictureCache::new();
        let args = FormatArgs::default();
        let mut compiled = 0;

        let first = cache
            .get_or_compile(CacheKey::new("[Y]", &args), || {
                compiled += 1;
                formatter.compile_uncached("[Y]", &args)
            })
            .unwrap();
        let second = cache
            .get_or_compile(CacheKey::new("[Y]", &args), || {
                compiled += 1;
                formatter.compile_uncached("[Y]", &args)
            })
            .unwrap();

        assert_eq!(compiled, 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len().unwrap(), 1);

        let french = args.with_language("fr");
        cache
            .get_or_compile(CacheKey::new("[Y]", &french), || {
                formatter.compile_uncached("[Y]", &french)
            })
            .unwrap();
        assert_eq!(cache.len().unwrap(), 2);

        cache.clear().unwrap();
        assert!(cache.is_empty().unwrap());
    }

    #[test]
    fn concurrent_compiles_share_one_entry() {
        let formatter = &DateFormatter::default();
        let args = &FormatArgs::default().with_language("de");
        let value: &TemporalValue = &"2003-09-07".parse().unwrap();
        let picture = "[D1o] [MNn] [Y]";

        let compiled: Vec<Arc<CompiledPicture>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(move || {
                        let compiled = formatter.compile(picture, args).unwrap();
                        assert_eq!(
                            formatter.render(&compiled, value).unwrap(),
                            "7. September 2003"
                        );
                        compiled
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(formatter.cache().len().unwrap(), 1);
        let cached = formatter.compile(picture, args).unwrap();
        assert!(compiled.iter().all(|c| Arc::ptr_eq(c, &cached)));
    }

    #[test]
    fn errors_are_not_cached() {
        let formatter = DateFormatter::default();
        let cache = PictureCache::new();
        let args = FormatArgs::default();
        assert!(cache
            .get_or_compile(CacheKey::new("[Q]", &args), || formatter
                .compile_uncached("[Q]", &args))
            .is_err());
        assert!(cache.is_empty().unwrap());
    }

    #[test]
    fn bounded_cache_stops_inserting() {
        let formatter = DateFormatter::default();
        let cache = PictureCache::with_max_entries(1);
        let args = FormatArgs::default();
        for picture in ["[Y]", "[M]", "[D]"] {
            let compiled = cache
                .get_or_compile(CacheKey::new(picture, &args), || {
                    formatter.compile_uncached(picture, &args)
                })
                .unwrap();
            assert_eq!(compiled.picture().markers().count(), 1);
        }
        assert_eq!(cache.len().unwrap(), 1);
    }
}
