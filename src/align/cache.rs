//! Memoizing synonym source.

use ahash::AHashMap;
use log::debug;
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::align::expander::{SynonymSet, SynonymSource};
use crate::error::Result;

/// Caches closures of another [`SynonymSource`] by word.
///
/// The closure of a word depends on the word alone, so cached answers are
/// indistinguishable from fresh ones. Failed expansions are not cached.
#[derive(Debug)]
pub struct CachedExpander<S> {
    inner: S,
    cache: RwLock<AHashMap<String, SynonymSet>>,
    /// Stop inserting once this many words are cached.
    max_entries: Option<usize>,
}

impl<S: SynonymSource> CachedExpander<S> {
    /// Create an unbounded cache.
    pub fn new(inner: S) -> Self {
        CachedExpander {
            inner,
            cache: RwLock::new(AHashMap::new()),
            max_entries: None,
        }
    }

    /// Create a cache holding at most `max_entries` words.
    pub fn with_max_entries(inner: S, max_entries: usize) -> Self {
        CachedExpander {
            max_entries: Some(max_entries),
            ..Self::new(inner)
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of cached words.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }

    /// Expand every word ahead of time, in parallel.
    ///
    /// Returns the number of cached words afterwards.
    pub fn warm<W: AsRef<str> + Sync>(&self, words: &[W]) -> Result<usize> {
        words
            .par_iter()
            .try_for_each(|word| self.expand(word.as_ref()).map(|_| ()))?;
        let cached = self.len();
        debug!("synonym cache warmed with {} words, {cached} cached", words.len());
        Ok(cached)
    }
}

impl<S: SynonymSource> SynonymSource for CachedExpander<S> {
    fn expand(&self, word: &str) -> Result<SynonymSet> {
        if let Some(cached) = self.cache.read().get(word) {
            return Ok(cached.clone());
        }

        let closure = self.inner.expand(word)?;

        let mut cache = self.cache.write();
        if self.max_entries.is_none_or(|max| cache.len() < max) {
            cache.insert(word.to_string(), closure.clone());
        }

        Ok(closure)
    }
}
