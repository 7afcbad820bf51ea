//! Stemmer implementations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod porter;

pub use porter::PorterStemmer;

/// Leaves words as given. With it the aligner's stem stage only repeats the
/// exact stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_owned()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// Wraps a stemmer so that letters it keeps retain their original case.
///
/// `Cats` stems to `Cat` and `cats` to `cat`, so the two stay distinct.
/// Letters the inner stemmer rewrites come out as it produced them.
#[derive(Clone)]
pub struct CasePreservingStemmer {
    inner: Arc<dyn Stemmer>,
}

impl CasePreservingStemmer {
    pub fn new(inner: Arc<dyn Stemmer>) -> Self {
        CasePreservingStemmer { inner }
    }
}

impl Stemmer for CasePreservingStemmer {
    fn stem(&self, word: &str) -> String {
        let stem = self.inner.stem(word);
        if stem == word.to_lowercase() {
            return word.to_owned();
        }

        let mut original = word.chars();
        stem.chars()
            .map(|c| match original.next() {
                Some(o) if o.to_lowercase().eq(std::iter::once(c)) => o,
                _ => c,
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

/// Stemming algorithm selectable from configuration.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    /// Porter (1980) suffix stripping.
    #[default]
    Porter,
    /// Leave words unchanged.
    Identity,
}

impl StemmerKind {
    /// Instantiate the selected stemmer.
    pub fn build(self) -> Arc<dyn Stemmer> {
        match self {
            StemmerKind::Porter => Arc::new(PorterStemmer::new()),
            StemmerKind::Identity => Arc::new(IdentityStemmer::new()),
        }
    }
}
