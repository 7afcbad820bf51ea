//! Word alignment between a hypothesis and a reference.
//!
//! Words are carried as [`EnumeratedWord`]s: an opaque caller-assigned index
//! plus the token. Matchers consume their inputs and return the pairs they
//! found together with whatever is left on both sides.

pub mod aligner;
pub mod cache;
pub mod expander;
pub mod matcher;

use serde::{Deserialize, Serialize};

pub use aligner::{AlignedPair, Aligner, AlignerConfig, Alignment, MatchStage};
pub use cache::CachedExpander;
pub use expander::{SynonymExpander, SynonymSet, SynonymSource};
pub use matcher::{SynonymMatcher, match_exact, match_stems};

/// A token tagged with the index it is reported under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumeratedWord<I = usize> {
    pub index: I,
    pub word: String,
}

impl<I> EnumeratedWord<I> {
    pub fn new<S: Into<String>>(index: I, word: S) -> Self {
        EnumeratedWord {
            index,
            word: word.into(),
        }
    }
}

impl<I, S: Into<String>> From<(I, S)> for EnumeratedWord<I> {
    fn from((index, word): (I, S)) -> Self {
        EnumeratedWord::new(index, word)
    }
}

/// Tag each word with its position.
pub fn enumerate_words<S: AsRef<str>>(words: &[S]) -> Vec<EnumeratedWord> {
    words
        .iter()
        .enumerate()
        .map(|(index, word)| EnumeratedWord::new(index, word.as_ref()))
        .collect()
}

/// A hypothesis index paired with a reference index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordMatch<H = usize, R = usize> {
    pub hypothesis: H,
    pub reference: R,
}

impl<H, R> WordMatch<H, R> {
    pub fn new(hypothesis: H, reference: R) -> Self {
        WordMatch {
            hypothesis,
            reference,
        }
    }

    pub fn into_pair(self) -> (H, R) {
        (self.hypothesis, self.reference)
    }
}

impl<H, R> From<(H, R)> for WordMatch<H, R> {
    fn from((hypothesis, reference): (H, R)) -> Self {
        WordMatch::new(hypothesis, reference)
    }
}

/// Result of one matching pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome<H = usize, R = usize> {
    /// Pairs in the order they were found.
    pub matches: Vec<WordMatch<H, R>>,
    /// Hypothesis entries left unmatched, original order preserved.
    pub hypothesis: Vec<EnumeratedWord<H>>,
    /// Reference entries left unmatched, original order preserved.
    pub reference: Vec<EnumeratedWord<R>>,
}

impl<H, R> StageOutcome<H, R> {
    /// Outcome of a pass that matched nothing.
    pub fn unmatched(
        hypothesis: Vec<EnumeratedWord<H>>,
        reference: Vec<EnumeratedWord<R>>,
    ) -> Self {
        StageOutcome {
            matches: Vec::new(),
            hypothesis,
            reference,
        }
    }
}
