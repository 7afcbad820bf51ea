//! Greedy one-to-one word matching.
//!
//! Every pass walks the hypothesis from its last entry to its first. For each
//! hypothesis entry it scans the remaining reference entries from last to
//! first and pairs it with the first eligible one, removing both. The result
//! therefore depends on input order: among several eligible reference words
//! the one nearest the end of the shrinking reference list wins.

use std::convert::Infallible;

use log::debug;

use crate::align::expander::{SynonymSet, SynonymSource};
use crate::align::{EnumeratedWord, StageOutcome, WordMatch};
use crate::analysis::stem::Stemmer;
use crate::error::Result;

/// Set of reference words a hypothesis word may pair with.
trait Eligible {
    fn accepts(&self, word: &str) -> bool;
}

impl Eligible for String {
    fn accepts(&self, word: &str) -> bool {
        self == word
    }
}

impl Eligible for SynonymSet {
    fn accepts(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Shared greedy pass. `eligible_for` is called once per visited hypothesis
/// word; its error aborts the pass and no pairs are returned.
fn greedy_pass<H, R, E, X, F>(
    mut hypothesis: Vec<EnumeratedWord<H>>,
    mut reference: Vec<EnumeratedWord<R>>,
    mut eligible_for: F,
) -> std::result::Result<StageOutcome<H, R>, X>
where
    E: Eligible,
    F: FnMut(&str) -> std::result::Result<E, X>,
{
    if hypothesis.is_empty() || reference.is_empty() {
        return Ok(StageOutcome::unmatched(hypothesis, reference));
    }

    let mut matches = Vec::with_capacity(hypothesis.len().min(reference.len()));

    // Positions below `i` are untouched by removing entry `i`.
    let mut i = hypothesis.len();
    while i > 0 {
        i -= 1;
        let eligible = eligible_for(&hypothesis[i].word)?;
        if let Some(j) = reference.iter().rposition(|r| eligible.accepts(&r.word)) {
            let h = hypothesis.remove(i);
            let r = reference.remove(j);
            matches.push(WordMatch::new(h.index, r.index));
        }
    }

    Ok(StageOutcome {
        matches,
        hypothesis,
        reference,
    })
}

/// Pair identical words.
pub fn match_exact<H, R>(
    hypothesis: Vec<EnumeratedWord<H>>,
    reference: Vec<EnumeratedWord<R>>,
) -> StageOutcome<H, R> {
    let outcome = greedy_pass(hypothesis, reference, |word| {
        Ok::<_, Infallible>(word.to_string())
    });
    match outcome {
        Ok(outcome) => outcome,
        Err(never) => match never {},
    }
}

/// Stem both sides, then pair identical stems.
///
/// The unmatched entries are returned stemmed.
pub fn match_stems<H, R>(
    hypothesis: Vec<EnumeratedWord<H>>,
    reference: Vec<EnumeratedWord<R>>,
    stemmer: &dyn Stemmer,
) -> StageOutcome<H, R> {
    fn stem_all<I>(
        words: Vec<EnumeratedWord<I>>,
        stemmer: &dyn Stemmer,
    ) -> Vec<EnumeratedWord<I>> {
        words
            .into_iter()
            .map(|w| EnumeratedWord::new(w.index, stemmer.stem(&w.word)))
            .collect()
    }

    match_exact(stem_all(hypothesis, stemmer), stem_all(reference, stemmer))
}

/// Pairs a hypothesis word with a reference word that lies in its synonym
/// closure.
#[derive(Debug, Clone)]
pub struct SynonymMatcher<S> {
    source: S,
}

impl<S: SynonymSource> SynonymMatcher<S> {
    pub fn new(source: S) -> Self {
        SynonymMatcher { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run the greedy pass, returning the pairs and both leftovers.
    ///
    /// Each visited hypothesis word is expanded once; closures are not
    /// recomputed as entries are consumed. A failed expansion aborts the
    /// whole pass.
    pub fn match_words<H, R>(
        &self,
        hypothesis: Vec<EnumeratedWord<H>>,
        reference: Vec<EnumeratedWord<R>>,
    ) -> Result<StageOutcome<H, R>> {
        greedy_pass(hypothesis, reference, |word| {
            let closure = self.source.expand(word)?;
            debug!("hypothesis word {word:?} expands to {closure:?}");
            Ok(closure)
        })
    }

    /// Run the greedy pass, returning only the pairs in discovery order
    /// (last hypothesis position first).
    pub fn matches<H, R>(
        &self,
        hypothesis: Vec<EnumeratedWord<H>>,
        reference: Vec<EnumeratedWord<R>>,
    ) -> Result<Vec<WordMatch<H, R>>> {
        Ok(self.match_words(hypothesis, reference)?.matches)
    }
}
