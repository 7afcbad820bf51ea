//! Staged alignment: exact, then stem, then synonym matching.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::align::expander::SynonymSource;
use crate::align::matcher::{SynonymMatcher, match_exact, match_stems};
use crate::align::{EnumeratedWord, StageOutcome, WordMatch, enumerate_words};
use crate::analysis::stem::{CasePreservingStemmer, Stemmer, StemmerKind};
use crate::error::{LexalignError, Result};

/// Configuration for the staged aligner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignerConfig {
    /// Lowercase both sides before matching. When off, every stage is
    /// case-sensitive, the stem stage included.
    pub lowercase: bool,
    /// Run the exact stage.
    pub exact: bool,
    /// Run the stem stage.
    pub stem: bool,
    /// Run the synonym stage.
    pub synonym: bool,
    /// Stemmer used by the stem stage.
    pub stemmer: StemmerKind,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            exact: true,
            stem: true,
            synonym: true,
            stemmer: StemmerKind::Porter,
        }
    }
}

impl AlignerConfig {
    /// Configuration running only the synonym stage, with no normalization.
    pub fn synonym_only() -> Self {
        Self {
            lowercase: false,
            exact: false,
            stem: false,
            synonym: true,
            stemmer: StemmerKind::Identity,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.exact || self.stem || self.synonym) {
            return Err(LexalignError::config(
                "at least one alignment stage must be enabled",
            ));
        }
        Ok(())
    }
}

/// Stage that produced a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStage {
    Exact,
    Stem,
    Synonym,
}

/// A matched pair of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedPair<H = usize, R = usize> {
    pub hypothesis: H,
    pub reference: R,
    pub stage: MatchStage,
}

/// Output of [`Aligner::align`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment<H = usize, R = usize> {
    /// Pairs sorted by hypothesis position.
    pub matches: Vec<AlignedPair<H, R>>,
    pub unmatched_hypothesis: Vec<EnumeratedWord<H>>,
    pub unmatched_reference: Vec<EnumeratedWord<R>>,
}

impl<H: Clone, R: Clone> Alignment<H, R> {
    /// Pairs without stage information.
    pub fn pairs(&self) -> Vec<WordMatch<H, R>> {
        self.matches
            .iter()
            .map(|m| WordMatch::new(m.hypothesis.clone(), m.reference.clone()))
            .collect()
    }
}

impl<H, R> Alignment<H, R> {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Aligns a hypothesis against a reference in up to three stages.
#[derive(Clone)]
pub struct Aligner {
    config: AlignerConfig,
    stemmer: Arc<dyn Stemmer>,
    synonyms: SynonymMatcher<Arc<dyn SynonymSource>>,
}

impl std::fmt::Debug for Aligner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aligner")
            .field("config", &self.config)
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl Aligner {
    pub fn new(config: AlignerConfig, synonyms: Arc<dyn SynonymSource>) -> Result<Self> {
        config.validate()?;
        Ok(Aligner {
            stemmer: config.stemmer.build(),
            config,
            synonyms: SynonymMatcher::new(synonyms),
        })
    }

    /// Replace the stemmer chosen by the configuration.
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    /// Align two word lists, indexing each word by its position.
    pub fn align<S: AsRef<str>>(&self, hypothesis: &[S], reference: &[S]) -> Result<Alignment> {
        self.align_enumerated(enumerate_words(hypothesis), enumerate_words(reference))
    }

    /// Align two enumerated word lists.
    ///
    /// Indices are carried through untouched. Unmatched entries are reported
    /// in the form the last enabled stage saw them (lowercased, stemmed).
    pub fn align_enumerated<H: Ord, R>(
        &self,
        hypothesis: Vec<EnumeratedWord<H>>,
        reference: Vec<EnumeratedWord<R>>,
    ) -> Result<Alignment<H, R>> {
        let (mut hypothesis, mut reference) = if self.config.lowercase {
            (lowercase(hypothesis), lowercase(reference))
        } else {
            (hypothesis, reference)
        };

        let mut matches = Vec::new();

        if self.config.exact {
            let outcome = match_exact(hypothesis, reference);
            (hypothesis, reference) = collect(outcome, MatchStage::Exact, &mut matches);
        }

        if self.config.stem {
            let outcome = if self.config.lowercase {
                match_stems(hypothesis, reference, self.stemmer.as_ref())
            } else {
                let stemmer = CasePreservingStemmer::new(Arc::clone(&self.stemmer));
                match_stems(hypothesis, reference, &stemmer)
            };
            (hypothesis, reference) = collect(outcome, MatchStage::Stem, &mut matches);
        }

        if self.config.synonym {
            let outcome = self.synonyms.match_words(hypothesis, reference)?;
            (hypothesis, reference) = collect(outcome, MatchStage::Synonym, &mut matches);
        }

        matches.sort_by(|a, b| a.hypothesis.cmp(&b.hypothesis));
        debug!(
            "aligned {} pairs, {} hypothesis and {} reference words unmatched",
            matches.len(),
            hypothesis.len(),
            reference.len()
        );

        Ok(Alignment {
            matches,
            unmatched_hypothesis: hypothesis,
            unmatched_reference: reference,
        })
    }
}

fn lowercase<I>(words: Vec<EnumeratedWord<I>>) -> Vec<EnumeratedWord<I>> {
    words
        .into_iter()
        .map(|w| EnumeratedWord::new(w.index, w.word.to_lowercase()))
        .collect()
}

type Leftovers<H, R> = (Vec<EnumeratedWord<H>>, Vec<EnumeratedWord<R>>);

fn collect<H, R>(
    outcome: StageOutcome<H, R>,
    stage: MatchStage,
    matches: &mut Vec<AlignedPair<H, R>>,
) -> Leftovers<H, R> {
    matches.extend(outcome.matches.into_iter().map(|m| AlignedPair {
        hypothesis: m.hypothesis,
        reference: m.reference,
        stage,
    }));
    (outcome.hypothesis, outcome.reference)
}
