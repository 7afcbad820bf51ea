//! Synonym closure of a single word.

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lexicon::LexicalDatabase;

/// A word together with its single-token synonyms.
///
/// Never empty: the expanded word is always a member. Membership is exact
/// string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymSet(BTreeSet<String>);

impl SynonymSet {
    /// The closure of a word without synonyms.
    pub fn singleton<S: Into<String>>(word: S) -> Self {
        SynonymSet(BTreeSet::from([word.into()]))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }

    /// Members in ascending order.
    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

impl IntoIterator for SynonymSet {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SynonymSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Anything that can produce the synonym closure of a word.
pub trait SynonymSource: Send + Sync {
    fn expand(&self, word: &str) -> Result<SynonymSet>;
}

impl<T: SynonymSource + ?Sized> SynonymSource for Arc<T> {
    fn expand(&self, word: &str) -> Result<SynonymSet> {
        (**self).expand(word)
    }
}

/// Whether a lemma is a single token. WordNet joins the words of a
/// collocation with `_`.
pub fn is_single_token(lemma: &str) -> bool {
    !lemma.chars().any(|c| c == '_' || c.is_whitespace())
}

/// Expands words through a lexical database.
#[derive(Clone)]
pub struct SynonymExpander {
    lexicon: Arc<dyn LexicalDatabase>,
}

impl std::fmt::Debug for SynonymExpander {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynonymExpander")
            .field("lexicon", &self.lexicon.name())
            .finish()
    }
}

impl SynonymExpander {
    pub fn new(lexicon: Arc<dyn LexicalDatabase>) -> Self {
        SynonymExpander { lexicon }
    }

    pub fn lexicon(&self) -> &Arc<dyn LexicalDatabase> {
        &self.lexicon
    }
}

impl SynonymSource for SynonymExpander {
    /// The word plus every single-token lemma of every sense of the word.
    fn expand(&self, word: &str) -> Result<SynonymSet> {
        let mut closure = BTreeSet::new();
        for sense in self.lexicon.senses(word)? {
            closure.extend(sense.lemmas.into_iter().filter(|l| is_single_token(l)));
        }
        closure.insert(word.to_string());
        Ok(SynonymSet(closure))
    }
}
