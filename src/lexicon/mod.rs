//! Lexical knowledge bases.
//!
//! A [`LexicalDatabase`] maps a word to its senses and each sense to the
//! lemma names attached to it. The database is loaded once and then only
//! read, so implementations are shared behind `Arc` across threads.

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::error::{LexalignError, Result};

pub mod memory;
pub mod wordnet;

pub use memory::InMemoryLexicon;
pub use wordnet::WordNetDatabase;

/// Read-only sense lookup keyed by word.
pub trait LexicalDatabase: Send + Sync {
    /// All senses of `word`. An unknown word has no senses.
    fn senses(&self, word: &str) -> Result<Vec<Sense>>;

    /// Get the name of this database.
    fn name(&self) -> &'static str;
}

impl<T: LexicalDatabase + ?Sized> LexicalDatabase for Arc<T> {
    fn senses(&self, word: &str) -> Result<Vec<Sense>> {
        (**self).senses(word)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// WordNet syntactic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    AdjectiveSatellite,
    Adverb,
}

impl PartOfSpeech {
    /// Order in which senses are collected for a word.
    pub const LOOKUP_ORDER: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Parse the single-letter code used in WordNet files.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "a" => Some(PartOfSpeech::Adjective),
            "s" => Some(PartOfSpeech::AdjectiveSatellite),
            "r" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::AdjectiveSatellite => 's',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Suffix of the `index.*`, `data.*` and `*.exc` files holding this
    /// category. Satellites live with the adjectives.
    pub fn file_stem(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    /// Slot of this category among [`Self::LOOKUP_ORDER`].
    pub(crate) fn slot(self) -> usize {
        match self {
            PartOfSpeech::Noun => 0,
            PartOfSpeech::Verb => 1,
            PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => 2,
            PartOfSpeech::Adverb => 3,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One sense (synset) of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    /// Stable identifier, e.g. `01148283-a` for WordNet.
    pub id: String,
    /// Category, when the database records one.
    pub pos: Option<PartOfSpeech>,
    /// Lemma names attached to the sense. Multi-word lemmas keep their
    /// separators (`ice_cream`).
    pub lemmas: Vec<String>,
}

impl Sense {
    pub fn new<S: Into<String>>(id: S, pos: Option<PartOfSpeech>, lemmas: Vec<String>) -> Self {
        Sense {
            id: id.into(),
            pos,
            lemmas,
        }
    }
}

/// Lexical database installed once after construction.
///
/// Lookups fail with [`LexalignError::ResourceUnavailable`] until
/// [`LexiconSlot::install`] has run, so a server can start answering
/// requests while the database is still loading.
#[derive(Default)]
pub struct LexiconSlot {
    inner: OnceLock<Arc<dyn LexicalDatabase>>,
}

impl LexiconSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that is already initialized.
    pub fn ready(database: Arc<dyn LexicalDatabase>) -> Self {
        let slot = Self::new();
        let _ = slot.inner.set(database);
        slot
    }

    /// Install the database. Only the first call succeeds.
    pub fn install(&self, database: Arc<dyn LexicalDatabase>) -> Result<()> {
        let name = database.name();
        self.inner.set(database).map_err(|_| {
            LexalignError::config(format!(
                "lexical database already installed, refusing '{name}'"
            ))
        })
    }

    /// Whether a database has been installed.
    pub fn is_ready(&self) -> bool {
        self.inner.get().is_some()
    }
}

impl fmt::Debug for LexiconSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconSlot")
            .field("database", &self.inner.get().map(|db| db.name()))
            .finish()
    }
}

impl LexicalDatabase for LexiconSlot {
    fn senses(&self, word: &str) -> Result<Vec<Sense>> {
        match self.inner.get() {
            Some(database) => database.senses(word),
            None => Err(LexalignError::resource_unavailable(
                "lexical database has not been loaded",
            )),
        }
    }

    fn name(&self) -> &'static str {
        self.inner.get().map_or("unloaded", |db| db.name())
    }
}
