//! # lexalign
//!
//! Greedy one-to-one alignment of hypothesis words against reference words,
//! in the style of METEOR's matching phase.
//!
//! ## Features
//!
//! - Synonym closures from WordNet or an in-memory synonym lexicon
//! - Porter (1980) stemming
//! - Staged alignment: exact, stem, synonym
//! - Memoized expansion shared across threads
//! - HTTP facade built on axum

pub mod align;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod server;

pub mod prelude {
    pub use crate::align::{
        Aligner, AlignerConfig, Alignment, EnumeratedWord, SynonymExpander, SynonymMatcher,
        SynonymSet, SynonymSource, WordMatch,
    };
    pub use crate::analysis::stem::{PorterStemmer, Stemmer};
    pub use crate::error::{LexalignError, Result};
    pub use crate::lexicon::{InMemoryLexicon, LexicalDatabase, LexiconSlot, WordNetDatabase};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
