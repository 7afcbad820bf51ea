//! Shared state handed to every request handler.

use std::sync::Arc;

use log::debug;

use crate::align::{Aligner, CachedExpander, SynonymExpander, SynonymSource};
use crate::analysis::stem::Stemmer;
use crate::config::{CacheConfig, LexalignConfig};
use crate::error::Result;
use crate::lexicon::{LexicalDatabase, LexiconSlot};

/// Handler state. Cloning is cheap; everything sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub lexicon: Arc<LexiconSlot>,
    pub synonyms: Arc<dyn SynonymSource>,
    pub stemmer: Arc<dyn Stemmer>,
    pub aligner: Arc<Aligner>,
}

impl AppState {
    /// Build the state around a lexicon slot that may still be empty.
    pub fn new(config: &LexalignConfig, lexicon: Arc<LexiconSlot>) -> Result<Self> {
        let database: Arc<dyn LexicalDatabase> = lexicon.clone();
        let synonyms = synonym_source(database, &config.cache);
        let aligner = Aligner::new(config.aligner.clone(), synonyms.clone())?;

        Ok(AppState {
            lexicon,
            synonyms,
            stemmer: config.aligner.stemmer.build(),
            aligner: Arc::new(aligner),
        })
    }
}

/// Expander over `database`, memoized when the cache is enabled.
pub fn synonym_source(
    database: Arc<dyn LexicalDatabase>,
    cache: &CacheConfig,
) -> Arc<dyn SynonymSource> {
    let expander = SynonymExpander::new(database);
    if !cache.enabled {
        return Arc::new(expander);
    }
    debug!("synonym cache enabled, max entries {:?}", cache.max_entries);
    match cache.max_entries {
        Some(max) => Arc::new(CachedExpander::with_max_entries(expander, max)),
        None => Arc::new(CachedExpander::new(expander)),
    }
}
