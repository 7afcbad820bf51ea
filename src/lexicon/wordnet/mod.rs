//! WordNet dictionary reader.
//!
//! Reads a standard WordNet 3.x `dict/` directory:
//!
//! - `index.noun`, `index.verb`, `index.adj`, `index.adv` (required)
//! - `data.noun`, `data.verb`, `data.adj`, `data.adv` (required)
//! - `noun.exc`, `verb.exc`, `adj.exc`, `adv.exc` (optional)
//!
//! Index files are loaded into an FST; data files are memory-mapped and
//! parsed lazily, one synset line per lookup.

pub mod data;
pub mod index;
pub mod morphy;

use std::fs;
use std::path::{Path, PathBuf};

use ahash::AHashSet;
use log::{debug, info};

use crate::error::{LexalignError, Result};
use crate::lexicon::{LexicalDatabase, PartOfSpeech, Sense};

pub use data::DataFile;
pub use index::LemmaIndex;
pub use morphy::ExceptionMap;

/// WordNet database backed by dictionary files on disk.
#[derive(Debug)]
pub struct WordNetDatabase {
    dir: PathBuf,
    index: LemmaIndex,
    /// Data files in [`PartOfSpeech::LOOKUP_ORDER`] order
    data: Vec<DataFile>,
    /// Exception lists in [`PartOfSpeech::LOOKUP_ORDER`] order
    exceptions: Vec<ExceptionMap>,
}

fn read_required(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        LexalignError::resource_unavailable(format!(
            "Failed to read WordNet file '{}': {e}",
            path.display()
        ))
    })
}

impl WordNetDatabase {
    /// Open the dictionary directory.
    ///
    /// Fails with `ResourceUnavailable` when the directory or one of the
    /// index/data files is missing.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.is_dir() {
            return Err(LexalignError::resource_unavailable(format!(
                "WordNet directory '{}' not found",
                dir.display()
            )));
        }

        let mut index_sources = Vec::with_capacity(4);
        let mut data = Vec::with_capacity(4);
        let mut exceptions = Vec::with_capacity(4);

        for pos in PartOfSpeech::LOOKUP_ORDER {
            let stem = pos.file_stem();

            let index_name = format!("index.{stem}");
            let content = read_required(&dir.join(&index_name))?;
            index_sources.push((index_name, content));

            data.push(DataFile::open(dir.join(format!("data.{stem}")))?);

            let exc_path = dir.join(format!("{stem}.exc"));
            let exc = if exc_path.is_file() {
                morphy::parse_exceptions(&fs::read_to_string(&exc_path)?)
            } else {
                debug!("no exception list at {}", exc_path.display());
                ExceptionMap::new()
            };
            exceptions.push(exc);
        }

        let index = LemmaIndex::from_sources(
            index_sources
                .iter()
                .map(|(name, content)| (name.as_str(), content.as_str())),
        )?;

        info!(
            "loaded WordNet from {}: {} lemmas, {} exception entries",
            dir.display(),
            index.len(),
            exceptions.iter().map(|e| e.len()).sum::<usize>()
        );

        Ok(WordNetDatabase {
            dir,
            index,
            data,
            exceptions,
        })
    }

    /// Directory the database was loaded from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of indexed lemmas.
    pub fn lemma_count(&self) -> usize {
        self.index.len()
    }

    /// Indexed base forms of `word` for one part of speech.
    pub fn base_forms(&self, word: &str, pos: PartOfSpeech) -> Vec<String> {
        morphy::base_forms(word, pos, &self.exceptions[pos.slot()], |form| {
            self.index.contains(form, pos)
        })
    }

    /// Senses of `word` restricted to one part of speech.
    pub fn senses_for(&self, word: &str, pos: PartOfSpeech) -> Result<Vec<Sense>> {
        let mut seen = AHashSet::new();
        self.collect_senses(&normalize(word), pos, &mut seen)
    }

    fn collect_senses(
        &self,
        lemma: &str,
        pos: PartOfSpeech,
        seen: &mut AHashSet<(usize, u64)>,
    ) -> Result<Vec<Sense>> {
        let slot = pos.slot();
        let mut senses = Vec::new();
        for form in self.base_forms(lemma, pos) {
            for &offset in self.index.offsets(&form, pos) {
                if seen.insert((slot, offset)) {
                    senses.push(self.data[slot].synset_at(offset)?);
                }
            }
        }
        Ok(senses)
    }
}

/// Index keys are lowercase with `_` joining the words of a collocation.
fn normalize(word: &str) -> String {
    word.to_lowercase().replace(' ', "_")
}

impl LexicalDatabase for WordNetDatabase {
    fn senses(&self, word: &str) -> Result<Vec<Sense>> {
        let lemma = normalize(word);
        let mut seen = AHashSet::new();
        let mut senses = Vec::new();
        for pos in PartOfSpeech::LOOKUP_ORDER {
            senses.extend(self.collect_senses(&lemma, pos, &mut seen)?);
        }
        Ok(senses)
    }

    fn name(&self) -> &'static str {
        "wordnet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Ice Cream"), "ice_cream");
        assert_eq!(normalize("dog"), "dog");
    }

    #[test]
    fn test_open_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordNetDatabase::open(dir.path().join("dict")).unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_open_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.noun"), "").unwrap();
        let err = WordNetDatabase::open(dir.path()).unwrap_err();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("data.noun"));
    }
}
