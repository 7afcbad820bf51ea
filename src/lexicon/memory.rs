//! In-memory lexicon built from synonym groups.
//!
//! Uses FST (Finite State Transducer) for memory-efficient storage and fast lookup.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use fst::{Map, MapBuilder};

use crate::error::{LexalignError, Result};
use crate::lexicon::{LexicalDatabase, Sense};

/// Lexicon where each synonym group forms one sense.
///
/// Word lookup is exact: no case folding, no morphology. Useful for small
/// custom vocabularies and as a stand-in for WordNet in tests.
#[derive(Debug, Clone)]
pub struct InMemoryLexicon {
    /// FST map: member word -> index into `memberships`
    fst_map: Arc<Map<Vec<u8>>>,
    /// Group ids each word belongs to, in insertion order
    memberships: Arc<Vec<Vec<usize>>>,
    groups: Arc<Vec<Vec<String>>>,
}

impl InMemoryLexicon {
    /// Build a lexicon from synonym groups. Empty groups are skipped.
    pub fn from_synonym_groups(synonym_groups: Vec<Vec<String>>) -> Result<Self> {
        let groups: Vec<Vec<String>> = synonym_groups
            .into_iter()
            .filter(|group| !group.is_empty())
            .collect();

        let mut word_to_groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (group_id, group) in groups.iter().enumerate() {
            for word in group {
                let ids = word_to_groups.entry(word.as_str()).or_default();
                if !ids.contains(&group_id) {
                    ids.push(group_id);
                }
            }
        }

        // BTreeMap iteration yields keys in the byte order the FST requires.
        let mut builder = MapBuilder::memory();
        let mut memberships = Vec::with_capacity(word_to_groups.len());
        for (word, ids) in word_to_groups {
            let index = memberships.len() as u64;
            memberships.push(ids);
            builder
                .insert(word.as_bytes(), index)
                .map_err(|e| LexalignError::lexicon(format!("FST build error: {e}")))?;
        }

        let fst_bytes = builder
            .into_inner()
            .map_err(|e| LexalignError::lexicon(format!("FST finalize error: {e}")))?;
        let fst_map = Map::new(fst_bytes)
            .map_err(|e| LexalignError::lexicon(format!("FST creation error: {e}")))?;

        Ok(Self {
            fst_map: Arc::new(fst_map),
            memberships: Arc::new(memberships),
            groups: Arc::new(groups),
        })
    }

    /// Load a lexicon from a JSON file.
    ///
    /// The JSON file should contain an array of synonym groups:
    /// ```json
    /// [
    ///   ["big", "large", "great"],
    ///   ["happy", "glad", "felicitous"]
    /// ]
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LexalignError::resource_unavailable(format!(
                "Failed to read synonym file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let synonym_groups: Vec<Vec<String>> = serde_json::from_str(&content).map_err(|e| {
            LexalignError::lexicon(format!(
                "Failed to parse synonym JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        let lexicon = Self::from_synonym_groups(synonym_groups)?;
        log::info!(
            "loaded {} synonym groups ({} words) from {}",
            lexicon.group_count(),
            lexicon.word_count(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Number of non-empty groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of distinct words across all groups.
    pub fn word_count(&self) -> usize {
        self.fst_map.len()
    }
}

impl LexicalDatabase for InMemoryLexicon {
    fn senses(&self, word: &str) -> Result<Vec<Sense>> {
        let Some(index) = self.fst_map.get(word.as_bytes()) else {
            return Ok(Vec::new());
        };

        let senses = self.memberships[index as usize]
            .iter()
            .map(|&group_id| {
                Sense::new(
                    format!("group-{group_id}"),
                    None,
                    self.groups[group_id].clone(),
                )
            })
            .collect();
        Ok(senses)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|group| group.iter().map(|w| w.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_in_memory_lexicon_basic() {
        let lexicon = InMemoryLexicon::from_synonym_groups(groups(&[
            &["big", "large", "huge"],
            &["large", "bulky"],
        ]))
        .unwrap();

        assert_eq!(lexicon.group_count(), 2);
        assert_eq!(lexicon.word_count(), 4);

        let senses = lexicon.senses("large").unwrap();
        assert_eq!(senses.len(), 2);
        assert_eq!(senses[0].id, "group-0");
        assert_eq!(senses[0].lemmas, vec!["big", "large", "huge"]);
        assert_eq!(senses[1].lemmas, vec!["large", "bulky"]);

        assert_eq!(lexicon.senses("huge").unwrap().len(), 1);
    }

    #[test]
    fn test_in_memory_lexicon_unknown_and_case() {
        let lexicon =
            InMemoryLexicon::from_synonym_groups(groups(&[&["Paris", "capital"], &[]])).unwrap();

        assert_eq!(lexicon.group_count(), 1);
        assert!(lexicon.senses("paris").unwrap().is_empty());
        assert!(lexicon.senses("").unwrap().is_empty());
        assert_eq!(lexicon.senses("Paris").unwrap().len(), 1);
    }

    #[test]
    fn test_in_memory_lexicon_duplicate_member() {
        let lexicon =
            InMemoryLexicon::from_synonym_groups(groups(&[&["run", "run", "sprint"]])).unwrap();
        assert_eq!(lexicon.senses("run").unwrap().len(), 1);
    }

    #[test]
    fn test_in_memory_lexicon_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synonyms.json");
        std::fs::write(&path, r#"[["happy", "glad"], ["ml", "machine learning"]]"#).unwrap();

        let lexicon = InMemoryLexicon::load_from_file(&path).unwrap();
        assert_eq!(lexicon.group_count(), 2);
        assert_eq!(lexicon.senses("glad").unwrap()[0].lemmas, vec!["happy", "glad"]);
    }

    #[test]
    fn test_in_memory_lexicon_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let err = InMemoryLexicon::load_from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(err.is_unavailable());

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = InMemoryLexicon::load_from_file(&path).unwrap_err();
        assert!(matches!(err, LexalignError::Lexicon(_)));
    }
}
