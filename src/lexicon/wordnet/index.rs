//! WordNet `index.*` files.
//!
//! Each non-header line reads
//! `lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt offset...`
//! and lists the byte offsets, in the matching `data.*` file, of every synset
//! containing the lemma.

use std::collections::BTreeMap;
use std::sync::Arc;

use fst::{Map, MapBuilder};

use crate::error::{LexalignError, Result};
use crate::lexicon::PartOfSpeech;

/// Synset offsets of one lemma, split by part of speech.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LemmaEntry {
    offsets: [Vec<u64>; 4],
}

impl LemmaEntry {
    pub fn offsets(&self, pos: PartOfSpeech) -> &[u64] {
        &self.offsets[pos.slot()]
    }
}

/// One parsed index line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexLine {
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub offsets: Vec<u64>,
}

/// Parse a single `index.*` line.
pub fn parse_index_line(line: &str) -> Result<IndexLine> {
    let fields: Vec<&str> = line.split_ascii_whitespace().collect();
    let malformed = |what: &str| LexalignError::lexicon(format!("{what} in index line '{line}'"));

    if fields.len() < 6 {
        return Err(malformed("too few fields"));
    }

    let lemma = fields[0].to_string();
    let pos =
        PartOfSpeech::from_symbol(fields[1]).ok_or_else(|| malformed("unknown part of speech"))?;
    let synset_cnt: usize = fields[2]
        .parse()
        .map_err(|_| malformed("bad synset count"))?;
    let pointer_cnt: usize = fields[3]
        .parse()
        .map_err(|_| malformed("bad pointer count"))?;

    // pointer symbols, then sense_cnt and tagsense_cnt
    let start = pointer_cnt
        .checked_add(6)
        .ok_or_else(|| malformed("bad pointer count"))?;
    let end = start
        .checked_add(synset_cnt)
        .ok_or_else(|| malformed("bad synset count"))?;
    if fields.len() < end {
        return Err(malformed("missing synset offsets"));
    }

    let offsets = fields[start..end]
        .iter()
        .map(|field| field.parse::<u64>().map_err(|_| malformed("bad synset offset")))
        .collect::<Result<Vec<_>>>()?;

    Ok(IndexLine {
        lemma,
        pos,
        offsets,
    })
}

/// Lemma lookup over all four index files.
#[derive(Debug, Clone)]
pub struct LemmaIndex {
    /// FST map: lemma -> index into `entries`
    fst_map: Arc<Map<Vec<u8>>>,
    entries: Arc<Vec<LemmaEntry>>,
}

impl LemmaIndex {
    /// Build the index from the contents of `index.*` files, each paired
    /// with a label used in error messages.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut lemmas: BTreeMap<String, LemmaEntry> = BTreeMap::new();

        for (label, content) in sources {
            for (line_no, line) in content.lines().enumerate() {
                // license header lines start with two spaces
                if line.starts_with(' ') || line.trim().is_empty() {
                    continue;
                }
                let parsed = parse_index_line(line).map_err(|e| {
                    LexalignError::lexicon(format!("{label}:{}: {e}", line_no + 1))
                })?;
                lemmas.entry(parsed.lemma).or_default().offsets[parsed.pos.slot()]
                    .extend(parsed.offsets);
            }
        }

        let mut builder = MapBuilder::memory();
        let mut entries = Vec::with_capacity(lemmas.len());
        for (lemma, entry) in lemmas {
            builder
                .insert(lemma.as_bytes(), entries.len() as u64)
                .map_err(|e| LexalignError::lexicon(format!("FST build error: {e}")))?;
            entries.push(entry);
        }

        let fst_bytes = builder
            .into_inner()
            .map_err(|e| LexalignError::lexicon(format!("FST finalize error: {e}")))?;
        let fst_map = Map::new(fst_bytes)
            .map_err(|e| LexalignError::lexicon(format!("FST creation error: {e}")))?;

        Ok(Self {
            fst_map: Arc::new(fst_map),
            entries: Arc::new(entries),
        })
    }

    /// Entry for a lemma, if indexed under any part of speech.
    pub fn get(&self, lemma: &str) -> Option<&LemmaEntry> {
        let index = self.fst_map.get(lemma.as_bytes())?;
        self.entries.get(index as usize)
    }

    /// Synset offsets for `lemma` as `pos`; empty when not indexed.
    pub fn offsets(&self, lemma: &str, pos: PartOfSpeech) -> &[u64] {
        match self.get(lemma) {
            Some(entry) => entry.offsets(pos),
            None => &[],
        }
    }

    /// Whether `lemma` is indexed as `pos`.
    pub fn contains(&self, lemma: &str, pos: PartOfSpeech) -> bool {
        !self.offsets(lemma, pos).is_empty()
    }

    /// Number of distinct lemmas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_ADJ: &str = "  1 This software and database is being provided\n\
happy a 4 3 ! & + 4 4 01148283 01048406 01049462 02565583\n\
glad a 4 1 & 4 3 01148283 01049046 00832784 01366718\n";

    const INDEX_NOUN: &str = "dog n 7 5 @ ~ #m #p %p 7 1 02084071 10114209 10023039 09886220 07676602 03907626 02710044\n";

    #[test]
    fn test_parse_index_line() {
        let parsed = parse_index_line("happy a 4 3 ! & + 4 4 01148283 01048406 01049462 02565583")
            .unwrap();
        assert_eq!(parsed.lemma, "happy");
        assert_eq!(parsed.pos, PartOfSpeech::Adjective);
        assert_eq!(
            parsed.offsets,
            vec![1148283, 1048406, 1049462, 2565583]
        );
    }

    #[test]
    fn test_parse_index_line_errors() {
        assert!(parse_index_line("happy a 4").is_err());
        assert!(parse_index_line("happy x 1 0 1 0 01148283").is_err());
        assert!(parse_index_line("happy a 3 0 3 0 01148283").is_err());
        assert!(parse_index_line("happy a 1 0 1 0 notanumber").is_err());

        let huge = usize::MAX.to_string();
        let err = parse_index_line(&format!("happy a 1 {huge} 1 0 01148283")).unwrap_err();
        assert!(err.to_string().contains("bad pointer count"));
        let err = parse_index_line(&format!("happy a {huge} 1 & 1 0 01148283")).unwrap_err();
        assert!(err.to_string().contains("bad synset count"));
        let err = parse_index_line(&format!("happy a {} 0 1 0 01148283", usize::MAX - 6))
            .unwrap_err();
        assert!(err.to_string().contains("missing synset offsets"));
    }

    #[test]
    fn test_lemma_index_merges_sources() {
        let index =
            LemmaIndex::from_sources([("index.adj", INDEX_ADJ), ("index.noun", INDEX_NOUN)])
                .unwrap();

        assert_eq!(index.len(), 3);
        assert!(index.contains("happy", PartOfSpeech::Adjective));
        assert!(index.contains("happy", PartOfSpeech::AdjectiveSatellite));
        assert!(!index.contains("happy", PartOfSpeech::Noun));
        assert_eq!(index.offsets("dog", PartOfSpeech::Noun).len(), 7);
        assert!(index.offsets("cat", PartOfSpeech::Noun).is_empty());
    }

    #[test]
    fn test_lemma_index_reports_location() {
        let err = LemmaIndex::from_sources([("index.verb", "run v 2\n")]).unwrap_err();
        assert!(err.to_string().contains("index.verb:1"));
    }
}
