//! WordNet `data.*` files.
//!
//! A synset line starts at the byte offset it is named by:
//! `offset lex_filenum ss_type w_cnt word lex_id [word lex_id...] p_cnt ... | gloss`
//! where `w_cnt` is two hexadecimal digits.

use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::error::{LexalignError, Result};
use crate::lexicon::{PartOfSpeech, Sense};

/// Strip the adjective syntactic marker, e.g. `galore(ip)` -> `galore`.
fn strip_marker(lemma: &str) -> &str {
    match lemma.find('(') {
        Some(open) if lemma.ends_with(')') && open > 0 => &lemma[..open],
        _ => lemma,
    }
}

/// Parse one synset line of a data file.
pub fn parse_synset_line(line: &str) -> Result<Sense> {
    let malformed = |what: &str| LexalignError::lexicon(format!("{what} in data line '{line}'"));
    let mut fields = line.split_ascii_whitespace();

    let offset: u64 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| malformed("bad synset offset"))?;
    let _lex_filenum = fields.next().ok_or_else(|| malformed("missing lexicographer file"))?;
    let pos = fields
        .next()
        .and_then(PartOfSpeech::from_symbol)
        .ok_or_else(|| malformed("unknown synset type"))?;
    let word_count = fields
        .next()
        .and_then(|f| usize::from_str_radix(f, 16).ok())
        .ok_or_else(|| malformed("bad word count"))?;

    let mut lemmas = Vec::with_capacity(word_count);
    for _ in 0..word_count {
        let word = fields.next().ok_or_else(|| malformed("missing word"))?;
        let _lex_id = fields.next().ok_or_else(|| malformed("missing lex id"))?;
        lemmas.push(strip_marker(word).to_string());
    }

    Ok(Sense::new(
        format!("{offset:08}-{}", pos.symbol()),
        Some(pos),
        lemmas,
    ))
}

/// Memory-mapped data file addressed by synset byte offset.
#[derive(Debug)]
pub struct DataFile {
    path: PathBuf,
    mmap: Mmap,
}

impl DataFile {
    /// Map a data file into memory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| {
            LexalignError::resource_unavailable(format!(
                "Failed to open WordNet data file '{}': {e}",
                path.display()
            ))
        })?;
        // The file is only read; WordNet dictionaries are not rewritten in place.
        let mmap = unsafe { Mmap::map(&file)? };

        Ok(DataFile { path, mmap })
    }

    /// Size of the mapped file in bytes.
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    /// Read the synset whose line starts at `offset`.
    pub fn synset_at(&self, offset: u64) -> Result<Sense> {
        let start = usize::try_from(offset)
            .ok()
            .filter(|&start| start < self.mmap.len())
            .ok_or_else(|| {
                LexalignError::lexicon(format!(
                    "offset {offset} beyond end of {}",
                    self.path.display()
                ))
            })?;

        let rest = &self.mmap[start..];
        let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
        let line = std::str::from_utf8(&rest[..end]).map_err(|e| {
            LexalignError::lexicon(format!(
                "invalid UTF-8 at offset {offset} in {}: {e}",
                self.path.display()
            ))
        })?;

        let sense = parse_synset_line(line)?;
        if !sense.id.starts_with(&format!("{offset:08}")) {
            return Err(LexalignError::lexicon(format!(
                "offset {offset} does not start a synset in {}",
                self.path.display()
            )));
        }
        Ok(sense)
    }
}
