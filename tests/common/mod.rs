//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

const LICENSE_HEADER: &str = "  1 This software and database is being provided to you, the LICENSEE, by\n  2 Princeton University under the following license.\n";

/// One synset to write into a fixture: file part of speech (`n v a r`),
/// synset type as written in the data line, and its words.
pub struct FixtureSynset {
    pub pos: char,
    pub ss_type: char,
    pub words: Vec<&'static str>,
}

pub fn synset(pos: char, words: &[&'static str]) -> FixtureSynset {
    FixtureSynset {
        pos,
        ss_type: pos,
        words: words.to_vec(),
    }
}

pub fn satellite(words: &[&'static str]) -> FixtureSynset {
    FixtureSynset {
        pos: 'a',
        ss_type: 's',
        words: words.to_vec(),
    }
}

fn file_stem(pos: char) -> &'static str {
    match pos {
        'n' => "noun",
        'v' => "verb",
        'a' => "adj",
        _ => "adv",
    }
}

fn index_key(word: &str) -> String {
    let word = match word.find('(') {
        Some(open) if word.ends_with(')') => &word[..open],
        _ => word,
    };
    word.to_lowercase()
}

/// Write a miniature WordNet `dict/` directory with correct byte offsets.
pub fn write_wordnet(dir: &Path, synsets: &[FixtureSynset], exceptions: &[(&str, &str)]) {
    for pos in ['n', 'v', 'a', 'r'] {
        let mut data = String::from(LICENSE_HEADER);
        let mut index: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for s in synsets.iter().filter(|s| s.pos == pos) {
            let offset = data.len();
            let words: Vec<String> = s.words.iter().map(|w| format!("{w} 0")).collect();
            data.push_str(&format!(
                "{offset:08} 00 {} {:02x} {} 000 | fixture gloss\n",
                s.ss_type,
                s.words.len(),
                words.join(" ")
            ));
            for word in &s.words {
                index.entry(index_key(word)).or_default().push(offset);
            }
        }

        let mut index_file = String::from(LICENSE_HEADER);
        for (lemma, offsets) in index {
            let offsets: Vec<String> = offsets.iter().map(|o| format!("{o:08}")).collect();
            index_file.push_str(&format!(
                "{lemma} {pos} {} 0 {} 0 {}\n",
                offsets.len(),
                offsets.len(),
                offsets.join(" ")
            ));
        }

        let stem = file_stem(pos);
        fs::write(dir.join(format!("data.{stem}")), data).unwrap();
        fs::write(dir.join(format!("index.{stem}")), index_file).unwrap();
    }

    for (stem, content) in exceptions {
        fs::write(dir.join(format!("{stem}.exc")), content).unwrap();
    }
}

/// A small dictionary covering the words used across the tests.
pub fn sample_wordnet() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_wordnet(
        dir.path(),
        &[
            synset('n', &["dog", "domestic_dog", "Canis_familiaris"]),
            synset('n', &["cat", "true_cat"]),
            synset('n', &["car", "auto", "automobile", "machine", "motorcar"]),
            synset('v', &["run"]),
            synset('v', &["run", "go", "operate"]),
            synset('v', &["sleep", "kip", "slumber"]),
            synset('a', &["big(a)", "large"]),
            synset('a', &["happy"]),
            satellite(&["glad", "happy(p)", "felicitous"]),
            synset('r', &["quickly", "rapidly", "speedily"]),
        ],
        &[("noun", "mice mouse\n"), ("verb", "ran run\nslept sleep\n")],
    );
    dir
}
