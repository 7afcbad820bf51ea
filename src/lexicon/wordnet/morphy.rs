//! Morphological base forms for WordNet lookup.
//!
//! Inflected words are not indexed, so `dogs` has to be reduced to `dog`
//! before its synsets can be found. Irregular forms come from the `*.exc`
//! exception lists; regular ones from suffix detachment rules.

use ahash::AHashMap;

use crate::lexicon::PartOfSpeech;

/// Irregular inflections of one part of speech: inflected form -> bases.
pub type ExceptionMap = AHashMap<String, Vec<String>>;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJ_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn detachment_rules(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => ADJ_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

/// Parse an exception list: each line is `inflected base [base...]`.
pub fn parse_exceptions(content: &str) -> ExceptionMap {
    let mut exceptions = ExceptionMap::new();
    for line in content.lines() {
        let mut fields = line.split_ascii_whitespace();
        if let Some(inflected) = fields.next() {
            let bases: Vec<String> = fields.map(str::to_string).collect();
            if !bases.is_empty() {
                exceptions
                    .entry(inflected.to_string())
                    .or_default()
                    .extend(bases);
            }
        }
    }
    exceptions
}

fn apply_rules(forms: &[String], rules: &[(&str, &str)]) -> Vec<String> {
    forms
        .iter()
        .flat_map(|form| {
            rules.iter().filter_map(move |(old, new)| {
                form.strip_suffix(old).map(|stem| format!("{stem}{new}"))
            })
        })
        .collect()
}

fn keep_indexed<'a, I, F>(forms: I, is_indexed: &F) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
    F: Fn(&str) -> bool,
{
    let mut kept: Vec<String> = Vec::new();
    for form in forms {
        if is_indexed(form) && !kept.contains(form) {
            kept.push(form.clone());
        }
    }
    kept
}

/// Base forms of `word` that the index lists for `pos`, in lookup order.
///
/// `is_indexed` answers whether a candidate is indexed under `pos`. The word
/// itself is always a candidate. When no single detachment reaches an
/// indexed form, rules are reapplied to the previous outputs.
pub fn base_forms<F>(
    word: &str,
    pos: PartOfSpeech,
    exceptions: &ExceptionMap,
    is_indexed: F,
) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let word = word.to_string();

    if let Some(bases) = exceptions.get(&word) {
        return keep_indexed(std::iter::once(&word).chain(bases), &is_indexed);
    }

    let rules = detachment_rules(pos);
    let mut forms = apply_rules(std::slice::from_ref(&word), rules);
    let found = keep_indexed(std::iter::once(&word).chain(&forms), &is_indexed);
    if !found.is_empty() {
        return found;
    }

    while !forms.is_empty() {
        forms = apply_rules(&forms, rules);
        let found = keep_indexed(&forms, &is_indexed);
        if !found.is_empty() {
            return found;
        }
    }

    Vec::new()
}
