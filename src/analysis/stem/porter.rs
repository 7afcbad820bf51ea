//! Porter stemming algorithm implementation.
//!
//! This module provides an implementation of the Porter (1980) stemming
//! algorithm, the suffix stripper used to normalize words before the stem
//! stage of the aligner.
//!
//! # Algorithm
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals, -ed/-ing suffixes and terminal y
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! # Examples
//!
//! ```
//! use lexalign::analysis::stem::Stemmer;
//! use lexalign::analysis::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::stem::Stemmer;

/// Step 2 rewrites, applied when the remaining stem has measure > 0.
const STEP2_SUFFIXES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

/// Step 3 rewrites, applied when the remaining stem has measure > 0.
const STEP3_SUFFIXES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Step 4 deletions, applied when the remaining stem has measure > 1.
/// Longer suffixes precede the shorter ones they end with.
const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
///
/// Operates on lowercase ASCII. Words containing other characters are
/// lowercased and returned without suffix stripping.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the letter at `pos` is a consonant.
    ///
    /// `y` is a consonant at the start of a word or after a vowel.
    fn is_consonant(word: &[u8], pos: usize) -> bool {
        match word[pos] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => pos == 0 || !Self::is_consonant(word, pos - 1),
            _ => true,
        }
    }

    /// Calculate the measure of a word (number of VC sequences).
    fn measure(word: &[u8]) -> usize {
        let n = word.len();
        let mut i = 0;

        // Skip initial consonants
        while i < n && Self::is_consonant(word, i) {
            i += 1;
        }

        let mut m = 0;
        loop {
            while i < n && !Self::is_consonant(word, i) {
                i += 1;
            }
            if i >= n {
                break;
            }
            while i < n && Self::is_consonant(word, i) {
                i += 1;
            }
            m += 1;
        }

        m
    }

    /// Check if word contains a vowel.
    fn contains_vowel(word: &[u8]) -> bool {
        (0..word.len()).any(|i| !Self::is_consonant(word, i))
    }

    /// Check if word ends with double consonant.
    fn ends_with_double_consonant(word: &[u8]) -> bool {
        let n = word.len();
        n >= 2 && word[n - 1] == word[n - 2] && Self::is_consonant(word, n - 1)
    }

    /// Check if word ends with consonant-vowel-consonant, the last consonant
    /// not being w, x or y.
    fn ends_cvc(word: &[u8]) -> bool {
        let n = word.len();
        n >= 3
            && Self::is_consonant(word, n - 3)
            && !Self::is_consonant(word, n - 2)
            && Self::is_consonant(word, n - 1)
            && !matches!(word[n - 1], b'w' | b'x' | b'y')
    }

    /// Rewrite the first matching suffix if the stem in front of it has
    /// measure above `min_measure`. Only the first matching rule is tried.
    fn replace_suffix(word: &mut Vec<u8>, rules: &[(&str, &str)], min_measure: usize) {
        if let Some((old, new)) = rules
            .iter()
            .find(|(old, _)| word.ends_with(old.as_bytes()))
        {
            let stem_len = word.len() - old.len();
            if Self::measure(&word[..stem_len]) > min_measure {
                word.truncate(stem_len);
                word.extend_from_slice(new.as_bytes());
            }
        }
    }

    /// Step 1a: plurals.
    fn step1a(word: &mut Vec<u8>) {
        let n = word.len();
        if word.ends_with(b"sses") || word.ends_with(b"ies") {
            word.truncate(n - 2);
        } else if word.ends_with(b"ss") {
            // unchanged
        } else if word.ends_with(b"s") {
            word.truncate(n - 1);
        }
    }

    /// Step 1b: -eed, -ed, -ing.
    fn step1b(word: &mut Vec<u8>) {
        let n = word.len();
        if word.ends_with(b"eed") {
            if Self::measure(&word[..n - 3]) > 0 {
                word.truncate(n - 1);
            }
            return;
        }

        let stripped = if word.ends_with(b"ed") && Self::contains_vowel(&word[..n - 2]) {
            word.truncate(n - 2);
            true
        } else if word.ends_with(b"ing") && Self::contains_vowel(&word[..n - 3]) {
            word.truncate(n - 3);
            true
        } else {
            false
        };

        if !stripped {
            return;
        }

        if word.ends_with(b"at") || word.ends_with(b"bl") || word.ends_with(b"iz") {
            word.push(b'e');
        } else if Self::ends_with_double_consonant(word)
            && !matches!(word.last(), Some(b'l') | Some(b's') | Some(b'z'))
        {
            word.pop();
        } else if Self::measure(word) == 1 && Self::ends_cvc(word) {
            word.push(b'e');
        }
    }

    /// Step 1c: terminal y after a vowel becomes i.
    fn step1c(word: &mut [u8]) {
        let n = word.len();
        if word.ends_with(b"y") && Self::contains_vowel(&word[..n - 1]) {
            word[n - 1] = b'i';
        }
    }

    fn step2(word: &mut Vec<u8>) {
        Self::replace_suffix(word, STEP2_SUFFIXES, 0);
    }

    fn step3(word: &mut Vec<u8>) {
        Self::replace_suffix(word, STEP3_SUFFIXES, 0);
    }

    /// Step 4: drop residual suffixes from long stems.
    fn step4(word: &mut Vec<u8>) {
        let matched = STEP4_SUFFIXES.iter().find(|suffix| {
            if !word.ends_with(suffix.as_bytes()) {
                return false;
            }
            // -ion only counts after s or t
            **suffix != "ion"
                || matches!(
                    word.len().checked_sub(4).map(|i| word[i]),
                    Some(b's') | Some(b't')
                )
        });

        if let Some(suffix) = matched {
            let stem_len = word.len() - suffix.len();
            if Self::measure(&word[..stem_len]) > 1 {
                word.truncate(stem_len);
            }
        }
    }

    /// Step 5: final -e and -ll.
    fn step5(word: &mut Vec<u8>) {
        if word.ends_with(b"e") {
            let stem = &word[..word.len() - 1];
            let m = Self::measure(stem);
            if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                word.pop();
            }
        }

        if word.ends_with(b"ll") && Self::measure(word) > 1 {
            word.pop();
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let mut bytes = word.into_bytes();
        Self::step1a(&mut bytes);
        Self::step1b(&mut bytes);
        Self::step1c(&mut bytes);
        Self::step2(&mut bytes);
        Self::step3(&mut bytes);
        Self::step4(&mut bytes);
        Self::step5(&mut bytes);

        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
