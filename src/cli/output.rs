//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::align::{Alignment, MatchStage, SynonymSet};
use crate::cli::args::{LexalignArgs, OutputFormat};
use crate::error::Result;

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

/// Result of `synsets`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynsetsResult {
    pub word: String,
    pub synonyms: SynonymSet,
}

impl HumanOutput for SynsetsResult {
    fn render_human(&self) -> String {
        let words: Vec<&str> = self.synonyms.iter().map(String::as_str).collect();
        format!("{}: {}", self.word, words.join(", "))
    }
}

/// Result of `stem`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemResult {
    pub word: String,
    pub stem: String,
    pub stemmer: String,
}

impl HumanOutput for StemResult {
    fn render_human(&self) -> String {
        format!("{} -> {}", self.word, self.stem)
    }
}

/// Result of `align`, carrying the input words for display.
#[derive(Debug, Serialize, Deserialize)]
pub struct AlignmentReport {
    pub hypothesis: Vec<String>,
    pub reference: Vec<String>,
    pub alignment: Alignment,
}

impl HumanOutput for AlignmentReport {
    fn render_human(&self) -> String {
        let mut lines = vec!["Alignment:".to_string(), "══════════".to_string()];

        if self.alignment.is_empty() {
            lines.push("(no matches)".to_string());
        }
        for pair in &self.alignment.matches {
            let stage = match pair.stage {
                MatchStage::Exact => "exact",
                MatchStage::Stem => "stem",
                MatchStage::Synonym => "synonym",
            };
            lines.push(format!(
                "{:>3} {:<16} {:>3} {:<16} {stage}",
                pair.hypothesis,
                word_at(&self.hypothesis, pair.hypothesis),
                pair.reference,
                word_at(&self.reference, pair.reference),
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "Matched {} of {} hypothesis and {} reference words",
            self.alignment.len(),
            self.hypothesis.len(),
            self.reference.len()
        ));
        lines.join("\n")
    }
}

fn word_at(words: &[String], index: usize) -> &str {
    words.get(index).map(String::as_str).unwrap_or("?")
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &LexalignArgs) -> Result<()> {
    println!("{}", format_result(result, args)?);
    Ok(())
}

/// Format a result in the specified format.
pub fn format_result<T: Serialize + HumanOutput>(
    result: &T,
    args: &LexalignArgs,
) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(result.render_human()),
        OutputFormat::Json if args.pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}
