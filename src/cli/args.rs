//! Command line argument parsing for the lexalign CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::stem::StemmerKind;
use crate::config::LexalignConfig;

/// lexalign - greedy synonym alignment over WordNet
#[derive(Parser, Debug, Clone)]
#[command(name = "lexalign")]
#[command(about = "Greedy synonym alignment between hypothesis and reference words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexalignArgs {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(long, env = "LEXALIGN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexalignArgs {
    /// Get the effective verbosity level (0 quiet, 1 default, 2 info, 3+ debug)
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Print the synonym closure of a word
    Synsets(SynsetsArgs),

    /// Print the stem of a word
    Stem(StemArgs),

    /// Align a hypothesis sentence against a reference sentence
    Align(AlignArgs),
}

/// Where to read the lexical database from.
#[derive(Args, Debug, Clone, Default)]
pub struct LexiconArgs {
    /// WordNet dict directory
    #[arg(long, env = "WORDNET_DIR", value_name = "DIR")]
    pub wordnet_dir: Option<PathBuf>,

    /// JSON file of synonym groups, used instead of WordNet
    #[arg(long = "synonyms", value_name = "FILE")]
    pub synonyms_file: Option<PathBuf>,
}

impl LexiconArgs {
    /// Override the configured lexicon source with the flags that were given.
    pub fn apply(&self, config: &mut LexalignConfig) {
        if let Some(dir) = &self.wordnet_dir {
            config.lexicon.wordnet_dir = Some(dir.clone());
        }
        if let Some(file) = &self.synonyms_file {
            config.lexicon.synonyms_file = Some(file.clone());
        }
    }
}

/// Arguments for the server
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "LEXALIGN_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "LEXALIGN_PORT")]
    pub port: Option<u16>,

    /// Disable the synonym closure cache
    #[arg(long)]
    pub no_cache: bool,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

impl ServeArgs {
    pub fn apply(&self, config: &mut LexalignConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.no_cache {
            config.cache.enabled = false;
        }
        self.lexicon.apply(config);
    }
}

/// Arguments for synonym lookup
#[derive(Parser, Debug, Clone)]
pub struct SynsetsArgs {
    /// Word to expand
    #[arg(value_name = "WORD")]
    pub word: String,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

/// Arguments for stemming
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Word to stem
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Stemming algorithm (defaults to the configured one)
    #[arg(short, long)]
    pub stemmer: Option<StemmerKind>,
}

/// Arguments for alignment
#[derive(Parser, Debug, Clone)]
pub struct AlignArgs {
    /// Hypothesis sentence, split on whitespace
    #[arg(long, value_name = "TEXT")]
    pub hypothesis: String,

    /// Reference sentence, split on whitespace
    #[arg(long, value_name = "TEXT")]
    pub reference: String,

    /// Skip the exact stage
    #[arg(long)]
    pub no_exact: bool,

    /// Skip the stem stage
    #[arg(long)]
    pub no_stem: bool,

    /// Skip the synonym stage
    #[arg(long)]
    pub no_synonym: bool,

    /// Match case-sensitively
    #[arg(long)]
    pub keep_case: bool,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

impl AlignArgs {
    pub fn apply(&self, config: &mut LexalignConfig) {
        let aligner = &mut config.aligner;
        aligner.exact &= !self.no_exact;
        aligner.stem &= !self.no_stem;
        aligner.synonym &= !self.no_synonym;
        aligner.lowercase &= !self.keep_case;
        self.lexicon.apply(config);
    }

    pub fn hypothesis_words(&self) -> Vec<&str> {
        self.hypothesis.split_whitespace().collect()
    }

    pub fn reference_words(&self) -> Vec<&str> {
        self.reference.split_whitespace().collect()
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_synsets_command() {
        let args = LexalignArgs::try_parse_from([
            "lexalign",
            "synsets",
            "happy",
            "--wordnet-dir",
            "/usr/share/wordnet/dict",
        ])
        .unwrap();

        if let Command::Synsets(synsets_args) = args.command {
            assert_eq!(synsets_args.word, "happy");
            assert_eq!(
                synsets_args.lexicon.wordnet_dir,
                Some(PathBuf::from("/usr/share/wordnet/dict"))
            );
        } else {
            panic!("Expected Synsets command");
        }
    }

    #[test]
    fn test_align_command() {
        let args = LexalignArgs::try_parse_from([
            "lexalign",
            "align",
            "--hypothesis",
            "the cat  sat",
            "--reference",
            "a cat sits",
            "--synonyms",
            "groups.json",
            "--no-stem",
        ])
        .unwrap();

        if let Command::Align(align_args) = &args.command {
            assert_eq!(align_args.hypothesis_words(), vec!["the", "cat", "sat"]);
            assert_eq!(align_args.reference_words(), vec!["a", "cat", "sits"]);

            let mut config = LexalignConfig::default();
            align_args.apply(&mut config);
            assert!(!config.aligner.stem);
            assert!(config.aligner.exact);
            assert_eq!(
                config.lexicon.synonyms_file,
                Some(PathBuf::from("groups.json"))
            );
        } else {
            panic!("Expected Align command");
        }
    }

    #[test]
    fn test_serve_command() {
        let args = LexalignArgs::try_parse_from([
            "lexalign", "serve", "--host", "0.0.0.0", "--port", "9000", "--no-cache",
        ])
        .unwrap();

        if let Command::Serve(serve_args) = &args.command {
            let mut config = LexalignConfig::default();
            serve_args.apply(&mut config);
            assert_eq!(config.server.address(), "0.0.0.0:9000");
            assert!(!config.cache.enabled);
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_stem_command() {
        let args = LexalignArgs::try_parse_from(["lexalign", "stem", "running", "-s", "identity"])
            .unwrap();
        if let Command::Stem(stem_args) = args.command {
            assert_eq!(stem_args.stemmer, Some(StemmerKind::Identity));
        } else {
            panic!("Expected Stem command");
        }
    }

    #[test]
    fn test_global_flags() {
        let args =
            LexalignArgs::try_parse_from(["lexalign", "stem", "cats", "-vv", "--format", "json"])
                .unwrap();
        assert_eq!(args.verbosity(), 3);
        assert_eq!(args.output_format, OutputFormat::Json);

        let args = LexalignArgs::try_parse_from(["lexalign", "-q", "stem", "cats"]).unwrap();
        assert_eq!(args.verbosity(), 0);

        let args = LexalignArgs::try_parse_from(["lexalign", "stem", "cats"]).unwrap();
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_missing_word() {
        assert!(LexalignArgs::try_parse_from(["lexalign", "synsets"]).is_err());
    }
}
