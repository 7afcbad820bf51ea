//! Command implementations for the lexalign CLI.

use std::sync::Arc;

use log::{debug, info};

use crate::align::{Aligner, SynonymExpander, SynonymSource};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::LexalignConfig;
use crate::error::Result;
use crate::server;

/// Execute a CLI command.
pub fn execute_command(args: LexalignArgs) -> Result<()> {
    let mut config = LexalignConfig::load_or_default(args.config.as_deref())?;

    match &args.command {
        Command::Serve(serve_args) => {
            serve_args.apply(&mut config);
            run_server(config)
        }
        Command::Synsets(synsets_args) => {
            synsets_args.lexicon.apply(&mut config);
            show_synsets(synsets_args, &config, &args)
        }
        Command::Stem(stem_args) => show_stem(stem_args, &config, &args),
        Command::Align(align_args) => {
            align_args.apply(&mut config);
            align_sentences(align_args, &config, &args)
        }
    }
}

/// Run the HTTP server on a fresh tokio runtime.
fn run_server(config: LexalignConfig) -> Result<()> {
    config.validate()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(config))
}

/// Print the synonym closure of a word.
fn show_synsets(
    args: &SynsetsArgs,
    config: &LexalignConfig,
    cli_args: &LexalignArgs,
) -> Result<()> {
    let lexicon = config.lexicon.open()?;
    debug!("expanding {:?} with the {} lexicon", args.word, lexicon.name());

    let synonyms = SynonymExpander::new(lexicon).expand(&args.word)?;
    output_result(
        &SynsetsResult {
            word: args.word.clone(),
            synonyms,
        },
        cli_args,
    )
}

/// Print the stem of a word.
fn show_stem(args: &StemArgs, config: &LexalignConfig, cli_args: &LexalignArgs) -> Result<()> {
    let stemmer = args.stemmer.unwrap_or(config.aligner.stemmer).build();
    output_result(
        &StemResult {
            word: args.word.clone(),
            stem: stemmer.stem(&args.word),
            stemmer: stemmer.name().to_string(),
        },
        cli_args,
    )
}

/// Align the whitespace-separated words of two sentences.
fn align_sentences(
    args: &AlignArgs,
    config: &LexalignConfig,
    cli_args: &LexalignArgs,
) -> Result<()> {
    config.aligner.validate()?;
    let lexicon = config.lexicon.open()?;
    let synonyms: Arc<dyn SynonymSource> = Arc::new(SynonymExpander::new(lexicon));
    let aligner = Aligner::new(config.aligner.clone(), synonyms)?;

    let hypothesis = args.hypothesis_words();
    let reference = args.reference_words();
    let alignment = aligner.align(&hypothesis, &reference)?;
    info!(
        "aligned {} of {} hypothesis words",
        alignment.len(),
        hypothesis.len()
    );

    output_result(
        &AlignmentReport {
            hypothesis: hypothesis.iter().map(|w| w.to_string()).collect(),
            reference: reference.iter().map(|w| w.to_string()).collect(),
            alignment,
        },
        cli_args,
    )
}
