// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The entry point for all user interaction. Parses arguments
// with clap and delegates to Layer 2 (application).
//
// Two commands are supported:
//   1. `train` — fits the model and writes model/model.pkl
//   2. `score` — loads model.pkl once, then scores payloads
//                from --data or from stdin (one per line)
//
// This is the only layer that prints to stdout.

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};

use crate::application::score_use_case::ScoringContext;
use crate::domain::payload::ScoreResponse;
use crate::infra::checkpoint::resolve_model_dir;
use commands::{Commands, ScoreArgs, TrainArgs};

#[derive(Parser, Debug)]
#[command(
    name = "ridge-scoring",
    version,
    about = "Train a ridge regression model on the diabetes dataset, then score JSON requests."
)]
pub struct Cli {
    /// The subcommand to run (train or score)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args) => run_train(args),
            Commands::Score(args) => run_score(args),
        }
    }
}

fn run_train(args: TrainArgs) -> Result<()> {
    use crate::application::train_use_case::TrainUseCase;

    let use_case = TrainUseCase::new(args.into());
    tracing::info!("Starting training: {:?}", use_case.config());

    let report = use_case.execute()?;
    tracing::info!(
        "Trained on {} rows, held out {} (test r2={:.4})",
        report.train_rows,
        report.test_rows,
        report.metrics.r2
    );
    println!("Saved model to {}", report.model_path.display());
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<()> {
    // Initialise once, before any request is read
    let context = match args.model_dir {
        Some(dir) => ScoringContext::init(resolve_model_dir(Some(dir)))?,
        None      => ScoringContext::from_env()?,
    };

    let stdout  = io::stdout();
    let mut out = stdout.lock();

    if let Some(payload) = args.data {
        writeln!(out, "{}", context.run(&payload).to_json())?;
        return Ok(());
    }

    let (served, failed) = serve_lines(&context, io::stdin().lock(), &mut out)?;
    tracing::info!("Served {} requests ({} failed)", served, failed);
    Ok(())
}

/// Local hosting loop: one request per input line, one JSON
/// response line per request.
///
/// A line that is not valid UTF-8 is answered with an error
/// response like any other bad request. Only an I/O failure on
/// the reader or writer stops the loop.
///
/// Returns (requests served, requests that failed).
fn serve_lines<R: BufRead, W: Write>(
    context: &ScoringContext,
    reader:  R,
    out:     &mut W,
) -> Result<(usize, usize)> {
    let (mut served, mut failed) = (0usize, 0usize);

    for line in reader.split(b'\n') {
        let bytes = line.context("Failed to read request from stdin")?;

        let response = match std::str::from_utf8(&bytes) {
            Ok(text) if text.trim().is_empty() => continue,
            Ok(text) => context.run(text),
            Err(e) => {
                tracing::warn!("Rejected request that is not valid UTF-8: {e}");
                ScoreResponse::error(format!("request is not valid UTF-8: {e}"))
            }
        };

        served += 1;
        if response.is_error() {
            failed += 1;
        }
        writeln!(out, "{}", response.to_json())?;
        out.flush()?;
    }

    Ok((served, failed))
}
