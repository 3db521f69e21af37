// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `train` and `score`, and their
// flags. Every flag has a default that reproduces the
// reference setup, so both commands run with no arguments.
//
// Reference: Rust Book §12 (Building a CLI Program)
//            clap derive documentation

use clap::{Args, Subcommand};

use crate::application::train_use_case::TrainConfig;
use crate::infra::checkpoint::MODEL_DIR_ENV;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fit the ridge model on the diabetes dataset and save it
    Train(TrainArgs),

    /// Load a saved model and score JSON payloads
    Score(ScoreArgs),
}

/// All arguments for the `train` command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Directory that receives model.pkl (created if missing)
    #[arg(long, default_value = "model")]
    pub output_dir: String,

    /// L2 regularisation strength
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f64,

    /// Fraction of rows held out for evaluation
    #[arg(long, default_value_t = 0.2)]
    pub test_size: f64,

    /// Seed for the train/test shuffle
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            output_dir: a.output_dir,
            alpha:      a.alpha,
            test_size:  a.test_size,
            seed:       a.seed,
        }
    }
}

/// All arguments for the `score` command
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Directory containing model.pkl [default: .]
    #[arg(long, env = MODEL_DIR_ENV)]
    pub model_dir: Option<String>,

    /// A single JSON payload to score. When omitted, each
    /// non-empty line on stdin is scored as its own request.
    #[arg(long)]
    pub data: Option<String>,
}
