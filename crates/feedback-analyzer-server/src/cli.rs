use crate::config::FrontendVariant;
use clap::{Args, Parser, Subcommand};
use feedback_analyzer_scorers::ScorerVariant;

#[derive(Parser, Debug)]
#[command(name = "feedback-analyzer")]
#[command(
    author,
    version,
    about = "Sentiment scoring for interview feedback"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the scoring endpoint and web UI
    Serve {
        #[command(flatten)]
        scoring: ScoringArgs,

        /// Frontend served at `/`: inline or modal
        #[arg(long, value_parser = parse_frontend)]
        frontend: Option<FrontendVariant>,

        /// Listen address
        #[arg(short = 'l', long, default_value = "0.0.0.0")]
        listen: String,

        /// Listen port
        #[arg(short = 'P', long, default_value = "3000")]
        port: u16,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a single piece of feedback and print the result
    Analyze {
        /// Feedback text (read from stdin when omitted)
        text: Option<String>,

        #[command(flatten)]
        scoring: ScoringArgs,

        /// Print the raw JSON result instead of the summary
        #[arg(long)]
        json: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Options shared by every command that builds a scorer
#[derive(Args, Debug, Clone)]
pub struct ScoringArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Scorer to use: remote or lexicon
    #[arg(short, long, value_parser = parse_scorer)]
    pub scorer: Option<ScorerVariant>,

    /// Bearer token for the hosted inference API
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    pub hf_token: Option<String>,
}

fn parse_scorer(s: &str) -> Result<ScorerVariant, String> {
    s.parse()
}

fn parse_frontend(s: &str) -> Result<FrontendVariant, String> {
    s.parse()
}
