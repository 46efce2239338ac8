//! Feedback Analyzer
//!
//! Scores interview feedback with either a hosted sentiment model or a local
//! stemmed lexicon, and serves a small chat UI on top of the endpoint.

use anyhow::{Context, Result};
use clap::Parser;
use feedback_analyzer_scorers::{build_scorer, SentimentScorer};
use feedback_analyzer_server::cli::{Cli, Commands, ScoringArgs};
use feedback_analyzer_server::telemetry::{init_metrics, init_tracing};
use feedback_analyzer_server::{run_server, AppState, FrontendVariant, ServerConfig};
use std::io::Read;
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            scoring,
            frontend,
            listen,
            port,
            verbose,
        } => {
            init_tracing(verbose);
            info!("Starting feedback analyzer");

            let config = load_config(&scoring, frontend)?;
            info!("Scorer: {}", config.scoring.scorer);

            let scorer = build_scorer(&config.scoring, scoring.hf_token.clone())?;
            let metrics_handle = init_metrics()?;
            let state = AppState::new(config, scorer, Some(metrics_handle));

            let addr: SocketAddr = format!("{}:{}", listen, port).parse()?;
            run_server(state, addr).await?;
        }

        Commands::Analyze {
            text,
            scoring,
            json,
            verbose,
        } => {
            init_tracing(verbose);

            let config = load_config(&scoring, None)?;
            let scorer = build_scorer(&config.scoring, scoring.hf_token.clone())?;

            let text = match text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("Failed to read feedback from stdin")?;
                    buffer
                }
            };

            let result = scorer.analyze(&text).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.summary());
            }
        }
    }

    Ok(())
}

fn load_config(scoring: &ScoringArgs, frontend: Option<FrontendVariant>) -> Result<ServerConfig> {
    let config = ServerConfig::load(&scoring.config)
        .with_context(|| format!("Failed to load configuration from {}", scoring.config))?;
    Ok(config.with_overrides(scoring.scorer, frontend))
}
