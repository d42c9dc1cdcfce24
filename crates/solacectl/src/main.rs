//! Solace Control - console client for the support bot
//!
//! Runs the dialogue engine in-process: an interactive chat, or a single question.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use solace_shared::{DialogueEngine, Reply, SolaceConfig};
use solacectl::repl;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "solacectl")]
#[command(about = "Solace - mental health support chat", long_about = None)]
#[command(version = solace_shared::VERSION)]
struct Cli {
    /// Config file (defaults to /etc/solace/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible prompt selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive conversation (default)
    Chat,

    /// Ask a single question and print the reply
    Ask {
        /// The message to send
        message: Vec<String>,

        /// Also print which path answered and its confidence
        #[arg(long)]
        explain: bool,
    },
}

fn main() -> Result<()> {
    // Keep the conversation clean; RUST_LOG opts into more
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SolaceConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SolaceConfig::load(),
    };
    if cli.seed.is_some() {
        config.engine.seed = cli.seed;
    }

    let engine = DialogueEngine::from_config(&config).context("Invalid configuration")?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let color = io::stdout().is_terminal();
            repl::run(&engine, io::stdin().lock(), io::stdout().lock(), color)?;
        }
        Commands::Ask { message, explain } => {
            let message = message.join(" ");
            let reply = engine.respond_detailed(&message);
            println!("{}", reply.text());
            if explain {
                print_explanation(&reply);
            }
        }
    }

    Ok(())
}

fn print_explanation(reply: &Reply) {
    match reply {
        Reply::Rule(hit) => {
            eprintln!("(rule: {})", hit.rule);
        }
        Reply::Retrieval(result) => match &result.matched_statement {
            Some(statement) => {
                eprintln!("(matched {:?}, confidence {:.3})", statement, result.confidence)
            }
            None => eprintln!("(fallback, best confidence {:.3})", result.confidence),
        },
    }
}
