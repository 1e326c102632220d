//! Interactive REPL for the pharmacy stock chatbot.
//!
//! Loads a catalog, builds the engine once, then answers questions from
//! stdin until EOF or "quit".

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stockbot_core::{ChatEngine, MatcherConfig};

#[derive(Parser)]
#[command(
    name = "stockbot",
    about = "Ask about drug stock in free text; typos are tolerated",
    version
)]
struct Args {
    /// Path to the knowledge catalog JSON
    #[arg(short, long, default_value = "crates/stockbot-cli/data/catalog.json")]
    catalog: PathBuf,

    /// Minimum cosine similarity (strict) for a subject match
    #[arg(long, default_value_t = 0.5)]
    match_threshold: f64,

    /// Minimum word similarity for typo correction
    #[arg(long, default_value_t = 0.8)]
    correction_cutoff: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = MatcherConfig {
        match_threshold: args.match_threshold,
        correction_cutoff: args.correction_cutoff,
    };

    let engine = ChatEngine::from_path(&args.catalog, config)
        .with_context(|| format!("loading catalog from {}", args.catalog.display()))?;
    info!(catalog = %args.catalog.display(), "catalog loaded");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "Ask about a drug (or 'quit' to exit): ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.eq_ignore_ascii_case("quit") {
            break;
        }

        writeln!(stdout, "{}\n", engine.reply(question))?;
    }

    Ok(())
}
