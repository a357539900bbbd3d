use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod analyze;
mod classify;

#[derive(Debug, Parser)]
#[command(name = "histsent")]
#[command(about = "Consensus sentiment scoring for historical newspaper text")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a single passage and print the verdict
    Classify {
        /// Text to classify
        text: String,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score every article in a scraped CSV and write a `_sentiment.csv` table
    Analyze {
        /// Input CSV with `date,newspaper,title,keyword_matches,content_preview` columns
        input: PathBuf,

        /// Output path (defaults to `<input stem>_sentiment.csv` next to the input)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Run the built-in sample passages
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = histsent_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        println!("histsent ready; run `histsent --help` for commands");
        return Ok(());
    };

    let engine = histsent_sentiment::ConsensusEngine::from_config(&config)?;

    match command {
        Commands::Classify { text, json } => classify::run_classify(&engine, &text, json)?,
        Commands::Analyze { input, output } => {
            analyze::run_analyze(&engine, &config, &input, output.as_deref())?;
        }
        Commands::Demo => classify::run_demo(&engine),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
