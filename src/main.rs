use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trendlens::config::Config;

mod commands;

#[derive(Parser)]
#[command(
    name = "trendlens",
    version,
    about = "Topic trends, source breakdowns and activity timelines for AI news and research",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// Configuration file (TOML); environment variables are used otherwise
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a corpus or stored-document dump and print the analytics JSON
    Analyze {
        /// Input JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Reference time for activity windows (RFC 3339), defaults to now
        #[arg(long)]
        now: Option<String>,

        /// Only keep timeline buckets of this year
        #[arg(long)]
        year: Option<i32>,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print compact JSON
        #[arg(long, default_value = "false")]
        compact: bool,
    },

    /// Render a Markdown trend digest
    Digest {
        /// Input JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Reference time for activity windows (RFC 3339), defaults to now
        #[arg(long)]
        now: Option<String>,

        /// Custom Handlebars template
        #[arg(short, long)]
        template: Option<PathBuf>,
    },

    /// List catalog keywords found in a text
    Keywords {
        /// Text to scan
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    config.validate()?;

    let log_format = cli
        .log_format
        .clone()
        .unwrap_or_else(|| config.logging.format.clone());
    setup_tracing(&log_format, &config.logging.level, cli.verbose)?;

    tracing::debug!(config = ?config.analytics, "Configuration loaded");

    match cli.command {
        Commands::Analyze {
            input,
            now,
            year,
            output,
            compact,
        } => {
            tracing::info!(
                input = %input.display(),
                now = ?now,
                year = ?year,
                output = ?output,
                "Starting analyze command"
            );
            commands::analyze(
                &config,
                commands::AnalyzeParams {
                    input,
                    now,
                    year,
                    output,
                    compact,
                },
            )
            .await?;
        }

        Commands::Digest {
            input,
            now,
            template,
        } => {
            tracing::info!(
                input = %input.display(),
                template = ?template,
                "Starting digest command"
            );
            commands::digest(&config, input, now, template).await?;
        }

        Commands::Keywords { text } => {
            commands::keywords(&config, &text)?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("trendlens=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("trendlens={level},warn")))
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
