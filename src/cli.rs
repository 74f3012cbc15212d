// Content Ranker CLI binary

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use content_ranker_lib::commands::{self, render};
use content_ranker_lib::weights::Preset;
use content_ranker_lib::Settings;

#[derive(Parser)]
#[command(name = "ranker")]
#[command(about = "Social Video Content Ranker - prioritize video ideas by weighted factors", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive ranking session (default)
    Session {
        /// Starting weight preset (trend, brand, balanced)
        #[arg(short, long)]
        preset: Option<Preset>,
        /// Start without the sample idea
        #[arg(long)]
        no_sample: bool,
    },

    /// Score one idea from eight ratings in factor order
    Score {
        /// Ratings 1-10: strategic, engagement, trending, debate, resource, viral, brand, competitive
        #[arg(num_args = 8, required = true, allow_negative_numbers = true)]
        ratings: Vec<i64>,
        /// Weight preset
        #[arg(short, long, conflicts_with = "weights")]
        preset: Option<Preset>,
        /// Eight custom weights 0-50, comma separated
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        weights: Option<Vec<i64>>,
        /// Title shown in the output
        #[arg(short, long, default_value = "Video Idea")]
        title: String,
    },

    /// Describe the eight rating factors
    Factors,

    /// List the weight presets
    Presets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load_or_default(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        settings.log_filter = level;
    }
    init_logging(&settings.log_filter);

    match cli.command.unwrap_or(Commands::Session { preset: None, no_sample: false }) {
        Commands::Session { preset, no_sample } => cmd_session(settings, preset, no_sample),
        Commands::Score { ratings, preset, weights, title } => cmd_score(ratings, preset, weights, title),
        Commands::Factors => cmd_factors(),
        Commands::Presets => cmd_presets(),
    }
}

fn init_logging(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(content_ranker_lib::constants::DEFAULT_LOG_FILTER));

    // Also bridges `log` records from the library into tracing
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn cmd_session(mut settings: Settings, preset: Option<Preset>, no_sample: bool) -> Result<()> {
    if let Some(preset) = preset {
        settings.starting_preset = preset;
    }
    if no_sample {
        settings.seed_sample = false;
    }
    content_ranker_lib::run(&settings)?;
    Ok(())
}

fn cmd_score(ratings: Vec<i64>, preset: Option<Preset>, weights: Option<Vec<i64>>, title: String) -> Result<()> {
    commands::score_one(ratings, preset, weights, title, &mut std::io::stdout().lock())?;
    Ok(())
}

fn cmd_factors() -> Result<()> {
    render::factors(&mut std::io::stdout().lock())?;
    Ok(())
}

fn cmd_presets() -> Result<()> {
    render::presets(&mut std::io::stdout().lock())?;
    Ok(())
}
