#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use voxmatch_config::Config;
use voxmatch_core::CatalogVoice;
use voxmatch_matching::{RankingOptions, extract, rank_catalog};

#[derive(Parser)]
#[command(name = "voxmatch")]
#[command(about = "voice description matcher", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a description into structured attributes
    Extract {
        /// Free-text voice description
        #[arg(short = 'd', long)]
        description: String,

        /// Optional voice catalog (JSON array) to drive matching
        #[arg(short = 'c', long)]
        catalog: Option<PathBuf>,
    },
    /// Rank a voice catalog against a description
    Rank {
        /// Free-text voice description
        #[arg(short = 'd', long)]
        description: String,

        /// Voice catalog (JSON array)
        #[arg(short = 'c', long)]
        catalog: PathBuf,

        /// Maximum matches to print (overrides config)
        #[arg(short = 'l', long)]
        limit: Option<usize>,

        /// Good-match threshold (overrides config)
        #[arg(short = 't', long)]
        threshold: Option<u8>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            description,
            catalog,
        } => {
            let catalog = catalog.map(|path| load_catalog(&path)).transpose()?;
            let attrs = extract(&description, catalog.as_deref());
            println!("{}", serde_json::to_string_pretty(&attrs)?);
        }
        Commands::Rank {
            description,
            catalog,
            limit,
            threshold,
        } => {
            let config = Config::load_or_default();
            let catalog = load_catalog(&catalog)?;
            info!(voices = catalog.len(), "loaded catalog");

            let options = RankingOptions {
                good_match_threshold: threshold.unwrap_or(config.ranking.good_match_threshold),
                max_results: limit.unwrap_or(config.ranking.max_results),
            };
            let attrs = extract(&description, Some(&catalog));
            let matches = rank_catalog(&catalog, &attrs, &options);
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        Commands::Init => {
            Config::create_config()?;
        }
        Commands::Version => {
            println!("voxmatch {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn load_catalog(path: &Path) -> anyhow::Result<Vec<CatalogVoice>> {
    let content = std::fs::read_to_string(path)?;
    let catalog: Vec<CatalogVoice> = serde_json::from_str(&content)?;
    Ok(catalog)
}
