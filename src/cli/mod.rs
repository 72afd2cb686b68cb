//! Command-line interface for scene-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **extract**: Find actors, labels and studios in paths or titles
//! - **catalog**: List the entities in a catalog file
//! - **config**: Validate a matcher configuration and print it
//!
//! ## Usage
//!
//! ```text
//! # Match a single path
//! scene-matcher extract --catalog library.json "/media/BLACKED/Jill.Kassidy.mp4"
//!
//! # Match every line of a file listing
//! find /media -name '*.mp4' | scene-matcher extract --catalog library.json -
//!
//! # JSON output with a custom matcher
//! scene-matcher extract --catalog library.json --config matcher.json --format json title.mp4
//!
//! # Show studios with their parents
//! scene-matcher catalog --catalog library.json --kind studios
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::types::EntityKind;
use crate::matching::MatcherConfig;

pub mod catalog;
pub mod config;
pub mod extract;

#[derive(Parser)]
#[command(name = "scene-matcher")]
#[command(version)]
#[command(about = "Find known actors, labels and studios in file paths and titles")]
#[command(
    long_about = "scene-matcher finds the entities of a media library referenced in file paths and scene titles.\n\nIt tokenizes noisy release names (dots, underscores, brackets, accents) and matches them against a catalog of names and aliases:\n- Whole-word, in-order matching of names and aliases\n- Regex aliases with the 'regex:' prefix\n- Parent studios dropped in favour of the sub-studio that matched"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find entities in paths or titles
    Extract(extract::ExtractArgs),

    /// List the entities in a catalog
    Catalog(catalog::CatalogArgs),

    /// Validate and print the matcher configuration
    Config(config::ConfigArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Which entity kinds a command covers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum KindFilter {
    Actors,
    Labels,
    Studios,
    #[default]
    All,
}

impl KindFilter {
    #[must_use]
    pub fn kinds(self) -> Vec<EntityKind> {
        match self {
            Self::Actors => vec![EntityKind::Actor],
            Self::Labels => vec![EntityKind::Label],
            Self::Studios => vec![EntityKind::Studio],
            Self::All => EntityKind::ALL.to_vec(),
        }
    }
}

/// Load the matcher configuration from `path`, or the default when absent
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_matcher_config(path: Option<&Path>) -> anyhow::Result<MatcherConfig> {
    match path {
        Some(path) => MatcherConfig::load_from_file(path)
            .map_err(|e| anyhow::anyhow!("{}: {e}", path.display())),
        None => Ok(MatcherConfig::default()),
    }
}

#[derive(clap::Args)]
pub struct ConfigPathArg {
    /// Path to a matcher configuration file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
