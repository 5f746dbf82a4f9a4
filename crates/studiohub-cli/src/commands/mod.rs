//! CLI command definitions and dispatch.

pub mod organize;
pub mod search;
pub mod show;

use std::fs;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use studiohub_core::config::AppConfig;
use studiohub_core::error::AppError;
use studiohub_entity::{AssetNode, AssetRecord, normalize};

use crate::output::OutputFormat;

/// StudioHub — asset library browser for creative teams
#[derive(Debug, Parser)]
#[command(name = "studiohub", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment to load (config/<env>.toml)
    #[arg(short, long, default_value = "default")]
    pub config: String,

    /// Path to the asset library JSON (overrides the configured path)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the asset tree
    Tree(show::TreeArgs),
    /// List the children of a folder (or the root level)
    List(show::ListArgs),
    /// Show the breadcrumb path of an asset
    Path(show::PathArgs),
    /// Show item counts for a folder
    Count(show::CountArgs),
    /// Search the whole library by name
    Search(search::SearchArgs),
    /// List folders available as a new parent
    Parents(organize::ParentsArgs),
    /// Move an asset under a new parent folder
    Move(organize::MoveArgs),
    /// Rename an asset
    Rename(organize::RenameArgs),
}

/// Loaded asset library plus the persistence details mutations need.
#[derive(Debug)]
pub struct Library {
    /// Normalized asset nodes.
    pub nodes: Vec<AssetNode>,
    /// The JSON file the library was loaded from.
    pub file: String,
    /// Whether to pretty-print when writing back.
    pub pretty: bool,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.config)
            .map_err(|e| AppError::internal(format!("Failed to load config: {}", e)))?;
        init_tracing(&config);

        let file = self
            .file
            .clone()
            .unwrap_or_else(|| config.library.nodes_file.clone());
        let library = load_library(&file, config.library.pretty_json)?;

        match &self.command {
            Commands::Tree(args) => show::tree(args, &library, self.format),
            Commands::List(args) => show::list(args, &library, self.format),
            Commands::Path(args) => show::path(args, &library, self.format),
            Commands::Count(args) => show::count(args, &library, self.format),
            Commands::Search(args) => search::execute(args, &library, self.format),
            Commands::Parents(args) => organize::parents(args, &library, self.format),
            Commands::Move(args) => organize::move_cmd(args, library, self.format),
            Commands::Rename(args) => organize::rename(args, library, self.format),
        }
    }
}

/// Initialize tracing; `RUST_LOG` overrides the configured level.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.logging.format == "compact" {
        builder.compact().init();
    } else {
        builder.pretty().init();
    }
}

/// Load and normalize the asset library from a JSON export.
pub fn load_library(file: &str, pretty: bool) -> Result<Library, AppError> {
    let raw = fs::read_to_string(file)
        .map_err(|e| AppError::internal(format!("Failed to read '{}': {}", file, e)))?;
    let records: Vec<AssetRecord> = serde_json::from_str(&raw)?;
    Ok(Library {
        nodes: normalize(records),
        file: file.to_string(),
        pretty,
    })
}

/// Write the library back to its JSON file.
pub fn save_library(library: &Library) -> Result<(), AppError> {
    let records: Vec<AssetRecord> = library
        .nodes
        .iter()
        .cloned()
        .map(AssetRecord::from)
        .collect();
    let json = if library.pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    fs::write(&library.file, json)
        .map_err(|e| AppError::internal(format!("Failed to write '{}': {}", library.file, e)))?;
    Ok(())
}

/// Replace a node in the library by id.
pub fn replace_node(nodes: &mut [AssetNode], updated: AssetNode) {
    if let Some(slot) = nodes.iter_mut().find(|node| node.id == updated.id) {
        *slot = updated;
    }
}
