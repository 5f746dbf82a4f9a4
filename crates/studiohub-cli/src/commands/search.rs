//! Library-wide name search.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use studiohub_core::error::AppError;
use studiohub_gallery::navigate::full_path;
use studiohub_gallery::search::search_assets;

use super::Library;
use crate::output::{self, OutputFormat};

/// Arguments for `search`
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Query string (case-insensitive substring)
    pub query: String,
}

/// Search result row
#[derive(Debug, Serialize, Tabled)]
struct ResultRow {
    /// Asset ID
    id: String,
    /// Name
    name: String,
    /// Kind
    kind: String,
    /// Full path
    path: String,
}

/// Run a search across the whole library.
///
/// Matches include ancestor folders of nested hits, so the table always
/// shows the folders to open to reach a result.
pub fn execute(args: &SearchArgs, library: &Library, format: OutputFormat) -> Result<(), AppError> {
    let results = search_assets(&library.nodes, &args.query)?;

    let rows: Vec<ResultRow> = results
        .iter()
        .map(|asset| {
            Ok(ResultRow {
                id: asset.id.to_string(),
                name: asset.name.clone(),
                kind: asset.kind.as_str().to_string(),
                path: full_path(&library.nodes, &asset.id)?,
            })
        })
        .collect::<Result<_, AppError>>()?;

    output::print_list(&rows, format);
    Ok(())
}
