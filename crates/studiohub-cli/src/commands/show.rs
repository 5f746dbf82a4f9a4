//! Read-only library views: tree, folder listing, breadcrumbs, counts.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use studiohub_core::error::AppError;
use studiohub_core::types::AssetId;
use studiohub_gallery::navigate::{asset_path, asset_path_with_ids};
use studiohub_gallery::search::{folder_item_count, total_item_count};
use studiohub_gallery::tree::{build_tree, children_of, flatten_tree, root_assets};

use super::Library;
use crate::output::{self, OutputFormat};

/// Arguments for `tree`
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Folder to use as the tree root (omit for the whole library)
    #[arg(short, long)]
    pub root: Option<String>,
}

/// Arguments for `list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Folder whose children to list (omit for root-level assets)
    pub folder: Option<String>,
}

/// Arguments for `path`
#[derive(Debug, Args)]
pub struct PathArgs {
    /// Asset ID
    pub id: String,
}

/// Arguments for `count`
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Folder ID
    pub id: String,
}

/// Asset display row
#[derive(Debug, Serialize, Tabled)]
struct AssetRow {
    /// Asset ID
    id: String,
    /// Name
    name: String,
    /// Kind
    kind: String,
    /// Direct items (folders only)
    items: String,
    /// Added at
    added: String,
}

/// Breadcrumb segment row
#[derive(Debug, Serialize, Tabled)]
struct SegmentRow {
    /// Depth
    depth: usize,
    /// Asset ID
    id: String,
    /// Name
    name: String,
}

/// Item count row
#[derive(Debug, Serialize, Tabled)]
struct CountRow {
    /// Counting scope
    scope: String,
    /// Total items
    total: usize,
    /// Files
    files: usize,
    /// Folders
    folders: usize,
}

/// Render the asset tree.
pub fn tree(args: &TreeArgs, library: &Library, format: OutputFormat) -> Result<(), AppError> {
    let root = args.root.as_deref().map(AssetId::from);
    let tree = build_tree(&library.nodes, root.as_ref())?;

    match format {
        OutputFormat::Table => {
            for (asset, depth) in flatten_tree(&tree) {
                let marker = if asset.is_folder() { "/" } else { "" };
                println!(
                    "{}{}{}  [{}]",
                    "  ".repeat(depth as usize),
                    asset.name,
                    marker,
                    asset.id
                );
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&tree)?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// List the children of a folder (or root-level assets).
pub fn list(args: &ListArgs, library: &Library, format: OutputFormat) -> Result<(), AppError> {
    let children = match &args.folder {
        Some(folder) => children_of(&library.nodes, &AssetId::from(folder.as_str())),
        None => root_assets(&library.nodes),
    };

    let rows: Vec<AssetRow> = children
        .iter()
        .map(|asset| AssetRow {
            id: asset.id.to_string(),
            name: asset.name.clone(),
            kind: asset.kind.as_str().to_string(),
            items: if asset.is_folder() {
                folder_item_count(&library.nodes, &asset.id).total.to_string()
            } else {
                String::new()
            },
            added: asset
                .created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}

/// Show the breadcrumb path of an asset.
pub fn path(args: &PathArgs, library: &Library, format: OutputFormat) -> Result<(), AppError> {
    let id = AssetId::from(args.id.as_str());
    let names = asset_path(&library.nodes, &id)?;
    if names.is_empty() {
        return Err(AppError::not_found("Asset not found"));
    }

    if format == OutputFormat::Table {
        println!("{}", names.join(" > "));
    }

    let rows: Vec<SegmentRow> = asset_path_with_ids(&library.nodes, &id)?
        .into_iter()
        .enumerate()
        .map(|(depth, segment)| SegmentRow {
            depth,
            id: segment.id.to_string(),
            name: segment.name,
        })
        .collect();
    output::print_list(&rows, format);
    Ok(())
}

/// Show direct and recursive item counts for a folder.
pub fn count(args: &CountArgs, library: &Library, format: OutputFormat) -> Result<(), AppError> {
    let id = AssetId::from(args.id.as_str());
    let direct = folder_item_count(&library.nodes, &id);
    let total = total_item_count(&library.nodes, &id)?;

    let rows = vec![
        CountRow {
            scope: "direct".to_string(),
            total: direct.total,
            files: direct.files,
            folders: direct.folders,
        },
        CountRow {
            scope: "recursive".to_string(),
            total: total.total,
            files: total.files,
            folders: total.folders,
        },
    ];
    output::print_list(&rows, format);
    Ok(())
}
