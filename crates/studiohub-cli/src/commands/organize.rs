//! Mutating library operations: move, rename, parent selection.
//!
//! The gallery core only validates and produces updated nodes; this
//! module owns the persistence side of the contract, writing the updated
//! library JSON back when `--write` is given.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use studiohub_core::error::AppError;
use studiohub_core::types::AssetId;
use studiohub_gallery::navigate::available_parent_folders;
use studiohub_gallery::validate::{move_asset, rename_asset};

use super::{Library, replace_node, save_library};
use crate::output::{self, OutputFormat};

/// Arguments for `parents`
#[derive(Debug, Args)]
pub struct ParentsArgs {
    /// Asset whose subtree to exclude from the listing
    #[arg(short, long)]
    pub exclude: Option<String>,
}

/// Arguments for `move`
#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Asset ID to move
    pub id: String,
    /// New parent folder ID (omit to detach to root)
    #[arg(short, long)]
    pub parent: Option<String>,
    /// Persist the updated library back to the JSON file
    #[arg(long)]
    pub write: bool,
}

/// Arguments for `rename`
#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Asset ID to rename
    pub id: String,
    /// New name
    pub name: String,
    /// Persist the updated library back to the JSON file
    #[arg(long)]
    pub write: bool,
}

/// Parent option row
#[derive(Debug, Serialize, Tabled)]
struct ParentRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
    /// Full path
    path: String,
    /// Depth
    depth: u32,
    /// Disabled (at depth limit)
    disabled: bool,
}

/// List folders that can serve as a new parent.
pub fn parents(args: &ParentsArgs, library: &Library, format: OutputFormat) -> Result<(), AppError> {
    let exclude = args.exclude.as_deref().map(AssetId::from);
    let options = available_parent_folders(&library.nodes, exclude.as_ref())?;

    let rows: Vec<ParentRow> = options
        .into_iter()
        .map(|option| ParentRow {
            id: option.id.to_string(),
            name: option.name,
            path: option.path,
            depth: option.depth,
            disabled: option.disabled,
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}

/// Validate and apply a move.
pub fn move_cmd(args: &MoveArgs, mut library: Library, format: OutputFormat) -> Result<(), AppError> {
    let id = AssetId::from(args.id.as_str());
    let new_parent = args.parent.as_deref().map(AssetId::from);

    let updated = move_asset(&library.nodes, &id, new_parent)?;

    if args.write {
        replace_node(&mut library.nodes, updated);
        save_library(&library)?;
        info!(asset_id = %id, file = %library.file, "Asset moved");
        output::print_success("Asset moved");
    } else {
        output::print_item(&updated, format);
    }
    Ok(())
}

/// Validate and apply a rename.
pub fn rename(args: &RenameArgs, mut library: Library, format: OutputFormat) -> Result<(), AppError> {
    let id = AssetId::from(args.id.as_str());

    let updated = rename_asset(&library.nodes, &id, &args.name)?;

    if args.write {
        replace_node(&mut library.nodes, updated);
        save_library(&library)?;
        info!(asset_id = %id, new_name = %args.name, file = %library.file, "Asset renamed");
        output::print_success("Asset renamed");
    } else {
        output::print_item(&updated, format);
    }
    Ok(())
}
