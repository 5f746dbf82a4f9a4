//! Folder navigation, breadcrumbs, and parent selection.

use serde::Serialize;

use studiohub_core::{AppError, AppResult};
use studiohub_core::types::AssetId;
use studiohub_entity::AssetNode;

use crate::search::search_assets;
use crate::tree::{children_of, root_assets};
use crate::validate::asset_depth;
use crate::{MAX_NESTING_DEPTH, TRAVERSAL_GUARD, find_asset};

/// One breadcrumb segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSegment {
    /// Asset id of the segment.
    pub id: AssetId,
    /// Display name of the segment.
    pub name: String,
}

/// A folder offered as a move/create target in the parent dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct ParentOption {
    /// Folder id.
    pub id: AssetId,
    /// Folder name.
    pub name: String,
    /// Full path string (e.g. `/Clients/Acme/Drafts`).
    pub path: String,
    /// Depth of the folder itself.
    pub depth: u32,
    /// Whether placing a child here would exceed the nesting limit.
    pub disabled: bool,
}

/// Look up the direct parent of an asset.
///
/// Returns `None` for root-level assets and for dangling parent
/// references (the parent id no longer resolves to a node).
pub fn parent_asset<'a>(nodes: &'a [AssetNode], id: &AssetId) -> Option<&'a AssetNode> {
    let node = find_asset(nodes, id)?;
    let parent_id = node.parent_id.as_ref()?;
    find_asset(nodes, parent_id)
}

/// List the ancestors of an asset, outermost root first, excluding the
/// asset itself.
pub fn parent_chain<'a>(nodes: &'a [AssetNode], id: &AssetId) -> AppResult<Vec<&'a AssetNode>> {
    let mut chain = Vec::new();
    let mut current = parent_asset(nodes, id);
    while let Some(ancestor) = current {
        if chain.len() as u32 > TRAVERSAL_GUARD {
            return Err(AppError::integrity(format!(
                "Parent chain above '{id}' exceeded {TRAVERSAL_GUARD} links; the tree is likely cyclic"
            )));
        }
        chain.push(ancestor);
        current = parent_asset(nodes, &ancestor.id);
    }
    chain.reverse();
    Ok(chain)
}

/// Breadcrumb names from the root down to and including the asset.
pub fn asset_path(nodes: &[AssetNode], id: &AssetId) -> AppResult<Vec<String>> {
    Ok(asset_path_with_ids(nodes, id)?
        .into_iter()
        .map(|segment| segment.name)
        .collect())
}

/// Breadcrumb segments (id + name) from the root down to and including
/// the asset. Empty if the id does not resolve.
pub fn asset_path_with_ids(nodes: &[AssetNode], id: &AssetId) -> AppResult<Vec<PathSegment>> {
    let Some(node) = find_asset(nodes, id) else {
        return Ok(Vec::new());
    };
    let mut segments: Vec<PathSegment> = parent_chain(nodes, id)?
        .into_iter()
        .map(|ancestor| PathSegment {
            id: ancestor.id.clone(),
            name: ancestor.name.clone(),
        })
        .collect();
    segments.push(PathSegment {
        id: node.id.clone(),
        name: node.name.clone(),
    });
    Ok(segments)
}

/// Render the full slash-separated path of an asset (e.g. `/Trip/RAW`).
pub fn full_path(nodes: &[AssetNode], id: &AssetId) -> AppResult<String> {
    let names = asset_path(nodes, id)?;
    Ok(format!("/{}", names.join("/")))
}

/// Walk up from `id` checking whether `ancestor_id` appears in its
/// parent chain.
pub fn is_descendant_of(
    nodes: &[AssetNode],
    id: &AssetId,
    ancestor_id: &AssetId,
) -> AppResult<bool> {
    let mut hops = 0u32;
    let mut current = parent_asset(nodes, id);
    while let Some(ancestor) = current {
        if &ancestor.id == ancestor_id {
            return Ok(true);
        }
        hops += 1;
        if hops > TRAVERSAL_GUARD {
            return Err(AppError::integrity(format!(
                "Parent chain above '{id}' exceeded {TRAVERSAL_GUARD} links; the tree is likely cyclic"
            )));
        }
        current = parent_asset(nodes, &ancestor.id);
    }
    Ok(false)
}

/// List every folder that could serve as a parent for `exclude`.
///
/// The excluded asset and its whole subtree are left out (a folder can
/// never be moved into itself), folders already at the depth limit are
/// flagged `disabled`, and the result is sorted by full path so a flat
/// dropdown reads as a grouped, indented listing.
pub fn available_parent_folders(
    nodes: &[AssetNode],
    exclude: Option<&AssetId>,
) -> AppResult<Vec<ParentOption>> {
    let mut options = Vec::new();
    for node in nodes.iter().filter(|node| node.is_folder()) {
        if let Some(excluded) = exclude {
            if &node.id == excluded || is_descendant_of(nodes, &node.id, excluded)? {
                continue;
            }
        }
        let depth = asset_depth(nodes, &node.id)?;
        options.push(ParentOption {
            id: node.id.clone(),
            name: node.name.clone(),
            path: full_path(nodes, &node.id)?,
            depth,
            disabled: depth >= MAX_NESTING_DEPTH - 1,
        });
    }
    options.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(options)
}

/// Resolve the assets the browser should display.
///
/// An active (non-blank) search query bypasses folder scoping entirely
/// and runs against the whole collection; otherwise the view shows the
/// children of the current folder, or the roots when no folder is open.
pub fn browse<'a>(
    nodes: &'a [AssetNode],
    current_folder: Option<&AssetId>,
    query: Option<&str>,
) -> AppResult<Vec<&'a AssetNode>> {
    if let Some(query) = query {
        if !query.trim().is_empty() {
            return search_assets(nodes, query);
        }
    }
    Ok(match current_folder {
        Some(folder_id) => children_of(nodes, folder_id),
        None => root_assets(nodes),
    })
}
