//! Recursive search and aggregation over the asset forest.

use serde::Serialize;

use studiohub_core::{AppError, AppResult};
use studiohub_core::types::AssetId;
use studiohub_entity::AssetNode;

use crate::TRAVERSAL_GUARD;
use crate::tree::children_of;

/// Item counts for a folder, split by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ItemCount {
    /// Total number of items.
    pub total: usize,
    /// Number of files.
    pub files: usize,
    /// Number of folders.
    pub folders: usize,
}

impl ItemCount {
    fn tally<'a>(items: impl IntoIterator<Item = &'a AssetNode>) -> Self {
        let mut count = Self::default();
        for item in items {
            count.total += 1;
            if item.is_folder() {
                count.folders += 1;
            } else {
                count.files += 1;
            }
        }
        count
    }
}

/// Collect every descendant of a folder into a flat list.
///
/// Direct children come first in original array order, then each folder
/// child's descendants are appended in turn, so a node always precedes
/// its own descendants.
pub fn all_descendants<'a>(
    nodes: &'a [AssetNode],
    id: &AssetId,
) -> AppResult<Vec<&'a AssetNode>> {
    let mut collected = Vec::new();
    collect_descendants(nodes, id, 0, &mut collected)?;
    Ok(collected)
}

fn collect_descendants<'a>(
    nodes: &'a [AssetNode],
    id: &AssetId,
    depth: u32,
    collected: &mut Vec<&'a AssetNode>,
) -> AppResult<()> {
    if depth > TRAVERSAL_GUARD {
        return Err(AppError::integrity(format!(
            "Descendant walk exceeded {TRAVERSAL_GUARD} levels below '{id}'; the parent chain is likely cyclic"
        )));
    }

    let children = children_of(nodes, id);
    collected.extend(children.iter().copied());
    for child in children {
        if child.is_folder() {
            collect_descendants(nodes, &child.id, depth + 1, collected)?;
        }
    }
    Ok(())
}

/// Check whether an asset matches a search query.
///
/// A match is a case-insensitive substring hit on the asset's own name,
/// or, for folders, on the name of any descendant. Surfacing ancestor
/// folders this way lets the browser show the path to a deeply nested
/// hit.
pub fn asset_matches(nodes: &[AssetNode], asset: &AssetNode, query: &str) -> AppResult<bool> {
    let needle = query.to_lowercase();
    if asset.name.to_lowercase().contains(&needle) {
        return Ok(true);
    }
    if asset.is_folder() {
        for descendant in all_descendants(nodes, &asset.id)? {
            if descendant.name.to_lowercase().contains(&needle) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Search the whole flat collection, ignoring folder scoping.
///
/// Results keep original array order and include ancestor folders of any
/// nested match (see [`asset_matches`]).
pub fn search_assets<'a>(nodes: &'a [AssetNode], query: &str) -> AppResult<Vec<&'a AssetNode>> {
    let mut results = Vec::new();
    for asset in nodes {
        if asset_matches(nodes, asset, query)? {
            results.push(asset);
        }
    }
    Ok(results)
}

/// Count a folder's direct children.
pub fn folder_item_count(nodes: &[AssetNode], id: &AssetId) -> ItemCount {
    ItemCount::tally(children_of(nodes, id))
}

/// Count everything below a folder, recursively.
pub fn total_item_count(nodes: &[AssetNode], id: &AssetId) -> AppResult<ItemCount> {
    Ok(ItemCount::tally(all_descendants(nodes, id)?))
}
