//! Tree construction from the flat parent-pointer list.

use serde::Serialize;

use studiohub_core::{AppError, AppResult};
use studiohub_core::types::AssetId;
use studiohub_entity::AssetNode;

use crate::TRAVERSAL_GUARD;

/// A node in a constructed asset tree.
///
/// Borrows from the flat collection it was built from; `depth` is
/// informational (0 at the level the build started from).
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode<'a> {
    /// The underlying asset.
    pub asset: &'a AssetNode,
    /// Child subtrees (always empty for files).
    pub children: Vec<TreeNode<'a>>,
    /// Depth below the build root.
    pub depth: u32,
}

/// List root-level assets (no parent).
pub fn root_assets<'a>(nodes: &'a [AssetNode]) -> Vec<&'a AssetNode> {
    nodes.iter().filter(|node| node.is_root()).collect()
}

/// List direct children of a folder, in original array order.
pub fn children_of<'a>(nodes: &'a [AssetNode], parent_id: &AssetId) -> Vec<&'a AssetNode> {
    nodes
        .iter()
        .filter(|node| node.parent_id.as_ref() == Some(parent_id))
        .collect()
}

/// Build the navigable tree below `parent` (`None` for the whole forest).
///
/// Descends only into folders; files are always leaves, even if a
/// corrupted row names one as a parent. Depth validation happens at
/// mutation time, not here; construction only refuses to walk past
/// [`TRAVERSAL_GUARD`] levels, which validated data cannot reach.
pub fn build_tree<'a>(
    nodes: &'a [AssetNode],
    parent: Option<&AssetId>,
) -> AppResult<Vec<TreeNode<'a>>> {
    let level = match parent {
        Some(id) => children_of(nodes, id),
        None => root_assets(nodes),
    };
    level
        .into_iter()
        .map(|asset| build_node(nodes, asset, 0))
        .collect()
}

fn build_node<'a>(
    nodes: &'a [AssetNode],
    asset: &'a AssetNode,
    depth: u32,
) -> AppResult<TreeNode<'a>> {
    if depth > TRAVERSAL_GUARD {
        return Err(AppError::integrity(format!(
            "Tree construction exceeded {TRAVERSAL_GUARD} levels below '{}'; the parent chain is likely cyclic",
            asset.id
        )));
    }

    let children = if asset.is_folder() {
        children_of(nodes, &asset.id)
            .into_iter()
            .map(|child| build_node(nodes, child, depth + 1))
            .collect::<AppResult<Vec<_>>>()?
    } else {
        Vec::new()
    };

    Ok(TreeNode {
        asset,
        children,
        depth,
    })
}

/// Flatten a tree in pre-order: each node immediately followed by its
/// descendants, siblings in construction order.
pub fn flatten_tree<'a>(tree: &[TreeNode<'a>]) -> Vec<(&'a AssetNode, u32)> {
    let mut flat = Vec::new();
    for node in tree {
        push_flat(node, &mut flat);
    }
    flat
}

fn push_flat<'a>(node: &TreeNode<'a>, flat: &mut Vec<(&'a AssetNode, u32)>) {
    flat.push((node.asset, node.depth));
    for child in &node.children {
        push_flat(child, flat);
    }
}
