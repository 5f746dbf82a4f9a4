//! Mutation-time integrity validation.
//!
//! This module is the sole gatekeeper for the two structural invariants
//! of the asset forest: no cycles, and nesting depth below
//! [`MAX_NESTING_DEPTH`](crate::MAX_NESTING_DEPTH). Every mutation that
//! changes a `parent_id` must go through [`move_asset`]; read-time
//! traversal elsewhere in the crate trusts that it did.

use tracing::debug;

use studiohub_core::{AppError, AppResult};
use studiohub_core::types::AssetId;
use studiohub_entity::AssetNode;

use crate::search::all_descendants;
use crate::{MAX_NESTING_DEPTH, TRAVERSAL_GUARD, find_asset};

/// Maximum length of a folder or asset name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Characters that may not appear in a folder name.
pub const FORBIDDEN_NAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Compute the depth of an asset: 0 for roots, parent depth + 1 otherwise.
///
/// A dangling parent reference terminates the chain as if the missing
/// parent were a root. Walks iteratively up the parent chain; a chain
/// longer than [`TRAVERSAL_GUARD`] means the data is cyclic and yields an
/// `Integrity` error.
pub fn asset_depth(nodes: &[AssetNode], id: &AssetId) -> AppResult<u32> {
    let mut depth = 0u32;
    let mut current = find_asset(nodes, id);
    while let Some(node) = current {
        let Some(parent_id) = node.parent_id.as_ref() else {
            break;
        };
        depth += 1;
        if depth > TRAVERSAL_GUARD {
            return Err(AppError::integrity(format!(
                "Parent chain above '{id}' exceeded {TRAVERSAL_GUARD} links; the tree is likely cyclic"
            )));
        }
        current = find_asset(nodes, parent_id);
    }
    Ok(depth)
}

/// Check that placing a node under `parent` stays within the nesting limit.
///
/// Returns the depth the new child would occupy (0 for a root placement).
pub fn check_nesting_depth(nodes: &[AssetNode], parent: Option<&AssetId>) -> AppResult<u32> {
    let Some(parent_id) = parent else {
        return Ok(0);
    };
    let depth = asset_depth(nodes, parent_id)? + 1;
    if depth >= MAX_NESTING_DEPTH {
        return Err(AppError::validation(format!(
            "Maximum nesting depth ({MAX_NESTING_DEPTH} levels) would be exceeded"
        )));
    }
    Ok(depth)
}

/// Check that re-parenting `asset_id` under `new_parent` creates no cycle.
///
/// Detaching to root is always safe; otherwise the new parent may be
/// neither the asset itself nor any of its descendants. This check runs
/// before every `parent_id` change; it is the only cycle prevention in
/// the system.
pub fn check_circular_reference(
    nodes: &[AssetNode],
    asset_id: &AssetId,
    new_parent: Option<&AssetId>,
) -> AppResult<()> {
    let Some(parent_id) = new_parent else {
        return Ok(());
    };
    if parent_id == asset_id {
        return Err(AppError::validation("Cannot set folder as its own parent"));
    }
    if all_descendants(nodes, asset_id)?
        .iter()
        .any(|descendant| &descendant.id == parent_id)
    {
        return Err(AppError::validation(
            "Cannot set parent to a descendant folder (would create circular reference)",
        ));
    }
    Ok(())
}

/// Validate a move and produce the re-parented node.
///
/// Runs the circular-reference check, then the depth check,
/// short-circuiting on the first failure. The input collection is not
/// touched; the caller persists the returned node.
pub fn move_asset(
    nodes: &[AssetNode],
    asset_id: &AssetId,
    new_parent: Option<AssetId>,
) -> AppResult<AssetNode> {
    let asset = find_asset(nodes, asset_id).ok_or_else(|| AppError::not_found("Asset not found"))?;

    check_circular_reference(nodes, asset_id, new_parent.as_ref())?;
    check_nesting_depth(nodes, new_parent.as_ref())?;

    debug!(
        asset_id = %asset_id,
        new_parent = new_parent.as_ref().map(|id| id.as_str()).unwrap_or("<root>"),
        "Asset move validated"
    );

    Ok(asset.with_parent(new_parent))
}

/// Validate a folder (or asset) display name.
///
/// Rejects names that are empty after trimming, longer than
/// [`MAX_NAME_LENGTH`] characters, or containing any of
/// [`FORBIDDEN_NAME_CHARS`].
pub fn validate_folder_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Folder name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "Folder name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    if name.contains(&FORBIDDEN_NAME_CHARS[..]) {
        return Err(AppError::validation(
            r#"Folder name cannot contain any of < > : " / \ | ? *"#,
        ));
    }
    Ok(())
}

/// Validate a rename and produce the renamed node.
///
/// Same contract as [`move_asset`]: pure, caller persists the result.
pub fn rename_asset(nodes: &[AssetNode], asset_id: &AssetId, new_name: &str) -> AppResult<AssetNode> {
    validate_folder_name(new_name)?;
    let asset = find_asset(nodes, asset_id).ok_or_else(|| AppError::not_found("Asset not found"))?;

    debug!(asset_id = %asset_id, new_name, "Asset rename validated");

    Ok(AssetNode {
        name: new_name.to_string(),
        ..asset.clone()
    })
}
