//! # studiohub-gallery
//!
//! The hierarchical asset tree engine shared by the Lightroom and Google
//! Drive asset browsers: tree construction from a flat parent-pointer
//! list, mutation-time integrity validation, breadcrumb navigation, and
//! recursive search/aggregation.
//!
//! Every function here is a pure synchronous computation over an
//! externally supplied `&[AssetNode]` slice: no I/O, no interior state,
//! no caching. Mutating operations ([`validate::move_asset`],
//! [`validate::rename_asset`]) return a fresh node; persisting it is the
//! caller's job.
//!
//! Acyclicity is enforced only at the mutation boundary
//! ([`validate::check_circular_reference`]). Read-time traversal trusts
//! that invariant, but every walk carries a bounded-iteration guard of
//! [`TRAVERSAL_GUARD`] steps so that externally corrupted data surfaces
//! as an `Integrity` error instead of unbounded recursion.

pub mod navigate;
pub mod search;
pub mod tree;
pub mod validate;

use studiohub_core::types::AssetId;
use studiohub_entity::AssetNode;

/// Maximum folder nesting depth. A root sits at depth 0; an operation
/// that would place a node at depth >= this limit is rejected.
pub const MAX_NESTING_DEPTH: u32 = 10;

/// Upper bound on parent-chain walks and recursive descents. Twice the
/// nesting limit, so validated data never comes close; only a corrupted
/// cyclic graph can hit it.
pub const TRAVERSAL_GUARD: u32 = MAX_NESTING_DEPTH * 2;

/// Look up an asset by id in the flat collection.
pub fn find_asset<'a>(nodes: &'a [AssetNode], id: &AssetId) -> Option<&'a AssetNode> {
    nodes.iter().find(|node| &node.id == id)
}
