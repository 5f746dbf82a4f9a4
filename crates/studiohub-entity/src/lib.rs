//! # studiohub-entity
//!
//! Domain entity models for the StudioHub asset library. Every struct in
//! this crate represents a persisted value object from the remote
//! key-value store. All entities derive `Debug`, `Clone`, `Serialize`,
//! and `Deserialize`.

pub mod asset;

pub use asset::{AssetKind, AssetNode, AssetRecord, normalize};
