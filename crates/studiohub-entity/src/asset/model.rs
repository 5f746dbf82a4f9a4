//! Asset entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use studiohub_core::types::AssetId;

/// Discriminator for the two kinds of library entries.
///
/// Only folders may be the target of another node's `parent_id`; files are
/// always leaves of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// A Lightroom image or Google Drive file.
    File,
    /// A folder that may contain other assets.
    Folder,
}

impl AssetKind {
    /// Wire/display name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

/// A normalized asset in a project's library.
///
/// `parent_id` is the strict root sentinel: `None` means root-level,
/// `Some(id)` means child of the folder with that id. The legacy
/// absent-vs-null ambiguity of the wire format never reaches this type;
/// it is resolved once by [`normalize`](crate::asset::record::normalize).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetNode {
    /// Unique asset identifier, stable for the node's lifetime.
    pub id: AssetId,
    /// Display name.
    #[serde(rename = "asset_name")]
    pub name: String,
    /// Whether this entry is a file or a folder.
    #[serde(rename = "asset_type")]
    pub kind: AssetKind,
    /// Containing folder (`None` for root-level assets).
    pub parent_id: Option<AssetId>,
    /// Preview image URL, if one was generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    /// Link to the asset in the upstream system (Lightroom / Drive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// Free-form color tag used by the dashboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_tag: Option<String>,
    /// When the asset was added to the library.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl AssetNode {
    /// Check if this is a root-level asset (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if this asset is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == AssetKind::Folder
    }

    /// Return a copy of this node re-parented under `new_parent`.
    ///
    /// The receiver is left untouched; persisting the returned node is the
    /// caller's responsibility.
    pub fn with_parent(&self, new_parent: Option<AssetId>) -> Self {
        Self {
            parent_id: new_parent,
            ..self.clone()
        }
    }
}
