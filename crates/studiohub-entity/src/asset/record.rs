//! Raw wire records and boundary normalization.
//!
//! Rows written before the hierarchy feature existed omit `parent_id`
//! entirely and may omit `asset_type`; rows written after it carry
//! `parent_id: null` for root-level assets. [`AssetRecord`] preserves that
//! distinction exactly as it appears on the wire, and [`normalize`]
//! collapses it once so no downstream code ever juggles two root
//! sentinels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use studiohub_core::types::AssetId;

use super::model::{AssetKind, AssetNode};

/// An asset row exactly as persisted in the key-value store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Unique asset identifier.
    pub id: AssetId,
    /// Display name.
    pub asset_name: String,
    /// File/folder discriminator; absent on legacy rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetKind>,
    /// Containing folder. Outer `None` = field absent (legacy row),
    /// `Some(None)` = explicit `null`, `Some(Some(id))` = child of `id`.
    #[serde(
        default,
        deserialize_with = "absent_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<Option<AssetId>>,
    /// Preview image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    /// Link to the asset in the upstream system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// Free-form color tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_tag: Option<String>,
    /// When the asset was added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Deserialize a field so that an explicit `null` becomes `Some(None)`
/// while a missing field stays `None` (via `#[serde(default)]`).
fn absent_or_null<'de, D>(deserializer: D) -> Result<Option<Option<AssetId>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<AssetId>::deserialize(deserializer).map(Some)
}

impl From<AssetNode> for AssetRecord {
    fn from(node: AssetNode) -> Self {
        Self {
            id: node.id,
            asset_name: node.name,
            asset_type: Some(node.kind),
            parent_id: Some(node.parent_id),
            preview_url: node.preview_url,
            external_url: node.external_url,
            color_tag: node.color_tag,
            created_at: node.created_at,
        }
    }
}

/// Normalize raw records into strict [`AssetNode`]s.
///
/// Absent and `null` `parent_id` both become `None`; a missing
/// `asset_type` defaults to [`AssetKind::File`]. Total and idempotent:
/// round-tripping the output through [`AssetRecord`] and back yields a
/// structurally identical collection.
pub fn normalize(records: Vec<AssetRecord>) -> Vec<AssetNode> {
    records
        .into_iter()
        .map(|record| AssetNode {
            id: record.id,
            name: record.asset_name,
            kind: record.asset_type.unwrap_or(AssetKind::File),
            parent_id: record.parent_id.flatten(),
            preview_url: record.preview_url,
            external_url: record.external_url,
            color_tag: record.color_tag,
            created_at: record.created_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_null_parent_both_normalize_to_root() {
        let legacy: AssetRecord =
            serde_json::from_str(r#"{"id":"x","asset_name":"old"}"#).unwrap();
        let modern: AssetRecord =
            serde_json::from_str(r#"{"id":"y","asset_name":"new","parent_id":null}"#).unwrap();
        assert_eq!(legacy.parent_id, None);
        assert_eq!(modern.parent_id, Some(None));

        let nodes = normalize(vec![legacy, modern]);
        assert!(nodes.iter().all(AssetNode::is_root));
    }

    #[test]
    fn test_missing_type_defaults_to_file() {
        let record: AssetRecord =
            serde_json::from_str(r#"{"id":"x","asset_name":"old"}"#).unwrap();
        let nodes = normalize(vec![record]);
        assert_eq!(nodes[0].kind, AssetKind::File);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = r#"[
            {"id":"x","asset_name":"old"},
            {"id":"f","asset_name":"Trip","asset_type":"folder","parent_id":null},
            {"id":"c","asset_name":"beach.jpg","asset_type":"file","parent_id":"f"}
        ]"#;
        let records: Vec<AssetRecord> = serde_json::from_str(raw).unwrap();
        let once = normalize(records);
        let twice = normalize(once.iter().cloned().map(AssetRecord::from).collect());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_parent_preserved() {
        let record: AssetRecord = serde_json::from_str(
            r#"{"id":"c","asset_name":"beach.jpg","asset_type":"file","parent_id":"f"}"#,
        )
        .unwrap();
        let nodes = normalize(vec![record]);
        assert_eq!(nodes[0].parent_id, Some(AssetId::from("f")));
    }
}
