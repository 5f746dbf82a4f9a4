//! Asset library configuration.

use serde::{Deserialize, Serialize};

/// Asset library configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Path to the JSON file holding the exported asset node array.
    #[serde(default = "default_nodes_file")]
    pub nodes_file: String,
    /// Whether to pretty-print JSON when writing the library back.
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            nodes_file: default_nodes_file(),
            pretty_json: default_true(),
        }
    }
}

fn default_nodes_file() -> String {
    "data/assets.json".to_string()
}

fn default_true() -> bool {
    true
}
