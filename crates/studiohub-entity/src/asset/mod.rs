//! Asset domain entities.

pub mod model;
pub mod record;

pub use model::{AssetKind, AssetNode};
pub use record::{AssetRecord, normalize};
