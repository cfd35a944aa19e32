//! # import-history
//!
//! A bounded, deduplicated, most-recently-imported history of asset
//! paths for editor-integrated tooling.
//!
//! The crate has two collaborating pieces:
//!
//! - [`history::ImportHistory`] — a capacity-bounded, most-recent-first
//!   list of asset paths with extension-based ignore filtering and
//!   lazy pruning of entries that no longer resolve.
//! - [`pipeline::RefreshBatch`] — one asset-pipeline refresh cycle
//!   (imported / deleted / moved paths), replayed onto any number of
//!   open history instances in a fixed removals-then-additions order.
//!
//! Host specifics are injected through the [`host`] trait seams; a
//! plain filesystem implementation ([`host::DiskHost`]) is included.
//!
//! ## Quick Start
//!
//! ```
//! use import_history::prelude::*;
//!
//! let mut history = ImportHistory::new();
//!
//! // One refresh cycle from the asset pipeline
//! RefreshBatch::new()
//!     .imported(["Assets/Textures/hero.png", "Assets/Models/tree.fbx"])
//!     .apply(&mut history);
//!
//! // Most recent first
//! assert_eq!(history.iter().next(), Some("Assets/Models/tree.fbx"));
//! ```
//!
//! ### Loading settings
//!
//! ```
//! use import_history::prelude::*;
//!
//! let settings = HistorySettings::parse(r#"
//!     capacity = 16
//!     ignored_extensions = ["", ".afdesign", ".meta"]
//! "#)?;
//! let history = ImportHistory::from_settings(&settings);
//! assert_eq!(history.capacity(), 16);
//! # Ok::<(), import_history::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod host;
pub mod pipeline;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::HistorySettings;
    pub use crate::error::{Error, Result};
    pub use crate::history::{DEFAULT_IGNORED_EXTENSIONS, ExtensionFilter, ImportHistory};
    pub use crate::host::{AssetDatabase, DiskHost, Workstation};
    pub use crate::pipeline::RefreshBatch;
    pub use crate::utils::display_label;
}
