//! Bounded most-recent-first history of asset paths
//!
//! The store keeps at most `capacity` entries, deduplicated by exact
//! string equality. Re-adding a known path promotes it to the front;
//! paths whose extension matches the ignore filter are skipped
//! silently. Entries whose backing file no longer resolves are pruned
//! lazily, driven by the injected [`AssetDatabase`].
//!
//! ## Usage
//!
//! ```
//! use import_history::history::ImportHistory;
//!
//! let mut history = ImportHistory::new();
//! history.add("Assets/Textures/hero.png");
//! history.add("Assets/Models/tree.fbx");
//! history.add("Assets/Textures/hero.png"); // promoted, not duplicated
//!
//! let entries: Vec<_> = history.iter().collect();
//! assert_eq!(entries, ["Assets/Textures/hero.png", "Assets/Models/tree.fbx"]);
//! ```

pub mod filter;

use std::collections::VecDeque;

use crate::config::HistorySettings;
use crate::host::AssetDatabase;

pub use filter::{DEFAULT_IGNORED_EXTENSIONS, ExtensionFilter};

/// Default maximum number of history entries
pub const DEFAULT_CAPACITY: usize = 32;

/// A capacity-bounded, deduplicated list of asset paths, most recent
/// first.
///
/// Created empty; never persisted. All mutations are infallible —
/// ignored or unknown paths are silent no-ops.
#[derive(Debug, Clone)]
pub struct ImportHistory {
    /// Entries, most recent at the front
    entries: VecDeque<String>,
    /// Maximum number of entries to retain
    capacity: usize,
    /// Extensions excluded from tracking
    filter: ExtensionFilter,
}

impl ImportHistory {
    /// Create an empty history with the default capacity and ignore set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty history with a custom capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
            filter: ExtensionFilter::default(),
        }
    }

    /// Create an empty history configured from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &HistorySettings) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: settings.capacity,
            filter: settings.filter(),
        }
    }

    /// Replace the ignore filter.
    pub fn set_filter(&mut self, filter: ExtensionFilter) {
        self.filter = filter;
    }

    /// Record `path` as the most recent entry.
    ///
    /// Skipped silently when the path's extension is in the ignore set.
    /// Any existing equal entry is removed first, so the path appears
    /// exactly once, at the front. The tail is truncated to capacity.
    pub fn add(&mut self, path: &str) {
        if self.filter.ignores(path) {
            tracing::debug!("ignoring by extension: {path}");
            return;
        }

        self.entries.retain(|p| p != path);
        self.entries.push_front(path.to_string());
        self.entries.truncate(self.capacity);

        tracing::debug!("added to history: {path}");
    }

    /// Remove all entries equal to `path`; no-op if absent.
    pub fn remove(&mut self, path: &str) {
        let before = self.entries.len();
        self.entries.retain(|p| p != path);

        if self.entries.len() != before {
            tracing::debug!("removed from history: {path}");
        }
    }

    /// Empty the list.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drop entries whose backing file no longer resolves.
    ///
    /// Returns the number of entries pruned.
    pub fn prune_unresolved(&mut self, db: &dyn AssetDatabase) -> usize {
        let before = self.entries.len();
        self.entries.retain(|p| db.resolves(p));

        let pruned = before - self.entries.len();
        if pruned > 0 {
            tracing::debug!("pruned {pruned} unresolved entries");
        }
        pruned
    }

    /// Iterate live entries for display, most recent first.
    ///
    /// Performs the lazy prune first, so stale entries never reach the
    /// caller.
    pub fn resolved(&mut self, db: &dyn AssetDatabase) -> impl Iterator<Item = &str> {
        self.prune_unresolved(db);
        self.entries.iter().map(String::as_str)
    }

    /// Iterate all entries, most recent first, without pruning.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// The number of entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The maximum number of entries retained.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether `path` is currently in the history.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|p| p == path)
    }
}

impl Default for ImportHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ImportHistory {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::collections::vec_deque::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(String::as_str as fn(&String) -> &str)
    }
}
