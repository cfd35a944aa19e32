//! Notification adapter for asset-pipeline refreshes
//!
//! The host asset pipeline reports each refresh as four path batches:
//! imported, deleted, moved-to, and moved-from. A [`RefreshBatch`]
//! carries one such cycle and replays it onto history stores in a
//! fixed order: removals (deleted + moved-from) first, then additions
//! (imported + moved-to). Additions dedupe and promote to the front,
//! so a path that was both deleted and re-imported within one refresh
//! ends up present, at the front.

use crate::history::ImportHistory;

/// One batch notification cycle from the host asset pipeline.
#[derive(Debug, Clone, Default)]
pub struct RefreshBatch {
    /// Paths imported or re-imported during this refresh
    pub imported: Vec<String>,
    /// Paths deleted during this refresh
    pub deleted: Vec<String>,
    /// Destination paths of moved assets
    pub moved_to: Vec<String>,
    /// Source paths of moved assets
    pub moved_from: Vec<String>,
}

impl RefreshBatch {
    /// An empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add imported paths to the batch.
    #[must_use]
    pub fn imported<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imported.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add deleted paths to the batch.
    #[must_use]
    pub fn deleted<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deleted.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add a move to the batch (source path + destination path).
    #[must_use]
    pub fn moved<S, D>(mut self, from: S, to: D) -> Self
    where
        S: Into<String>,
        D: Into<String>,
    {
        self.moved_from.push(from.into());
        self.moved_to.push(to.into());
        self
    }

    /// Whether the batch carries no paths at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.imported.is_empty()
            && self.deleted.is_empty()
            && self.moved_to.is_empty()
            && self.moved_from.is_empty()
    }

    /// Replay this refresh onto one history store.
    ///
    /// Removals happen before additions, so a path that reappears in
    /// the same refresh survives at the front.
    pub fn apply(&self, history: &mut ImportHistory) {
        for path in self.deleted.iter().chain(&self.moved_from) {
            history.remove(path);
        }
        for path in self.imported.iter().chain(&self.moved_to) {
            history.add(path);
        }

        tracing::debug!(
            "refresh applied: {} imported, {} deleted, {} moved",
            self.imported.len(),
            self.deleted.len(),
            self.moved_to.len(),
        );
    }

    /// Replay this refresh onto every open history instance.
    pub fn apply_all<'a, I>(&self, histories: I)
    where
        I: IntoIterator<Item = &'a mut ImportHistory>,
    {
        for history in histories {
            self.apply(history);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn collect(history: &ImportHistory) -> Vec<&str> {
        history.iter().collect()
    }

    #[test]
    fn test_imports_land_most_recent_first() {
        let mut history = ImportHistory::new();
        RefreshBatch::new()
            .imported(["a.png", "b.png"])
            .apply(&mut history);

        assert_eq!(collect(&history), ["b.png", "a.png"]);
    }

    #[test]
    fn test_deletes_before_imports_within_one_refresh() {
        let mut history = ImportHistory::new();
        history.add("a.png");

        // Same path deleted and re-imported in one cycle: removal runs
        // first, so the import wins.
        RefreshBatch::new()
            .deleted(["a.png"])
            .imported(["a.png"])
            .apply(&mut history);

        assert_eq!(collect(&history), ["a.png"]);
    }

    #[test]
    fn test_move_drops_source_and_tracks_destination() {
        let mut history = ImportHistory::new();
        history.add("old/name.png");

        RefreshBatch::new()
            .moved("old/name.png", "new/name.png")
            .apply(&mut history);

        assert_eq!(collect(&history), ["new/name.png"]);
    }

    #[test]
    fn test_empty_batch_is_a_no_op() {
        let mut history = ImportHistory::new();
        history.add("a.png");

        let batch = RefreshBatch::new();
        assert!(batch.is_empty());
        batch.apply(&mut history);

        assert_eq!(collect(&history), ["a.png"]);
    }

    #[test]
    fn test_apply_all_updates_every_instance() {
        let mut first = ImportHistory::new();
        let mut second = ImportHistory::with_capacity(4);
        first.add("stale.png");
        second.add("stale.png");

        let batch = RefreshBatch::new()
            .deleted(["stale.png"])
            .imported(["fresh.png"]);
        batch.apply_all([&mut first, &mut second]);

        assert_eq!(collect(&first), ["fresh.png"]);
        assert_eq!(collect(&second), ["fresh.png"]);
    }

    #[test]
    fn test_ignored_extensions_skip_the_whole_pipeline() {
        let mut history = ImportHistory::new();
        RefreshBatch::new()
            .imported(["Assets/NewFolder", "Assets/hero.png"])
            .apply(&mut history);

        assert_eq!(collect(&history), ["Assets/hero.png"]);
    }
}
