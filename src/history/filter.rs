//! Extension-based ignore filtering for history entries

use std::path::Path;

use serde::Deserialize;

/// Extensions skipped by default: extensionless paths (most often
/// folders) and Affinity Designer working files.
pub const DEFAULT_IGNORED_EXTENSIONS: &[&str] = &["", ".afdesign"];

/// A set of file extensions excluded from history tracking.
///
/// Extensions are held lowercase with their leading dot; the empty
/// string stands for paths with no extension at all. Matching is
/// case-insensitive against the final `.ext` component of the path.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct ExtensionFilter {
    ignored: Vec<String>,
}

impl ExtensionFilter {
    /// Create a filter from a list of extensions.
    ///
    /// Entries are normalized: lowercased, and given a leading dot when
    /// a non-empty entry lacks one (so `"png"` and `".png"` are
    /// equivalent).
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ignored = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref().to_lowercase();
                if ext.is_empty() || ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .collect();
        Self { ignored }
    }

    /// An empty filter that ignores nothing.
    #[must_use]
    pub fn none() -> Self {
        Self { ignored: Vec::new() }
    }

    /// Whether `path` should be excluded from the history.
    #[must_use]
    pub fn ignores(&self, path: &str) -> bool {
        let ext = extension_of(path);
        self.ignored.iter().any(|ignored| *ignored == ext)
    }

    /// The number of ignored extensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ignored.len()
    }

    /// Whether the filter ignores nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty()
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_EXTENSIONS)
    }
}

impl From<Vec<String>> for ExtensionFilter {
    fn from(extensions: Vec<String>) -> Self {
        Self::new(extensions)
    }
}

/// Extract the lowercased `.ext` component of a path, or `""` when the
/// path has no extension (folders, extensionless files).
fn extension_of(path: &str) -> String {
    Path::new(path)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}
