//! Error types for `import-history`

use thiserror::Error;

/// The error type for `import-history` operations.
///
/// History mutations themselves never fail (ignored or unknown paths
/// are silent no-ops); errors only arise at the settings and host-port
/// seams.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file could not be parsed.
    #[error("settings parse error: {0}")]
    SettingsParse(#[from] toml::de::Error),

    /// A host-side action (open or reveal) failed.
    #[error("{action} failed for '{path}': {message}")]
    HostAction {
        /// The action that failed ("open" or "reveal").
        action: &'static str,
        /// The entry path the action was invoked on.
        path: String,
        /// The underlying failure message.
        message: String,
    },
}

/// A specialized Result type for `import-history` operations.
pub type Result<T> = std::result::Result<T, Error>;
