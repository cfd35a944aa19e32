//! Host ports — the collaborators a host editor injects
//!
//! The history store never talks to an asset database or file system
//! directly; the host supplies implementations of these traits. A
//! plain filesystem-backed implementation ([`DiskHost`]) is provided
//! for hosts whose assets are loose files; editor shells with virtual
//! asset databases implement the traits themselves.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Platform command used to open files and directories
#[cfg(target_os = "macos")]
const OPENER: &str = "open";

/// Platform command used to open files and directories
#[cfg(not(target_os = "macos"))]
const OPENER: &str = "xdg-open";

/// The host's asset database: existence checks and the jump-to action.
pub trait AssetDatabase {
    /// Whether `path` still resolves to a live asset.
    ///
    /// Drives lazy pruning: entries that stop resolving are dropped on
    /// the next display pass.
    fn resolves(&self, path: &str) -> bool;

    /// Open the asset in its associated editor.
    fn open_asset(&self, path: &str) -> Result<()>;
}

/// The host's file-system side: revealing entries in the file browser.
pub trait Workstation {
    /// Open the platform file browser at `path`'s containing directory.
    fn reveal(&self, path: &str) -> Result<()>;
}

/// Filesystem-backed host, resolving entry paths against a root
/// directory.
///
/// Entry paths from asset pipelines are usually project-relative
/// (`Assets/Textures/hero.png`); the root anchors them to a real
/// location on disk.
#[derive(Debug, Clone)]
pub struct DiskHost {
    root: PathBuf,
}

impl DiskHost {
    /// A host resolving entries against the current working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::rooted(".")
    }

    /// A host resolving entries against `root`.
    pub fn rooted<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The absolute location of an entry on disk.
    fn locate(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl Default for DiskHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetDatabase for DiskHost {
    fn resolves(&self, path: &str) -> bool {
        self.locate(path).is_file()
    }

    fn open_asset(&self, path: &str) -> Result<()> {
        let target = self.locate(path);
        if !target.is_file() {
            return Err(Error::HostAction {
                action: "open",
                path: path.to_string(),
                message: "no such file".to_string(),
            });
        }

        tracing::debug!("opening asset: {}", target.display());
        Command::new(OPENER)
            .arg(&target)
            .spawn()
            .map_err(|e| Error::HostAction {
                action: "open",
                path: path.to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }
}

impl Workstation for DiskHost {
    fn reveal(&self, path: &str) -> Result<()> {
        let target = self.locate(path);
        let Some(parent) = target.parent().filter(|p| p.is_dir()) else {
            return Err(Error::HostAction {
                action: "reveal",
                path: path.to_string(),
                message: "containing directory not found".to_string(),
            });
        };

        tracing::debug!("revealing: {}", target.display());
        let mut command = Command::new(OPENER);
        if cfg!(target_os = "macos") && target.is_file() {
            // Finder selects the file itself
            command.arg("-R").arg(&target);
        } else {
            command.arg(parent);
        }
        command.spawn().map_err(|e| Error::HostAction {
            action: "reveal",
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_against_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hero.png"), b"png").unwrap();

        let host = DiskHost::rooted(dir.path());
        assert!(host.resolves("hero.png"));
        assert!(!host.resolves("missing.png"));
    }

    #[test]
    fn test_directories_do_not_resolve() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Textures")).unwrap();

        let host = DiskHost::rooted(dir.path());
        assert!(!host.resolves("Textures"));
    }

    #[test]
    fn test_open_missing_asset_fails() {
        let dir = tempfile::tempdir().unwrap();
        let host = DiskHost::rooted(dir.path());

        let err = host.open_asset("missing.png").unwrap_err();
        assert!(err.to_string().contains("open failed"));
    }

    #[test]
    fn test_reveal_without_containing_directory_fails() {
        let host = DiskHost::rooted("/definitely/not/a/real/root");
        assert!(host.reveal("hero.png").is_err());
    }
}
