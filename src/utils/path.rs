//! Path utilities

use std::path::Path;

/// Normalize path separators to forward slashes (asset pipelines report
/// paths with forward slashes regardless of platform)
pub fn normalize_path<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Short label for a history entry: `parentdir/filename`
///
/// Falls back to the bare filename for entries at the root, and to the
/// raw path when there is no filename component at all.
pub fn display_label<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    let Some(file) = path.file_name() else {
        return normalize_path(path);
    };
    let file = file.to_string_lossy();

    match path.parent().and_then(Path::file_name) {
        Some(dir) => format!("{}/{}", dir.to_string_lossy(), file),
        None => file.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_nested() {
        assert_eq!(display_label("Assets/Textures/hero.png"), "Textures/hero.png");
        assert_eq!(display_label("Assets/readme.txt"), "Assets/readme.txt");
    }

    #[test]
    fn test_display_label_root() {
        assert_eq!(display_label("standalone.png"), "standalone.png");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("Assets\\Models\\tree.fbx"), "Assets/Models/tree.fbx");
        assert_eq!(normalize_path("Assets/Models/tree.fbx"), "Assets/Models/tree.fbx");
    }
}
