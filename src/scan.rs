use crate::constants::{BACKUP_SUFFIX, BUILD_DIR, COMPRESSED_SUFFIX, PNG_EXT, RES_DIR};
use crate::error::Result;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Walks `root` and returns every PNG resource file eligible for compression,
/// sorted for deterministic processing order.
///
/// A file qualifies when it sits under a `res` directory, is not under any
/// `build` directory, has the `png` extension, and is not one of our own
/// transient `_BACKUP`/`_COMPRESSED` artifacts left over from an interrupted
/// run.
pub fn find_png_resources(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() && is_png_resource(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Purely lexical check of the resource-file naming convention.
pub fn is_png_resource(path: &Path) -> bool {
    if path.extension() != Some(OsStr::new(PNG_EXT)) {
        return false;
    }

    let stem = match path.file_stem().and_then(OsStr::to_str) {
        Some(stem) => stem,
        None => return false,
    };
    if stem.ends_with(BACKUP_SUFFIX) || stem.ends_with(COMPRESSED_SUFFIX) {
        return false;
    }

    // The markers apply to directory segments only, not the file name itself.
    let dir = match path.parent() {
        Some(dir) => dir,
        None => return false,
    };
    let mut under_res = false;
    for component in dir.components() {
        if let Component::Normal(name) = component {
            if name == OsStr::new(BUILD_DIR) {
                return false;
            }
            if name == OsStr::new(RES_DIR) {
                under_res = true;
            }
        }
    }
    under_res
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_is_png_resource_accepts_res_png() {
        assert!(is_png_resource(Path::new("project/res/icon.png")));
        assert!(is_png_resource(Path::new("project/app/res/drawable/icon.png")));
    }

    #[test]
    fn test_is_png_resource_rejects_build_output() {
        assert!(!is_png_resource(Path::new("project/build/res/icon.png")));
        assert!(!is_png_resource(Path::new("project/res/build/icon.png")));
        assert!(!is_png_resource(Path::new("build/a/b/res/deep/icon.png")));
    }

    #[test]
    fn test_is_png_resource_requires_res_segment() {
        assert!(!is_png_resource(Path::new("project/assets/icon.png")));
        assert!(!is_png_resource(Path::new("icon.png")));
        // A file named res.png outside a res directory does not qualify.
        assert!(!is_png_resource(Path::new("project/assets/res.png")));
    }

    #[test]
    fn test_is_png_resource_rejects_transient_artifacts() {
        assert!(!is_png_resource(Path::new("project/res/icon_BACKUP.png")));
        assert!(!is_png_resource(Path::new("project/res/icon_COMPRESSED.png")));
    }

    #[test]
    fn test_is_png_resource_rejects_other_extensions() {
        assert!(!is_png_resource(Path::new("project/res/icon.webp")));
        assert!(!is_png_resource(Path::new("project/res/icon.txt")));
        assert!(!is_png_resource(Path::new("project/res/icon")));
        // Extension matching is exact, as in the original tooling convention.
        assert!(!is_png_resource(Path::new("project/res/icon.PNG")));
    }

    #[test]
    fn test_find_png_resources_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        for dir in ["res/sub", "build/res", "assets"] {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
        for file in [
            "res/b.png",
            "res/a.png",
            "res/sub/c.png",
            "res/a_BACKUP.png",
            "res/a_COMPRESSED.png",
            "res/notes.txt",
            "build/res/ignored.png",
            "assets/elsewhere.png",
        ] {
            File::create(root.join(file)).unwrap();
        }

        let files = find_png_resources(root).unwrap();
        let expected: Vec<_> = ["res/a.png", "res/b.png", "res/sub/c.png"]
            .iter()
            .map(|f| root.join(f))
            .collect();
        assert_eq!(files, expected);
    }

    #[test]
    fn test_find_png_resources_empty_tree() {
        let temp_dir = TempDir::new().unwrap();
        let files = find_png_resources(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }
}
