#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes `size` bytes of filler to `path`, creating parent directories.
pub fn write_file(path: &Path, size: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    File::create(path).unwrap().write_all(&vec![b'x'; size]).unwrap();
}

/// Creates a project fixture with one 100-byte PNG resource at `res/icon.png`.
pub fn create_project_fixture() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let png = temp_dir.path().join("res").join("icon.png");
    write_file(&png, 100);
    (temp_dir, png)
}

/// Installs a fake tool script under `dir` and returns its path. Unix only:
/// the fakes are /bin/sh scripts.
#[cfg(unix)]
pub fn install_fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A fake pngquant that writes `output_size` bytes to its `--output` path.
#[cfg(unix)]
pub fn fake_pngquant_writing(dir: &Path, output_size: usize) -> PathBuf {
    let body = format!(
        r#"out=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    --output) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
head -c {output_size} /dev/zero > "$out""#
    );
    install_fake_tool(dir, "pngquant", &body)
}

/// A fake pngquant that exits cleanly without producing any output file.
#[cfg(unix)]
pub fn fake_pngquant_silent(dir: &Path) -> PathBuf {
    install_fake_tool(dir, "pngquant", "exit 0")
}

/// A fake cwebp that writes `output_size` bytes to its `-o` path.
#[cfg(unix)]
pub fn fake_cwebp_writing(dir: &Path, output_size: usize) -> PathBuf {
    let body = format!(
        r#"out=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
head -c {output_size} /dev/zero > "$out""#
    );
    install_fake_tool(dir, "cwebp", &body)
}

/// A fake cwebp that exits cleanly without producing any output file.
#[cfg(unix)]
pub fn fake_cwebp_silent(dir: &Path) -> PathBuf {
    install_fake_tool(dir, "cwebp", "exit 0")
}

/// PATH value exposing the fake tools plus the system directories the fake
/// scripts themselves need (head, sh builtins).
pub fn tool_path(fake_dir: &Path) -> String {
    format!("{}:/usr/bin:/bin", fake_dir.display())
}
