use crate::constants::{CWEBP_BIN, PNGQUANT_BIN};
use crate::error::{Result, SquashError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves `name` against the PATH environment variable.
// TODO: append .exe candidates for Windows lookups
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Checks that both external compression tools are installed, before any
/// file processing starts.
pub fn ensure_tools_exist() -> Result<()> {
    for tool in [PNGQUANT_BIN, CWEBP_BIN] {
        if find_executable(tool).is_none() {
            return Err(SquashError::ToolNotFound(tool.to_string()));
        }
    }
    Ok(())
}
