//! Tunable knobs and the filesystem naming convention the tool relies on.

pub const PNGQUANT_BIN: &str = "pngquant";
pub const CWEBP_BIN: &str = "cwebp";

/// PNG resources must live under a directory with this name.
pub const RES_DIR: &str = "res";
/// Anything under a directory with this name is build output and is skipped.
pub const BUILD_DIR: &str = "build";

pub const PNG_EXT: &str = "png";
pub const WEBP_EXT: &str = "webp";

/// Suffix (before the extension) of the transient copy of the original.
pub const BACKUP_SUFFIX: &str = "_BACKUP";
/// Suffix (before the extension) of the quantized intermediate.
pub const COMPRESSED_SUFFIX: &str = "_COMPRESSED";

pub const DEFAULT_PNG_QUALITY: u8 = 95;
pub const DEFAULT_WEBP_QUALITY: u8 = 90;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

pub const PROGRESS_TEMPLATE: &str = "Progress: {pos} of {len} files processed ({percent}%)";
