//! The per-file compression pipeline: backup, quantize with pngquant,
//! re-encode with cwebp, then keep whichever result is smaller.

use crate::constants::{
    BACKUP_SUFFIX, COMPRESSED_SUFFIX, CWEBP_BIN, DEFAULT_PNG_QUALITY, DEFAULT_WEBP_QUALITY,
    MAX_QUALITY, MIN_QUALITY, PNGQUANT_BIN, WEBP_EXT,
};
use crate::error::{Result, SquashError};
use crate::utils::format_size;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Debug, Clone)]
pub struct SquashOptions {
    pub png_quality: u8,
    pub webp_quality: u8,
}

impl SquashOptions {
    pub fn new(png_quality: Option<u8>, webp_quality: Option<u8>) -> Result<Self> {
        let png_quality = png_quality.unwrap_or(DEFAULT_PNG_QUALITY);
        let webp_quality = webp_quality.unwrap_or(DEFAULT_WEBP_QUALITY);
        for quality in [png_quality, webp_quality] {
            if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
                return Err(SquashError::InvalidQuality(quality));
            }
        }
        Ok(Self {
            png_quality,
            webp_quality,
        })
    }
}

impl Default for SquashOptions {
    fn default() -> Self {
        Self {
            png_quality: DEFAULT_PNG_QUALITY,
            webp_quality: DEFAULT_WEBP_QUALITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// pngquant's output was not smaller than the original PNG.
    QuantizedNotSmaller,
    /// The final WebP was not smaller than the original PNG.
    WebpNotSmaller,
}

/// Outcome of one file's trip through the pipeline. The error cause is kept
/// so verbose logging and tests can inspect what went wrong.
#[derive(Debug)]
pub enum Outcome {
    Compressed,
    Skipped(SkipReason),
    Error(SquashError),
}

#[derive(Debug)]
pub struct FileRecord {
    pub path: PathBuf,
    pub outcome: Outcome,
    pub original_size: u64,
    pub compressed_size: u64,
}

/// The transient and final artifact paths derived from one original PNG.
struct StagePaths {
    backup: PathBuf,
    quantized: PathBuf,
    webp: PathBuf,
}

fn stage_paths(original: &Path) -> Result<StagePaths> {
    let unusable = || SquashError::UnusableFileName(original.to_path_buf());
    let dir = original.parent().ok_or_else(unusable)?;
    let stem = original
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(unusable)?;
    let ext = original
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(unusable)?;
    Ok(StagePaths {
        backup: dir.join(format!("{stem}{BACKUP_SUFFIX}.{ext}")),
        quantized: dir.join(format!("{stem}{COMPRESSED_SUFFIX}.{ext}")),
        webp: dir.join(format!("{stem}.{WEBP_EXT}")),
    })
}

/// Removes a stale artifact from a previous run. Missing files are fine;
/// anything else (permissions, etc.) is a real failure.
fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Best-effort deletion once the outcome is already decided.
fn cleanup(paths: &[&Path]) {
    for path in paths {
        let _ = fs::remove_file(path);
    }
}

enum StageResult {
    Compressed { quantized_size: u64 },
    Skipped(SkipReason),
}

/// Runs the whole pipeline for one PNG file and returns its record. Never
/// fails the run: any error is captured in the record and the transient
/// artifacts are cleaned up best-effort, leaving the original in place.
pub fn squash_file(path: &Path, options: &SquashOptions) -> FileRecord {
    let original_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    let result = stage_paths(path).and_then(|stage| {
        run_stages(path, original_size, &stage, options).map_err(|e| {
            cleanup(&[&stage.quantized, &stage.backup, &stage.webp]);
            e
        })
    });

    match result {
        Ok(StageResult::Compressed { quantized_size }) => FileRecord {
            path: path.to_path_buf(),
            outcome: Outcome::Compressed,
            original_size,
            // The quantized intermediate's size is the recorded metric, not
            // the final WebP size. Kept for report compatibility with the
            // original tooling.
            compressed_size: quantized_size,
        },
        Ok(StageResult::Skipped(reason)) => FileRecord {
            path: path.to_path_buf(),
            outcome: Outcome::Skipped(reason),
            original_size,
            compressed_size: original_size,
        },
        Err(e) => {
            crate::verbose!("{} ERROR: {}", path.display(), e);
            FileRecord {
                path: path.to_path_buf(),
                outcome: Outcome::Error(e),
                original_size,
                compressed_size: original_size,
            }
        }
    }
}

fn run_stages(
    original: &Path,
    original_size: u64,
    stage: &StagePaths,
    options: &SquashOptions,
) -> Result<StageResult> {
    remove_stale(&stage.backup)?;
    fs::copy(original, &stage.backup)?;

    remove_stale(&stage.quantized)?;
    let status = Command::new(PNGQUANT_BIN)
        .arg("--strip")
        .args(["--quality", &options.png_quality.to_string()])
        .arg("--output")
        .arg(&stage.quantized)
        .arg(original)
        .arg("--force")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    // The tool's exit status is advisory; what matters is whether the
    // output file actually appeared.
    if !stage.quantized.exists() {
        return Err(SquashError::ToolOutputMissing(
            PNGQUANT_BIN.to_string(),
            status,
        ));
    }

    let quantized_size = fs::metadata(&stage.quantized)?.len();
    if quantized_size >= original_size {
        cleanup(&[&stage.quantized, &stage.backup]);
        crate::verbose!(
            "{} skipped. Quantized size is not smaller than the original png",
            original.display()
        );
        return Ok(StageResult::Skipped(SkipReason::QuantizedNotSmaller));
    }

    let status = Command::new(CWEBP_BIN)
        .args(["-q", &options.webp_quality.to_string()])
        .arg(&stage.quantized)
        .arg("-o")
        .arg(&stage.webp)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    if !stage.webp.exists() {
        return Err(SquashError::ToolOutputMissing(CWEBP_BIN.to_string(), status));
    }

    let webp_size = fs::metadata(&stage.webp)?.len();
    if webp_size < original_size {
        cleanup(&[&stage.quantized, &stage.backup]);
        fs::remove_file(original)?;
        crate::verbose!(
            "{} compressed. Original size was {}. New size is {}. Saved {} ({:.2}%)",
            original.display(),
            format_size(original_size as i64),
            format_size(webp_size as i64),
            format_size(original_size as i64 - webp_size as i64),
            (original_size - webp_size) as f64 / original_size as f64 * 100.0
        );
        Ok(StageResult::Compressed { quantized_size })
    } else {
        cleanup(&[&stage.quantized, &stage.webp, &stage.backup]);
        crate::verbose!(
            "{} skipped. Result webp size is not smaller than the original png",
            original.display()
        );
        Ok(StageResult::Skipped(SkipReason::WebpNotSmaller))
    }
}
