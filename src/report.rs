use crate::pipeline::{FileRecord, Outcome};
use crate::utils::format_size;

/// Aggregate totals over one run, derived from the per-file records the
/// driver collected. Nothing here is stored independently; it is recomputed
/// at report time.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub compressed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub original_bytes: u64,
    pub compressed_bytes: u64,
}

impl RunSummary {
    pub fn from_records(records: &[FileRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.processed += 1;
            match record.outcome {
                Outcome::Compressed => summary.compressed += 1,
                Outcome::Skipped(_) => summary.skipped += 1,
                Outcome::Error(_) => summary.errors += 1,
            }
            summary.original_bytes += record.original_size;
            summary.compressed_bytes += record.compressed_size;
        }
        summary
    }

    pub fn saved_bytes(&self) -> i64 {
        self.original_bytes as i64 - self.compressed_bytes as i64
    }

    /// Size delta as a percentage of the original total: negative when space
    /// was saved, 0.00 on an empty (or zero-byte) run.
    pub fn delta_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (self.compressed_bytes as f64 - self.original_bytes as f64) / self.original_bytes as f64
            * 100.0
    }
}

/// Prints the final report. Unlike informational output this always prints,
/// even in quiet mode.
pub fn print_summary(summary: &RunSummary) {
    println!();
    println!("📊 Result:");
    println!("  {} files processed", summary.processed);
    println!("  {} files compressed", summary.compressed);
    println!("  {} files skipped", summary.skipped);
    println!("  {} files errors during compression", summary.errors);
    println!();
    println!(
        "💾 {} space saved ({:.2}%)",
        format_size(summary.saved_bytes()),
        summary.delta_percent()
    );
}
