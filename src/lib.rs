pub mod cli;
pub mod constants;
pub mod error;
pub mod logger;
pub mod pipeline;
pub mod report;
pub mod scan;
pub mod tools;
pub mod utils;

pub use error::{Result, SquashError};
pub use pipeline::{squash_file, FileRecord, Outcome, SkipReason, SquashOptions};
pub use report::{print_summary, RunSummary};
pub use scan::{find_png_resources, is_png_resource};
pub use tools::{ensure_tools_exist, find_executable};
pub use utils::format_size;
