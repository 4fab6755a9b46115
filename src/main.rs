use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use res_squash::cli::Args;
use res_squash::constants::PROGRESS_TEMPLATE;
use res_squash::error::{Result, SquashError};
use res_squash::pipeline::{squash_file, SquashOptions};
use res_squash::report::{print_summary, RunSummary};
use res_squash::scan::find_png_resources;
use res_squash::tools::ensure_tools_exist;
use res_squash::utils::format_size;
use res_squash::{error, info, logger};
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let options = SquashOptions::new(args.png_quality, args.webp_quality)?;

    // Fatal checks happen up front, before touching any file.
    ensure_tools_exist()?;
    if !args.dir.is_dir() {
        return Err(SquashError::InvalidRoot(args.dir.clone()));
    }

    let files = find_png_resources(&args.dir)?;
    let total_size: u64 = files
        .iter()
        .filter_map(|file| fs::metadata(file).ok())
        .map(|m| m.len())
        .sum();

    info!(
        "{} png image resource files found. Total size is {}",
        files.len(),
        format_size(total_size as i64)
    );
    info!(" ");

    let progress = progress_bar(files.len() as u64);
    let mut records = Vec::with_capacity(files.len());
    for file in &files {
        records.push(squash_file(file, &options));
        progress.inc(1);
    }
    progress.finish_and_clear();

    print_summary(&RunSummary::from_records(&records));
    Ok(())
}

fn progress_bar(total: u64) -> ProgressBar {
    if logger::is_quiet() {
        return ProgressBar::hidden();
    }
    let progress = ProgressBar::new(total);
    progress.set_style(
        ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .expect("Invalid progress template"),
    );
    progress
}
