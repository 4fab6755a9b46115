use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "res-squash",
    about = "Shrink PNG image resources in a project tree by converting them to WebP",
    long_about = "res-squash walks a project directory, finds PNG files living under a 'res' \
                  folder (skipping anything under 'build' output), quantizes each one with \
                  pngquant and re-encodes it with cwebp. The original PNG is replaced by the \
                  WebP file only when the result is actually smaller; otherwise it is left \
                  untouched. Both pngquant and cwebp must be installed and on PATH.",
    version,
    after_help = "EXAMPLES:\n  \
    res-squash ./my-project\n  \
    res-squash -v ./my-project\n  \
    res-squash --png-quality 90 --webp-quality 80 ./my-project"
)]
pub struct Args {
    #[arg(help = "Root of the project tree to scan for PNG resources")]
    pub dir: PathBuf,

    #[arg(
        short,
        long,
        help = "Print a line for every file processed",
        conflicts_with = "quiet"
    )]
    pub verbose: bool,

    #[arg(
        short,
        long,
        help = "Suppress informational output (the final report still prints)"
    )]
    pub quiet: bool,

    #[arg(
        long,
        help = "pngquant quality target (1-100, default: 95)",
        long_help = "Quality target passed to pngquant for the palette quantization stage. \
                     Lower values quantize more aggressively."
    )]
    pub png_quality: Option<u8>,

    #[arg(
        long,
        help = "cwebp quality target (1-100, default: 90)",
        long_help = "Quality target passed to cwebp for the WebP re-encode stage."
    )]
    pub webp_quality: Option<u8>,
}
