/// Formats a byte count as a human-readable string, scaling by 1024 through
/// the binary unit ladder with one decimal place. The sign is preserved so
/// size deltas format naturally.
///
/// # Example
/// ```
/// use res_squash::format_size;
///
/// assert_eq!(format_size(1023), "1023.0B");
/// assert_eq!(format_size(1024), "1.0KiB");
/// ```
pub fn format_size(bytes: i64) -> String {
    let mut num = bytes as f64;
    for unit in ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi"] {
        if num.abs() < 1024.0 {
            return format!("{num:.1}{unit}B");
        }
        num /= 1024.0;
    }
    format!("{num:.1}YiB")
}
