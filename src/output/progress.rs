//! Download progress display.

use indicatif::{ProgressBar, ProgressStyle};

const DOWNLOAD_TEMPLATE: &str =
    "{msg:.bold} {spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} {bytes_per_sec} ({eta})";

/// Progress bar for one video download, labelled with the post's short code.
///
/// A `total` of zero means the size is unknown; the bar then only shows the
/// byte count.
pub fn create_download_bar(total: u64, short_code: &str) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template(DOWNLOAD_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    let bar = if total == 0 {
        ProgressBar::no_length()
    } else {
        ProgressBar::new(total)
    };
    bar.set_style(style);
    bar.set_message(short_code.to_string());
    bar
}
