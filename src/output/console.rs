//! Console output utilities.
//!
//! Everything goes to stderr so stdout stays free for `--stdout` and
//! `--shortcode` output.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    eprintln!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", style("OK").green().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Reel Downloader                                   ║
║     Download reel videos by link                      ║
╚═══════════════════════════════════════════════════════╝
"#;
    eprintln!("{}", style(banner).cyan());
}

/// Print what is about to be downloaded.
pub fn print_post_summary(url: &str, short_code: &str, destination: &str) {
    eprintln!();
    eprintln!("{}", style("Post:").bold());
    eprintln!("  URL:         {}", url);
    eprintln!("  Short code:  {}", short_code);
    eprintln!("  Destination: {}", destination);
    eprintln!();
}
