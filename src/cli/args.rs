//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Reel downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "reel-downloader",
    version,
    about = "Download the video behind a reel link",
    long_about = "A CLI tool to download reel videos by link.\n\n\
                  Resolves the short code from the URL, queries the post metadata and \
                  saves the video to a file, or writes it to stdout."
)]
pub struct Args {
    /// Reel URL, e.g. https://www.instagram.com/reel/C3xYz_9-Lmq/
    pub url: String,

    /// Destination file or directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the video bytes to stdout instead of a file.
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Print the resolved short code and exit without downloading.
    #[arg(long, conflicts_with_all = ["output", "stdout"])]
    pub shortcode: bool,

    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Query document identifier.
    #[arg(long = "doc-id", env = "REEL_DOC_ID")]
    pub doc_id: Option<String>,

    /// Query endpoint URL.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Host accepted in post URLs (without "www." and ".com").
    #[arg(long)]
    pub host: Option<String>,

    /// Browser user agent string.
    #[arg(short = 'a', long = "user-agent", env = "REEL_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Name the file after the short code when saving into a directory.
    #[arg(long)]
    pub name_by_shortcode: bool,

    /// Hide banner and progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(doc_id) = &self.doc_id {
            config.query.doc_id = doc_id.clone();
        }

        if let Some(endpoint) = &self.endpoint {
            config.query.endpoint = endpoint.clone();
        }

        if let Some(host) = &self.host {
            config.query.host = host.clone();
        }

        if let Some(user_agent) = &self.user_agent {
            config.http.user_agent = user_agent.clone();
        }

        if let Some(timeout) = self.timeout {
            config.http.timeout_seconds = Some(timeout);
        }

        if self.name_by_shortcode {
            config.download.name_by_short_code = true;
        }

        if self.quiet || self.stdout {
            config.download.show_progress = false;
        }
    }

    /// Whether console chatter should be suppressed.
    pub fn is_quiet(&self) -> bool {
        self.quiet || self.stdout || self.shortcode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides() {
        let args = Args::parse_from([
            "reel-downloader",
            "https://www.instagram.com/reel/abc12",
            "--doc-id",
            "123",
            "--timeout",
            "15",
            "--name-by-shortcode",
            "-q",
        ]);

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.query.doc_id, "123");
        assert_eq!(config.http.timeout_seconds, Some(15));
        assert!(config.download.name_by_short_code);
        assert!(!config.download.show_progress);
        assert_eq!(config.query.host, "instagram");
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        let result = Args::try_parse_from([
            "reel-downloader",
            "https://www.instagram.com/reel/abc12",
            "--stdout",
            "-o",
            "clip.mp4",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_stdout_is_quiet() {
        let args = Args::parse_from([
            "reel-downloader",
            "https://www.instagram.com/reel/abc12",
            "--stdout",
        ]);
        assert!(args.is_quiet());
    }
}
