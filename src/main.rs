//! Reel Downloader - CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::{fmt, EnvFilter};

use reel_downloader::{
    cli::Args,
    config::{validate_config, Config},
    download::{download_to_buffer, download_to_path, DownloadOutcome},
    error::{exit_codes, Error, Result},
    output::{print_banner, print_error, print_info, print_post_summary, print_success},
    resolver::UrlResolver,
    PostFetcher,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::InvalidUrl(_) | Error::UnknownResolution(_) => {
                    ExitCode::from(exit_codes::INVALID_URL as u8)
                }
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::InvalidFilename(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::QueryRejected { .. } | Error::MalformedResponse(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Download(_) | Error::UnknownDownload(_) | Error::PathNotFound(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let quiet = args.is_quiet();
    if !quiet {
        print_banner();
    }

    // Load and merge configuration
    let (mut config, config_path) = Config::discover(args.config.as_deref())?;
    if let Some(path) = &config_path {
        tracing::debug!("Loaded configuration from {}", path.display());
    }
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    // Resolve the post before touching the network
    let resolver = UrlResolver::new(&config.query.host)?;
    let post = resolver.resolve(&args.url)?;
    let short_code = post.short_code()?;

    if args.shortcode {
        println!("{}", short_code);
        return Ok(());
    }

    let fetcher = PostFetcher::new(Arc::new(config.query.clone()), &config.http)?;

    if args.stdout {
        let bytes = download_to_buffer(&fetcher, &post).await?;
        let mut stdout = tokio::io::stdout();
        stdout.write_all(&bytes).await?;
        stdout.flush().await?;
        return Ok(());
    }

    let destination = args
        .output
        .clone()
        .unwrap_or_else(|| config.download_directory());

    if !quiet {
        print_post_summary(
            post.url(),
            &short_code,
            &destination.display().to_string(),
        );
        print_info("Fetching post metadata...");
    }

    match download_to_path(&fetcher, &post, &destination, &config.download).await? {
        DownloadOutcome::Saved {
            path,
            bytes_written,
            ..
        } => {
            if !args.quiet {
                print_success(&format!(
                    "Download successful! File saved as {} ({} bytes)",
                    path.display(),
                    bytes_written
                ));
            }
            Ok(())
        }
        DownloadOutcome::Rejected { status, .. } => Err(Error::Download(format!(
            "Failed to download file. Status code: {}",
            status
        ))),
    }
}
