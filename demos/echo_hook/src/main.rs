//! Echo Hook Example
//!
//! Receives Sonarr webhooks and logs one line per event. Point a Sonarr
//! "Webhook" connection at `http://<host>:9898/webhook` and press "Test".
//!
//! # Usage
//!
//! ```bash
//! cargo run --package echo-hook -- --config arrhook.toml
//! ARRHOOK_SERVER__PORT=8080 cargo run --package echo-hook
//! ```

use std::path::PathBuf;

use anyhow::Result;
use arrhook::prelude::*;
use arrhook::transport::http::BodyLimitExceeded;
use clap::Parser;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(about = "Logs every Sonarr webhook it receives")]
struct Args {
    /// Configuration file, instead of searching the current directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Configuration profile, e.g. "production".
    #[arg(short, long)]
    profile: Option<String>,
}

fn load_runtime(args: &Args) -> Result<ArrhookRuntime> {
    let mut builder = ArrhookRuntime::builder();
    if let Some(path) = &args.config {
        builder = builder.config_file(path);
    }
    if let Some(profile) = &args.profile {
        builder = builder.profile(profile);
    }
    Ok(builder.build()?)
}

/// 413 for bodies over the configured limit, 400 for every other failure.
fn error_status(err: &WebhookError) -> u16 {
    let over_limit = std::error::Error::source(err)
        .is_some_and(|source| source.is::<BodyLimitExceeded>());
    if over_limit { 413 } else { 400 }
}

fn triggers(log_on_error: bool) -> SonarrTriggers {
    SonarrTriggers::new()
        .on_grab(|event| {
            info!(
                series = %event.series_title(),
                episodes = %event.episode_codes(),
                release = %event.release.release_title,
                client = %event.download_client,
                "Grabbed"
            );
        })
        .on_download(|event| {
            info!(
                series = %event.series_title(),
                episodes = %event.episode_codes(),
                file = %event.episode_file.relative_path,
                upgrade = event.is_upgrade,
                "Imported"
            );
        })
        .on_rename(|event| {
            info!(
                series = %event.series_title(),
                files = event.renamed_episode_files.len(),
                "Renamed"
            );
        })
        .on_episode_file_delete(|event| {
            info!(
                series = %event.series_title(),
                episodes = %event.episode_codes(),
                reason = %event.delete_reason,
                "Episode file deleted"
            );
        })
        .on_series_delete(|event| {
            info!(
                series = %event.series_title(),
                deleted_files = event.deleted_files,
                "Series deleted"
            );
        })
        .on_health(|event| {
            warn!(check = %event.check_type, level = %event.level, "{}", event.message);
        })
        .on_application_update(|event| {
            info!(
                from = %event.previous_version,
                to = %event.new_version,
                "Sonarr updated"
            );
        })
        .on_test(|event| {
            info!(series = %event.series_title(), "Connection test received");
        })
        .on_unknown(|event_type, event| {
            info!(event_type, fields = event.len(), "Unhandled event kind");
        })
        .on_error(|_, err| error_status(err))
        .log_on_error(log_on_error)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let runtime = load_runtime(&args)?;
    runtime.init_logging()?;

    let dispatcher = triggers(runtime.config().webhook.log_on_error).build();
    runtime.serve(dispatcher).await?;

    Ok(())
}
