use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mlb_postseason_ics::cli::Cli;
use mlb_postseason_ics::config::in_postseason_window;
use mlb_postseason_ics::handler::{CycleReport, Pipeline};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let _ = if json {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.try_init()
    };
}

/// One full cycle on the blocking pool; ureq and the file write are synchronous.
async fn run_cycle(pipeline: Arc<Pipeline>) -> Result<CycleReport> {
    tokio::task::spawn_blocking(move || pipeline.run_cycle())
        .await
        .context("update cycle task failed")
}

async fn watch(pipeline: Arc<Pipeline>, interval: Duration) -> Result<()> {
    info!(interval_secs = interval.as_secs(), "Starting watch mode; press Ctrl+C to stop");

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        if let Err(e) = run_cycle(pipeline.clone()).await {
            error!(error = %e, "Update cycle failed");
        }
        info!(next_in_secs = interval.as_secs(), "Waiting for next update");

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = &mut ctrl_c => {
                info!("Stopped by user");
                return Ok(());
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let today = Local::now().date_naive();
    if !cli.force && !in_postseason_window(today) {
        info!(%today, "Not postseason period; skipping update");
        return Ok(());
    }

    let season = cli.season_config(today)?;
    let output = cli.output_path(&season);
    info!(
        season = season.season,
        start = %season.start_date,
        end = %season.end_date,
        output = %output.display(),
        "Configured postseason calendar"
    );
    let pipeline = Arc::new(Pipeline::new(season, cli.resolver_config(), output));

    if cli.watch {
        watch(pipeline, Duration::from_secs(cli.interval)).await
    } else {
        // A failed write is reported in the log but is not a process failure.
        run_cycle(pipeline).await.map(|_| ())
    }
}
