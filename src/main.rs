mod assets;
mod config;
mod extract;
mod fetch;
mod model;
mod output;
mod parser;
mod pipeline;
mod teams;

use config::load_config;
use fetch::{Fetcher, HttpFetcher};
use model::{PlayerRecord, TeamRecord};
use pipeline::{PlayerScraper, TeamScraper};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(Duration::from_secs(
        config.request_timeout_secs,
    )));

    let mut failed = false;

    // Team run: bounded-parallel detail fetches plus logo downloads.
    let team_scraper = TeamScraper::new(
        Arc::clone(&fetcher),
        config.max_concurrency,
        PathBuf::from(&config.media_dir),
    );
    match team_scraper.scrape().await {
        Ok(records) => {
            let rows: Vec<Vec<String>> = records.iter().map(TeamRecord::to_row).collect();
            if let Err(e) = output::write_records(&config.team_output_file, &TeamRecord::FIELDS, &rows)
            {
                error!(error = %e, path = %config.team_output_file, "failed to write team file");
                failed = true;
            } else {
                info!(count = rows.len(), path = %config.team_output_file, "team file written");
            }
        }
        Err(e) => {
            error!(error = %e, "team run aborted");
            failed = true;
        }
    }

    // Player run: single listing page, no parallelism.
    let player_scraper = PlayerScraper::new(Arc::clone(&fetcher));
    match player_scraper.scrape().await {
        Ok(records) => {
            let rows: Vec<Vec<String>> = records.iter().map(PlayerRecord::to_row).collect();
            if let Err(e) =
                output::write_records(&config.player_output_file, &PlayerRecord::FIELDS, &rows)
            {
                error!(error = %e, path = %config.player_output_file, "failed to write player file");
                failed = true;
            } else {
                info!(count = rows.len(), path = %config.player_output_file, "player file written");
            }
        }
        Err(e) => {
            error!(error = %e, "player run aborted");
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
