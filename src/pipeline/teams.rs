//! Team run: index discovery, bounded-parallel detail fetch, record
//! assembly, logo download.

use crate::assets;
use crate::fetch::scheduler::fetch_all;
use crate::fetch::Fetcher;
use crate::model::{FetchResult, ScrapeError, TeamRecord};
use crate::parser::team_page::{parse_team, parse_team_urls};

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

pub const TEAM_LIST_URL: &str = "https://www.pba.ph/teams";

pub struct TeamScraper {
    fetcher: Arc<dyn Fetcher>,
    max_concurrency: usize,
    media_dir: PathBuf,
}

impl TeamScraper {
    pub fn new(fetcher: Arc<dyn Fetcher>, max_concurrency: usize, media_dir: PathBuf) -> Self {
        Self {
            fetcher,
            max_concurrency,
            media_dir,
        }
    }

    /// One record per discovered team page. Only the index fetch is fatal;
    /// a failing detail page still yields its (empty) record and leaves
    /// batch siblings untouched.
    pub async fn scrape(&self) -> Result<Vec<TeamRecord>, ScrapeError> {
        let index = self.fetcher.fetch(TEAM_LIST_URL).await.map_err(|source| {
            ScrapeError::IndexFetch {
                url: TEAM_LIST_URL.to_string(),
                source,
            }
        })?;

        let urls = parse_team_urls(&index);
        info!(count = urls.len(), "discovered team pages");

        let results = fetch_all(Arc::clone(&self.fetcher), urls, self.max_concurrency).await?;

        let mut records = Vec::with_capacity(results.len());
        for result in results {
            records.push(self.assemble_one(result).await);
        }
        info!(count = records.len(), "assembled team records");
        Ok(records)
    }

    /// Build one record from a fetch outcome. Triggers the logo download as
    /// a side effect when the page yielded a logo URL.
    async fn assemble_one(&self, result: FetchResult) -> TeamRecord {
        let FetchResult { url, body } = result;
        let html = match body {
            Ok(html) => html,
            Err(e) => {
                warn!(error = %e, url, "team page fetch failed");
                return TeamRecord::empty(url);
            }
        };

        let record = parse_team(&html, &url);
        if let Some(logo_url) = record.logo_url.as_deref() {
            assets::download_image(self.fetcher.as_ref(), &self.media_dir, logo_url).await;
        }
        record
    }
}
