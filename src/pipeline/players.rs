//! Player run: a single listing-page fetch plus local iteration. Not
//! parallel by design.

use crate::fetch::Fetcher;
use crate::model::{PlayerRecord, ScrapeError};
use crate::parser::player_page::parse_players;

use std::sync::Arc;
use tracing::info;

pub const PLAYER_LIST_URL: &str = "https://www.pba.ph/players";

pub struct PlayerScraper {
    fetcher: Arc<dyn Fetcher>,
}

impl PlayerScraper {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// One record per player box on the listing page, in document order.
    /// The listing fetch is the index fetch, so its failure is fatal.
    pub async fn scrape(&self) -> Result<Vec<PlayerRecord>, ScrapeError> {
        let html = self.fetcher.fetch(PLAYER_LIST_URL).await.map_err(|source| {
            ScrapeError::IndexFetch {
                url: PLAYER_LIST_URL.to_string(),
                source,
            }
        })?;

        let records = parse_players(&html);
        info!(count = records.len(), "assembled player records");
        Ok(records)
    }
}
