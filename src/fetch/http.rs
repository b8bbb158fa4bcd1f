use crate::fetch::Fetcher;
use crate::model::FetchError;

use reqwest::Client;
use std::time::Duration;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// The timeout applies per request; the scheduler itself never cancels.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) PbaScraper/0.1")
            .timeout(timeout)
            .build()
            .unwrap();

        Self { client }
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}
