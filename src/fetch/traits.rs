use crate::model::FetchError;

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
