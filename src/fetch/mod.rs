pub mod http;
pub mod scheduler;
pub mod traits;

pub use http::HttpFetcher;
pub use traits::Fetcher;
