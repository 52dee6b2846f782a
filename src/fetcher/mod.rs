pub mod http_fetcher;

use async_trait::async_trait;
use url::Url;

use crate::app::Result;

pub use http_fetcher::HttpFetcher;

/// A source of page bodies. The pipeline only ever needs the decoded
/// text of one URL at a time.
#[async_trait]
pub trait Fetcher {
    /// Fetch `url` and return its body as UTF-8 text.
    async fn fetch(&self, url: &Url) -> Result<String>;
}
