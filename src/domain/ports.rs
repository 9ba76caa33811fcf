use crate::domain::model::{RangeResponse, Story};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Byte-range retrieval of a remote resource.
///
/// Implementations may return a 200 with the whole resource when the
/// server ignores the range, but must never hand back more than
/// `end_inclusive - start + 1` bytes.
#[async_trait]
pub trait RangeFetcher: Send + Sync {
    async fn fetch_range(&self, url: &str, start: u64, end_inclusive: u64)
        -> Result<RangeResponse>;
}

#[async_trait]
pub trait StoryClient: Send + Sync {
    async fn fetch_story(&self, id: u64) -> Result<Story>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn public_origin(&self) -> Option<&str>;
    fn api_base(&self) -> &str;
    fn site_origin(&self) -> &str;
    fn site_name(&self) -> &str;
    fn fallback_url(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
    fn provider_name(&self) -> &str;
    fn provider_url(&self) -> &str;
    fn provider_icon_url(&self) -> &str;
}
