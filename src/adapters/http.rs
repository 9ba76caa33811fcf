use crate::config::Settings;
use crate::core::{RangeFetcher, StoryClient};
use crate::domain::model::{RangeResponse, Story};
use crate::utils::error::{Result, UnfurlError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, RANGE};
use reqwest::Client;
use std::time::Duration;

pub fn build_client(settings: &Settings) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .user_agent(settings.user_agent.clone())
        .build()?;
    Ok(client)
}

/// Ranged GET over reqwest. The body is read chunk by chunk and cut at the
/// requested length even when the server ignores `Range` and answers 200.
#[derive(Debug, Clone)]
pub struct HttpRangeFetcher {
    client: Client,
}

impl HttpRangeFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RangeFetcher for HttpRangeFetcher {
    async fn fetch_range(
        &self,
        url: &str,
        start: u64,
        end_inclusive: u64,
    ) -> Result<RangeResponse> {
        let limit = usize::try_from(end_inclusive.saturating_sub(start) + 1).unwrap_or(usize::MAX);

        tracing::debug!("Range request to {} (bytes={}-{})", url, start, end_inclusive);
        let mut response = self
            .client
            .get(url)
            .header(RANGE, format!("bytes={}-{}", start, end_inclusive))
            .send()
            .await?;

        let status = response.status().as_u16();
        let mut body = Vec::new();
        if response.status().is_success() {
            while let Some(chunk) = response.chunk().await? {
                let room = limit - body.len();
                if chunk.len() >= room {
                    body.extend_from_slice(&chunk[..room]);
                    break;
                }
                body.extend_from_slice(&chunk);
            }
        }

        tracing::debug!("Range response from {}: HTTP {}, {} bytes", url, status, body.len());
        Ok(RangeResponse { status, body })
    }
}

/// Client for the news site's story JSON API: `GET {api_base}/story/{id}`.
#[derive(Debug, Clone)]
pub struct StoryApiClient {
    client: Client,
    api_base: String,
}

impl StoryApiClient {
    pub fn new(client: Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    pub fn story_url(&self, id: u64) -> String {
        format!("{}/story/{}", self.api_base, id)
    }
}

#[async_trait]
impl StoryClient for StoryApiClient {
    async fn fetch_story(&self, id: u64) -> Result<Story> {
        let url = self.story_url(id);
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(UnfurlError::UpstreamStatus {
                url,
                status: response.status().as_u16(),
            });
        }

        let story = response.json::<Story>().await?;
        Ok(story)
    }
}
