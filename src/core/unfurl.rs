use crate::core::oembed::{build_oembed, OEmbedProvider, OEmbedResponse};
use crate::core::probe::ImageDimensionProbe;
use crate::core::render::{render_story_page, PageBranding};
use crate::domain::model::{ArticlePath, CardImage, StoryCard};
use crate::domain::ports::{RangeFetcher, StoryClient};
use crate::config::Settings;
use crate::utils::error::Result;

/// Story lookup plus teaser image probing, shared by the page and oEmbed
/// endpoints.
pub struct UnfurlService<S: StoryClient, F: RangeFetcher> {
    stories: S,
    probe: ImageDimensionProbe<F>,
    settings: Settings,
}

impl<S: StoryClient, F: RangeFetcher> UnfurlService<S, F> {
    pub fn new(stories: S, fetcher: F, settings: Settings) -> Self {
        Self {
            stories,
            probe: ImageDimensionProbe::new(fetcher),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub async fn story_card(&self, path: &ArticlePath) -> Result<StoryCard> {
        let story = self.stories.fetch_story(path.id).await?;

        let image = match story.image_url() {
            Some(url) => {
                let dimensions = self.probe.probe(url).await;
                tracing::debug!(
                    "Teaser image {} -> {}",
                    url,
                    dimensions.map_or_else(|| "unknown".to_string(), |d| d.to_string())
                );
                Some(CardImage {
                    url: url.to_string(),
                    alt: story.image_alt().to_string(),
                    dimensions,
                })
            }
            None => None,
        };

        Ok(StoryCard {
            canonical_url: path.canonical_url(&self.settings.site_origin),
            story,
            image,
        })
    }

    pub async fn story_page(&self, path: &ArticlePath, oembed_href: &str) -> Result<String> {
        let card = self.story_card(path).await?;
        let branding = PageBranding {
            site_name: &self.settings.site_name,
            icon_url: &self.settings.provider_icon_url,
        };
        Ok(render_story_page(&card, oembed_href, &branding))
    }

    pub async fn oembed_for(&self, path: &ArticlePath) -> Result<OEmbedResponse> {
        let card = self.story_card(path).await?;
        let provider = OEmbedProvider {
            name: &self.settings.provider_name,
            url: &self.settings.provider_url,
            icon_url: &self.settings.provider_icon_url,
            site_origin: &self.settings.site_origin,
        };
        Ok(build_oembed(&card, &provider))
    }
}
