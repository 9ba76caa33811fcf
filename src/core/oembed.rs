use crate::domain::model::StoryCard;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct OEmbedProvider<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub icon_url: &'a str,
    pub site_origin: &'a str,
}

/// `rich` oEmbed document. Unknown values are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OEmbedResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    pub provider_name: String,
    pub provider_url: String,
    pub provider_icon_url: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

pub fn build_oembed(card: &StoryCard, provider: &OEmbedProvider) -> OEmbedResponse {
    let author = card.story.author.as_ref();
    let dims = card.image.as_ref().and_then(|image| image.dimensions);

    OEmbedResponse {
        author_name: author.and_then(|a| a.name.clone()),
        author_url: author
            .and_then(|a| a.url.as_deref())
            .map(|path| format!("{}{}", provider.site_origin, path)),
        provider_name: provider.name.to_string(),
        provider_url: provider.url.to_string(),
        provider_icon_url: provider.icon_url.to_string(),
        title: card.story.teaser.title.clone(),
        kind: "rich".to_string(),
        version: "1.0".to_string(),
        thumbnail_url: card.image.as_ref().map(|image| image.url.clone()),
        thumbnail_width: dims.map(|d| d.width()),
        thumbnail_height: dims.map(|d| d.height()),
        width: dims.map(|d| d.width()),
        height: dims.map(|d| d.height()),
    }
}
