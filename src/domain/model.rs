use serde::{Deserialize, Serialize};

/// Pixel size of an image. Both sides are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Returns `None` when either side is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Response of a ranged GET, before any interpretation of the body.
#[derive(Debug, Clone)]
pub struct RangeResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// `/{category}/{id}/{slug}` as found in a news-site URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePath {
    pub category: String,
    pub id: u64,
    pub slug: String,
}

impl ArticlePath {
    pub fn canonical_url(&self, site_origin: &str) -> String {
        format!("{}/{}/{}/{}", site_origin, self.category, self.id, self.slug)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Story {
    #[serde(rename = "type")]
    pub story_type: Option<String>,
    pub teaser: Teaser,
    pub author: Option<Author>,
    /// ISO 8601
    pub published_date: Option<String>,
    /// ISO 8601
    pub updated_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Teaser {
    pub title: String,
    pub intro: String,
    pub image: Option<TeaserImage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeaserImage {
    pub id: Option<String>,
    pub alt: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub id: Option<String>,
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub biography: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
}

impl Story {
    /// Teaser image URL, if the story has a non-empty one.
    pub fn image_url(&self) -> Option<&str> {
        self.teaser
            .image
            .as_ref()
            .and_then(|image| image.url.as_deref())
            .filter(|url| !url.is_empty())
    }

    pub fn image_alt(&self) -> &str {
        self.teaser
            .image
            .as_ref()
            .and_then(|image| image.alt.as_deref())
            .unwrap_or("")
    }
}

/// Teaser image as it appears in a rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub url: String,
    pub alt: String,
    pub dimensions: Option<Dimensions>,
}

/// Everything needed to render a link preview for one story.
#[derive(Debug, Clone)]
pub struct StoryCard {
    pub story: Story,
    pub canonical_url: String,
    pub image: Option<CardImage>,
}
