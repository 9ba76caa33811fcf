//! HTML document served to link-preview crawlers.

use crate::domain::model::StoryCard;
use chrono::DateTime;
use std::fmt::Write;

const THEME_COLOR: &str = "#8d1de8";

/// Site-level values that appear in every page.
#[derive(Debug, Clone)]
pub struct PageBranding<'a> {
    pub site_name: &'a str,
    pub icon_url: &'a str,
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// RFC 3339 timestamp normalised, or `None` if the API sent something else.
fn normalise_timestamp(raw: Option<&str>) -> Option<String> {
    DateTime::parse_from_rfc3339(raw?).ok().map(|t| t.to_rfc3339())
}

fn meta_property(out: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<meta property="{}" content="{}"/>"#,
        property,
        escape_html(content)
    );
}

fn meta_name(out: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<meta name="{}" content="{}"/>"#,
        name,
        escape_html(content)
    );
}

pub fn render_story_page(card: &StoryCard, oembed_href: &str, branding: &PageBranding) -> String {
    let teaser = &card.story.teaser;
    let mut head = String::new();

    meta_name(&mut head, "theme-color", THEME_COLOR);
    meta_property(&mut head, "og:title", &teaser.title);
    meta_property(&mut head, "og:description", &teaser.intro);
    meta_property(&mut head, "og:url", &card.canonical_url);
    meta_property(&mut head, "og:type", "website");
    meta_property(&mut head, "og:site_name", branding.site_name);
    let _ = writeln!(
        head,
        r#"<link href="{}" rel="icon" sizes="32x32" type="image/png">"#,
        escape_html(branding.icon_url)
    );
    let _ = writeln!(
        head,
        r#"<link rel="alternate" type="application/json+oembed" href="{}" title="{}">"#,
        escape_html(oembed_href),
        escape_html(&teaser.title)
    );

    if let Some(published) = normalise_timestamp(card.story.published_date.as_deref()) {
        meta_property(&mut head, "article:published_time", &published);
    }
    if let Some(updated) = normalise_timestamp(card.story.updated_date.as_deref()) {
        meta_property(&mut head, "article:modified_time", &updated);
    }

    match &card.image {
        Some(image) => {
            meta_property(&mut head, "og:image", &image.url);
            meta_property(&mut head, "og:image:alt", &image.alt);
            if let Some(dims) = image.dimensions {
                meta_property(&mut head, "og:image:width", &dims.width().to_string());
                meta_property(&mut head, "og:image:height", &dims.height().to_string());
            }
            meta_name(&mut head, "twitter:card", "summary_large_image");
            meta_name(&mut head, "twitter:image", &image.url);
        }
        None => meta_name(&mut head, "twitter:card", "summary"),
    }
    meta_name(&mut head, "twitter:title", &teaser.title);
    meta_name(&mut head, "twitter:description", &teaser.intro);

    format!(
        "<!doctype html>\n<html><head>\n{}</head><body></body></html>\n",
        head
    )
}
