use crate::domain::model::ArticlePath;
use regex::Regex;
use std::sync::OnceLock;

const ARTICLE_PATH_PATTERN: &str = r"^/(.+)/([1-9][0-9]*)/([^/]+)/?$";

fn article_path_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ARTICLE_PATH_PATTERN).expect("article path pattern is valid"))
}

/// Splits `/{category...}/{id}/{slug}` into its parts. The category may span
/// several segments; the id is the last numeric segment before the slug.
pub fn parse_article_path(path: &str) -> Option<ArticlePath> {
    let caps = article_path_regex().captures(path)?;
    let id = caps[2].parse::<u64>().ok()?;
    Some(ArticlePath {
        category: caps[1].to_string(),
        id,
        slug: caps[3].to_string(),
    })
}
