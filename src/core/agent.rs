/// Lower-case fragments of user agents that fetch pages to build link
/// previews. Anything else is treated as a person and redirected.
const UNFURL_BOT_MARKERS: &[&str] = &[
    "discord",
    "twitter",
    "facebookexternalhit",
    "facebookcatalog",
    "slack",
    "telegrambot",
    "whatsapp",
    "linkedinbot",
    "skypeuripreview",
    "embedly",
    "mastodon",
    "bluesky",
    "cardyb",
    "iframely",
    "redditbot",
    "applebot",
];

pub fn is_unfurl_bot(user_agent: Option<&str>) -> bool {
    let Some(agent) = user_agent else {
        return false;
    };
    let agent = agent.to_ascii_lowercase();
    UNFURL_BOT_MARKERS.iter().any(|marker| agent.contains(marker))
}
