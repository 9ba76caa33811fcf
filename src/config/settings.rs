use crate::core::ConfigProvider;

pub const DEFAULT_BIND: &str = "0.0.0.0:8787";
pub const DEFAULT_API_BASE: &str = "https://www.stuff.co.nz/api/v1.0/stuff";
pub const DEFAULT_SITE_ORIGIN: &str = "https://www.stuff.co.nz";
pub const DEFAULT_SITE_NAME: &str = "Stuff";
pub const DEFAULT_FALLBACK_URL: &str = "https://github.com/BirdMakingStuff/fxstuff";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PROVIDER_NAME: &str = "FxStuff by BirdMakingStuff";
pub const DEFAULT_PROVIDER_URL: &str = "https://birdmakingstuff.nz";
pub const DEFAULT_PROVIDER_ICON_URL: &str =
    "https://www.stuff.co.nz/assets/icon/Favicon-Stuff-32x32.png";

/// Resolved runtime settings, owned by the server once a config source
/// has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_address: String,
    pub public_origin: Option<String>,
    pub api_base: String,
    pub site_origin: String,
    pub site_name: String,
    pub fallback_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub provider_name: String,
    pub provider_url: String,
    pub provider_icon_url: String,
}

impl Settings {
    pub fn from_provider(provider: &dyn ConfigProvider) -> Self {
        Self {
            bind_address: provider.bind_address().to_string(),
            public_origin: provider.public_origin().map(str::to_string),
            api_base: provider.api_base().trim_end_matches('/').to_string(),
            site_origin: provider.site_origin().to_string(),
            site_name: provider.site_name().to_string(),
            fallback_url: provider.fallback_url().to_string(),
            user_agent: provider.user_agent().to_string(),
            request_timeout_secs: provider.request_timeout_secs(),
            provider_name: provider.provider_name().to_string(),
            provider_url: provider.provider_url().to_string(),
            provider_icon_url: provider.provider_icon_url().to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND.to_string(),
            public_origin: None,
            api_base: DEFAULT_API_BASE.to_string(),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            provider_icon_url: DEFAULT_PROVIDER_ICON_URL.to_string(),
        }
    }
}
