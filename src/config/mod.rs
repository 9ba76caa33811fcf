pub mod settings;
pub mod toml_config;

pub use settings::Settings;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use settings::*;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "unfurl-proxy")]
#[command(about = "Link-preview proxy for news articles: Open Graph pages for bots, redirects for people")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Origin used in generated oEmbed links (defaults to http://<Host>)
    #[arg(long)]
    pub public_origin: Option<String>,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, default_value = DEFAULT_SITE_ORIGIN)]
    pub site_origin: String,

    #[arg(long, default_value = DEFAULT_SITE_NAME)]
    pub site_name: String,

    /// Where requests that are not article paths are sent
    #[arg(long, default_value = DEFAULT_FALLBACK_URL)]
    pub fallback_url: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    #[arg(long, default_value = DEFAULT_PROVIDER_NAME)]
    pub provider_name: String,

    #[arg(long, default_value = DEFAULT_PROVIDER_URL)]
    pub provider_url: String,

    #[arg(long, default_value = DEFAULT_PROVIDER_ICON_URL)]
    pub provider_icon_url: String,

    /// TOML configuration file; replaces the flags above when given
    #[arg(long, short)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        &self.bind
    }

    fn public_origin(&self) -> Option<&str> {
        self.public_origin.as_deref()
    }

    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn site_origin(&self) -> &str {
        &self.site_origin
    }

    fn site_name(&self) -> &str {
        &self.site_name
    }

    fn fallback_url(&self) -> &str {
        &self.fallback_url
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    fn provider_name(&self) -> &str {
        &self.provider_name
    }

    fn provider_url(&self) -> &str {
        &self.provider_url
    }

    fn provider_icon_url(&self) -> &str {
        &self.provider_icon_url
    }
}

/// Shared by every config source.
pub(crate) fn validate_provider(config: &dyn ConfigProvider) -> Result<()> {
    validation::validate_socket_addr("bind", config.bind_address())?;
    if let Some(origin) = config.public_origin() {
        validation::validate_origin("public_origin", origin)?;
    }
    validation::validate_url("api_base", config.api_base())?;
    validation::validate_origin("site_origin", config.site_origin())?;
    validation::validate_non_empty_string("site_name", config.site_name())?;
    validation::validate_url("fallback_url", config.fallback_url())?;
    validation::validate_non_empty_string("user_agent", config.user_agent())?;
    validation::validate_range("request_timeout_secs", config.request_timeout_secs(), 1, 300)?;
    validation::validate_url("provider_url", config.provider_url())?;
    validation::validate_url("provider_icon_url", config.provider_icon_url())?;
    Ok(())
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = CliConfig::parse_from(["unfurl-proxy"]);
        assert!(config.validate().is_ok());
        assert_eq!(Settings::from_provider(&config), Settings::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = CliConfig::parse_from([
            "unfurl-proxy",
            "--bind",
            "127.0.0.1:9000",
            "--public-origin",
            "https://fxstuff.example",
            "--api-base",
            "http://localhost:8080/api/",
            "--request-timeout-secs",
            "3",
        ]);
        assert!(config.validate().is_ok());

        let settings = Settings::from_provider(&config);
        assert_eq!(settings.bind_address, "127.0.0.1:9000");
        assert_eq!(settings.public_origin.as_deref(), Some("https://fxstuff.example"));
        assert_eq!(settings.api_base, "http://localhost:8080/api");
        assert_eq!(settings.request_timeout_secs, 3);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = CliConfig::parse_from(["unfurl-proxy", "--request-timeout-secs", "0"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["unfurl-proxy", "--site-origin", "https://a.nz/"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["unfurl-proxy", "--bind", "nowhere"]);
        assert!(config.validate().is_err());
    }
}
