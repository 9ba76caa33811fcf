use crate::config::settings::*;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, UnfurlError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub site: SiteConfig,
    pub oembed: OEmbedConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: Option<String>,
    pub public_origin: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub api_base: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub origin: Option<String>,
    pub name: Option<String>,
    pub fallback_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OEmbedConfig {
    pub provider_name: Option<String>,
    pub provider_url: Option<String>,
    pub provider_icon_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UnfurlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UnfurlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STORY_API_BASE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UnfurlError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_address(&self) -> &str {
        self.server.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }

    fn public_origin(&self) -> Option<&str> {
        self.server.public_origin.as_deref()
    }

    fn api_base(&self) -> &str {
        self.upstream.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    fn site_origin(&self) -> &str {
        self.site.origin.as_deref().unwrap_or(DEFAULT_SITE_ORIGIN)
    }

    fn site_name(&self) -> &str {
        self.site.name.as_deref().unwrap_or(DEFAULT_SITE_NAME)
    }

    fn fallback_url(&self) -> &str {
        self.site.fallback_url.as_deref().unwrap_or(DEFAULT_FALLBACK_URL)
    }

    fn user_agent(&self) -> &str {
        self.upstream.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    fn request_timeout_secs(&self) -> u64 {
        self.upstream
            .timeout_seconds
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    fn provider_name(&self) -> &str {
        self.oembed
            .provider_name
            .as_deref()
            .unwrap_or(DEFAULT_PROVIDER_NAME)
    }

    fn provider_url(&self) -> &str {
        self.oembed.provider_url.as_deref().unwrap_or(DEFAULT_PROVIDER_URL)
    }

    fn provider_icon_url(&self) -> &str {
        self.oembed
            .provider_icon_url
            .as_deref()
            .unwrap_or(DEFAULT_PROVIDER_ICON_URL)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::config::validate_provider(self)
    }
}
