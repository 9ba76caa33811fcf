use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnfurlError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Upstream {url} returned HTTP {status}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("Not an article path: {path}")]
    InvalidArticlePath { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Request,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl UnfurlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UnfurlError::ApiError(_) => ErrorCategory::Network,
            UnfurlError::UpstreamStatus { .. } | UnfurlError::SerializationError(_) => {
                ErrorCategory::Upstream
            }
            UnfurlError::InvalidArticlePath { .. } => ErrorCategory::Request,
            UnfurlError::ConfigError { .. }
            | UnfurlError::ConfigValidationError { .. }
            | UnfurlError::InvalidConfigValueError { .. }
            | UnfurlError::MissingConfigError { .. } => ErrorCategory::Configuration,
            UnfurlError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and the upstream API base URL",
            ErrorCategory::Upstream => "The story API may be down or the story may not exist; retry later",
            ErrorCategory::Request => "Use a URL of the form /<category>/<id>/<slug>",
            ErrorCategory::Configuration => "Fix the configuration value or TOML file and restart",
            ErrorCategory::System => "Check file permissions and that the bind address is free",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            UnfurlError::ApiError(e) if e.is_timeout() => {
                "The upstream request timed out".to_string()
            }
            UnfurlError::UpstreamStatus { status, .. } => {
                format!("The story API answered with HTTP {}", status)
            }
            UnfurlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UnfurlError>;
