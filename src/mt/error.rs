/// Error types for the translation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Provider or filter configuration problem
    ConfigError(String),
    /// Locale code failed validation
    InvalidLocale(String),
    /// Transport-level failure while talking to a provider
    NetworkError(String),
    /// The provider failed to produce a translation
    TranslationError(String),
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::InvalidLocale(msg) => write!(f, "Invalid locale: {}", msg),
            MtError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            MtError::TranslationError(msg) => write!(f, "Translation error: {}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        MtError::NetworkError(err.to_string())
    }
}

/// Result type for translation pipeline operations
pub type MtResult<T> = Result<T, MtError>;
