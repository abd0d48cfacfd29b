pub type LanguageCode = String;

/// External lookup provider interface. One provider serves both the
/// line/character translation path and the romanization path.
#[async_trait::async_trait]
pub trait LookupService: Send + Sync {
    /// Translate text into the provider's target language
    async fn translation(&self, text: &str) -> Result<String, LookupError>;

    /// Romanize text (pinyin for Chinese input)
    async fn romanization(&self, text: &str) -> Result<String, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unexpected payload shape")]
    UnexpectedPayload,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Lookups disabled")]
    Disabled,
}

/// Null provider used when external lookups are turned off. Every call
/// errors, which drives callers onto their fallback values.
pub struct OfflineLookup;

#[async_trait::async_trait]
impl LookupService for OfflineLookup {
    async fn translation(&self, _text: &str) -> Result<String, LookupError> {
        Err(LookupError::Disabled)
    }

    async fn romanization(&self, _text: &str) -> Result<String, LookupError> {
        Err(LookupError::Disabled)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "offline".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
