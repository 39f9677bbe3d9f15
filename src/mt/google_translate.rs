//! Google Translate API provider for machine translation
//!
//! This module integrates with Google Translate API v2 to provide real
//! machine translation capabilities.
//!
//! # Authentication
//!
//! The provider loads the API key from the `GOOGLE_TRANSLATE_API_KEY`
//! environment variable. Obtain a key from:
//! https://console.cloud.google.com/
//!
//! A provider is constructed for one source/target locale pair and reused
//! for every unit and hyperlink of a document. The v2 API has no context
//! field, so the advisory comment is not transmitted.

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{MachineTranslator, normalize_locale, validate_locale};
use async_trait::async_trait;
use serde_json::json;

/// Google Translate API v2 provider
#[derive(Clone)]
pub struct GoogleTranslateProvider {
    /// API key for authentication
    api_key: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL for Google Translate API
    base_url: String,
    source_locale: String,
    target_locale: String,
}

impl GoogleTranslateProvider {
    /// Maximum characters per string (30KB per Google Translate API limits)
    const MAX_CHARS_PER_STRING: usize = 30_000;

    /// Create a new GoogleTranslateProvider with an explicit API key
    ///
    /// # Arguments
    ///
    /// * `api_key` - Google Translate API key
    /// * `source_locale` - Source language code (e.g., "en", "en-US")
    /// * `target_locale` - Target language code (e.g., "fr", "fr-FR")
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError)` - If the API key is empty, a locale is invalid or
    ///   HTTP client creation fails
    pub fn new(api_key: String, source_locale: &str, target_locale: &str) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError("API key cannot be empty".to_string()));
        }
        validate_locale(source_locale)?;
        validate_locale(target_locale)?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            base_url: "https://translation.googleapis.com/language/translate/v2".to_string(),
            source_locale: source_locale.to_string(),
            target_locale: target_locale.to_string(),
        })
    }

    /// Create a provider from the `GOOGLE_TRANSLATE_API_KEY` environment
    /// variable
    pub fn from_env(source_locale: &str, target_locale: &str) -> MtResult<Self> {
        let api_key = std::env::var("GOOGLE_TRANSLATE_API_KEY").map_err(|_| {
            MtError::ConfigError(
                "GOOGLE_TRANSLATE_API_KEY environment variable not set".to_string(),
            )
        })?;

        Self::new(api_key, source_locale, target_locale)
    }

    /// Perform one translation request against the API
    async fn request_translation(&self, text: &str) -> MtResult<String> {
        let url = format!("{}?key={}", self.base_url, self.api_key);

        let body = json!({
            "q": [text],
            "source": normalize_locale(&self.source_locale),
            "target": normalize_locale(&self.target_locale),
            "format": "text"
        });

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                MtError::ConfigError(format!("API client error ({}): {}", status, error_text))
            } else {
                MtError::TranslationError(format!("API server error ({}): {}", status, error_text))
            });
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            MtError::TranslationError(format!("Failed to parse API response: {}", e))
        })?;

        json["data"]["translations"][0]["translatedText"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                MtError::TranslationError(
                    "Invalid API response: missing 'translatedText' field".to_string(),
                )
            })
    }
}

impl std::fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("source_locale", &self.source_locale)
            .field("target_locale", &self.target_locale)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for GoogleTranslateProvider {
    async fn translate(&self, text: &str, _comment: Option<&str>) -> MtResult<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        if text.len() > Self::MAX_CHARS_PER_STRING {
            return Err(MtError::TranslationError(format!(
                "Text exceeds maximum length of {} characters",
                Self::MAX_CHARS_PER_STRING
            )));
        }

        self.request_translation(text).await
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}
