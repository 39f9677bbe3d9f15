//! Machine translation trait and locale utilities
//!
//! This module defines the `MachineTranslator` trait for provider
//! abstraction, enabling support for different MT backends (Google
//! Translate, mock, etc.) without coupling the engine to any specific
//! implementation.

use crate::mt::error::{MtError, MtResult};
use async_trait::async_trait;

/// Generic trait for machine translation providers
///
/// The document pipeline treats implementations as opaque: it performs
/// exactly one call per translation unit and one per hyperlink needing
/// translation, sequentially, and never retries, times out or suppresses
/// a failure around the call; provider errors propagate to the caller.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate a single text
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate; markup has already been replaced
    ///   by simple placeholders
    /// * `comment` - Advisory context for the translation step (hyperlink
    ///   listings, labels); providers may ignore it
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text
    /// * `Err(MtError)` - If translation fails
    async fn translate(&self, text: &str, comment: Option<&str>) -> MtResult<String>;

    /// Get the name of this translation provider
    ///
    /// Used for progress reporting to identify which provider handled a
    /// translation.
    fn provider_name(&self) -> &str;
}

/// Normalize a locale code by stripping script and region information
///
/// Converts locale codes from BCP 47 format to their base language:
/// - `en-US` → `en`
/// - `zh-Hans` → `zh`
/// - `en` → `en` (unchanged)
pub fn normalize_locale(locale: &str) -> String {
    match locale.parse::<icu_locale::Locale>() {
        Ok(parsed) => parsed.id.language.as_str().to_lowercase(),
        Err(_) => locale.split('-').next().unwrap_or(locale).to_lowercase(),
    }
}

/// Validate that a locale code is a well-formed BCP 47 identifier
///
/// # Returns
///
/// * `Ok(())` - If the locale is valid
/// * `Err(MtError)` - If the locale is empty or fails to parse
pub fn validate_locale(locale: &str) -> MtResult<()> {
    if locale.is_empty() {
        return Err(MtError::InvalidLocale("Locale code is empty".to_string()));
    }

    locale
        .parse::<icu_locale::Locale>()
        .map(|_| ())
        .map_err(|_| MtError::InvalidLocale(format!("Invalid locale code: {}", locale)))
}
