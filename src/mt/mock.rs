//! Mock machine translator for testing
//!
//! This module provides a deterministic, API-free translator for testing
//! the pipeline without requiring API keys or network access.

use crate::mt::error::MtResult;
use crate::mt::translator::MachineTranslator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append a `_mt` marker: "hello" → "hello_mt"
    /// This preserves placeholder ids perfectly for testing
    Suffix,

    /// Use predefined source → translation mappings, falling back to the
    /// `_mt` marker for unknown texts
    Mappings(HashMap<String, String>),

    /// Simulate word reordering (for testing word-order-changing languages)
    /// Reverses the order of words separated by spaces
    Reorder,

    /// Simulate API errors
    Error(String),

    /// No-op: return input unchanged
    NoOp,
}

/// Mock translator that simulates various translation scenarios
///
/// Useful for testing the pipeline without external API dependencies.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
}

impl MockTranslator {
    /// Create a new MockTranslator with the given mode
    pub fn new(mode: MockMode) -> Self {
        Self { mode, delay_ms: 0 }
    }

    /// Create a MockTranslator with simulated network delay
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self { mode, delay_ms }
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(&self, text: &str) -> MtResult<String> {
        use crate::mt::error::MtError;

        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_mt", text)),
            MockMode::Mappings(map) => Ok(map
                .get(text)
                .cloned()
                .unwrap_or_else(|| format!("{}_mt", text))),
            MockMode::Reorder => {
                let words: Vec<&str> = text.split_whitespace().collect();
                Ok(words.iter().rev().copied().collect::<Vec<_>>().join(" "))
            }
            MockMode::Error(msg) => Err(MtError::TranslationError(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(&self, text: &str, _comment: Option<&str>) -> MtResult<String> {
        self.apply_delay().await;
        self.apply_translation(text)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
