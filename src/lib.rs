//! Tag-safe machine translation for semi-structured markup documents
//!
//! The engine decomposes a document into atomic, tag and payload blocks,
//! pairs opening/closing formatting tags, replaces every tag with a short
//! meta placeholder so the translation step only ever sees natural
//! language, and reverses the substitution afterwards, hyperlinks
//! included. Malformed markup is never an error: unmatched tags become
//! orphans with their own placeholder and unrecognized constructs pass
//! through as literal text.

pub mod block;
pub mod config;
pub mod meta;
pub mod mt;
pub mod scanner;
pub mod tokenizer;

// Re-export the main types for convenient access
pub use block::{Block, BlockKind, TagDirection, TagRecord};
pub use config::FilterConfig;
pub use meta::MetaAllocator;
pub use mt::{MachineTranslator, MtError, MtResult};
pub use scanner::TagPatterns;
pub use tokenizer::{TokenizedDocument, tokenize};

/// Document translation filter: a tag-set configuration plus its compiled
/// patterns.
///
/// A filter is reusable: every `translate_document` call builds fresh
/// session state (block list, tag table, placeholder maps) and discards it
/// afterwards, so independent documents can be processed by independent
/// filter instances concurrently.
pub struct MarkupFilter {
    config: FilterConfig,
    patterns: TagPatterns,
}

impl MarkupFilter {
    /// Create a filter with the builtin tag sets.
    pub fn new() -> Result<Self, String> {
        Self::with_config(FilterConfig::default())
    }

    /// Create a filter from an explicit configuration.
    pub fn with_config(config: FilterConfig) -> Result<Self, String> {
        let patterns = TagPatterns::new(&config)?;
        Ok(MarkupFilter { config, patterns })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Tokenize one document without translating it.
    pub fn tokenize_document(&self, doc: &str) -> TokenizedDocument {
        tokenizer::tokenize(doc, &self.patterns)
    }

    /// Translate one document through the given collaborator and return the
    /// reconstructed markup.
    pub async fn translate_document(
        &self,
        doc: &str,
        translator: &dyn MachineTranslator,
    ) -> MtResult<String> {
        let tokenized = tokenizer::tokenize(doc, &self.patterns);
        mt::document::assemble_document(doc, &tokenized, translator, &self.config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mt::{MockMode, MockTranslator};

    #[test]
    fn test_filter_construction() {
        let filter = MarkupFilter::new().unwrap();
        assert_eq!(filter.config().formatting_tags.len(), 7);

        let mut config = FilterConfig::default();
        config.formatting_tags = vec!["b".to_string()];
        let filter = MarkupFilter::with_config(config).unwrap();
        assert_eq!(filter.config().formatting_tags, vec!["b"]);
    }

    #[test]
    fn test_tokenize_document() {
        let filter = MarkupFilter::new().unwrap();
        let tokenized = filter.tokenize_document("<p>hi</p>");
        assert_eq!(tokenized.blocks.len(), 4);
        assert!(tokenized.tags.is_empty());
    }

    #[tokio::test]
    async fn test_translate_document_round_trip() {
        let filter = MarkupFilter::new().unwrap();
        let translator = MockTranslator::new(MockMode::NoOp);
        let output = filter
            .translate_document("<p>one</p>", &translator)
            .await
            .unwrap();
        assert_eq!(output, "<p>one</p>");
    }
}
