/// Machine Translation Module
///
/// This module carries the translation half of the pipeline: the
/// collaborator trait with its providers, and the builders that substitute
/// markup with meta placeholders around the translation call.
///
/// # Overview
///
/// 1. **Translator trait & providers** - Generic trait for MT systems with
///    Google Translate and mock implementations
/// 2. **Unit builder** - Turns one run of tag and payload blocks into a
///    placeholder-only translation request and reverses the substitution
///    on the result, including hyperlink handling
/// 3. **Document assembler** - Walks the tokenized block sequence,
///    dispatching payload-bearing runs to the unit builder and copying
///    everything else verbatim
///
/// # Example
///
/// ```ignore
/// use markup_mt::MarkupFilter;
/// use markup_mt::mt::{MachineTranslator, MockMode, MockTranslator};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let filter = MarkupFilter::new()?;
///     let translator = MockTranslator::new(MockMode::NoOp);
///
///     let doc = "<p>Hello <strong>world</strong>!</p>";
///     let translated = filter.translate_document(doc, &translator).await?;
///
///     println!("{}", translated);
///     Ok(())
/// }
/// ```
pub mod document;
pub mod error;
pub mod google_translate;
pub mod mock;
pub mod translator;
pub mod unit;

#[cfg(test)]
mod integration_tests;

pub use document::assemble_document;
pub use error::{MtError, MtResult};
pub use google_translate::GoogleTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use translator::{MachineTranslator, normalize_locale, validate_locale};
pub use unit::{decode_entities, encode_entities, translate_blocks};
