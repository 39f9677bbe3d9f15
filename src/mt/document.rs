//! Document reconstruction around translated units
//!
//! After tokenization the block sequence is walked once, front to back.
//! Tag and payload blocks accumulate in a pending cache until the next
//! atomic block flushes them: runs holding at least one payload block go
//! through the translation unit builder, pure tag runs are copied
//! verbatim. Atomic blocks themselves are always written as-is. The
//! zero-length sentinel block guarantees the last run is flushed, so the
//! walk always ends with an empty cache.

use crate::block::{Block, BlockKind};
use crate::config::FilterConfig;
use crate::mt::error::MtResult;
use crate::mt::translator::MachineTranslator;
use crate::mt::unit;
use crate::tokenizer::TokenizedDocument;

/// Walk the final block sequence and write the reconstructed document to
/// an append-only output buffer.
pub async fn assemble_document(
    doc: &str,
    tokenized: &TokenizedDocument,
    translator: &dyn MachineTranslator,
    config: &FilterConfig,
) -> MtResult<String> {
    let mut output = String::new();
    let mut cache: Vec<Block> = Vec::new();
    let mut has_payload = false;

    for block in &tokenized.blocks {
        match block.kind {
            BlockKind::Atomic => {
                if !cache.is_empty() {
                    if has_payload {
                        let translated = unit::translate_blocks(
                            doc,
                            &cache,
                            &tokenized.tags,
                            &tokenized.meta,
                            translator,
                            &config.hyperlink_label,
                        )
                        .await?;
                        output.push_str(&translated);
                    } else {
                        let cache_start = cache[0].start;
                        let cache_end = cache[cache.len() - 1].end;
                        output.push_str(&doc[cache_start..cache_end]);
                    }
                    cache.clear();
                    has_payload = false;
                }
                output.push_str(&doc[block.start..block.end]);
            }
            BlockKind::Payload => {
                has_payload = true;
                cache.push(*block);
            }
            BlockKind::Tag(_) => cache.push(*block),
        }
    }

    Ok(output)
}
