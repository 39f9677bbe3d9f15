//! Block assembly: decompose a document into an ordered, gap-free,
//! non-overlapping sequence of atomic, tag and payload blocks.

use crate::block::{Block, BlockKind, TagRecord};
use crate::meta::MetaAllocator;
use crate::scanner::{self, TagPatterns};

/// One fully tokenized document: the block tiling, the tag table the tag
/// blocks index into, and the placeholder maps built while tokenizing.
#[derive(Debug)]
pub struct TokenizedDocument {
    pub blocks: Vec<Block>,
    pub tags: Vec<TagRecord>,
    pub meta: MetaAllocator,
}

/// Tokenize `doc` into blocks covering `[0, doc.len())`.
///
/// Atomic blocks come from the whitespace/image-token pattern and from
/// block-level tag occurrences. Formatting tags are scanned, paired and
/// given meta bodies in document order. Everything not claimed by an
/// atomic or tag block becomes payload, found by one linear scan over the
/// sorted block boundaries; a zero-length sentinel at the end closes the
/// final gap and later guarantees a terminal flush in the document
/// assembler.
pub fn tokenize(doc: &str, patterns: &TagPatterns) -> TokenizedDocument {
    let mut blocks: Vec<Block> = Vec::new();

    for m in patterns.atomic.find_iter(doc) {
        blocks.push(Block::new(BlockKind::Atomic, m.start(), m.end()));
    }

    for (start, end) in scanner::scan_block_tags(doc, patterns) {
        blocks.push(Block::new(BlockKind::Atomic, start, end));
    }

    let mut tags = scanner::scan_formatting_tags(doc, patterns);
    scanner::pair_tags(&mut tags);
    let mut meta = MetaAllocator::new();
    for index in 0..tags.len() {
        meta.assign(doc, &mut tags, index, patterns);
    }
    for (index, tag) in tags.iter().enumerate() {
        blocks.push(Block::new(BlockKind::Tag(index), tag.start, tag.end));
    }

    blocks.push(Block::new(BlockKind::Atomic, doc.len(), doc.len()));
    blocks.sort_by_key(|block| block.start);

    let mut payloads = Vec::new();
    let mut last_end = 0;
    for block in &blocks {
        if block.start > last_end {
            payloads.push(Block::new(BlockKind::Payload, last_end, block.start));
        }
        last_end = block.end;
    }

    blocks.extend(payloads);
    blocks.sort_by_key(|block| block.start);

    debug_assert!(
        tiles_document(&blocks, doc.len()),
        "blocks must tile the document without gaps or overlaps"
    );

    TokenizedDocument { blocks, tags, meta }
}

fn tiles_document(blocks: &[Block], len: usize) -> bool {
    let mut cursor = 0;
    for block in blocks {
        if block.start != cursor || block.end < block.start {
            return false;
        }
        cursor = block.end;
    }
    cursor == len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;

    fn tokenize_default(doc: &str) -> TokenizedDocument {
        let patterns = TagPatterns::new(&FilterConfig::default()).unwrap();
        tokenize(doc, &patterns)
    }

    fn kinds(tokenized: &TokenizedDocument) -> Vec<BlockKind> {
        tokenized.blocks.iter().map(|block| block.kind).collect()
    }

    #[test]
    fn test_empty_document_is_just_the_sentinel() {
        let tokenized = tokenize_default("");
        assert_eq!(tokenized.blocks.len(), 1);
        assert_eq!(tokenized.blocks[0], Block::new(BlockKind::Atomic, 0, 0));
    }

    #[test]
    fn test_plain_text_is_one_payload() {
        let tokenized = tokenize_default("just text");
        assert_eq!(
            kinds(&tokenized),
            vec![BlockKind::Payload, BlockKind::Atomic]
        );
        assert_eq!(tokenized.blocks[0].start, 0);
        assert_eq!(tokenized.blocks[0].end, 9);
    }

    #[test]
    fn test_block_tags_are_atomic() {
        let tokenized = tokenize_default("<p>text</p>");
        assert_eq!(
            kinds(&tokenized),
            vec![
                BlockKind::Atomic,
                BlockKind::Payload,
                BlockKind::Atomic,
                BlockKind::Atomic,
            ]
        );
    }

    #[test]
    fn test_formatting_tags_become_tag_blocks() {
        let tokenized = tokenize_default("a<strong>b</strong>c");
        assert_eq!(
            kinds(&tokenized),
            vec![
                BlockKind::Payload,
                BlockKind::Tag(0),
                BlockKind::Payload,
                BlockKind::Tag(1),
                BlockKind::Payload,
                BlockKind::Atomic,
            ]
        );
        assert_eq!(tokenized.tags[0].meta_body.as_deref(), Some("<s1>"));
    }

    #[test]
    fn test_leading_whitespace_and_image_tokens_are_atomic() {
        let tokenized = tokenize_default("  {{IMG 3}} body");
        assert_eq!(tokenized.blocks[0].kind, BlockKind::Atomic);
        assert_eq!(tokenized.blocks[1].kind, BlockKind::Atomic);
        assert_eq!(tokenized.blocks[2].kind, BlockKind::Payload);
    }

    #[test]
    fn test_tiling_holds_for_malformed_markup() {
        for doc in [
            "",
            "\n",
            "   ",
            "text",
            "</em>orphan",
            "<em>never closed",
            "<strong><em>crossed</strong></em>",
            "<p><ul><li>deep</li></ul></p>",
            "mix {{IMG 1}} <a href=\"u\">x</a>\n  tail",
        ] {
            let tokenized = tokenize_default(doc);
            assert!(
                tiles_document(&tokenized.blocks, doc.len()),
                "tiling failed for {:?}",
                doc
            );
        }
    }

    #[test]
    fn test_sentinel_is_last_and_empty() {
        let tokenized = tokenize_default("abc");
        let last = tokenized.blocks.last().unwrap();
        assert_eq!(last.kind, BlockKind::Atomic);
        assert_eq!(last.start, 3);
        assert_eq!(last.end, 3);
    }

    #[test]
    fn test_orphan_closing_gets_tag_block() {
        let tokenized = tokenize_default("one</strong>two");
        assert_eq!(
            kinds(&tokenized),
            vec![
                BlockKind::Payload,
                BlockKind::Tag(0),
                BlockKind::Payload,
                BlockKind::Atomic,
            ]
        );
        assert_eq!(tokenized.tags[0].pair, None);
        assert_eq!(tokenized.tags[0].meta_body.as_deref(), Some("</s1>"));
    }
}
