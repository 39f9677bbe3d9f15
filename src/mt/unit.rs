//! Translation unit construction and reassembly
//!
//! A unit is one maximal contiguous run of tag and payload blocks holding
//! at least one payload block. The builder substitutes every tag with its
//! meta body, protects a small set of entities, hands the resulting plain
//! text to the collaborator, then reverses every substitution on the
//! translated result. Hyperlinks collected from anchor tags are translated
//! separately and swapped in place while still wrapped in their attribute.

use crate::block::{Block, BlockKind, TagRecord};
use crate::meta::{ANCHOR_TAG_NAME, MetaAllocator};
use crate::mt::error::MtResult;
use crate::mt::translator::MachineTranslator;
use std::collections::HashSet;

/// Entity substitution table, applied in this order before translation and
/// reversed in the same order afterwards.
const SPECIAL_CHARACTERS: [(&str, &str); 3] =
    [("&amp;", "&"), ("&nbsp;", " "), ("&quot;", "\"")];

/// Replace entity sequences with the plain characters they stand for.
pub fn decode_entities(text: &str) -> String {
    let mut result = text.to_string();
    for (entity, plain) in SPECIAL_CHARACTERS {
        result = result.replace(entity, plain);
    }
    result
}

/// Replace plain characters back with their entity sequences.
pub fn encode_entities(text: &str) -> String {
    let mut result = text.to_string();
    for (entity, plain) in SPECIAL_CHARACTERS {
        result = result.replace(plain, entity);
    }
    result
}

/// Wrap a URL in its href attribute so replacement in the translated text
/// cannot touch look-alike plain text.
fn wrap_with_href(url: &str) -> String {
    format!("href=\"{}\"", url)
}

/// Translate one group of blocks containing at least one payload block.
///
/// Margin tags that pair with each other are stripped first and re-attached
/// literally around the translated text; anchor pairs are never stripped
/// because their href comment belongs to this unit. The collaborator is
/// invoked once for the unit and once per distinct hyperlink.
pub async fn translate_blocks(
    doc: &str,
    blocks: &[Block],
    tags: &[TagRecord],
    meta: &MetaAllocator,
    translator: &dyn MachineTranslator,
    hyperlink_label: &str,
) -> MtResult<String> {
    debug_assert!(!blocks.is_empty(), "a translation unit is never empty");

    let group_start = blocks[0].start;
    let group_end = blocks[blocks.len() - 1].end;

    // Strip pair-matched margin tags.
    let mut lo = 0;
    let mut hi = blocks.len();
    while hi - lo > 2 {
        let (left, right) = match (blocks[lo].kind, blocks[hi - 1].kind) {
            (BlockKind::Tag(left), BlockKind::Tag(right)) => (left, right),
            _ => break,
        };
        if tags[left].pair != Some(right) {
            break;
        }
        if tags[left].name == ANCHOR_TAG_NAME {
            break;
        }
        lo += 1;
        hi -= 1;
    }

    let scope_start = blocks[lo].start;
    let scope_end = blocks[hi - 1].end;

    let mut used_meta_bodies: HashSet<&str> = HashSet::new();
    let mut comment = String::new();
    let mut anchor_hrefs: Vec<(&str, &str)> = Vec::new();

    // Build the text the collaborator will see: placeholders for tags,
    // literal text for payload.
    let mut source = String::new();
    for block in &blocks[lo..hi] {
        match block.kind {
            BlockKind::Tag(index) => {
                let tag = &tags[index];
                let meta_body = tag.meta_body.as_deref().unwrap_or_default();
                source.push_str(meta_body);
                used_meta_bodies.insert(meta_body);
                if let Some(href) = tag.comment.as_deref() {
                    comment.push_str(meta_body);
                    comment.push_str(": ");
                    comment.push_str(href);
                    comment.push('\n');
                    if !anchor_hrefs.iter().any(|(id, _)| *id == meta_body) {
                        anchor_hrefs.push((meta_body, href));
                    }
                }
            }
            BlockKind::Payload => source.push_str(&doc[block.start..block.end]),
            BlockKind::Atomic => {}
        }
    }

    let source = decode_entities(&source);
    let comment = if comment.is_empty() {
        None
    } else {
        Some(comment)
    };

    let translated = translator.translate(&source, comment.as_deref()).await?;
    let mut translated = encode_entities(&translated);

    // Put the real tags back.
    for meta_body in &used_meta_bodies {
        if let Some(markup) = meta.markup_for(meta_body) {
            translated = translated.replace(meta_body, markup);
        }
    }

    // Translate hyperlinks, one call per distinct id in first-seen order.
    for (meta_body, href) in anchor_hrefs {
        let href_comment = format!("{} {}", hyperlink_label, meta_body);
        let translated_href = translator.translate(href, Some(&href_comment)).await?;
        translated = translated.replace(&wrap_with_href(href), &wrap_with_href(&translated_href));
    }

    let mut result = String::new();
    result.push_str(&doc[group_start..scope_start]);
    result.push_str(&translated);
    result.push_str(&doc[scope_end..group_end]);
    Ok(result)
}
