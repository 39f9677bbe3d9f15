//! Tag pattern construction, document scanning and tag pairing.
//!
//! Scanning works on a configured tag-name set rather than a full markup
//! grammar: every occurrence of a formatting tag is collected into a
//! chronologically sorted tag table, then openings are paired with
//! closings by a forward depth-counting scan. Unrecognized constructs are
//! simply not matched and stay part of the surrounding text.

use crate::block::{TagDirection, TagRecord};
use crate::config::FilterConfig;
use regex::Regex;

/// Matching direction for a built tag pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternDirection {
    Opening,
    Closing,
    /// Match both directions; used for opaque block-level tags
    Either,
}

/// Spans that never carry payload: leading whitespace, embedded image
/// tokens with trailing whitespace, newline plus trailing whitespace.
const ATOMIC_PATTERN: &str = r"^\s+|\{\{IMG.+?\}\}\s*|\n\s*";

/// Value of an `href="…"` attribute inside an anchor tag occurrence.
const HREF_PATTERN: &str = r#"href="(.+?)""#;

/// Build a match pattern for a list of tag names and a direction.
pub fn build_tag_pattern(
    tag_names: &[String],
    direction: PatternDirection,
) -> Result<Regex, String> {
    let (prefix, suffix) = match direction {
        PatternDirection::Opening => ("<(", ")(?:[^>])*>"),
        PatternDirection::Closing => ("</(", ")>"),
        PatternDirection::Either => ("</*(?:", ")(?:[^>])*> *"),
    };
    let pattern = format!("{}{}{}", prefix, tag_names.join("|"), suffix);
    Regex::new(&pattern).map_err(|e| format!("Invalid tag pattern '{}': {}", pattern, e))
}

/// Compiled matchers for one filter configuration.
#[derive(Debug)]
pub struct TagPatterns {
    pub(crate) opening: Regex,
    pub(crate) closing: Regex,
    pub(crate) block: Regex,
    pub(crate) atomic: Regex,
    pub(crate) href: Regex,
}

impl TagPatterns {
    pub fn new(config: &FilterConfig) -> Result<Self, String> {
        Ok(TagPatterns {
            opening: build_tag_pattern(&config.formatting_tags, PatternDirection::Opening)?,
            closing: build_tag_pattern(&config.formatting_tags, PatternDirection::Closing)?,
            block: build_tag_pattern(&config.block_tags, PatternDirection::Either)?,
            atomic: Regex::new(ATOMIC_PATTERN)
                .map_err(|e| format!("Invalid atomic pattern: {}", e))?,
            href: Regex::new(HREF_PATTERN).map_err(|e| format!("Invalid href pattern: {}", e))?,
        })
    }
}

/// Find every formatting tag occurrence in the document, both directions,
/// sorted chronologically.
pub fn scan_formatting_tags(doc: &str, patterns: &TagPatterns) -> Vec<TagRecord> {
    let mut tags = Vec::new();
    for (pattern, direction) in [
        (&patterns.opening, TagDirection::Opening),
        (&patterns.closing, TagDirection::Closing),
    ] {
        for caps in pattern.captures_iter(doc) {
            if let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) {
                tags.push(TagRecord::new(
                    name.as_str(),
                    direction,
                    whole.start(),
                    whole.end(),
                ));
            }
        }
    }
    tags.sort_by_key(|tag| tag.start);
    tags
}

/// Find every block-level tag occurrence, as raw spans.
pub fn scan_block_tags(doc: &str, patterns: &TagPatterns) -> Vec<(usize, usize)> {
    patterns
        .block
        .find_iter(doc)
        .map(|m| (m.start(), m.end()))
        .collect()
}

/// Pair opening and closing occurrences of the same tag name.
///
/// For each unpaired opening tag, scan forward with depth starting at 1:
/// same-name openings increment, same-name closings decrement, and the
/// closing that brings the depth to 0 is the pair. Openings left without a
/// match stay orphans. Pairing is pure depth arithmetic, never nearest
/// match, so textually interleaved same-name tags in malformed input can
/// produce crossing pairs.
pub fn pair_tags(tags: &mut [TagRecord]) {
    for i in 0..tags.len().saturating_sub(1) {
        if tags[i].has_pair() || !tags[i].is_opening() {
            continue;
        }

        let mut depth = 1;
        for j in (i + 1)..tags.len() {
            if tags[j].name != tags[i].name {
                continue;
            }
            if tags[j].is_opening() {
                depth += 1;
                continue;
            }
            depth -= 1;
            if depth == 0 {
                tags[i].pair = Some(j);
                tags[j].pair = Some(i);
                break;
            }
        }
    }
}
