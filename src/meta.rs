//! Meta body allocation: short placeholder ids that stand in for tag
//! occurrences while a unit is out for translation.
//!
//! Ids look like `<s1>` / `</s1>`: the tag name's first letter plus a
//! per-letter counter. Byte-identical paired tag text reuses one cached
//! id, so repeated identical pairs collapse to the same placeholder;
//! orphan tags always get a fresh one. All allocation state is scoped to
//! one document run and discarded afterward.

use crate::block::TagRecord;
use crate::scanner::TagPatterns;
use std::collections::HashMap;

/// Tag name whose occurrences carry an href comment.
pub(crate) const ANCHOR_TAG_NAME: &str = "a";

/// Per-document placeholder allocation state.
#[derive(Debug, Default)]
pub struct MetaAllocator {
    meta_to_markup: HashMap<String, String>,
    markup_to_meta: HashMap<String, String>,
    counters: HashMap<char, u32>,
}

impl MetaAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a meta body to the tag at `index` and, if it has one, derive
    /// the closing form for its pair. Tags that already carry a meta body
    /// are left untouched, so pairs filled in by an earlier opening are
    /// skipped when their own turn comes.
    pub fn assign(
        &mut self,
        doc: &str,
        tags: &mut [TagRecord],
        index: usize,
        patterns: &TagPatterns,
    ) {
        if tags[index].has_meta_body() {
            return;
        }

        let tag_body = tags[index].text(doc).to_string();
        let cached = self.markup_to_meta.get(&tag_body).cloned();

        let meta_body = match cached {
            // Reuse only works for paired occurrences; orphans stay unique.
            Some(meta_body) if tags[index].has_pair() => meta_body,
            _ => {
                let letter = tags[index].name.chars().next().unwrap_or('?');
                let counter = *self
                    .counters
                    .entry(letter)
                    .and_modify(|counter| *counter += 1)
                    .or_insert(1);
                if tags[index].is_opening() {
                    format!("<{}{}>", letter, counter)
                } else {
                    format!("</{}{}>", letter, counter)
                }
            }
        };
        tags[index].meta_body = Some(meta_body.clone());

        if tags[index].name == ANCHOR_TAG_NAME {
            if let Some(caps) = patterns.href.captures(&tag_body) {
                tags[index].comment = Some(caps[1].to_string());
            }
        }

        self.meta_to_markup
            .insert(meta_body.clone(), tag_body.clone());
        self.markup_to_meta.insert(tag_body, meta_body.clone());

        // The pair can only be a closing tag because of the walking direction.
        if let Some(pair_index) = tags[index].pair {
            let pair_body = tags[pair_index].text(doc).to_string();
            let pair_meta = format!("</{}", &meta_body[1..]);
            tags[pair_index].meta_body = Some(pair_meta.clone());
            self.meta_to_markup.insert(pair_meta, pair_body);
        }
    }

    /// Original tag text for a placeholder id.
    pub fn markup_for(&self, meta_body: &str) -> Option<&str> {
        self.meta_to_markup
            .get(meta_body)
            .map(|markup| markup.as_str())
    }
}
