/// Kind of a document block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Indivisible span without translatable payload
    Atomic,
    /// Formatting tag occurrence; carries an index into the document tag table
    Tag(usize),
    /// Literal translatable text
    Payload,
}

/// Direction of a formatting tag occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagDirection {
    Opening,
    Closing,
}

/// A span of the source document, half-open byte offsets, ordered by start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub start: usize,
    pub end: usize,
}

impl Block {
    pub fn new(kind: BlockKind, start: usize, end: usize) -> Self {
        Block { kind, start, end }
    }

    pub fn is_atomic(&self) -> bool {
        self.kind == BlockKind::Atomic
    }

    pub fn is_payload(&self) -> bool {
        self.kind == BlockKind::Payload
    }

    /// Index into the tag table for tag blocks.
    pub fn tag_index(&self) -> Option<usize> {
        match self.kind {
            BlockKind::Tag(index) => Some(index),
            _ => None,
        }
    }
}

/// A formatting tag occurrence found in the document.
///
/// The `pair` field is an index into the shared tag table, not an owned
/// link, so paired tags never own each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub name: String,
    pub direction: TagDirection,
    pub start: usize,
    pub end: usize,
    /// Short placeholder standing in for this occurrence during translation
    pub meta_body: Option<String>,
    /// href value carried into the translation-unit comment for anchor tags
    pub comment: Option<String>,
    /// Index of the matching opposite-direction tag, if one was found
    pub pair: Option<usize>,
}

impl TagRecord {
    pub fn new(name: &str, direction: TagDirection, start: usize, end: usize) -> Self {
        TagRecord {
            name: name.to_string(),
            direction,
            start,
            end,
            meta_body: None,
            comment: None,
            pair: None,
        }
    }

    pub fn is_opening(&self) -> bool {
        self.direction == TagDirection::Opening
    }

    pub fn has_pair(&self) -> bool {
        self.pair.is_some()
    }

    pub fn has_meta_body(&self) -> bool {
        self.meta_body.is_some()
    }

    /// The literal source text of this occurrence.
    pub fn text<'a>(&self, doc: &'a str) -> &'a str {
        &doc[self.start..self.end]
    }
}
