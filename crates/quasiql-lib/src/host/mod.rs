//! Tagged template literals in host-language source.
//!
//! The rest of the crate sees host syntax only through [`TaggedLiteral`]:
//! the tag, the raw text segments between substitutions, and a location.
//! [`TsTaggedLiteral`] adapts tree-sitter nodes to it, and
//! [`TaggedLiteralSite`] is an owned form for callers that already did
//! their own parsing.

mod ts;


use std::path::PathBuf;

use rowan::TextRange;

pub use ts::{TsTaggedLiteral, tagged_literals};

/// Where a tagged literal sits in its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: PathBuf,
    /// Byte range of the literal text between the backticks.
    pub range: TextRange,
}

/// Capability interface over a tagged template literal.
pub trait TaggedLiteral {
    /// Dotted text of the tag expression, e.g. `graphql.experimental`.
    fn tag(&self) -> &str;

    /// Name of the tag if it is a bare identifier.
    fn tag_identifier(&self) -> Option<&str> {
        let tag = self.tag();
        (!tag.contains('.')).then_some(tag)
    }

    /// Whether the tag is exactly the dotted member expression `pattern`.
    fn matches_pattern(&self, pattern: &str) -> bool {
        self.tag() == pattern
    }

    /// Raw text pieces of the literal, split at each `${...}` substitution.
    fn quasi_segments(&self) -> Vec<&str>;

    fn location(&self) -> SourceLocation;
}

/// An owned tagged literal occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLiteralSite {
    pub tag: String,
    pub segments: Vec<String>,
    pub location: SourceLocation,
}

impl TaggedLiteralSite {
    pub fn new(
        tag: impl Into<String>,
        segments: impl IntoIterator<Item = impl Into<String>>,
        location: SourceLocation,
    ) -> Self {
        Self {
            tag: tag.into(),
            segments: segments.into_iter().map(Into::into).collect(),
            location,
        }
    }

    /// Copies an adapter-backed literal into an owned site.
    pub fn from_literal(literal: &dyn TaggedLiteral) -> Self {
        Self::new(
            literal.tag(),
            literal.quasi_segments(),
            literal.location(),
        )
    }
}

impl TaggedLiteral for TaggedLiteralSite {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn quasi_segments(&self) -> Vec<&str> {
        self.segments.iter().map(String::as_str).collect()
    }

    fn location(&self) -> SourceLocation {
        self.location.clone()
    }
}
