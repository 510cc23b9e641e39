//! Host languages that can carry embedded GraphQL tags.
//!
//! Each language wraps a tree-sitter grammar behind [`LangImpl`], so tag
//! discovery never depends on a particular grammar crate.

use std::num::NonZeroU16;
use std::sync::Arc;

use arborium_tree_sitter as tree_sitter;
use tree_sitter::Language;

pub mod builtin;

pub use builtin::*;

/// Tree-sitter node kind id.
pub type NodeKindId = u16;

/// Tree-sitter field id.
pub type FieldId = NonZeroU16;

/// User-facing language type.
pub type Lang = Arc<dyn LangImpl>;

/// Trait providing a unified facade over tree-sitter's Language API.
pub trait LangImpl: Send + Sync {
    fn name(&self) -> &str;

    /// File extensions (without the dot) mapped to this language.
    fn extensions(&self) -> &[&'static str];

    fn language(&self) -> &Language;

    /// Parse source code into a tree-sitter tree.
    fn parse(&self, source: &str) -> tree_sitter::Tree;

    fn resolve_named_node(&self, kind: &str) -> Option<NodeKindId>;
    fn resolve_field(&self, name: &str) -> Option<FieldId>;
}

#[derive(Debug)]
pub struct LangInner {
    name: String,
    extensions: &'static [&'static str],
    ts_lang: Language,
}

impl LangInner {
    pub fn new_static(name: &str, extensions: &'static [&'static str], ts_lang: Language) -> Self {
        Self {
            name: name.to_owned(),
            extensions,
            ts_lang,
        }
    }
}

impl LangImpl for LangInner {
    fn name(&self) -> &str {
        &self.name
    }

    fn extensions(&self) -> &[&'static str] {
        self.extensions
    }

    fn language(&self) -> &Language {
        &self.ts_lang
    }

    fn parse(&self, source: &str) -> tree_sitter::Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.ts_lang)
            .expect("failed to set language");
        parser.parse(source, None).expect("failed to parse source")
    }

    fn resolve_named_node(&self, kind: &str) -> Option<NodeKindId> {
        let id = self.ts_lang.id_for_node_kind(kind, true);
        // For named nodes, 0 always means "not found"
        (id != 0).then_some(id)
    }

    fn resolve_field(&self, name: &str) -> Option<FieldId> {
        self.ts_lang.field_id_for_name(name)
    }
}
