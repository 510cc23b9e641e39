//! Tree-sitter adapter for tagged template literals.

use std::path::Path;

use arborium_tree_sitter as tree_sitter;
use quasiql_langs::{FieldId, Lang, NodeKindId};
use rowan::{TextRange, TextSize};
use tree_sitter::{Node, Tree};

use super::{SourceLocation, TaggedLiteral};
use crate::invariants::{ensure_field, ensure_kind};

/// Node kinds and fields of an ECMAScript grammar used to recognize tags.
#[derive(Debug, Clone, Copy)]
struct HostGrammar {
    call_expression: NodeKindId,
    template_string: NodeKindId,
    template_substitution: NodeKindId,
    identifier: NodeKindId,
    member_expression: NodeKindId,
    subscript_expression: NodeKindId,
    string: NodeKindId,
    function: FieldId,
    arguments: FieldId,
    object: FieldId,
    property: FieldId,
    index: FieldId,
}

impl HostGrammar {
    fn resolve(lang: &Lang) -> Self {
        Self {
            call_expression: ensure_kind(lang, "call_expression"),
            template_string: ensure_kind(lang, "template_string"),
            template_substitution: ensure_kind(lang, "template_substitution"),
            identifier: ensure_kind(lang, "identifier"),
            member_expression: ensure_kind(lang, "member_expression"),
            subscript_expression: ensure_kind(lang, "subscript_expression"),
            string: ensure_kind(lang, "string"),
            function: ensure_field(lang, "function"),
            arguments: ensure_field(lang, "arguments"),
            object: ensure_field(lang, "object"),
            property: ensure_field(lang, "property"),
            index: ensure_field(lang, "index"),
        }
    }

    /// Dotted text of a tag expression: `a`, `a.b`, `a["b"]` → `a.b`.
    ///
    /// Returns `None` for tags that are not a plain identifier path.
    fn tag_text(&self, node: Node<'_>, source: &str) -> Option<String> {
        let kind = node.kind_id();

        if kind == self.identifier {
            return Some(node_text(node, source)?.to_string());
        }

        if kind == self.member_expression {
            let object = node.child_by_field_id(self.object.get())?;
            let property = node.child_by_field_id(self.property.get())?;
            let object = self.tag_text(object, source)?;
            return Some(format!("{object}.{}", node_text(property, source)?));
        }

        if kind == self.subscript_expression {
            let object = node.child_by_field_id(self.object.get())?;
            let index = node.child_by_field_id(self.index.get())?;
            if index.kind_id() != self.string {
                return None;
            }
            let quoted = node_text(index, source)?;
            let key = quoted.get(1..quoted.len().checked_sub(1)?)?;
            let object = self.tag_text(object, source)?;
            return Some(format!("{object}.{key}"));
        }

        None
    }
}

fn node_text<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    source.get(node.byte_range())
}

/// A tagged template literal backed by a tree-sitter node.
#[derive(Debug, Clone)]
pub struct TsTaggedLiteral<'t> {
    tag: String,
    node: Node<'t>,
    template: Node<'t>,
    substitution_kind: NodeKindId,
    source: &'t str,
    file: &'t Path,
}

impl<'t> TsTaggedLiteral<'t> {
    /// Range of the whole tagged template, tag included.
    pub fn range(&self) -> TextRange {
        TextRange::new(to_size(self.node.start_byte()), to_size(self.node.end_byte()))
    }

    /// The `template_string` node.
    pub fn template(&self) -> Node<'t> {
        self.template
    }

    /// Byte range of the literal text between the backticks.
    pub fn content_range(&self) -> TextRange {
        let start = (self.template.start_byte() + 1).min(self.template.end_byte());
        let end = self.template.end_byte().saturating_sub(1).max(start);
        TextRange::new(to_size(start), to_size(end))
    }
}

impl TaggedLiteral for TsTaggedLiteral<'_> {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn quasi_segments(&self) -> Vec<&str> {
        let content = self.content_range();
        let mut segments = Vec::new();
        let mut start = usize::from(content.start());

        let mut cursor = self.template.walk();
        for child in self.template.named_children(&mut cursor) {
            if child.kind_id() == self.substitution_kind {
                segments.push(&self.source[start..child.start_byte()]);
                start = child.end_byte();
            }
        }
        segments.push(&self.source[start..usize::from(content.end()).max(start)]);
        segments
    }

    fn location(&self) -> SourceLocation {
        SourceLocation {
            file: self.file.to_path_buf(),
            range: self.content_range(),
        }
    }
}

fn to_size(offset: usize) -> TextSize {
    TextSize::from(offset as u32)
}

/// Every tagged template literal in `tree`, in source order.
///
/// Tags that are not an identifier path (calls, computed keys) are skipped.
pub fn tagged_literals<'t>(
    lang: &Lang,
    tree: &'t Tree,
    source: &'t str,
    file: &'t Path,
) -> Vec<TsTaggedLiteral<'t>> {
    let grammar = HostGrammar::resolve(lang);
    let mut literals = Vec::new();
    let mut cursor = tree.walk();

    'walk: loop {
        let node = cursor.node();
        if let Some(literal) = tagged_literal(&grammar, node, source, file) {
            literals.push(literal);
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                continue 'walk;
            }
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }

    literals
}

fn tagged_literal<'t>(
    grammar: &HostGrammar,
    node: Node<'t>,
    source: &'t str,
    file: &'t Path,
) -> Option<TsTaggedLiteral<'t>> {
    if node.kind_id() != grammar.call_expression {
        return None;
    }
    let template = node.child_by_field_id(grammar.arguments.get())?;
    if template.kind_id() != grammar.template_string {
        return None;
    }
    let function = node.child_by_field_id(grammar.function.get())?;
    let tag = grammar.tag_text(function, source)?;

    Some(TsTaggedLiteral {
        tag,
        node,
        template,
        substitution_kind: grammar.template_substitution,
        source,
        file,
    })
}
