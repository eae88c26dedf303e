//! Markup detector (HTML, Vue single-file components)
//!
//! The tree-sitter HTML tree is first lowered into a small [`SyntaxNode`]
//! tree that keeps only what extraction needs, then walked depth first:
//!
//! - text nodes are trimmed and recorded,
//! - attribute values of tags are recorded as written,
//! - `<script>` bodies are handed to the script detector with the line
//!   offset of the body inside the file.
//!
//! A script block that fails to parse is counted and skipped; the rest of
//! the document is still extracted.

use tracing::{debug, trace, warn};
use tree_sitter::Node;

use crate::detectors::common::{get_node_text, parse};
use crate::detectors::javascript::ScriptExtractor;
use crate::error::{ExtractError, Result};
use crate::lang::Lang;
use crate::lines::LineIndex;
use crate::range::RangeFilter;
use crate::schema::{MatchRecord, SourceKind};

/// Markup tree node, borrowing its text from the parsed buffer
///
/// `start` fields are byte offsets into that buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode<'s> {
    Document {
        children: Vec<SyntaxNode<'s>>,
    },
    Tag {
        name: &'s str,
        attributes: Vec<Attribute<'s>>,
        children: Vec<SyntaxNode<'s>>,
        start: usize,
    },
    /// Adjacent text and character references, untrimmed
    Text { content: &'s str, start: usize },
    /// Body of a `<script>` element, exactly as written between the tags
    Script {
        content: &'s str,
        start: usize,
        lang: Lang,
    },
    Style { start: usize },
    Comment { start: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'s> {
    pub name: &'s str,
    pub value: Option<AttributeValue<'s>>,
}

/// Attribute value without its quotes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValue<'s> {
    pub content: &'s str,
    pub start: usize,
}

/// Records found in one markup buffer
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MarkupExtraction {
    pub records: Vec<MatchRecord>,
    /// Embedded script blocks that failed to parse
    pub script_failures: usize,
}

/// Extracts text, attribute values and embedded script strings from markup
#[derive(Debug, Clone, Copy)]
pub struct MarkupExtractor<'a> {
    filter: &'a RangeFilter,
}

impl<'a> MarkupExtractor<'a> {
    pub fn new(filter: &'a RangeFilter) -> Self {
        Self { filter }
    }

    pub fn extract(&self, code: &str, file_name: &str) -> Result<MarkupExtraction> {
        let document = build_tree(code, file_name)?;
        let lines = LineIndex::new(code);

        let mut walk = Walk {
            filter: self.filter,
            file_name,
            lines: &lines,
            out: MarkupExtraction::default(),
        };
        walk.visit(&document);

        debug!(
            file = file_name,
            records = walk.out.records.len(),
            script_failures = walk.out.script_failures,
            "walked markup"
        );
        Ok(walk.out)
    }
}

struct Walk<'w> {
    filter: &'w RangeFilter,
    file_name: &'w str,
    lines: &'w LineIndex,
    out: MarkupExtraction,
}

impl Walk<'_> {
    fn visit(&mut self, node: &SyntaxNode) {
        match node {
            SyntaxNode::Document { children } => self.visit_children(children),
            SyntaxNode::Text { content, start } => {
                let text = content.trim();
                if !text.is_empty() {
                    self.emit(self.lines.line_number_at(*start), text);
                }
            }
            SyntaxNode::Tag {
                name,
                attributes,
                children,
                start,
            } => {
                for value in attributes.iter().filter_map(|a| a.value.as_ref()) {
                    if value.content.is_empty() {
                        continue;
                    }
                    if self.emit(self.lines.line_number_at(value.start), value.content) {
                        trace!(
                            tag = *name,
                            tag_line = self.lines.line_number_at(*start),
                            "attribute value in range"
                        );
                    }
                }
                self.visit_children(children);
            }
            SyntaxNode::Script {
                content,
                start,
                lang,
            } => {
                if content.trim().is_empty() {
                    return;
                }
                let line_offset = self.lines.line_number_at(*start) - 1;
                let script = ScriptExtractor::new(self.filter, *lang);
                match script.extract(content, self.file_name, line_offset) {
                    Ok(records) => self.out.records.extend(records),
                    Err(e) => {
                        warn!("embedded script skipped: {}", e);
                        self.out.script_failures += 1;
                    }
                }
            }
            SyntaxNode::Style { .. } | SyntaxNode::Comment { .. } => {}
        }
    }

    fn visit_children(&mut self, children: &[SyntaxNode]) {
        for child in children {
            self.visit(child);
        }
    }

    /// Record `text` if it is in range; returns whether it was recorded
    fn emit(&mut self, line_no: usize, text: &str) -> bool {
        if !self.filter.test(text) {
            return false;
        }
        self.out.records.push(MatchRecord::new(
            self.file_name,
            line_no,
            SourceKind::Markup,
            text,
        ));
        true
    }
}

/// Parse `code` and lower it into a [`SyntaxNode::Document`]
///
/// Localized syntax errors are tolerated: error nodes are lowered
/// transparently so that the text around them is still reachable.
pub fn build_tree<'s>(code: &'s str, file_name: &str) -> Result<SyntaxNode<'s>> {
    let tree = parse(code, Lang::Html)?.ok_or_else(|| ExtractError::MarkupParse {
        file: file_name.to_string(),
        message: "parser produced no tree".to_string(),
    })?;
    // The HTML grammar recovers from any input, so the root is always a
    // document; errors only appear as ERROR nodes below it.
    let root = tree.root_node();
    if root.has_error() {
        debug!(file = file_name, "markup contains syntax errors, continuing");
    }

    Ok(SyntaxNode::Document {
        children: lower_children(&root, code, 0),
    })
}

/// Lower the children of `parent`
///
/// A text run starts where the previous sibling ended (`from` for the
/// first child), so its offset includes the whitespace that tree-sitter
/// leaves out of `text` nodes.
fn lower_children<'s>(parent: &Node, source: &'s str, from: usize) -> Vec<SyntaxNode<'s>> {
    let mut out = Vec::new();
    // Byte span of the pending run of text/entity nodes
    let mut run: Option<(usize, usize)> = None;
    let mut prev_end = from;

    let mut cursor = parent.walk();
    for child in parent.named_children(&mut cursor) {
        if matches!(child.kind(), "text" | "entity") {
            run = Some(match run {
                Some((start, _)) => (start, child.end_byte()),
                None => (prev_end, child.end_byte()),
            });
            prev_end = child.end_byte();
            continue;
        }
        flush_text(&mut run, source, &mut out);

        match child.kind() {
            "element" => out.push(lower_element(&child, source)),
            "script_element" => out.push(lower_script(&child, source)),
            "style_element" => out.push(SyntaxNode::Style {
                start: child.start_byte(),
            }),
            "comment" => out.push(SyntaxNode::Comment {
                start: child.start_byte(),
            }),
            "ERROR" => out.extend(lower_children(&child, source, prev_end)),
            // tags are read by their element; doctype and stray end tags carry no text
            _ => {}
        }
        prev_end = child.end_byte();
    }
    flush_text(&mut run, source, &mut out);

    out
}

fn flush_text<'s>(run: &mut Option<(usize, usize)>, source: &'s str, out: &mut Vec<SyntaxNode<'s>>) {
    if let Some((start, end)) = run.take() {
        out.push(SyntaxNode::Text {
            content: &source[start..end],
            start,
        });
    }
}

fn lower_element<'s>(node: &Node, source: &'s str) -> SyntaxNode<'s> {
    let (name, attributes) = match opening_tag(node) {
        Some(tag) => (tag_name(&tag, source), lower_attributes(&tag, source)),
        None => ("", Vec::new()),
    };

    SyntaxNode::Tag {
        name,
        attributes,
        children: lower_children(node, source, node.start_byte()),
        start: node.start_byte(),
    }
}

fn lower_script<'s>(node: &Node, source: &'s str) -> SyntaxNode<'s> {
    let start_tag = opening_tag(node);
    let lang = start_tag
        .as_ref()
        .map(|tag| lower_attributes(tag, source))
        .and_then(|attrs| {
            attrs
                .into_iter()
                .find(|a| a.name.eq_ignore_ascii_case("lang"))
                .and_then(|a| a.value.map(|v| v.content))
        });

    let start = start_tag.map_or(node.start_byte(), |tag| tag.end_byte());
    let end = child_of_kind(node, "end_tag").map_or(node.end_byte(), |tag| tag.start_byte());
    let end = end.max(start);

    SyntaxNode::Script {
        content: &source[start..end],
        start,
        lang: Lang::from_script_lang(lang),
    }
}

fn lower_attributes<'s>(tag: &Node, source: &'s str) -> Vec<Attribute<'s>> {
    let mut attributes = Vec::new();
    let mut cursor = tag.walk();
    for attr in tag.named_children(&mut cursor) {
        if attr.kind() != "attribute" {
            continue;
        }
        let name = child_of_kind(&attr, "attribute_name")
            .map(|n| get_node_text(&n, source))
            .unwrap_or("");
        attributes.push(Attribute {
            name,
            value: attribute_value(&attr, source),
        });
    }
    attributes
}

fn attribute_value<'s>(attr: &Node, source: &'s str) -> Option<AttributeValue<'s>> {
    let value = match child_of_kind(attr, "attribute_value") {
        Some(unquoted) => unquoted,
        None => {
            let quoted = child_of_kind(attr, "quoted_attribute_value")?;
            child_of_kind(&quoted, "attribute_value")?
        }
    };

    Some(AttributeValue {
        content: get_node_text(&value, source),
        start: value.start_byte(),
    })
}

fn opening_tag<'t>(element: &Node<'t>) -> Option<Node<'t>> {
    child_of_kind(element, "start_tag").or_else(|| child_of_kind(element, "self_closing_tag"))
}

fn tag_name<'s>(tag: &Node, source: &'s str) -> &'s str {
    child_of_kind(tag, "tag_name")
        .map(|n| get_node_text(&n, source))
        .unwrap_or("")
}

fn child_of_kind<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}
