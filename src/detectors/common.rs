//! Tree-sitter helpers shared by the detectors

use tree_sitter::{Node, Parser, Tree};

use crate::error::{ExtractError, Result};
use crate::lang::Lang;

/// Parse `source` with the grammar for `lang`
///
/// `Ok(None)` means tree-sitter gave up without producing a tree.
pub fn parse(source: &str, lang: Lang) -> Result<Option<Tree>> {
    let mut parser = Parser::new();
    parser
        .set_language(&lang.tree_sitter_language())
        .map_err(|e| ExtractError::Grammar {
            message: format!("{}: {:?}", lang.name(), e),
        })?;

    Ok(parser.parse(source, None))
}

/// Get text content of a node
pub fn get_node_text<'s>(node: &Node, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Visit all nodes in a tree, pre-order
pub fn visit_all<'t, F>(node: &Node<'t>, mut visitor: F)
where
    F: FnMut(&Node<'t>),
{
    visit_all_recursive(node, &mut visitor);
}

fn visit_all_recursive<'t, F>(node: &Node<'t>, visitor: &mut F)
where
    F: FnMut(&Node<'t>),
{
    visitor(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit_all_recursive(&child, visitor);
    }
}

/// First `ERROR` or `MISSING` node in document order
pub fn first_syntax_error<'t>(root: &Node<'t>) -> Option<Node<'t>> {
    if !root.has_error() {
        return None;
    }
    if root.is_error() || root.is_missing() {
        return Some(*root);
    }
    let mut cursor = root.walk();
    let children: Vec<Node<'t>> = root.children(&mut cursor).collect();
    children.iter().find_map(first_syntax_error)
}

/// Human-readable description of a syntax error node
///
/// `line_offset` translates the node's row into the enclosing file.
pub fn describe_syntax_error(node: &Node, source: &str, line_offset: usize) -> String {
    let pos = node.start_position();
    let line = pos.row + 1 + line_offset;
    let column = pos.column + 1;

    if node.is_missing() {
        return format!("missing `{}` at {}:{}", node.kind(), line, column);
    }

    const PREVIEW_CHARS: usize = 40;
    let text = get_node_text(node, source);
    let truncated = text.chars().count() > PREVIEW_CHARS;
    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    let preview = preview.replace('\n', "\\n");
    if truncated {
        format!("unexpected `{}...` at {}:{}", preview, line, column)
    } else {
        format!("unexpected `{}` at {}:{}", preview, line, column)
    }
}
