//! Script detector (JavaScript, JSX, TypeScript, TSX)
//!
//! Scans the string-literal tokens of a script buffer and records those
//! containing characters in the configured range. Tokens are the `string`
//! nodes of the tree-sitter tree taken in document order; template literals
//! and JSX text are not string tokens and are not reported.
//!
//! When the buffer was cut out of a markup file, `line_offset` carries the
//! number of lines preceding it in the enclosing file, so the parser's rows
//! (relative to the buffer) are translated into the file's line numbers.

use tracing::{debug, trace, warn};
use tree_sitter::Node;

use crate::detectors::common::{describe_syntax_error, first_syntax_error, get_node_text, parse, visit_all};
use crate::detectors::dynamic_import::neutralize_dynamic_imports;
use crate::error::{ExtractError, Result};
use crate::lang::Lang;
use crate::range::RangeFilter;
use crate::schema::{MatchRecord, SourceKind};

/// A string-literal token as reported by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringToken<'s> {
    /// Raw lexeme including the surrounding quotes
    pub lexeme: &'s str,
    /// 0-based row within the parsed buffer
    pub row: usize,
    /// 0-based byte column within the row
    pub column: usize,
}

/// Extracts string literals from script code
#[derive(Debug, Clone, Copy)]
pub struct ScriptExtractor<'a> {
    filter: &'a RangeFilter,
    lang: Lang,
}

impl<'a> ScriptExtractor<'a> {
    pub fn new(filter: &'a RangeFilter, lang: Lang) -> Self {
        Self { filter, lang }
    }

    /// Extract matching string literals from `code`
    ///
    /// Fails with [`ExtractError::ScriptParse`] if the buffer does not parse
    /// cleanly; no records are returned for a buffer with syntax errors.
    pub fn extract(
        &self,
        code: &str,
        file_name: &str,
        line_offset: usize,
    ) -> Result<Vec<MatchRecord>> {
        let code = neutralize_dynamic_imports(code);

        let tree = parse(&code, self.lang)?.ok_or_else(|| ExtractError::ScriptParse {
            file: file_name.to_string(),
            message: "parser produced no tree".to_string(),
        })?;
        let root = tree.root_node();

        if let Some(error) = first_syntax_error(&root) {
            let err = ExtractError::ScriptParse {
                file: file_name.to_string(),
                message: describe_syntax_error(&error, &code, line_offset),
            };
            warn!("{}", err);
            return Err(err);
        }

        let mut records = Vec::new();
        for token in string_tokens(&root, &code) {
            let text = strip_quotes(token.lexeme);
            if self.filter.test(text) {
                let line_no = token.row + 1 + line_offset;
                trace!(
                    file = file_name,
                    line_no,
                    column = token.column + 1,
                    "string literal in range"
                );
                records.push(MatchRecord::new(file_name, line_no, SourceKind::Script, text));
            }
        }

        debug!(
            file = file_name,
            lang = self.lang.name(),
            records = records.len(),
            "scanned script"
        );
        Ok(records)
    }
}

/// All string-literal tokens under `root`, in document order
pub fn string_tokens<'s>(root: &Node, source: &'s str) -> Vec<StringToken<'s>> {
    let mut tokens = Vec::new();
    visit_all(root, |node| {
        if node.kind() == "string" {
            let pos = node.start_position();
            tokens.push(StringToken {
                lexeme: get_node_text(node, source),
                row: pos.row,
                column: pos.column,
            });
        }
    });
    tokens
}

/// Drop one leading and one trailing quote character
fn strip_quotes(lexeme: &str) -> &str {
    let is_quote = |c: char| c == '\'' || c == '"';
    let inner = lexeme.strip_prefix(is_quote).unwrap_or(lexeme);
    inner.strip_suffix(is_quote).unwrap_or(inner)
}
