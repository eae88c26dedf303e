//! Syntax-specific text detectors
//!
//! Each detector knows how to pull candidate text out of one syntax family
//! and turn it into [`MatchRecord`](crate::schema::MatchRecord)s:
//!
//! - `javascript`: string literals of JS, JSX, TS and TSX (and wrapped JSON)
//! - `markup`: text, attribute values and embedded `<script>` blocks of
//!   HTML and Vue files
//!
//! `dynamic_import` holds the preprocessing pass applied to every script
//! buffer before parsing; `common` holds the tree-sitter helpers.

pub mod common;
pub mod dynamic_import;
pub mod javascript;
pub mod markup;

pub use javascript::ScriptExtractor;
pub use markup::{MarkupExtraction, MarkupExtractor, SyntaxNode};
