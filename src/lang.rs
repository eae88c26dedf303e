//! Syntax detection and tree-sitter grammar loading

use tree_sitter::Language;

use crate::error::{ExtractError, Result};

/// Source syntaxes the extractor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
    Json,
    Html,
    Vue,
}

impl Lang {
    /// Detect syntax from file extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Ok(Self::JavaScript),
            "jsx" => Ok(Self::Jsx),
            "ts" | "mts" | "cts" => Ok(Self::TypeScript),
            "tsx" => Ok(Self::Tsx),
            "json" => Ok(Self::Json),
            "html" | "htm" => Ok(Self::Html),
            "vue" => Ok(Self::Vue),
            _ => Err(ExtractError::Grammar {
                message: format!("unsupported extension: {}", ext),
            }),
        }
    }

    /// Pick the grammar for an embedded `<script lang="...">` block
    pub fn from_script_lang(lang: Option<&str>) -> Self {
        match lang.map(|l| l.trim().to_lowercase()).as_deref() {
            Some("ts") | Some("typescript") => Self::TypeScript,
            Some("tsx") => Self::Tsx,
            Some("jsx") => Self::Jsx,
            _ => Self::JavaScript,
        }
    }

    /// Get the canonical name of the syntax
    pub fn name(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Jsx => "jsx",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::Json => "json",
            Self::Html => "html",
            Self::Vue => "vue",
        }
    }

    /// Get the tree-sitter Language for parsing
    ///
    /// Structured data is parsed by the script grammar after being wrapped
    /// into an assignment, and Vue single-file components by the HTML one.
    pub fn tree_sitter_language(&self) -> Language {
        match self {
            Self::JavaScript | Self::Jsx | Self::Json => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::Html | Self::Vue => tree_sitter_html::LANGUAGE.into(),
        }
    }

    /// Get the syntax family that selects the extraction strategy
    pub fn family(&self) -> LangFamily {
        match self {
            Self::JavaScript | Self::Jsx | Self::TypeScript | Self::Tsx => LangFamily::Script,
            Self::Json => LangFamily::StructuredData,
            Self::Html | Self::Vue => LangFamily::Markup,
        }
    }
}

/// Syntax families, one per extraction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LangFamily {
    /// Program code scanned token by token for string literals
    Script,
    /// Tag/attribute/text trees that may embed scripts
    Markup,
    /// Data-interchange formats wrapped as a script assignment
    StructuredData,
}
