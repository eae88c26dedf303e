//! Record types produced by extraction
//!
//! The serialized field labels (`file name`, `line no`, `source type`,
//! `text`) are the column headers of the report and must not change.

use serde::{Deserialize, Serialize};

/// Syntax a match was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// String literal in script code (standalone or embedded in markup)
    Script,
    /// Markup text node or attribute value
    Markup,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Markup => "markup",
        }
    }
}

/// One text fragment found in a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "file name")]
    pub file_name: String,

    /// 1-based physical line in the original file
    #[serde(rename = "line no")]
    pub line_no: usize,

    #[serde(rename = "source type")]
    pub source_kind: SourceKind,

    pub text: String,
}

impl MatchRecord {
    pub fn new(
        file_name: impl Into<String>,
        line_no: usize,
        source_kind: SourceKind,
        text: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            line_no,
            source_kind,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_report_labels() {
        let record = MatchRecord::new("a.vue", 3, SourceKind::Markup, "标题");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"file name":"a.vue","line no":3,"source type":"markup","text":"标题"}"#
        );
    }

    #[test]
    fn test_source_kind_names() {
        assert_eq!(SourceKind::Script.as_str(), "script");
        assert_eq!(SourceKind::Markup.as_str(), "markup");
    }
}
