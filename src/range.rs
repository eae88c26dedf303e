//! Character range predicate
//!
//! A range is given as the body of a character class, e.g. `\u4e00-\u9fff`
//! for the CJK unified ideographs block, and is compiled once into a regex.

use regex::Regex;

use crate::error::{ExtractError, Result};

/// Default range: CJK unified ideographs
pub const DEFAULT_RANGE: &str = "\\u4e00-\\u9fff";

/// Compiled "contains a character in range" test
#[derive(Debug, Clone)]
pub struct RangeFilter {
    spec: String,
    class: Regex,
}

impl RangeFilter {
    /// Compile a character-class body (without the surrounding brackets)
    pub fn compile(range_spec: &str) -> Result<Self> {
        let class = Regex::new(&format!("[{}]", range_spec)).map_err(|source| {
            ExtractError::InvalidRange {
                range: range_spec.to_string(),
                source,
            }
        })?;

        Ok(Self {
            spec: range_spec.to_string(),
            class,
        })
    }

    /// True if any character of `text` falls in the range
    pub fn test(&self, text: &str) -> bool {
        self.class.is_match(text)
    }

    /// The range body this filter was compiled from
    pub fn spec(&self) -> &str {
        &self.spec
    }
}
