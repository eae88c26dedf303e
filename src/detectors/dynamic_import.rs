//! Dynamic `import(...)` neutralization
//!
//! Each `import(...)` call expression is replaced with an empty object
//! literal before the script is parsed. The pattern stops at the first `)`,
//! so a call whose argument itself contains parentheses
//! (`import(path(x))`) leaves a stray `)` behind and the file will usually
//! fail to parse.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static DYNAMIC_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"import\([^)]+\)").expect("Invalid dynamic import regex"));

/// Replace every dynamic import call with `{}`
///
/// Newlines swallowed by a multi-line call are re-emitted after the
/// replacement so that every following token keeps its line number.
pub fn neutralize_dynamic_imports(code: &str) -> Cow<'_, str> {
    DYNAMIC_IMPORT.replace_all(code, |caps: &Captures| {
        let breaks = caps[0].matches('\n').count();
        let mut replacement = String::with_capacity(2 + breaks);
        replacement.push_str("{}");
        replacement.extend(std::iter::repeat('\n').take(breaks));
        replacement
    })
}
