//! Word count derivation and header display.
//!
//! Both are pure functions of their input; callers recompute them after
//! every content change.

use once_cell::sync::Lazy;
use regex::Regex;

/// Word target shown in the details header.
pub const DEFAULT_WORD_TARGET: usize = 250;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("valid word regex"));

/// Counts runs of non-whitespace characters in `text`.
///
/// Empty or whitespace-only input yields `0`.
pub fn count_words(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}

/// Header label and reached flag derived from a word count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDisplay {
    /// `"<count> / <target>"`.
    pub label: String,
    /// `true` once the count is strictly above the target.
    pub reached: bool,
}

pub fn header_display(word_count: usize, target: usize) -> HeaderDisplay {
    HeaderDisplay {
        label: format!("{word_count} / {target}"),
        reached: word_count > target,
    }
}
