//! # Text Cleaner
//!
//! Normalizes clipboard plain text for pasting as body text.
//!
//! ## Pipeline Steps
//!
//! 1. **Hyphen merging** - rejoin words split across a line wrap (optional)
//! 2. **Line joining** - every CR, LF or CRLF becomes a single space
//! 3. **Whitespace collapsing** - runs of two or more whitespace characters become one space
//! 4. **Trimming** - leading and trailing whitespace removed
//!
//! Hyphen merging has to see the raw line breaks, so it always runs first.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::CleanerConfig;

/// Hyphen, optional whitespace, a line break, optional whitespace.
static RE_WRAP_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s*[\r\n]\s*").unwrap());

static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\n|\r").unwrap());

static RE_WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Step 1: remove wrap hyphens together with the surrounding line break.
///
/// `"hyphen-\nated"` becomes `"hyphenated"`. A dash that is not directly
/// followed by a line break is left alone.
pub fn merge_hyphenated_words(input: &str) -> String {
    RE_WRAP_HYPHEN.replace_all(input, "").into_owned()
}

/// Step 2: replace every line break with a single space.
pub fn join_lines(input: &str) -> String {
    RE_LINE_BREAK.replace_all(input, " ").into_owned()
}

/// Step 3: collapse whitespace runs into a single space.
pub fn collapse_whitespace(input: &str) -> String {
    RE_WHITESPACE_RUN.replace_all(input, " ").into_owned()
}

/// Run the cleaner on clipboard text.
///
/// Total and infallible: empty or whitespace-only input yields an empty string.
///
/// # Example
///
/// ```
/// use pastex::cleaner::clean;
/// use pastex::CleanerConfig;
///
/// let text = "A hyphen-\nated line\n\nwith   gaps ";
/// assert_eq!(clean(text, &CleanerConfig::default()), "A hyphenated line with gaps");
/// ```
pub fn clean(text: &str, config: &CleanerConfig) -> String {
    let merged = if config.merge_hyphenated_words {
        merge_hyphenated_words(text)
    } else {
        text.to_string()
    };

    let joined = join_lines(&merged);
    let collapsed = collapse_whitespace(&joined);

    collapsed.trim().to_string()
}

/// Run the cleaner with default options.
pub fn clean_default(text: &str) -> String {
    clean(text, &CleanerConfig::default())
}
