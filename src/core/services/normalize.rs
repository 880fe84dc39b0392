//! Comment normalizer - strips embedded `<!-- ... -->` markup

use std::sync::LazyLock;

use regex::Regex;

/// Non-greedy, may span lines
static COMMENT_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment pattern"));

/// Remove every `<!-- ... -->` block from the text
///
/// Text without markup is returned unchanged.
#[must_use]
pub fn strip_comment_markup(text: &str) -> String {
    COMMENT_MARKUP.replace_all(text, "").into_owned()
}
