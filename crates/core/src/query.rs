//! Search query cleanup.
//!
//! The service returns nothing for queries containing punctuation such as `!`
//! or `-`, or medium markers such as `CD1`, even when the rest matches an
//! album title.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").expect("valid regex"));

static MEDIUM_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:cd|dis[ck])\s*\d+").expect("valid regex"));

/// Strip non-word characters (Unicode-aware) and medium markers.
pub fn sanitize(query: &str) -> String {
    let words = NON_WORD.replace_all(query, " ");
    let stripped = MEDIUM_MARKER.replace_all(&words, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Path segment for `/search/albums/{query}`.
pub fn encode(query: &str) -> String {
    urlencoding::encode(query).into_owned()
}
