//! Text cleanup for reports.
//!
//! The analysis API returns loosely formatted Markdown. Reports strip the
//! markup and regroup the prose into short paragraphs.

use std::sync::LazyLock;

use regex::Regex;

/// Sentences per paragraph.
pub const SENTENCES_PER_PARAGRAPH: usize = 3;

static CLEANUP_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"[^\x00-\x7F]", " "),
        (r"#{1,6}\s*", ""),
        (r"\*\*|__", ""),
        (r"\*|_", ""),
        (r"\|", " "),
        (r"-{2,}", " "),
        (r"\+", " "),
        (r"\[|\]", ""),
        (r"\{|\}", ""),
        (r"(?m)^\s*[-*]\s*", ""),
        (r"::", ":"),
        (r";;", ";"),
        (r"\s+", " "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (Regex::new(pattern).expect("cleanup pattern is valid"), replacement)
    })
    .collect()
});

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern is valid"));

/// Strip Markdown markup and non-ASCII characters, collapsing whitespace.
pub fn clean_text(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in CLEANUP_RULES.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out.trim().to_string()
}

/// Split cleaned text into sentences.
///
/// A trailing fragment without closing punctuation is kept as its own
/// sentence.
pub fn sentences(text: &str) -> Vec<String> {
    let cleaned = clean_text(text);
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut end = 0;
    for m in SENTENCE.find_iter(&cleaned) {
        let sentence = m.as_str().trim();
        if !sentence.is_empty() {
            out.push(sentence.to_string());
        }
        end = m.end();
    }

    let tail = cleaned[end..].trim();
    if !tail.is_empty() {
        out.push(tail.to_string());
    }

    out
}

/// Group text into paragraphs of three sentences.
pub fn paragraphs(text: &str) -> Vec<String> {
    sentences(text)
        .chunks(SENTENCES_PER_PARAGRAPH)
        .map(|chunk| chunk.join(" "))
        .collect()
}
