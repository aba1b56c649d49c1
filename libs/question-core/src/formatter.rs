//! Normalization of question markup before it is placed on the page.

use std::sync::OnceLock;

use regex::Regex;

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

fn between_tags_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r">\s+<").expect("valid regex"))
}

fn math_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<math([^>]*)>(.*?)</math>").expect("valid regex"))
}

/// Format stem, option or rationale markup for display.
///
/// Escaped sequences left over from JSON export are restored, whitespace is
/// collapsed, MathML blocks are rewritten with their attributes intact and the
/// result is wrapped in a paragraph unless it already has one.
pub fn format_content(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let unescaped = raw
        .replace("\\n", "\n")
        .replace("\\\"", "\"")
        .replace("\\\\", "\\");

    let collapsed = whitespace_re().replace_all(unescaped.trim(), " ");
    let compact = between_tags_re().replace_all(&collapsed, "><");
    let formatted = math_block_re()
        .replace_all(&compact, "<math${1}>${2}</math>")
        .into_owned();

    if !formatted.starts_with("<p") && !formatted.contains("<p>") {
        format!("<p>{formatted}</p>")
    } else {
        formatted
    }
}
