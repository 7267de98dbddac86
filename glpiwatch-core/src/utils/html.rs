// glpiwatch-core/src/utils/html.rs

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use scraper::Html;

/// Named, decimal and hex character references, e.g. `&lt;`, `&#233;`, `&#x2764;`.
static ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});")
        .expect("entity pattern is valid")
});

/// Reduce a GLPI rich-text field to plain text.
///
/// GLPI keeps its rich text entity-encoded (`&lt;p&gt;...`), so references are decoded first
/// and the result is then parsed as an HTML fragment. Every non-blank text node is kept,
/// trimmed, and the nodes are joined with `\n`. Missing or empty input gives an empty string;
/// broken markup yields whatever text the parser recovers.
pub fn normalize_html_text(text: Option<&str>) -> String {
    let raw = match text {
        Some(t) if !t.is_empty() => t,
        _ => return String::new(),
    };

    let decoded = decode_entities(raw);
    let fragment = Html::parse_fragment(&decoded);
    let parts: Vec<&str> = fragment
        .root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    parts.join("\n")
}

/// One pass of character-reference decoding. The fragment parser decodes whatever
/// references remain, so `&amp;lt;b&amp;gt;` ends up as the literal text `<b>`.
fn decode_entities(text: &str) -> Cow<'_, str> {
    ENTITY_RE.replace_all(text, |caps: &Captures| {
        Html::parse_fragment(&caps[0])
            .root_element()
            .text()
            .collect::<String>()
    })
}
