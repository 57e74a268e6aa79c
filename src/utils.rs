// Utility functions
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static regex"));

/// Turns text into a URL slug: lower-case, runs of anything outside
/// `[a-z0-9]` collapsed into a single `-`, no leading/trailing `-`.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Converts a rendered HTML snippet into plain text, decoding entities.
pub fn html_to_text(html: &str) -> String {
    if !html.contains(['<', '&']) {
        return html.trim().to_string();
    }
    let fragment = Html::parse_fragment(html);
    fragment
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}
