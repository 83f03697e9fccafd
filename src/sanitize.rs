//! Article text cleaning helpers.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

/// Sanitize article text for rendering.
///
/// Order matters and is part of the contract: unsafe substrings are removed
/// before tag stripping, entities are unescaped after it, and truncation
/// happens last. Absent input maps to an empty string.
pub fn clean_content(content: Option<&str>) -> String {
    let Some(raw) = content else {
        return String::new();
    };
    let mut text = raw.replace("window.open", "").replace("javascript:", "");
    text = TAG_RE.replace_all(&text, "").into_owned();
    text = text
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&");
    if text.chars().count() > 200 {
        let mut truncated: String = text.chars().take(200).collect();
        truncated.push_str("...");
        truncated
    } else {
        text
    }
}

/// Cut the provider's `[+N chars]` tail off an article body.
pub fn snippet(content: Option<&str>) -> String {
    let Some(raw) = content else {
        return String::new();
    };
    match raw.find("[+") {
        Some(idx) => raw[..idx].to_string(),
        None => raw.to_string(),
    }
}
