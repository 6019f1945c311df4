//! Parsing helpers for raw product-page text.
//!
//! DOM access stays with the caller; these functions only see strings.

use crate::models::ProductId;
use regex::Regex;
use std::sync::OnceLock;

fn product_path_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/dp/([A-Z0-9]{10})").expect("static regex is valid"))
}

/// Extract the 10-character product code following `/dp/` in a URL
pub fn product_id_from_url(url: &str) -> Option<ProductId> {
    product_path_regex()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .and_then(|m| ProductId::new(m.as_str()).ok())
}

/// Prefer the id embedded in the URL, then a non-empty hint from the page
pub fn resolve_product_id(url: &str, hint: Option<&str>) -> Option<ProductId> {
    product_id_from_url(url).or_else(|| {
        hint.map(str::trim)
            .filter(|h| !h.is_empty())
            .and_then(|h| ProductId::new(h).ok())
    })
}

/// Parse a displayed price such as `"$1,299.99"`.
///
/// Everything but digits and `.` is discarded, then the longest leading
/// numeric prefix is parsed (`"1.2.3"` reads as `1.2`).
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut parts = cleaned.splitn(3, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let candidate = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", if whole.is_empty() { "0" } else { whole }, fraction)
    };

    candidate.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Drop the query string and fragment from a URL
pub fn canonical_url(url: &str) -> String {
    let end = url.find(|c: char| c == '?' || c == '#').unwrap_or(url.len());
    url[..end].to_string()
}
