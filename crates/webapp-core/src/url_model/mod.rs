//! URL normalization and the names derived from it.
//!
//! Everything here is a pure string transform: nothing fails, malformed input
//! simply yields empty components and surfaces later as a fetch error.

mod names;
mod wm_class;

pub use names::name_variants;
pub use wm_class::window_class;

/// Ensures the URL carries a scheme.
///
/// Input that already starts with `http` (covers `https`) is returned as is;
/// anything else gets `https://` prepended. No other validation happens.
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

/// Host and path of `url` (already normalized), or `None` if it does not parse.
pub(crate) fn host_and_path(url: &str) -> Option<(String, String)> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_string();
    Some((host, parsed.path().to_string()))
}

/// First label of the hostname, lowercased: `lichess` for `https://lichess.org/play`.
///
/// Used to seed name suggestions only. Returns an empty string when the input
/// has no parseable hostname.
pub fn extract_domain(raw: &str) -> String {
    let Some((host, _)) = host_and_path(&normalize_url(raw)) else {
        return String::new();
    };
    host.split('.').next().unwrap_or_default().to_lowercase()
}
