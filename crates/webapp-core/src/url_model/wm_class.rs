//! Window-manager class of a Chrome `--app=` window.

use super::host_and_path;

/// Builds the `StartupWMClass` Chrome assigns to an app window for `url`
/// (already normalized): `chrome-{host}__{path}-Default`.
///
/// The path loses its leading/trailing slashes and inner slashes become `_`.
/// A URL that does not parse yields empty host and path segments.
pub fn window_class(url: &str) -> String {
    let (host, path) = host_and_path(url).unwrap_or_default();
    let path = path.trim_matches('/').replace('/', "_");
    format!("chrome-{host}__{path}-Default")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_empty_segment() {
        assert_eq!(window_class("https://lichess.org"), "chrome-lichess.org__-Default");
        assert_eq!(window_class("https://lichess.org/"), "chrome-lichess.org__-Default");
    }

    #[test]
    fn nested_path_uses_underscores() {
        assert_eq!(
            window_class("https://lichess.org/play/abc"),
            "chrome-lichess.org__play_abc-Default"
        );
        assert_eq!(
            window_class("https://lichess.org/play/abc/"),
            "chrome-lichess.org__play_abc-Default"
        );
    }

    #[test]
    fn query_and_port_are_not_part_of_class() {
        assert_eq!(
            window_class("https://app.example.com:8443/inbox?tab=1"),
            "chrome-app.example.com__inbox-Default"
        );
    }

    #[test]
    fn unparseable_url_yields_empty_segments() {
        assert_eq!(window_class("https://"), "chrome-__-Default");
    }
}
