//! Fixed settings for launcher creation.
//!
//! Nothing here is read from disk or the environment; the values are the
//! built-in defaults. Tests override individual fields (e.g. point the favicon
//! endpoint at a local server).

use std::time::Duration;

/// Favicon lookup service queried for every new launcher.
pub const FAVICON_ENDPOINT: &str = "https://www.google.com/s2/favicons";

/// Settings threaded through the favicon client, descriptor writer and registrar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the favicon service; `domain` and `sz` are appended as query params.
    pub favicon_endpoint: String,
    /// Requested icon edge length in pixels (`sz` query param).
    pub icon_size: u32,
    /// Total timeout for the favicon GET.
    pub fetch_timeout: Duration,
    /// Browser binary written into the descriptor's `Exec=` line.
    pub browser_command: String,
    /// Dotfile tracker invoked as `<tracker> add <paths...>`.
    pub tracker_command: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            favicon_endpoint: FAVICON_ENDPOINT.to_string(),
            icon_size: 256,
            fetch_timeout: Duration::from_secs(10),
            browser_command: "google-chrome-stable".to_string(),
            tracker_command: "yadm".to_string(),
        }
    }
}
