//! Launcher creation: the sequence from a raw URL and a name to files on disk.

use crate::desktop_entry;
use crate::favicon::{self, IconError, IconSource};
use crate::paths::AppPaths;
use crate::settings::Settings;
use crate::url_model::{normalize_url, window_class};
use std::io;
use std::path::{Path, PathBuf};

/// A created launcher. Only built once its icon is on disk; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    url: String,
    name: String,
    window_class: String,
    paths: AppPaths,
}

impl AppConfig {
    /// `url` must already be normalized; the window class is derived from it.
    pub fn new(url: String, name: String, paths: AppPaths) -> Self {
        let window_class = window_class(&url);
        Self {
            url,
            name,
            window_class,
            paths,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn window_class(&self) -> &str {
        &self.window_class
    }

    pub fn icon_path(&self) -> &Path {
        &self.paths.icon
    }

    pub fn desktop_path(&self) -> &Path {
        &self.paths.desktop
    }

    /// Produced files in registration order: descriptor first, then icon.
    pub fn files(&self) -> [&Path; 2] {
        [self.desktop_path(), self.icon_path()]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    /// Favicon could not be fetched or stored. Nothing else was written.
    #[error("error downloading icon: {0}")]
    Icon(#[source] IconError),
    /// Directory creation or descriptor write failed.
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<IconError> for CreateError {
    fn from(e: IconError) -> Self {
        match e {
            IconError::CreateDir { path, source } => CreateError::Io {
                action: "create",
                path,
                source,
            },
            other => CreateError::Icon(other),
        }
    }
}

impl CreateError {
    /// True when the run cannot continue as an ordinary failure (I/O on the local disk).
    pub fn is_fatal(&self) -> bool {
        matches!(self, CreateError::Io { .. })
    }
}

/// Creates the launcher for `raw_url` under `home`.
///
/// Normalizes the URL, downloads the icon (stops here on failure, nothing
/// else is written), then writes the `.desktop` file. An icon left behind by a
/// failed descriptor write is not removed.
pub fn create_app(
    raw_url: &str,
    name: &str,
    home: &Path,
    icons: &dyn IconSource,
    settings: &Settings,
) -> Result<AppConfig, CreateError> {
    let url = normalize_url(raw_url);
    let paths = AppPaths::for_name(home, name);
    tracing::debug!(url = %url, name, wm_class = %window_class(&url), "creating app");

    favicon::download_icon(icons, &url, &paths.icon)?;

    let app = AppConfig::new(url, name.to_string(), paths);
    desktop_entry::write_desktop_entry(&app, &settings.browser_command).map_err(|source| {
        CreateError::Io {
            action: "write",
            path: app.desktop_path().to_path_buf(),
            source,
        }
    })?;

    tracing::info!(name, desktop = %app.desktop_path().display(), "app created");
    Ok(app)
}
