//! Favicon download for a new launcher.
//!
//! [`IconSource`] is the seam between the orchestrator and the network:
//! [`FaviconClient`] talks to the favicon lookup service via libcurl, tests
//! substitute their own source.

mod client;

pub use client::FaviconClient;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Why an icon could not be obtained or stored.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// Favicon service URL could not be built.
    #[error("invalid favicon endpoint: {0}")]
    Url(#[from] url::ParseError),
    /// Transport failure (DNS, connect, timeout, TLS...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Service answered with a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Icon directory could not be created.
    #[error("create {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    /// Body was fetched but could not be written.
    #[error("write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Something that can produce favicon bytes for a page URL.
pub trait IconSource {
    /// Fetches the icon for `page_url` (already normalized). One attempt, no retry.
    fn fetch(&self, page_url: &str) -> Result<Vec<u8>, IconError>;
}

/// Downloads the icon for `page_url` into `dest`, overwriting any existing file.
///
/// The parent directory is created first. On any fetch failure nothing is
/// written. A write failure after a successful fetch may leave a truncated file.
pub fn download_icon(icons: &dyn IconSource, page_url: &str, dest: &Path) -> Result<(), IconError> {
    if let Some(dir) = dest.parent() {
        fs::create_dir_all(dir).map_err(|source| IconError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let bytes = icons.fetch(page_url).inspect_err(|e| {
        tracing::warn!(url = page_url, "favicon fetch failed: {}", e);
    })?;

    fs::write(dest, &bytes).map_err(|source| IconError::Write {
        path: dest.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %dest.display(), bytes = bytes.len(), "icon written");
    Ok(())
}
