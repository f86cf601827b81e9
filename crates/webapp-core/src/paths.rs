//! Fixed on-disk layout of a launcher: icon and `.desktop` file under `~/.local/share`.

use std::path::{Path, PathBuf};

const ICONS_DIR: &str = ".local/share/icons";
const APPLICATIONS_DIR: &str = ".local/share/applications";

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found ($HOME is unset or empty)")]
    NoHome,
}

/// The two files a launcher consists of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub icon: PathBuf,
    pub desktop: PathBuf,
}

impl AppPaths {
    /// `{home}/.local/share/icons/{name}.png` and
    /// `{home}/.local/share/applications/{name}.desktop`.
    ///
    /// Depends on nothing but its arguments; the name is used verbatim.
    pub fn for_name(home: &Path, name: &str) -> Self {
        Self {
            icon: home.join(ICONS_DIR).join(format!("{name}.png")),
            desktop: home.join(APPLICATIONS_DIR).join(format!("{name}.desktop")),
        }
    }
}

/// The user's home directory from `$HOME`.
pub fn home_dir() -> Result<PathBuf, PathError> {
    match std::env::var_os("HOME") {
        Some(h) if !h.is_empty() => Ok(PathBuf::from(h)),
        _ => Err(PathError::NoHome),
    }
}
