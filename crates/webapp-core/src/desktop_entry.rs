//! `.desktop` launcher rendering and writing.

use crate::app::AppConfig;
use std::fs;
use std::io;
use std::path::Path;

/// Renders the launcher for `app`. The layout must stay byte-exact for
/// desktop environments to pick it up; there is no trailing newline.
pub fn render(app: &AppConfig, browser_command: &str) -> String {
    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name={name}\n\
         Exec={browser_command} --app={url}\n\
         Icon={icon}\n\
         Comment={name} on Chrome\n\
         StartupWMClass={wm_class}",
        name = app.name(),
        url = app.url(),
        icon = app.icon_path().display(),
        wm_class = app.window_class(),
    )
}

/// Writes the launcher to `app.desktop_path()`, creating the directory and
/// replacing any existing file of the same name.
pub fn write_desktop_entry(app: &AppConfig, browser_command: &str) -> io::Result<()> {
    let path: &Path = app.desktop_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, render(app, browser_command))?;
    tracing::info!(path = %path.display(), "desktop entry written");
    Ok(())
}
