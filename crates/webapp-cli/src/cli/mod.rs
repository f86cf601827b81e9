//! CLI for webapp. No flags: everything is asked interactively.

mod driver;
mod prompt;

use anyhow::Result;
use clap::Parser;
use webapp_core::favicon::FaviconClient;
use webapp_core::paths;
use webapp_core::register::CommandRegistrar;
use webapp_core::settings::Settings;

use driver::{Driver, Outcome};
use prompt::TermPrompter;

/// Top-level CLI for webapp.
#[derive(Debug, Parser)]
#[command(name = "webapp", version)]
#[command(
    about = "Create a Chrome web app launcher (.desktop file + icon) from a URL",
    long_about = None
)]
pub struct Cli {}

impl Cli {
    /// Parses arguments, runs the interactive driver and returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let _cli = Cli::parse();
        let settings = Settings::default();
        tracing::debug!("settings: {:?}", settings);
        let home = paths::home_dir()?;

        let mut prompter = TermPrompter::new()?;
        let icons = FaviconClient::new(&settings);
        let registrar = CommandRegistrar::new(settings.tracker_command.clone());
        let mut stdout = std::io::stdout();

        let outcome = Driver {
            prompter: &mut prompter,
            icons: &icons,
            registrar: &registrar,
            settings: &settings,
            home: &home,
            out: &mut stdout,
        }
        .run()?;

        match &outcome {
            Outcome::Created(app) => tracing::info!(
                name = app.name(),
                desktop = %app.desktop_path().display(),
                icon = %app.icon_path().display(),
                "run finished: launcher created"
            ),
            other => tracing::info!(outcome = ?other, "run finished"),
        }
        Ok(outcome.exit_code())
    }
}

#[cfg(test)]
mod tests;
