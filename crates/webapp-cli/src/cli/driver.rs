//! Interactive run: prompts, launcher creation, registration and hints.
//!
//! Stages run strictly in order:
//! `AwaitingUrl -> AwaitingName -> AwaitingConfirm -> Creating ->
//! (Registering | PrintingManualHint) -> Done`. An empty prompt answer or a
//! failed creation jumps straight to `Done`.

use super::prompt::Prompter;
use anyhow::Result;
use console::style;
use std::io::Write;
use std::path::Path;
use webapp_core::app::{self, AppConfig, CreateError};
use webapp_core::favicon::IconSource;
use webapp_core::register::{self, Registrar};
use webapp_core::settings::Settings;
use webapp_core::url_model::{self, name_variants};

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// A prompt was left empty or cancelled; nothing was created.
    Aborted,
    /// Launcher creation failed (icon download); nothing was written.
    Failed,
    /// Launcher written. Registration may still have failed (reported, non-fatal).
    Created(AppConfig),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Aborted | Outcome::Created(_) => 0,
            Outcome::Failed => 1,
        }
    }
}

enum Stage {
    AwaitingUrl,
    AwaitingName { url: String },
    AwaitingConfirm { url: String, name: String },
    Creating { url: String, name: String, register: bool },
    Registering(AppConfig),
    PrintingManualHint(AppConfig),
    Done(Outcome),
}

/// Everything one run needs. Each seam is a trait so tests can script it.
pub struct Driver<'a> {
    pub prompter: &'a mut dyn Prompter,
    pub icons: &'a dyn IconSource,
    pub registrar: &'a dyn Registrar,
    pub settings: &'a Settings,
    pub home: &'a Path,
    pub out: &'a mut dyn Write,
}

fn ok_mark() -> console::StyledObject<&'static str> {
    style("✓").green()
}

fn err_mark() -> console::StyledObject<&'static str> {
    style("✗").red()
}

impl Driver<'_> {
    /// Runs the stages to completion. Only local I/O failures (creating
    /// directories, writing the descriptor, the terminal itself) return `Err`.
    pub fn run(mut self) -> Result<Outcome> {
        writeln!(self.out, "{}\n", style("Chrome Web App Creator").bold().cyan())?;

        let mut stage = Stage::AwaitingUrl;
        loop {
            stage = match stage {
                Stage::AwaitingUrl => match self.prompter.url()?.filter(|u| !u.is_empty()) {
                    Some(url) => Stage::AwaitingName { url },
                    None => self.abort("URL is required")?,
                },
                Stage::AwaitingName { url } => {
                    let domain = url_model::extract_domain(&url);
                    let suggestions = name_variants(&domain);
                    let default = suggestions.first().cloned().unwrap_or_default();
                    match self
                        .prompter
                        .name(&suggestions, &default)?
                        .filter(|n| !n.is_empty())
                    {
                        Some(name) => Stage::AwaitingConfirm { url, name },
                        None => self.abort("Name is required")?,
                    }
                }
                Stage::AwaitingConfirm { url, name } => {
                    let register = self
                        .prompter
                        .confirm_register(&self.settings.tracker_command)?;
                    Stage::Creating {
                        url,
                        name,
                        register,
                    }
                }
                Stage::Creating {
                    url,
                    name,
                    register,
                } => match self.create(&url, &name)? {
                    Some(app) if register => Stage::Registering(app),
                    Some(app) => Stage::PrintingManualHint(app),
                    None => Stage::Done(Outcome::Failed),
                },
                Stage::Registering(app) => {
                    self.register(&app)?;
                    self.print_undo(&app)?;
                    Stage::Done(Outcome::Created(app))
                }
                Stage::PrintingManualHint(app) => {
                    self.print_manual_hint(&app)?;
                    self.print_undo(&app)?;
                    Stage::Done(Outcome::Created(app))
                }
                Stage::Done(outcome) => return Ok(outcome),
            };
        }
    }

    fn abort(&mut self, message: &str) -> Result<Stage> {
        tracing::info!("aborted: {}", message);
        writeln!(self.out, "{} {}", err_mark(), message)?;
        Ok(Stage::Done(Outcome::Aborted))
    }

    /// `Ok(None)` on a reported icon failure; local I/O errors propagate.
    fn create(&mut self, raw_url: &str, name: &str) -> Result<Option<AppConfig>> {
        writeln!(
            self.out,
            "{} Creating {} app from {}",
            ok_mark(),
            style(name).bold(),
            style(url_model::normalize_url(raw_url)).cyan()
        )?;

        match app::create_app(raw_url, name, self.home, self.icons, self.settings) {
            Ok(app) => {
                writeln!(
                    self.out,
                    "{} Created desktop file: {}",
                    ok_mark(),
                    style(app.desktop_path().display()).dim()
                )?;
                Ok(Some(app))
            }
            Err(CreateError::Icon(e)) => {
                writeln!(self.out, "{} {} {}", err_mark(), style("Error downloading icon:").red(), e)?;
                writeln!(self.out, "{} Failed to create app", err_mark())?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn register(&mut self, app: &AppConfig) -> Result<()> {
        let tracker = &self.settings.tracker_command;
        match self.registrar.register(&app.files()) {
            Ok(()) => writeln!(self.out, "{} Added to {}", ok_mark(), tracker)?,
            Err(e) => {
                tracing::warn!("registration failed: {}", e);
                writeln!(self.out, "{} Failed to add to {}: {}", err_mark(), tracker, e)?;
            }
        }
        Ok(())
    }

    fn print_manual_hint(&mut self, app: &AppConfig) -> Result<()> {
        let tracker = &self.settings.tracker_command;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            style(format!("Manual {tracker} commands:")).bold().cyan()
        )?;
        let line = register::manual_command(tracker, &app.files());
        writeln!(self.out, "  {}", style(line).dim())?;
        Ok(())
    }

    fn print_undo(&mut self, app: &AppConfig) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", style("Undo:").bold().yellow())?;
        writeln!(self.out, "  {}", style(register::undo_command(&app.files())).dim())?;
        Ok(())
    }
}
