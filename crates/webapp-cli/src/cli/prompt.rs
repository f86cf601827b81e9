//! Interactive prompts: URL, app name with completion, yes/no.

use anyhow::Result;
use console::style;
use std::io;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Completion, Confirm, Input};

/// Source of the three answers the driver needs.
///
/// `None` or an empty string means the user gave nothing (or pressed Ctrl-C);
/// the driver stops.
pub trait Prompter {
    fn url(&mut self) -> Result<Option<String>>;
    /// `suggestions` may be empty; `default` is pre-filled when non-empty.
    fn name(&mut self, suggestions: &[String], default: &str) -> Result<Option<String>>;
    /// Whether to register the files with `tracker`. Cancelling counts as no.
    fn confirm_register(&mut self, tracker: &str) -> Result<bool>;
}

/// Completes the typed prefix to the first matching suggestion (case-insensitive).
struct Suggestions<'a>(&'a [String]);

impl Completion for Suggestions<'_> {
    fn get(&self, input: &str) -> Option<String> {
        let typed = input.to_lowercase();
        self.0
            .iter()
            .find(|s| s.as_str() != input && s.to_lowercase().starts_with(&typed))
            .cloned()
    }
}

/// dialoguer prompts on the controlling terminal.
#[derive(Default)]
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl TermPrompter {
    /// Installs a no-op SIGINT handler: `console` raises SIGINT on Ctrl-C inside
    /// a prompt, and with a handler in place the read returns `Interrupted`
    /// instead of the process dying. Call once per process.
    pub fn new() -> Result<Self> {
        ctrlc::set_handler(|| tracing::debug!("SIGINT received"))?;
        Ok(Self::default())
    }
}

/// Maps a prompt interrupted by Ctrl-C to `None`; other terminal errors propagate.
fn cancelled_as_none<T>(answer: dialoguer::Result<T>) -> Result<Option<T>> {
    match answer {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
            tracing::debug!("prompt cancelled");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn non_empty(s: String) -> Option<String> {
    let s = s.trim().to_string();
    (!s.is_empty()).then_some(s)
}

impl Prompter for TermPrompter {
    fn url(&mut self) -> Result<Option<String>> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt("App URL")
            .allow_empty(true)
            .interact_text();
        Ok(cancelled_as_none(answer)?.and_then(non_empty))
    }

    fn name(&mut self, suggestions: &[String], default: &str) -> Result<Option<String>> {
        let mut shown: Vec<&str> = Vec::new();
        for s in suggestions {
            if !shown.contains(&s.as_str()) {
                shown.push(s);
            }
        }
        if !shown.is_empty() {
            println!("{}", style(format!("  (tab completes: {})", shown.join(", "))).dim());
        }

        let completion = Suggestions(suggestions);
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt("App name")
            .allow_empty(true)
            .completion_with(&completion);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        Ok(cancelled_as_none(input.interact_text())?.and_then(non_empty))
    }

    fn confirm_register(&mut self, tracker: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(format!("Add to {tracker}?"))
            .default(true)
            .interact_opt();
        Ok(cancelled_as_none(answer)?.flatten().unwrap_or(false))
    }
}
