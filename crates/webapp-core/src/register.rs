//! Registration of produced files with a dotfile tracker (`yadm add ...`).

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    /// Tracker could not be started (typically not installed).
    #[error("could not run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    /// Tracker ran and reported failure.
    #[error("{program} exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Records files for synchronization. Failures are reported by the caller and
/// never undo the files already written.
pub trait Registrar {
    fn register(&self, paths: &[&Path]) -> Result<(), RegisterError>;
}

/// Runs `<program> add <paths...>` and waits for it, output discarded.
#[derive(Debug, Clone)]
pub struct CommandRegistrar {
    program: String,
}

impl CommandRegistrar {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Registrar for CommandRegistrar {
    fn register(&self, paths: &[&Path]) -> Result<(), RegisterError> {
        tracing::debug!(program = %self.program, count = paths.len(), "registering files");
        let status = Command::new(&self.program)
            .arg("add")
            .args(paths)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| RegisterError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(RegisterError::Failed {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

/// Shell line that registers `paths` by hand: `yadm add "a" "b"`.
pub fn manual_command(program: &str, paths: &[&Path]) -> String {
    format!("{program} add {}", quoted(paths))
}

/// Shell line that removes the produced files: `rm "a" "b"`.
pub fn undo_command(paths: &[&Path]) -> String {
    format!("rm {}", quoted(paths))
}

fn quoted(paths: &[&Path]) -> String {
    paths
        .iter()
        .map(|p| format!("\"{}\"", p.display()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    static FILES: [&str; 2] = [
        "/home/u/.local/share/applications/My App.desktop",
        "/home/u/.local/share/icons/My App.png",
    ];

    fn files() -> Vec<&'static Path> {
        FILES.iter().map(|s| Path::new(*s)).collect()
    }

    #[test]
    fn manual_command_quotes_each_path() {
        assert_eq!(
            manual_command("yadm", &files()),
            "yadm add \"/home/u/.local/share/applications/My App.desktop\" \
             \"/home/u/.local/share/icons/My App.png\""
        );
    }

    #[test]
    fn undo_command_removes_both_files() {
        assert_eq!(
            undo_command(&files()),
            "rm \"/home/u/.local/share/applications/My App.desktop\" \
             \"/home/u/.local/share/icons/My App.png\""
        );
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let r = CommandRegistrar::new("webapp-test-no-such-tracker");
        let err = r.register(&files()).unwrap_err();
        assert!(matches!(err, RegisterError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_failed() {
        // `false add ...` ignores its arguments and exits 1.
        let err = CommandRegistrar::new("false").register(&files()).unwrap_err();
        assert!(matches!(err, RegisterError::Failed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_ok() {
        CommandRegistrar::new("true").register(&files()).unwrap();
    }
}
