use std::io::Write;
use std::process::{Command, Stdio};

use crate::application::ports::{Clipboard, ClipboardError};

pub type CommandLine = (&'static str, &'static [&'static str]);

/// Copies through whatever clipboard command the platform provides. The
/// first command that accepts the text wins.
pub struct SystemClipboard {
    commands: &'static [CommandLine],
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self {
            commands: CLIPBOARD_COMMANDS,
        }
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commands(commands: &'static [CommandLine]) -> Self {
        Self { commands }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut last_error = None;

        for &(cmd, args) in self.commands {
            match run_with_stdin(cmd, args, text) {
                Ok(()) => {
                    tracing::debug!(command = cmd, "Copied text to clipboard");
                    return Ok(());
                }
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ClipboardError::Unavailable("no clipboard command for this platform".to_string())
        }))
    }
}

#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[CommandLine] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CLIPBOARD_COMMANDS: &[CommandLine] = &[("cmd", &["/C", "clip"])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CLIPBOARD_COMMANDS: &[CommandLine] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

fn run_with_stdin(cmd: &str, args: &[&str], input: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::Unavailable(format!("`{cmd}`: {e}")))?;

    // Stdin is dropped before waiting so the command sees EOF.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(input.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait();

    match (written, status) {
        (Ok(()), Ok(status)) if status.success() => Ok(()),
        (Err(e), _) => {
            tracing::debug!(command = cmd, error = %e, "Clipboard command rejected input");
            Err(ClipboardError::CommandFailed(cmd.to_string()))
        }
        _ => Err(ClipboardError::CommandFailed(cmd.to_string())),
    }
}
