//! Error types for keystroke dispatch and session control.

use thiserror::Error;

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by tmux, the confirmation prompt, or the runtime.
#[derive(Debug, Error)]
pub enum Error {
    /// tmux is running but has no session with this name.
    #[error("tmux session {session:?} not found")]
    SessionNotFound {
        session: String,
        code: Option<i32>,
        output: String,
    },

    /// No tmux server could be reached, usually because none is running.
    #[error("connection to tmux server failed")]
    ConnectionFailed { code: Option<i32>, output: String },

    /// tmux exited unsuccessfully for a reason not covered above.
    #[error("`{command}` exited with {}: {}", exit_text(.code), .output.trim())]
    Command {
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// The tmux program could not be started.
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// `tmux -V` reported a version older than the minimum, or nothing parseable.
    #[error("tmux 1.7 or greater not found (got {found:?})")]
    UnsupportedVersion { found: String },

    /// Reading the presenter's acknowledgement failed.
    #[error("failed to read confirmation: {0}")]
    Confirm(#[source] std::io::Error),

    /// Input closed while waiting for the presenter's confirmation.
    #[error("interrupted")]
    Interrupted,
}

impl Error {
    /// Exit code reported by tmux, when the error came from a finished command.
    pub fn code(&self) -> Option<i32> {
        match self {
            Error::SessionNotFound { code, .. }
            | Error::ConnectionFailed { code, .. }
            | Error::Command { code, .. } => *code,
            _ => None,
        }
    }

    /// Raw tmux output, when the error came from a finished command.
    pub fn output(&self) -> Option<&str> {
        match self {
            Error::SessionNotFound { output, .. }
            | Error::ConnectionFailed { output, .. }
            | Error::Command { output, .. } => Some(output),
            _ => None,
        }
    }
}

fn exit_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (killed by signal)".to_string(),
    }
}
