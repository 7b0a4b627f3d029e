//! The [`CommandRunner`] seam over external program execution.

use async_trait::async_trait;
use std::io;
use std::process::Stdio;

/// Exit status and captured output of a finished program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    /// stdout followed by stderr.
    pub output: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an external program to completion and captures what it printed.
///
/// The tmux client goes through this trait for every invocation, so tests can
/// swap in a recorder instead of spawning processes.
#[async_trait(?Send)]
pub trait CommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// [`CommandRunner`] that spawns real subprocesses.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

#[async_trait(?Send)]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        let output = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            code: output.status.code(),
            output: text,
        })
    }
}
