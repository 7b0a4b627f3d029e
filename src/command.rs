//! The [`ScriptCommand`] trait and the [`Context`] commands receive when executed.

use crate::session::Session;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

type OutputHandler = Arc<dyn Fn(&[u8]) + Send + Sync>;

/// How often [`Context::wait_for_pattern`] re-captures the pane.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Execution context passed to [`ScriptCommand::execute`].
///
/// Owns the [`Session`] being driven and the handler that receives notes meant
/// for the presenter.
pub struct Context {
    pub(crate) session: Session,
    pub(crate) output_handler: OutputHandler,
}

impl Context {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Pass bytes through the output handler (e.g. to stdout or a custom sink).
    pub fn emit(&self, data: &[u8]) {
        (self.output_handler)(data);
    }

    /// Poll the session's pane until `pattern` is visible, or until `timeout`
    /// elapses.
    pub async fn wait_for_pattern(&self, pattern: &str, timeout: Duration) -> Result<()> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let pane = self
                .session
                .tmux()
                .capture_pane(self.session.name())
                .await?;
            if pane.contains(pattern) {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(anyhow!("Timeout waiting for pattern: '{}'", pattern));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

/// A single script command.
///
/// Implement this trait to add a new command to the engine. Then:
///
/// 1. Define `pub const NAME: &'static str` on your struct. It is the script
///    keyword (e.g. `"type"`, `"expect"`) used by the parser.
/// 2. Re-export the struct from `src/commands/mod.rs`.
/// 3. Add one entry to the `REGISTRY` in [`crate::parser`]:
///    `(MyCmd::NAME, MyCmd::parse_boxed)`.
#[async_trait(?Send)]
pub trait ScriptCommand: 'static {
    /// The command name, accessible at runtime through a trait object.
    ///
    /// Implementations should return their `NAME` constant:
    /// `fn name(&self) -> &'static str { Self::NAME }`.
    fn name(&self) -> &'static str;

    /// Parse this command from the argument string (everything after the
    /// command keyword on the script line).
    fn parse(args: &str) -> Result<Self>
    where
        Self: Sized;

    /// Parse and box this command. Used as the function-pointer type stored in
    /// the command registry.
    fn parse_boxed(args: &str) -> Result<Box<dyn ScriptCommand>>
    where
        Self: Sized,
    {
        Ok(Box::new(Self::parse(args)?))
    }

    /// Execute the command using the provided engine context.
    async fn execute(&self, ctx: &mut Context) -> Result<()>;
}
