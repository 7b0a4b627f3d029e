//! Presenter confirmation before gated session actions.

use crate::error::{Error, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin};
use tokio::sync::Mutex;

/// Blocks a gated action until the presenter says go.
#[async_trait(?Send)]
pub trait Confirm {
    /// Show `prompt` and return once the presenter acknowledges it.
    async fn acknowledge(&self, prompt: &str) -> Result<()>;
}

/// Prompts on stderr and waits for a line of input.
///
/// By default the input is stdin, which is the presenter's terminal here and
/// never the tmux session being driven. End of input counts as
/// [`Error::Interrupted`].
pub struct TerminalPrompt<R = BufReader<Stdin>> {
    input: Mutex<R>,
}

impl TerminalPrompt<BufReader<Stdin>> {
    pub fn new() -> Self {
        Self::with_input(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> TerminalPrompt<R> {
    /// Read acknowledgements from `input` instead of stdin.
    pub fn with_input(input: R) -> Self {
        Self {
            input: Mutex::new(input),
        }
    }
}

impl Default for TerminalPrompt<BufReader<Stdin>> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl<R: AsyncBufRead + Unpin> Confirm for TerminalPrompt<R> {
    async fn acknowledge(&self, prompt: &str) -> Result<()> {
        let mut stderr = tokio::io::stderr();
        stderr
            .write_all(prompt.as_bytes())
            .await
            .map_err(Error::Confirm)?;
        stderr.flush().await.map_err(Error::Confirm)?;

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .await
            .read_line(&mut line)
            .await
            .map_err(Error::Confirm)?;
        if read == 0 {
            return Err(Error::Interrupted);
        }
        Ok(())
    }
}

/// Acknowledges every prompt immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

#[async_trait(?Send)]
impl Confirm for AutoConfirm {
    async fn acknowledge(&self, _prompt: &str) -> Result<()> {
        Ok(())
    }
}

/// Prompt shown before a gated action on `session`.
pub fn prompt_text(session: &str, keys: Option<&str>) -> String {
    match keys {
        Some(keys) => format!("[{session}] Press enter to send {keys:?}"),
        None => format!("[{session}] Press enter to continue"),
    }
}
