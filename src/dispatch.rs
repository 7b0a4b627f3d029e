//! Delivery of one keystroke string to one tmux session.

use crate::error::Result;
use crate::tmux::{Tmux, classify};
use tracing::debug;

/// A keystroke string together with how tmux should read it.
///
/// Keeping the two cases apart means literal text never goes through
/// tmux's key-name lookup and a key name is never typed out as characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyToken<'a> {
    /// Delivered character for character (`send-keys -l`).
    Literal(&'a str),
    /// Looked up by tmux, e.g. `Enter` or `C-c`.
    Named(&'a str),
}

impl<'a> KeyToken<'a> {
    pub fn new(keys: &'a str, literal: bool) -> Self {
        if literal {
            KeyToken::Literal(keys)
        } else {
            KeyToken::Named(keys)
        }
    }

    pub fn as_str(&self) -> &'a str {
        match *self {
            KeyToken::Literal(keys) | KeyToken::Named(keys) => keys,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, KeyToken::Literal(_))
    }
}

/// Sends keystrokes through `tmux send-keys`, one invocation per call.
#[derive(Debug, Clone, Default)]
pub struct KeyDispatcher {
    tmux: Tmux,
}

impl KeyDispatcher {
    pub fn new(tmux: Tmux) -> Self {
        Self { tmux }
    }

    pub fn tmux(&self) -> &Tmux {
        &self.tmux
    }

    /// Deliver `token` to `session` and wait for tmux to exit.
    ///
    /// # Errors
    ///
    /// [`Error::SessionNotFound`](crate::Error::SessionNotFound) when the
    /// session does not exist, [`Error::ConnectionFailed`](crate::Error::ConnectionFailed)
    /// when no server is running, and [`Error::Command`](crate::Error::Command)
    /// for any other non-zero exit.
    pub async fn dispatch(&self, session: &str, token: KeyToken<'_>) -> Result<()> {
        let args = send_keys_args(session, token);
        debug!(
            session,
            literal = token.is_literal(),
            keys = token.as_str(),
            "sending keys"
        );
        let out = self.tmux.run(&args).await?;
        classify(session, || self.tmux.command_line(&args), out).map(drop)
    }
}

/// Send `keys` to `session` through the system tmux.
///
/// With `literal` false, tmux converts key names such as `Escape` or `Space`
/// to the single key they name.
pub async fn send_keys(session: &str, keys: &str, literal: bool) -> Result<()> {
    KeyDispatcher::default()
        .dispatch(session, KeyToken::new(keys, literal))
        .await
}

/// Arguments for `tmux send-keys` delivering `token` to `session`.
pub fn send_keys_args(session: &str, token: KeyToken<'_>) -> Vec<String> {
    let mut args = vec!["send-keys".to_string()];
    if token.is_literal() {
        args.push("-l".to_string());
    }
    args.push("-t".to_string());
    args.push(session.to_string());
    // Keys starting with '-' must not be taken for flags.
    args.push("--".to_string());
    args.push(escape_separator(token.as_str()));
    args
}

/// tmux splits commands on an argument ending in `;` and reads a trailing
/// `\;` back as a literal `;`.
fn escape_separator(keys: &str) -> String {
    match keys.strip_suffix(';') {
        Some(head) => format!("{head}\\;"),
        None => keys.to_string(),
    }
}
