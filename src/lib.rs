//! # handsfree
//!
//! Hands-free terminal demonstrations driven through tmux.
//!
//! handsfree sends synthetic keystrokes to a named tmux session. Text can be
//! typed one character at a time at a human pace, and each step can wait for
//! the presenter to press Enter before it runs, so a live demo never depends
//! on live typing.
//!
//! ## Quick start
//!
//! ```no_run
//! use handsfree::{Session, keys};
//!
//! #[tokio::main]
//! async fn main() -> handsfree::Result<()> {
//!     let mut session = Session::new("demo");
//!
//!     session.enter(Some("vim")).await?; // waits for Enter, types, submits
//!     session.enter(Some("i")).await?;
//!     {
//!         let mut quiet = session.auto_advance(); // no prompts in this block
//!         quiet.enter(Some("Hello, world!")).await?;
//!         quiet.send_keys(keys::ESCAPE, false).await?;
//!     }
//!     session.enter(Some(":q!")).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Without a session
//!
//! [`send_keys`] delivers a single keystroke string, with no prompt and no
//! typing effect:
//!
//! ```no_run
//! # async fn demo() -> handsfree::Result<()> {
//! handsfree::send_keys("demo", "echo 'Hello, world!'", true).await?;
//! handsfree::send_keys("demo", handsfree::keys::ENTER, false).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! tmux failures come back as [`Error`]: [`Error::SessionNotFound`] for a
//! wrong session name, [`Error::ConnectionFailed`] when no tmux server is
//! running, and [`Error::Command`] with the exit code and output otherwise.
//!
//! ## Scripts
//!
//! The `handsfree` binary runs demo scripts:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `type "text" [delay]` | Type text character by character |
//! | `enter ["text"]` | Type text (if any), then press Enter |
//! | `paste "text"` | Send text in one go, then press Enter |
//! | `send "text"` | Send text immediately, without prompting |
//! | `key Ctrl+c` | Press a named key (`Enter`, `Esc`, `F5`, `Alt+x`, ...) |
//! | `pause` | Wait for the presenter |
//! | `show "text"` | Print a note for the presenter |
//! | `wait 500ms` | Pause for a duration |
//! | `expect "pattern" [timeout]` | Wait until the pane shows `pattern` |
//! | `# comment` | Full-line or inline comment |
//!
//! Use [`parse_str`] or [`parse_file`] and [`Engine::execute`] to run them
//! from code.

pub mod command;
pub mod commands;
pub mod confirm;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod keys;
pub mod parser;
pub mod process;
pub mod session;
pub mod tmux;
pub mod typing;

#[cfg(test)]
pub(crate) mod testing;

pub use command::{Context, ScriptCommand};
pub use commands::{Enter, Expect, KeyPress, Paste, Pause, SendKeys, Show, TypeText, Wait};
pub use confirm::{AutoConfirm, Confirm, TerminalPrompt};
pub use dispatch::{KeyDispatcher, KeyToken, send_keys};
pub use engine::Engine;
pub use error::{Error, Result};
pub use parser::{parse_file, parse_str};
pub use process::{CommandOutput, CommandRunner, SystemRunner};
pub use session::{AutoAdvance, EnterOptions, Session};
pub use tmux::{Tmux, TmuxVersion};
pub use typing::{DEFAULT_DELAY_MS, TypingPlan};
