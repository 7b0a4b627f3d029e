//! [`Show`] command: a speaker note printed between demo steps.
//!
//! Script syntax: `show "Next: editing the config"`

use crate::command::{Context, ScriptCommand};
use crate::parser::parse_quoted_string;
use anyhow::Result;
use async_trait::async_trait;

/// Prints `note` for the presenter, one line per command.
///
/// The tmux session never sees the note, and printing it does not wait for
/// confirmation, so a note can introduce the gated step that follows it.
pub struct Show {
    pub note: String,
}

impl Show {
    pub const NAME: &'static str = "show";

    pub fn new(note: impl Into<String>) -> Self {
        Self { note: note.into() }
    }

    /// The bytes handed to the output handler: the note and a line break.
    fn line(&self) -> Vec<u8> {
        let mut line = Vec::with_capacity(self.note.len() + 1);
        line.extend_from_slice(self.note.as_bytes());
        line.push(b'\n');
        line
    }
}

#[async_trait(?Send)]
impl ScriptCommand for Show {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        parse_quoted_string(args).map(Self::new)
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        ctx.emit(&self.line());
        Ok(())
    }
}
