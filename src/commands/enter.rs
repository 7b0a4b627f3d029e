//! [`Enter`] command: types a line and presses Enter.
//!
//! Script syntax: `enter "ls -la"`, or a bare `enter` to press Enter alone.

use crate::command::{Context, ScriptCommand};
use crate::parser::parse_quoted_string;
use anyhow::Result;
use async_trait::async_trait;

/// Teletypes `text` (when present), then presses Enter.
pub struct Enter {
    pub text: Option<String>,
}

impl Enter {
    pub const NAME: &'static str = "enter";

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

#[async_trait(?Send)]
impl ScriptCommand for Enter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        if args.trim().is_empty() {
            return Ok(Self { text: None });
        }
        Ok(Self::new(parse_quoted_string(args)?))
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        ctx.session_mut().enter(self.text.as_deref()).await?;
        Ok(())
    }
}
