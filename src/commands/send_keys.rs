//! [`SendKeys`] command: sends literal text to the session instantly.
//!
//! Script syntax: `send "text here"`

use crate::command::{Context, ScriptCommand};
use crate::parser::parse_quoted_string;
use anyhow::Result;
use async_trait::async_trait;

/// Sends `text` in one literal dispatch, without prompting and without a
/// trailing Enter.
pub struct SendKeys {
    pub text: String,
}

impl SendKeys {
    pub const NAME: &'static str = "send";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait(?Send)]
impl ScriptCommand for SendKeys {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        Ok(Self::new(parse_quoted_string(args)?))
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        ctx.session().send_keys(&self.text, true).await?;
        Ok(())
    }
}
