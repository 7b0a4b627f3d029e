//! [`Paste`] command: sends a whole line at once and presses Enter.
//!
//! Script syntax: `paste "make build"`

use crate::command::{Context, ScriptCommand};
use crate::parser::parse_quoted_string;
use crate::session::EnterOptions;
use anyhow::Result;
use async_trait::async_trait;

/// Like [`Enter`](super::Enter) but without the typing effect: `text` goes
/// over in a single literal dispatch.
pub struct Paste {
    pub text: String,
}

impl Paste {
    pub const NAME: &'static str = "paste";
}

#[async_trait(?Send)]
impl ScriptCommand for Paste {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        Ok(Self {
            text: parse_quoted_string(args)?,
        })
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        let options = EnterOptions {
            teletype: false,
            ..EnterOptions::default()
        };
        ctx.session_mut()
            .enter_with(Some(&self.text), &options)
            .await?;
        Ok(())
    }
}
