//! [`Pause`] command: waits for the presenter without sending anything.
//!
//! Script syntax: `pause`

use crate::command::{Context, ScriptCommand};
use crate::session::EnterOptions;
use anyhow::{Result, anyhow};
use async_trait::async_trait;

/// Holds the script until the presenter confirms. Skipped entirely when the
/// session is auto-advancing.
pub struct Pause;

impl Pause {
    pub const NAME: &'static str = "pause";
}

#[async_trait(?Send)]
impl ScriptCommand for Pause {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        if !args.trim().is_empty() {
            return Err(anyhow!("'pause' takes no arguments"));
        }
        Ok(Self)
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        let options = EnterOptions {
            teletype: false,
            after: None,
        };
        ctx.session_mut().enter_with(None, &options).await?;
        Ok(())
    }
}
