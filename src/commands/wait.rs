//! [`Wait`] command: pauses the script for a fixed duration.
//!
//! Script syntax: `wait 500ms` or `wait 1.5s`

use crate::command::{Context, ScriptCommand};
use crate::parser::parse_duration;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Sleeps before the next step, e.g. to let a slow command in the session
/// finish. Never prompts, even when the session is not auto-advancing.
pub struct Wait {
    pub duration: Duration,
}

impl Wait {
    pub const NAME: &'static str = "wait";

    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

#[async_trait(?Send)]
impl ScriptCommand for Wait {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        parse_duration(args).map(Self::new)
    }

    async fn execute(&self, _ctx: &mut Context) -> Result<()> {
        tokio::time::sleep(self.duration).await;
        Ok(())
    }
}
