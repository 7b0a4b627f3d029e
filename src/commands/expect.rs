//! [`Expect`] command: blocks until a pattern is visible in the session's pane.
//!
//! Script syntax:
//! - `expect "$ "`: 5-second default timeout
//! - `expect "Password:" 10s`: custom timeout

use crate::command::{Context, ScriptCommand};
use crate::parser::{parse_duration, parse_quoted_prefix};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Blocks until `pattern` appears in `tmux capture-pane` output, or until
/// `timeout` elapses.
///
/// The pane is re-captured on every poll, so text still on screen from an
/// earlier step matches immediately.
pub struct Expect {
    pub pattern: String,
    pub timeout: Duration,
}

impl Expect {
    pub const NAME: &'static str = "expect";

    /// Create an `Expect` command with the default 5-second timeout.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::with_timeout(pattern, Duration::from_secs(5))
    }

    /// Create an `Expect` command with a custom timeout.
    pub fn with_timeout(pattern: impl Into<String>, timeout: Duration) -> Self {
        Self {
            pattern: pattern.into(),
            timeout,
        }
    }
}

#[async_trait(?Send)]
impl ScriptCommand for Expect {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        let (pattern, remainder) = parse_quoted_prefix(args)?;
        if remainder.is_empty() {
            Ok(Self::new(pattern))
        } else {
            Ok(Self::with_timeout(pattern, parse_duration(remainder)?))
        }
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        ctx.wait_for_pattern(&self.pattern, self.timeout).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ScriptCommand;
    use crate::process::CommandOutput;
    use crate::testing::{RecordingConfirm, RecordingRunner, context};

    #[test]
    fn test_parse_default_timeout() {
        let cmd = Expect::parse(r#""$ ""#).unwrap();
        assert_eq!(cmd.pattern, "$ ");
        assert_eq!(cmd.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_parse_custom_timeout() {
        let cmd = Expect::parse(r#""hello world" 2s"#).unwrap();
        assert_eq!(cmd.pattern, "hello world");
        assert_eq!(cmd.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_parse_unclosed_quote() {
        assert!(Expect::parse(r#""unclosed"#).is_err());
    }

    #[test]
    fn test_parse_missing_quote() {
        assert!(Expect::parse("no_quotes").is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_finds_pattern() {
        let runner = RecordingRunner::replying(CommandOutput {
            code: Some(0),
            output: "$ echo hi\nhi\n$ \n".into(),
        });
        let mut ctx = context(&runner, &RecordingConfirm::default());

        Expect::new("hi").execute(&mut ctx).await.unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].args, ["capture-pane", "-t", "demo", "-p"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_times_out() {
        let runner = RecordingRunner::replying(CommandOutput {
            code: Some(0),
            output: "$ \n".into(),
        });
        let mut ctx = context(&runner, &RecordingConfirm::default());

        let err = Expect::with_timeout("never", Duration::from_millis(500))
            .execute(&mut ctx)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Timeout"));
        assert!(runner.calls().len() > 1);
    }
}
