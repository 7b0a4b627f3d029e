//! [`TypeText`] command: simulates human typing character by character.
//!
//! Script syntax:
//! - `type "text here"`: session delay (90 ms unless configured)
//! - `type "text here" 40ms`: custom nominal delay per keystroke

use crate::command::{Context, ScriptCommand};
use crate::parser::{parse_duration, parse_quoted_prefix};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Types `text` into the session one character at a time. Nothing is sent
/// after the last character; use [`Enter`](super::Enter) to submit a line.
pub struct TypeText {
    pub text: String,
    pub delay: Option<Duration>,
}

impl TypeText {
    pub const NAME: &'static str = "type";

    /// Create a `TypeText` command using the session's delay.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delay: None,
        }
    }

    /// Create a `TypeText` command with a custom nominal delay.
    pub fn with_delay(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            text: text.into(),
            delay: Some(delay),
        }
    }
}

#[async_trait(?Send)]
impl ScriptCommand for TypeText {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        let (text, rest) = parse_quoted_prefix(args)?;
        if rest.is_empty() {
            Ok(Self::new(text))
        } else {
            Ok(Self::with_delay(text, parse_duration(rest)?))
        }
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        let delay_ms = self
            .delay
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        ctx.session_mut().teletype(&self.text, delay_ms).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ScriptCommand;
    use crate::testing::{RecordingConfirm, RecordingRunner, context};

    #[test]
    fn test_parse() {
        let cmd = TypeText::parse(r#""hello world""#).unwrap();
        assert_eq!(cmd.text, "hello world");
        assert_eq!(cmd.delay, None);
    }

    #[test]
    fn test_parse_escaped_quotes() {
        let cmd = TypeText::parse(r#""hello \"world\"""#).unwrap();
        assert_eq!(cmd.text, r#"hello "world""#);
    }

    #[test]
    fn test_parse_custom_delay() {
        let cmd = TypeText::parse(r#""hi" 40ms"#).unwrap();
        assert_eq!(cmd.delay, Some(Duration::from_millis(40)));
    }

    #[test]
    fn test_parse_delay_up_to_u64_max() {
        let cmd = TypeText::parse(r#""x" 18446744073709551615ms"#).unwrap();
        assert_eq!(cmd.delay, Some(Duration::from_millis(u64::MAX)));
        let plan = crate::typing::TypingPlan::new(&cmd.text, u64::MAX);
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_parse_bad_delay() {
        assert!(TypeText::parse(r#""hi" fast"#).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_types_without_submitting() {
        let (runner, confirm) = (RecordingRunner::new(), RecordingConfirm::default());
        let mut ctx = context(&runner, &confirm);

        TypeText::new("ok").execute(&mut ctx).await.unwrap();

        assert_eq!(
            runner.sent(),
            [(true, "o".to_string()), (true, "k".to_string())]
        );
        assert_eq!(confirm.prompts().len(), 1);
    }
}
