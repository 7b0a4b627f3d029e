use crate::command::{Context, ScriptCommand};
use crate::session::Session;
use anyhow::{Context as _, Result};
use std::io::{self, Write};
use std::sync::Arc;
use tracing::debug;

/// Runs parsed script commands, in order, against one [`Session`].
pub struct Engine {
    ctx: Context,
}

impl Engine {
    /// Create an engine that writes notes from `show` to stdout.
    pub fn new(session: Session) -> Self {
        Self::with_handler(session, |data| {
            let mut stdout = io::stdout();
            // A closed stdout must not abort the demo.
            let _ = stdout.write_all(data).and_then(|()| stdout.flush());
        })
    }

    /// Create an engine that passes notes to `handler`.
    pub fn with_handler<F>(session: Session, handler: F) -> Self
    where
        F: Fn(&[u8]) + Send + Sync + 'static,
    {
        Self {
            ctx: Context {
                session,
                output_handler: Arc::new(handler),
            },
        }
    }

    pub fn session(&self) -> &Session {
        self.ctx.session()
    }

    pub fn session_mut(&mut self) -> &mut Session {
        self.ctx.session_mut()
    }

    /// Execute `commands` one after another, stopping at the first failure.
    pub async fn execute(&mut self, commands: Vec<Box<dyn ScriptCommand>>) -> Result<()> {
        let total = commands.len();
        for (i, command) in commands.into_iter().enumerate() {
            let step = i + 1;
            debug!(step, total, command = command.name(), "running step");
            command
                .execute(&mut self.ctx)
                .await
                .with_context(|| format!("Step {} ({}) failed", step, command.name()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::KeyDispatcher;
    use crate::error::Error;
    use crate::parser::parse_str;
    use crate::process::CommandOutput;
    use crate::testing::{RecordingConfirm, RecordingRunner};
    use crate::tmux::Tmux;
    use std::sync::Mutex;

    fn session(runner: &RecordingRunner, confirm: &RecordingConfirm) -> Session {
        Session::new("demo")
            .with_dispatcher(KeyDispatcher::new(Tmux::with_runner(runner.clone())))
            .with_confirm(confirm.clone())
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_runs_steps_in_order() {
        let (runner, confirm) = (RecordingRunner::new(), RecordingConfirm::default());
        let notes = Arc::new(Mutex::new(Vec::<u8>::new()));
        let sink = notes.clone();
        let mut engine = Engine::with_handler(session(&runner, &confirm), move |data| {
            sink.lock().unwrap().extend_from_slice(data);
        });

        let commands = parse_str(
            "show \"opening vim\"\nenter \"vi\"\ntype \"ix\"\nkey Esc\nsend \":q!\"\nkey Enter\n",
        )
        .unwrap();
        engine.execute(commands).await.unwrap();

        let sent: Vec<_> = runner.sent();
        let expected: Vec<(bool, String)> = [
            (true, "v"),
            (true, "i"),
            (false, "Enter"),
            (true, "i"),
            (true, "x"),
            (false, "Escape"),
            (true, ":q!"),
            (false, "Enter"),
        ]
        .into_iter()
        .map(|(literal, keys)| (literal, keys.to_string()))
        .collect();
        assert_eq!(sent, expected);
        assert_eq!(confirm.prompts().len(), 2);
        assert_eq!(&*notes.lock().unwrap(), b"opening vim\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_auto_advancing_session() {
        let (runner, confirm) = (RecordingRunner::new(), RecordingConfirm::default());
        let mut engine = Engine::new(session(&runner, &confirm).with_auto_advance(true));

        engine
            .execute(parse_str("enter \"ls\"\npause\n").unwrap())
            .await
            .unwrap();

        assert!(confirm.prompts().is_empty());
        assert!(engine.session().is_auto_advancing());
    }

    #[tokio::test]
    async fn test_execute_stops_at_first_failure() {
        let runner = RecordingRunner::replying(CommandOutput {
            code: Some(1),
            output: "can't find session: demo\n".into(),
        });
        let confirm = RecordingConfirm::default();
        let mut engine = Engine::new(session(&runner, &confirm));

        let err = engine
            .execute(parse_str("send \"a\"\nsend \"b\"\n").unwrap())
            .await
            .unwrap_err();

        assert!(format!("{err:#}").contains("Step 1 (send) failed"));
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::SessionNotFound { .. })
        ));
        assert_eq!(runner.calls().len(), 1);
    }
}
