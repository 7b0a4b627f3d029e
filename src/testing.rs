//! Test doubles shared by the unit tests.

use crate::command::Context;
use crate::confirm::Confirm;
use crate::dispatch::KeyDispatcher;
use crate::error::Result;
use crate::process::{CommandOutput, CommandRunner};
use crate::session::Session;
use crate::tmux::Tmux;
use async_trait::async_trait;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub(crate) struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub at: Instant,
}

impl Call {
    /// `(literal, keys)` for a `send-keys` call.
    pub fn sent(&self) -> Option<(bool, String)> {
        if self.args.first().map(String::as_str) != Some("send-keys") {
            return None;
        }
        let literal = self.args.iter().any(|a| a == "-l");
        Some((literal, self.args.last()?.clone()))
    }
}

enum Reply {
    Always(CommandOutput),
    FailAfter(usize, CommandOutput),
    Unspawnable,
}

/// Records every invocation and answers from a fixed script.
#[derive(Clone)]
pub(crate) struct RecordingRunner {
    calls: Rc<RefCell<Vec<Call>>>,
    reply: Rc<Reply>,
}

impl RecordingRunner {
    /// Every call succeeds with empty output.
    pub fn new() -> Self {
        Self::replying(CommandOutput {
            code: Some(0),
            output: String::new(),
        })
    }

    pub fn replying(out: CommandOutput) -> Self {
        Self::with_reply(Reply::Always(out))
    }

    /// The first `ok` calls succeed, every later one returns `out`.
    pub fn fail_after(ok: usize, out: CommandOutput) -> Self {
        Self::with_reply(Reply::FailAfter(ok, out))
    }

    pub fn unspawnable() -> Self {
        Self::with_reply(Reply::Unspawnable)
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            calls: Rc::default(),
            reply: Rc::new(reply),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn sent(&self) -> Vec<(bool, String)> {
        self.calls.borrow().iter().filter_map(Call::sent).collect()
    }
}

#[async_trait(?Send)]
impl CommandRunner for RecordingRunner {
    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        let index = {
            let mut calls = self.calls.borrow_mut();
            calls.push(Call {
                program: program.to_string(),
                args: args.to_vec(),
                at: Instant::now(),
            });
            calls.len() - 1
        };
        match &*self.reply {
            Reply::Always(out) => Ok(out.clone()),
            Reply::FailAfter(ok, _) if index < *ok => Ok(CommandOutput {
                code: Some(0),
                output: String::new(),
            }),
            Reply::FailAfter(_, out) => Ok(out.clone()),
            Reply::Unspawnable => Err(io::Error::new(io::ErrorKind::NotFound, "no tmux")),
        }
    }
}

/// Acknowledges immediately and remembers every prompt it was shown.
#[derive(Clone, Default)]
pub(crate) struct RecordingConfirm {
    prompts: Rc<RefCell<Vec<String>>>,
}

impl RecordingConfirm {
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Confirm for RecordingConfirm {
    async fn acknowledge(&self, prompt: &str) -> Result<()> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(())
    }
}

/// Script context for a prompting session named `demo` whose output is discarded.
pub(crate) fn context(runner: &RecordingRunner, confirm: &RecordingConfirm) -> Context {
    let session = Session::new("demo")
        .with_dispatcher(KeyDispatcher::new(Tmux::with_runner(runner.clone())))
        .with_confirm(confirm.clone());
    Context {
        session,
        output_handler: Arc::new(|_: &[u8]| {}),
    }
}
