//! A thin client over the `tmux` command line.
//!
//! [`Tmux`] pairs a program name with a [`CommandRunner`] and turns tmux's
//! failure output into typed [`Error`]s. Keystroke delivery lives in
//! [`crate::dispatch`]; the lifecycle helpers here (`new_session`,
//! `capture_pane`, ...) serve the script runner and the binary.

use crate::error::{Error, Result};
use crate::process::{CommandOutput, CommandRunner, SystemRunner};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info};

/// Program invoked when no other is configured.
pub const DEFAULT_PROGRAM: &str = "tmux";

/// Oldest tmux release known to work.
pub const MINIMUM_VERSION: TmuxVersion = TmuxVersion { major: 1, minor: 7 };

const SESSION_NOT_FOUND: &[&str] = &["session not found", "can't find session"];
const CONNECTION_FAILED: &[&str] = &[
    "failed to connect to server",
    "no server running",
    "error connecting to",
];

/// Handle for invoking tmux. Cheap to clone; clones share the runner.
#[derive(Clone)]
pub struct Tmux {
    program: String,
    runner: Rc<dyn CommandRunner>,
}

impl Tmux {
    /// Invoke the `tmux` found on `PATH`.
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }

    /// Route every invocation through `runner`.
    pub fn with_runner(runner: impl CommandRunner + 'static) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            runner: Rc::new(runner),
        }
    }

    /// Use a different tmux binary, e.g. an absolute path.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run tmux with `args` and return whatever it printed, successful or not.
    pub async fn run(&self, args: &[String]) -> Result<CommandOutput> {
        self.runner
            .run(&self.program, args)
            .await
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })
    }

    /// Run a command that targets `session` and classify a failure.
    ///
    /// Returns the command output on success.
    pub(crate) async fn run_for(&self, session: &str, args: &[String]) -> Result<String> {
        let out = self.run(args).await?;
        classify(session, || self.command_line(args), out)
    }

    /// Check that the installed tmux is recent enough.
    ///
    /// Nothing calls this implicitly; callers decide whether an old or
    /// unrecognised version is fatal.
    pub async fn check_version(&self) -> Result<TmuxVersion> {
        let args = vec!["-V".to_string()];
        let out = self.run(&args).await?;
        if !out.success() {
            return Err(Error::Command {
                command: self.command_line(&args),
                code: out.code,
                output: out.output,
            });
        }
        match TmuxVersion::parse(&out.output) {
            Some(version) if version >= MINIMUM_VERSION => {
                debug!(%version, "tmux version accepted");
                Ok(version)
            }
            _ => Err(Error::UnsupportedVersion {
                found: out.output.trim().to_string(),
            }),
        }
    }

    /// Whether `session` exists. A server that is not running has no sessions.
    pub async fn has_session(&self, session: &str) -> Result<bool> {
        let args = target_args("has-session", session);
        match self.run_for(session, &args).await {
            Ok(_) => Ok(true),
            Err(Error::SessionNotFound { .. } | Error::ConnectionFailed { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Start a detached session named `session`, starting the server if needed.
    pub async fn new_session(&self, session: &str) -> Result<()> {
        let args = vec![
            "new-session".to_string(),
            "-d".to_string(),
            "-s".to_string(),
            session.to_string(),
        ];
        self.run_for(session, &args).await?;
        info!(session, "created tmux session");
        Ok(())
    }

    /// Text currently visible in the session's active pane.
    pub async fn capture_pane(&self, session: &str) -> Result<String> {
        let mut args = target_args("capture-pane", session);
        args.push("-p".to_string());
        self.run_for(session, &args).await
    }

    pub async fn kill_session(&self, session: &str) -> Result<()> {
        self.run_for(session, &target_args("kill-session", session))
            .await
            .map(drop)
    }

    pub async fn kill_server(&self) -> Result<()> {
        let args = vec!["kill-server".to_string()];
        let out = self.run(&args).await?;
        if out.success() {
            return Ok(());
        }
        Err(Error::Command {
            command: self.command_line(&args),
            code: out.code,
            output: out.output,
        })
    }

    pub(crate) fn command_line(&self, args: &[String]) -> String {
        let mut line = self.program.clone();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl Default for Tmux {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Tmux {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tmux")
            .field("program", &self.program)
            .finish_non_exhaustive()
    }
}

fn target_args(command: &str, session: &str) -> Vec<String> {
    vec![command.to_string(), "-t".to_string(), session.to_string()]
}

/// Map a finished tmux invocation to success or a typed error.
///
/// `command` is only rendered when the failure is not recognised.
pub(crate) fn classify(
    session: &str,
    command: impl FnOnce() -> String,
    out: CommandOutput,
) -> Result<String> {
    if out.success() {
        return Ok(out.output);
    }
    let CommandOutput { code, output } = out;
    if SESSION_NOT_FOUND.iter().any(|m| output.contains(m)) {
        Err(Error::SessionNotFound {
            session: session.to_string(),
            code,
            output,
        })
    } else if CONNECTION_FAILED.iter().any(|m| output.contains(m)) {
        Err(Error::ConnectionFailed { code, output })
    } else {
        Err(Error::Command {
            command: command(),
            code,
            output,
        })
    }
}

/// A tmux release number as printed by `tmux -V`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TmuxVersion {
    pub major: u32,
    pub minor: u32,
}

impl TmuxVersion {
    /// Parse `tmux -V` output such as `tmux 3.3a` or `tmux next-3.4`.
    ///
    /// Letter suffixes are ignored. Returns `None` for builds without a
    /// number, e.g. `tmux master`.
    pub fn parse(output: &str) -> Option<Self> {
        let word = output.split_whitespace().nth(1)?;
        let word = word.strip_prefix("next-").unwrap_or(word);
        let (major, rest) = word.split_once('.')?;
        let minor: String = rest.chars().take_while(char::is_ascii_digit).collect();
        Some(Self {
            major: major.parse().ok()?,
            minor: minor.parse().ok()?,
        })
    }
}

impl fmt::Display for TmuxVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;

    fn finished(code: i32, output: &str) -> CommandOutput {
        CommandOutput {
            code: Some(code),
            output: output.to_string(),
        }
    }

    #[test]
    fn test_classify_success_returns_output() {
        let out = classify("demo", String::new, finished(0, "pane text")).unwrap();
        assert_eq!(out, "pane text");
    }

    #[test]
    fn test_classify_session_not_found() {
        for output in ["session not found: demo\n", "can't find session: demo\n"] {
            match classify("demo", String::new, finished(1, output)) {
                Err(Error::SessionNotFound { session, code, .. }) => {
                    assert_eq!(session, "demo");
                    assert_eq!(code, Some(1));
                }
                other => panic!("unexpected: {other:?}"),
            }
        }
    }

    #[test]
    fn test_classify_connection_failed() {
        for output in [
            "failed to connect to server\n",
            "no server running on /tmp/tmux-1000/default\n",
            "error connecting to /tmp/tmux-1000/default (No such file or directory)\n",
        ] {
            assert!(matches!(
                classify("demo", String::new, finished(1, output)),
                Err(Error::ConnectionFailed { .. })
            ));
        }
    }

    #[test]
    fn test_classify_other_failure_keeps_code() {
        match classify("demo", || "tmux bogus".to_string(), finished(7, "unknown command\n")) {
            Err(Error::Command {
                command,
                code,
                output,
            }) => {
                assert_eq!(command, "tmux bogus");
                assert_eq!(code, Some(7));
                assert_eq!(output, "unknown command\n");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_parse_version() {
        let v = |major, minor| Some(TmuxVersion { major, minor });
        assert_eq!(TmuxVersion::parse("tmux 1.8\n"), v(1, 8));
        assert_eq!(TmuxVersion::parse("tmux 3.3a\n"), v(3, 3));
        assert_eq!(TmuxVersion::parse("tmux next-3.4\n"), v(3, 4));
        assert_eq!(TmuxVersion::parse("tmux master\n"), None);
        assert_eq!(TmuxVersion::parse(""), None);
    }

    #[test]
    fn test_version_ordering() {
        assert!(TmuxVersion { major: 1, minor: 6 } < MINIMUM_VERSION);
        assert!(TmuxVersion { major: 1, minor: 10 } > MINIMUM_VERSION);
        assert!(TmuxVersion { major: 2, minor: 0 } > MINIMUM_VERSION);
    }

    #[tokio::test]
    async fn test_check_version() {
        let runner = RecordingRunner::replying(finished(0, "tmux 3.2a\n"));
        let tmux = Tmux::with_runner(runner.clone());
        assert_eq!(
            tmux.check_version().await.unwrap(),
            TmuxVersion { major: 3, minor: 2 }
        );
        assert_eq!(runner.calls()[0].args, ["-V"]);
    }

    #[tokio::test]
    async fn test_check_version_too_old() {
        let tmux = Tmux::with_runner(RecordingRunner::replying(finished(0, "tmux 1.6\n")));
        match tmux.check_version().await {
            Err(Error::UnsupportedVersion { found }) => assert_eq!(found, "tmux 1.6"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_has_session() {
        let tmux = Tmux::with_runner(RecordingRunner::replying(finished(0, "")));
        assert!(tmux.has_session("demo").await.unwrap());

        let tmux = Tmux::with_runner(RecordingRunner::replying(finished(
            1,
            "can't find session: demo\n",
        )));
        assert!(!tmux.has_session("demo").await.unwrap());

        let tmux = Tmux::with_runner(RecordingRunner::replying(finished(
            1,
            "no server running on /tmp/tmux-0/default\n",
        )));
        assert!(!tmux.has_session("demo").await.unwrap());
    }

    #[tokio::test]
    async fn test_lifecycle_arguments() {
        let runner = RecordingRunner::replying(finished(0, "$ ls\n"));
        let tmux = Tmux::with_runner(runner.clone()).with_program("/usr/bin/tmux");

        tmux.new_session("demo").await.unwrap();
        assert_eq!(tmux.capture_pane("demo").await.unwrap(), "$ ls\n");
        tmux.kill_session("demo").await.unwrap();
        tmux.kill_server().await.unwrap();

        let calls = runner.calls();
        assert!(calls.iter().all(|c| c.program == "/usr/bin/tmux"));
        assert_eq!(calls[0].args, ["new-session", "-d", "-s", "demo"]);
        assert_eq!(calls[1].args, ["capture-pane", "-t", "demo", "-p"]);
        assert_eq!(calls[2].args, ["kill-session", "-t", "demo"]);
        assert_eq!(calls[3].args, ["kill-server"]);
    }

    #[tokio::test]
    async fn test_spawn_failure() {
        let tmux = Tmux::with_runner(RecordingRunner::unspawnable());
        match tmux.capture_pane("demo").await {
            Err(Error::Spawn { program, .. }) => assert_eq!(program, "tmux"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
