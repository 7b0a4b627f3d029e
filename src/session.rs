//! The [`Session`] façade: gated, paced actions against one tmux session.

use crate::confirm::{Confirm, TerminalPrompt, prompt_text};
use crate::dispatch::{KeyDispatcher, KeyToken};
use crate::error::Result;
use crate::keys;
use crate::tmux::Tmux;
use crate::typing::{self, DEFAULT_DELAY_MS};
use std::fmt;
use std::ops::{Deref, DerefMut};
use tracing::info;

/// Options for [`Session::enter_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnterOptions {
    /// Type the keys character by character instead of sending them at once.
    pub teletype: bool,
    /// Key name sent after the keys, non-literally. Defaults to Enter.
    pub after: Option<String>,
}

impl Default for EnterOptions {
    fn default() -> Self {
        Self {
            teletype: true,
            after: Some(keys::ENTER.to_string()),
        }
    }
}

/// Keystrokes bound for one named tmux session.
///
/// Gated actions ([`teletype`](Self::teletype), [`enter`](Self::enter),
/// [`enter_with`](Self::enter_with)) wait for the presenter's confirmation
/// first unless the session is auto-advancing.
///
/// ```no_run
/// use handsfree::{Session, keys};
///
/// # async fn demo() -> handsfree::Result<()> {
/// let mut session = Session::new("demo");
/// session.enter(Some("vim notes.txt")).await?; // prompts first
/// {
///     let mut quiet = session.auto_advance(); // no prompts in here
///     quiet.teletype("ihello", None).await?;
///     quiet.send_keys(keys::ESCAPE, false).await?;
/// }
/// session.enter(Some(":x")).await?; // prompts again
/// # Ok(())
/// # }
/// ```
pub struct Session {
    name: String,
    auto_advancing: bool,
    teletype_delay: Option<u64>,
    dispatcher: KeyDispatcher,
    confirm: Box<dyn Confirm>,
}

impl Session {
    /// A session that prompts before each gated action, using the system tmux.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            auto_advancing: false,
            teletype_delay: None,
            dispatcher: KeyDispatcher::default(),
            confirm: Box::new(TerminalPrompt::new()),
        }
    }

    /// Start with prompts suppressed (`true`) or enabled (`false`).
    pub fn with_auto_advance(mut self, enabled: bool) -> Self {
        self.auto_advancing = enabled;
        self
    }

    /// Nominal milliseconds between typed characters, replacing the 90 ms default.
    pub fn with_teletype_delay(mut self, millis: u64) -> Self {
        self.teletype_delay = Some(millis);
        self
    }

    pub fn with_dispatcher(mut self, dispatcher: KeyDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn with_confirm(mut self, confirm: impl Confirm + 'static) -> Self {
        self.confirm = Box::new(confirm);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advancing
    }

    pub fn teletype_delay(&self) -> Option<u64> {
        self.teletype_delay
    }

    /// The tmux client keystrokes go through.
    pub fn tmux(&self) -> &Tmux {
        self.dispatcher.tmux()
    }

    /// Send `keys` straight to the session. Never prompts.
    ///
    /// With `literal` false, tmux looks `keys` up as a key name.
    pub async fn send_keys(&self, keys: &str, literal: bool) -> Result<()> {
        self.dispatcher
            .dispatch(&self.name, KeyToken::new(keys, literal))
            .await
    }

    /// Type `keys` character by character, as if by hand.
    ///
    /// The pause after each keystroke is `delay_ms` (else the session's
    /// teletype delay, else 90 ms) give or take ten percent.
    pub async fn teletype(&mut self, keys: &str, delay_ms: Option<u64>) -> Result<()> {
        self.confirm_step(Some(keys)).await?;

        let delay = delay_ms
            .or(self.teletype_delay)
            .unwrap_or(DEFAULT_DELAY_MS);

        let scope = self.auto_advance();
        info!(session = %scope.name, ?keys, "typing");
        typing::type_text(&scope.dispatcher, &scope.name, keys, delay).await
    }

    /// Teletype `keys`, then press Enter.
    pub async fn enter(&mut self, keys: Option<&str>) -> Result<()> {
        self.enter_with(keys, &EnterOptions::default()).await
    }

    /// Send `keys` (typed or all at once), then the `after` key name.
    ///
    /// Empty or absent `keys` send nothing; absent `after` sends nothing
    /// after. Prompts once for the whole action.
    pub async fn enter_with(&mut self, keys: Option<&str>, options: &EnterOptions) -> Result<()> {
        self.confirm_step(keys).await?;

        if let Some(keys) = keys.filter(|keys| !keys.is_empty()) {
            if options.teletype {
                self.auto_advance().teletype(keys, None).await?;
            } else {
                self.send_keys(keys, true).await?;
            }
        }

        if let Some(after) = options.after.as_deref() {
            self.auto_advance().send_keys(after, false).await?;
        }
        Ok(())
    }

    /// Suppress prompts until the returned guard is dropped.
    ///
    /// The guard restores whatever the flag was when it was taken, so nested
    /// scopes unwind correctly, and it runs on early returns and when an
    /// interrupted future is dropped.
    pub fn auto_advance(&mut self) -> AutoAdvance<'_> {
        let previous = self.auto_advancing;
        self.auto_advancing = true;
        AutoAdvance {
            session: self,
            previous,
        }
    }

    async fn confirm_step(&self, keys: Option<&str>) -> Result<()> {
        if self.auto_advancing {
            return Ok(());
        }
        self.confirm
            .acknowledge(&prompt_text(&self.name, keys))
            .await
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("name", &self.name)
            .field("auto_advancing", &self.auto_advancing)
            .field("teletype_delay", &self.teletype_delay)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

/// Guard returned by [`Session::auto_advance`]. Derefs to the session.
pub struct AutoAdvance<'a> {
    session: &'a mut Session,
    previous: bool,
}

impl Deref for AutoAdvance<'_> {
    type Target = Session;

    fn deref(&self) -> &Session {
        self.session
    }
}

impl DerefMut for AutoAdvance<'_> {
    fn deref_mut(&mut self) -> &mut Session {
        self.session
    }
}

impl Drop for AutoAdvance<'_> {
    fn drop(&mut self) {
        self.session.auto_advancing = self.previous;
    }
}
