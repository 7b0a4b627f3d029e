//! [`KeyPress`] command: presses a named key or key combination.
//!
//! Script syntax:
//! - `key Enter`, `key Esc`, `key F5`, `key PageUp`
//! - `key Ctrl+c`, `key Alt+x`, `key Cmd+s`, `key Shift+Tab`
//! - `key C-c`: anything tmux already understands passes through as-is

use crate::command::{Context, ScriptCommand};
use crate::keys;
use anyhow::{Result, anyhow};
use async_trait::async_trait;

/// Sends one non-literal key name to the session, without prompting.
pub struct KeyPress {
    /// The tmux key name, e.g. `Enter` or `C-c`.
    pub key: String,
}

impl KeyPress {
    pub const NAME: &'static str = "key";
}

#[async_trait(?Send)]
impl ScriptCommand for KeyPress {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        Ok(Self {
            key: resolve(args.trim())?,
        })
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        ctx.session().send_keys(&self.key, false).await?;
        Ok(())
    }
}

/// Translate a script key spec into tmux key-name syntax.
fn resolve(spec: &str) -> Result<String> {
    if spec.is_empty() {
        return Err(anyhow!("Expected a key name after 'key'"));
    }

    if let Some((modifier, rest)) = spec.split_once('+') {
        if !modifier.is_empty() && !rest.is_empty() {
            let inner = resolve(rest)?;
            return match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => Ok(keys::control(&inner)),
                "alt" | "option" => Ok(keys::alt(&inner)),
                "cmd" | "command" | "meta" | "super" => Ok(keys::command(&inner)),
                "shift" => Ok(shifted(&inner)),
                _ => Err(anyhow!("Unknown modifier: {}", modifier)),
            };
        }
    }

    if let Some(name) = named(spec) {
        return Ok(name.to_string());
    }

    let mut chars = spec.chars();
    if let (Some(_), None) = (chars.next(), chars.next()) {
        return Ok(spec.to_string());
    }

    if ["C-", "M-", "S-"].iter().any(|prefix| spec.starts_with(prefix)) {
        return Ok(spec.to_string());
    }

    Err(anyhow!("Unknown key: {}", spec))
}

fn named(spec: &str) -> Option<&'static str> {
    let lower = spec.to_ascii_lowercase();
    let name = match lower.as_str() {
        "enter" | "return" => keys::ENTER,
        "esc" | "escape" => keys::ESCAPE,
        "backspace" | "bspace" => keys::BACKSPACE,
        "tab" => keys::TAB,
        "space" => keys::SPACE,
        "home" => keys::HOME,
        "end" => keys::END,
        "pageup" | "pgup" => keys::PAGE_UP,
        "pagedown" | "pgdn" => keys::PAGE_DOWN,
        "up" => keys::UP,
        "down" => keys::DOWN,
        "left" => keys::LEFT,
        "right" => keys::RIGHT,
        _ => return lower.strip_prefix('f')?.parse().ok().and_then(keys::function),
    };
    Some(name)
}

/// tmux spells Shift on a letter as the uppercase letter and Shift+Tab as `BTab`.
fn shifted(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_alphabetic() => ch.to_uppercase().collect(),
        _ if key == keys::TAB => "BTab".to_string(),
        _ => format!("S-{key}"),
    }
}
