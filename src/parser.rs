//! Parser for demo scripts.
//!
//! The top-level entry points are [`parse_str`] and [`parse_file`].

use crate::command::ScriptCommand;
use crate::commands::{Enter, Expect, KeyPress, Paste, Pause, SendKeys, Show, TypeText, Wait};
use anyhow::{Context as _, Result, anyhow};
use std::path::Path;
use std::time::Duration;

/// Parse a demo script from a string slice and return the resulting commands.
///
/// Lines that are empty or start with `#` are ignored. Inline comments (` # …`)
/// are stripped while preserving `#` characters inside quoted strings.
///
/// # Errors
///
/// Returns an error if any line contains an unknown command, a malformed
/// argument, or an unclosed quoted string.
///
/// # Example
///
/// ```
/// use handsfree::parse_str;
///
/// let commands = parse_str("enter \"vim\"\ntype \"ihello\"\nkey Esc\n").unwrap();
/// assert_eq!(commands.len(), 3);
/// ```
pub fn parse_str(content: &str) -> Result<Vec<Box<dyn ScriptCommand>>> {
    let mut commands = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = strip_inline_comment(line);
        let cmd = parse_line(line)
            .with_context(|| format!("Failed to parse line {}: {}", line_num + 1, line))?;
        commands.push(cmd);
    }
    Ok(commands)
}

/// Parse a demo script from a file and return the resulting commands.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if the script is malformed.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Box<dyn ScriptCommand>>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script file: {}", path.display()))?;
    parse_str(&content)
}

type ParseFn = fn(&str) -> Result<Box<dyn ScriptCommand>>;

static REGISTRY: &[(&str, ParseFn)] = &[
    (TypeText::NAME, TypeText::parse_boxed),
    (Enter::NAME, Enter::parse_boxed),
    (Paste::NAME, Paste::parse_boxed),
    (SendKeys::NAME, SendKeys::parse_boxed),
    (KeyPress::NAME, KeyPress::parse_boxed),
    (Pause::NAME, Pause::parse_boxed),
    (Show::NAME, Show::parse_boxed),
    (Wait::NAME, Wait::parse_boxed),
    (Expect::NAME, Expect::parse_boxed),
];

/// Dispatch a single non-empty, non-comment line to the matching command's parser.
fn parse_line(line: &str) -> Result<Box<dyn ScriptCommand>> {
    let (name, args) = line.split_once(' ').unwrap_or((line, ""));
    REGISTRY
        .iter()
        .find(|(cmd_name, _)| *cmd_name == name)
        .map(|(_, parse)| parse(args))
        .unwrap_or_else(|| Err(anyhow!("Unknown command: {}", line)))
}

/// Strip inline comments from a line, preserving `#` inside quoted strings.
fn strip_inline_comment(line: &str) -> &str {
    let mut in_quotes = false;
    let mut escaped = false;
    for (i, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if ch == '\\' {
            escaped = true;
            continue;
        }
        if ch == '"' {
            in_quotes = !in_quotes;
            continue;
        }
        if ch == '#' && !in_quotes {
            return line[..i].trim();
        }
    }
    line
}

/// Parse a duration string: `1s`, `500ms`, `1.5s`.
pub(crate) fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();
    if let Some(ms_str) = s.strip_suffix("ms") {
        let ms: u64 = ms_str
            .trim()
            .parse()
            .context("Invalid milliseconds value")?;
        Ok(Duration::from_millis(ms))
    } else if let Some(s_str) = s.strip_suffix('s') {
        let secs: f64 = s_str.trim().parse().context("Invalid seconds value")?;
        Duration::try_from_secs_f64(secs).context("Invalid seconds value")
    } else {
        Err(anyhow!("Duration must end with 's' or 'ms', got: {}", s))
    }
}

/// Parse a double-quoted string, processing `\n`, `\t`, `\"`, and `\\`.
pub(crate) fn parse_quoted_string(s: &str) -> Result<String> {
    let s = s.trim();
    if !s.starts_with('"') {
        return Err(anyhow!("Expected string to start with '\"'"));
    }
    if s.len() < 2 || !s.ends_with('"') {
        return Err(anyhow!("Expected string to end with '\"'"));
    }
    Ok(unescape(&s[1..s.len() - 1]))
}

/// Split `args` into a leading quoted string and whatever follows it.
///
/// Used by commands that take a string plus an optional trailing argument,
/// e.g. `expect "Ready" 2s`.
pub(crate) fn parse_quoted_prefix(args: &str) -> Result<(String, &str)> {
    let args = args.trim();
    if !args.starts_with('"') {
        return Err(anyhow!("Expected quoted string"));
    }

    // Locate the closing quote, respecting backslash escapes.
    let mut escaped = false;
    let mut end_idx = None;
    for (i, ch) in args.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        if ch == '\\' {
            escaped = true;
            continue;
        }
        if ch == '"' {
            end_idx = Some(i);
            break;
        }
    }

    let end_idx = end_idx.ok_or_else(|| anyhow!("Unclosed quote"))?;
    Ok((unescape(&args[1..end_idx]), args[end_idx + 1..].trim()))
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
