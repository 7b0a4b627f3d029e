//! tmux key names for non-literal dispatches.
//!
//! The constants stand in for entries of tmux's key-name table, so
//! `keys::BACKSPACE` can be written instead of `"BSpace"`. Pass them to
//! [`Session::send_keys`](crate::Session::send_keys) with `literal = false`,
//! or as the `after` keystroke of
//! [`Session::enter_with`](crate::Session::enter_with).
//!
//! ```
//! use handsfree::keys;
//!
//! assert_eq!(keys::control("c"), "C-c");
//! assert_eq!(keys::function(5), Some("F5"));
//! ```

pub const BACKSPACE: &str = "BSpace";
pub const END: &str = "End";
pub const ENTER: &str = "Enter";
pub const ESCAPE: &str = "Escape";
pub const HOME: &str = "Home";
pub const PAGE_DOWN: &str = "PageDown";
pub const PAGE_UP: &str = "PageUp";
pub const SPACE: &str = "Space";
pub const TAB: &str = "Tab";

pub const UP: &str = "Up";
pub const DOWN: &str = "Down";
pub const LEFT: &str = "Left";
pub const RIGHT: &str = "Right";

pub const F1: &str = "F1";
pub const F2: &str = "F2";
pub const F3: &str = "F3";
pub const F4: &str = "F4";
pub const F5: &str = "F5";
pub const F6: &str = "F6";
pub const F7: &str = "F7";
pub const F8: &str = "F8";
pub const F9: &str = "F9";
pub const F10: &str = "F10";
pub const F11: &str = "F11";
pub const F12: &str = "F12";
pub const F13: &str = "F13";
pub const F14: &str = "F14";
pub const F15: &str = "F15";
pub const F16: &str = "F16";
pub const F17: &str = "F17";
pub const F18: &str = "F18";
pub const F19: &str = "F19";

/// Function keys in order, `FUNCTION_KEYS[0]` being `F1`.
pub const FUNCTION_KEYS: [&str; 19] = [
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15, F16, F17, F18, F19,
];

/// Name of function key `n` (one-based), or `None` outside `1..=19`.
pub fn function(n: usize) -> Option<&'static str> {
    n.checked_sub(1).and_then(|i| FUNCTION_KEYS.get(i)).copied()
}

/// `key` pressed together with Ctrl.
///
/// `key` is case-sensitive: tmux reads an uppercase key as Shift plus the key,
/// so `control("A")` is Ctrl+Shift+A.
pub fn control(key: &str) -> String {
    format!("C-{key}")
}

/// `key` pressed together with the command (meta) key. Case-sensitive, as
/// for [`control`].
pub fn command(key: &str) -> String {
    format!("M-{key}")
}

/// `key` pressed together with Alt. Case-sensitive, as for [`control`].
pub fn alt(key: &str) -> String {
    format!("A-{key}")
}
