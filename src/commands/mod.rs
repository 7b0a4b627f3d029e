mod enter;
mod expect;
mod key_press;
mod paste;
mod pause;
mod send_keys;
mod show;
mod type_text;
mod wait;

pub use enter::Enter;
pub use expect::Expect;
pub use key_press::KeyPress;
pub use paste::Paste;
pub use pause::Pause;
pub use send_keys::SendKeys;
pub use show::Show;
pub use type_text::TypeText;
pub use wait::Wait;
