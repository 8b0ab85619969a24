//! Colour helpers. Colour is only used when the target stream is a terminal.

use std::io::IsTerminal;

use owo_colors::{AnsiColors, OwoColorize};

fn paint(text: &str, color: AnsiColors, tty: bool) -> String {
    if tty {
        format!("{}", text.color(color))
    } else {
        text.to_string()
    }
}

/// For stdout.
pub fn success(text: impl AsRef<str>) -> String {
    paint(text.as_ref(), AnsiColors::Green, std::io::stdout().is_terminal())
}

/// For stdout.
pub fn accent(text: impl AsRef<str>) -> String {
    paint(text.as_ref(), AnsiColors::Cyan, std::io::stdout().is_terminal())
}

/// For stderr.
pub fn warning(text: impl AsRef<str>) -> String {
    paint(text.as_ref(), AnsiColors::Yellow, std::io::stderr().is_terminal())
}

/// For stderr.
pub fn error(text: impl AsRef<str>) -> String {
    paint(text.as_ref(), AnsiColors::Red, std::io::stderr().is_terminal())
}
