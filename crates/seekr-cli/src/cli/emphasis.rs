//! Marking highlighted text in plain terminal output.

use std::io::{IsTerminal, stdout};

/// How highlighted text is set apart from its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// ANSI reverse video.
    Reverse,
    /// `[[` and `]]` around the text, for pipes and files.
    Brackets,
}

impl Emphasis {
    /// Reverse video on a terminal, brackets otherwise.
    pub fn for_stdout() -> Self {
        if stdout().is_terminal() {
            Emphasis::Reverse
        } else {
            Emphasis::Brackets
        }
    }

    pub fn open(self) -> &'static str {
        match self {
            Emphasis::Reverse => "\x1b[7m",
            Emphasis::Brackets => "[[",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            Emphasis::Reverse => "\x1b[0m",
            Emphasis::Brackets => "]]",
        }
    }

    pub fn wrap(self, text: &str) -> String {
        format!("{}{text}{}", self.open(), self.close())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets_wrap() {
        assert_eq!(Emphasis::Brackets.wrap("fox"), "[[fox]]");
    }

    #[test]
    fn test_reverse_resets() {
        assert_eq!(Emphasis::Reverse.wrap("fox"), "\x1b[7mfox\x1b[0m");
    }
}
