//! Text decorator
//!
//! Styling is an injected capability: the decorated renderer and line
//! formatter only talk to [`TextDecor`]. `AnsiDecor` maps the operations
//! onto ANSI attributes; `NoDecor` passes text through unchanged for
//! non-terminal output and tests.

use colored::Colorize;

pub trait TextDecor: Send + Sync {
    fn bold(&self, s: &str) -> String;
    fn gray(&self, s: &str) -> String;
    fn blue(&self, s: &str) -> String;
    fn green(&self, s: &str) -> String;
    fn yellow(&self, s: &str) -> String;
    fn magenta(&self, s: &str) -> String;
    /// Attention style for the first line of a stack trace.
    fn alert(&self, s: &str) -> String;
}

/// ANSI terminal decorator.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiDecor;

impl TextDecor for AnsiDecor {
    fn bold(&self, s: &str) -> String {
        s.bold().to_string()
    }

    fn gray(&self, s: &str) -> String {
        s.bright_black().to_string()
    }

    fn blue(&self, s: &str) -> String {
        s.blue().to_string()
    }

    fn green(&self, s: &str) -> String {
        s.green().to_string()
    }

    fn yellow(&self, s: &str) -> String {
        s.yellow().to_string()
    }

    fn magenta(&self, s: &str) -> String {
        s.magenta().to_string()
    }

    fn alert(&self, s: &str) -> String {
        s.white().on_red().bold().to_string()
    }
}

/// Pass-through decorator.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDecor;

impl TextDecor for NoDecor {
    fn bold(&self, s: &str) -> String {
        s.to_string()
    }

    fn gray(&self, s: &str) -> String {
        s.to_string()
    }

    fn blue(&self, s: &str) -> String {
        s.to_string()
    }

    fn green(&self, s: &str) -> String {
        s.to_string()
    }

    fn yellow(&self, s: &str) -> String {
        s.to_string()
    }

    fn magenta(&self, s: &str) -> String {
        s.to_string()
    }

    fn alert(&self, s: &str) -> String {
        s.to_string()
    }
}
