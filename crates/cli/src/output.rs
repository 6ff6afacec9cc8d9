//! Output formatting for the menu.

use std::io::{self, Write};

use console::{Term, style};
use serde::Serialize;

/// Writes menu text, results and messages to the operator.
pub struct Output<W> {
    writer: W,
    color: bool,
    term: Option<Term>,
}

impl<W: Write> Output<W> {
    /// Plain output into any writer (no screen clearing).
    pub fn new(writer: W, color: bool) -> Self {
        Self {
            writer,
            color,
            term: None,
        }
    }

    /// Clear `term` before each screen.
    pub fn with_terminal(mut self, term: Term) -> Self {
        self.term = Some(term);
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Clear the screen (no-op without a terminal).
    pub fn clear(&mut self) -> io::Result<()> {
        self.writer.flush()?;
        match &self.term {
            Some(term) => term.clear_screen(),
            None => Ok(()),
        }
    }

    pub fn line(&mut self, msg: impl core::fmt::Display) -> io::Result<()> {
        writeln!(self.writer, "{msg}")
    }

    /// Print a screen title: `=== title ===`.
    pub fn header(&mut self, title: &str) -> io::Result<()> {
        let text = format!("=== {title} ===");
        if self.color {
            writeln!(self.writer, "{}", style(text).bold())
        } else {
            writeln!(self.writer, "{text}")
        }
    }

    pub fn rule(&mut self) -> io::Result<()> {
        writeln!(self.writer, "-----------------------------")
    }

    /// Print a status line: `--- msg ---`.
    pub fn notice(&mut self, msg: &str) -> io::Result<()> {
        let text = format!("--- {msg} ---");
        if self.color {
            writeln!(self.writer, "{}", style(text).dim())
        } else {
            writeln!(self.writer, "{text}")
        }
    }

    pub fn success(&mut self, msg: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "{}", style(msg).green())
        } else {
            writeln!(self.writer, "{msg}")
        }
    }

    pub fn error(&mut self, msg: impl core::fmt::Display) -> io::Result<()> {
        let text = format!("Error: {msg}");
        if self.color {
            writeln!(self.writer, "{}", style(text).red())
        } else {
            writeln!(self.writer, "{text}")
        }
    }

    /// Print a prompt without a newline and flush it.
    pub fn prompt(&mut self, msg: &str) -> io::Result<()> {
        write!(self.writer, "{msg}")?;
        self.writer.flush()
    }

    pub fn json<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        writeln!(self.writer, "{json}")
    }
}

impl Output<io::Stdout> {
    pub fn stdout(color: bool, clear: bool) -> Self {
        let output = Self::new(io::stdout(), color);
        if clear {
            output.with_terminal(Term::stdout())
        } else {
            output
        }
    }
}

impl<W> core::fmt::Debug for Output<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Output")
            .field("color", &self.color)
            .field("term", &self.term.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Output<Vec<u8>>) -> io::Result<()>) -> String {
        let mut out = Output::new(Vec::new(), false);
        f(&mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn plain_messages() {
        assert_eq!(render(|o| o.header("Add Product")), "=== Add Product ===\n");
        assert_eq!(render(|o| o.notice("Inventory is empty.")), "--- Inventory is empty. ---\n");
        assert_eq!(render(|o| o.error("boom")), "Error: boom\n");
        assert_eq!(render(|o| o.prompt("Name: ")), "Name: ");
    }

    #[test]
    fn clear_without_terminal_writes_nothing() {
        assert_eq!(render(|o| o.clear()), "");
    }

    #[test]
    fn json_is_pretty_printed() {
        assert_eq!(render(|o| o.json(&vec![1, 2])), "[\n  1,\n  2\n]\n");
    }
}
