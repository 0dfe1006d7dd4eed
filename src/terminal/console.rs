//! Line-oriented terminal I/O.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Borrowed input and output streams for one session.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    /// Wraps the given streams.
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Reads one line without its terminator. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writes a line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Writes text without a newline and flushes.
    pub fn prompt(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }
}
