//! Line oriented prompting over any `BufRead` source.
//!
//! The menus in `src/bin/` all read whole lines and parse them, so a typed
//! value is either there, malformed, or the input is simply finished. Keeping
//! the reader and writer generic lets the tests drive a menu from a byte
//! buffer.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Outcome of reading one typed value from the console.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<T> {
    /// The line parsed as a `T`.
    Value(T),
    /// A line was read but did not parse.
    Invalid,
    /// The input source is exhausted.
    Eof,
}

pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `label` without a newline and read one line, stripping the line
    /// terminator. `None` means end of input.
    pub fn read_line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Read a whole line and parse its trimmed content as `T`.
    pub fn read_value<T: FromStr>(&mut self, label: &str) -> io::Result<Input<T>> {
        match self.read_line(label)? {
            None => Ok(Input::Eof),
            Some(line) => match line.trim().parse() {
                Ok(v) => Ok(Input::Value(v)),
                Err(_) => Ok(Input::Invalid),
            },
        }
    }

    /// Read the first non-whitespace character of a line. A blank line is
    /// `Invalid`, not a space.
    pub fn read_char(&mut self, label: &str) -> io::Result<Input<char>> {
        match self.read_line(label)? {
            None => Ok(Input::Eof),
            Some(line) => match line.chars().find(|c| !c.is_whitespace()) {
                Some(c) => Ok(Input::Value(c)),
                None => Ok(Input::Invalid),
            },
        }
    }
}
