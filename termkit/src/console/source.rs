//! Line sources backing [`Console`](super::Console) reads.
//!
//! A [`LineSource`] produces one raw line per call. The console owns the
//! retry loop and prompt printing; sources only know how to fetch bytes.

use std::io::{self, BufRead, ErrorKind, StdinLock};

use anyhow::{Context, Result};
use tracing::debug;

/// A line as produced by a source, before it becomes a [`Line`](super::Line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// Text without the trailing newline.
    pub text: String,
    /// The read ended at end of input rather than at a newline.
    pub at_eof: bool,
}

impl RawLine {
    pub fn terminated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            at_eof: false,
        }
    }

    pub fn eof(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            at_eof: true,
        }
    }
}

/// Abstraction over interactive input backends.
pub trait LineSource {
    /// Read one line.
    ///
    /// `Ok(None)` is a null read (for example an interrupted read); the
    /// console retries it. Sources that render prompts themselves receive the
    /// prompt here; others may ignore it.
    fn read_line(&mut self, prompt: &str) -> Result<Option<RawLine>>;

    /// Whether this source displays the prompt passed to `read_line`.
    fn renders_prompt(&self) -> bool;

    /// Record a non-empty line in the input history.
    fn add_history(&mut self, line: &str) -> Result<()>;
}

/// Plain reader used when no line-editing backend is compiled in.
///
/// Bytes are collected into a growable buffer until `\n` or end of input.
/// No editing, no history.
pub struct StdinSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl StdinSource<StdinLock<'static>> {
    /// Source over the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> StdinSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for StdinSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<RawLine>> {
        // Partial input survives an interrupted read and is completed by the retry.
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(_) => {}
            Err(err) if err.kind() == ErrorKind::Interrupted => {
                debug!("stdin read interrupted");
                return Ok(None);
            }
            Err(err) => return Err(err).context("read stdin"),
        }

        let at_eof = self.buf.last() != Some(&b'\n');
        if !at_eof {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        let text = String::from_utf8_lossy(&self.buf).into_owned();
        self.buf.clear();
        Ok(Some(RawLine { text, at_eof }))
    }

    fn renders_prompt(&self) -> bool {
        false
    }

    fn add_history(&mut self, _line: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn source(input: &str) -> StdinSource<Cursor<Vec<u8>>> {
        StdinSource::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn reads_lines_without_terminators() {
        let mut src = source("first\r\nsecond\nthird");
        assert_eq!(
            src.read_line("").expect("read"),
            Some(RawLine::terminated("first"))
        );
        assert_eq!(
            src.read_line("").expect("read"),
            Some(RawLine::terminated("second"))
        );
        assert_eq!(src.read_line("").expect("read"), Some(RawLine::eof("third")));
        assert_eq!(src.read_line("").expect("read"), Some(RawLine::eof("")));
    }

    #[test]
    fn empty_line_is_terminated_and_empty() {
        let mut src = source("\n");
        assert_eq!(
            src.read_line("").expect("read"),
            Some(RawLine::terminated(""))
        );
    }

    #[test]
    fn long_lines_grow_the_buffer() {
        let long = "x".repeat(10_000);
        let mut src = source(&format!("{long}\n"));
        let raw = src.read_line("").expect("read").expect("line");
        assert_eq!(raw.text.len(), 10_000);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut src = StdinSource::new(Cursor::new(vec![b'a', 0xff, b'\n']));
        let raw = src.read_line("").expect("read").expect("line");
        assert_eq!(raw.text, "a\u{fffd}");
    }
}
