//! Owned line of user input.

use std::ffi::CString;
use std::fmt;
use std::ops::Deref;

use anyhow::{Context, Result};

/// One line read from the console, without its terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Line(String);

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Null-terminated copy for C consumers.
    ///
    /// Fails if the line contains an interior NUL byte.
    pub fn to_c_string(&self) -> Result<CString> {
        CString::new(self.0.as_bytes()).context("line contains an interior NUL byte")
    }
}

impl Deref for Line {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Line {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_string_is_null_terminated() {
        let line = Line::new("hello");
        let c = line.to_c_string().expect("no interior nul");
        assert_eq!(c.as_bytes_with_nul(), b"hello\0");
    }

    #[test]
    fn empty_line_is_just_the_terminator() {
        let c = Line::default().to_c_string().expect("empty");
        assert_eq!(c.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn interior_nul_is_rejected() {
        assert!(Line::new("a\0b").to_c_string().is_err());
    }
}
