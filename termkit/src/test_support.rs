//! Test-only helpers for driving a [`Console`](crate::console::Console)
//! without a terminal.

use std::collections::VecDeque;

use anyhow::Result;

use crate::console::{LineSource, RawLine};

/// One scripted result of [`LineSource::read_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedRead {
    /// A newline-terminated line.
    Line(String),
    /// A read that produced nothing and must be retried.
    Null,
}

/// Line source that replays a fixed script.
///
/// Once the script is exhausted every read reports end of input with an
/// empty line. Prompts passed to reads and recorded history entries are kept
/// for assertions.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: VecDeque<ScriptedRead>,
    renders_prompt: bool,
    pub prompts: Vec<String>,
    pub history: Vec<String>,
}

impl ScriptedSource {
    /// Script of newline-terminated lines.
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::from_reads(
            lines
                .into_iter()
                .map(|line| ScriptedRead::Line(line.into()))
                .collect(),
        )
    }

    pub fn from_reads(reads: Vec<ScriptedRead>) -> Self {
        Self {
            script: reads.into(),
            ..Self::default()
        }
    }

    /// Behave like a line-editing backend that displays prompts itself.
    pub fn rendering_prompts(mut self) -> Self {
        self.renders_prompt = true;
        self
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<RawLine>> {
        self.prompts.push(prompt.to_string());
        Ok(match self.script.pop_front() {
            Some(ScriptedRead::Line(text)) => Some(RawLine::terminated(text)),
            Some(ScriptedRead::Null) => None,
            None => Some(RawLine::eof("")),
        })
    }

    fn renders_prompt(&self) -> bool {
        self.renders_prompt
    }

    fn add_history(&mut self, line: &str) -> Result<()> {
        self.history.push(line.to_string());
        Ok(())
    }
}
