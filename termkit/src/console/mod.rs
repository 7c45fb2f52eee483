//! Console input/output helpers.
//!
//! [`Console`] bundles a [`LineSource`] with output and error writers. All
//! calls block; nothing is retained between calls except the history kept by
//! the line source.
//!
//! The line source is chosen at compile time: with the `line-editing`
//! feature (default) [`Console::stdio`] uses the `rustyline` backend, which
//! renders prompts on a terminal, supports in-line editing and recalls
//! history. Without it the plain [`StdinSource`] reader is used. Whenever the
//! source does not render the prompt, the console prints it.

mod choice;
#[cfg(feature = "line-editing")]
mod editor;
mod line;
mod source;

use std::fmt;
use std::io::{self, Stderr, Stdout, Write};
use std::process::Command;

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};

pub use choice::ChoiceSet;
#[cfg(feature = "line-editing")]
pub use editor::EditorSource;
pub use line::Line;
pub use source::{LineSource, RawLine, StdinSource};

use crate::config::ConsoleConfig;

/// Horizontal rule written by [`Console::print_separator`].
pub const SEPARATOR: &str = "----------------------------------------";

/// Prompt shown by [`Console::pause`].
pub const PAUSE_PROMPT: &str = "Press <Enter> to continue...";

/// Line source compiled in for [`Console::stdio`].
#[cfg(feature = "line-editing")]
pub type DefaultSource = EditorSource;
/// Line source compiled in for [`Console::stdio`].
#[cfg(not(feature = "line-editing"))]
pub type DefaultSource = StdinSource<io::StdinLock<'static>>;

/// Console over the process's standard streams.
pub type StdConsole = Console<DefaultSource, Stdout, Stderr>;

/// Input ended before a valid choice was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("input closed before a valid choice was entered")
    }
}

impl std::error::Error for InputClosed {}

/// Line source plus output and error writers; every prompt helper lives here.
pub struct Console<S, O = Stdout, E = Stderr> {
    source: S,
    out: O,
    err: E,
}

impl StdConsole {
    /// Console reading stdin through the compiled-in line source.
    pub fn stdio(config: &ConsoleConfig) -> Result<Self> {
        Ok(Console::new(
            default_source(config)?,
            io::stdout(),
            io::stderr(),
        ))
    }
}

#[cfg(feature = "line-editing")]
fn default_source(config: &ConsoleConfig) -> Result<DefaultSource> {
    EditorSource::new(config)
}

#[cfg(not(feature = "line-editing"))]
fn default_source(_config: &ConsoleConfig) -> Result<DefaultSource> {
    Ok(StdinSource::stdin())
}

impl<S: LineSource, O: Write, E: Write> Console<S, O, E> {
    /// Console over the given line source and writers.
    pub fn new(source: S, out: O, err: E) -> Self {
        Self { source, out, err }
    }

    /// Take the console apart, e.g. to inspect captured output.
    pub fn into_parts(self) -> (S, O, E) {
        (self.source, self.out, self.err)
    }

    /// Write formatted text to the output stream.
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.out.write_fmt(args).context("write stdout")
    }

    /// Write formatted text and a newline to the output stream.
    pub fn print_line(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.out.write_fmt(args).context("write stdout")?;
        self.out.write_all(b"\n").context("write stdout")
    }

    /// Write formatted text to the error stream.
    pub fn print_error(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.err.write_fmt(args).context("write stderr")
    }

    /// Write formatted text and a newline to the error stream.
    pub fn print_error_line(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.err.write_fmt(args).context("write stderr")?;
        self.err.write_all(b"\n").context("write stderr")
    }

    pub fn print_separator(&mut self) -> Result<()> {
        self.print_line(format_args!("{SEPARATOR}"))
    }

    /// Show `prompt` and block until a full line is read.
    ///
    /// Null reads are retried. Non-empty lines are added to the source's
    /// history. End of input terminates the line like a newline does.
    pub fn read_line(&mut self, prompt: &str) -> Result<Line> {
        self.read_line_raw(prompt).map(|(line, _)| line)
    }

    fn read_line_raw(&mut self, prompt: &str) -> Result<(Line, bool)> {
        if !self.source.renders_prompt() {
            self.print(format_args!("{prompt}"))?;
        }
        self.out.flush().context("flush stdout")?;

        let raw = loop {
            match self.source.read_line(prompt)? {
                Some(raw) => break raw,
                None => debug!("null read, retrying"),
            }
        };

        if !raw.text.is_empty() {
            self.source.add_history(&raw.text)?;
        }
        Ok((Line::new(raw.text), raw.at_eof))
    }

    /// Prompt until the user enters one of `choices`; returns its index.
    ///
    /// Invalid answers print `Invalid choice "<input>".` and re-prompt. If
    /// input ends on an invalid answer the loop stops with [`InputClosed`].
    pub fn read_choice(&mut self, message: &str, choices: &ChoiceSet<'_>) -> Result<usize> {
        let prompt = format!("{message} [{choices}]: ");
        loop {
            let (line, at_eof) = self.read_line_raw(&prompt)?;
            if let Some(index) = choices.position(&line) {
                debug!(index, "choice accepted");
                return Ok(index);
            }
            debug!(input = %line, "choice rejected");
            self.print_line(format_args!("Invalid choice \"{line}\"."))?;
            if at_eof {
                return Err(InputClosed.into());
            }
        }
    }

    /// `true` iff the user answered `y`.
    pub fn read_choice_yes_no(&mut self, message: &str) -> Result<bool> {
        Ok(self.read_choice(message, &ChoiceSet::YES_NO)? == 0)
    }

    /// `true` iff the user answered `True`.
    pub fn read_choice_boolean(&mut self, message: &str) -> Result<bool> {
        Ok(self.read_choice(message, &ChoiceSet::BOOLEAN)? == 0)
    }

    /// Block until a line (possibly empty) is entered, discarding it.
    pub fn pause(&mut self) -> Result<()> {
        self.read_line(PAUSE_PROMPT)?;
        Ok(())
    }

    /// Print `message` on its own line, then [`pause`](Self::pause).
    pub fn prompt(&mut self, message: &str) -> Result<()> {
        self.print_line(format_args!("{message}"))?;
        self.pause()
    }

    /// Clear the terminal with the platform's clear command.
    ///
    /// The command writes to the inherited terminal, not to this console's
    /// output writer. A non-zero exit status is logged and otherwise ignored.
    #[instrument(skip_all)]
    pub fn clear(&mut self) -> Result<()> {
        self.out.flush().context("flush stdout")?;
        let mut cmd = clear_command();
        debug!(program = ?cmd.get_program(), "spawning clear command");
        let status = cmd.status().context("spawn terminal clear command")?;
        if !status.success() {
            warn!(exit_code = ?status.code(), "terminal clear command failed");
        }
        Ok(())
    }
}

fn clear_command() -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "cls"]);
        cmd
    } else {
        Command::new("clear")
    }
}
