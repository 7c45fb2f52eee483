//! Line-editing backend built on `rustyline`.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use tracing::{debug, warn};

use super::source::{LineSource, RawLine};
use crate::config::ConsoleConfig;

/// Interactive source with in-line editing and recallable history.
///
/// On a terminal the editor draws the prompt. When stdin is piped, rustyline
/// reads plain lines and prints nothing, so the console prints the prompt.
pub struct EditorSource {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
    renders_prompt: bool,
}

impl EditorSource {
    pub fn new(config: &ConsoleConfig) -> Result<Self> {
        config.validate()?;
        let rl_config = Config::builder()
            .max_history_size(config.history_limit)
            .context("set history limit")?
            .auto_add_history(false)
            .build();
        let mut editor = DefaultEditor::with_config(rl_config).context("create line editor")?;

        if let Some(path) = config.history_file.as_ref().filter(|path| path.exists()) {
            editor
                .load_history(path)
                .with_context(|| format!("load history {}", path.display()))?;
            debug!(path = %path.display(), "history loaded");
        }

        Ok(Self {
            editor,
            history_file: config.history_file.clone(),
            renders_prompt: io::stdin().is_terminal(),
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<RawLine>> {
        readline_outcome(self.editor.readline(prompt))
    }

    fn renders_prompt(&self) -> bool {
        self.renders_prompt
    }

    fn add_history(&mut self, line: &str) -> Result<()> {
        self.editor
            .add_history_entry(line)
            .context("add history entry")?;
        let Some(path) = &self.history_file else {
            return Ok(());
        };
        if let Err(err) = self.editor.save_history(path) {
            warn!(path = %path.display(), err = %err, "failed to save history");
        }
        Ok(())
    }
}

/// Ctrl-C is a null read; Ctrl-D or closed input ends the line empty.
fn readline_outcome(result: rustyline::Result<String>) -> Result<Option<RawLine>> {
    match result {
        Ok(text) => Ok(Some(RawLine::terminated(text))),
        Err(ReadlineError::Interrupted) => {
            debug!("line edit interrupted");
            Ok(None)
        }
        Err(ReadlineError::Eof) => Ok(Some(RawLine::eof(""))),
        Err(err) => Err(err).context("read line"),
    }
}
