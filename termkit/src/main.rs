//! Command-line front end for the termkit console and memory helpers.
//!
//! Each subcommand maps onto one library operation, which makes the helpers
//! usable from shell scripts: `termkit confirm "Deploy?" && ./deploy.sh`.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use termkit::config::{DEFAULT_CONFIG_PATH, load_config};
use termkit::console::{ChoiceSet, StdConsole};
use termkit::{exit_codes, logging, memory};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "termkit",
    version,
    about = "Console prompts and guarded allocation helpers"
)]
struct Cli {
    /// Config file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read one line and print it back.
    Read {
        #[arg(default_value = "> ")]
        prompt: String,
    },
    /// Ask until one of the labels is entered; print its index.
    Choose {
        message: String,
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Ask a y/n question. Exits 0 on y, 2 on n.
    Confirm { message: String },
    /// Ask a True/False question. Exits 0 on True, 2 on False.
    Boolean { message: String },
    /// Wait for <Enter>, optionally printing a message first.
    Pause { message: Option<String> },
    /// Clear the terminal.
    Clear,
    /// Print a separator line.
    Separator,
    /// Allocate a zeroed buffer, optionally resize it, then free it.
    Alloc {
        #[arg(long)]
        size: usize,
        #[arg(long)]
        resize: Option<usize>,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    // `process::exit` skips destructors, so flush buffered prompt output first.
    let _ = io::stdout().flush();
    process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    debug!(?config, "config loaded");
    let mut console = StdConsole::stdio(&config)?;

    match cli.command {
        Command::Read { prompt } => {
            let line = console.read_line(&prompt)?;
            console.print_line(format_args!("{line}"))?;
            Ok(exit_codes::OK)
        }
        Command::Choose { message, labels } => {
            let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
            let choices = ChoiceSet::new(&labels)?;
            let index = console.read_choice(&message, &choices)?;
            console.print_line(format_args!("{index}"))?;
            Ok(exit_codes::OK)
        }
        Command::Confirm { message } => Ok(answer_code(console.read_choice_yes_no(&message)?)),
        Command::Boolean { message } => Ok(answer_code(console.read_choice_boolean(&message)?)),
        Command::Pause { message } => {
            match message {
                Some(message) => console.prompt(&message)?,
                None => console.pause()?,
            }
            Ok(exit_codes::OK)
        }
        Command::Clear => {
            console.clear()?;
            Ok(exit_codes::OK)
        }
        Command::Separator => {
            console.print_separator()?;
            Ok(exit_codes::OK)
        }
        Command::Alloc { size, resize } => cmd_alloc(&mut console, size, resize),
    }
}

fn answer_code(yes: bool) -> i32 {
    if yes {
        exit_codes::OK
    } else {
        exit_codes::DECLINED
    }
}

fn cmd_alloc(console: &mut StdConsole, size: usize, resize: Option<usize>) -> Result<i32> {
    let mut buffer = memory::allocate(size);
    if buffer.iter().any(|&b| b != 0) {
        bail!("allocated buffer is not zero-filled");
    }
    console.print_line(format_args!("allocated {size} bytes"))?;

    if let Some(new_size) = resize {
        buffer.fill(0xA5);
        let kept = size.min(new_size);
        buffer = memory::reallocate(buffer, new_size);
        let preserved = buffer
            .get(..kept)
            .context("reallocated buffer shorter than requested")?
            .iter()
            .all(|&b| b == 0xA5);
        if !preserved {
            bail!("reallocation did not preserve existing contents");
        }
        console.print_line(format_args!(
            "reallocated to {new_size} bytes, {kept} bytes preserved"
        ))?;
    }

    memory::free(buffer);
    console.print_line(format_args!("freed"))?;
    Ok(exit_codes::OK)
}
