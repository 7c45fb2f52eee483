//! Console configuration stored in `termkit.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "termkit.toml";

/// Console configuration (TOML).
///
/// Only the line-editing backend reads it; the fallback reader keeps no
/// history. Missing fields take their defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// File the input history is loaded from and appended to. `None` keeps
    /// history in memory for the lifetime of the process.
    pub history_file: Option<PathBuf>,

    /// Maximum number of remembered history entries.
    pub history_limit: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            history_limit: 100,
        }
    }
}

impl ConsoleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            return Err(anyhow!("history_limit must be > 0"));
        }
        if self
            .history_file
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(anyhow!("history_file must not be empty when set"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ConsoleConfig::default()`.
pub fn load_config(path: &Path) -> Result<ConsoleConfig> {
    if !path.exists() {
        let cfg = ConsoleConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ConsoleConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ConsoleConfig::default());
    }

    #[test]
    fn load_reads_all_fields() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("termkit.toml");
        fs::write(&path, "history_file = \"history.txt\"\nhistory_limit = 25\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(
            cfg,
            ConsoleConfig {
                history_file: Some(PathBuf::from("history.txt")),
                history_limit: 25,
            }
        );
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("termkit.toml");
        fs::write(&path, "history_limit = 7\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.history_limit, 7);
        assert_eq!(cfg.history_file, None);
    }

    #[test]
    fn zero_history_limit_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("termkit.toml");
        fs::write(&path, "history_limit = 0\n").expect("write");
        let err = load_config(&path).expect_err("zero limit");
        assert!(err.to_string().contains("history_limit"));
    }

    #[test]
    fn malformed_file_names_the_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("termkit.toml");
        fs::write(&path, "history_limit = \"many\"\n").expect("write");
        let err = load_config(&path).expect_err("bad type");
        assert!(format!("{err:#}").contains("termkit.toml"));
    }
}
