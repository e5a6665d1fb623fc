//! Where the ledger lives.
//!
//! Sources, later ones winning: the platform data dir, the user config file
//! (`~/.config/td/config.toml`), the file given with `--config`, then
//! `TD_LEDGER_PATH`. A relative `ledger_path` in a config file is taken
//! relative to that file's directory.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::value::magic::RelativePathBuf;
use serde::Deserialize;

const LEDGER_FILE: &str = "stays.csv";

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the ledger CSV file.
    pub ledger_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    ledger_path: RelativePathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_path: default_ledger_path(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment =
            Figment::from(Serialized::default("ledger_path", default_ledger_path()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed("TD_").only(&["ledger_path"]));

        let raw: RawConfig = figment.extract()?;
        let config = Self {
            ledger_path: raw.ledger_path.relative(),
        };
        tracing::debug!(ledger = %config.ledger_path.display(), "configuration loaded");
        Ok(config)
    }
}

fn default_ledger_path() -> PathBuf {
    dirs_data_path()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LEDGER_FILE)
}

/// `~/.config/td` on Linux.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("td"))
}

/// `~/.local/share/td` on Linux.
fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("td"))
}
