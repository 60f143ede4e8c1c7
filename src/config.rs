//! Project layout configuration for kmenu.
//! The defaults describe the usual `board/` and `app/` trees; a `kmenu.json`,
//! `kmenu.yml` or `kmenu.yaml` in the project root may override them.

use crate::constants::{APP_DIR, BOARD_DIR, CONFIG_FILES, KCONFIG_FILE};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where the trees live and how the generated files are named.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Project root; every other path is relative to it
    #[serde(skip)]
    pub root: PathBuf,
    /// Directory holding the `vendor/board` tree
    pub board_dir: String,
    /// Directory holding the `kind/name` tree
    pub app_dir: String,
    /// Name of the optional per-board fragment
    pub fragment: String,
    /// Name of the generated document inside each tree
    pub output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            board_dir: BOARD_DIR.to_string(),
            app_dir: APP_DIR.to_string(),
            fragment: KCONFIG_FILE.to_string(),
            output: KCONFIG_FILE.to_string(),
        }
    }
}

impl Config {
    /// Default layout rooted at `root`.
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf(), ..Self::default() }
    }

    pub fn board_root(&self) -> PathBuf {
        self.root.join(&self.board_dir)
    }

    pub fn app_root(&self) -> PathBuf {
        self.root.join(&self.app_dir)
    }

    pub fn board_output(&self) -> PathBuf {
        self.board_root().join(&self.output)
    }

    pub fn app_output(&self) -> PathBuf {
        self.app_root().join(&self.output)
    }

    /// Root-relative path of a board fragment, as written in `source` lines.
    pub fn fragment_source(&self, vendor: &str, board: &str) -> String {
        format!("{}/{}/{}/{}", self.board_dir, vendor, board, self.fragment)
    }

    /// Location on disk of the fragment named by [`Config::fragment_source`].
    pub fn fragment_path(&self, vendor: &str, board: &str) -> PathBuf {
        self.root.join(self.fragment_source(vendor, board))
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("board_dir", &self.board_dir),
            ("app_dir", &self.app_dir),
            ("fragment", &self.fragment),
            ("output", &self.output),
        ] {
            if value.trim().is_empty() {
                return Err(Error::ConfigError(format!("'{key}' must not be empty")));
            }
        }
        for (key, value) in [("fragment", &self.fragment), ("output", &self.output)] {
            if value.contains(['/', '\\']) {
                return Err(Error::ConfigError(format!(
                    "'{key}' must be a file name, got '{value}'"
                )));
            }
        }
        Ok(())
    }
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML,
///   names unknown keys, or holds invalid values
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = match serde_json::from_str(content) {
        Ok(config) => config,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}")))?,
    };
    config.validate()?;
    Ok(config)
}

/// Loads the layout for the project at `root`.
///
/// Falls back to the default layout when no configuration file exists.
pub fn get_config<P: AsRef<Path>>(root: P) -> Result<Config> {
    let root = root.as_ref();
    for file in CONFIG_FILES {
        let config_path = root.join(file);
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            let config = parse_config(&content)?;
            return Ok(Config { root: root.to_path_buf(), ..config });
        }
    }

    debug!("No configuration file in {}, using defaults", root.display());
    Ok(Config::with_root(root))
}
