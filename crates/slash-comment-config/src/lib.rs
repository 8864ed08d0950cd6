use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("No document given and no default_file set in {config_path}")]
    NoDocument { config_path: PathBuf },
}

/// User preferences for the slash-comment tools.
///
/// Every key is optional; a partial file falls back to [`Config::default`]
/// field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markdown file opened when no path is given on the command line.
    pub default_file: Option<PathBuf>,
    /// Start the terminal view in live preview rather than source mode.
    pub live_preview: bool,
    /// Emit a complete HTML document (with the comment stylesheet) by default.
    pub standalone_html: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_file: None,
            live_preview: true,
            standalone_html: false,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.default_file = config
            .default_file
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    /// Loads the user's config file, falling back to defaults when it does
    /// not exist. Read and parse failures are still reported.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(Self::config_path())?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/slash-comment");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The document to open: the command-line path if given, else `default_file`.
    pub fn document_path(&self, arg: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
        arg.or_else(|| self.default_file.clone())
            .ok_or_else(|| ConfigError::NoDocument {
                config_path: Self::config_path(),
            })
    }

    /// Whether the terminal view starts in live preview. `--source` always wins.
    pub fn starts_live(&self, source_flag: bool) -> bool {
        self.live_preview && !source_flag
    }

    /// Whether `html` emits a full document. Either the flag or the config enables it.
    pub fn wants_standalone(&self, standalone_flag: bool) -> bool {
        self.standalone_html || standalone_flag
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
