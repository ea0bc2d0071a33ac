//! Configuration file loading.
//!
//! Precedence: CLI args > `NO_COLOR` > Config file > Defaults
//!
//! Only presentation is configurable. How a literal is decoded is decided
//! by the command line alone, so the same invocation always produces the
//! same output file.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Default config file content for `--config-init`.
pub const DEFAULT_CONFIG: &str = r#"# ctodata configuration
# See: ctodata --help for all options

# Lines of 16 bytes shown by --hexdump (0 = unlimited)
hexdump_lines = 16

# Disable colored output
no_color = false

# Suppress status lines on success
quiet = false
"#;

/// Configuration loaded from file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hexdump_lines: Option<usize>,
    pub no_color: Option<bool>,
    pub quiet: Option<bool>,
}

impl Config {
    /// Get the config file path.
    ///
    /// - Linux/macOS: `~/.config/ctodata/config.toml`
    /// - Windows: `%APPDATA%\ctodata\config.toml`
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ctodata").join("config.toml"))
    }

    /// Load config from file. Returns default if file doesn't exist.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };

        let Ok(contents) = fs::read_to_string(&path) else {
            tracing::trace!("No config file at: {}", path.display());
            return Self::default();
        };

        match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from: {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Hexdump line limit, `usize::MAX` when unlimited.
    pub fn hexdump_lines(&self) -> usize {
        match self.hexdump_lines.unwrap_or(16) {
            0 => usize::MAX,
            n => n,
        }
    }

    /// Respects the `NO_COLOR` standard (https://no-color.org/).
    pub fn no_color(&self) -> bool {
        if std::env::var_os("NO_COLOR").is_some() {
            return true;
        }
        self.no_color.unwrap_or(false)
    }

    pub fn quiet(&self) -> bool {
        self.quiet.unwrap_or(false)
    }
}

/// Create a default config file at the standard location.
pub fn init_config() -> Result<PathBuf, String> {
    let path = Config::path().ok_or("Cannot determine config directory")?;

    if path.exists() {
        return Err(format!("Config file already exists: {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create directory: {}", e))?;
    }

    fs::write(&path, DEFAULT_CONFIG).map_err(|e| format!("Failed to write config: {}", e))?;

    Ok(path)
}
