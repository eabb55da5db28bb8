//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.dedash/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::sort::SortKey;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DedashConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Sort key id; unknown ids fall back to distance.
    pub default_sort: Option<String>,
    pub location: Option<String>,
    /// JSON file replacing the embedded restaurant data.
    /// Relative paths are resolved against `~/.dedash/`.
    pub data_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOCATION: &str = "Boston, MA";
pub const DEFAULT_LOG_FILE: &str = "dedash.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_sort: SortKey,
    pub location: String,
    /// `None` means the embedded fixture.
    pub data_file: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values that came from the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub sort: Option<SortKey>,
    pub data_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Startup Log
// ============================================================================

/// Log lines raised while loading and resolving config.
///
/// The logger's file and level come from the config itself, so nothing can
/// be logged yet at this point. `main` replays the entries once the logger
/// is installed.
#[derive(Debug, Default)]
pub struct StartupLog {
    entries: Vec<(Level, String)>,
}

impl StartupLog {
    pub fn warn(&mut self, message: String) {
        self.entries.push((Level::Warn, message));
    }

    pub fn info(&mut self, message: String) {
        self.entries.push((Level::Info, message));
    }

    pub fn debug(&mut self, message: String) {
        self.entries.push((Level::Debug, message));
    }

    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    /// Emit every recorded line through the installed logger.
    pub fn replay(self) {
        for (level, message) in self.entries {
            log::log!(level, "{}", message);
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.dedash/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".dedash"))
}

/// Returns the path to `~/.dedash/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.dedash/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DedashConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(startup: &mut StartupLog) -> Result<DedashConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            startup.warn("Could not determine home directory, using default config".to_string());
            return Ok(DedashConfig::default());
        }
    };

    if !path.exists() {
        startup.info(format!(
            "No config file found, generating default at {}",
            path.display()
        ));
        generate_default_config(&path, startup);
        return Ok(DedashConfig::default());
    }

    let config = load_config_from(&path)?;
    startup.info(format!("Loaded config from {}", path.display()));
    startup.debug(format!("Config: {:?}", config));
    Ok(config)
}

pub fn load_config_from(path: &Path) -> Result<DedashConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path, startup: &mut StartupLog) {
    let default_content = r#"# DeDash Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_sort = "distance"          # "distance", "rating" or "eta"
# location = "Boston, MA"
# data_file = "restaurants.json"     # Path relative to ~/.dedash/

# [log]
# level = "debug"                    # "off", "error", "warn", "info", "debug", "trace"
# file = "dedash.log"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        startup.warn(format!("Failed to create config directory: {}", e));
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        startup.warn(format!("Failed to write default config: {}", e));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &DedashConfig,
    cli: &CliOverrides,
    startup: &mut StartupLog,
) -> ResolvedConfig {
    // Sort: CLI → env → config → default
    let default_sort = match cli.sort {
        Some(key) => key,
        None => std::env::var("DEDASH_SORT")
            .ok()
            .or_else(|| config.general.default_sort.clone())
            .map(|key| {
                SortKey::parse_key(&key).unwrap_or_else(|| {
                    startup.warn(format!(
                        "Unknown sort key '{}', using {}",
                        key,
                        SortKey::Distance.id()
                    ));
                    SortKey::Distance
                })
            })
            .unwrap_or_default(),
    };

    // Location: env → config → default
    let location = std::env::var("DEDASH_LOCATION")
        .ok()
        .or_else(|| config.general.location.clone())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    // Data file: CLI → env → config (relative to ~/.dedash/) → embedded
    let data_file = cli
        .data_file
        .clone()
        .or_else(|| std::env::var("DEDASH_DATA_FILE").ok().map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .data_file
                .as_deref()
                .map(resolve_config_relative)
        });

    let log_level = match config.log.level.as_deref() {
        Some(level) => level.parse::<LevelFilter>().unwrap_or_else(|_| {
            startup.warn(format!(
                "Unknown log level '{}', using {}",
                level, DEFAULT_LOG_LEVEL
            ));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        default_sort,
        location,
        data_file,
        log_level,
        log_file: PathBuf::from(
            config
                .log
                .file
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        ),
    }
}

fn resolve_config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}
