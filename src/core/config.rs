//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.corrector/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The service id may also be baked in at build time
//! (`CORRECTOR_SERVICE_ID=... cargo build`); a runtime value always wins.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CorrectorConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub id: Option<String>,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_LOG_FILE: &str = "corrector.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const ENV_SERVICE_ID: &str = "CORRECTOR_SERVICE_ID";
pub const ENV_BASE_URL: &str = "CORRECTOR_BASE_URL";
pub const ENV_API_KEY: &str = "CORRECTOR_API_KEY";
pub const ENV_LOG_LEVEL: &str = "CORRECTOR_LOG";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub service_id: String,
    pub base_url: String,
    pub api_key: Option<String>,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides<'a> {
    pub service: Option<&'a str>,
    pub base_url: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

// ============================================================================
// Startup Notes
// ============================================================================

/// Log records produced while loading config, before the logger exists.
///
/// The log file and level come from the resolved config, so these are held
/// and replayed once `WriteLogger` is installed.
#[derive(Debug, Default)]
pub struct StartupNotes {
    records: Vec<(Level, String)>,
}

impl StartupNotes {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, level: Level, message: String) {
        self.records.push((level, message));
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|(_, message)| message.as_str())
    }

    /// Emit every held record through the installed logger, oldest first.
    pub fn replay(self) {
        for (level, message) in self.records {
            log::log!(level, "{}", message);
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    MissingServiceId,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::MissingServiceId => write!(
                f,
                "no correction service id configured (set [service] id in ~/.corrector/config.toml, \
                 {ENV_SERVICE_ID}, or --service)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.corrector/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".corrector").join("config.toml"))
}

/// Load config from `~/.corrector/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CorrectorConfig::default()`.
pub fn load_config(notes: &mut StartupNotes) -> Result<CorrectorConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path, notes),
        None => {
            notes.push(
                Level::Warn,
                "Could not determine home directory, using default config".to_string(),
            );
            Ok(CorrectorConfig::default())
        }
    }
}

pub fn load_config_from(
    path: &Path,
    notes: &mut StartupNotes,
) -> Result<CorrectorConfig, ConfigError> {
    if !path.exists() {
        notes.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(path, notes);
        return Ok(CorrectorConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CorrectorConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    notes.push(Level::Info, format!("Loaded config from {}", path.display()));
    notes.push(Level::Debug, format!("Config: {}", redacted(&config)));
    Ok(config)
}

fn redacted(config: &CorrectorConfig) -> String {
    format!(
        "service.id={:?} service.base_url={:?} api_key_set={} log_level={:?}",
        config.service.id,
        config.service.base_url,
        config.service.api_key.is_some(),
        config.general.log_level
    )
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notes: &mut StartupNotes) {
    let default_content = r#"# Corrector Configuration
# All settings are optional except the service id, which may also come from
# the CORRECTOR_SERVICE_ID env var or the --service flag.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# log_file = "corrector.log"

# [service]
# id = "your-tool-id"                # Or set CORRECTOR_SERVICE_ID
# base_url = "http://localhost:8080/api"
# api_key = "..."                    # Or set CORRECTOR_API_KEY
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        notes.push(Level::Warn, format!("Failed to create config directory: {e}"));
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        notes.push(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Build-time fallback for the service id and base URL.
fn build_time_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_SERVICE_ID => option_env!("CORRECTOR_SERVICE_ID"),
        ENV_BASE_URL => option_env!("CORRECTOR_BASE_URL"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Resolve the final config from the process environment (runtime, then build time).
pub fn resolve(
    config: &CorrectorConfig,
    cli: CliOverrides<'_>,
    notes: &mut StartupNotes,
) -> Result<ResolvedConfig, ConfigError> {
    resolve_with(
        config,
        cli,
        |key| std::env::var(key).ok().or_else(|| build_time_env(key)),
        notes,
    )
}

/// Resolve the final config by collapsing: defaults → config file → env → CLI.
///
/// `env` looks up environment values; empty values count as unset.
pub fn resolve_with(
    config: &CorrectorConfig,
    cli: CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
    notes: &mut StartupNotes,
) -> Result<ResolvedConfig, ConfigError> {
    let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    // Service id: CLI → env → config
    let service_id = cli
        .service
        .map(str::to_string)
        .or_else(|| env(ENV_SERVICE_ID))
        .or_else(|| config.service.id.clone())
        .filter(|id| !id.trim().is_empty())
        .ok_or(ConfigError::MissingServiceId)?;

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .map(str::to_string)
        .or_else(|| env(ENV_BASE_URL))
        .or_else(|| config.service.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // API key: env → config
    let api_key = env(ENV_API_KEY).or_else(|| config.service.api_key.clone());

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .map(str::to_string)
        .or_else(|| env(ENV_LOG_LEVEL))
        .or_else(|| config.general.log_level.clone())
        .map(|level| parse_level(&level, notes))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .general
        .log_file
        .as_deref()
        .unwrap_or(DEFAULT_LOG_FILE)
        .into();

    Ok(ResolvedConfig {
        service_id,
        base_url,
        api_key,
        log_level,
        log_file,
    })
}

fn parse_level(level: &str, notes: &mut StartupNotes) -> LevelFilter {
    level.trim().parse().unwrap_or_else(|_| {
        notes.push(
            Level::Warn,
            format!("Unknown log level '{level}', using {DEFAULT_LOG_LEVEL}"),
        );
        DEFAULT_LOG_LEVEL
    })
}
