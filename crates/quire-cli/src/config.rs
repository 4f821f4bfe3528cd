//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags and arguments (handled at the call-site, not here)
//! 2. Environment variables prefixed with `QUIRE_`, nested keys joined by
//!    `__` (e.g. `QUIRE_DEFAULTS__BASE_DIR`)
//! 3. `.quire.toml` in the current directory
//! 4. The user config file (see [`AppConfig::config_path`]), or the file
//!    passed with `--config`, which then replaces both file layers
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use quire_adapters::DEFAULT_BASE_DIR;

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = ".quire.toml";

/// Every key understood by `quire config get|set`.
pub const KNOWN_KEYS: &[&str] = &["defaults.base_dir", "output.no_color", "output.format"];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new scaffolds.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Directory scaffolded into when no `BASE_DIR` is given.
    pub base_dir: PathBuf,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `human`, `plain` or `json`; used when `--output-format` is `auto`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration by layering defaults, files and environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the user and local files are both optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialize built-in configuration defaults")?;

        let mut builder = Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(true),
            ),
            None => builder
                .add_source(
                    File::from(Self::config_path())
                        .format(FileFormat::Toml)
                        .required(false),
                )
                .add_source(
                    File::from(Path::new(LOCAL_CONFIG_FILE))
                        .format(FileFormat::Toml)
                        .required(false),
                ),
        };

        let config = builder
            .add_source(
                Environment::with_prefix("QUIRE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Failed to parse configuration")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.quire.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "quire", "quire")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The value of a dotted key, rendered for display.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "defaults.base_dir" => Some(self.defaults.base_dir.display().to_string()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            _ => None,
        }
    }

    /// Every known key with its current value, in a stable order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KNOWN_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    /// Rendered TOML for a freshly initialised config file.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Set `key` to `value` inside the TOML document at `path`.
///
/// The file is created if missing.  Unrelated keys and tables are kept; the
/// result is checked against [`AppConfig`] before anything is written.
pub fn persist_value(path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    if !KNOWN_KEYS.contains(&key) {
        bail!(
            "Unknown configuration key '{key}' (known keys: {})",
            KNOWN_KEYS.join(", ")
        );
    }

    let mut document: toml::Table = if path.is_file() {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        raw.parse()
            .with_context(|| format!("Failed to parse {}", path.display()))?
    } else {
        toml::Table::new()
    };

    let parsed = parse_value(key, value)?;
    let Some((section, field)) = key.split_once('.') else {
        bail!("Configuration key '{key}' must be of the form section.field");
    };

    let table = document
        .entry(section)
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let Some(table) = table.as_table_mut() else {
        bail!("'{section}' in {} is not a table", path.display());
    };
    table.insert(field.to_owned(), parsed);

    let checked: AppConfig = toml::Value::Table(document.clone())
        .try_into()
        .context("Resulting configuration would be invalid")?;
    tracing::debug!(?checked, "validated configuration update");

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let rendered = toml::to_string_pretty(&document).context("Failed to serialize configuration")?;
    std::fs::write(path, rendered).with_context(|| format!("Failed to write {}", path.display()))
}

fn parse_value(key: &str, value: &str) -> anyhow::Result<toml::Value> {
    match key {
        "output.no_color" => value
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .with_context(|| format!("'{value}' is not a boolean (use true or false)")),
        "output.format" => match value {
            "human" | "plain" | "json" => Ok(toml::Value::String(value.to_owned())),
            other => bail!("'{other}' is not an output format (use human, plain or json)"),
        },
        _ => {
            if value.trim().is_empty() {
                bail!("'{key}' cannot be empty");
            }
            Ok(toml::Value::String(value.to_owned()))
        }
    }
}
