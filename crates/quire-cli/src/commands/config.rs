//! `quire config`: read and write configuration values.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::{self, AppConfig},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `explicit` is the `--config` path, if any; `set` writes there instead of
/// the user config file.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    explicit: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&BTreeMap::from([(key.as_str(), value.as_str())]))?;
            } else {
                println!("{value}");
            }
        }

        ConfigCommands::Set { key, value } => {
            let path = explicit.unwrap_or_else(AppConfig::config_path);
            config::persist_value(&path, &key, &value)
                .with_cli_context(|| format!("Could not set '{key}'"))?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                for (key, value) in config.entries() {
                    output.print(&format!("  {key} = {value}"))?;
                }
            }
        }

        ConfigCommands::Path => {
            let path = explicit.unwrap_or_else(AppConfig::config_path);
            println!("{}", path.display());
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
