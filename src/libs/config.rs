//! Configuration management for devtrack.
//!
//! Settings live in a JSON file in the platform-specific application data
//! directory (see [`DataStorage`]). Both modules are optional; a missing file
//! or module falls back to defaults, so devtrack runs without any setup.
//!
//! ## Configuration Structure
//!
//! - **Database Config**: the connection descriptor handed to the driver
//! - **Output Config**: report output format, column width and the default
//!   number of languages in the top-languages report
//!
//! ```json
//! {
//!   "database": { "connection": "/home/me/activity.db" },
//!   "output": { "format": "fixed", "column_width": 20, "top_languages": 5 }
//! }
//! ```
//!
//! ## Connection Descriptor Resolution
//!
//! The descriptor is taken from the first source that provides one:
//! 1. the `--db` command-line flag
//! 2. the `DEVTRACK_DB` environment variable (a `.env` file is honoured)
//! 3. `database.connection` in the configuration file
//! 4. [`DEFAULT_CONNECTION`]

use super::data_storage::DataStorage;
use super::view::{OutputFormat, DEFAULT_COLUMN_WIDTH};
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable holding the connection descriptor.
pub const DB_ENV_VAR: &str = "DEVTRACK_DB";

/// Descriptor used when nothing else is configured.
pub const DEFAULT_CONNECTION: &str = "devtrack.db";

/// Database connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// Driver-specific descriptor: a SQLite file path or a `file:` URI.
    ///
    /// Passed to the driver untouched.
    pub connection: String,
}

/// Report output settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    pub format: OutputFormat,

    /// Width every column is padded to in the fixed layout.
    pub column_width: usize,

    /// Number of languages shown by the top-languages report by default.
    pub top_languages: i64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::Fixed,
            column_width: DEFAULT_COLUMN_WIDTH,
            top_languages: 5,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,
}

impl Config {
    /// Reads configuration from the data directory.
    ///
    /// A missing file is not an error and yields the default configuration.
    /// A file that exists but does not parse is reported as an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))
    }

    /// Writes the configuration as pretty-printed JSON, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Output settings, falling back to defaults when the module is not configured.
    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }

    /// Resolves the connection descriptor for this run.
    pub fn connection(&self, flag: Option<&str>) -> String {
        resolve_connection(
            flag,
            env::var(DB_ENV_VAR).ok().as_deref(),
            self.database.as_ref().map(|d| d.connection.as_str()),
        )
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values are offered as defaults so re-running the wizard only
    /// changes what the user edits.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleDatabase.to_string(), Message::ConfigModuleOutput.to_string()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match selection {
                0 => {
                    let default = config.connection(None);
                    msg_print!(Message::ConfigModuleDatabase);
                    config.database = Some(DatabaseConfig {
                        connection: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptConnection.to_string())
                            .default(default)
                            .interact_text()?,
                    });
                }
                1 => {
                    let default = config.output();
                    msg_print!(Message::ConfigModuleOutput);

                    let formats: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.name()).collect();
                    let current = OutputFormat::ALL.iter().position(|f| *f == default.format).unwrap_or(0);
                    let format = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptOutputFormat.to_string())
                        .items(&formats)
                        .default(current)
                        .interact()?;

                    config.output = Some(OutputConfig {
                        format: OutputFormat::ALL[format],
                        column_width: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptColumnWidth.to_string())
                            .default(default.column_width)
                            .interact_text()?,
                        top_languages: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTopLanguagesLimit.to_string())
                            .default(default.top_languages)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

/// Picks the connection descriptor by precedence: flag, environment, config file, default.
pub fn resolve_connection(flag: Option<&str>, env_value: Option<&str>, configured: Option<&str>) -> String {
    [flag, env_value, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_CONNECTION)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_connection_precedence() {
        assert_eq!(resolve_connection(Some("flag.db"), Some("env.db"), Some("config.db")), "flag.db");
        assert_eq!(resolve_connection(None, Some("env.db"), Some("config.db")), "env.db");
        assert_eq!(resolve_connection(None, None, Some("config.db")), "config.db");
        assert_eq!(resolve_connection(None, None, None), DEFAULT_CONNECTION);
    }

    #[test]
    fn test_resolve_connection_skips_blank_values() {
        assert_eq!(resolve_connection(Some(""), Some("  "), Some("config.db")), "config.db");
    }

    #[test]
    fn test_config_json_shape() {
        let config = Config {
            database: Some(DatabaseConfig {
                connection: "file:activity.db?mode=ro".to_string(),
            }),
            output: None,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"database":{"connection":"file:activity.db?mode=ro"}}"#);

        let parsed: Config = serde_json::from_str(r#"{"output":{"format":"csv","column_width":12,"top_languages":3}}"#).unwrap();
        assert_eq!(parsed.database, None);
        assert_eq!(parsed.output().format, OutputFormat::Csv);
        assert_eq!(parsed.output().column_width, 12);
    }

    #[test]
    fn test_output_defaults() {
        let output = Config::default().output();
        assert_eq!(output.format, OutputFormat::Fixed);
        assert_eq!(output.column_width, 20);
        assert_eq!(output.top_languages, 5);
    }
}
