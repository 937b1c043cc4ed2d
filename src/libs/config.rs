//! Configuration for taskdesk.
//!
//! Settings are layered in this order, later layers winning:
//!
//! 1. Built-in defaults (`mongodb://localhost:27017/`, database
//!    `gerenciador_tarefas_db`, collection `tarefas`, 5 second probe timeout)
//! 2. `config.json` in the platform data directory, written by `taskdesk init`
//! 3. Environment variables, optionally loaded from a `.env` file:
//!    `MONGODB_URI`, `MONGODB_DATABASE`, `MONGODB_COLLECTION`, `MONGODB_TIMEOUT_MS`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskdesk::libs::config::Config;
//!
//! let config = Config::load()?;
//! println!("Database: {}", config.database.database);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_URI: &str = "mongodb://localhost:27017/";
pub const DEFAULT_DATABASE: &str = "gerenciador_tarefas_db";
pub const DEFAULT_COLLECTION: &str = "tarefas";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

pub const ENV_URI: &str = "MONGODB_URI";
pub const ENV_DATABASE: &str = "MONGODB_DATABASE";
pub const ENV_COLLECTION: &str = "MONGODB_COLLECTION";
pub const ENV_TIMEOUT_MS: &str = "MONGODB_TIMEOUT_MS";

/// Where the MongoDB backend lives and how long the startup probe may wait.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string, e.g. `mongodb://localhost:27017/`.
    pub uri: String,

    /// Logical database holding the task collection.
    pub database: String,

    /// Collection the tasks are stored in.
    pub collection: String,

    /// Upper bound in milliseconds for connecting and pinging at startup.
    ///
    /// When the server does not answer within this window the application
    /// keeps its tasks in memory for the rest of the session.
    pub timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl DatabaseConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Applies overrides from an arbitrary variable source.
    ///
    /// Empty values are ignored. A timeout that is not a whole number of
    /// milliseconds keeps the previous value.
    pub fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(uri) = var(ENV_URI) {
            self.uri = uri;
        }
        if let Some(database) = var(ENV_DATABASE) {
            self.database = database;
        }
        if let Some(collection) = var(ENV_COLLECTION) {
            self.collection = collection;
        }
        if let Some(timeout) = var(ENV_TIMEOUT_MS) {
            match timeout.trim().parse::<u64>() {
                Ok(timeout_ms) => self.timeout_ms = timeout_ms,
                Err(_) => tracing::warn!(value = %timeout, "ignoring invalid {}", ENV_TIMEOUT_MS),
            }
        }

        self
    }
}

/// Root configuration object persisted as `config.json`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Reads `config.json` from the data directory, or defaults when it does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Full startup configuration: `.env`, then the config file, then the environment.
    pub fn load() -> Result<Config> {
        let _ = dotenv::dotenv();
        let mut config = Self::read()?;
        config.database = config.database.apply_env();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive wizard prefilled with the current file contents.
    pub fn init() -> Result<Config> {
        let current = Self::read()?.database;
        let theme = ColorfulTheme::default();

        let uri: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabaseUri.to_string())
            .default(current.uri)
            .interact_text()?;
        let database: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabaseName.to_string())
            .default(current.database)
            .interact_text()?;
        let collection: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptCollectionName.to_string())
            .default(current.collection)
            .interact_text()?;
        let timeout_ms: u64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptTimeoutMs.to_string())
            .default(current.timeout_ms)
            .interact_text()?;

        Ok(Config {
            database: DatabaseConfig {
                uri,
                database,
                collection,
                timeout_ms,
            },
        })
    }
}
