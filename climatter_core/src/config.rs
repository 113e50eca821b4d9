//! Configuration file support for climatter.
//!
//! Settings are layered, lowest priority first:
//! 1. built-in defaults
//! 2. the user config at `~/.config/climatter/config.toml`
//! 3. a runtime config passed with `--config`
//! 4. command-line overrides
//!
//! Within `[option]` a layer only replaces the fields it sets. A layer that
//! has an `[event_lists]` table replaces the lower layer's lists entirely.

use crate::{Error, ListMode, Result};
use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Application configuration after all layers are merged
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub option: OptionConfig,

    /// Event list label to file path, in declaration order
    pub event_lists: IndexMap<String, PathBuf>,

    /// Reference date to use instead of the current local date
    pub today_override: Option<NaiveDate>,
}

/// List display options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionConfig {
    pub list_mode: ListMode,
    pub list_future_events_count: usize,
    pub list_past_events_count: usize,
}

impl Default for OptionConfig {
    fn default() -> Self {
        Self {
            list_mode: ListMode::default(),
            list_future_events_count: default_event_count(),
            list_past_events_count: default_event_count(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            option: OptionConfig::default(),
            event_lists: default_event_lists(),
            today_override: None,
        }
    }
}

/// One config file as written; every field is optional
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(default)]
    pub option: Option<OptionLayer>,

    #[serde(default)]
    pub event_lists: Option<IndexMap<String, PathBuf>>,
}

/// The `[option]` table of a config file
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionLayer {
    pub list_mode: Option<ListMode>,
    pub list_future_events_count: Option<usize>,
    pub list_past_events_count: Option<usize>,
}

// Default value functions
fn default_event_count() -> usize {
    5
}

fn default_event_lists() -> IndexMap<String, PathBuf> {
    let mut lists = IndexMap::new();
    lists.insert("default".to_string(), Config::config_dir().join("events"));
    lists
}

impl FromStr for ConfigLayer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl ConfigLayer {
    /// Read a single config file
    ///
    /// A file with no settings at all is rejected, as is any key outside
    /// the known set.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let layer: ConfigLayer = contents.parse()?;
        if layer == ConfigLayer::default() {
            return Err(Error::Config(format!(
                "Config file {} is empty",
                path.display()
            )));
        }

        tracing::info!("Loaded config from {:?}", path);
        Ok(layer)
    }
}

impl Config {
    /// Load configuration from the standard locations
    ///
    /// The user config is optional; a runtime config, when given, must
    /// exist.
    pub fn load(runtime_config: Option<&Path>) -> Result<Self> {
        let user_config = Self::default_config_path();
        let user_config = if user_config.is_file() {
            Some(user_config)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                user_config
            );
            None
        };
        Self::load_layers(user_config.as_deref(), runtime_config)
    }

    /// Merge defaults with an optional user and runtime config file
    pub fn load_layers(user_config: Option<&Path>, runtime_config: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = user_config {
            config.merge(ConfigLayer::from_file(path)?);
        }

        if let Some(path) = runtime_config {
            let path = crate::loader::expand_home(path);
            if !path.is_file() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            config.merge(ConfigLayer::from_file(&path)?);
        }

        Ok(config)
    }

    /// Apply a higher-priority layer on top of this config
    pub fn merge(&mut self, layer: ConfigLayer) {
        if let Some(option) = layer.option {
            if let Some(mode) = option.list_mode {
                self.option.list_mode = mode;
            }
            if let Some(count) = option.list_future_events_count {
                self.option.list_future_events_count = count;
            }
            if let Some(count) = option.list_past_events_count {
                self.option.list_past_events_count = count;
            }
        }

        if let Some(event_lists) = layer.event_lists {
            self.event_lists = event_lists;
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, mode: Option<ListMode>, today: Option<&str>) -> Result<Self> {
        if let Some(mode) = mode {
            self.option.list_mode = mode;
        }
        if let Some(today) = today {
            self.today_override = Some(parse_reference_date(today)?);
        }
        Ok(self)
    }

    /// The reference date all offsets are computed against
    pub fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Directory holding the user config and the default event list
    ///
    /// `$XDG_CONFIG_HOME/climatter` when set, otherwise
    /// `~/.config/climatter` on every platform.
    pub fn config_dir() -> PathBuf {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
            });
        base.join("climatter")
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }
}

/// Parse a `YYYY-MM-DD` reference date
pub fn parse_reference_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        input: input.to_string(),
    })
}
