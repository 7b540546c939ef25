use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

const APP_DIR: &str = "mote";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("read config file {path} failed")]
	Read {
		path:   PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("parse config file {path} failed")]
	Parse {
		path:   PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
	pub log_level: String,
	pub picker:    PickerConfig,
}

impl Default for Config {
	fn default() -> Self { Self { log_level: "info".to_string(), picker: PickerConfig::default() } }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
	pub root:        Option<PathBuf>,
	pub max_items:   usize,
	pub max_depth:   usize,
	pub show_hidden: bool,
}

impl Default for PickerConfig {
	fn default() -> Self { Self { root: None, max_items: 512, max_depth: 4, show_hidden: false } }
}

impl Config {
	/// Reads the user config file. A missing file yields the defaults.
	pub fn load() -> Result<Self, ConfigError> {
		let Some(path) = config_file() else {
			debug!("no config directory available, using defaults");
			return Ok(Self::default());
		};
		Self::load_from(&path)
	}

	pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
		if !path.exists() {
			debug!("config file not found at {}, using defaults", path.display());
			return Ok(Self::default());
		}

		let content = std::fs::read_to_string(path)
			.map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
		let config = Self::parse(&content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
		info!("loaded config from {}", path.display());
		Ok(config)
	}

	pub fn parse(content: &str) -> Result<Self, toml::de::Error> { toml::from_str(content) }
}

pub fn config_file() -> Option<PathBuf> { config_dir().map(|dir| dir.join(CONFIG_FILE)) }

fn config_dir() -> Option<PathBuf> {
	#[cfg(target_os = "windows")]
	{
		std::env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
	}

	#[cfg(not(target_os = "windows"))]
	{
		std::env::var_os("XDG_CONFIG_HOME")
			.map(PathBuf::from)
			.or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
			.map(|config| config.join(APP_DIR))
	}
}
