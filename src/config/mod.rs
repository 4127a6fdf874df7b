//! Configuration module for the binary trie crate.
//!
//! Settings can be loaded from files (TOML, YAML, JSON) and overridden with
//! environment variables of the form `PREFIX__SECTION__KEY`. All values are
//! validated before use.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use config::{Config, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::data_structures::bit_codec::{BitCodec, BitCodecConfig};
use crate::data_structures::patricia_trie::{PatriciaTrie, PatriciaTrieConfig};
use crate::error::config::ConfigError;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
const DEFAULT_CONFIG_PATH: &str = "config/binary_trie.toml";

/// Default environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "BINARY_TRIE";

/// Initialize the global configuration from the default location.
///
/// Reads `config/binary_trie.toml` when it exists, then applies
/// `BINARY_TRIE__*` environment overrides. A missing file is not an error;
/// the defaults are used instead.
///
/// # Returns
///
/// * `Ok(())` if the configuration was successfully initialized
/// * `Err(ConfigError)` if the file or an override is invalid
pub fn init_default_config() -> ConfigResult<()> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    if !path.exists() {
        tracing::debug!("No configuration file at {}, using defaults", DEFAULT_CONFIG_PATH);
    }

    let loader = ConfigLoader::new(path.exists().then_some(path), ENV_PREFIX);
    init_global_config(loader.load()?);

    Ok(())
}

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BinaryTrieConfig {
    /// Trie key rules
    pub trie: PatriciaTrieConfig,

    /// Codec limits
    pub codec: BitCodecConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl BinaryTrieConfig {
    /// An empty trie using the `trie` section.
    pub fn build_trie<T>(&self) -> PatriciaTrie<T> {
        PatriciaTrie::with_config(self.trie.clone())
    }

    /// A codec using the `codec` section.
    pub fn build_codec(&self) -> BitCodec {
        BitCodec::with_config(self.codec.clone())
    }
}

impl Validate for BinaryTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()?;
        self.codec.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,

    /// Log file path (None for stderr)
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: false,
            file: None,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader layering defaults, a file, and the environment.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(BinaryTrieConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<BinaryTrieConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&BinaryTrieConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            config::ConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let loaded: BinaryTrieConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        loaded.validate()?;
        tracing::debug!(path = ?self.config_path, "Loaded configuration");

        Ok(loaded)
    }
}

/// Writes `config` to `path` as TOML, creating parent directories.
pub fn write_config<P: AsRef<Path>>(path: P, config: &BinaryTrieConfig) -> ConfigResult<()> {
    let path = path.as_ref();
    let write_error = |message: String| ConfigError::WriteError {
        path: path.to_path_buf(),
        message,
    };

    let rendered = toml::to_string_pretty(config).map_err(|e| write_error(e.to_string()))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
    }
    fs::write(path, rendered).map_err(|e| write_error(e.to_string()))
}

/// Writes the default configuration to `path` as TOML.
pub fn write_default_config<P: AsRef<Path>>(path: P) -> ConfigResult<()> {
    write_config(path, &BinaryTrieConfig::default())
}

/// Global configuration accessor.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    config: Arc<BinaryTrieConfig>,
}

impl GlobalConfig {
    /// Creates a new global configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration to use
    pub fn new(config: BinaryTrieConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn get(&self) -> &BinaryTrieConfig {
        &self.config
    }
}

/// Process-wide configuration, set once.
static GLOBAL_CONFIG: OnceCell<GlobalConfig> = OnceCell::new();

/// Initialize the global configuration.
///
/// Later calls are ignored with a warning.
///
/// # Arguments
///
/// * `config` - The configuration to set as global
pub fn init_global_config(config: BinaryTrieConfig) {
    if GLOBAL_CONFIG.set(GlobalConfig::new(config)).is_err() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// The global configuration, if it has been initialized.
pub fn get_global_config() -> Option<GlobalConfig> {
    GLOBAL_CONFIG.get().cloned()
}
