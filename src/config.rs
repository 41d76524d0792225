//! Configuration management for the venues CLI
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (venues.toml)
//! - Environment variables (VENUES__*)
//!
//! ## Example config file (venues.toml):
//! ```toml
//! [display]
//! icons = true
//! show_fields = true
//!
//! [export]
//! output_format = "pretty"
//! include_checksum = true
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenuesConfig {
    /// Terminal output settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Catalog export settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// Terminal output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Prefix types with their icon
    #[serde(default = "default_true")]
    pub icons: bool,

    /// List field names under each type in `types list`
    #[serde(default = "default_true")]
    pub show_fields: bool,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Include a SHA256 checksum of the type list
    #[serde(default = "default_true")]
    pub include_checksum: bool,
}

/// Output format for JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            icons: true,
            show_fields: true,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Pretty,
            include_checksum: true,
        }
    }
}

impl VenuesConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, adding a required file on top of the defaults
    pub fn load_from(config_path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_locations = ["venues.toml", ".venues.toml", "config/venues.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("dev", "minions", "venues") {
            let xdg_config = config_dir.config_dir().join("venues.toml");
            if xdg_config.exists() {
                debug!(path = %xdg_config.display(), "using user config");
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("VENUES")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}
