use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::catalog::CatalogItem,
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Theme and layout identifiers a session starts with
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct InitialConfig {
    #[serde(default = "InitialConfig::default_theme")]
    pub theme: String,
    #[serde(default = "InitialConfig::default_layout")]
    pub layout: String,
}

impl InitialConfig {
    fn default_theme() -> String {
        "blue".to_string()
    }

    fn default_layout() -> String {
        "standard".to_string()
    }
}

impl Default for InitialConfig {
    fn default() -> Self {
        Self {
            theme: Self::default_theme(),
            layout: Self::default_layout(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub initial: InitialConfig,
    /// Replaces the built-in catalog when present
    #[serde(default)]
    pub catalog: Option<Vec<CatalogItem>>,
}

impl Config {
    /// Load user config files (all optional) and merge the embedded defaults into them
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = utils::get_config_dir();

        let mut builder = config::Config::builder();

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.with_defaults()
    }

    /// Fill every binding and style the user did not set from the embedded defaults
    pub fn with_defaults(mut self) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;

        for (keyseq, action) in default_config.keybindings.iter() {
            self.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            self.styles.entry(style_key.clone()).or_insert(*style);
        }

        Ok(self)
    }

    /// The configuration shipped inside the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }
}
