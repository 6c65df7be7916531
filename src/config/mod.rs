//! Configuration file support for rgba-mixer.
//!
//! Settings are read from `~/.config/rgba-mixer/config.toml` (honouring
//! `XDG_CONFIG_HOME`). They cover window geometry, the UI theme, the color the
//! mixer starts with, and keyboard shortcuts for the menu actions.
//!
//! If no config file exists, defaults are used.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::ThemeChoice;
pub use keybindings::{Action, KeyBinding, KeybindingError, KeybindingsConfig};
pub use types::{MAX_WINDOW_EDGE, MIN_WINDOW_EDGE, StartupConfig, UiConfig, WindowConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "rgba-mixer";

/// Root configuration structure, deserialized from the TOML file.
///
/// # Example TOML
/// ```toml
/// [window]
/// width = 420.0
/// height = 520.0
///
/// [ui]
/// theme = "light"
///
/// [startup]
/// color = [255, 255, 255, 128]
/// preset = "cyan"
///
/// [keybindings]
/// set_black = ["K", "0"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Window geometry
    #[serde(default)]
    pub window: WindowConfig,

    /// Theme and panel preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Color shown when the mixer opens
    #[serde(default)]
    pub startup: StartupConfig,

    /// Keyboard shortcuts for menu actions
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps values to acceptable ranges, logging a warning for
    /// each adjustment.
    ///
    /// Window edges are clamped to 240 - 4096; non-finite sizes fall back to
    /// the defaults.
    pub fn validate_and_clamp(&mut self) {
        let defaults = WindowConfig::default();
        self.window.width = clamp_edge("width", self.window.width, defaults.width);
        self.window.height = clamp_edge("height", self.window.height, defaults.height);

        if let Err(err) = self.keybindings.build_action_map() {
            warn!("Invalid keybindings ({err}), falling back to defaults");
            self.keybindings = KeybindingsConfig::default();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join(APP_DIR);

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file
    /// does not exist. Loaded values are validated and clamped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or is not valid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the config to TOML and writes it to `config_path`, creating
    /// the parent directory if needed.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes the current configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Writes the documented example config to the default path.
    ///
    /// # Errors
    /// Fails if a config file already exists there or the file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        Self::create_default_file_at(&config_path)?;
        Ok(config_path)
    }

    /// Writes the documented example config to `config_path`.
    pub fn create_default_file_at(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(config_path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Documented example configuration shipped with the binary.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

fn clamp_edge(name: &str, value: f32, fallback: f32) -> f32 {
    if !value.is_finite() {
        warn!("Invalid window {name} {value}, using {fallback}");
        return fallback;
    }
    if !(MIN_WINDOW_EDGE..=MAX_WINDOW_EDGE).contains(&value) {
        warn!(
            "Invalid window {name} {value:.0}, clamping to {MIN_WINDOW_EDGE:.0}-{MAX_WINDOW_EDGE:.0} range"
        );
        return value.clamp(MIN_WINDOW_EDGE, MAX_WINDOW_EDGE);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Preset, Rgba};
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config.startup.rgba(), Rgba::new(255, 255, 255, 255));
        assert_eq!(config.startup.preset, None);
        assert_eq!(config.ui.theme, ThemeChoice::Dark);
    }

    #[test]
    fn example_config_parses_and_matches_defaults() {
        let config: Config = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.startup.color, [255, 255, 255, 255]);
        assert_eq!(config.window.width, WindowConfig::default().width);
        assert!(config.keybindings.build_action_map().is_ok());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[startup]\ncolor = [10, 20, 30, 40]\npreset = \"magenta\"\n\n[ui]\ntheme = \"light\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.startup.rgba(), Rgba::new(10, 20, 30, 40));
        assert_eq!(config.startup.preset, Some(Preset::Magenta));
        assert_eq!(config.ui.theme, ThemeChoice::Light);
        assert!(config.window.resizable);
    }

    #[test]
    fn out_of_range_window_is_clamped() {
        let mut config = Config::default();
        config.window.width = 10.0;
        config.window.height = f32::NAN;
        config.validate_and_clamp();
        assert_eq!(config.window.width, MIN_WINDOW_EDGE);
        assert_eq!(config.window.height, WindowConfig::default().height);
    }

    #[test]
    fn duplicate_keybindings_fall_back_to_defaults() {
        let mut config = Config::default();
        config.keybindings.set_red = vec!["Q".into()];
        config.keybindings.set_blue = vec!["Q".into()];
        config.validate_and_clamp();
        assert_eq!(config.keybindings.set_red, vec!["R".to_string()]);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[startup\ncolor = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse config"));
    }

    #[test]
    fn channel_values_above_255_are_rejected_by_parser() {
        let parsed: Result<Config, _> = toml::from_str("[startup]\ncolor = [256, 0, 0, 255]\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.startup.preset = Some(Preset::Yellow);
        config.window.width = 800.0;

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.startup.preset, Some(Preset::Yellow));
        assert_eq!(loaded.window.width, 800.0);
    }

    #[test]
    fn create_default_file_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rgba-mixer").join("config.toml");
        Config::create_default_file_at(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), EXAMPLE_CONFIG);

        let err = Config::create_default_file_at(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn schema_lists_top_level_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["window", "ui", "startup", "keybindings"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
