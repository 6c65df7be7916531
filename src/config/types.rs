//! Configuration type definitions.

use super::enums::ThemeChoice;
use crate::model::{Preset, Rgba};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest accepted window edge, in logical pixels.
pub const MIN_WINDOW_EDGE: f32 = 240.0;

/// Largest accepted window edge, in logical pixels.
pub const MAX_WINDOW_EDGE: f32 = 4096.0;

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WindowConfig {
    /// Window width in logical pixels (valid range: 240 - 4096)
    #[serde(default = "default_width")]
    pub width: f32,

    /// Window height in logical pixels (valid range: 240 - 4096)
    #[serde(default = "default_height")]
    pub height: f32,

    /// Allow the window to be resized
    #[serde(default = "default_resizable")]
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            resizable: default_resizable(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Window theme (dark or light)
    #[serde(default)]
    pub theme: ThemeChoice,

    /// Open the About panel when the mixer starts
    #[serde(default)]
    pub show_about_on_start: bool,
}

/// Color the model holds when the mixer opens.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StartupConfig {
    /// Initial color as `[red, green, blue, alpha]`, each 0-255
    #[serde(default = "default_startup_color")]
    pub color: [u8; 4],

    /// Preset applied on top of `color` (alpha is kept)
    #[serde(default)]
    pub preset: Option<Preset>,
}

impl StartupConfig {
    pub fn rgba(&self) -> Rgba {
        Rgba::from_array(self.color)
    }
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            color: default_startup_color(),
            preset: None,
        }
    }
}

fn default_width() -> f32 {
    420.0
}

fn default_height() -> f32 {
    520.0
}

fn default_resizable() -> bool {
    true
}

fn default_startup_color() -> [u8; 4] {
    [255, 255, 255, 255]
}
