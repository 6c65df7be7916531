//! RGBA color value, channel identifiers and preset colors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Upper bound of the red, green and blue channels.
pub const MAX_RGB: u8 = 255;

/// Upper bound of the alpha channel.
pub const MAX_ALPHA: u8 = 255;

/// Represents an RGBA color with 8-bit integer components.
///
/// # Examples
///
/// ```
/// use rgba_mixer::model::Rgba;
/// let teal = Rgba::new(0, 128, 128, 255);
/// assert_eq!(teal.rgb_sum(), 256);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red component (0 = no red, 255 = full red)
    pub r: u8,
    /// Green component (0 = no green, 255 = full green)
    pub g: u8,
    /// Blue component (0 = no blue, 255 = full blue)
    pub b: u8,
    /// Alpha/transparency (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Rgba {
    /// Creates a new color from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from a `[r, g, b, a]` array (the config file layout).
    pub const fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the value of a single channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Alpha => self.a,
        }
    }

    pub(crate) fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
            Channel::Alpha => self.a = value,
        }
    }

    /// Sum of the three color channels, ignoring alpha.
    pub fn rgb_sum(&self) -> u16 {
        u16::from(self.r) + u16::from(self.g) + u16::from(self.b)
    }
}

/// Opaque white (R=255, G=255, B=255, A=255)
pub const WHITE: Rgba = Rgba::new(MAX_RGB, MAX_RGB, MAX_RGB, MAX_ALPHA);

/// Opaque black (R=0, G=0, B=0, A=255)
pub const BLACK: Rgba = Rgba::new(0, 0, 0, MAX_ALPHA);

/// One scalar component of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
            Channel::Alpha => "Alpha",
        }
    }

    /// Largest value this channel accepts.
    pub fn max(&self) -> u8 {
        match self {
            Channel::Alpha => MAX_ALPHA,
            _ => MAX_RGB,
        }
    }

    /// Clamps an arbitrary integer into this channel's domain.
    ///
    /// Returns the clamped value and whether clamping was necessary.
    pub fn clamp(&self, value: i32) -> (u8, bool) {
        let max = i32::from(self.max());
        if (0..=max).contains(&value) {
            (value as u8, false)
        } else {
            (value.clamp(0, max) as u8, true)
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Named fixed combination of red, green and blue values.
///
/// Applying a preset never touches the alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Black,
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    White,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::Black,
        Preset::Red,
        Preset::Green,
        Preset::Blue,
        Preset::Cyan,
        Preset::Magenta,
        Preset::Yellow,
        Preset::White,
    ];

    /// The `[red, green, blue]` values this preset assigns.
    pub fn rgb(&self) -> [u8; 3] {
        const MAX: u8 = MAX_RGB;
        match self {
            Preset::Black => [0, 0, 0],
            Preset::Red => [MAX, 0, 0],
            Preset::Green => [0, MAX, 0],
            Preset::Blue => [0, 0, MAX],
            Preset::Cyan => [0, MAX, MAX],
            Preset::Magenta => [MAX, 0, MAX],
            Preset::Yellow => [MAX, MAX, 0],
            Preset::White => [MAX, MAX, MAX],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Preset::Black => "Black",
            Preset::Red => "Red",
            Preset::Green => "Green",
            Preset::Blue => "Blue",
            Preset::Cyan => "Cyan",
            Preset::Magenta => "Magenta",
            Preset::Yellow => "Yellow",
            Preset::White => "White",
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name any preset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preset '{0}' (expected black, red, green, blue, cyan, magenta, yellow or white)")]
pub struct PresetParseError(pub String);

impl FromStr for Preset {
    type Err = PresetParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "black" => Ok(Preset::Black),
            "red" => Ok(Preset::Red),
            "green" => Ok(Preset::Green),
            "blue" => Ok(Preset::Blue),
            "cyan" => Ok(Preset::Cyan),
            "magenta" => Ok(Preset::Magenta),
            "yellow" => Ok(Preset::Yellow),
            "white" => Ok(Preset::White),
            _ => Err(PresetParseError(value.to_string())),
        }
    }
}
