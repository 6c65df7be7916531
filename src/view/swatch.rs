//! Swatch presentation: background, readable text color and RGBA label.

use crate::model::{BLACK, Rgba, WHITE};

/// Channel sum above which the swatch switches to black text.
///
/// Half of the maximum `255 * 3`; an approximate luminance split rather than
/// a proper contrast ratio.
pub const CONTRAST_THRESHOLD: u16 = 383;

/// Picks black text for bright backgrounds and white text otherwise.
///
/// Alpha is ignored. A sum of exactly 383 yields white.
pub fn contrast_text_color(color: Rgba) -> Rgba {
    if color.rgb_sum() > CONTRAST_THRESHOLD {
        BLACK
    } else {
        WHITE
    }
}

/// Formats the readout shown on the swatch, e.g. `RGBA(10, 20, 30, 40)`.
pub fn label_text(color: Rgba) -> String {
    format!("RGBA({}, {}, {}, {})", color.r, color.g, color.b, color.a)
}

/// Everything the swatch area displays.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    background: Rgba,
    text_color: Rgba,
    label: String,
}

impl Swatch {
    pub fn new(color: Rgba) -> Self {
        Self {
            background: color,
            text_color: contrast_text_color(color),
            label: label_text(color),
        }
    }

    /// Replaces all three displayed fields from `color`.
    pub fn update(&mut self, color: Rgba) {
        *self = Self::new(color);
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn text_color(&self) -> Rgba {
        self.text_color
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
