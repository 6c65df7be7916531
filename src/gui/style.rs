use iced::border::Radius;
use iced::theme::Theme;
use iced::widget::container::{self, Appearance};
use iced::{Background, Border};

use crate::model::Rgba;

pub fn to_iced_color(color: Rgba) -> iced::Color {
    iced::Color::from_rgba(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
        f32::from(color.a) / 255.0,
    )
}

/// Fills the swatch area with the mixed color.
#[derive(Clone, Copy)]
pub struct SwatchStyle {
    pub background: iced::Color,
    pub text: iced::Color,
}

impl container::StyleSheet for SwatchStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> Appearance {
        Appearance {
            background: Some(Background::Color(self.background)),
            text_color: Some(self.text),
            border: Border {
                color: iced::Color::from_rgb(0.4, 0.4, 0.4),
                width: 1.0,
                radius: Radius::from(8.0),
            },
            shadow: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_scales_to_unit_range() {
        let color = to_iced_color(Rgba::new(255, 0, 51, 255));
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 0.2).abs() < 1e-6);
        assert_eq!(color.a, 1.0);
    }
}
