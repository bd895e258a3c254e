use crate::math;
use crate::widgets::{Button, Checkbox, Dropdown, TextField};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb8(0, 0, 0);
    pub const DARK_GRAY: Color = Color::from_rgb8(105, 105, 105);
    pub const GRAY: Color = Color::from_rgb8(128, 128, 128);
    pub const SILVER: Color = Color::from_rgb8(200, 200, 200);
    pub const LIGHT_GRAY: Color = Color::from_rgb8(211, 211, 211);
    pub const WHITE_SMOKE: Color = Color::from_rgb8(245, 245, 245);
    pub const WHITE: Color = Color::from_rgb8(255, 255, 255);
    pub const RED: Color = Color::from_rgb8(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb8(0, 255, 0);

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::from_rgba8(r, g, b, 255)
    }

    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Per-channel linear blend, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| (from as f32 + (to as f32 - from as f32) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Scales alpha by `factor`.
    pub fn fade(self, factor: f32) -> Color {
        let a = (self.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        Color { a, ..self }
    }
}

impl From<Color> for tiny_skia::Color {
    fn from(value: Color) -> Self {
        // when writing to a `softbuffer::Buffer` we need to swap b and r
        tiny_skia::Color::from_rgba8(value.b, value.g, value.r, value.a)
    }
}


/// Shared colors and font size applied by the themed constructors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub border: Color,
    pub text: Color,
    pub hover: Color,
    pub pressed: Color,
    pub check: Color,
    pub font_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::WHITE,
            border: Color::BLACK,
            text: Color::BLACK,
            hover: Color::LIGHT_GRAY,
            pressed: Color::DARK_GRAY,
            check: Color::GREEN,
            font_size: 20.0,
        }
    }
}

impl Theme {
    pub fn button(&self, bounds: math::Rect, label: impl Into<String>) -> Button {
        let mut button = Button::new(bounds, label);
        button.set_colors(self.background, self.hover, self.pressed, self.border, self.text);
        button.set_font_size(self.font_size);
        button
    }

    pub fn checkbox(&self, top_left: math::Point, size: f32, label: impl Into<String>) -> Checkbox {
        let mut checkbox = Checkbox::new(top_left, size, label);
        checkbox.set_colors(self.background, self.check, self.border, self.hover, self.text);
        checkbox.set_font_size(self.font_size);
        checkbox
    }

    pub fn dropdown(&self, bounds: math::Rect, items: Vec<String>) -> Dropdown {
        let mut dropdown = Dropdown::new(bounds, items);
        dropdown.set_colors(self.background, self.border, self.text, self.hover);
        dropdown.set_font_size(self.font_size);
        dropdown
    }

    pub fn text_field(&self, bounds: math::Rect, max_length: usize) -> TextField {
        let mut text_field = TextField::new(bounds, max_length);
        text_field.set_colors(self.background, self.border, self.text);
        text_field.set_font_size(self.font_size);
        text_field
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_endpoints() {
        assert_eq!(Color::WHITE.lerp(Color::BLACK, 0.0), Color::WHITE);
        assert_eq!(Color::WHITE.lerp(Color::BLACK, 1.0), Color::BLACK);
        assert_eq!(Color::from_rgb8(0, 100, 200).lerp(Color::from_rgb8(100, 0, 0), 0.5), Color::from_rgb8(50, 50, 100));
    }

    #[test]
    fn lerp_does_not_wrap_when_darkening() {
        let blended = Color::LIGHT_GRAY.lerp(Color::DARK_GRAY, 0.25);
        assert!(blended.r < Color::LIGHT_GRAY.r && blended.r > Color::DARK_GRAY.r);
    }

    #[test]
    fn fade_scales_alpha_only() {
        let faded = Color::RED.fade(0.5);
        assert_eq!((faded.r, faded.g, faded.b), (255, 0, 0));
        assert_eq!(faded.a, 128);
    }

    #[test]
    fn themed_widgets_pick_up_font_size() {
        let theme = Theme { font_size: 14.0, ..Theme::default() };
        let field = theme.text_field(math::Rect::from_xywh(0.0, 0.0, 100.0, 30.0), 8);
        assert_eq!(field.font_size(), 14.0);
    }
}
