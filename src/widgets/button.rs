use crate::animation::Tween;
use crate::input::FrameInput;
use crate::math::{self, Point, Vector};
use crate::render::Canvas;
use crate::style::Color;
use crate::widgets::Widget;

const ANIMATION_RATE: f32 = 8.0;
const HOVER_PROGRESS: f32 = 0.5;
const PRESSED_PROGRESS: f32 = 1.0;


/// A push button. Hovering animates toward the hover color, holding the
/// pointer down animates further toward the pressed color.
#[derive(Clone, Debug)]
pub struct Button {
    bounds: math::Rect,
    label: String,

    background_color: Color,
    hover_color: Color,
    pressed_color: Color,
    border_color: Color,
    text_color: Color,
    font_size: f32,
    padding: f32,
    corner_radius: f32,

    enabled: bool,
    is_hovered: bool,
    is_pressed: bool,
    animation: Tween,
}

impl Button {
    pub fn new(bounds: math::Rect, label: impl Into<String>) -> Button {
        Button {
            bounds,
            label: label.into(),

            background_color: Color::LIGHT_GRAY,
            hover_color: Color::SILVER,
            pressed_color: Color::DARK_GRAY,
            border_color: Color::BLACK,
            text_color: Color::BLACK,
            font_size: 20.0,
            padding: 5.0,
            corner_radius: 5.0,

            enabled: true,
            is_hovered: false,
            is_pressed: false,
            animation: Tween::new(ANIMATION_RATE),
        }
    }

    pub fn set_colors(&mut self, background: Color, hover: Color, pressed: Color, border: Color, text: Color) {
        self.background_color = background;
        self.hover_color = hover;
        self.pressed_color = pressed;
        self.border_color = border;
        self.text_color = text;
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius;
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_bounds(&mut self, bounds: math::Rect) {
        self.bounds = bounds;
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    pub fn animation_progress(&self) -> f32 {
        self.animation.value()
    }

    /// True only on the frame the pointer is released over the enabled
    /// button. Call after `update` with the same frame.
    pub fn is_clicked(&self, input: &FrameInput) -> bool {
        self.enabled && self.is_hovered && input.pointer_released
    }

    fn current_color(&self) -> Color {
        if !self.enabled {
            return self.background_color.fade(0.5);
        }

        let progress = self.animation.value();
        if progress <= HOVER_PROGRESS {
            self.background_color.lerp(self.hover_color, progress * 2.0)
        } else {
            self.hover_color.lerp(self.pressed_color, (progress - HOVER_PROGRESS) * 2.0)
        }
    }
}

impl Widget for Button {
    fn bounds(&self) -> math::Rect {
        self.bounds
    }

    fn update(&mut self, input: &FrameInput) -> bool {
        let before = (self.is_hovered, self.is_pressed);

        if !self.enabled {
            self.is_hovered = false;
            self.is_pressed = false;
            return before != (false, false);
        }

        self.is_hovered = self.bounds.contains(input.pointer);
        self.is_pressed = self.is_hovered && input.pointer_down;

        let target = if self.is_pressed {
            PRESSED_PROGRESS
        } else if self.is_hovered {
            HOVER_PROGRESS
        } else {
            0.0
        };
        let animated = self.animation.advance(target, input.dt);

        animated || before != (self.is_hovered, self.is_pressed)
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rounded_rect(self.bounds, self.corner_radius, self.current_color());

        let border_thickness = if self.is_pressed { 3.0 } else { 2.0 };
        canvas.stroke_rounded_rect(self.bounds, self.corner_radius, border_thickness, self.border_color);

        // centered, but a label wider than the button starts at the padding
        let text_width = canvas.measure_text(&self.label, self.font_size);
        let mut origin = Point::new(
            (self.bounds.x + (self.bounds.w - text_width) / 2.0).max(self.bounds.x + self.padding),
            self.bounds.y + (self.bounds.h - self.font_size) / 2.0
        );
        if self.is_pressed {
            origin = origin + Vector::new(1.0, 1.0);
        }

        let text_color = if self.enabled { self.text_color } else { self.text_color.fade(0.5) };
        canvas.text(&self.label, origin, self.font_size, text_color);
    }
}
