use crate::animation::Tween;
use crate::input::FrameInput;
use crate::math::{self, Point};
use crate::render::Canvas;
use crate::style::Color;
use crate::widgets::Widget;

const ANIMATION_RATE: f32 = 4.0;
const LABEL_GAP: f32 = 10.0;


/// A square toggle with a label to its right.
///
/// Every change of the checked value restarts the check mark animation from
/// zero, whether it came from a click or from [`Checkbox::set_checked`].
#[derive(Clone, Debug)]
pub struct Checkbox {
    bounds: math::Rect,
    label: String,

    background_color: Color,
    check_color: Color,
    border_color: Color,
    hover_color: Color,
    label_color: Color,
    font_size: f32,

    checked: bool,
    is_hovered: bool,
    is_pressed: bool,
    animation: Tween,
}

impl Checkbox {
    pub fn new(top_left: Point, size: f32, label: impl Into<String>) -> Checkbox {
        Checkbox {
            bounds: math::Rect::from_xywh(top_left.x, top_left.y, size, size),
            label: label.into(),

            background_color: Color::WHITE,
            check_color: Color::GREEN,
            border_color: Color::BLACK,
            hover_color: Color::WHITE_SMOKE,
            label_color: Color::BLACK,
            font_size: 20.0,

            checked: false,
            is_hovered: false,
            is_pressed: false,
            animation: Tween::new(ANIMATION_RATE),
        }
    }

    pub fn set_colors(&mut self, background: Color, check: Color, border: Color, hover: Color, label: Color) {
        self.background_color = background;
        self.check_color = check;
        self.border_color = border;
        self.hover_color = hover;
        self.label_color = label;
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    pub fn set_bounds(&mut self, bounds: math::Rect) {
        self.bounds = bounds;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        if checked != self.checked {
            self.checked = checked;
            self.animation.set(0.0);
        }
    }

    pub fn toggle(&mut self) {
        self.set_checked(!self.checked);
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    /// Set from the press that toggled the box until the pointer is released.
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    pub fn animation_progress(&self) -> f32 {
        self.animation.value()
    }
}

impl Widget for Checkbox {
    fn bounds(&self) -> math::Rect {
        self.bounds
    }

    fn update(&mut self, input: &FrameInput) -> bool {
        let before = (self.checked, self.is_hovered, self.is_pressed);

        self.is_hovered = self.bounds.contains(input.pointer);

        if input.pointer_pressed && self.is_hovered {
            self.is_pressed = true;
            self.toggle();
            log::debug!("checkbox {:?} toggled to {}", self.label, self.checked);
        }

        let target = if self.checked { 1.0 } else { 0.0 };
        let animated = self.animation.advance(target, input.dt);

        if input.pointer_released {
            self.is_pressed = false;
        }

        animated || before != (self.checked, self.is_hovered, self.is_pressed)
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let background = if self.is_hovered { self.hover_color } else { self.background_color };
        canvas.fill_rect(self.bounds, background);

        let border_thickness = if self.is_pressed { 3.0 } else { 2.0 };
        canvas.stroke_rect(self.bounds, border_thickness, self.border_color);

        let progress = self.animation.value();
        if progress > 0.0 {
            let check_bounds = self.bounds.shrink_by(self.bounds.w * 0.2);
            let center = check_bounds.center();
            let size = check_bounds.w / 2.0 * progress;

            let start = Point::new(center.x - size, center.y);
            let corner = Point::new(center.x, center.y + size);
            let end = Point::new(center.x + size, center.y - size);
            let color = self.check_color.fade(progress);

            canvas.line(start, corner, 2.0, color);
            canvas.line(corner, end, 2.0, color);
        }

        let label_origin = Point::new(
            self.bounds.right() + LABEL_GAP,
            self.bounds.y + (self.bounds.h - self.font_size) / 2.0
        );
        canvas.text(&self.label, label_origin, self.font_size, self.label_color);
    }
}
