use crate::input::{FrameInput, Keys};
use crate::math::{self, Point};
use crate::render::Canvas;
use crate::style::Color;
use crate::widgets::Widget;

const BLINK_PERIOD: f32 = 1.0;
const CARET_VISIBLE_FOR: f32 = 0.5;
const BACKSPACE_REPEAT_DELAY: f32 = 0.5;
const BACKSPACE_REPEAT_SPENT: f32 = 1.0;
const TEXT_INSET: f32 = 5.0;


/// A single-line text input holding at most `max_length` characters.
///
/// The cursor is a character index into the text, so
/// `0 <= cursor <= text.len() <= max_length` always holds.
#[derive(Clone, Debug)]
pub struct TextField {
    bounds: math::Rect,
    text: Vec<char>,
    max_length: usize,

    background_color: Color,
    border_color: Color,
    active_border_color: Color,
    text_color: Color,
    font_size: f32,

    is_active: bool,
    cursor: usize,
    cursor_blink_timer: f32,
    backspace_hold_timer: f32,
}

impl TextField {
    pub fn new(bounds: math::Rect, max_length: usize) -> TextField {
        TextField {
            bounds,
            text: Vec::new(),
            max_length,

            background_color: Color::WHITE,
            border_color: Color::BLACK,
            active_border_color: Color::RED,
            text_color: Color::BLACK,
            font_size: 20.0,

            is_active: false,
            cursor: 0,
            cursor_blink_timer: 0.0,
            backspace_hold_timer: 0.0,
        }
    }

    pub fn set_colors(&mut self, background: Color, border: Color, text: Color) {
        self.background_color = background;
        self.border_color = border;
        self.text_color = text;
    }

    pub fn set_active_border_color(&mut self, color: Color) {
        self.active_border_color = color;
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_bounds(&mut self, bounds: math::Rect) {
        self.bounds = bounds;
    }

    pub fn value(&self) -> String {
        self.text.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Replaces the text, keeping at most `max_length` characters, and puts
    /// the cursor at the end.
    pub fn set_value(&mut self, value: &str) {
        self.text = value.chars().take(self.max_length).collect();
        self.cursor = self.text.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.cursor = self.text.len();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn caret_visible(&self) -> bool {
        self.is_active && self.cursor_blink_timer < CARET_VISIBLE_FOR
    }

    fn insert(&mut self, c: char) -> bool {
        if self.text.len() >= self.max_length {
            return false;
        }
        self.text.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.text.remove(self.cursor);
        true
    }

    fn move_cursor_to(&mut self, position: usize) -> bool {
        let position = position.min(self.text.len());
        let moved = position != self.cursor;
        self.cursor = position;
        moved
    }

    /// Held backspace deletes once more after the delay, then the timer stays
    /// pinned until the key is released.
    fn repeat_backspace(&mut self, input: &FrameInput) -> bool {
        if !input.key_down(Keys::BACKSPACE) {
            self.backspace_hold_timer = 0.0;
            return false;
        }
        if self.backspace_hold_timer >= BACKSPACE_REPEAT_SPENT {
            return false;
        }

        self.backspace_hold_timer += input.dt;
        if self.backspace_hold_timer > BACKSPACE_REPEAT_DELAY {
            self.backspace_hold_timer = BACKSPACE_REPEAT_SPENT;
            return self.delete_backward();
        }
        false
    }

    fn edit(&mut self, input: &FrameInput) -> bool {
        let mut edited = false;

        for &c in &input.chars {
            edited |= self.insert(c);
        }

        if input.key_pressed(Keys::BACKSPACE) {
            edited |= self.delete_backward();
        }

        if input.key_pressed(Keys::LEFT) {
            edited |= self.move_cursor_to(self.cursor.saturating_sub(1));
        }
        if input.key_pressed(Keys::RIGHT) {
            edited |= self.move_cursor_to(self.cursor + 1);
        }

        if input.key_pressed(Keys::HOME) {
            edited |= self.move_cursor_to(0);
        }
        if input.key_pressed(Keys::END) {
            edited |= self.move_cursor_to(self.text.len());
        }

        edited |= self.repeat_backspace(input);
        edited
    }
}

impl Widget for TextField {
    fn bounds(&self) -> math::Rect {
        self.bounds
    }

    fn update(&mut self, input: &FrameInput) -> bool {
        let before = (self.is_active, self.caret_visible());

        self.cursor_blink_timer += input.dt;
        if self.cursor_blink_timer >= BLINK_PERIOD {
            self.cursor_blink_timer = 0.0;
        }

        if input.pointer_pressed {
            self.is_active = self.bounds.contains(input.pointer);
            if self.is_active != before.0 {
                log::debug!("text field {}", if self.is_active { "activated" } else { "deactivated" });
            }
        }

        let edited = self.is_active && self.edit(input);

        edited || before != (self.is_active, self.caret_visible())
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.background_color);

        let border_color = if self.is_active { self.active_border_color } else { self.border_color };
        canvas.stroke_rect(self.bounds, 2.0, border_color);

        let text_origin = Point::new(
            self.bounds.x + TEXT_INSET,
            self.bounds.y + (self.bounds.h - self.font_size) / 2.0
        );
        canvas.text(&self.value(), text_origin, self.font_size, self.text_color);

        if self.caret_visible() {
            let before_cursor: String = self.text[..self.cursor].iter().collect();
            let x = text_origin.x + canvas.measure_text(&before_cursor, self.font_size);
            canvas.line(
                Point::new(x, text_origin.y),
                Point::new(x, text_origin.y + self.font_size),
                1.0,
                self.text_color
            );
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, DrawList};

    fn field(max_length: usize) -> TextField {
        TextField::new(math::Rect::from_xywh(0.0, 0.0, 200.0, 30.0), max_length)
    }

    fn active_field(max_length: usize) -> TextField {
        let mut field = field(max_length);
        field.activate();
        field
    }

    fn frame() -> FrameInput {
        FrameInput::new(0.016)
    }

    fn assert_invariant(field: &TextField) {
        assert!(field.cursor() <= field.len(), "cursor {} past len {}", field.cursor(), field.len());
        assert!(field.len() <= field.max_length(), "len {} past max {}", field.len(), field.max_length());
    }

    #[test]
    fn click_inside_activates_and_outside_deactivates() {
        let mut field = field(10);

        assert!(field.update(&frame().with_pointer(10.0, 10.0).with_press()));
        assert!(field.is_active());

        assert!(field.update(&frame().with_pointer(10.0, 100.0).with_press()));
        assert!(!field.is_active());
    }

    #[test]
    fn typing_requires_focus() {
        let mut field = field(10);
        field.update(&frame().with_chars("abc"));
        assert_eq!(field.value(), "");

        field.activate();
        field.update(&frame().with_chars("abc"));
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut field = active_field(10);
        field.set_value("hlo");
        field.update(&frame().with_key_press(Keys::LEFT));
        field.update(&frame().with_key_press(Keys::LEFT));
        field.update(&frame().with_chars("el"));

        assert_eq!(field.value(), "hello");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn insertion_stops_at_max_length() {
        let mut field = active_field(3);
        field.update(&frame().with_chars("abcdef"));
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 3);

        field.update(&frame().with_key_press(Keys::HOME));
        field.update(&frame().with_chars("z"));
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn backspace_deletes_before_cursor() {
        let mut field = active_field(10);
        field.set_value("abc");
        field.update(&frame().with_key_press(Keys::LEFT));
        field.update(&frame().with_key_press(Keys::BACKSPACE));

        assert_eq!(field.value(), "ac");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut field = active_field(10);
        field.set_value("abc");
        field.update(&frame().with_key_press(Keys::HOME));
        field.update(&frame().with_key_press(Keys::BACKSPACE));

        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut field = active_field(10);
        field.set_value("ab");

        field.update(&frame().with_key_press(Keys::RIGHT));
        assert_eq!(field.cursor(), 2);

        field.update(&frame().with_key_press(Keys::HOME));
        field.update(&frame().with_key_press(Keys::LEFT));
        assert_eq!(field.cursor(), 0);

        field.update(&frame().with_key_press(Keys::END));
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn set_value_truncates_and_moves_cursor_to_end() {
        let mut field = field(3);
        field.set_value("hello");
        assert_eq!(field.value(), "hel");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn multibyte_text_is_edited_per_character() {
        let mut field = active_field(4);
        field.set_value("héllo");
        assert_eq!(field.value(), "héll");

        field.update(&frame().with_key_press(Keys::HOME));
        field.update(&frame().with_key_press(Keys::RIGHT));
        field.update(&frame().with_key_press(Keys::RIGHT));
        field.update(&frame().with_key_press(Keys::BACKSPACE));
        assert_eq!(field.value(), "hll");
        field.update(&frame().with_chars("ü"));
        assert_eq!(field.value(), "hüll");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn activate_moves_cursor_to_end_and_deactivate_keeps_it() {
        let mut field = field(10);
        field.set_value("abc");
        field.activate();
        field.update(&frame().with_key_press(Keys::HOME));

        field.deactivate();
        assert!(!field.is_active());
        assert_eq!(field.cursor(), 0);

        field.activate();
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn held_backspace_repeats_once_per_hold() {
        let mut field = active_field(10);
        field.set_value("abcdef");

        field.update(&FrameInput::new(0.1).with_key_press(Keys::BACKSPACE));
        assert_eq!(field.value(), "abcde");

        for _ in 0..3 {
            field.update(&FrameInput::new(0.1).with_key_hold(Keys::BACKSPACE));
        }
        assert_eq!(field.value(), "abcde");

        // crosses 0.5s of hold
        field.update(&FrameInput::new(0.15).with_key_hold(Keys::BACKSPACE));
        assert_eq!(field.value(), "abcd");

        for _ in 0..20 {
            field.update(&FrameInput::new(0.1).with_key_hold(Keys::BACKSPACE));
        }
        assert_eq!(field.value(), "abcd");

        // releasing rearms the repeat
        field.update(&FrameInput::new(0.1).with_key_release(Keys::BACKSPACE));
        field.update(&FrameInput::new(0.1).with_key_press(Keys::BACKSPACE));
        assert_eq!(field.value(), "abc");
        field.update(&FrameInput::new(0.6).with_key_hold(Keys::BACKSPACE));
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn blink_timer_wraps_each_second() {
        let mut field = active_field(10);
        assert!(field.caret_visible());

        field.update(&FrameInput::new(0.6));
        assert!(!field.caret_visible());

        field.update(&FrameInput::new(0.4));
        assert!(field.caret_visible());
    }

    #[test]
    fn invariant_holds_through_mixed_editing() {
        let mut field = active_field(5);
        let frames = [
            frame().with_chars("abcdefg"),
            frame().with_key_press(Keys::LEFT),
            frame().with_key_press(Keys::BACKSPACE),
            frame().with_chars("xy"),
            frame().with_key_press(Keys::HOME),
            frame().with_key_press(Keys::BACKSPACE),
            frame().with_key_press(Keys::LEFT),
            frame().with_key_press(Keys::END),
            frame().with_key_press(Keys::RIGHT),
            frame().with_key_press(Keys::BACKSPACE | Keys::LEFT),
            frame().with_chars("q"),
        ];

        for input in &frames {
            field.update(input);
            assert_invariant(&field);
        }
        field.set_value("longer than five");
        assert_invariant(&field);
    }

    #[test]
    fn caret_drawn_after_text_before_cursor() {
        let mut field = active_field(10);
        field.set_value("abcd");
        field.update(&frame().with_key_press(Keys::LEFT));

        let mut list = DrawList::new();
        field.draw(&mut list);

        assert!(matches!(list.commands()[1], DrawCommand::StrokeRect { color, .. } if color == Color::RED));
        // three characters at 20px with a 0.5 advance
        let DrawCommand::Line { from, .. } = list.commands()[3] else { panic!("expected caret") };
        assert_eq!(from, Point::new(35.0, 5.0));
    }
}
