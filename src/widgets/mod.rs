mod button;
mod checkbox;
mod dropdown;
mod text_field;

use crate::input::FrameInput;
use crate::math;
use crate::render::Canvas;

pub use button::Button;
pub use checkbox::Checkbox;
pub use dropdown::Dropdown;
pub use text_field::TextField;

/// A self-contained interactive control.
///
/// `update` is called once per frame with that frame's input and returns
/// whether anything observable changed. `draw` only reads state, so it may be
/// called any number of times between updates.
pub trait Widget {
    fn bounds(&self) -> math::Rect;
    fn update(&mut self, input: &FrameInput) -> bool;
    fn draw(&self, canvas: &mut dyn Canvas);
}

/// Updates every widget with the same frame; true if any of them changed.
pub fn update_all(widgets: &mut [&mut dyn Widget], input: &FrameInput) -> bool {
    widgets.iter_mut().fold(false, |changed, widget| widget.update(input) | changed)
}

pub fn draw_all(widgets: &[&dyn Widget], canvas: &mut dyn Canvas) {
    for widget in widgets {
        widget.draw(canvas);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point, Rect};
    use crate::render::DrawList;
    use pretty_assertions::assert_eq;

    #[test]
    fn update_all_reaches_every_widget() {
        let mut button = Button::new(Rect::from_xywh(0.0, 0.0, 100.0, 40.0), "Go");
        let mut checkbox = Checkbox::new(Point::new(0.0, 50.0), 20.0, "Check");

        let frame = FrameInput::new(0.016).with_pointer(10.0, 55.0).with_press();
        let changed = update_all(&mut [&mut button, &mut checkbox], &frame);

        assert!(changed);
        assert!(!button.is_hovered());
        assert!(checkbox.is_checked());
    }

    #[test]
    fn update_all_reports_quiet_frames() {
        let mut button = Button::new(Rect::from_xywh(0.0, 0.0, 100.0, 40.0), "Go");
        let mut field = TextField::new(Rect::from_xywh(0.0, 50.0, 100.0, 30.0), 10);

        let frame = FrameInput::new(0.016).with_pointer(500.0, 500.0);
        assert!(!update_all(&mut [&mut button, &mut field], &frame));
    }

    #[test]
    fn draw_is_idempotent() {
        let mut button = Button::new(Rect::from_xywh(0.0, 0.0, 100.0, 40.0), "Go");
        let mut dropdown = Dropdown::new(Rect::from_xywh(0.0, 50.0, 100.0, 30.0), vec!["A".into(), "B".into()]);
        let mut field = TextField::new(Rect::from_xywh(0.0, 200.0, 100.0, 30.0), 10);
        let checkbox = Checkbox::new(Point::new(120.0, 0.0), 20.0, "Check");

        button.update(&FrameInput::new(0.03).with_pointer(10.0, 10.0).with_hold());
        dropdown.open();
        field.set_value("abc");
        field.activate();

        let widgets: [&dyn Widget; 4] = [&button, &dropdown, &field, &checkbox];
        let mut first = DrawList::new();
        draw_all(&widgets, &mut first);
        let mut second = DrawList::new();
        draw_all(&widgets, &mut second);
        draw_all(&widgets, &mut DrawList::new());

        assert!(!first.commands().is_empty());
        assert_eq!(first, second);
    }
}
