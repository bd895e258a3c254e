use kurbo::Shape;
use tiny_skia::PixmapMut;

use crate::math::{Point, Rect};
use crate::style::Color;
use crate::text;

/// The drawing operations widgets issue. Implementations decide what a
/// primitive turns into; widgets never read anything back except text widths.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);
    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color);
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, thickness: f32, color: Color);
    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Color);
    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color);
    /// `origin` is the top-left corner of the line box.
    fn text(&mut self, text: &str, origin: Point, font_size: f32, color: Color);
    fn measure_text(&mut self, text: &str, font_size: f32) -> f32;
}


#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    FillRoundedRect { rect: Rect, radius: f32, color: Color },
    StrokeRect { rect: Rect, thickness: f32, color: Color },
    StrokeRoundedRect { rect: Rect, radius: f32, thickness: f32, color: Color },
    Line { from: Point, to: Point, thickness: f32, color: Color },
    Triangle { a: Point, b: Point, c: Point, color: Color },
    Text { text: String, origin: Point, font_size: f32, color: Color },
}

/// A canvas that only records. Text is measured with a fixed advance of
/// `advance_ratio * font_size` per character so results do not depend on
/// installed fonts.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    advance_ratio: f32,
}

impl Default for DrawList {
    fn default() -> Self {
        DrawList::new()
    }
}

impl DrawList {
    pub fn new() -> DrawList {
        DrawList { commands: Vec::new(), advance_ratio: 0.5 }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn texts(&self) -> impl Iterator<Item=&str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None
        })
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillRoundedRect { rect, radius, color });
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeRect { rect, thickness, color });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, thickness: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeRoundedRect { rect, radius, thickness, color });
    }

    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, thickness, color });
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) {
        self.commands.push(DrawCommand::Triangle { a, b, c, color });
    }

    fn text(&mut self, text: &str, origin: Point, font_size: f32, color: Color) {
        self.commands.push(DrawCommand::Text { text: text.to_owned(), origin, font_size, color });
    }

    fn measure_text(&mut self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.advance_ratio
    }
}


pub struct RenderContext<'a> {
    pub canvas: PixmapMut<'a>,
    pub transform: tiny_skia::Transform,
}

impl<'a> RenderContext<'a> {
    pub fn new(canvas: PixmapMut<'a>, scale_factor: f32) -> RenderContext<'a> {
        RenderContext {
            canvas,
            transform: tiny_skia::Transform::from_scale(scale_factor, scale_factor)
        }
    }

    fn paint(color: Color) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(color.into());
        paint.anti_alias = true;
        paint
    }

    fn fill_shape(&mut self, shape: impl Shape, color: Color) {
        if let Some(path) = to_tiny_skia_path(shape) {
            self.canvas.fill_path(&path, &Self::paint(color), tiny_skia::FillRule::Winding, self.transform, None);
        }
    }

    fn stroke_shape(&mut self, shape: impl Shape, thickness: f32, color: Color) {
        if let Some(path) = to_tiny_skia_path(shape) {
            let mut stroke = tiny_skia::Stroke::default();
            stroke.width = thickness;
            self.canvas.stroke_path(&path, &Self::paint(color), &stroke, self.transform, None);
        }
    }
}

impl Canvas for RenderContext<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(rect) = rect.to_tiny_skia() {
            self.canvas.fill_rect(rect, &Self::paint(color), self.transform, None);
        }
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.fill_shape(kurbo::RoundedRect::from_rect(rect.into(), radius as f64), color);
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        // keep the stroke inside the rectangle
        let inset = rect.shrink_by(thickness / 2.0);
        self.stroke_shape(kurbo::Rect::from(inset), thickness, color);
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, thickness: f32, color: Color) {
        let inset = rect.shrink_by(thickness / 2.0);
        self.stroke_shape(kurbo::RoundedRect::from_rect(inset.into(), radius as f64), thickness, color);
    }

    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        self.stroke_shape(kurbo::Line::new(from, to), thickness, color);
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) {
        let mut path = kurbo::BezPath::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.close_path();
        self.fill_shape(path, color);
    }

    fn text(&mut self, text: &str, origin: Point, font_size: f32, color: Color) {
        if !text.is_empty() {
            text::draw_text(self, text, origin, font_size, color);
        }
    }

    fn measure_text(&mut self, text: &str, font_size: f32) -> f32 {
        if text.is_empty() {
            0.0
        } else {
            text::measure_text(text, font_size)
        }
    }
}


/// `None` when the shape produces no drawable path.
pub fn to_tiny_skia_path<S: Shape>(shape: S) -> Option<tiny_skia::Path> {
    use kurbo::Point;

    let mut path_builder = tiny_skia::PathBuilder::new();
    for path_el in shape.path_elements(0.1) {
        match path_el {
            kurbo::PathEl::MoveTo(Point { x, y }) => {
                path_builder.move_to(x as f32, y as f32);
            }
            kurbo::PathEl::LineTo(Point { x, y }) => {
                path_builder.line_to(x as f32, y as f32);
            }
            kurbo::PathEl::QuadTo(Point { x: x1, y: y1 }, Point{ x, y }) => {
                path_builder.quad_to(x1 as f32, y1 as f32, x as f32, y as f32);
            }
            kurbo::PathEl::CurveTo(p1, p2, p) => {
                path_builder.cubic_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32, p.x as f32, p.y as f32);
            }
            kurbo::PathEl::ClosePath => {
                path_builder.close();
            }
        }
    }
    path_builder.finish()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_list_measures_with_fixed_advance() {
        let mut list = DrawList::new();
        assert_eq!(list.measure_text("abcd", 20.0), 40.0);
        assert_eq!(list.measure_text("héllo", 10.0), 25.0);
    }

    #[test]
    fn pixmap_fill_lands_in_canvas() {
        let mut pixmap = tiny_skia::Pixmap::new(20, 20).unwrap();
        {
            let mut context = RenderContext::new(pixmap.as_mut(), 1.0);
            context.fill_rect(Rect::from_xywh(5.0, 5.0, 10.0, 10.0), Color::GRAY);
        }

        let inside = pixmap.pixel(10, 10).unwrap();
        assert_eq!((inside.red(), inside.green(), inside.blue(), inside.alpha()), (128, 128, 128, 255));
        assert_eq!(pixmap.pixel(1, 1).unwrap().alpha(), 0);
    }

    #[test]
    fn degenerate_shapes_are_skipped() {
        let mut pixmap = tiny_skia::Pixmap::new(8, 8).unwrap();
        let mut context = RenderContext::new(pixmap.as_mut(), 1.0);
        context.fill_rect(Rect::from_xywh(2.0, 2.0, 0.0, 0.0), Color::BLACK);
        context.stroke_rect(Rect::from_xywh(2.0, 2.0, -4.0, 3.0), 2.0, Color::BLACK);
        assert_eq!(context.measure_text("", 12.0), 0.0);
    }
}
