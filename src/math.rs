use std::ops::Add;
use bytemuck::{Pod, Zeroable};


#[derive(Copy, Clone, PartialEq, Debug, Default, Zeroable, Pod)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32
}

impl Point {
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }
}

impl From<Point> for kurbo::Point {
    fn from(value: Point) -> Self {
        kurbo::Point::new(value.x as f64, value.y as f64)
    }
}


impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}


#[derive(Copy, Clone, PartialEq, Debug, Default, Zeroable, Pod)]
#[repr(C)]
pub struct Vector {
    pub x: f32,
    pub y: f32
}

impl Vector {
    pub fn new(x: f32, y: f32) -> Vector {
        Vector { x, y }
    }
}



/// An axis-aligned rectangle given by its top-left corner and its extent.
#[derive(Copy, Clone, PartialEq, Debug, Default, Zeroable, Pod)]
#[repr(C)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Half-open containment: the left and top edges belong to the rectangle,
    /// the right and bottom edges do not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left() && point.x < self.right()
            && point.y >= self.top() && point.y < self.bottom()
    }

    pub fn translate(&self, by: Vector) -> Rect {
        Rect::from_xywh(self.x + by.x, self.y + by.y, self.w, self.h)
    }

    pub fn shrink_by(&self, amount: f32) -> Rect {
        Rect::from_xywh(self.x + amount, self.y + amount, self.w - 2.0 * amount, self.h - 2.0 * amount)
    }

    /// Returns `None` for rectangles tiny-skia refuses, e.g. zero or negative extents.
    pub fn to_tiny_skia(&self) -> Option<tiny_skia::Rect> {
        tiny_skia::Rect::from_xywh(self.x, self.y, self.w, self.h)
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(value: Rect) -> Self {
        kurbo::Rect::new(value.left() as f64, value.top() as f64, value.right() as f64, value.bottom() as f64)
    }
}
