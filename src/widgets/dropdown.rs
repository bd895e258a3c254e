use std::ops::Range;

use crate::input::FrameInput;
use crate::math::{self, Point, Vector};
use crate::render::Canvas;
use crate::style::Color;
use crate::utils;
use crate::widgets::Widget;

const DEFAULT_MAX_VISIBLE_ITEMS: usize = 5;
const TEXT_INSET: f32 = 5.0;


/// A closed header box that opens into a vertical list of items directly
/// below it. Clicking an item selects it and closes the list.
#[derive(Clone, Debug)]
pub struct Dropdown {
    bounds: math::Rect,
    items: Vec<String>,

    background_color: Color,
    border_color: Color,
    text_color: Color,
    hover_color: Color,
    font_size: f32,

    is_open: bool,
    selected_index: Option<usize>,
    hover_index: Option<usize>,
    max_visible_items: usize,
    scroll_offset: usize,
}

impl Dropdown {
    pub fn new(bounds: math::Rect, items: Vec<String>) -> Dropdown {
        Dropdown {
            bounds,
            items,

            background_color: Color::WHITE,
            border_color: Color::BLACK,
            text_color: Color::BLACK,
            hover_color: Color::LIGHT_GRAY,
            font_size: 20.0,

            is_open: false,
            selected_index: None,
            hover_index: None,
            max_visible_items: DEFAULT_MAX_VISIBLE_ITEMS,
            scroll_offset: 0,
        }
    }

    pub fn set_colors(&mut self, background: Color, border: Color, text: Color, hover: Color) {
        self.background_color = background;
        self.border_color = border;
        self.text_color = text;
        self.hover_color = hover;
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    pub fn set_bounds(&mut self, bounds: math::Rect) {
        self.bounds = bounds;
    }

    pub fn set_max_visible_items(&mut self, count: usize) {
        self.max_visible_items = count;
        self.set_scroll_offset(self.scroll_offset);
    }

    pub fn max_visible_items(&self) -> usize {
        self.max_visible_items
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Replaces the item list. The selected index is kept as is, so it may
    /// no longer point at an item; [`Dropdown::selected_item`] checks that.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.set_scroll_offset(self.scroll_offset);
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Indices past the end of the item list are ignored.
    pub fn set_selected_index(&mut self, index: Option<usize>) {
        match index {
            Some(index) if index >= self.items.len() => (),
            index => self.selected_index = index,
        }
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected_index
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset.min(utils::max_scroll_offset(self.items.len(), self.max_visible_items));
    }

    pub fn scroll_by(&mut self, rows: isize) {
        self.set_scroll_offset(self.scroll_offset.saturating_add_signed(rows));
    }

    /// Absolute indices of the items currently in the list window.
    pub fn visible_items(&self) -> Range<usize> {
        utils::visible_range(self.items.len(), self.scroll_offset, self.max_visible_items)
    }

    /// Bounds of the `row`-th visible row, counted from the top of the window.
    pub fn item_bounds(&self, row: usize) -> math::Rect {
        self.bounds.translate(Vector::new(0.0, (row + 1) as f32 * self.bounds.h))
    }

    fn list_bounds(&self) -> math::Rect {
        let rows = self.visible_items().len() as f32;
        math::Rect::from_xywh(self.bounds.x, self.bounds.y, self.bounds.w, self.bounds.h * (rows + 1.0))
    }

    fn item_at(&self, point: Point) -> Option<usize> {
        self.visible_items()
            .enumerate()
            .find(|&(row, _)| self.item_bounds(row).contains(point))
            .map(|(_, index)| index)
    }

    fn text_origin(&self, row_bounds: math::Rect) -> Point {
        Point::new(row_bounds.x + TEXT_INSET, row_bounds.y + (row_bounds.h - self.font_size) / 2.0)
    }
}

impl Widget for Dropdown {
    fn bounds(&self) -> math::Rect {
        self.bounds
    }

    fn update(&mut self, input: &FrameInput) -> bool {
        let before = (self.is_open, self.selected_index, self.scroll_offset);
        // never repopulated: the open list has no pointer hover tracking
        self.hover_index = None;

        if input.pointer_pressed {
            if self.bounds.contains(input.pointer) {
                self.is_open = !self.is_open;
                log::debug!("dropdown {}", if self.is_open { "opened" } else { "closed" });
            } else if self.is_open {
                if let Some(index) = self.item_at(input.pointer) {
                    self.selected_index = Some(index);
                    self.is_open = false;
                    log::debug!("dropdown selected {:?}", self.items[index]);
                }
            }
        }

        if self.is_open && input.scroll != 0.0 && self.list_bounds().contains(input.pointer) {
            let rows = if input.scroll > 0.0 { -1 } else { 1 };
            self.scroll_by(rows);
        }

        before != (self.is_open, self.selected_index, self.scroll_offset)
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.background_color);
        canvas.stroke_rect(self.bounds, 2.0, self.border_color);

        if let Some(item) = self.selected_item() {
            canvas.text(item, self.text_origin(self.bounds), self.font_size, self.text_color);
        }

        let arrow_size = self.font_size * 0.5;
        let arrow = Point::new(
            self.bounds.right() - arrow_size - TEXT_INSET,
            self.bounds.y + (self.bounds.h - arrow_size) / 2.0
        );
        canvas.fill_triangle(
            arrow,
            arrow + Vector::new(arrow_size, 0.0),
            arrow + Vector::new(arrow_size / 2.0, arrow_size),
            self.text_color
        );

        if self.is_open {
            for (row, index) in self.visible_items().enumerate() {
                let row_bounds = self.item_bounds(row);
                let background = if self.hover_index == Some(index) { self.hover_color } else { self.background_color };

                canvas.fill_rect(row_bounds, background);
                canvas.stroke_rect(row_bounds, 2.0, self.border_color);
                canvas.text(&self.items[index], self.text_origin(row_bounds), self.font_size, self.text_color);
            }
        }
    }
}
