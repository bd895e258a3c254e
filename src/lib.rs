mod app;
mod error;
mod style;
pub mod animation;
pub mod math;
pub mod input;
pub mod render;
pub mod widgets;
mod text;
mod utils;

pub use crate::app::{Application, Scene};
pub use crate::error::{Error, Result};
pub use crate::input::{FrameInput, InputState, Keys};
pub use crate::render::{Canvas, DrawCommand, DrawList, RenderContext};
pub use crate::style::{Color, Theme};
pub use crate::widgets::{Widget, Button, Checkbox, Dropdown, TextField, update_all, draw_all};
