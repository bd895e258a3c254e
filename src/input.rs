use bitflags::bitflags;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use crate::math;

bitflags! {
    /// The keys widgets react to.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Keys: u8 {
        const BACKSPACE = 1 << 0;
        const LEFT = 1 << 1;
        const RIGHT = 1 << 2;
        const HOME = 1 << 3;
        const END = 1 << 4;
    }
}

impl Default for Keys {
    fn default() -> Self {
        Keys::empty()
    }
}

impl Keys {
    fn from_winit(key: &Key) -> Keys {
        match key {
            Key::Named(NamedKey::Backspace) => Keys::BACKSPACE,
            Key::Named(NamedKey::ArrowLeft) => Keys::LEFT,
            Key::Named(NamedKey::ArrowRight) => Keys::RIGHT,
            Key::Named(NamedKey::Home) => Keys::HOME,
            Key::Named(NamedKey::End) => Keys::END,
            _ => Keys::empty(),
        }
    }
}


/// Everything a widget may look at during one frame.
///
/// `pointer_down` and `keys_down` include the frame on which the press edge
/// happened. Scroll is measured in lines, positive away from the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: math::Point,
    pub pointer_pressed: bool,
    pub pointer_down: bool,
    pub pointer_released: bool,

    pub chars: Vec<char>,
    pub keys_pressed: Keys,
    pub keys_down: Keys,
    pub keys_released: Keys,

    pub scroll: f32,
    pub dt: f32,
}

impl FrameInput {
    pub fn new(dt: f32) -> FrameInput {
        FrameInput { dt, ..FrameInput::default() }
    }

    pub fn with_pointer(mut self, x: f32, y: f32) -> FrameInput {
        self.pointer = math::Point::new(x, y);
        self
    }

    pub fn with_press(mut self) -> FrameInput {
        self.pointer_pressed = true;
        self.pointer_down = true;
        self
    }

    pub fn with_hold(mut self) -> FrameInput {
        self.pointer_down = true;
        self
    }

    pub fn with_release(mut self) -> FrameInput {
        self.pointer_released = true;
        self.pointer_down = false;
        self
    }

    pub fn with_chars(mut self, text: &str) -> FrameInput {
        self.chars.extend(text.chars());
        self
    }

    pub fn with_key_press(mut self, keys: Keys) -> FrameInput {
        self.keys_pressed |= keys;
        self.keys_down |= keys;
        self
    }

    pub fn with_key_hold(mut self, keys: Keys) -> FrameInput {
        self.keys_down |= keys;
        self
    }

    pub fn with_key_release(mut self, keys: Keys) -> FrameInput {
        self.keys_released |= keys;
        self.keys_down.remove(keys);
        self
    }

    pub fn with_scroll(mut self, lines: f32) -> FrameInput {
        self.scroll = lines;
        self
    }

    pub fn key_pressed(&self, key: Keys) -> bool {
        self.keys_pressed.contains(key)
    }

    pub fn key_down(&self, key: Keys) -> bool {
        self.keys_down.contains(key)
    }
}


const PIXELS_PER_SCROLL_LINE: f32 = 20.0;

/// Accumulates window events between frames and hands them out as
/// [`FrameInput`] snapshots.
pub struct InputState {
    scale_factor: f32,
    cursor_position: math::Point,

    pointer_down: bool,
    pointer_pressed: bool,
    pointer_released: bool,

    chars: Vec<char>,
    keys_down: Keys,
    keys_pressed: Keys,
    keys_released: Keys,

    scroll: f32,
}

impl Default for InputState {
    fn default() -> Self {
        InputState::new()
    }
}

impl InputState {
    pub fn new() -> InputState {
        InputState {
            scale_factor: 1.0,
            cursor_position: math::Point::default(),
            pointer_down: false,
            pointer_pressed: false,
            pointer_released: false,
            chars: Vec::new(),
            keys_down: Keys::empty(),
            keys_pressed: Keys::empty(),
            keys_released: Keys::empty(),
            scroll: 0.0,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = math::Point::new(
                    position.x as f32 / self.scale_factor,
                    position.y as f32 / self.scale_factor
                );
            }
            WindowEvent::MouseInput { button: MouseButton::Left, state, .. } => {
                self.pointer_button(*state == ElementState::Pressed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll += match delta {
                    MouseScrollDelta::LineDelta(_, lines) => *lines,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_SCROLL_LINE,
                };
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state == ElementState::Pressed;
                self.key(Keys::from_winit(&event.logical_key), pressed);
                if pressed {
                    if let Some(text) = &event.text {
                        self.typed(text);
                    }
                }
            }
            WindowEvent::Focused(false) => {
                self.release_all();
            }
            _ => ()
        }
    }

    fn pointer_button(&mut self, pressed: bool) {
        if pressed && !self.pointer_down {
            self.pointer_pressed = true;
        } else if !pressed && self.pointer_down {
            self.pointer_released = true;
        }
        self.pointer_down = pressed;
    }

    fn key(&mut self, keys: Keys, pressed: bool) {
        if pressed {
            // os key repeat arrives as further presses of a key already down
            self.keys_pressed |= keys - self.keys_down;
            self.keys_down |= keys;
        } else {
            self.keys_released |= keys & self.keys_down;
            self.keys_down.remove(keys);
        }
    }

    fn typed(&mut self, text: &str) {
        // some platforms report navigation keys as private use characters
        let printable = |c: &char| !c.is_control() && !('\u{E000}'..='\u{F8FF}').contains(c);
        self.chars.extend(text.chars().filter(printable));
    }

    fn release_all(&mut self) {
        self.pointer_button(false);
        self.key(Keys::all(), false);
    }

    /// Snapshots the state gathered since the previous frame and clears the
    /// edge-triggered parts of it.
    pub fn next_frame(&mut self, dt: f32) -> FrameInput {
        let frame = FrameInput {
            pointer: self.cursor_position,
            pointer_pressed: self.pointer_pressed,
            pointer_down: self.pointer_down,
            pointer_released: self.pointer_released,
            chars: std::mem::take(&mut self.chars),
            keys_pressed: self.keys_pressed,
            keys_down: self.keys_down,
            keys_released: self.keys_released,
            scroll: self.scroll,
            dt: dt.max(0.0),
        };

        self.pointer_pressed = false;
        self.pointer_released = false;
        self.keys_pressed = Keys::empty();
        self.keys_released = Keys::empty();
        self.scroll = 0.0;

        frame
    }
}
