use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;

use tiny_skia::PixmapMut;

use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{WindowAttributes, WindowId, Window};
use softbuffer::Surface;

use crate::error::{Error, Result};
use crate::input::{FrameInput, InputState};
use crate::render::{Canvas, RenderContext};
use crate::style::Color;

fn timed<T>(message: &str, f: impl FnOnce() -> T) -> T {
    let now = Instant::now();
    let ret = f();
    let time = Instant::now() - now;
    log::trace!("{}: {} sec", message, time.as_secs_f32());
    ret
}

/// What an [`Application`] shows: typically a handful of widgets plus
/// whatever the host does with their results.
pub trait Scene {
    fn update(&mut self, input: &FrameInput) -> bool;
    fn draw(&self, canvas: &mut dyn Canvas);

    fn background(&self) -> Color {
        Color::WHITE
    }
}

struct ActiveApplication {
    window: Rc<Window>,
    _context: softbuffer::Context<Rc<Window>>,
    surface: Surface<Rc<Window>, Rc<Window>>,
}

/// Opens a window and drives a [`Scene`] once per redraw.
pub struct Application<S> {
    active: Option<ActiveApplication>,
    title: String,

    scale_factor: f32,
    last_frame: Option<Instant>,
    input: InputState,

    scene: S,
    failure: Option<Error>,
}

impl<S: Scene> Application<S> {
    pub fn new(title: impl Into<String>, scene: S) -> Self {
        Application {
            active: None,
            title: title.into(),

            scale_factor: 1.0,
            last_frame: None,
            input: InputState::new(),

            scene,
            failure: None,
        }
    }

    pub fn run(mut self) -> Result<()> {
        env_logger::init();

        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        match self.failure.take() {
            Some(error) => Err(error),
            None => Ok(())
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        log::error!("{error}");
        self.failure.get_or_insert(error);
        self.active = None;
        event_loop.exit();
    }

    fn open_window(&self, event_loop: &ActiveEventLoop) -> Result<ActiveApplication> {
        let attributes = WindowAttributes::default().with_title(self.title.clone());
        let window = Rc::new(event_loop.create_window(attributes)?);
        let context = softbuffer::Context::new(Rc::clone(&window))?;
        let surface = Surface::new(&context, Rc::clone(&window))?;

        Ok(ActiveApplication {
            window,
            _context: context,
            surface
        })
    }

    fn redraw(&mut self) -> Result<()> {
        let Some(ActiveApplication { window, surface, .. }) = &mut self.active else { return Ok(()); };

        let now = Instant::now();
        let dt = self.last_frame.map_or(0.0, |last| (now - last).as_secs_f32());
        self.last_frame = Some(now);

        let frame = self.input.next_frame(dt);
        let scene = &mut self.scene;
        let changed = timed("Update", || scene.update(&frame));
        if changed {
            log::trace!("scene changed");
        }

        let size = window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else { return Ok(()); };
        surface.resize(width, height)?;

        let mut buffer = surface.buffer_mut()?;
        {
            let mut pixmap = PixmapMut::from_bytes(bytemuck::must_cast_slice_mut(&mut *buffer), size.width, size.height)
                .ok_or(Error::InvalidSurface { width: size.width, height: size.height })?;
            pixmap.fill(scene.background().into());

            let mut render_context = RenderContext::new(pixmap, self.scale_factor);
            timed("Drawing", || scene.draw(&mut render_context));
        }

        window.pre_present_notify();
        buffer.present()?;
        Ok(())
    }
}

impl<S: Scene> winit::application::ApplicationHandler for Application<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.active.is_some() {
            return;
        }

        match self.open_window(event_loop) {
            Ok(active) => {
                self.scale_factor = active.window.scale_factor() as f32;
                self.input.set_scale_factor(self.scale_factor);
                self.active = Some(active);
            }
            Err(error) => self.fail(event_loop, error)
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = scale_factor as f32;
                self.input.set_scale_factor(self.scale_factor);
            }
            WindowEvent::RedrawRequested => {
                if let Err(error) = self.redraw() {
                    self.fail(event_loop, error);
                }
            }
            WindowEvent::CloseRequested => {
                self.active = None;
                event_loop.exit();
            }
            event => {
                self.input.handle_window_event(&event);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // animations and the caret need a steady stream of frames
        if let Some(active) = &self.active {
            active.window.request_redraw();
        }
    }
}
