//! Errors raised by the windowed host. Widgets themselves never fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("surface failed: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),

    #[error("a {width}x{height} surface buffer cannot back a pixmap")]
    InvalidSurface { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
