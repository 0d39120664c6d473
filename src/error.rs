use error_iter::ErrorIter as _;
use log::error;

use crate::life::GridError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("a {width}x{height} grid at {scale} pixels per cell does not fit in a frame buffer")]
    Viewport {
        width: usize,
        height: usize,
        scale: u32,
    },
    #[error("frame rate must be a positive number, got {0}")]
    FrameRate(f64),
    #[error("window zoom must be a positive number, got {0}")]
    WindowZoom(f64),
    #[error("cells must be at least one pixel wide")]
    CellScale,
    #[error("event loop failed")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("could not open window")]
    Window(#[from] winit::error::OsError),
    #[error("pixel buffer failed")]
    Pixels(#[from] pixels::Error),
    #[error("could not resize surface")]
    Surface(#[from] pixels::TextureError),
}

/// Log an error along with every error in its `source()` chain.
pub fn log_error<E: std::error::Error + 'static>(method_name: &str, err: &E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
