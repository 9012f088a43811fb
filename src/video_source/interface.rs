use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VideoError {
    #[error("video file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("cannot open video: {}", .0.display())]
    CannotOpen(PathBuf),
    #[error("no supported video file in {}", .0.display())]
    NoVideoFound(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    // grayscale pixels, row-major
    pub data: Vec<u8>,
}

pub trait VideoSource {
    /// Next decoded frame, or `None` once the stream is exhausted.
    fn next_frame(&mut self) -> Option<Frame>;
    /// Idempotent. The stream cannot be restarted afterwards.
    fn release(&mut self);
}
