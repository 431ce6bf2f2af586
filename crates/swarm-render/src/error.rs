use thiserror::Error;

/// Failures while writing rendered frames to disk.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no frames to export")]
    NoFrames,

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
