use thiserror::Error;

/// Errors that can occur in the paint surface core
#[derive(Debug, Error)]
pub enum CanvasError {
    /// A single-pixel write landed outside the buffer. This is a caller
    /// bug, not a recoverable drawing condition; area operations clip
    /// instead of erroring.
    #[error("pixel write out of bounds: ({x}, {y}) on a {width}x{height} buffer")]
    PixelOutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// The decorative border asset could not be loaded. Fatal at startup.
    #[error("failed to load border asset '{path}': {source}")]
    BorderLoad {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to export canvas: {0}")]
    Export(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
