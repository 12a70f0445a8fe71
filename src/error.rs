//! Error types shared by the rendering pipeline.

use thiserror::Error;

/// Failures raised by vector math, the raster buffer and the image encoder.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Two vectors of different length were combined.
    #[error("vector dimension mismatch: {left} vs {right} components")]
    DimensionMismatch {
        /// Length of the left operand
        left: usize,
        /// Length of the right operand
        right: usize,
    },

    /// A logical coordinate maps outside the canvas.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    IndexOutOfRange {
        /// Logical x coordinate
        x: i32,
        /// Logical y coordinate
        y: i32,
        /// Canvas width
        width: u32,
        /// Canvas height
        height: u32,
    },

    /// Writing the encoded image failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the library.
pub type RenderResult<T> = Result<T, RenderError>;
