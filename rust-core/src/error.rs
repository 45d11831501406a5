//! Error types for the power spectrum pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpectrumError {
    #[error("Signal is empty (shape {rows}x{cols})")]
    EmptySignal { rows: usize, cols: usize },

    #[error("Signal must be 2-dimensional (got {0} dimensions)")]
    NotTwoDimensional(usize),

    #[error("Row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid array shape: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Failed to parse matrix entry '{0}'")]
    Parse(String),

    #[error("FFT processing failed: {0}")]
    Fft(String),

    #[error("Image of {width}x{height} pixels exceeds the {max}x{max} limit")]
    ImageTooLarge { width: usize, height: usize, max: usize },

    #[error("Plotting failed: {0}")]
    Plot(String),

    #[error("Display output failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpectrumError>;
