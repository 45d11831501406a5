//! Power Spectrum - centered 2-D power spectra
//! 
//! 2-D FFT, zero-frequency recentering and color-mapped display, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod error;
pub mod signal;
pub mod spectrum;
pub mod render;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{Result, SpectrumError};
pub use signal::Signal;
pub use spectrum::{PowerMap, SpectrumRenderer};
