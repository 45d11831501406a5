//! Centered 2-D power spectra

pub mod fft2;
pub mod shift;
pub mod power;
pub mod renderer;

pub use fft2::{fft2, Fft2Engine};
pub use shift::{fftshift, ifftshift};
pub use power::PowerMap;
pub use renderer::{RendererConfig, SpectrumRenderer, ValueScale};
