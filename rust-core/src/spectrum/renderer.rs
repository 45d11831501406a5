//! Centered power spectrum renderer
//!
//! Pipeline: signal → 2-D FFT → fftshift → |X|² → color map → display surface

use super::fft2::Fft2Engine;
use super::power::PowerMap;
use super::shift::fftshift;
use crate::error::Result;
use crate::render::{Colormap, DisplaySurface, Raster};
use crate::signal::Signal;
use log::debug;
use ndarray::Array2;
use num_complex::Complex64;

/// Which values are color-mapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueScale {
    /// Raw power |X|²
    #[default]
    Linear,

    /// 10*log10(|X|² / reference²)
    Decibel,
}

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Color map for the raster
    pub colormap: Colormap,

    /// Value scale applied before color mapping
    pub scale: ValueScale,

    /// Reference level for the dB scale
    pub db_reference: f64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            colormap: Colormap::Viridis,
            scale: ValueScale::Linear,
            db_reference: 1.0,
        }
    }
}

/// Computes and displays the centered power spectrum of 2-D signals
pub struct SpectrumRenderer {
    config: RendererConfig,
    engine: Fft2Engine,
}

impl SpectrumRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            engine: Fft2Engine::new(),
        }
    }

    /// Forward transform with the zero-frequency bin moved to the center
    pub fn centered_spectrum(&mut self, signal: &Signal) -> Result<Array2<Complex64>> {
        let spectrum = self.engine.forward(signal)?;
        let spectrum = fftshift(&spectrum);
        debug!("centered spectrum shape {:?}", spectrum.dim());
        Ok(spectrum)
    }

    /// Centered power map |X|², same shape as the signal
    pub fn power_map(&mut self, signal: &Signal) -> Result<PowerMap> {
        let spectrum = self.centered_spectrum(signal)?;
        let power = PowerMap::from_spectrum(&spectrum);
        debug!(
            "power map min {:.6e}, max {:.6e}, total {:.6e}",
            power.min(),
            power.max(),
            power.total()
        );
        Ok(power)
    }

    /// Power map converted to a color raster
    pub fn rasterize(&mut self, signal: &Signal) -> Result<Raster> {
        let power = self.power_map(signal)?;
        let raster = match self.config.scale {
            ValueScale::Linear => Raster::from_values(power.values(), self.config.colormap),
            ValueScale::Decibel => Raster::from_values(
                &power.to_db(self.config.db_reference),
                self.config.colormap,
            ),
        };
        Ok(raster)
    }

    /// Run the full pipeline and show the result
    ///
    /// Blocks for as long as the surface does (a terminal viewer waits
    /// until it is dismissed).
    pub fn render<S: DisplaySurface + ?Sized>(&mut self, signal: &Signal, surface: &mut S) -> Result<()> {
        let raster = self.rasterize(signal)?;
        surface.show(&raster)
    }

    /// Update configuration
    pub fn update_config(&mut self, config: RendererConfig) {
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }
}

impl Default for SpectrumRenderer {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}
