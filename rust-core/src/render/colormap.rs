//! Color mapping of 2-D value arrays into RGB rasters
//!
//! Values are normalized linearly between the array's min and max, the way
//! a default image plot does; a constant array maps to the lowest color.

use ndarray::Array2;
use plotters::style::colors::colormaps::{BlackWhite, ColorMap, Copper, ViridisRGB};
use plotters::style::RGBColor;
use std::fmt;

/// 8-bit RGB pixel
pub type Rgb = [u8; 3];

/// Color map types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    /// Perceptually uniform dark purple → teal → yellow
    #[default]
    Viridis,

    /// Black → white
    Grayscale,

    /// Black → copper orange
    Copper,
}

fn to_rgb(color: RGBColor) -> Rgb {
    [color.0, color.1, color.2]
}

impl Colormap {
    /// Map a normalized value in [0, 1] to a color (out-of-range values are clamped)
    pub fn map(&self, t: f64) -> Rgb {
        let t = (if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }) as f32;
        let color = match self {
            Colormap::Viridis => ViridisRGB.get_color(t),
            Colormap::Grayscale => BlackWhite.get_color(t),
            Colormap::Copper => Copper.get_color(t),
        };
        to_rgb(color)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Grayscale => "grayscale",
            Colormap::Copper => "copper",
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Row-major RGB image, one pixel per array cell
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    range: (f64, f64),
}

impl Raster {
    /// Color-map a 2-D array
    ///
    /// # Arguments
    /// * `values` - Values to map (rows become image rows)
    /// * `colormap` - Color map to use
    pub fn from_values(values: &Array2<f64>, colormap: Colormap) -> Self {
        let (height, width) = values.dim();
        let vmin = values.iter().copied().fold(f64::INFINITY, f64::min);
        let vmax = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = vmax - vmin;

        let pixels = values
            .iter()
            .map(|&v| {
                let t = if span > 0.0 { (v - vmin) / span } else { 0.0 };
                colormap.map(t)
            })
            .collect();

        Self {
            width,
            height,
            pixels,
            range: (vmin, vmax),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// (vmin, vmax) used for normalization
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn pixel(&self, row: usize, col: usize) -> Rgb {
        self.pixels[row * self.width + col]
    }

    /// Iterate over pixel rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks(self.width.max(1))
    }
}
