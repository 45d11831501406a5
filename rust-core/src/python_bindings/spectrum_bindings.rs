//! Python bindings for the centered power spectrum

use pyo3::prelude::*;
use pyo3::exceptions::PyValueError;
use numpy::{IntoPyArray, PyArray2, PyArray3, PyReadonlyArray2};
use ndarray::Array3;
use crate::error::SpectrumError;
use crate::signal::Signal;
use crate::spectrum::{self, RendererConfig, SpectrumRenderer, ValueScale};
use super::colormap_bindings::PyColormap;

fn to_py_err(err: SpectrumError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn to_signal(array: PyReadonlyArray2<f64>) -> PyResult<Signal> {
    Signal::real(array.as_array().to_owned()).map_err(to_py_err)
}

/// Spectrum renderer exposed to Python
#[pyclass(name = "SpectrumRenderer")]
pub struct PySpectrumRenderer {
    renderer: SpectrumRenderer,
}

#[pymethods]
impl PySpectrumRenderer {
    /// Create a new spectrum renderer
    /// 
    /// Args:
    ///     colormap: Color map used by rgb()
    ///     db: Color-map power in dB instead of linear power
    ///     db_reference: Reference level for the dB scale
    #[new]
    #[pyo3(signature = (colormap=PyColormap::Viridis, db=false, db_reference=1.0))]
    fn new(colormap: PyColormap, db: bool, db_reference: f64) -> Self {
        let config = RendererConfig {
            colormap: colormap.into(),
            scale: if db { ValueScale::Decibel } else { ValueScale::Linear },
            db_reference,
        };

        Self {
            renderer: SpectrumRenderer::new(config),
        }
    }

    /// Centered power spectrum |fftshift(fft2(signal))|²
    /// 
    /// Args:
    ///     signal: 2-D numpy array (non-empty)
    /// 
    /// Returns:
    ///     Power map with the same shape as signal
    fn power_map<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray2<f64>,
    ) -> PyResult<&'py PyArray2<f64>> {
        let signal = to_signal(signal)?;
        let power = self.renderer.power_map(&signal).map_err(to_py_err)?;

        Ok(power.into_values().into_pyarray(py))
    }

    /// Color-mapped power spectrum
    /// 
    /// Returns:
    ///     uint8 array of shape (rows, cols, 3)
    fn rgb<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray2<f64>,
    ) -> PyResult<&'py PyArray3<u8>> {
        let signal = to_signal(signal)?;
        let raster = self.renderer.rasterize(&signal).map_err(to_py_err)?;
        let image = Array3::from_shape_fn((raster.height(), raster.width(), 3), |(i, j, c)| {
            raster.pixel(i, j)[c]
        });

        Ok(image.into_pyarray(py))
    }
}

/// Shift the zero-frequency component to the center
#[pyfunction]
pub fn fftshift<'py>(py: Python<'py>, data: PyReadonlyArray2<f64>) -> &'py PyArray2<f64> {
    spectrum::fftshift(&data.as_array().to_owned()).into_pyarray(py)
}

/// Inverse of fftshift
#[pyfunction]
pub fn ifftshift<'py>(py: Python<'py>, data: PyReadonlyArray2<f64>) -> &'py PyArray2<f64> {
    spectrum::ifftshift(&data.as_array().to_owned()).into_pyarray(py)
}
