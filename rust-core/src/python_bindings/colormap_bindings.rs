//! Python bindings for color maps

use pyo3::prelude::*;
use crate::render::Colormap;

/// Colormap enum exposed to Python
#[pyclass(name = "Colormap")]
#[derive(Clone)]
pub enum PyColormap {
    Viridis,
    Grayscale,
    Copper,
}

impl From<PyColormap> for Colormap {
    fn from(py_map: PyColormap) -> Self {
        match py_map {
            PyColormap::Viridis => Colormap::Viridis,
            PyColormap::Grayscale => Colormap::Grayscale,
            PyColormap::Copper => Colormap::Copper,
        }
    }
}
