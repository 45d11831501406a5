//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod colormap_bindings;
mod spectrum_bindings;

/// Python module definition
#[pymodule]
fn power_spectrum(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<spectrum_bindings::PySpectrumRenderer>()?;

    // Add Colormap enum
    m.add_class::<colormap_bindings::PyColormap>()?;

    m.add_function(wrap_pyfunction!(spectrum_bindings::fftshift, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::ifftshift, m)?)?;

    Ok(())
}
