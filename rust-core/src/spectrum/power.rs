//! Power maps (squared magnitude of a 2-D spectrum)

use ndarray::Array2;
use num_complex::Complex64;

/// Element-wise |X[k,l]|² of a spectrum
///
/// Unnormalized: values are not divided by the number of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerMap {
    values: Array2<f64>,
}

impl PowerMap {
    /// Compute power map from a complex spectrum
    pub fn from_spectrum(spectrum: &Array2<Complex64>) -> Self {
        Self {
            values: spectrum.mapv(|z| z.norm_sqr()),
        }
    }

    /// Power values
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Consume the map and return the power values
    pub fn into_values(self) -> Array2<f64> {
        self.values
    }

    /// Shape as (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Sum of all bins (equals rows·cols·signal energy by Parseval)
    pub fn total(&self) -> f64 {
        self.values.sum()
    }

    /// Power in dB: 10*log10(P / reference²)
    pub fn to_db(&self, reference: f64) -> Array2<f64> {
        self.values.mapv(|p| {
            let p_clamped = p.max(1e-20);
            10.0 * (p_clamped / (reference * reference)).log10()
        })
    }
}
