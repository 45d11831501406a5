//! Two-dimensional input signals
//!
//! A `Signal` is validated on construction: it is always 2-D and never
//! empty along either axis, so every later pipeline stage can rely on it.

use crate::error::{Result, SpectrumError};
use ndarray::{array, Array2, ArrayD, Ix2};
use num_complex::Complex64;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
enum Samples {
    Real(Array2<f64>),
    Complex(Array2<Complex64>),
}

/// Immutable 2-D signal (real or complex valued)
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Samples,
}

fn check_shape((rows, cols): (usize, usize)) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(SpectrumError::EmptySignal { rows, cols });
    }
    Ok(())
}

impl Signal {
    /// Create a real-valued signal
    pub fn real(data: Array2<f64>) -> Result<Self> {
        check_shape(data.dim())?;
        Ok(Self {
            samples: Samples::Real(data),
        })
    }

    /// Create a complex-valued signal
    pub fn complex(data: Array2<Complex64>) -> Result<Self> {
        check_shape(data.dim())?;
        Ok(Self {
            samples: Samples::Complex(data),
        })
    }

    /// Create a real signal from an array of unknown dimensionality
    ///
    /// Fails unless the array is exactly 2-D.
    pub fn from_dyn(data: ArrayD<f64>) -> Result<Self> {
        let ndim = data.ndim();
        let data = data
            .into_dimensionality::<Ix2>()
            .map_err(|_| SpectrumError::NotTwoDimensional(ndim))?;
        Self::real(data)
    }

    /// Create a real signal from nested rows
    ///
    /// # Arguments
    /// * `rows` - Row-major values; every row must have the same length
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        let mut flat = Vec::with_capacity(n_rows * n_cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n_cols {
                return Err(SpectrumError::RaggedRows {
                    row,
                    expected: n_cols,
                    found: values.len(),
                });
            }
            flat.extend(values);
        }

        check_shape((n_rows, n_cols))?;
        Self::real(Array2::from_shape_vec((n_rows, n_cols), flat)?)
    }

    /// Parse a matrix literal such as `"1 0; 0 1"`
    ///
    /// Rows are separated by `;`, entries by whitespace or commas.
    pub fn parse_matrix(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SpectrumError::EmptySignal { rows: 0, cols: 0 });
        }

        let rows = text
            .split(';')
            .map(|row| {
                row.split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|token| !token.is_empty())
                    .map(|token| {
                        token
                            .parse::<f64>()
                            .map_err(|_| SpectrumError::Parse(token.to_string()))
                    })
                    .collect::<Result<Vec<f64>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_rows(rows)
    }

    /// The default input: `[[1, 0], [0, 1]]`
    pub fn identity_2x2() -> Self {
        Self {
            samples: Samples::Real(array![[1.0, 0.0], [0.0, 1.0]]),
        }
    }

    /// Shape as (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        match &self.samples {
            Samples::Real(data) => data.dim(),
            Samples::Complex(data) => data.dim(),
        }
    }

    /// Whether the samples are real-valued
    pub fn is_real(&self) -> bool {
        matches!(self.samples, Samples::Real(_))
    }

    /// Borrow the real samples, if this is a real signal
    pub fn as_real(&self) -> Option<&Array2<f64>> {
        match &self.samples {
            Samples::Real(data) => Some(data),
            Samples::Complex(_) => None,
        }
    }

    /// Copy of the samples promoted to complex values
    pub fn to_complex(&self) -> Array2<Complex64> {
        match &self.samples {
            Samples::Real(data) => data.mapv(|x| Complex64::new(x, 0.0)),
            Samples::Complex(data) => data.clone(),
        }
    }

    /// Sum of squared magnitudes over all samples
    pub fn energy(&self) -> f64 {
        match &self.samples {
            Samples::Real(data) => data.iter().map(|&x| x * x).sum(),
            Samples::Complex(data) => data.iter().map(|z| z.norm_sqr()).sum(),
        }
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::identity_2x2()
    }
}

impl FromStr for Signal {
    type Err = SpectrumError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_matrix(s)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Signal {
    type Error = SpectrumError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}
