//! 2-D FFT engine using rustfft, with a realfft fast path for real signals
//!
//! Forward transform only, no normalization:
//! X[k,l] = Σ_m Σ_n x[m,n]·exp(-2πi(km/M + ln/N))

use crate::error::{Result, SpectrumError};
use crate::signal::Signal;
use log::debug;
use ndarray::{Array2, Axis};
use num_complex::Complex64;
use realfft::RealFftPlanner;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// 2-D FFT engine
///
/// Holds the planners so repeated transforms of the same size reuse plans.
pub struct Fft2Engine {
    planner: FftPlanner<f64>,
    real_planner: RealFftPlanner<f64>,
}

impl Fft2Engine {
    /// Create new 2-D FFT engine
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
            real_planner: RealFftPlanner::new(),
        }
    }

    /// Compute the forward 2-D DFT of a signal
    ///
    /// # Returns
    /// Complex spectrum with the same shape as `signal`, DC at (0, 0)
    pub fn forward(&mut self, signal: &Signal) -> Result<Array2<Complex64>> {
        let (rows, cols) = signal.shape();
        debug!("fft2 forward on {}x{} signal (real: {})", rows, cols, signal.is_real());

        let mut spectrum = match signal.as_real() {
            // realfft needs at least two samples per row to be worthwhile
            Some(data) if cols > 1 => self.real_row_pass(data)?,
            _ => {
                let mut data = signal.to_complex();
                self.complex_pass(&mut data, Axis(1));
                data
            }
        };

        self.complex_pass(&mut spectrum, Axis(0));
        Ok(spectrum)
    }

    /// Compute the forward 2-D DFT of complex data in place
    pub fn forward_complex_inplace(&mut self, data: &mut Array2<Complex64>) {
        self.complex_pass(data, Axis(1));
        self.complex_pass(data, Axis(0));
    }

    /// Transform every lane along `axis` with a complex FFT
    fn complex_pass(&mut self, data: &mut Array2<Complex64>, axis: Axis) {
        let len = data.len_of(axis);
        if len == 0 {
            return;
        }

        let fft: Arc<dyn Fft<f64>> = self.planner.plan_fft_forward(len);
        let mut buffer = vec![Complex64::default(); len];
        let mut scratch = vec![Complex64::default(); fft.get_inplace_scratch_len()];

        // Lanes are copied out so non-contiguous columns work too
        for mut lane in data.lanes_mut(axis) {
            for (dst, src) in buffer.iter_mut().zip(lane.iter()) {
                *dst = *src;
            }
            fft.process_with_scratch(&mut buffer, &mut scratch);
            for (dst, src) in lane.iter_mut().zip(buffer.iter()) {
                *dst = *src;
            }
        }
    }

    /// Real-to-complex FFT along each row, expanded to the full spectrum
    ///
    /// realfft yields bins 0..=cols/2; the rest follow from Hermitian
    /// symmetry, X[k] = conj(X[cols - k]).
    fn real_row_pass(&mut self, data: &Array2<f64>) -> Result<Array2<Complex64>> {
        let (rows, cols) = data.dim();
        let r2c = self.real_planner.plan_fft_forward(cols);

        let mut input = r2c.make_input_vec();
        let mut half = r2c.make_output_vec();
        let mut output = Array2::<Complex64>::zeros((rows, cols));

        for (row_in, mut row_out) in data.rows().into_iter().zip(output.rows_mut()) {
            // process() uses the input as scratch, so refill every row
            for (dst, &src) in input.iter_mut().zip(row_in.iter()) {
                *dst = src;
            }
            r2c.process(&mut input, &mut half)
                .map_err(|e| SpectrumError::Fft(e.to_string()))?;

            for k in 0..cols {
                row_out[k] = if k < half.len() {
                    half[k]
                } else {
                    half[cols - k].conj()
                };
            }
        }

        Ok(output)
    }
}

impl Default for Fft2Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward 2-D DFT with a throwaway engine
pub fn fft2(signal: &Signal) -> Result<Array2<Complex64>> {
    Fft2Engine::new().forward(signal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn assert_close(actual: &Array2<Complex64>, expected: &Array2<Complex64>, tol: f64) {
        assert_eq!(actual.dim(), expected.dim());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).norm() < tol, "got {}, expected {}", a, e);
        }
    }

    #[test]
    fn test_fft2_identity() {
        let spectrum = fft2(&Signal::identity_2x2()).unwrap();

        // X[k,l] = 1 + (-1)^(k+l)
        let expected = array![
            [Complex64::new(2.0, 0.0), Complex64::new(0.0, 0.0)],
            [Complex64::new(0.0, 0.0), Complex64::new(2.0, 0.0)]
        ];
        assert_close(&spectrum, &expected, 1e-12);
    }

    #[test]
    fn test_fft2_real_3x3_reference() {
        let signal = Signal::real(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
        let spectrum = fft2(&signal).unwrap();

        let expected = array![
            [
                Complex64::new(45.0, 0.0),
                Complex64::new(-4.5, 2.59808),
                Complex64::new(-4.5, -2.59808)
            ],
            [
                Complex64::new(-13.5, 7.79423),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0)
            ],
            [
                Complex64::new(-13.5, -7.79423),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0)
            ],
        ];
        assert_close(&spectrum, &expected, 1e-4);
    }

    #[test]
    fn test_fft2_complex_3x3_reference() {
        let data = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]
            .mapv(|x| Complex64::new(x, x));
        let spectrum = fft2(&Signal::complex(data).unwrap()).unwrap();

        let expected = array![
            [
                Complex64::new(45.0, 45.0),
                Complex64::new(-7.09808, -1.90192),
                Complex64::new(-1.90192, -7.09808)
            ],
            [
                Complex64::new(-21.29423, -5.70577),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0)
            ],
            [
                Complex64::new(-5.70577, -21.29423),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0)
            ],
        ];
        assert_close(&spectrum, &expected, 1e-4);
    }

    #[test]
    fn test_real_and_complex_paths_agree() {
        let data = Array2::from_shape_fn((5, 7), |(i, j)| ((i * 7 + j) as f64 * 0.37).sin());
        let mut engine = Fft2Engine::new();

        let real = engine.forward(&Signal::real(data.clone()).unwrap()).unwrap();
        let mut complex = data.mapv(|x| Complex64::new(x, 0.0));
        engine.forward_complex_inplace(&mut complex);

        assert_close(&real, &complex, 1e-9);
    }

    #[test]
    fn test_single_column_signal() {
        let signal = Signal::real(array![[1.0], [1.0], [1.0], [1.0]]).unwrap();
        let spectrum = fft2(&signal).unwrap();

        assert_eq!(spectrum.dim(), (4, 1));
        assert!((spectrum[[0, 0]] - Complex64::new(4.0, 0.0)).norm() < 1e-12);
        for k in 1..4 {
            assert!(spectrum[[k, 0]].norm() < 1e-12);
        }
    }

    #[test]
    fn test_non_standard_layout() {
        let data = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let transposed = data.t().to_owned();
        let fortran = data.clone().reversed_axes();

        let a = fft2(&Signal::real(transposed).unwrap()).unwrap();
        let b = fft2(&Signal::real(fortran).unwrap()).unwrap();
        assert_close(&a, &b, 1e-12);
    }
}
