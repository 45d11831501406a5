//! Zero-frequency recentering
//!
//! Follows the NumPy/SciPy convention: `fftshift` moves index `i` to
//! `(i + n/2) mod n` on each axis, so the DC bin lands at `(rows/2, cols/2)`.
//! For odd lengths `ifftshift` is the inverse; for even lengths both agree.

use ndarray::Array2;

/// Cyclically roll both axes of a 2-D array
///
/// # Arguments
/// * `data` - Input array
/// * `shift` - (row shift, column shift); positive moves elements towards higher indices
///
/// # Returns
/// New array with `out[(i + shift.0) mod rows, (j + shift.1) mod cols] = data[i, j]`
pub fn roll2<T: Clone>(data: &Array2<T>, shift: (isize, isize)) -> Array2<T> {
    let (rows, cols) = data.dim();
    if rows == 0 || cols == 0 {
        return data.clone();
    }

    let row_shift = shift.0.rem_euclid(rows as isize) as usize;
    let col_shift = shift.1.rem_euclid(cols as isize) as usize;

    Array2::from_shape_fn((rows, cols), |(i, j)| {
        let src_i = (i + rows - row_shift) % rows;
        let src_j = (j + cols - col_shift) % cols;
        data[[src_i, src_j]].clone()
    })
}

/// Shift the zero-frequency component to the center of the array
pub fn fftshift<T: Clone>(data: &Array2<T>) -> Array2<T> {
    let (rows, cols) = data.dim();
    roll2(data, ((rows / 2) as isize, (cols / 2) as isize))
}

/// Inverse of `fftshift`: move the center back to index (0, 0)
pub fn ifftshift<T: Clone>(data: &Array2<T>) -> Array2<T> {
    let (rows, cols) = data.dim();
    roll2(data, (-((rows / 2) as isize), -((cols / 2) as isize)))
}
