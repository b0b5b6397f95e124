//! Savitzky-Golay smoothing.
//!
//! ## Purpose
//!
//! This module smooths a uniformly sampled signal by fitting a polynomial of
//! degree `polyorder` to each window of `window_length` samples, by linear
//! least squares, and replacing the centre sample with the fitted value.
//!
//! ## Design notes
//!
//! * **Projector**: The least-squares projector of the window's Vandermonde
//!   matrix is computed once; every output sample is a dot product of one of
//!   its rows (evaluated at the right offset) with the input.
//! * **Edges**: [`EdgeMode::Interp`] refits the first and last full window and
//!   evaluates that polynomial at the edge samples. This is what Octave's
//!   `sgolayfilt` does with the edge rows of `sgolay`, and what scipy's
//!   `savgol_filter` does by default. The other modes pad the signal and use
//!   the centre weights everywhere.
//! * **Generics**: Generic over `FloatLinalg` types (f32 and f64).
//!
//! ## Key concepts
//!
//! * **Window coordinates**: Sample `r` of a window sits at `t = r - half`,
//!   so the centre is at `t = 0`.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Polynomials of degree `<= polyorder` pass through unchanged (`Interp`).
//! * `window_length == 1` is the identity.
//!
//! ## Non-goals
//!
//! * Derivative estimation is not provided.

use num_traits::Float;

use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::ParityError;
use crate::primitives::spec::SmoothingSpec;

/// Edge handling for the first and last `window_length / 2` samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    /// Fit the edge window and evaluate the polynomial at the edge samples.
    #[default]
    Interp,

    /// Reflect about the edge sample without repeating it: `d c b | a b c d`.
    Mirror,

    /// Repeat the edge sample: `a a a | a b c d`.
    Nearest,

    /// Pad with zeros.
    Constant,

    /// Wrap around periodically: `b c d | a b c d`.
    Wrap,
}

// ============================================================================
// Coefficients
// ============================================================================

/// Least-squares fit of one window, kept as a projector matrix.
#[derive(Debug, Clone)]
struct WindowFit<T> {
    window_length: usize,
    n_coeffs: usize,
    // Column-major `n_coeffs x window_length`.
    projector: Vec<T>,
}

impl<T: FloatLinalg> WindowFit<T> {
    fn new(window_length: usize, polyorder: usize) -> Result<Self, ParityError> {
        Validator::validate_smoothing(window_length, polyorder)?;

        let half = (window_length / 2) as i64;
        let n_coeffs = polyorder + 1;

        let mut design = Vec::with_capacity(window_length * n_coeffs);
        for k in 0..n_coeffs {
            for r in 0..window_length {
                let t = T::from(r as i64 - half).unwrap_or_else(T::nan);
                design.push(t.powi(k as i32));
            }
        }

        let projector = T::least_squares_projector(&design, window_length, n_coeffs)
            .ok_or(ParityError::InvalidPolyorder {
                polyorder,
                window_length,
            })?;

        Ok(Self {
            window_length,
            n_coeffs,
            projector,
        })
    }

    /// Weights that evaluate the fitted polynomial at window coordinate `t`.
    fn weights_at(&self, t: T) -> Vec<T> {
        (0..self.window_length)
            .map(|r| {
                let column = &self.projector[r * self.n_coeffs..(r + 1) * self.n_coeffs];
                // Horner over the coefficient column.
                column
                    .iter()
                    .rev()
                    .fold(T::zero(), |acc, &c| acc * t + c)
            })
            .collect()
    }
}

/// Weights producing the smoothed centre sample of a window.
///
/// Applied as a dot product: `y[i] = Σ_j c[j] · x[i - half + j]`.
pub fn savgol_coeffs<T: FloatLinalg>(
    window_length: usize,
    polyorder: usize,
) -> Result<Vec<T>, ParityError> {
    let fit = WindowFit::<T>::new(window_length, polyorder)?;
    Ok(fit.weights_at(T::zero()))
}

// ============================================================================
// Filtering
// ============================================================================

/// Smooth `x` with a Savitzky-Golay filter.
pub fn savgol_filter<T: FloatLinalg>(
    x: &[T],
    window_length: usize,
    polyorder: usize,
    mode: EdgeMode,
) -> Result<Vec<T>, ParityError> {
    if x.is_empty() {
        return Err(ParityError::EmptyInput);
    }
    let fit = WindowFit::<T>::new(window_length, polyorder)?;
    let n = x.len();
    let half = window_length / 2;
    let centre = fit.weights_at(T::zero());

    match mode {
        EdgeMode::Interp => {
            if window_length > n {
                return Err(ParityError::WindowTooLong {
                    window_length,
                    len: n,
                });
            }

            let mut y = Vec::with_capacity(n);

            let head = &x[..window_length];
            for i in 0..half {
                let t = T::from(i as i64 - half as i64).unwrap_or_else(T::nan);
                y.push(T::dot(&fit.weights_at(t), head));
            }

            for i in half..(n - half) {
                y.push(T::dot(&centre, &x[i - half..=i + half]));
            }

            let tail = &x[n - window_length..];
            for i in (n - half)..n {
                let offset = i - (n - window_length);
                let t = T::from(offset as i64 - half as i64).unwrap_or_else(T::nan);
                y.push(T::dot(&fit.weights_at(t), tail));
            }

            Ok(y)
        }
        _ => {
            let mut gathered = vec![T::zero(); window_length];
            let y = (0..n)
                .map(|i| {
                    for (j, slot) in gathered.iter_mut().enumerate() {
                        let k = i as i64 + j as i64 - half as i64;
                        *slot = padded_sample(x, k, mode);
                    }
                    T::dot(&centre, &gathered)
                })
                .collect();
            Ok(y)
        }
    }
}

/// Smooth `x` as described by `spec`, with interp edges.
pub fn smooth(x: &[f64], spec: &SmoothingSpec) -> Result<Vec<f64>, ParityError> {
    savgol_filter(x, spec.window_length(), spec.polyorder(), EdgeMode::Interp)
}

/// Sample of `x` at a possibly out-of-range index under a padding mode.
fn padded_sample<T: Float>(x: &[T], k: i64, mode: EdgeMode) -> T {
    let n = x.len() as i64;
    if (0..n).contains(&k) {
        return x[k as usize];
    }
    match mode {
        EdgeMode::Constant => T::zero(),
        EdgeMode::Nearest => x[k.clamp(0, n - 1) as usize],
        EdgeMode::Wrap => x[k.rem_euclid(n) as usize],
        EdgeMode::Mirror | EdgeMode::Interp => {
            if n == 1 {
                return x[0];
            }
            let period = 2 * (n - 1);
            let mut idx = k.rem_euclid(period);
            if idx >= n {
                idx = period - idx;
            }
            x[idx as usize]
        }
    }
}
