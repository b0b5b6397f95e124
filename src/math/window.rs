//! Symmetric tapering windows for windowed-sinc FIR design.
//!
//! ## Purpose
//!
//! This module provides the window functions applied to the ideal (sinc)
//! impulse response during FIR design.
//!
//! ## Design notes
//!
//! * **Symmetric**: All windows are the symmetric (filter design) variant,
//!   with the denominator `N - 1`, matching Octave's `hamming(N)` and scipy's
//!   `get_window(..., fftbins=False)`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * A window of length 1 is `[1]`; a window of length 0 is empty.
//! * `w[i] == w[N - 1 - i]` up to rounding.

use core::f64::consts::PI;

use num_traits::Float;
use serde::Serialize;

/// Tapering window used by the FIR designer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Window {
    /// `0.54 - 0.46 cos(2πn/(N-1))`.
    #[default]
    Hamming,

    /// `0.5 - 0.5 cos(2πn/(N-1))`, zero at both ends.
    Hann,

    /// `0.42 - 0.5 cos(2πn/(N-1)) + 0.08 cos(4πn/(N-1))`.
    Blackman,

    /// All ones (truncated sinc).
    Rectangular,
}

impl Window {
    /// Evaluate the window at `len` points.
    pub fn coefficients<T: Float>(&self, len: usize) -> Vec<T> {
        match len {
            0 => return Vec::new(),
            1 => return vec![T::one()],
            _ => {}
        }

        let denom = (len - 1) as f64;
        (0..len)
            .map(|n| {
                let phase = 2.0 * PI * n as f64 / denom;
                let w = match self {
                    Window::Hamming => 0.54 - 0.46 * phase.cos(),
                    Window::Hann => 0.5 - 0.5 * phase.cos(),
                    Window::Blackman => 0.42 - 0.5 * phase.cos() + 0.08 * (2.0 * phase).cos(),
                    Window::Rectangular => 1.0,
                };
                T::from(w).unwrap_or_else(T::nan)
            })
            .collect()
    }

    /// Name of the Octave function producing the same window.
    pub fn octave_name(&self) -> &'static str {
        match self {
            Window::Hamming => "hamming",
            Window::Hann => "hann",
            Window::Blackman => "blackman",
            Window::Rectangular => "boxcar",
        }
    }
}
