//! Immutable parameter types shared by both designers and both smoothers.
//!
//! ## Purpose
//!
//! This module defines the value types handed to the local library and to the
//! reference oracle: [`FilterSpec`] for FIR design and [`SmoothingSpec`] for
//! Savitzky-Golay smoothing.
//!
//! ## Design notes
//!
//! * **Validated on construction**: `FilterSpec::new` and `SmoothingSpec::new`
//!   reject out-of-range parameters, so downstream code never re-checks them.
//! * **Named fields**: Smoothing parameters are named rather than positional.
//!   Octave's `sgolayfilt(x, order, length)` and the local
//!   `savgol_filter(x, window_length, polyorder)` order them differently, and
//!   each oracle maps the fields to its own convention.
//!
//! ## Invariants
//!
//! * `0 < cutoff < 1`.
//! * `window_length` is odd and `polyorder < window_length`.

use core::fmt;

use serde::Serialize;

use crate::engine::validator::Validator;
use crate::math::window::Window;
use crate::primitives::errors::ParityError;

// ============================================================================
// Bands
// ============================================================================

/// Frequency region checked by the acceptance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Band {
    /// Region the filter must preserve.
    Pass,

    /// Region the filter must attenuate.
    Stop,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Pass => write!(f, "pass-band"),
            Band::Stop => write!(f, "stop-band"),
        }
    }
}

// ============================================================================
// FIR Design Parameters
// ============================================================================

/// Response shape of a windowed-sinc design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FilterKind {
    /// Pass below the cutoff; unit gain at DC.
    #[default]
    LowPass,

    /// Pass above the cutoff; unit gain at Nyquist. Needs an odd tap count.
    HighPass,
}

/// FIR filter design parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterSpec {
    order: usize,
    cutoff: f64,
    window: Window,
    kind: FilterKind,
}

impl FilterSpec {
    /// Low-pass, Hamming-windowed design of the given order (`order + 1` taps).
    pub fn new(order: usize, cutoff: f64) -> Result<Self, ParityError> {
        Validator::validate_cutoff(cutoff)?;
        Ok(Self {
            order,
            cutoff,
            window: Window::default(),
            kind: FilterKind::default(),
        })
    }

    /// Replace the design window.
    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    /// Replace the response shape.
    pub fn with_kind(mut self, kind: FilterKind) -> Result<Self, ParityError> {
        Validator::validate_kind(kind, self.numtaps())?;
        self.kind = kind;
        Ok(self)
    }

    /// Filter order (taps minus one).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of taps, `order + 1`.
    pub fn numtaps(&self) -> usize {
        self.order + 1
    }

    /// Normalized cutoff (1 = Nyquist).
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Design window.
    pub fn window(&self) -> Window {
        self.window
    }

    /// Response shape.
    pub fn kind(&self) -> FilterKind {
        self.kind
    }
}

// ============================================================================
// Savitzky-Golay Parameters
// ============================================================================

/// Savitzky-Golay smoothing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SmoothingSpec {
    window_length: usize,
    polyorder: usize,
}

impl SmoothingSpec {
    /// Window of `window_length` samples fitted with a polynomial of `polyorder`.
    pub fn new(window_length: usize, polyorder: usize) -> Result<Self, ParityError> {
        Validator::validate_smoothing(window_length, polyorder)?;
        Ok(Self {
            window_length,
            polyorder,
        })
    }

    /// Number of samples in each local fit.
    pub fn window_length(&self) -> usize {
        self.window_length
    }

    /// Degree of the fitted polynomial.
    pub fn polyorder(&self) -> usize {
        self.polyorder
    }
}
