//! Linear algebra backend for least-squares polynomial fitting.
//!
//! ## Purpose
//!
//! This module bridges generic `Float` code to nalgebra for the one dense
//! solve the crate needs: the least-squares projector `(AᵀA)⁻¹Aᵀ` of a
//! Vandermonde design matrix, used to derive Savitzky-Golay weights. It also
//! provides the dot product used by the filtering inner loops.
//!
//! ## Design notes
//!
//! * Uses a thin QR decomposition of the design matrix (Householder
//!   reflections) and back-substitution, avoiding the squared condition
//!   number of the normal equations.
//! * Falls back to the SVD pseudo-inverse when the triangular factor is
//!   singular.
//! * The f64 dot product accumulates in `f64x2` lanes.
//! * Matrices cross the trait boundary as column-major slices.

use num_traits::Float;
use wide::f64x2;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Least-squares projector of a `rows x cols` column-major design matrix.
    ///
    /// Returns the `cols x rows` matrix `P` (column-major) such that `P * y`
    /// is the least-squares coefficient vector for observations `y`.
    fn least_squares_projector(design: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>>;

    /// Inner product of two equal-length slices.
    fn dot(a: &[Self], b: &[Self]) -> Self;
}

impl FloatLinalg for f64 {
    #[inline]
    fn least_squares_projector(design: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        nalgebra_backend::projector_f64(design, rows, cols)
    }

    #[inline]
    fn dot(a: &[Self], b: &[Self]) -> Self {
        dot_f64(a, b)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn least_squares_projector(design: &[Self], rows: usize, cols: usize) -> Option<Vec<Self>> {
        nalgebra_backend::projector_f32(design, rows, cols)
    }

    #[inline]
    fn dot(a: &[Self], b: &[Self]) -> Self {
        a.iter().zip(b).fold(0.0, |acc, (&x, &y)| acc + x * y)
    }
}

// ============================================================================
// SIMD Dot Product
// ============================================================================

/// Dot product over `f64x2` lanes with a scalar tail.
pub fn dot_f64(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    let mut acc = f64x2::splat(0.0);

    let pairs = n / 2;
    for k in 0..pairs {
        let i = 2 * k;
        let x = f64x2::new([a[i], a[i + 1]]);
        let y = f64x2::new([b[i], b[i + 1]]);
        acc += x * y;
    }

    let mut sum = acc.reduce_add();
    for i in (2 * pairs)..n {
        sum += a[i] * b[i];
    }
    sum
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use nalgebra::DMatrix;

    /// Least-squares projector using f64 precision.
    pub fn projector_f64(design: &[f64], rows: usize, cols: usize) -> Option<Vec<f64>> {
        if rows < cols || design.len() != rows * cols {
            return None;
        }
        let a = DMatrix::from_column_slice(rows, cols, design);

        let qr = a.clone().qr();
        let q = qr.q();
        let r = qr.r();
        if let Some(p) = r.solve_upper_triangular(&q.transpose()) {
            if p.iter().all(|v| v.is_finite()) {
                return Some(p.as_slice().to_vec());
            }
        }

        a.pseudo_inverse(f64::EPSILON * 100.0)
            .ok()
            .map(|p: DMatrix<f64>| p.as_slice().to_vec())
    }

    /// Least-squares projector using f32 precision.
    pub fn projector_f32(design: &[f32], rows: usize, cols: usize) -> Option<Vec<f32>> {
        if rows < cols || design.len() != rows * cols {
            return None;
        }
        let a = DMatrix::from_column_slice(rows, cols, design);

        let qr = a.clone().qr();
        let q = qr.q();
        let r = qr.r();
        if let Some(p) = r.solve_upper_triangular(&q.transpose()) {
            if p.iter().all(|v| v.is_finite()) {
                return Some(p.as_slice().to_vec());
            }
        }

        a.pseudo_inverse(f32::EPSILON * 100.0)
            .ok()
            .map(|p: DMatrix<f32>| p.as_slice().to_vec())
    }
}
