//! Layer 2: Math
//!
//! # Purpose
//!
//! Pure numeric building blocks with no filter-specific logic:
//! - Tapering windows
//! - Least-squares projection and dot products
//! - Phase unwrapping
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Engine
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear algebra backend (nalgebra, SIMD dot).
pub mod linalg;

/// Phase unwrapping.
pub mod phase;

/// FIR design windows.
pub mod window;
