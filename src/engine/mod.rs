//! Layer 6: Engine
//!
//! # Purpose
//!
//! Orchestration of the two parity checks:
//! - Parameter validation
//! - Scoped reference sessions
//! - FIR design and smoothing checks
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Engine ← You are here
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// FIR design equivalence check.
pub mod fir_check;

/// Scoped oracle sessions.
pub mod session;

/// Savitzky-Golay equivalence check.
pub mod smoothing_check;

/// Parameter validation.
pub mod validator;
