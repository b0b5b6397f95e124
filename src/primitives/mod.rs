//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Parameter value types and the crate-wide error type.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// FIR and Savitzky-Golay parameter types.
pub mod spec;
