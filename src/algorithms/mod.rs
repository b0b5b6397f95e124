//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! The local signal library that the reference environment is compared
//! against:
//! - Window-method FIR design
//! - Frequency response evaluation
//! - Savitzky-Golay smoothing
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Window-method FIR design.
pub mod fir;

/// Frequency response evaluation.
pub mod response;

/// Savitzky-Golay smoothing.
pub mod savgol;
