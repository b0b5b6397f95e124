//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! Acceptance criteria and result export:
//! - Band magnitude bounds
//! - Element-wise closeness
//! - CSV export for plotting
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pass-band and stop-band bounds.
pub mod bounds;

/// Closeness comparison.
pub mod closeness;

/// CSV export.
pub mod export;
