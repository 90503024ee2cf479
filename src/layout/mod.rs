//! Word cloud layout strategies.
//!
//! This module provides the CPU-side placement algorithms that compute
//! non-overlapping screen positions for normalized words, plus the
//! orchestrator that validates input, sorts by weight, and dispatches to
//! the configured strategy.

pub mod grid;
pub mod orchestrator;
pub mod random;
pub mod spiral;
pub mod viewport;

pub use grid::GridConfig;
pub use orchestrator::{LayoutError, LayoutOptions, StrategyId, compute_layout};
pub use random::RandomConfig;
pub use spiral::SpiralConfig;
pub use viewport::Viewport;
