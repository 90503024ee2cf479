//! Spatial collision detection for word placement.
//!
//! This module provides an R-tree backed collision field for efficient
//! padded-rectangle overlap queries against placed words.

mod collision;

pub use collision::{CollisionField, WordRect};
