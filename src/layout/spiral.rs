//! Archimedean spiral placement — the default word cloud strategy.
//!
//! The highest-weight word sits at the canvas center and anchors visual
//! attention; every later word searches outward along a spiral around
//! that center until it finds a spot that is inside the margins and clear
//! of everything already placed.
//!
//! # Algorithm
//!
//! Per word at sorted index `i > 0`:
//! 1. Start at the configured radius with a phase offset of
//!    `i * angle_step` so consecutive words don't walk the same path.
//! 2. Each attempt advances the angle by `angle_step`; when the
//!    accumulated angle passes `(i + 1) * 2π` it resets to the phase and
//!    the radius grows by `radius_step`.
//! 3. Accept the first sample whose footprint is fully inside the margins
//!    and collision-free.
//! 4. After `max_attempts` samples, place the word on a deterministic
//!    row-major fallback slot instead. Fallback slots may overlap; that
//!    trade-off favors termination over perfect packing.
//!
//! Fallback footprints still enter the collision field so later primary
//! placements route around them. Rotation is fixed at 0 for legibility.

use std::f32::consts::TAU;

use crate::model::{NormalizedWord, PlacedWord, PlacementKind};
use crate::spatial::{CollisionField, WordRect};

use super::viewport::Viewport;

/// Configuration for the spiral strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralConfig {
    /// Radius of the first spiral sample (default: 60.0).
    pub start_radius: f32,
    /// Angle advance per attempt in radians (default: 0.8).
    pub angle_step: f32,
    /// Radius growth per full revolution (default: 12.0).
    pub radius_step: f32,
    /// Placement attempts per word before falling back (default: 150).
    pub max_attempts: u32,
    /// Columns in the fallback grid (default: 8).
    pub fallback_columns: u32,
    /// Vertical stride between fallback rows (default: 50.0).
    pub fallback_row_stride: f32,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            start_radius: 60.0,
            angle_step: 0.8,
            radius_step: 12.0,
            max_attempts: 150,
            fallback_columns: 8,
            fallback_row_stride: 50.0,
        }
    }
}

/// Place words along an Archimedean spiral around the canvas center.
///
/// Words must already be sorted by descending weight. Every word receives
/// a coordinate; exhausted searches resolve to fallback slots rather than
/// failing.
pub fn place_spiral(
    words: &[NormalizedWord],
    viewport: &Viewport,
    config: &SpiralConfig,
) -> Vec<PlacedWord> {
    let mut placed = Vec::with_capacity(words.len());
    let mut field = CollisionField::new(viewport.padding);
    let (cx, cy) = viewport.center();

    for (index, word) in words.iter().enumerate() {
        let (x, y, kind) = if index == 0 {
            // The dominant word always anchors the center, even on a
            // canvas too small to contain it.
            (cx, cy, PlacementKind::Primary)
        } else if let Some((x, y)) = spiral_search(word, index, cx, cy, viewport, config, &field) {
            (x, y, PlacementKind::Primary)
        } else {
            let (x, y) = fallback_slot(index, viewport, config);
            (x, y, PlacementKind::Fallback)
        };

        field.insert(WordRect::for_word(&word.text, word.font_size, x, y));
        placed.push(PlacedWord::at(word, x, y, 0.0, kind));
    }

    placed
}

/// Walk the spiral for one word. Returns the first acceptable center, or
/// None once the attempt budget is spent.
fn spiral_search(
    word: &NormalizedWord,
    index: usize,
    cx: f32,
    cy: f32,
    viewport: &Viewport,
    config: &SpiralConfig,
    field: &CollisionField,
) -> Option<(f32, f32)> {
    let usable = viewport.usable();
    let phase = index as f32 * config.angle_step;
    let revolution_limit = (index + 1) as f32 * TAU;

    let mut angle = phase;
    let mut radius = config.start_radius;

    for _ in 0..config.max_attempts {
        let x = cx + radius * angle.cos();
        let y = cy + radius * angle.sin();

        let rect = WordRect::for_word(&word.text, word.font_size, x, y);
        if rect.within(&usable) && !field.collides(&rect) {
            return Some((x, y));
        }

        angle += config.angle_step;
        if angle > revolution_limit {
            angle = phase;
            radius += config.radius_step;
        }
    }

    None
}

/// Deterministic row-major slot for a word whose search was exhausted.
fn fallback_slot(index: usize, viewport: &Viewport, config: &SpiralConfig) -> (f32, f32) {
    let columns = config.fallback_columns.max(1) as usize;
    let column_stride = (viewport.width - 2.0 * viewport.margin) / columns as f32;

    let x = viewport.margin + (index % columns) as f32 * column_stride;
    let y = viewport.margin + (index / columns) as f32 * config.fallback_row_stride;
    (x, y)
}
