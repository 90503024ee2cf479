//! Random placement with collision avoidance.
//!
//! Each word samples uniformly random centers inside the margins and
//! keeps the first collision-free one. The RNG is injected and seedable —
//! never a process global — so callers and tests can reproduce a layout
//! exactly by reusing a seed.
//!
//! Exhausted searches fall back to an incrementing grid slot (one shared
//! counter, six columns) clamped to the canvas bounds. A small bounded
//! rotation jitter adds visual variety without hurting legibility.

use rand::Rng;
use rand::rngs::SmallRng;

use crate::model::{NormalizedWord, PlacedWord, PlacementKind};
use crate::spatial::{CollisionField, WordRect};

use super::viewport::Viewport;

/// Configuration for the random strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomConfig {
    /// Placement attempts per word before falling back (default: 100).
    pub max_attempts: u32,
    /// Columns in the fallback grid (default: 6).
    pub fallback_columns: u32,
    /// Horizontal stride between fallback columns (default: 120.0).
    pub fallback_column_stride: f32,
    /// Vertical stride between fallback rows (default: 60.0).
    pub fallback_row_stride: f32,
    /// Maximum rotation jitter in degrees, applied as ± (default: 10.0).
    pub rotation_jitter: f32,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            fallback_columns: 6,
            fallback_column_stride: 120.0,
            fallback_row_stride: 60.0,
            rotation_jitter: 10.0,
        }
    }
}

/// Place words at random collision-free positions inside the margins.
///
/// Words must already be sorted by descending weight. Every word receives
/// a coordinate; exhausted searches resolve to fallback slots.
pub fn place_random(
    words: &[NormalizedWord],
    viewport: &Viewport,
    config: &RandomConfig,
    rng: &mut SmallRng,
) -> Vec<PlacedWord> {
    let mut placed = Vec::with_capacity(words.len());
    let mut field = CollisionField::new(viewport.padding);
    let mut fallback_slot = 0usize;

    for word in words {
        let (x, y, kind) = match random_search(word, viewport, config, &field, rng) {
            Some((x, y)) => (x, y, PlacementKind::Primary),
            None => {
                let (x, y) = next_fallback_slot(&mut fallback_slot, viewport, config);
                (x, y, PlacementKind::Fallback)
            }
        };

        let rotation = if config.rotation_jitter > 0.0 {
            rng.gen_range(-config.rotation_jitter..=config.rotation_jitter)
        } else {
            0.0
        };

        field.insert(WordRect::for_word(&word.text, word.font_size, x, y));
        placed.push(PlacedWord::at(word, x, y, rotation, kind));
    }

    placed
}

/// Sample random centers until one fits, or the budget runs out.
///
/// Returns None immediately when the word cannot physically fit between
/// the margins, so a degraded canvas doesn't burn RNG draws.
fn random_search(
    word: &NormalizedWord,
    viewport: &Viewport,
    config: &RandomConfig,
    field: &CollisionField,
    rng: &mut SmallRng,
) -> Option<(f32, f32)> {
    let usable = viewport.usable();
    let probe = WordRect::for_word(&word.text, word.font_size, 0.0, 0.0);
    let half_w = probe.width() / 2.0;
    let half_h = probe.height() / 2.0;

    let min_x = usable.min_x + half_w;
    let max_x = usable.max_x - half_w;
    let min_y = usable.min_y + half_h;
    let max_y = usable.max_y - half_h;
    if max_x <= min_x || max_y <= min_y {
        return None;
    }

    for _ in 0..config.max_attempts {
        let x = rng.gen_range(min_x..max_x);
        let y = rng.gen_range(min_y..max_y);
        let rect = WordRect::for_word(&word.text, word.font_size, x, y);
        if !field.collides(&rect) {
            return Some((x, y));
        }
    }

    None
}

/// Hand out the next fallback grid slot, clamped to the canvas bounds.
fn next_fallback_slot(
    slot: &mut usize,
    viewport: &Viewport,
    config: &RandomConfig,
) -> (f32, f32) {
    let columns = config.fallback_columns.max(1) as usize;
    let column = *slot % columns;
    let row = *slot / columns;
    *slot += 1;

    viewport.clamp(
        viewport.margin + column as f32 * config.fallback_column_stride,
        viewport.margin + row as f32 * config.fallback_row_stride,
    )
}
