//! Deterministic grid placement.
//!
//! Words are assigned row-major to the cells of a near-square grid
//! (`cols = min(ceil(sqrt(n)), 6)`), each centered in its cell. No
//! search, no collision checks, no rotation — the grid trades visual
//! organicness for guaranteed zero overlap between cell centers and O(n)
//! cost.
//!
//! Fonts are re-derived with a slightly smaller ceiling than the other
//! strategies, then shrunk further when a word's box would still spill
//! out of its cell. A word always stays inside its own cell, so grid
//! layouts honor the margins whenever the spiral and random ones do.

use crate::model::{NormalizedWord, PlacedWord, PlacementKind, font_size_for};
use crate::spatial::WordRect;

use super::viewport::Viewport;

/// Configuration for the grid strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Upper bound on grid columns (default: 6).
    pub max_columns: u32,
    /// Smallest grid font size in pixels (default: 16.0).
    pub min_font: f32,
    /// Largest grid font size in pixels (default: 40.0).
    pub max_font: f32,
    /// Font growth per unit of weight (default: 28.0).
    pub font_scale: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_columns: 6,
            min_font: 16.0,
            max_font: 40.0,
            font_scale: 28.0,
        }
    }
}

/// Place words on cell centers of a near-square grid, row-major in
/// sorted order.
pub fn place_grid(
    words: &[NormalizedWord],
    viewport: &Viewport,
    config: &GridConfig,
) -> Vec<PlacedWord> {
    if words.is_empty() {
        return Vec::new();
    }

    let count = words.len();
    let columns = ((count as f32).sqrt().ceil() as u32)
        .min(config.max_columns.max(1))
        .max(1) as usize;
    let rows = count.div_ceil(columns);

    // Cells tile the margin-inset usable rect, so edge cells keep their
    // words off the canvas border like the other strategies do.
    let usable = viewport.usable();
    let cell_width = usable.width() / columns as f32;
    let cell_height = usable.height() / rows as f32;

    words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let column = index % columns;
            let row = index / columns;
            let x = usable.min_x + (column as f32 + 0.5) * cell_width;
            let y = usable.min_y + (row as f32 + 0.5) * cell_height;

            let mut placed = PlacedWord::at(word, x, y, 0.0, PlacementKind::Primary);
            placed.font_size = fit_to_cell(
                &word.text,
                font_size_for(word.weight, config.min_font, config.max_font, config.font_scale),
                cell_width,
                cell_height,
            );
            placed
        })
        .collect()
}

/// Shrink a font so the word's box fits its cell. Capped fonts are
/// floored to whole pixels; the recomputed box must not round back over
/// the cell edge.
fn fit_to_cell(text: &str, font_size: f32, cell_width: f32, cell_height: f32) -> f32 {
    let probe = WordRect::for_word(text, font_size, 0.0, 0.0);
    let scale = (cell_width / probe.width())
        .min(cell_height / probe.height())
        .min(1.0);
    if scale < 1.0 {
        (font_size * scale).floor().max(1.0)
    } else {
        font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NormalizeConfig, Sentiment, WeightedWord, normalize, sort_by_weight_desc};

    fn viewport() -> Viewport {
        Viewport {
            width: 800.0,
            height: 500.0,
            margin: 16.0,
            padding: 8.0,
        }
    }

    fn normalized(count: usize) -> Vec<crate::model::NormalizedWord> {
        let words: Vec<WeightedWord> = (0..count)
            .map(|i| {
                let frequency = 90.0 - (i as f32 * 70.0 / count as f32);
                WeightedWord::new(format!("word{i}"), frequency, Sentiment::Neutral)
            })
            .collect();
        let mut normalized = normalize(&words, &NormalizeConfig::default());
        sort_by_weight_desc(&mut normalized);
        normalized
    }

    #[test]
    fn test_empty_input() {
        let placed = place_grid(&[], &viewport(), &GridConfig::default());
        assert!(placed.is_empty());
    }

    #[test]
    fn test_fifteen_words_form_four_by_four() {
        // ceil(sqrt(15)) = 4 columns, ceil(15 / 4) = 4 rows.
        let words = normalized(15);
        let placed = place_grid(&words, &viewport(), &GridConfig::default());
        assert_eq!(placed.len(), 15);

        // Usable rect is 768 x 468 behind a 16px margin; cell size
        // 192 x 117, so the first cell centers at (112, 74.5).
        assert_eq!(placed[0].x, 112.0);
        assert_eq!(placed[0].y, 74.5);
        assert_eq!(placed[3].x, 688.0);
        assert_eq!(placed[4].y, 191.5);

        // No two words share a cell center.
        for (i, a) in placed.iter().enumerate() {
            for b in placed.iter().skip(i + 1) {
                assert!(a.x != b.x || a.y != b.y, "{} and {} share a cell", a.text, b.text);
            }
        }
    }

    #[test]
    fn test_columns_capped_at_six() {
        let words = normalized(100);
        let placed = place_grid(&words, &viewport(), &GridConfig::default());
        // 100 words, 6 columns -> 17 rows; the seventh word wraps to row 1.
        assert!((placed[6].y - (placed[6 + 6].y - 468.0 / 17.0)).abs() < 1e-3);
        let distinct_x: std::collections::BTreeSet<i64> =
            placed.iter().map(|p| p.x.round() as i64).collect();
        assert_eq!(distinct_x.len(), 6);
    }

    #[test]
    fn test_font_uses_grid_ceiling() {
        let words = normalized(4);
        let placed = place_grid(&words, &viewport(), &GridConfig::default());
        // Heaviest word: 16 + 1.0 * 28 = 44, clamped to the grid max of 40.
        assert_eq!(placed[0].font_size, 40.0);
        for word in &placed {
            assert!(word.font_size >= 16.0 && word.font_size <= 40.0);
            assert_eq!(word.rotation_degrees, 0.0);
            assert_eq!(word.placement, PlacementKind::Primary);
        }
    }

    #[test]
    fn test_footprints_respect_margins() {
        // Word boxes, not just cell centers, must stay inside the
        // margin-inset usable rect when the canvas isn't overcrowded.
        let words: Vec<WeightedWord> = (0..15)
            .map(|i| {
                WeightedWord::new(format!("battery{i}"), 90.0 - i as f32 * 4.0, Sentiment::Neutral)
            })
            .collect();
        let mut input = normalize(&words, &NormalizeConfig::default());
        sort_by_weight_desc(&mut input);
        let placed = place_grid(&input, &viewport(), &GridConfig::default());

        // The heaviest word is wider than its 192px cell at the full
        // 40px ceiling, so its font shrinks to keep the box in-cell.
        assert_eq!(placed[0].font_size, 38.0);

        let usable = viewport().usable();
        for word in &placed {
            let rect = WordRect::for_word(&word.text, word.font_size, word.x, word.y);
            assert!(
                rect.within(&usable),
                "{} at ({}, {}) escapes the margins",
                word.text,
                word.x,
                word.y
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let words = normalized(12);
        let first = place_grid(&words, &viewport(), &GridConfig::default());
        let second = place_grid(&words, &viewport(), &GridConfig::default());
        assert_eq!(first, second);
    }
}
