//! R-tree backed collision detection for placed words.
//!
//! Each placed word's footprint is approximated as an axis-aligned
//! rectangle: width scales with character count and font size, height is
//! the font size. Two words collide when their padding-inflated rectangles
//! intersect on both axes.
//!
//! Placed rectangles are kept in an rstar R*-tree so each candidate check
//! is an O(log n) envelope query rather than a scan over every placed
//! word; the envelope stored per rect is pre-inflated by half the padding
//! so the query only has to inflate the candidate by the other half.

use rstar::{AABB, RTree, RTreeObject};

/// Approximate glyph advance as a fraction of font size.
const CHAR_WIDTH_RATIO: f32 = 0.62;

/// Axis-aligned, center-anchored word footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordRect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl WordRect {
    /// Rectangle of the given size centered on (x, y).
    pub fn centered(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x: x - width / 2.0,
            min_y: y - height / 2.0,
            max_x: x + width / 2.0,
            max_y: y + height / 2.0,
        }
    }

    /// Estimated footprint of `text` rendered at `font_size`, centered on
    /// (x, y).
    pub fn for_word(text: &str, font_size: f32, x: f32, y: f32) -> Self {
        let width = text.chars().count() as f32 * font_size * CHAR_WIDTH_RATIO;
        Self::centered(x, y, width, font_size)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Grow the rect by `amount` on every side.
    pub fn inflated(&self, amount: f32) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }

    /// True when both rects, each inflated by half of `padding`, intersect
    /// on both axes. Equivalent to requiring a gap of at least `padding`
    /// between the raw rects.
    pub fn intersects_padded(&self, other: &Self, padding: f32) -> bool {
        let a = self.inflated(padding / 2.0);
        let b = other.inflated(padding / 2.0);
        a.min_x <= b.max_x && a.max_x >= b.min_x && a.min_y <= b.max_y && a.max_y >= b.min_y
    }

    /// True when this rect lies fully inside `outer`.
    pub fn within(&self, outer: &Self) -> bool {
        self.min_x >= outer.min_x
            && self.min_y >= outer.min_y
            && self.max_x <= outer.max_x
            && self.max_y <= outer.max_y
    }
}

/// A rect stored in the index, with its envelope pre-inflated by half of
/// the field's padding.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PaddedRect {
    aabb: AABB<[f32; 2]>,
}

impl RTreeObject for PaddedRect {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.aabb
    }
}

/// Collision index over the words placed so far in one layout call.
///
/// One field is allocated per layout invocation and discarded with it;
/// nothing is shared between calls.
pub struct CollisionField {
    tree: RTree<PaddedRect>,
    padding: f32,
}

impl CollisionField {
    /// Create an empty field with the given inter-word padding in pixels.
    pub fn new(padding: f32) -> Self {
        Self {
            tree: RTree::new(),
            padding,
        }
    }

    /// Record a placed word's footprint.
    pub fn insert(&mut self, rect: WordRect) {
        let inflated = rect.inflated(self.padding / 2.0);
        self.tree.insert(PaddedRect {
            aabb: AABB::from_corners(
                [inflated.min_x, inflated.min_y],
                [inflated.max_x, inflated.max_y],
            ),
        });
    }

    /// True when `candidate` would overlap any placed word under the
    /// padded-rectangle test. An empty field never collides; the query
    /// short-circuits on the first hit.
    pub fn collides(&self, candidate: &WordRect) -> bool {
        let inflated = candidate.inflated(self.padding / 2.0);
        let envelope = AABB::from_corners(
            [inflated.min_x, inflated.min_y],
            [inflated.max_x, inflated.max_y],
        );
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .next()
            .is_some()
    }

    /// Number of placed footprints recorded so far.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Check if the field is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_for_word_dimensions() {
        let rect = WordRect::for_word("tesla", 20.0, 100.0, 50.0);
        // 5 chars * 20px * 0.62 = 62px wide, 20px tall.
        assert!((rect.width() - 62.0).abs() < 1e-4);
        assert_eq!(rect.height(), 20.0);
        // Center-anchored.
        assert!((rect.min_x + rect.max_x - 200.0).abs() < 1e-4);
        assert!((rect.min_y + rect.max_y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_padded_intersection_gap_threshold() {
        let a = WordRect::centered(0.0, 0.0, 10.0, 10.0);
        // 6px gap between raw rects: collides under 8px padding.
        let near = WordRect::centered(16.0, 0.0, 10.0, 10.0);
        assert!(a.intersects_padded(&near, 8.0));
        // 10px gap: clear of 8px padding.
        let far = WordRect::centered(20.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects_padded(&far, 8.0));
    }

    #[test]
    fn test_separated_on_one_axis_only() {
        let a = WordRect::centered(0.0, 0.0, 10.0, 10.0);
        // Overlapping in x but well clear in y.
        let b = WordRect::centered(2.0, 100.0, 10.0, 10.0);
        assert!(!a.intersects_padded(&b, 8.0));
    }

    #[test]
    fn test_within() {
        let outer = WordRect {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 100.0,
            max_y: 100.0,
        };
        assert!(WordRect::centered(50.0, 50.0, 20.0, 10.0).within(&outer));
        assert!(!WordRect::centered(95.0, 50.0, 20.0, 10.0).within(&outer));
    }

    #[test]
    fn test_empty_field_never_collides() {
        let field = CollisionField::new(8.0);
        let candidate = WordRect::for_word("anything", 48.0, 0.0, 0.0);
        assert!(!field.collides(&candidate));
        assert!(field.is_empty());
    }

    #[test]
    fn test_field_detects_overlap() {
        let mut field = CollisionField::new(8.0);
        field.insert(WordRect::centered(100.0, 100.0, 60.0, 20.0));
        assert_eq!(field.len(), 1);

        // Dead center on the placed word.
        assert!(field.collides(&WordRect::centered(100.0, 100.0, 30.0, 16.0)));
        // Inside the padding band.
        assert!(field.collides(&WordRect::centered(140.0, 100.0, 20.0, 16.0)));
        // Far away.
        assert!(!field.collides(&WordRect::centered(300.0, 300.0, 20.0, 16.0)));
    }

    #[test]
    fn test_field_matches_pairwise_check() {
        let padding = 8.0;
        let mut field = CollisionField::new(padding);
        let placed = [
            WordRect::centered(50.0, 50.0, 40.0, 18.0),
            WordRect::centered(200.0, 80.0, 80.0, 30.0),
            WordRect::centered(120.0, 200.0, 25.0, 16.0),
        ];
        for rect in &placed {
            field.insert(*rect);
        }

        let candidates = [
            WordRect::centered(55.0, 52.0, 30.0, 16.0),
            WordRect::centered(400.0, 400.0, 30.0, 16.0),
            WordRect::centered(245.0, 80.0, 20.0, 16.0),
        ];
        for candidate in &candidates {
            let pairwise = placed
                .iter()
                .any(|p| p.intersects_padded(candidate, padding));
            assert_eq!(field.collides(candidate), pairwise);
        }
    }
}
