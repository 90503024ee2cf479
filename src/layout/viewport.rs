//! Canvas viewport shared by all layout strategies.

use crate::spatial::WordRect;

/// Target canvas geometry for one layout call.
///
/// `margin` insets the usable region on every side; `padding` is the
/// minimum gap enforced between placed words by the collision field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub padding: f32,
}

impl Viewport {
    /// Canvas center point.
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// The margin-inset region words should stay inside.
    pub fn usable(&self) -> WordRect {
        WordRect {
            min_x: self.margin,
            min_y: self.margin,
            max_x: self.width - self.margin,
            max_y: self.height - self.margin,
        }
    }

    /// Clamp a point into the margin-inset region. Used by fallback slots
    /// so degraded placements still land on the canvas when possible.
    pub fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        let usable = self.usable();
        if usable.max_x < usable.min_x || usable.max_y < usable.min_y {
            // Canvas smaller than its margins; nothing sensible to clamp to.
            return (x, y);
        }
        (
            x.clamp(usable.min_x, usable.max_x),
            y.clamp(usable.min_y, usable.max_y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let viewport = Viewport {
            width: 800.0,
            height: 500.0,
            margin: 16.0,
            padding: 8.0,
        };
        assert_eq!(viewport.center(), (400.0, 250.0));
    }

    #[test]
    fn test_usable_insets_margin() {
        let viewport = Viewport {
            width: 800.0,
            height: 500.0,
            margin: 16.0,
            padding: 8.0,
        };
        let usable = viewport.usable();
        assert_eq!(usable.min_x, 16.0);
        assert_eq!(usable.max_x, 784.0);
        assert_eq!(usable.max_y, 484.0);
    }

    #[test]
    fn test_clamp_degenerate_canvas() {
        let viewport = Viewport {
            width: 10.0,
            height: 10.0,
            margin: 16.0,
            padding: 8.0,
        };
        // Margins exceed the canvas; points pass through unchanged.
        assert_eq!(viewport.clamp(3.0, 7.0), (3.0, 7.0));
    }
}
