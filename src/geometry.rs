// SPDX-FileCopyrightText: The mackie-surface authors
// SPDX-License-Identifier: MPL-2.0

use float_cmp::{ApproxEq, F32Margin};

/// Axis-aligned rectangle in abstract grid units.
///
/// The origin is the upper left corner of the panel, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, derive_more::Display)]
#[display("({x}, {y}) {width}x{height}")]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Finite, non-negative position and size.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let Self {
            x,
            y,
            width,
            height,
        } = *self;
        [x, y, width, height]
            .into_iter()
            .all(|value| value.is_finite() && value >= 0.0)
    }

    /// Check if the interiors intersect.
    ///
    /// Rectangles that only share an edge do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Smallest rectangle that contains both rectangles.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}

impl ApproxEq for Rect {
    type Margin = F32Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin)
            && self.y.approx_eq(other.y, margin)
            && self.width.approx_eq(other.width, margin)
            && self.height.approx_eq(other.height, margin)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::Rect;

    #[test]
    fn touching_edges_do_not_overlap() {
        let left = Rect::new(0.0, 0.0, 2.0, 2.0);
        let right = Rect::new(2.0, 0.0, 2.0, 2.0);
        assert!(!left.overlaps(&right));
        assert!(!right.overlaps(&left));
        let below = Rect::new(0.0, 2.0, 2.0, 2.0);
        assert!(!left.overlaps(&below));
    }

    #[test]
    fn overlapping_interiors() {
        let outer = Rect::new(0.0, 0.0, 4.0, 4.0);
        let inner = Rect::new(1.0, 1.0, 1.0, 1.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn validity() {
        assert!(Rect::new(0.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!Rect::new(-0.25, 0.0, 1.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, f32::NAN, 1.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, f32::INFINITY, 1.0).is_valid());
    }

    #[test]
    fn union() {
        let union = Rect::new(1.0, 2.0, 1.0, 1.0).union(&Rect::new(3.0, 0.5, 0.5, 0.5));
        assert!(approx_eq!(Rect, Rect::new(1.0, 0.5, 2.5, 2.5), union));
    }

    #[test]
    fn display() {
        assert_eq!("(1.5, 2) 3x0.25", Rect::new(1.5, 2.0, 3.0, 0.25).to_string());
    }
}
