//! Rect and point value objects

use serde::{Deserialize, Serialize};

/// A point in the control's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle.
///
/// Origin is the top-left corner. Sizes produced by [`Rect::inset`] are never
/// negative: an inset larger than the rect collapses it to an empty rect
/// centred on the original centre.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect at the origin with the given size
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Smaller of width and height
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// True when the rect has no drawable area (also true for NaN sizes)
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    ///
    /// Negative insets grow the rect. Non-finite insets are treated as zero.
    pub fn inset(&self, dx: f32, dy: f32) -> Rect {
        let dx = if dx.is_finite() { dx } else { 0.0 };
        let dy = if dy.is_finite() { dy } else { 0.0 };

        let (x, width) = collapse_axis(self.x, self.width, dx);
        let (y, height) = collapse_axis(self.y, self.height, dy);

        Rect::new(x, y, width, height)
    }

    /// Half-open hit test: the min edges are inside, the max edges are not
    pub fn contains(&self, point: Point) -> bool {
        !self.is_empty()
            && point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Component-wise linear interpolation
    pub fn lerp(&self, to: &Rect, t: f32) -> Rect {
        Rect::new(
            lerp(self.x, to.x, t),
            lerp(self.y, to.y, t),
            lerp(self.width, to.width, t),
            lerp(self.height, to.height, t),
        )
    }
}

fn collapse_axis(origin: f32, size: f32, inset: f32) -> (f32, f32) {
    let shrunk = size - 2.0 * inset;
    if shrunk >= 0.0 {
        (origin + inset, shrunk)
    } else {
        (origin + size / 2.0, 0.0)
    }
}

pub(crate) fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_symmetrically() {
        let r = Rect::from_size(100.0, 50.0).inset(10.0, 5.0);
        assert_eq!(r, Rect::new(10.0, 5.0, 80.0, 40.0));
    }

    #[test]
    fn negative_inset_grows() {
        let r = Rect::new(10.0, 10.0, 10.0, 10.0).inset(-2.0, -2.0);
        assert_eq!(r, Rect::new(8.0, 8.0, 14.0, 14.0));
    }

    #[test]
    fn oversized_inset_collapses_to_center() {
        let r = Rect::from_size(10.0, 20.0).inset(8.0, 1.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.x, 5.0);
        assert_eq!(r.height, 18.0);
        assert!(r.is_empty());
    }

    #[test]
    fn non_finite_inset_is_ignored() {
        let r = Rect::from_size(10.0, 10.0).inset(f32::NAN, f32::INFINITY);
        assert_eq!(r, Rect::from_size(10.0, 10.0));
    }

    #[test]
    fn empty_detection() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::from_size(0.0, 10.0).is_empty());
        assert!(Rect::from_size(f32::NAN, 10.0).is_empty());
        assert!(!Rect::from_size(1.0, 1.0).is_empty());
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::from_size(10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(9.9, 9.9)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
        assert!(!r.contains(Point::new(-0.1, 5.0)));
        assert!(!Rect::ZERO.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), Rect::new(5.0, 10.0, 20.0, 25.0));
    }
}
