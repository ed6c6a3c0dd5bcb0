//! Geometric primitives: Point and axis-aligned Rect.

use std::ops::Sub;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn dot(self, other: Point) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_min_max(min: Point, max: Point) -> Self {
        Self {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Smallest axis-aligned rectangle enclosing `points`, from one pass of
/// running per-axis min/max. `None` for an empty slice; a zero-size rect
/// when every point coincides.
pub fn bounding_rect(points: &[Point]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    let mut min = *first;
    let mut max = *first;

    for point in rest {
        if point.x < min.x {
            min.x = point.x;
        }
        if point.x > max.x {
            max.x = point.x;
        }
        if point.y < min.y {
            min.y = point.y;
        }
        if point.y > max.y {
            max.y = point.y;
        }
    }

    Some(Rect::from_min_max(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_rect_empty_is_none() {
        assert_eq!(bounding_rect(&[]), None);
    }

    #[test]
    fn test_bounding_rect_single_point_is_degenerate() {
        let rect = bounding_rect(&[Point::new(3.0, -2.0)]).unwrap();
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
        assert_eq!(rect.center(), Point::new(3.0, -2.0));
    }

    #[test]
    fn test_bounding_rect_encloses_all_points() {
        let points = [
            Point::new(1.0, 5.0),
            Point::new(-4.0, 2.0),
            Point::new(3.0, -1.0),
            Point::new(0.0, 0.0),
        ];
        let rect = bounding_rect(&points).unwrap();
        assert_eq!(rect.x, -4.0);
        assert_eq!(rect.y, -1.0);
        assert_eq!(rect.width, 7.0);
        assert_eq!(rect.height, 6.0);
        assert_eq!(rect.center(), Point::new(-0.5, 2.0));
    }

    #[test]
    fn test_point_subtraction_gives_delta() {
        let delta = Point::new(5.0, 1.0) - Point::new(2.0, 3.0);
        assert_eq!(delta, Point::new(3.0, -2.0));
    }

    #[test]
    fn test_point_finiteness() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f32::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f32::INFINITY).is_finite());
    }
}
