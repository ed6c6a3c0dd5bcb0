//! Deterministic synthetic strokes for exercising the recognizer.

use circlet_geometry::Point;
use std::f32::consts::TAU;

/// Points evenly spaced around a full circle, in order, closing the loop
/// (the final point coincides with the first). Yields `samples + 1`
/// points.
pub fn circle_stroke(center: Point, radius: f32, samples: usize) -> Vec<Point> {
    arc_stroke(center, radius, TAU, samples)
}

/// Points evenly spaced along an arc sweeping `sweep` radians from angle
/// zero, in order. A sweep beyond `2π` retraces the circle, modelling a
/// stroke that overtravels its starting point.
pub fn arc_stroke(center: Point, radius: f32, sweep: f32, samples: usize) -> Vec<Point> {
    (0..=samples)
        .map(|i| {
            let theta = sweep * i as f32 / samples as f32;
            Point::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect()
}

/// Points evenly spaced along the segment from `from` to `to`, endpoints
/// included. Yields `samples + 1` points.
pub fn line_stroke(from: Point, to: Point, samples: usize) -> Vec<Point> {
    (0..=samples)
        .map(|i| {
            let t = i as f32 / samples as f32;
            Point::new(
                from.x + (to.x - from.x) * t,
                from.y + (to.y - from.y) * t,
            )
        })
        .collect()
}

/// A rising zigzag whose x motion reverses exactly `reversals` times
/// inside the window the recognizer's inflection count examines. The y
/// coordinate climbs by `rise` per segment so y never reverses.
pub fn zigzag_stroke(origin: Point, step: f32, reversals: u32, rise: f32) -> Vec<Point> {
    let mut deltas = vec![step, step];
    let mut direction = step;
    for _ in 0..reversals {
        direction = -direction;
        deltas.push(direction);
    }
    // Trailing segments are never examined; repeat the last delta so the
    // final reversal stays inside the window.
    deltas.push(direction);

    let mut points = Vec::with_capacity(deltas.len() + 1);
    let mut current = origin;
    points.push(current);
    for delta in deltas {
        current = Point::new(current.x + delta, current.y + rise);
        points.push(current);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_stroke_closes_the_loop() {
        let points = circle_stroke(Point::new(5.0, 5.0), 10.0, 16);
        assert_eq!(points.len(), 17);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first.x - last.x).abs() < 1e-4);
        assert!((first.y - last.y).abs() < 1e-4);
    }

    #[test]
    fn test_circle_stroke_points_lie_on_radius() {
        let center = Point::new(-3.0, 2.0);
        for point in circle_stroke(center, 7.5, 24) {
            let distance = (point - center).magnitude();
            assert!((distance - 7.5).abs() < 1e-4, "off-radius point {point:?}");
        }
    }

    #[test]
    fn test_line_stroke_hits_endpoints() {
        let points = line_stroke(Point::ZERO, Point::new(10.0, 20.0), 10);
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], Point::ZERO);
        assert_eq!(points[10], Point::new(10.0, 20.0));
    }

    #[test]
    fn test_zigzag_stroke_reversal_layout() {
        // Two straight lead-in segments, one per reversal, one trailing.
        let points = zigzag_stroke(Point::ZERO, 2.0, 3, 1.0);
        assert_eq!(points.len(), 7);
        // y climbs monotonically.
        for pair in points.windows(2) {
            assert!(pair[1].y > pair[0].y);
        }
    }
}
