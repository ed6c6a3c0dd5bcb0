//! Circularity evaluation: inflection counting and angular traversal.
//!
//! Run once per attempt, at release. The stroke is rejected when it has
//! too few points, zigzags more than the inflection budget allows, or
//! sweeps an angle too far from one full revolution around the center of
//! its bounding rectangle.

use circlet_geometry::{angle_between, bounding_rect, sign_of, Point};
use std::f32::consts::TAU;

use crate::config::RecognizerConfig;

/// Counts direction reversals over the interior of `path`.
///
/// For each index in `2..=len-2` the per-axis deltas of the two segments
/// ending there are compared; an axis reverses when the signs differ and
/// neither delta is zero (a zero delta carries no direction). An index
/// contributes at most one inflection even when both axes reverse.
pub fn inflection_count(path: &[Point]) -> u32 {
    let mut inflections = 0;

    for i in 2..path.len().saturating_sub(1) {
        let current = path[i] - path[i - 1];
        let previous = path[i - 1] - path[i - 2];

        let x_reversed = current.x != 0.0
            && previous.x != 0.0
            && sign_of(current.x) != sign_of(previous.x);
        let y_reversed = current.y != 0.0
            && previous.y != 0.0
            && sign_of(current.y) != sign_of(previous.y);

        if x_reversed || y_reversed {
            log::trace!(
                "inflection at {i}: delta ({}, {}) prev ({}, {})",
                current.x,
                current.y,
                previous.x,
                previous.y
            );
            inflections += 1;
        }
    }

    inflections
}

/// Unsigned angle swept around `center` over consecutive path segments,
/// a proxy for how much of a full revolution the stroke completed.
pub fn total_traversal(path: &[Point], center: Point) -> f32 {
    path.windows(2)
        .map(|pair| angle_between(pair[0], pair[1], center))
        .sum()
}

/// Signed distance between a traversal and one full revolution.
pub fn slack(total_traversal: f32) -> f32 {
    total_traversal - TAU
}

/// Whether a traversal lands inside the configured tolerance band around
/// one revolution. Both boundaries are inclusive on the accept side.
pub fn traversal_accepted(total: f32, config: &RecognizerConfig) -> bool {
    total >= TAU - config.undershoot_tolerance && total <= TAU + config.overshoot_tolerance
}

/// The full acceptance policy for one released stroke.
pub fn is_circle(path: &[Point], config: &RecognizerConfig) -> bool {
    if path.len() < 2 {
        log::debug!("rejecting stroke: {} points is too few to judge", path.len());
        return false;
    }

    let inflections = inflection_count(path);
    if inflections > config.max_inflections {
        log::debug!(
            "rejecting stroke: {inflections} inflections exceed budget {}",
            config.max_inflections
        );
        return false;
    }

    // len >= 2 here, so the bounding rect exists.
    let Some(bounds) = bounding_rect(path) else {
        return false;
    };
    let total = total_traversal(path, bounds.center());

    if !traversal_accepted(total, config) {
        log::debug!(
            "rejecting stroke: swept {total:.3} rad, slack {:.3} outside [-{:.3}, {:.3}]",
            slack(total),
            config.undershoot_tolerance,
            config.overshoot_tolerance
        );
        return false;
    }

    true
}
