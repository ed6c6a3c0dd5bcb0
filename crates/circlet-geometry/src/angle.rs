//! Pivot-angle measurement for gesture paths.

use crate::Point;

/// Unsigned angle in `[0, π]` subtended at `center` by the direction
/// vectors to `p1` and `p2`.
///
/// Degenerate inputs contribute nothing rather than failing: if either
/// point sits exactly on the pivot, or either direction vector has zero
/// magnitude, the result is `0.0`. Rounding can push the normalized dot
/// product just past ±1, where `acos` would return NaN; the ratio is
/// clamped to `[-1, 1]` first.
pub fn angle_between(p1: Point, p2: Point, center: Point) -> f32 {
    if p1 == center || p2 == center {
        return 0.0;
    }

    let v1 = p1 - center;
    let v2 = p2 - center;
    let magnitudes = v1.magnitude() * v2.magnitude();
    if magnitudes == 0.0 {
        return 0.0;
    }

    let cos = (v1.dot(v2) / magnitudes).clamp(-1.0, 1.0);
    cos.acos()
}

/// Sign of `x` with zero folded into the positive branch.
///
/// Callers comparing consecutive motion deltas must skip zero deltas
/// themselves; a zero delta carries no direction.
pub fn sign_of(x: f32) -> f32 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}
