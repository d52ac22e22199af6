use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise winding.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns true when the polygon is wound clockwise.
#[must_use]
pub fn is_clockwise(points: &[Point2]) -> bool {
    signed_area(points) < -TOLERANCE
}

/// Returns true when `p` lies within `eps` of the segment `a`..`b`.
///
/// The perpendicular offset comes from the chord determinant; a projection
/// test keeps points collinear with the segment but beyond its endpoints
/// from counting.
#[must_use]
pub fn point_on_segment(p: &Point2, a: &Point2, b: &Point2, eps: f64) -> bool {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let apx = p.x - a.x;
    let apy = p.y - a.y;

    let det = abx * apy - aby * apx;
    if det.abs() > eps {
        return false;
    }

    let len_sq = abx * abx + aby * aby;
    if len_sq < TOLERANCE * TOLERANCE {
        // Degenerate segment reduces to point coincidence.
        return apx.abs() <= eps && apy.abs() <= eps;
    }
    let t = (apx * abx + apy * aby) / len_sq;
    (-TOLERANCE..=1.0 + TOLERANCE).contains(&t)
}
