//! Pairwise primitive intersection: circle-circle, circle-line, line-line,
//! plus sweep-filtered arc variants.
//!
//! Every routine absorbs degeneracies (zero radii, coincident centers,
//! zero-length directions, parallel lines) into a zero-solution result
//! instead of failing.

use super::angle_2d::angle_to_arc_param;
use super::{Point2, TOLERANCE};

/// Squared-length threshold below which a line direction is degenerate.
const DEGENERATE_DIRECTION: f64 = 1e-7;

/// Discrete intersection of two primitives: zero, one, or two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// No discrete intersection (disjoint, contained, or coincident).
    None,
    /// Tangent contact at a single point.
    One(Point2),
    /// Two transversal intersection points.
    Two(Point2, Point2),
}

impl Intersection {
    /// Number of discrete intersection points.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Two(_, _) => 2,
        }
    }

    /// The intersection points in derivation order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        match self {
            Self::None => Vec::new(),
            Self::One(p) => vec![*p],
            Self::Two(p, q) => vec![*p, *q],
        }
    }
}

/// Intersects two circles.
///
/// Disjoint circles, one circle containing the other, and coincident
/// circles all report [`Intersection::None`]; tangency within `eps`
/// collapses to a single point.
#[must_use]
pub fn circle_circle(c0: &Point2, r0: f64, c1: &Point2, r1: f64, eps: f64) -> Intersection {
    if r0 <= 0.0 || r1 <= 0.0 {
        return Intersection::None;
    }
    let dx = c1.x - c0.x;
    let dy = c1.y - c0.y;
    let dist = dx.hypot(dy);

    if dist <= eps && (r0 - r1).abs() <= eps {
        // Coincident circles: no discrete solution.
        return Intersection::None;
    }
    if dist > r0 + r1 + eps || dist < (r0 - r1).abs() - eps {
        return Intersection::None;
    }

    // Distance from c0 along c0 -> c1 to the radical line.
    let a = (r0 * r0 - r1 * r1 + dist * dist) / (2.0 * dist);
    let h_sq = r0 * r0 - a * a;
    let mx = c0.x + a * dx / dist;
    let my = c0.y + a * dy / dist;

    let tangent = (dist - (r0 + r1)).abs() <= eps || (dist - (r0 - r1).abs()).abs() <= eps;
    if tangent || h_sq <= eps {
        return Intersection::One(Point2::new(mx, my));
    }
    let h = h_sq.sqrt();
    let px = -dy / dist;
    let py = dx / dist;
    Intersection::Two(
        Point2::new(mx + h * px, my + h * py),
        Point2::new(mx - h * px, my - h * py),
    )
}

/// Intersects a circle with the infinite line through `p0` and `p1`.
///
/// A degenerate direction yields no solutions; a discriminant within `eps`
/// of zero collapses to the tangent point.
#[must_use]
pub fn circle_line(center: &Point2, radius: f64, p0: &Point2, p1: &Point2, eps: f64) -> Intersection {
    if radius <= 0.0 {
        return Intersection::None;
    }
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let a = dx * dx + dy * dy;
    if a <= DEGENERATE_DIRECTION {
        return Intersection::None;
    }

    // Substitute the parametric line into the circle equation.
    let fx = p0.x - center.x;
    let fy = p0.y - center.y;
    let b = 2.0 * (fx * dx + fy * dy);
    let c = fx * fx + fy * fy - radius * radius;
    let disc = b * b - 4.0 * a * c;

    if disc.abs() <= eps {
        let t = -b / (2.0 * a);
        return Intersection::One(Point2::new(p0.x + t * dx, p0.y + t * dy));
    }
    if disc < 0.0 {
        return Intersection::None;
    }
    let sq = disc.sqrt();
    let t0 = (-b - sq) / (2.0 * a);
    let t1 = (-b + sq) / (2.0 * a);
    Intersection::Two(
        Point2::new(p0.x + t0 * dx, p0.y + t0 * dy),
        Point2::new(p0.x + t1 * dx, p0.y + t1 * dy),
    )
}

/// Line-line intersection with segment-range reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineLineHit {
    /// Intersection point of the two infinite lines.
    pub point: Point2,
    /// Parameter along `a0`..`a1` (0 at `a0`, 1 at `a1`).
    pub t: f64,
    /// Parameter along `b0`..`b1`.
    pub u: f64,
    /// True when the point lies within both segments.
    pub within_segments: bool,
}

/// Intersects the lines through `a0`..`a1` and `b0`..`b1`.
///
/// Returns `None` when the lines are parallel within `eps` (zero-length
/// segments fall out as parallel). Callers wanting the infinite-line
/// intersection ignore [`LineLineHit::within_segments`].
#[must_use]
pub fn line_line(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2, eps: f64) -> Option<LineLineHit> {
    let dax = a1.x - a0.x;
    let day = a1.y - a0.y;
    let dbx = b1.x - b0.x;
    let dby = b1.y - b0.y;

    let cross = dax * dby - day * dbx;
    if cross.abs() <= eps {
        return None;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * dby - dy * dbx) / cross;
    let u = (dx * day - dy * dax) / cross;

    Some(LineLineHit {
        point: Point2::new(a0.x + dax * t, a0.y + day * t),
        t,
        u,
        within_segments: (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u),
    })
}

/// Intersects the segment `a0`..`a1` with a circular arc.
///
/// Returns `(point, t_seg, t_arc)` triples, both parameters in `[0, 1]`.
/// Degenerate segments, radii, or sweeps yield no hits.
#[must_use]
pub fn segment_arc(
    a0: &Point2,
    a1: &Point2,
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    eps: f64,
) -> Vec<(Point2, f64, f64)> {
    let mut results = Vec::new();
    if radius < TOLERANCE || sweep.abs() < TOLERANCE {
        return results;
    }
    let dx = a1.x - a0.x;
    let dy = a1.y - a0.y;
    if dx * dx + dy * dy < TOLERANCE * TOLERANCE {
        return results;
    }

    let slop = TOLERANCE;
    for hit in circle_line(center, radius, a0, a1, eps).points() {
        // Recover the segment parameter from the dominant axis.
        let t_seg = if dx.abs() >= dy.abs() {
            (hit.x - a0.x) / dx
        } else {
            (hit.y - a0.y) / dy
        };
        if t_seg < -slop || t_seg > 1.0 + slop {
            continue;
        }
        let angle = (hit.y - center.y).atan2(hit.x - center.x);
        if let Some(t_arc) = angle_to_arc_param(angle, start_angle, sweep) {
            results.push((hit, t_seg.clamp(0.0, 1.0), t_arc));
        }
    }
    results
}

/// Intersects two circular arcs.
///
/// Solves the underlying circle pair, then keeps only points lying on both
/// sweeps. Returns `(point, t1, t2)` triples with arc parameters in
/// `[0, 1]`.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn arc_arc(
    c1: &Point2,
    r1: f64,
    start1: f64,
    sweep1: f64,
    c2: &Point2,
    r2: f64,
    start2: f64,
    sweep2: f64,
    eps: f64,
) -> Vec<(Point2, f64, f64)> {
    let mut results = Vec::new();
    if r1 < TOLERANCE || r2 < TOLERANCE {
        return results;
    }
    for hit in circle_circle(c1, r1, c2, r2, eps).points() {
        let angle1 = (hit.y - c1.y).atan2(hit.x - c1.x);
        let angle2 = (hit.y - c2.y).atan2(hit.x - c2.x);
        if let (Some(t1), Some(t2)) = (
            angle_to_arc_param(angle1, start1, sweep1),
            angle_to_arc_param(angle2, start2, sweep2),
        ) {
            results.push((hit, t1, t2));
        }
    }
    results
}
