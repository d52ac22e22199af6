use std::f64::consts::TAU;

use crate::geometry::{Circle, CircularArc, Ellipse, EllipticalArc};
use crate::math::{Point2, TOLERANCE};

use super::Inclusion;

/// Classifies a point against a circle.
///
/// Compares squared distance to squared radius; a difference within `eps`
/// is the boundary. Non-positive radii enclose nothing.
#[must_use]
pub fn circle_contains(circle: &Circle, p: &Point2, eps: f64) -> Inclusion {
    let r = circle.radius;
    if r <= 0.0 {
        return Inclusion::Outside;
    }
    let dx = p.x - circle.center.x;
    let dy = p.y - circle.center.y;
    // Bounding-box reject before the squared-distance test.
    if dx.abs() > r + eps || dy.abs() > r + eps {
        return Inclusion::Outside;
    }
    let diff = dx * dx + dy * dy - r * r;
    if diff.abs() <= eps {
        Inclusion::Boundary
    } else if diff < 0.0 {
        Inclusion::Inside
    } else {
        Inclusion::Outside
    }
}

/// Classifies a point against an ellipse, rotated or not.
///
/// Evaluates the normalized quadratic form `x^2/rx^2 + y^2/ry^2` in the
/// ellipse's local frame and compares against 1. Non-positive semi-axes
/// enclose nothing.
#[must_use]
pub fn ellipse_contains(ellipse: &Ellipse, p: &Point2, eps: f64) -> Inclusion {
    if ellipse.rx <= 0.0 || ellipse.ry <= 0.0 {
        return Inclusion::Outside;
    }
    let local = ellipse.local_frame(p);
    let q = (local.x / ellipse.rx).powi(2) + (local.y / ellipse.ry).powi(2);
    let diff = q - 1.0;
    if diff.abs() <= eps {
        Inclusion::Boundary
    } else if diff < 0.0 {
        Inclusion::Inside
    } else {
        Inclusion::Outside
    }
}

/// Classifies a point against the region bounded by a circular arc and its
/// chord.
///
/// The chord determinant gates the test: a point within `eps` of the chord
/// line is boundary, a point on the far side of the chord from the arc is
/// outside, and only on the arc side does the circle membership decide.
/// The gate handles sweeps wider than a half turn, where an angle-in-range
/// test would not. Sweeps of a full turn or more degrade to the circle
/// test.
#[must_use]
pub fn circular_arc_contains(arc: &CircularArc, p: &Point2, eps: f64) -> Inclusion {
    if arc.radius <= 0.0 || arc.sweep.abs() <= TOLERANCE {
        return Inclusion::Outside;
    }
    let circle = Circle::new(arc.center, arc.radius);
    if arc.sweep.abs() >= TAU - TOLERANCE {
        return circle_contains(&circle, p, eps);
    }
    match chord_side(&arc.start_point(), &arc.end_point(), p, arc.sweep, eps) {
        ChordSide::On => Inclusion::Boundary,
        ChordSide::Far => Inclusion::Outside,
        ChordSide::ArcSide => circle_contains(&circle, p, eps),
    }
}

/// Classifies a point against the region bounded by an elliptical arc and
/// its chord. Same chord gating as [`circular_arc_contains`], with the
/// ellipse membership test.
#[must_use]
pub fn elliptical_arc_contains(arc: &EllipticalArc, p: &Point2, eps: f64) -> Inclusion {
    if arc.rx <= 0.0 || arc.ry <= 0.0 || arc.sweep.abs() <= TOLERANCE {
        return Inclusion::Outside;
    }
    let ellipse = Ellipse::new(arc.center, arc.rx, arc.ry, arc.rotation);
    if arc.sweep.abs() >= TAU - TOLERANCE {
        return ellipse_contains(&ellipse, p, eps);
    }
    match chord_side(&arc.start_point(), &arc.end_point(), p, arc.sweep, eps) {
        ChordSide::On => Inclusion::Boundary,
        ChordSide::Far => Inclusion::Outside,
        ChordSide::ArcSide => ellipse_contains(&ellipse, p, eps),
    }
}

enum ChordSide {
    On,
    Far,
    ArcSide,
}

/// Which side of the directed chord `p0`..`p1` the point falls on.
///
/// The arc lies on the side where the chord determinant opposes the sweep
/// sign; the determinant's sign against `sweep` therefore separates the
/// arc side from the far side.
fn chord_side(p0: &Point2, p1: &Point2, p: &Point2, sweep: f64, eps: f64) -> ChordSide {
    let det = (p1.x - p0.x) * (p.y - p0.y) - (p1.y - p0.y) * (p.x - p0.x);
    if det.abs() <= eps {
        ChordSide::On
    } else if det * sweep > 0.0 {
        ChordSide::Far
    } else {
        ChordSide::ArcSide
    }
}
