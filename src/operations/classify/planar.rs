use crate::geometry::{Circle, CircularArc, Contour, Polygon, PolygonSet, Rect};
use crate::math::polygon_2d::point_on_segment;
use crate::math::{Point2, TOLERANCE};

use super::conic::circle_contains;
use super::Inclusion;

/// Classifies a point against an axis-aligned rectangle.
///
/// The interior follows the half-open convention `left <= x < right`,
/// `top <= y < bottom`: the right and bottom edges are boundary, while the
/// left and top edges belong to the interior. Two rectangles sharing an
/// edge therefore partition the plane without double-counting the seam as
/// inside both.
#[must_use]
pub fn rect_contains(rect: &Rect, p: &Point2, eps: f64) -> Inclusion {
    let in_x_span = p.x >= rect.left - eps && p.x <= rect.right + eps;
    let in_y_span = p.y >= rect.top - eps && p.y <= rect.bottom + eps;
    let on_right = (p.x - rect.right).abs() <= eps && in_y_span;
    let on_bottom = (p.y - rect.bottom).abs() <= eps && in_x_span;
    if on_right || on_bottom {
        return Inclusion::Boundary;
    }
    if p.x >= rect.left && p.x < rect.right && p.y >= rect.top && p.y < rect.bottom {
        Inclusion::Inside
    } else {
        Inclusion::Outside
    }
}

/// Classifies a point against a single closed polygon ring.
///
/// Crossing-number (even-odd) traversal over the edges, returning boundary
/// when the point lies within `eps` of any edge. Rings with fewer than
/// three vertices enclose nothing.
#[must_use]
pub fn polygon_contains(polygon: &Polygon, p: &Point2, eps: f64) -> Inclusion {
    ring_contains(&polygon.points, p, eps)
}

fn ring_contains(points: &[Point2], p: &Point2, eps: f64) -> Inclusion {
    let n = points.len();
    if n < 3 {
        return Inclusion::Outside;
    }
    let mut inside = false;
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        if point_on_segment(p, a, b, eps) {
            return Inclusion::Boundary;
        }
        if edge_crosses_ray(a, b, p) {
            inside = !inside;
        }
    }
    if inside {
        Inclusion::Inside
    } else {
        Inclusion::Outside
    }
}

/// True when the edge `a`..`b` crosses the horizontal ray running from `p`
/// toward positive x.
fn edge_crosses_ray(a: &Point2, b: &Point2, p: &Point2) -> bool {
    if (a.y > p.y) == (b.y > p.y) {
        return false;
    }
    let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
    p.x < x_cross
}

/// Classifies a point against a polygon set under the even-odd rule.
///
/// A point enclosed by an odd number of rings is inside, by an even number
/// outside (so nested rings cut holes); boundary on any ring
/// short-circuits the whole evaluation.
#[must_use]
pub fn polygon_set_contains(set: &PolygonSet, p: &Point2, eps: f64) -> Inclusion {
    let mut acc = Inclusion::Outside;
    for polygon in &set.polygons {
        match polygon_contains(polygon, p, eps) {
            Inclusion::Boundary => return Inclusion::Boundary,
            other => acc = acc.xor(other),
        }
    }
    acc
}

/// Classifies a point against a closed contour whose edges may bulge into
/// circular arcs.
///
/// Straight-edge crossing parity over the vertex chords is combined
/// even-odd with each arc's circular-segment contribution; boundary on a
/// straight edge or on an arc curve absorbs. Points on the chord of a
/// bulged edge are interior detail, not boundary.
#[must_use]
pub fn contour_contains(contour: &Contour, p: &Point2, eps: f64) -> Inclusion {
    let verts = &contour.vertices;
    let n = verts.len();
    if n < 3 {
        return Inclusion::Outside;
    }
    let mut inside = false;
    for i in 0..n {
        let a = &verts[i].position;
        let b = &verts[(i + 1) % n].position;
        let bulge = verts[i].bulge;

        if bulge.abs() <= TOLERANCE {
            if point_on_segment(p, a, b, eps) {
                return Inclusion::Boundary;
            }
        } else {
            match segment_region_contains(a, b, bulge, p, eps) {
                Inclusion::Boundary => return Inclusion::Boundary,
                Inclusion::Inside => inside = !inside,
                Inclusion::Outside => {}
            }
        }
        // Chord parity uses every edge, bulged or not.
        if edge_crosses_ray(a, b, p) {
            inside = !inside;
        }
    }
    if inside {
        Inclusion::Inside
    } else {
        Inclusion::Outside
    }
}

/// Classifies a point against the circular segment between the chord
/// `a`..`b` and the arc it subtends with the given bulge.
///
/// The arc falls on the side of the chord where the determinant opposes
/// the bulge sign; points on the chord or beyond it are outside the
/// segment region.
fn segment_region_contains(a: &Point2, b: &Point2, bulge: f64, p: &Point2, eps: f64) -> Inclusion {
    let det = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if det * bulge >= 0.0 {
        return Inclusion::Outside;
    }
    let arc = CircularArc::from_bulge(a, b, bulge);
    if arc.radius <= 0.0 {
        return Inclusion::Outside;
    }
    circle_contains(&Circle::new(arc.center, arc.radius), p, eps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ContourVertex;
    use crate::math::EPSILON;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        Polygon::new(vec![p(x0, y0), p(x1, y0), p(x1, y1), p(x0, y1)])
    }

    // -- rect --

    #[test]
    fn rect_interior_and_exterior() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rect_contains(&r, &p(5.0, 5.0), EPSILON), Inclusion::Inside);
        assert_eq!(rect_contains(&r, &p(11.0, 5.0), EPSILON), Inclusion::Outside);
        assert_eq!(rect_contains(&r, &p(5.0, -1.0), EPSILON), Inclusion::Outside);
    }

    #[test]
    fn rect_half_open_partition() {
        // Two rectangles sharing the seam x=10: the seam is the left one's
        // boundary and the right one's interior, so exactly one of them
        // claims (10, 5) as inside.
        let left = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 20.0, 10.0);
        let seam = p(10.0, 5.0);
        assert_eq!(rect_contains(&left, &seam, EPSILON), Inclusion::Boundary);
        assert_eq!(rect_contains(&right, &seam, EPSILON), Inclusion::Inside);
    }

    #[test]
    fn rect_bottom_edge_is_boundary() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rect_contains(&r, &p(5.0, 10.0), EPSILON), Inclusion::Boundary);
        assert_eq!(rect_contains(&r, &p(5.0, 0.0), EPSILON), Inclusion::Inside);
    }

    #[test]
    fn rect_boundary_respects_edge_span() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Collinear with the right edge but beyond its span.
        assert_eq!(rect_contains(&r, &p(10.0, 20.0), EPSILON), Inclusion::Outside);
    }

    // -- polygon --

    #[test]
    fn polygon_square_classification() {
        let poly = square(0.0, 0.0, 4.0, 4.0);
        assert_eq!(polygon_contains(&poly, &p(2.0, 2.0), EPSILON), Inclusion::Inside);
        assert_eq!(polygon_contains(&poly, &p(5.0, 2.0), EPSILON), Inclusion::Outside);
        assert_eq!(polygon_contains(&poly, &p(4.0, 2.0), EPSILON), Inclusion::Boundary);
        assert_eq!(polygon_contains(&poly, &p(0.0, 0.0), EPSILON), Inclusion::Boundary);
    }

    #[test]
    fn polygon_concave() {
        // A "U" shape: the notch between the prongs is outside.
        let poly = Polygon::new(vec![
            p(0.0, 0.0),
            p(6.0, 0.0),
            p(6.0, 4.0),
            p(4.0, 4.0),
            p(4.0, 1.0),
            p(2.0, 1.0),
            p(2.0, 4.0),
            p(0.0, 4.0),
        ]);
        assert_eq!(polygon_contains(&poly, &p(3.0, 3.0), EPSILON), Inclusion::Outside);
        assert_eq!(polygon_contains(&poly, &p(1.0, 3.0), EPSILON), Inclusion::Inside);
        assert_eq!(polygon_contains(&poly, &p(5.0, 3.0), EPSILON), Inclusion::Inside);
        assert_eq!(polygon_contains(&poly, &p(3.0, 0.5), EPSILON), Inclusion::Inside);
    }

    #[test]
    fn polygon_degenerate_is_empty() {
        let two = Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0)]);
        assert_eq!(polygon_contains(&two, &p(0.5, 0.0), EPSILON), Inclusion::Outside);
        let none = Polygon::new(Vec::new());
        assert_eq!(polygon_contains(&none, &p(0.0, 0.0), EPSILON), Inclusion::Outside);
    }

    // -- polygon set --

    #[test]
    fn polygon_set_hole_law() {
        // A 10x10 square with a nested 4x4 hole: the hole's center is
        // outside, the ring between the boundaries is inside.
        let set = PolygonSet::new(vec![
            square(0.0, 0.0, 10.0, 10.0),
            square(3.0, 3.0, 7.0, 7.0),
        ]);
        assert_eq!(polygon_set_contains(&set, &p(5.0, 5.0), EPSILON), Inclusion::Outside);
        assert_eq!(polygon_set_contains(&set, &p(1.0, 5.0), EPSILON), Inclusion::Inside);
        assert_eq!(polygon_set_contains(&set, &p(-1.0, 5.0), EPSILON), Inclusion::Outside);
    }

    #[test]
    fn polygon_set_boundary_short_circuits() {
        let set = PolygonSet::new(vec![
            square(0.0, 0.0, 10.0, 10.0),
            square(3.0, 3.0, 7.0, 7.0),
        ]);
        assert_eq!(polygon_set_contains(&set, &p(3.0, 5.0), EPSILON), Inclusion::Boundary);
        assert_eq!(polygon_set_contains(&set, &p(0.0, 5.0), EPSILON), Inclusion::Boundary);
    }

    #[test]
    fn polygon_set_empty() {
        let set = PolygonSet::new(Vec::new());
        assert_eq!(polygon_set_contains(&set, &p(0.0, 0.0), EPSILON), Inclusion::Outside);
    }

    // -- contour --

    fn bulged_square() -> Contour {
        // Unit-ish square with a semicircular bulge hanging below the
        // bottom edge (positive bulge arcs run through the far side of the
        // chord from the interior here).
        Contour::new(vec![
            ContourVertex::arc(0.0, 0.0, 1.0),
            ContourVertex::line(2.0, 0.0),
            ContourVertex::line(2.0, 2.0),
            ContourVertex::line(0.0, 2.0),
        ])
    }

    #[test]
    fn contour_straight_part() {
        let c = bulged_square();
        assert_eq!(contour_contains(&c, &p(1.0, 1.0), EPSILON), Inclusion::Inside);
        assert_eq!(contour_contains(&c, &p(3.0, 1.0), EPSILON), Inclusion::Outside);
        assert_eq!(contour_contains(&c, &p(2.0, 1.0), EPSILON), Inclusion::Boundary);
    }

    #[test]
    fn contour_arc_pocket() {
        let c = bulged_square();
        // Inside the semicircular pocket below the chord.
        assert_eq!(contour_contains(&c, &p(1.0, -0.5), EPSILON), Inclusion::Inside);
        // On the arc itself.
        assert_eq!(contour_contains(&c, &p(1.0, -1.0), EPSILON), Inclusion::Boundary);
        // Below the arc.
        assert_eq!(contour_contains(&c, &p(1.0, -1.5), EPSILON), Inclusion::Outside);
    }

    #[test]
    fn contour_chord_is_interior() {
        let c = bulged_square();
        // The chord under the bulged edge is interior, not boundary.
        assert_eq!(contour_contains(&c, &p(1.0, 0.0), EPSILON), Inclusion::Inside);
    }

    #[test]
    fn contour_all_straight_matches_polygon() {
        let ring = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 3.0), p(0.0, 3.0)];
        let contour = Contour::from_points(&ring);
        let poly = Polygon::new(ring);
        for pt in [p(2.0, 1.5), p(5.0, 1.0), p(4.0, 1.0), p(-0.1, 0.0)] {
            assert_eq!(
                contour_contains(&contour, &pt, EPSILON),
                polygon_contains(&poly, &pt, EPSILON),
                "mismatch at {pt:?}"
            );
        }
    }

    #[test]
    fn contour_degenerate_is_empty() {
        let c = Contour::new(vec![ContourVertex::line(0.0, 0.0), ContourVertex::line(1.0, 0.0)]);
        assert_eq!(contour_contains(&c, &p(0.5, 0.0), EPSILON), Inclusion::Outside);
    }
}
