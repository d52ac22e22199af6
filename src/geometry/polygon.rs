use crate::math::polygon_2d;
use crate::math::Point2;

/// A simple closed polygon: an ordered vertex ring, implicitly closed from
/// the last point back to the first.
///
/// Winding is significant for clipping and is always computed, never
/// assumed. Rings with fewer than three vertices enclose nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from a vertex ring.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Signed area (shoelace): positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        polygon_2d::signed_area(&self.points)
    }

    /// Returns true when the ring is wound clockwise.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        polygon_2d::is_clockwise(&self.points)
    }
}

/// An ordered collection of polygon rings with even-odd membership.
///
/// Outer boundaries and holes are not tagged: a point enclosed by an odd
/// number of rings is inside, by an even number outside.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonSet {
    pub polygons: Vec<Polygon>,
}

impl PolygonSet {
    /// Creates a polygon set.
    #[must_use]
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }
}
