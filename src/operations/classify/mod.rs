//! Tri-state point containment for every supported shape.
//!
//! All classifiers share one injectable boundary epsilon (default
//! [`crate::math::EPSILON`]); none of them can fail. Invalid shape
//! parameters (non-positive radii, short rings) classify everything as
//! `Outside`, since containment in an empty region is legitimately
//! "nothing inside".

mod conic;
mod planar;

pub use conic::{circle_contains, circular_arc_contains, ellipse_contains, elliptical_arc_contains};
pub use planar::{contour_contains, polygon_contains, polygon_set_contains, rect_contains};

use crate::geometry::{
    Circle, CircularArc, Contour, Ellipse, EllipticalArc, Polygon, PolygonSet, Rect,
};
use crate::math::Point2;

/// Tri-state classification of a point relative to a region.
///
/// `Boundary` is a first-class result meaning "within epsilon of an edge",
/// not a rounding artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    Outside,
    Inside,
    Boundary,
}

impl Inclusion {
    /// Even-odd combination of two classifications.
    ///
    /// `Outside` and `Inside` carry parity 0 and 1; `Boundary` absorbs.
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Boundary, _) | (_, Self::Boundary) => Self::Boundary,
            (a, b) if a == b => Self::Outside,
            _ => Self::Inside,
        }
    }
}

/// A closed set of the supported shapes, for callers wanting a single
/// polymorphic containment entry point.
#[derive(Debug, Clone)]
pub enum Shape {
    Circle(Circle),
    Ellipse(Ellipse),
    CircularArc(CircularArc),
    EllipticalArc(EllipticalArc),
    Rect(Rect),
    Polygon(Polygon),
    PolygonSet(PolygonSet),
    Contour(Contour),
}

impl Shape {
    /// Classifies `point` against this shape with boundary tolerance `eps`.
    #[must_use]
    pub fn contains(&self, point: &Point2, eps: f64) -> Inclusion {
        match self {
            Self::Circle(c) => circle_contains(c, point, eps),
            Self::Ellipse(e) => ellipse_contains(e, point, eps),
            Self::CircularArc(a) => circular_arc_contains(a, point, eps),
            Self::EllipticalArc(a) => elliptical_arc_contains(a, point, eps),
            Self::Rect(r) => rect_contains(r, point, eps),
            Self::Polygon(p) => polygon_contains(p, point, eps),
            Self::PolygonSet(s) => polygon_set_contains(s, point, eps),
            Self::Contour(c) => contour_contains(c, point, eps),
        }
    }
}
