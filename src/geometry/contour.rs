use crate::math::Point2;

/// Bulge-encoded contour vertex for mixed line/arc edges.
///
/// `bulge = tan(sweep / 4)`:
/// - `0` = straight edge to the next vertex
/// - `> 0` = counter-clockwise arc to the next vertex
/// - `< 0` = clockwise arc to the next vertex
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourVertex {
    pub position: Point2,
    pub bulge: f64,
}

impl ContourVertex {
    /// Creates a vertex with the given position and bulge.
    #[must_use]
    pub fn new(position: Point2, bulge: f64) -> Self {
        Self { position, bulge }
    }

    /// Creates a straight-edge vertex (bulge = 0).
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            bulge: 0.0,
        }
    }

    /// Creates an arc-edge vertex.
    #[must_use]
    pub fn arc(x: f64, y: f64, bulge: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            bulge,
        }
    }
}

/// A closed contour whose edges mix straight lines and circular arcs.
///
/// Each vertex's bulge describes the edge to the following vertex; the
/// last vertex connects back to the first. Fewer than three vertices
/// enclose nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub vertices: Vec<ContourVertex>,
}

impl Contour {
    /// Creates a contour from bulge-encoded vertices.
    #[must_use]
    pub fn new(vertices: Vec<ContourVertex>) -> Self {
        Self { vertices }
    }

    /// Creates an all-straight-edge contour from a point ring.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        Self {
            vertices: points
                .iter()
                .map(|p| ContourVertex::new(*p, 0.0))
                .collect(),
        }
    }
}
