use crate::math::Point2;

/// An ellipse with semi-axes `rx`/`ry`, rotated by `rotation` radians
/// about its center.
///
/// Non-positive semi-axes are legal and enclose nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Point2,
    pub rx: f64,
    pub ry: f64,
    pub rotation: f64,
}

impl Ellipse {
    /// Creates a new ellipse.
    #[must_use]
    pub fn new(center: Point2, rx: f64, ry: f64, rotation: f64) -> Self {
        Self {
            center,
            rx,
            ry,
            rotation,
        }
    }

    /// Transforms `p` into the ellipse's axis-aligned local frame
    /// (translate to the center, then rotate by `-rotation`).
    #[must_use]
    pub fn local_frame(&self, p: &Point2) -> Point2 {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        let (sin, cos) = self.rotation.sin_cos();
        Point2::new(dx * cos + dy * sin, -dx * sin + dy * cos)
    }
}
