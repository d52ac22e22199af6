use crate::math::Point2;

/// A circle defined by center and radius.
///
/// A non-positive radius is legal and encloses nothing; the classifiers
/// degrade instead of rejecting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }
}
