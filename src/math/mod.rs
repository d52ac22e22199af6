pub mod angle_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod roots;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for parametric and parallelism tests.
pub const TOLERANCE: f64 = 1e-10;

/// Default boundary-detection epsilon for inclusion predicates.
///
/// Machine epsilon for `f64` (about `2.22e-16`). Every predicate takes an
/// explicit `eps` argument; callers chaining kernel results must pass the
/// same value throughout or boundary classification becomes inconsistent
/// across calls.
pub const EPSILON: f64 = f64::EPSILON;
