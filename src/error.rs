use thiserror::Error;

/// Top-level error type for the lamina geometry kernel.
#[derive(Debug, Error)]
pub enum LaminaError {
    #[error(transparent)]
    Clip(#[from] ClipError),
}

/// Errors raised by polygon clipping.
///
/// Geometric degeneracies (zero radii, short polygons, parallel lines) are
/// absorbed into sentinel results everywhere in the kernel; clipping is the
/// one operation with a hard precondition (a convex clip polygon) whose
/// violation cannot be classified as a geometric configuration.
#[derive(Debug, Error)]
pub enum ClipError {
    #[error("no intersection on a crossing edge near ({x}, {y}); clip polygon is not convex")]
    NonConvexClip { x: f64, y: f64 },
}

/// Convenience type alias for results using [`LaminaError`].
pub type Result<T> = std::result::Result<T, LaminaError>;
