mod arc;
mod circle;
mod contour;
mod ellipse;
mod polygon;
mod rect;

pub use arc::{CircularArc, EllipticalArc};
pub use circle::Circle;
pub use contour::{Contour, ContourVertex};
pub use ellipse::Ellipse;
pub use polygon::{Polygon, PolygonSet};
pub use rect::Rect;
