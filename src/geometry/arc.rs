use std::f64::consts::TAU;

use crate::math::Point2;

/// A circular arc: center, radius, start angle, and signed sweep.
///
/// The sweep sign encodes direction (positive counter-clockwise in angle
/// space); `|sweep| >= 2*pi` covers the full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl CircularArc {
    /// Creates a new circular arc.
    #[must_use]
    pub fn new(center: Point2, radius: f64, start_angle: f64, sweep: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            sweep,
        }
    }

    /// Point on the arc at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = self.start_angle + self.sweep * t;
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// The arc's start point (parameter 0).
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at(0.0)
    }

    /// The arc's end point (parameter 1).
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at(1.0)
    }

    /// Builds the arc spanning `p0`..`p1` with the given bulge.
    ///
    /// Bulge convention: `bulge = tan(sweep / 4)`; 0 is a straight line,
    /// positive sweeps counter-clockwise, `|bulge| = 1` is a semicircle.
    /// A zero-length chord or zero bulge yields a degenerate arc
    /// (`radius = 0`, `sweep = 0`), which every consumer treats as empty.
    #[must_use]
    pub fn from_bulge(p0: &Point2, p1: &Point2, bulge: f64) -> Self {
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let chord_len = dx.hypot(dy);
        if chord_len < 1e-12 || bulge.abs() < 1e-12 {
            return Self::new(*p0, 0.0, 0.0, 0.0);
        }

        // Signed distance from the chord midpoint to the center, as a
        // fraction of the half-chord.
        let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
        let mx = (p0.x + p1.x) * 0.5;
        let my = (p0.y + p1.y) * 0.5;
        let nx = -dy / chord_len;
        let ny = dx / chord_len;
        let center = Point2::new(
            mx + sagitta_ratio * (chord_len * 0.5) * nx,
            my + sagitta_ratio * (chord_len * 0.5) * ny,
        );

        // r = d*(1+b^2)/(4*|b|), from r = d/(2*sin(sweep/2)) with
        // sweep = 4*atan(b).
        let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());
        let start_angle = (p0.y - center.y).atan2(p0.x - center.x);
        let sweep = 4.0 * bulge.atan();
        let sweep = if sweep > TAU {
            sweep - TAU
        } else if sweep < -TAU {
            sweep + TAU
        } else {
            sweep
        };

        Self::new(center, radius, start_angle, sweep)
    }

    /// Bulge value of this arc (`tan(sweep / 4)`).
    #[must_use]
    pub fn bulge(&self) -> f64 {
        (self.sweep / 4.0).tan()
    }
}

/// An elliptical arc: an [`Ellipse`](crate::geometry::Ellipse) outline
/// restricted to a signed angular sweep of the parametric angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArc {
    pub center: Point2,
    pub rx: f64,
    pub ry: f64,
    pub rotation: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl EllipticalArc {
    /// Creates a new elliptical arc.
    #[must_use]
    pub fn new(
        center: Point2,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        sweep: f64,
    ) -> Self {
        Self {
            center,
            rx,
            ry,
            rotation,
            start_angle,
            sweep,
        }
    }

    /// Point on the arc at parameter `t` in `[0, 1]`.
    ///
    /// The angle is the parametric angle of the underlying ellipse, not the
    /// polar angle of the result.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = self.start_angle + self.sweep * t;
        let lx = self.rx * angle.cos();
        let ly = self.ry * angle.sin();
        let (sin, cos) = self.rotation.sin_cos();
        Point2::new(
            self.center.x + lx * cos - ly * sin,
            self.center.y + lx * sin + ly * cos,
        )
    }

    /// The arc's start point (parameter 0).
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at(0.0)
    }

    /// The arc's end point (parameter 1).
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-10;

    #[test]
    fn semicircle_from_bulge() {
        // bulge = 1: semicircle from (0,0) to (2,0), center (1,0), radius 1,
        // sweep +pi, running through the bottom.
        let arc = CircularArc::from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), 1.0);
        assert!((arc.center.x - 1.0).abs() < TOL);
        assert!(arc.center.y.abs() < TOL);
        assert!((arc.radius - 1.0).abs() < TOL);
        assert!((arc.sweep - PI).abs() < TOL);

        let mid = arc.point_at(0.5);
        assert!((mid.x - 1.0).abs() < TOL, "mid.x={}", mid.x);
        assert!((mid.y + 1.0).abs() < TOL, "mid.y={}", mid.y);
    }

    #[test]
    fn clockwise_semicircle_runs_through_top() {
        let arc = CircularArc::from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), -1.0);
        assert!((arc.sweep + PI).abs() < TOL);
        let mid = arc.point_at(0.5);
        assert!((mid.x - 1.0).abs() < TOL);
        assert!((mid.y - 1.0).abs() < TOL);
    }

    #[test]
    fn quarter_circle_from_bulge() {
        let bulge = (PI / 8.0).tan();
        let arc =
            CircularArc::from_bulge(&Point2::new(1.0, 0.0), &Point2::new(0.0, 1.0), bulge);
        assert!((arc.radius - 1.0).abs() < 1e-6, "r={}", arc.radius);
        assert!(arc.center.x.abs() < 1e-6);
        assert!(arc.center.y.abs() < 1e-6);
        assert!((arc.sweep - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn endpoints_match_chord() {
        let p0 = Point2::new(-1.0, 2.0);
        let p1 = Point2::new(3.0, 5.0);
        let arc = CircularArc::from_bulge(&p0, &p1, 0.7);
        let s = arc.start_point();
        let e = arc.end_point();
        assert_relative_eq!(s.x, p0.x, epsilon = 1e-9);
        assert_relative_eq!(s.y, p0.y, epsilon = 1e-9);
        assert_relative_eq!(e.x, p1.x, epsilon = 1e-9);
        assert_relative_eq!(e.y, p1.y, epsilon = 1e-9);
    }

    #[test]
    fn bulge_round_trip() {
        let arc = CircularArc::from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), 0.4);
        assert_relative_eq!(arc.bulge(), 0.4, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_chord_gives_empty_arc() {
        let p = Point2::new(1.0, 1.0);
        let arc = CircularArc::from_bulge(&p, &p, 1.0);
        assert!(arc.radius.abs() < TOL);
        assert!(arc.sweep.abs() < TOL);
    }

    #[test]
    fn elliptical_arc_points() {
        // Axis-aligned ellipse, rx=2, ry=1, quarter sweep from angle 0.
        let arc = EllipticalArc::new(Point2::origin(), 2.0, 1.0, 0.0, 0.0, PI / 2.0);
        let s = arc.start_point();
        let e = arc.end_point();
        assert!((s.x - 2.0).abs() < TOL && s.y.abs() < TOL);
        assert!(e.x.abs() < TOL && (e.y - 1.0).abs() < TOL);
    }

    #[test]
    fn rotated_elliptical_arc_points() {
        // Quarter-turn rotation maps the major axis onto +y.
        let arc = EllipticalArc::new(Point2::origin(), 2.0, 1.0, PI / 2.0, 0.0, PI / 2.0);
        let s = arc.start_point();
        assert!(s.x.abs() < TOL && (s.y - 2.0).abs() < TOL);
    }
}
