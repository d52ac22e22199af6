//! Angle wrapping and directed angular sweep containment.
//!
//! The sweep test is the single shared primitive for "is this angle on the
//! arc", used by the arc classifiers, the arc intersection filters, and
//! extreme-angle bounding logic in higher layers.

use std::f64::consts::TAU;

use super::TOLERANCE;

/// Wraps an angle into `(-pi, pi]` using exact `2*pi` periodicity.
#[must_use]
pub fn wrap_angle(angle: f64) -> f64 {
    angle - TAU * (angle / TAU).round()
}

/// Returns true when `angle` lies on the directed sweep starting at
/// `start_angle` and extending `sweep` radians.
///
/// The sweep is signed: positive runs counter-clockwise, negative
/// clockwise. Sweeps wider than a full turn cover every angle.
#[must_use]
pub fn sweep_contains(angle: f64, start_angle: f64, sweep: f64) -> bool {
    if sweep.abs() > TAU {
        return true;
    }
    let s = wrap_angle(start_angle);
    let e = wrap_angle(s + sweep);
    let a = wrap_angle(angle);
    if sweep >= 0.0 {
        if s < e {
            s <= a && a <= e
        } else {
            // Sweep wraps across the branch cut.
            a >= s || a <= e
        }
    } else if s > e {
        e <= a && a <= s
    } else {
        a <= s || a >= e
    }
}

/// Converts an absolute angle to an arc parameter `t` in `[0, 1]`.
///
/// Returns `None` if the angle is not within the arc's angular range or
/// the sweep is degenerate.
#[must_use]
pub fn angle_to_arc_param(angle: f64, start_angle: f64, sweep: f64) -> Option<f64> {
    if sweep.abs() <= TOLERANCE {
        return None;
    }
    let eps = TOLERANCE * 100.0;

    // Angular offset from start_angle, normalized to the sweep direction.
    let mut delta = angle - start_angle;
    if sweep > 0.0 {
        while delta < -eps {
            delta += TAU;
        }
        while delta > TAU + eps {
            delta -= TAU;
        }
    } else {
        while delta > eps {
            delta -= TAU;
        }
        while delta < -TAU - eps {
            delta += TAU;
        }
    }

    let t = delta / sweep;
    if (-eps..=1.0 + eps).contains(&t) {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}
