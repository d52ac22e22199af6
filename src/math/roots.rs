//! Closed-form real-root extraction for degree 1..=4 polynomials.
//!
//! Coefficients are given highest degree first. Each solver returns the
//! distinct real roots: duplicates within `eps` are collapsed and an
//! equation with no real roots yields an empty vector. A discriminant
//! within `eps` of zero is treated as exactly zero, reducing the root
//! multiplicity instead of branching on floating-point equality.
//!
//! Root ordering is unspecified (set semantics); callers comparing results
//! should sort first.

use std::f64::consts::PI;

/// Roots of `a*x + b = 0`.
///
/// Empty when `|a| <= eps`: either no solution or every `x`, neither of
/// which has a discrete root.
#[must_use]
pub fn linear_roots(a: f64, b: f64, eps: f64) -> Vec<f64> {
    if a.abs() <= eps {
        return Vec::new();
    }
    vec![-b / a]
}

/// Roots of `a*x^2 + b*x + c = 0`.
///
/// Degrades to [`linear_roots`] when the leading coefficient vanishes.
#[must_use]
pub fn quadratic_roots(a: f64, b: f64, c: f64, eps: f64) -> Vec<f64> {
    if a.abs() <= eps {
        return linear_roots(b, c, eps);
    }
    // Monic form x^2 + A*x + B = 0.
    let big_a = b / a;
    let big_b = c / a;
    let disc = big_a * big_a - 4.0 * big_b;
    if disc.abs() <= eps {
        vec![-big_a / 2.0]
    } else if disc > 0.0 {
        let sq = disc.sqrt();
        vec![(-big_a + sq) / 2.0, (-big_a - sq) / 2.0]
    } else {
        Vec::new()
    }
}

/// Roots of `a*x^3 + b*x^2 + c*x + d = 0` (Cardano's method).
///
/// Degrades to [`quadratic_roots`] when the leading coefficient vanishes.
#[must_use]
pub fn cubic_roots(a: f64, b: f64, c: f64, d: f64, eps: f64) -> Vec<f64> {
    if a.abs() <= eps {
        return quadratic_roots(b, c, d, eps);
    }
    let big_a = b / a;
    let big_b = c / a;
    let big_c = d / a;

    let q = (3.0 * big_b - big_a * big_a) / 9.0;
    let r = (9.0 * big_a * big_b - 27.0 * big_c - 2.0 * big_a.powi(3)) / 54.0;
    let disc = q.powi(3) + r * r;
    let shift = -big_a / 3.0;

    let mut roots = Vec::with_capacity(3);
    if disc.abs() <= eps {
        // Repeated roots: one at 2*cbrt(R), a double one at -cbrt(R).
        let s = r.cbrt();
        push_distinct(&mut roots, shift + 2.0 * s, eps);
        push_distinct(&mut roots, shift - s, eps);
    } else if disc > 0.0 {
        // One real root; the complex pair collapses onto the real axis
        // when its imaginary part is within eps of zero.
        let sq = disc.sqrt();
        let s = (r + sq).cbrt();
        let t = (r - sq).cbrt();
        push_distinct(&mut roots, shift + s + t, eps);
        if ((3.0_f64.sqrt() / 2.0) * (s - t)).abs() <= eps {
            push_distinct(&mut roots, shift - (s + t) / 2.0, eps);
        }
    } else {
        // Three real roots, trigonometric form.
        let theta = (r / (-q.powi(3)).sqrt()).acos();
        let m = 2.0 * (-q).sqrt();
        push_distinct(&mut roots, shift + m * (theta / 3.0).cos(), eps);
        push_distinct(&mut roots, shift + m * ((theta + 2.0 * PI) / 3.0).cos(), eps);
        push_distinct(&mut roots, shift + m * ((theta + 4.0 * PI) / 3.0).cos(), eps);
    }
    roots
}

/// Roots of `a*x^4 + b*x^3 + c*x^2 + d*x + e = 0` (Ferrari's method).
///
/// Resolves the auxiliary cubic with [`cubic_roots`], then factors the
/// quartic into two quadratics whose discriminants pass through the same
/// eps-collapse rule. Degrades to [`cubic_roots`] when the leading
/// coefficient vanishes.
#[must_use]
pub fn quartic_roots(a: f64, b: f64, c: f64, d: f64, e: f64, eps: f64) -> Vec<f64> {
    if a.abs() <= eps {
        return cubic_roots(b, c, d, e, eps);
    }
    let big_a = b / a;
    let big_b = c / a;
    let big_c = d / a;
    let big_d = e / a;

    // Any real root of the resolvent cubic yields a valid factorization.
    let resolvent = cubic_roots(
        1.0,
        -big_b,
        big_a * big_c - 4.0 * big_d,
        -(big_a * big_a * big_d - 4.0 * big_b * big_d + big_c * big_c),
        eps,
    );
    let Some(y) = resolvent.first().copied() else {
        return Vec::new();
    };

    // (x^2 + (A/2)x + y/2)^2 - (s*x + f)^2 splits into two quadratics.
    let s_sq = big_a * big_a / 4.0 - big_b + y;
    let (s, f) = if s_sq > eps {
        let s = s_sq.sqrt();
        (s, (big_a * y / 2.0 - big_c) / (2.0 * s))
    } else {
        (0.0, (y * y / 4.0 - big_d).max(0.0).sqrt())
    };

    let mut roots = Vec::with_capacity(4);
    for r in quadratic_roots(1.0, big_a / 2.0 - s, y / 2.0 - f, eps) {
        push_distinct(&mut roots, r, eps);
    }
    for r in quadratic_roots(1.0, big_a / 2.0 + s, y / 2.0 + f, eps) {
        push_distinct(&mut roots, r, eps);
    }
    roots
}

fn push_distinct(roots: &mut Vec<f64>, x: f64, eps: f64) {
    if !roots.iter().any(|r| (r - x).abs() <= eps) {
        roots.push(x);
    }
}
