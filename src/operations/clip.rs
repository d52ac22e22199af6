//! Sutherland-Hodgman polygon clipping against a convex clip window.

use crate::error::{ClipError, Result};
use crate::math::intersect_2d::line_line;
use crate::math::polygon_2d::signed_area;
use crate::math::Point2;

/// Clips `subject` against the convex polygon `clip`.
///
/// Both rings may arrive in either winding; they are normalized to
/// clockwise before clipping, so the result is clockwise. Points within
/// `eps` of a clip edge count as inside, which keeps shared edges in the
/// output; the same `eps` governs the parallelism test on edge crossings.
/// Either ring with fewer than three vertices clips to nothing.
///
/// # Errors
///
/// [`ClipError::NonConvexClip`] when a subject edge straddles a clip edge
/// yet no crossing point exists, which only happens when `clip` is not
/// convex.
pub fn clip_polygon(subject: &[Point2], clip: &[Point2], eps: f64) -> Result<Vec<Point2>> {
    if subject.len() < 3 || clip.len() < 3 {
        return Ok(Vec::new());
    }

    let mut output = normalize_clockwise(subject);
    let clip = normalize_clockwise(clip);

    let m = clip.len();
    for i in 0..m {
        let e0 = clip[i];
        let e1 = clip[(i + 1) % m];

        let input = std::mem::take(&mut output);
        if input.is_empty() {
            break;
        }

        let n = input.len();
        for j in 0..n {
            let cur = input[j];
            let next = input[(j + 1) % n];
            let cur_in = edge_side(&cur, &e0, &e1) <= eps;
            let next_in = edge_side(&next, &e0, &e1) <= eps;

            if next_in {
                if !cur_in {
                    output.push(crossing(&cur, &next, &e0, &e1, eps)?);
                }
                output.push(next);
            } else if cur_in {
                output.push(crossing(&cur, &next, &e0, &e1, eps)?);
            }
        }
    }

    Ok(output)
}

fn normalize_clockwise(ring: &[Point2]) -> Vec<Point2> {
    let mut out = ring.to_vec();
    if signed_area(&out) > 0.0 {
        out.reverse();
    }
    out
}

/// Cross product of the clip edge direction with `e0 -> p`; negative on
/// the clockwise interior side.
fn edge_side(p: &Point2, e0: &Point2, e1: &Point2) -> f64 {
    (e1.x - e0.x) * (p.y - e0.y) - (e1.y - e0.y) * (p.x - e0.x)
}

fn crossing(
    s: &Point2,
    e: &Point2,
    e0: &Point2,
    e1: &Point2,
    eps: f64,
) -> std::result::Result<Point2, ClipError> {
    line_line(s, e, e0, e1, eps)
        .map(|hit| hit.point)
        .ok_or(ClipError::NonConvexClip {
            x: (s.x + e.x) * 0.5,
            y: (s.y + e.y) * 0.5,
        })
}
