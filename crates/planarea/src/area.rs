//! Area calculator: variant dispatch, closed-form formulas, rounding.
//!
//! Purpose
//! - Match a `Shape` to its closed-form area formula, gate triangles on
//!   right-angularity, and optionally round the result.
//!
//! Conventions
//! - Formulas are free pure functions so they can be called and tested
//!   without going through the dispatcher.
//! - The right-triangle gate uses a relative tolerance (`REL_EPS`), not
//!   exact equality, to absorb floating-point rounding in the side lengths.
//! - Rounding is half-away-from-zero (`f64::round` semantics).

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

use crate::shape::Shape;

/// Relative tolerance for the right-triangle equality check.
///
/// Two quantities compare equal when they differ by at most `REL_EPS` times
/// the larger magnitude. Scale-free, so the gate behaves the same for
/// triangles of any size.
const REL_EPS: f64 = 1e-9;

/// Errors surfaced by the area calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AreaError {
    /// The shape has no supported area formula. Raised for triangles that
    /// are not right-angled; general triangles are out of scope here.
    UnsupportedShape { reason: &'static str },
}

impl fmt::Display for AreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedShape { reason } => write!(f, "unsupported shape: {reason}"),
        }
    }
}

impl std::error::Error for AreaError {}

/// Compute the area of `shape`, optionally rounded to `precision` fractional
/// digits.
///
/// Dispatches exhaustively over the shape variants. `Triangle` is gated by
/// [`is_right_triangle`]; a non-right triangle fails with
/// [`AreaError::UnsupportedShape`]. No other failure modes exist: negative
/// dimensions and degenerate polygons are not validated.
pub fn calculate_area(shape: &Shape, precision: Option<u32>) -> Result<f64, AreaError> {
    let area = match shape {
        Shape::Circle { radius } => circle_area(*radius),
        Shape::Triangle { sides } => {
            let [a, b, c] = *sides;
            if !is_right_triangle(a, b, c) {
                return Err(AreaError::UnsupportedShape {
                    reason: "triangle is not right-angled",
                });
            }
            triangle_area(a, b, c)
        }
        Shape::Square { side } => square_area(*side),
        Shape::Rhombus { diagonals } => rhombus_area(diagonals[0], diagonals[1]),
        Shape::Polygon { vertices } => polygon_area(vertices),
    };
    Ok(apply_precision(area, precision))
}

/// Area of a circle: `π r²`.
#[inline]
pub fn circle_area(radius: f64) -> f64 {
    std::f64::consts::PI * radius * radius
}

/// Area of a triangle from its side lengths via Heron's formula.
///
/// Uses the semi-perimeter `s = (a+b+c)/2` and `√(s(s−a)(s−b)(s−c))`. The
/// dispatcher only admits right triangles, but the formula is the general
/// one; for a right triangle it agrees with half the leg product.
#[inline]
pub fn triangle_area(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Area of a square: `side²`.
#[inline]
pub fn square_area(side: f64) -> f64 {
    side * side
}

/// Area of a rhombus from its diagonals: `d₁ d₂ / 2`.
#[inline]
pub fn rhombus_area(d1: f64, d2: f64) -> f64 {
    d1 * d2 / 2.0
}

/// Signed shoelace area of a vertex list.
///
/// Half the sum of cross products over consecutive vertex pairs (wrapping).
/// Positive for counter-clockwise traversal, negative for clockwise;
/// invariant under cyclic rotation of the list and negated by reversal.
pub fn signed_polygon_area(vertices: &[Vector2<f64>]) -> f64 {
    let n = vertices.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = vertices[i];
        let q = vertices[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    sum / 2.0
}

/// Area of a simple polygon: absolute value of the signed shoelace sum.
#[inline]
pub fn polygon_area(vertices: &[Vector2<f64>]) -> f64 {
    signed_polygon_area(vertices).abs()
}

/// Whether three side lengths form a right triangle.
///
/// Sorts the sides ascending and compares the sum of squares of the two
/// smaller against the square of the largest, within `REL_EPS` relative
/// tolerance.
pub fn is_right_triangle(a: f64, b: f64, c: f64) -> bool {
    let mut s = [a, b, c];
    s.sort_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
    approx_eq(s[0] * s[0] + s[1] * s[1], s[2] * s[2])
}

/// Tolerant equality: `|x − y| ≤ REL_EPS · max(|x|, |y|)`.
#[inline]
fn approx_eq(x: f64, y: f64) -> bool {
    (x - y).abs() <= REL_EPS * x.abs().max(y.abs())
}

/// Round `value` to `precision` fractional digits if given, else pass it
/// through unchanged. Half-way cases round away from zero.
#[inline]
pub fn apply_precision(value: f64, precision: Option<u32>) -> f64 {
    match precision {
        Some(p) => {
            let factor = 10f64.powi(p as i32);
            (value * factor).round() / factor
        }
        None => value,
    }
}
