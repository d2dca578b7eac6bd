//! Shape values accepted by the area calculator.
//!
//! - Closed set of five variants; every measurement is an `f64`.
//! - Values are immutable once built and carry no references to one another.
//! - Constructors do not validate geometry (positivity, polygon simplicity);
//!   callers are trusted to supply well-formed shapes.

use nalgebra::Vector2;

/// A planar shape described by its defining measurements.
///
/// `Triangle` holds a general triangle; right-angularity is checked at
/// calculation time, not at construction. This keeps the value general-purpose
/// while the calculator decides eligibility.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Circle with the given radius.
    Circle { radius: f64 },
    /// Triangle with three side lengths.
    Triangle { sides: [f64; 3] },
    /// Square with the given side length.
    Square { side: f64 },
    /// Rhombus with its two diagonal lengths.
    Rhombus { diagonals: [f64; 2] },
    /// Simple polygon as an ordered vertex list (at least 3 points,
    /// traversed consistently clockwise or counter-clockwise).
    Polygon { vertices: Vec<Vector2<f64>> },
}

impl Shape {
    #[inline]
    pub fn circle(radius: f64) -> Self {
        Self::Circle { radius }
    }

    #[inline]
    pub fn triangle(a: f64, b: f64, c: f64) -> Self {
        Self::Triangle { sides: [a, b, c] }
    }

    #[inline]
    pub fn square(side: f64) -> Self {
        Self::Square { side }
    }

    #[inline]
    pub fn rhombus(d1: f64, d2: f64) -> Self {
        Self::Rhombus { diagonals: [d1, d2] }
    }

    #[inline]
    pub fn polygon(vertices: Vec<Vector2<f64>>) -> Self {
        Self::Polygon { vertices }
    }

    /// Polygon from `(x, y)` pairs; convenient for tests and callers that
    /// do not already hold nalgebra vectors.
    pub fn polygon_from_coords(coords: &[(f64, f64)]) -> Self {
        Self::Polygon {
            vertices: coords.iter().map(|&(x, y)| Vector2::new(x, y)).collect(),
        }
    }
}
