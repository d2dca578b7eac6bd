//! Areas of planar shapes.
//!
//! Purpose
//! - Provide closed-form area formulas for a small, closed set of 2D shapes
//!   (circle, right triangle, square, rhombus, simple polygon) behind one
//!   dispatching entry point, `calculate_area`, with optional rounding.
//!
//! Why this design
//! - `Shape` is a sum type with exhaustive matching, so the shape-to-formula
//!   dispatch is compiler-checked and adding a variant is a compile error
//!   until every match site handles it.
//! - All operations are pure functions over immutable values; there is no
//!   shared state and no I/O, so everything is trivially thread-safe.

pub mod area;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use area::{
    calculate_area, circle_area, is_right_triangle, polygon_area, rhombus_area,
    signed_polygon_area, square_area, triangle_area, AreaError,
};
pub use nalgebra::Vector2 as Vec2;
pub use shape::Shape;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::area::{calculate_area, AreaError};
    pub use crate::shape::Shape;
    pub use nalgebra::Vector2 as Vec2;
}
