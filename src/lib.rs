//! Narrow-phase 2D collision kernel.
//!
//! Given two precisely described shapes, `overlap2d` answers whether they
//! overlap ([`Collider::intersects`]) or whether a point lies within a shape
//! ([`Intersect::contains`]). Broad-phase culling, collision response and
//! swept/continuous detection are left to the host; every operation here is
//! a pure, instantaneous, static-pose boolean query.
//!
//! The pairwise tests in [`inters`] are free functions and may be called
//! directly, skipping the [`Collider`] wrapper layer entirely.

pub mod collide;
pub mod inters;
pub mod shape;

pub use collide::{Collider, Intersect, ShapeKind};
pub use shape::{Circle, Line, Polygon, Rect, Size};

/// Scalar type used throughout. `f32`, or `f64` with the `f64` feature.
#[cfg(not(feature = "f64"))]
pub type Fp = f32;
/// Scalar type used throughout. `f32`, or `f64` with the `f64` feature.
#[cfg(feature = "f64")]
pub type Fp = f64;

/// 2D vector type used throughout. Doubles as the point/position type.
#[cfg(not(feature = "f64"))]
pub type Vec2 = glam::Vec2;
/// 2D vector type used throughout. Doubles as the point/position type.
#[cfg(feature = "f64")]
pub type Vec2 = glam::DVec2;

/// Shape construction error, returned by the validating constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A polygon requires at least three vertices.
    InsufficientVertices,
    /// Rect width and height must be non-negative.
    NegativeExtent,
    /// Circle radius must be non-negative.
    NegativeRadius,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InsufficientVertices => write!(f, "polygon requires at least three vertices"),
            Error::NegativeExtent => write!(f, "rect extents must be non-negative"),
            Error::NegativeRadius => write!(f, "circle radius must be non-negative"),
        }
    }
}

impl std::error::Error for Error {}
