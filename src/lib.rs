//! vectum - Immutable 3D vector arithmetic
//!
//! The numeric primitive underneath drawing and document geometry: an
//! immutable 3D vector/point value with a closed algebra of arithmetic,
//! geometric, and tolerance-based comparison operations.

pub mod error;
pub mod primitives;

pub use error::VectumError;
pub use primitives::{
    distance, lerp, Vec3, EQ_ABS_TOL, ISCLOSE_ABS_TOL, NULLVEC, X_AXIS, Y_AXIS, Z_AXIS,
};
