//! The immutable 3D vector primitive and its companions.

mod convert;
mod ops;
mod vec3;

pub use vec3::{
    distance, lerp, Vec3, EQ_ABS_TOL, ISCLOSE_ABS_TOL, NULLVEC, X_AXIS, Y_AXIS, Z_AXIS,
};
