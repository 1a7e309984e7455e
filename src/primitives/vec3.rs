//! Immutable 3D vector type for positions, directions and offsets.

use approx::AbsDiffEq;
use std::cmp::Ordering;

/// Absolute per-component tolerance used by `==` on [`Vec3`].
pub const EQ_ABS_TOL: f64 = 1e-14;

/// Default absolute per-component tolerance for [`Vec3::isclose`].
pub const ISCLOSE_ABS_TOL: f64 = 1e-12;

/// An immutable 3D vector or point with `f64` components.
///
/// `Vec3` is a plain value: components cannot be changed after
/// construction, and every operation that looks like a mutation returns a
/// new vector. Geometric methods accept anything convertible to a vector
/// as their operand, so pairs, triples and arrays work directly:
///
/// ```
/// use vectum::Vec3;
///
/// let v = Vec3::new(3.0, 4.0, 0.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v.dot((3.0, 4.0)), 25.0);
/// assert_eq!(v + (1.0, 2.0), Vec3::new(4.0, 6.0, 0.0));
/// ```
///
/// Equality via `==` is tolerance-based: components are compared with
/// absolute tolerance [`EQ_ABS_TOL`] to absorb floating round-off from
/// the algebra. Use [`Vec3::isclose`] for explicit near-equality tests
/// with a caller-controlled tolerance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vec3 {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) z: f64,
}

/// Unit vector along the x-axis.
pub const X_AXIS: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Unit vector along the y-axis.
pub const Y_AXIS: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Unit vector along the z-axis.
pub const Z_AXIS: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// The zero vector.
pub const NULLVEC: Vec3 = Vec3::new(0.0, 0.0, 0.0);

impl Vec3 {
    /// Creates a new vector from three components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector in the xy-plane (z = 0).
    #[inline]
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Creates a vector in the xy-plane from a polar angle (radians) and
    /// length.
    #[inline]
    pub fn from_angle_rad(angle: f64, length: f64) -> Self {
        Self::new(angle.cos() * length, angle.sin() * length, 0.0)
    }

    /// Creates a vector in the xy-plane from a polar angle (degrees) and
    /// length.
    #[inline]
    pub fn from_angle_deg(angle: f64, length: f64) -> Self {
        Self::from_angle_rad(angle.to_radians(), length)
    }

    /// Returns the x component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the z component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns the same vector with z forced to 0.
    #[inline]
    pub const fn xy(&self) -> Self {
        Self::new(self.x, self.y, 0.0)
    }

    /// Returns the components as an (x, y, z) tuple.
    #[inline]
    pub const fn xyz(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Returns the components as an `[x, y, z]` array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns a new vector with the given components overridden.
    ///
    /// `None` keeps the current component:
    ///
    /// ```
    /// use vectum::Vec3;
    ///
    /// let v = Vec3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.replace(None, Some(7.0), None), Vec3::new(1.0, 7.0, 3.0));
    /// ```
    #[inline]
    pub fn replace(self, x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        Self::new(
            x.unwrap_or(self.x),
            y.unwrap_or(self.y),
            z.unwrap_or(self.z),
        )
    }

    /// Returns the squared magnitude (length squared).
    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns the magnitude of the (x, y) projection.
    ///
    /// Computed with `hypot`, which stays accurate where squaring the
    /// components would overflow or lose precision.
    #[inline]
    pub fn magnitude_xy(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns `true` if the vector is equal to the zero vector within
    /// [`EQ_ABS_TOL`].
    #[inline]
    pub fn is_null(self) -> bool {
        self == NULLVEC
    }

    /// Returns the vector scaled to unit length.
    ///
    /// A null vector has no direction; normalizing it yields non-finite
    /// components. Callers must guard with [`Vec3::is_null`] where that
    /// matters.
    #[inline]
    pub fn normalize(self) -> Self {
        self.normalize_to(1.0)
    }

    /// Returns the vector scaled to the given length.
    ///
    /// Same null-vector precondition as [`Vec3::normalize`].
    #[inline]
    pub fn normalize_to(self, length: f64) -> Self {
        self * (length / self.magnitude())
    }

    /// Returns the vector scaled by -1.
    #[inline]
    pub fn reversed(self) -> Self {
        self * -1.0
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: impl Into<Vec3>) -> f64 {
        let other = other.into();
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector.
    #[inline]
    pub fn cross(self, other: impl Into<Vec3>) -> Self {
        let other = other.into();
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: impl Into<Vec3>) -> f64 {
        (other.into() - self).magnitude()
    }

    /// Projects `other` onto the direction of `self`.
    ///
    /// Normalizes `self` first, so a null `self` yields non-finite
    /// components.
    #[inline]
    pub fn project(self, other: impl Into<Vec3>) -> Self {
        let uv = self.normalize();
        uv * uv.dot(other)
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// When `factor = 0`, returns `self`. When `factor = 1`, returns
    /// `other`. Factors outside [0, 1] extrapolate.
    #[inline]
    pub fn lerp(self, other: impl Into<Vec3>, factor: f64) -> Self {
        self + (other.into() - self) * factor
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: impl Into<Vec3>) -> Self {
        self.lerp(other, 0.5)
    }

    /// Returns the signed angle (radians) of the (x, y) projection
    /// relative to the x-axis, in the range (-pi, pi].
    #[inline]
    pub fn angle_rad(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns the signed angle (degrees) of the (x, y) projection
    /// relative to the x-axis, in the range (-180, 180].
    #[inline]
    pub fn angle_deg(self) -> f64 {
        self.angle_rad().to_degrees()
    }

    /// Returns the unsigned angle (radians) between the vector and the
    /// x-axis in full 3D, in the range [0, pi].
    ///
    /// NaN for a null vector, same precondition as [`Vec3::normalize`].
    #[inline]
    pub fn spatial_angle_rad(self) -> f64 {
        X_AXIS.dot(self.normalize()).acos()
    }

    /// Returns the unsigned angle (degrees) between the vector and the
    /// x-axis in full 3D, in the range [0, 180].
    #[inline]
    pub fn spatial_angle_deg(self) -> f64 {
        self.spatial_angle_rad().to_degrees()
    }

    /// Returns the unsigned angle (radians) between `self` and `other`,
    /// in the range [0, pi].
    #[inline]
    pub fn angle_between(self, other: impl Into<Vec3>) -> f64 {
        self.normalize().dot(other.into().normalize()).acos()
    }

    /// Returns the vector rotated 90 degrees counter-clockwise in the
    /// xy-plane; z is unchanged.
    #[inline]
    pub fn orthogonal(self) -> Self {
        Self::new(-self.y, self.x, self.z)
    }

    /// Returns the vector rotated 90 degrees clockwise in the xy-plane;
    /// z is unchanged.
    #[inline]
    pub fn orthogonal_cw(self) -> Self {
        Self::new(self.y, -self.x, self.z)
    }

    /// Rotates the (x, y) projection about the z-axis by the given signed
    /// angle (radians); z is unchanged.
    ///
    /// The result is re-synthesized from the rotated planar angle and the
    /// xy-magnitude, so repeated rotations do not compound matrix
    /// round-off.
    #[inline]
    pub fn rot_z_rad(self, angle: f64) -> Self {
        let flat = Self::from_angle_rad(self.angle_rad() + angle, self.magnitude_xy());
        Self::new(flat.x, flat.y, self.z)
    }

    /// Rotates the (x, y) projection about the z-axis by the given signed
    /// angle (degrees); z is unchanged.
    #[inline]
    pub fn rot_z_deg(self, angle: f64) -> Self {
        self.rot_z_rad(angle.to_radians())
    }

    /// Tests near-equality with the default tolerance [`ISCLOSE_ABS_TOL`].
    #[inline]
    pub fn isclose(self, other: impl Into<Vec3>) -> bool {
        self.isclose_with(other, ISCLOSE_ABS_TOL)
    }

    /// Tests near-equality with a caller-supplied absolute tolerance.
    #[inline]
    pub fn isclose_with(self, other: impl Into<Vec3>, abs_tol: f64) -> bool {
        self.abs_diff_eq(&other.into(), abs_tol)
    }
}

/// Tolerance-based structural equality.
///
/// Components are compared with absolute tolerance [`EQ_ABS_TOL`]: looser
/// than bit equality, tighter than the default [`Vec3::isclose`]
/// tolerance.
impl PartialEq for Vec3 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, EQ_ABS_TOL)
    }
}

/// Exact lexicographic ordering on (x, y, z).
///
/// Used for deterministic sorting; unlike `==`, no tolerance is applied.
/// Returns `None` if a compared component is NaN.
impl PartialOrd for Vec3 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.x.partial_cmp(&other.x) {
            Some(Ordering::Equal) => match self.y.partial_cmp(&other.y) {
                Some(Ordering::Equal) => self.z.partial_cmp(&other.z),
                ord => ord,
            },
            ord => ord,
        }
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> f64 {
        ISCLOSE_ABS_TOL
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon)
            && f64::abs_diff_eq(&self.y, &other.y, epsilon)
            && f64::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

/// Computes the distance between two points.
///
/// Function-style companion to [`Vec3::distance`]; both points accept any
/// vector-convertible shape.
#[inline]
pub fn distance(p1: impl Into<Vec3>, p2: impl Into<Vec3>) -> f64 {
    p1.into().distance(p2)
}

/// Linearly interpolates between two points.
///
/// Function-style companion to [`Vec3::lerp`].
#[inline]
pub fn lerp(p1: impl Into<Vec3>, p2: impl Into<Vec3>, factor: f64) -> Vec3 {
    p1.into().lerp(p2, factor)
}
