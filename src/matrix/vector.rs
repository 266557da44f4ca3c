//! Fixed-size column vectors for geometric calculations.
//!
//! A [`VecN`] is a [`Matrix`] of shape `[n, 1]` with `n` of 2, 3, or 4,
//! wrapped so the geometric operations (dot, cross, projection, rotation)
//! have a home. The wrapper owns its matrix — storage and arithmetic
//! delegate down; nothing is inherited.
//!
//! # Sizes and Casting
//!
//! The three sizes cover the usual geometric roles: 2D points, 3D
//! directions, and homogeneous 4-component columns.
//! [`from_matrix`](VecN::from_matrix) is the universal adapter between
//! them: it takes any column-vector matrix and a target size, copying the
//! leading components and zero-padding the rest, so a 2D vector can be
//! treated as 3D (z = 0) and a 4D one truncated to 3D without ceremony.
//!
//! ```
//! use linalg_core::VecN;
//!
//! let flat = VecN::new(2, &[100.0, -200.0])?;
//! let lifted = flat.resize(4)?;
//! assert_eq!(lifted.components(), &[100.0, -200.0, 0.0, 0.0]);
//! assert_eq!(lifted.resize(2)?, flat);
//! # Ok::<(), linalg_core::LinalgError>(())
//! ```
//!
//! # Absent Axes
//!
//! Named accessors return `Option<f64>`: `w()` on a 2-vector is `None`,
//! not an error, and the matching setter is a silent no-op. This keeps
//! size-generic call sites free of bounds bookkeeping. Positional access
//! with a hard bound lives in [`axis`](VecN::axis).

use super::dense::Matrix;
use crate::constants::{DEG_TO_RAD, QUARTER_TURN_DEG, RAD_TO_DEG};
use crate::errors::{LinalgError, LinalgResult};
use crate::math::wrap_degrees;
use std::fmt;

/// A column vector of 2, 3, or 4 components over [`Matrix`] storage.
///
/// # Construction
///
/// ```
/// use linalg_core::VecN;
///
/// let v = VecN::new(3, &[1.0, 2.0, 3.0])?;
/// assert_eq!(v.size(), 3);
///
/// // Unit vectors along the coordinate axes
/// let x = VecN::x_axis();
/// assert_eq!(x.components(), &[1.0, 0.0, 0.0]);
///
/// let zero = VecN::zeros(4)?;
/// assert_eq!(zero.magnitude(), 0.0);
/// # Ok::<(), linalg_core::LinalgError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VecN {
    mat: Matrix,
}

impl VecN {
    /// Smallest supported vector size.
    pub const MIN_SIZE: usize = 2;
    /// Largest supported vector size.
    pub const MAX_SIZE: usize = 4;

    /// Creates a vector of the given size from its components.
    ///
    /// Fails with an invalid-value error if `size` is outside 2..=4 or the
    /// component count does not match.
    pub fn new(size: usize, components: &[f64]) -> LinalgResult<Self> {
        Self::validate_size(size, "VecN::new")?;
        if components.len() != size {
            return Err(LinalgError::invalid_value(
                "VecN::new",
                &format!(
                    "expected {} components, got {}",
                    size,
                    components.len()
                ),
            ));
        }
        Ok(Self {
            mat: Matrix::from_raw_parts(vec![size, 1], components.to_vec()),
        })
    }

    /// Creates the zero vector of the given size.
    pub fn zeros(size: usize) -> LinalgResult<Self> {
        Self::validate_size(size, "VecN::zeros")?;
        Ok(Self {
            mat: Matrix::from_raw_parts(vec![size, 1], vec![0.0; size]),
        })
    }

    /// The 3D unit vector along the X axis.
    #[inline]
    pub fn x_axis() -> Self {
        Self {
            mat: Matrix::from_raw_parts(vec![3, 1], vec![1.0, 0.0, 0.0]),
        }
    }

    /// The 3D unit vector along the Y axis.
    #[inline]
    pub fn y_axis() -> Self {
        Self {
            mat: Matrix::from_raw_parts(vec![3, 1], vec![0.0, 1.0, 0.0]),
        }
    }

    /// The 3D unit vector along the Z axis.
    #[inline]
    pub fn z_axis() -> Self {
        Self {
            mat: Matrix::from_raw_parts(vec![3, 1], vec![0.0, 0.0, 1.0]),
        }
    }

    fn validate_size(size: usize, operation: &str) -> LinalgResult<()> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(LinalgError::invalid_value(
                operation,
                &format!("vector size must be 2, 3, or 4, got {}", size),
            ));
        }
        Ok(())
    }

    /// True if `mat` is a column vector with exactly `size` components.
    pub fn is_vec(size: usize, mat: &Matrix) -> bool {
        mat.is_vector() && mat.dim()[0] == size
    }

    /// Casts any column-vector matrix to a vector of the given size.
    ///
    /// Leading components are copied up to `min(size, mat rows)`; remaining
    /// slots are zero-filled. Fails with an invalid-value error if `mat` is
    /// not a column vector or `size` is unsupported.
    pub fn from_matrix(size: usize, mat: &Matrix) -> LinalgResult<Self> {
        Self::validate_size(size, "VecN::from_matrix")?;
        if !mat.is_vector() {
            return Err(LinalgError::invalid_value(
                "VecN::from_matrix",
                &format!("shape {:?} is not a column vector", mat.dim()),
            ));
        }
        Ok(Self {
            mat: Matrix::from_raw_parts(vec![size, 1], padded(mat.data(), size)),
        })
    }

    /// Re-casts this vector to another size, truncating or zero-padding.
    pub fn resize(&self, size: usize) -> LinalgResult<Self> {
        Self::validate_size(size, "VecN::resize")?;
        Ok(Self {
            mat: Matrix::from_raw_parts(vec![size, 1], padded(self.components(), size)),
        })
    }

    /// Number of components (2, 3, or 4).
    #[inline]
    pub fn size(&self) -> usize {
        self.mat.dim()[0]
    }

    /// The components as a slice.
    #[inline]
    pub fn components(&self) -> &[f64] {
        self.mat.data()
    }

    /// The underlying `[n, 1]` matrix.
    #[inline]
    pub fn as_matrix(&self) -> &Matrix {
        &self.mat
    }

    /// Consumes the vector, yielding its `[n, 1]` matrix.
    #[inline]
    pub fn into_matrix(self) -> Matrix {
        self.mat
    }

    fn component(&self, index: usize) -> Option<f64> {
        self.components().get(index).copied()
    }

    fn set_component(&mut self, index: usize, value: f64) {
        if let Some(slot) = self.mat.data_mut().get_mut(index) {
            *slot = value;
        }
    }

    /// First component.
    #[inline]
    pub fn x(&self) -> Option<f64> {
        self.component(0)
    }

    /// Second component.
    #[inline]
    pub fn y(&self) -> Option<f64> {
        self.component(1)
    }

    /// Third component, `None` for 2-vectors.
    #[inline]
    pub fn z(&self) -> Option<f64> {
        self.component(2)
    }

    /// Fourth component, `None` below size 4.
    #[inline]
    pub fn w(&self) -> Option<f64> {
        self.component(3)
    }

    /// Sets the first component.
    #[inline]
    pub fn set_x(&mut self, value: f64) {
        self.set_component(0, value);
    }

    /// Sets the second component.
    #[inline]
    pub fn set_y(&mut self, value: f64) {
        self.set_component(1, value);
    }

    /// Sets the third component; silently does nothing on a 2-vector.
    #[inline]
    pub fn set_z(&mut self, value: f64) {
        self.set_component(2, value);
    }

    /// Sets the fourth component; silently does nothing below size 4.
    #[inline]
    pub fn set_w(&mut self, value: f64) {
        self.set_component(3, value);
    }

    /// The `(x, y)` pair.
    pub fn xy(&self) -> [Option<f64>; 2] {
        [self.x(), self.y()]
    }

    /// The `(x, y, z)` triple; absent axes are `None`.
    pub fn xyz(&self) -> [Option<f64>; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// The `(x, y, z, w)` quadruple; absent axes are `None`.
    pub fn xyzw(&self) -> [Option<f64>; 4] {
        [self.x(), self.y(), self.z(), self.w()]
    }

    /// The `(w, x, y, z)` quadruple; absent axes are `None`.
    pub fn wxyz(&self) -> [Option<f64>; 4] {
        [self.w(), self.x(), self.y(), self.z()]
    }

    /// Positional component read with a hard bound.
    ///
    /// Unlike the named accessors this fails with an out-of-range error for
    /// `index >= size()` instead of returning `None`.
    pub fn axis(&self, index: usize) -> LinalgResult<f64> {
        if index >= self.size() {
            return Err(LinalgError::out_of_range(
                "VecN::axis",
                &format!("axis {} outside [0, {})", index, self.size()),
            ));
        }
        Ok(self.components()[index])
    }

    /// Sum of squared components.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.components().iter().map(|v| v * v).sum()
    }

    /// Euclidean length.
    ///
    /// ```
    /// use linalg_core::VecN;
    ///
    /// let v = VecN::new(2, &[3.0, 4.0])?;
    /// assert_eq!(v.magnitude(), 5.0);
    /// # Ok::<(), linalg_core::LinalgError>(())
    /// ```
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    /// Scales this vector to unit length in place.
    ///
    /// The zero vector is left unchanged (avoids NaN).
    pub fn normalize(&mut self) {
        let mag_squared = self.magnitude_squared();
        if mag_squared == 0.0 {
            return;
        }
        let inverse = 1.0 / libm::sqrt(mag_squared);
        for component in self.mat.data_mut() {
            *component *= inverse;
        }
    }

    /// Pure counterpart of [`normalize`](Self::normalize).
    ///
    /// ```
    /// use linalg_core::VecN;
    ///
    /// let unit = VecN::new(2, &[3.0, 4.0])?.normalized();
    /// assert!((unit.components()[0] - 0.6).abs() < 1e-15);
    /// assert!((unit.components()[1] - 0.8).abs() < 1e-15);
    /// # Ok::<(), linalg_core::LinalgError>(())
    /// ```
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        out.normalize();
        out
    }

    /// Dot product, with `other` cast to this vector's size first.
    ///
    /// The cast zero-extends a smaller operand and truncates a larger one,
    /// so the result is independent of which operand is the receiver.
    pub fn dot(&self, other: &VecN) -> f64 {
        let cast = padded(other.components(), self.size());
        self.components()
            .iter()
            .zip(&cast)
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Projection of `other` onto this vector's direction.
    ///
    /// Computed as `self * (self . other) / |self|^2`.
    pub fn project(&self, other: &VecN) -> Self {
        let mut out = self.clone();
        out.project_in_place(other);
        out
    }

    /// In-place counterpart of [`project`](Self::project).
    pub fn project_in_place(&mut self, other: &VecN) {
        let scale = self.dot(other) / self.magnitude_squared();
        for component in self.mat.data_mut() {
            *component *= scale;
        }
    }

    /// Direction of a 2-vector in degrees, counter-clockwise from +X,
    /// wrapped into `[0°, 360°)`. `None` for sizes other than 2.
    ///
    /// ```
    /// use linalg_core::VecN;
    ///
    /// let v = VecN::new(2, &[0.0, -1.0])?;
    /// assert_eq!(v.angle(), Some(270.0));
    /// assert_eq!(VecN::z_axis().angle(), None);
    /// # Ok::<(), linalg_core::LinalgError>(())
    /// ```
    pub fn angle(&self) -> Option<f64> {
        if self.size() != 2 {
            return None;
        }
        let (x, y) = (self.components()[0], self.components()[1]);
        Some(wrap_degrees(libm::atan2(y, x) * RAD_TO_DEG))
    }

    /// Rotates a 2-vector counter-clockwise about the origin, in place.
    ///
    /// Each component contributes along its rotated basis: x along the
    /// rotated X basis, y along the same basis advanced a quarter turn.
    /// Sizes other than 2 are left unchanged.
    pub fn rotate(&mut self, angle_deg: f64) {
        if self.size() != 2 {
            return;
        }
        let (x, y) = (self.components()[0], self.components()[1]);
        let (sin_x, cos_x) = libm::sincos(angle_deg * DEG_TO_RAD);
        let (sin_y, cos_y) = libm::sincos((angle_deg + QUARTER_TURN_DEG) * DEG_TO_RAD);
        let data = self.mat.data_mut();
        data[0] = x * cos_x + y * cos_y;
        data[1] = x * sin_x + y * sin_y;
    }

    /// Pure counterpart of [`rotate`](Self::rotate); a plain copy for sizes
    /// other than 2.
    pub fn rotated(&self, angle_deg: f64) -> Self {
        let mut out = self.clone();
        out.rotate(angle_deg);
        out
    }

    /// The 3x3 skew-symmetric matrix `K` with `K * v == self x v`.
    ///
    /// The receiver is cast to size 3 first, so 2-vectors contribute z = 0
    /// and 4-vectors drop w.
    pub fn cross_matrix(&self) -> Matrix {
        let c = padded(self.components(), 3);
        Matrix::from_raw_parts(
            vec![3, 3],
            vec![0.0, -c[2], c[1], c[2], 0.0, -c[0], -c[1], c[0], 0.0],
        )
    }

    /// Cross product as a 3-vector, both operands cast to size 3.
    ///
    /// Anti-commutative: `a.cross(b)` is the negation of `b.cross(a)`.
    ///
    /// ```
    /// use linalg_core::VecN;
    ///
    /// let z = VecN::x_axis().cross(&VecN::y_axis())?;
    /// assert_eq!(z, VecN::z_axis());
    /// # Ok::<(), linalg_core::LinalgError>(())
    /// ```
    pub fn cross(&self, other: &VecN) -> LinalgResult<VecN> {
        let column = Matrix::from_raw_parts(vec![3, 1], padded(other.components(), 3));
        let product = self.cross_matrix().post_multiply(&column)?;
        VecN::from_matrix(3, &product)
    }
}

/// Copies the leading components of `source` into a buffer of length
/// `size`, zero-filling the remainder.
fn padded(source: &[f64], size: usize) -> Vec<f64> {
    let mut out = vec![0.0; size];
    for (dst, src) in out.iter_mut().zip(source) {
        *dst = *src;
    }
    out
}

/// VecN + VecN (rhs cast to lhs size)
impl std::ops::Add for &VecN {
    type Output = VecN;

    fn add(self, rhs: &VecN) -> VecN {
        let cast = padded(rhs.components(), self.size());
        let data = self
            .components()
            .iter()
            .zip(&cast)
            .map(|(a, b)| a + b)
            .collect();
        VecN {
            mat: Matrix::from_raw_parts(vec![self.size(), 1], data),
        }
    }
}

/// VecN - VecN (rhs cast to lhs size)
impl std::ops::Sub for &VecN {
    type Output = VecN;

    fn sub(self, rhs: &VecN) -> VecN {
        let cast = padded(rhs.components(), self.size());
        let data = self
            .components()
            .iter()
            .zip(&cast)
            .map(|(a, b)| a - b)
            .collect();
        VecN {
            mat: Matrix::from_raw_parts(vec![self.size(), 1], data),
        }
    }
}

/// VecN * scalar
impl std::ops::Mul<f64> for &VecN {
    type Output = VecN;

    fn mul(self, scalar: f64) -> VecN {
        VecN {
            mat: self.mat.mul_scalar(scalar),
        }
    }
}

/// scalar * VecN
impl std::ops::Mul<&VecN> for f64 {
    type Output = VecN;

    fn mul(self, vec: &VecN) -> VecN {
        vec * self
    }
}

/// -VecN
impl std::ops::Neg for &VecN {
    type Output = VecN;

    fn neg(self) -> VecN {
        self * -1.0
    }
}

/// v[i] indexing (panics past the size)
impl std::ops::Index<usize> for VecN {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.mat.data()[index]
    }
}

impl fmt::Display for VecN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{}(", self.size())?;
        for (i, component) in self.components().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.9}", component)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::assert_approx_eq;

    #[test]
    fn test_new_validates_size_and_length() {
        assert!(VecN::new(2, &[1.0, 2.0]).is_ok());
        assert!(VecN::new(5, &[0.0; 5]).is_err());
        assert!(VecN::new(1, &[0.0]).is_err());
        assert!(VecN::new(3, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_axis_constructors() {
        assert_eq!(VecN::x_axis().components(), &[1.0, 0.0, 0.0]);
        assert_eq!(VecN::y_axis().components(), &[0.0, 1.0, 0.0]);
        assert_eq!(VecN::z_axis().components(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_is_vec() {
        let column = Matrix::new(&[3, 1]).unwrap();
        assert!(VecN::is_vec(3, &column));
        assert!(!VecN::is_vec(2, &column));
        assert!(!VecN::is_vec(3, &Matrix::new(&[1, 3]).unwrap()));
    }

    #[test]
    fn test_from_matrix_truncates_and_pads() {
        let column = Matrix::with_data(&[3, 1], vec![1.0, 2.0, 3.0]).unwrap();
        let padded_up = VecN::from_matrix(4, &column).unwrap();
        assert_eq!(padded_up.components(), &[1.0, 2.0, 3.0, 0.0]);

        let cut_down = VecN::from_matrix(2, &column).unwrap();
        assert_eq!(cut_down.components(), &[1.0, 2.0]);

        // Row vectors are not column vectors
        let row = Matrix::new(&[1, 3]).unwrap();
        assert!(matches!(
            VecN::from_matrix(3, &row).unwrap_err(),
            LinalgError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_resize_round_trip() {
        let v = VecN::new(2, &[100.0, -200.0]).unwrap();
        let up = v.resize(4).unwrap();
        assert_eq!(up.components(), &[100.0, -200.0, 0.0, 0.0]);
        let down = up.resize(2).unwrap();
        assert_eq!(down, v);
    }

    #[test]
    fn test_named_accessors() {
        let v = VecN::new(2, &[1.0, 2.0]).unwrap();
        assert_eq!(v.x(), Some(1.0));
        assert_eq!(v.y(), Some(2.0));
        assert_eq!(v.z(), None);
        assert_eq!(v.w(), None);

        let q = VecN::new(4, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(q.w(), Some(4.0));
    }

    #[test]
    fn test_setters_noop_on_absent_axes() {
        let mut v = VecN::new(2, &[1.0, 2.0]).unwrap();
        v.set_x(10.0);
        v.set_z(30.0); // absent: silently ignored
        v.set_w(40.0);
        assert_eq!(v.components(), &[10.0, 2.0]);
    }

    #[test]
    fn test_multi_axis_shorthands() {
        let v = VecN::new(3, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v.xy(), [Some(1.0), Some(2.0)]);
        assert_eq!(v.xyz(), [Some(1.0), Some(2.0), Some(3.0)]);
        assert_eq!(v.xyzw(), [Some(1.0), Some(2.0), Some(3.0), None]);
        assert_eq!(v.wxyz(), [None, Some(1.0), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_axis_positional() {
        let v = VecN::new(3, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v.axis(2).unwrap(), 3.0);
        assert!(matches!(
            v.axis(3).unwrap_err(),
            LinalgError::OutOfRange { .. }
        ));
    }

    #[test]
    fn test_magnitude() {
        let v = VecN::new(2, &[3.0, 4.0]).unwrap();
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let mut v = VecN::new(2, &[3.0, 4.0]).unwrap();
        v.normalize();
        assert_approx_eq(v.components()[0], 0.6, 1e-15);
        assert_approx_eq(v.components()[1], 0.8, 1e-15);
        assert_approx_eq(v.magnitude(), 1.0, 1e-15);
    }

    #[test]
    fn test_normalize_zero_vector_is_noop() {
        let mut v = VecN::zeros(3).unwrap();
        v.normalize();
        assert_eq!(v.components(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_normalized_pure() {
        let v = VecN::new(2, &[3.0, 4.0]).unwrap();
        let unit = v.normalized();
        assert_eq!(v.components(), &[3.0, 4.0]);
        assert_approx_eq(unit.magnitude(), 1.0, 1e-15);
    }

    #[test]
    fn test_dot() {
        let a = VecN::new(3, &[1.0, 2.0, 3.0]).unwrap();
        let b = VecN::new(3, &[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(a.dot(&b), 32.0);
    }

    #[test]
    fn test_dot_mixed_sizes_commutes() {
        let small = VecN::new(2, &[1.0, 2.0]).unwrap();
        let large = VecN::new(4, &[3.0, 4.0, 5.0, 6.0]).unwrap();
        // Zero-extension on one side, truncation on the other
        assert_eq!(small.dot(&large), 11.0);
        assert_eq!(large.dot(&small), 11.0);
    }

    #[test]
    fn test_project() {
        let axis = VecN::new(2, &[1.0, 0.0]).unwrap();
        let v = VecN::new(2, &[3.0, 7.0]).unwrap();
        let shadow = axis.project(&v);
        assert_eq!(shadow.components(), &[3.0, 0.0]);
        // Receiver untouched by the pure form
        assert_eq!(axis.components(), &[1.0, 0.0]);
    }

    #[test]
    fn test_project_in_place() {
        let mut direction = VecN::new(2, &[2.0, 0.0]).unwrap();
        let v = VecN::new(2, &[3.0, 7.0]).unwrap();
        direction.project_in_place(&v);
        // (d . v) / |d|^2 = 6 / 4, scaled onto (2, 0)
        assert_eq!(direction.components(), &[3.0, 0.0]);
    }

    #[test]
    fn test_angle() {
        let east = VecN::new(2, &[1.0, 0.0]).unwrap();
        assert_eq!(east.angle(), Some(0.0));

        let north = VecN::new(2, &[0.0, 2.0]).unwrap();
        assert_approx_eq(north.angle().unwrap(), 90.0, 1e-12);

        // Third quadrant wraps positive
        let south_west = VecN::new(2, &[-1.0, -1.0]).unwrap();
        assert_approx_eq(south_west.angle().unwrap(), 225.0, 1e-12);

        assert_eq!(VecN::new(3, &[1.0, 0.0, 0.0]).unwrap().angle(), None);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut v = VecN::new(2, &[1.0, 0.0]).unwrap();
        v.rotate(90.0);
        assert_approx_eq(v.components()[0], 0.0, 1e-15);
        assert_approx_eq(v.components()[1], 1.0, 1e-15);
    }

    #[test]
    fn test_rotate_matches_rotation_matrix() {
        let v = VecN::new(2, &[3.0, -2.0]).unwrap();
        let turned = v.rotated(37.0);
        let theta = 37.0 * DEG_TO_RAD;
        let (sin_t, cos_t) = libm::sincos(theta);
        assert_approx_eq(turned.components()[0], 3.0 * cos_t - (-2.0) * sin_t, 1e-12);
        assert_approx_eq(turned.components()[1], 3.0 * sin_t + (-2.0) * cos_t, 1e-12);
    }

    #[test]
    fn test_rotate_noop_for_other_sizes() {
        let mut v = VecN::new(3, &[1.0, 2.0, 3.0]).unwrap();
        v.rotate(45.0);
        assert_eq!(v.components(), &[1.0, 2.0, 3.0]);

        let copy = v.rotated(45.0);
        assert_eq!(copy, v);
    }

    #[test]
    fn test_cross_matrix() {
        let v = VecN::new(3, &[1.0, 2.0, 3.0]).unwrap();
        let k = v.cross_matrix();
        assert_eq!(k.dim(), &[3, 3]);
        assert_eq!(
            k.data(),
            &[0.0, -3.0, 2.0, 3.0, 0.0, -1.0, -2.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_cross_axes() {
        let z = VecN::x_axis().cross(&VecN::y_axis()).unwrap();
        assert_eq!(z, VecN::z_axis());
    }

    #[test]
    fn test_cross_anti_commutative() {
        let a = VecN::new(3, &[1.0, 2.0, 3.0]).unwrap();
        let b = VecN::new(3, &[-4.0, 0.5, 2.0]).unwrap();
        let ab = a.cross(&b).unwrap();
        let ba = b.cross(&a).unwrap();
        assert_eq!(ab, -&ba);
    }

    #[test]
    fn test_cross_casts_2d_operands() {
        // 2-vectors get z = 0, so their cross points along Z
        let a = VecN::new(2, &[1.0, 0.0]).unwrap();
        let b = VecN::new(2, &[0.0, 1.0]).unwrap();
        let c = a.cross(&b).unwrap();
        assert_eq!(c.components(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_operators() {
        let a = VecN::new(2, &[1.0, 2.0]).unwrap();
        let b = VecN::new(2, &[10.0, 20.0]).unwrap();

        assert_eq!((&a + &b).components(), &[11.0, 22.0]);
        assert_eq!((&b - &a).components(), &[9.0, 18.0]);
        assert_eq!((&a * 3.0).components(), &[3.0, 6.0]);
        assert_eq!((0.5 * &b).components(), &[5.0, 10.0]);
        assert_eq!((-&a).components(), &[-1.0, -2.0]);
    }

    #[test]
    fn test_add_casts_rhs_to_lhs_size() {
        let a = VecN::new(3, &[1.0, 2.0, 3.0]).unwrap();
        let b = VecN::new(2, &[10.0, 20.0]).unwrap();
        assert_eq!((&a + &b).components(), &[11.0, 22.0, 3.0]);
        assert_eq!((&b + &a).components(), &[11.0, 22.0]);
    }

    #[test]
    fn test_indexing() {
        let v = VecN::new(3, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    #[should_panic]
    fn test_index_panics_past_size() {
        let v = VecN::new(2, &[1.0, 2.0]).unwrap();
        let _ = v[2];
    }

    #[test]
    fn test_display() {
        let v = VecN::new(2, &[0.5, -1.5]).unwrap();
        let rendered = format!("{}", v);
        assert!(rendered.starts_with("Vec2("));
        assert!(rendered.contains("0.500000000"));
    }
}
