//! Rotation and homogeneous transform matrix builders.
//!
//! Free functions composing [`Matrix`] and [`VecN`] into the standard
//! geometric matrices:
//!
//! - [`rotation_matrix`]: 3x3 rotation about an arbitrary axis
//!   (Rodrigues' formula)
//! - [`rotation_matrix_axes`]: 3x3 rotation composed from per-axis Euler
//!   angles
//! - [`transform_matrix`]: 4x4 homogeneous transform embedding a rotation
//!   and a translation
//!
//! All angles are in degrees, matching the rest of the crate's angle
//! surface.
//!
//! # Composing Rotations
//!
//! Rotation matrices compose by multiplication, rightmost factor acting
//! first. [`rotation_matrix_axes`] fixes the order to `Rx * Ry * Rz`, so
//! the Z rotation is applied to a vector first:
//!
//! ```
//! use linalg_core::{rotation_matrix_axes, Matrix, VecN};
//!
//! let r = rotation_matrix_axes(0.0, 0.0, 90.0)?;
//! let turned = r.post_multiply(VecN::x_axis().as_matrix())?;
//! // +X swings to +Y under a quarter turn about Z
//! assert!((turned.get(&[1, 0])? - 1.0).abs() < 1e-12);
//! # Ok::<(), linalg_core::LinalgError>(())
//! ```

use crate::constants::DEG_TO_RAD;
use crate::errors::{LinalgError, LinalgResult};
use crate::matrix::{Matrix, VecN};

/// Builds the 3x3 matrix rotating by `angle_deg` about `axis`,
/// counter-clockwise looking down the axis toward the origin.
///
/// The axis is cast to size 3 and normalized first, so any non-zero vector
/// works. Implements Rodrigues' formula
/// `R = I + sin(θ)K + (1 - cos(θ))K²` with `K` the axis' skew-symmetric
/// cross matrix.
///
/// ```
/// use linalg_core::{rotation_matrix, VecN};
///
/// let r = rotation_matrix(&VecN::z_axis(), 90.0)?;
/// let turned = r.post_multiply(VecN::x_axis().as_matrix())?;
/// assert!((turned.get(&[0, 0])?).abs() < 1e-12);
/// assert!((turned.get(&[1, 0])? - 1.0).abs() < 1e-12);
/// # Ok::<(), linalg_core::LinalgError>(())
/// ```
pub fn rotation_matrix(axis: &VecN, angle_deg: f64) -> LinalgResult<Matrix> {
    let unit = axis.resize(3)?.normalized();
    let k = unit.cross_matrix();
    let k_squared = k.post_multiply(&k)?;
    let (sin_t, cos_t) = libm::sincos(angle_deg * DEG_TO_RAD);

    let mut rotation = Matrix::identity(3)?;
    rotation.add_in_place(&k.mul_scalar(sin_t))?;
    rotation.add_in_place(&k_squared.mul_scalar(1.0 - cos_t))?;
    Ok(rotation)
}

/// Builds a 3x3 rotation from Euler angles about the fixed X, Y, and Z
/// axes, composed as `Rx * Ry * Rz`.
pub fn rotation_matrix_axes(rx_deg: f64, ry_deg: f64, rz_deg: f64) -> LinalgResult<Matrix> {
    let rx = rotation_matrix(&VecN::x_axis(), rx_deg)?;
    let ry = rotation_matrix(&VecN::y_axis(), ry_deg)?;
    let rz = rotation_matrix(&VecN::z_axis(), rz_deg)?;
    rx.post_multiply(&ry)?.post_multiply(&rz)
}

/// Embeds a 3x3 rotation and a translation into a 4x4 homogeneous
/// transform.
///
/// The rotation fills the upper-left 3x3 block, the translation's x, y, z
/// fill the first three rows of the last column, and the corner is 1; every
/// other entry is zero. Fails with a shape-mismatch error unless `rotation`
/// is exactly 3x3. The translation is cast to size 3, so 2-vectors embed
/// with z = 0.
pub fn transform_matrix(translate: &VecN, rotation: &Matrix) -> LinalgResult<Matrix> {
    if !rotation.is_2d() || rotation.dim() != [3, 3] {
        return Err(LinalgError::shape_mismatch(
            "transform_matrix",
            "a 3x3 rotation matrix",
            &format!("shape {:?}", rotation.dim()),
        ));
    }
    let mut out = Matrix::new(&[4, 4])?;
    for r in 0..3isize {
        for c in 0..3isize {
            out.set(rotation.get(&[r, c])?, &[r, c])?;
        }
    }
    let offset = translate.resize(3)?;
    for (r, &component) in offset.components().iter().enumerate() {
        out.set(component, &[r as isize, 3])?;
    }
    out.set(1.0, &[3, 3])?;
    Ok(out)
}
