//! Dense matrix and small-vector math without a heavyweight numerics stack.
//!
//! `linalg-core` provides an N-dimensional row-major numeric array
//! ([`Matrix`]) with full index-mapping, slicing, and arithmetic support, a
//! 2/3/4-component column vector ([`VecN`]) with the usual geometric
//! operations, and builders for 3x3 rotation and 4x4 homogeneous transform
//! matrices.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | [`Matrix`], [`AxisRange`] slicing, [`VecN`] |
//! | [`rotation`] | Axis-angle/Euler rotation and transform builders |
//! | [`math`] | Scalar helpers: lerp, clamps, angle wrapping/difference |
//! | [`constants`] | Angle conversion factors and the PI family |
//! | [`errors`] | [`LinalgError`] and [`LinalgResult`] |
//!
//! # A Small Tour
//!
//! ```
//! use linalg_core::{rotation_matrix, AxisRange, Matrix, VecN};
//!
//! // N-dimensional storage with negative indexing
//! let mut grid = Matrix::new(&[2, 3, 4])?;
//! grid.set(7.0, &[-1, 0, 2])?;
//! assert_eq!(grid.get(&[1, 0, 2])?, 7.0);
//!
//! // Per-axis slicing keeps the rank
//! let block = grid.slice(&[AxisRange::Index(1)])?;
//! assert_eq!(block.dim(), &[1, 3, 4]);
//!
//! // Geometric vectors with size casting
//! let v = VecN::new(2, &[3.0, 4.0])?;
//! assert_eq!(v.magnitude(), 5.0);
//! assert_eq!(v.resize(3)?.components(), &[3.0, 4.0, 0.0]);
//!
//! // Rotation about an arbitrary axis
//! let r = rotation_matrix(&VecN::z_axis(), 90.0)?;
//! let turned = r.post_multiply(VecN::x_axis().as_matrix())?;
//! assert!((turned.get(&[1, 0])? - 1.0).abs() < 1e-12);
//! # Ok::<(), linalg_core::LinalgError>(())
//! ```
//!
//! # Design Notes
//!
//! - **Exclusive buffers**: every matrix owns its flat buffer; operations
//!   either mutate the receiver in place (named so explicitly) or return a
//!   new, fully independent value. No aliasing between instances.
//! - **Validate, then write**: in-place operations check every precondition
//!   before touching the buffer, so a failed call never leaves the receiver
//!   half-modified.
//! - **Degrees at the surface**: rotation builders and [`VecN::angle`]
//!   speak degrees; [`constants`] carries the conversion factors and
//!   [`math`] the wrapping helpers.
//!
//! # Non-Goals
//!
//! No sparse storage, no broadcasting, no linear-system solving, no SIMD,
//! no persistence format.

pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;
pub mod rotation;

pub use errors::{LinalgError, LinalgResult};
pub use matrix::{AxisRange, Matrix, VecN};
pub use rotation::{rotation_matrix, rotation_matrix_axes, transform_matrix};

pub mod test_helpers;
