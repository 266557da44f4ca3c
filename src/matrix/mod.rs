//! Dense N-dimensional matrices and fixed-size column vectors.
//!
//! - [`Matrix`]: flat row-major N-dimensional numeric array
//! - [`AxisRange`]: per-axis selection for [`Matrix::slice`]
//! - [`VecN`]: 2/3/4-component column vector with geometric operations

mod dense;
mod slice;
mod vector;

pub use dense::Matrix;
pub use slice::AxisRange;
pub use vector::VecN;
