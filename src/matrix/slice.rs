//! Generalized per-axis slicing for [`Matrix`].
//!
//! A slice selects, independently per axis, either a single index or a
//! stepped half-open range, and gathers the selected elements into a new
//! matrix. Selecting a single index pins the axis to length 1 — the axis is
//! kept, never collapsed, so the result always has the same rank as the
//! source.
//!
//! # Range Semantics
//!
//! - `AxisRange::Index(i)` keeps just index `i` (negative counts from the
//!   end), producing an axis of length 1.
//! - `AxisRange::Span { start, stop }` is the half-open `[start, stop)` with
//!   an implied step of `+1` when `stop > start` and `-1` otherwise.
//! - `AxisRange::Step { start, stop, step }` adds an explicit non-zero step
//!   whose sign must agree with the direction from `start` to `stop`.
//!
//! `start` must lie in `[-len, len)` and `stop` in `[-len, len]` for the
//! axis; negative bounds count from the end. The resulting axis length is
//! `|start - stop| / |step|`, rounded down. Axes without a supplied range
//! default to the full `[0, len)`.
//!
//! ```
//! use linalg_core::{AxisRange, Matrix};
//!
//! let source = Matrix::with_data(&[2, 3], vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0])?;
//!
//! // Second row, columns [0, 2): shape stays 2D
//! let block = source.slice(&[AxisRange::Index(1), (0, 2).into()])?;
//! assert_eq!(block.dim(), &[1, 2]);
//! assert_eq!(block.data(), &[10.0, 11.0]);
//!
//! // Trailing axes default to the full range
//! let row = source.slice(&[AxisRange::Index(-1)])?;
//! assert_eq!(row.data(), &[10.0, 11.0, 12.0]);
//! # Ok::<(), linalg_core::LinalgError>(())
//! ```

use super::dense::Matrix;
use crate::errors::{LinalgError, LinalgResult};

const OP: &str = "Matrix::slice";

/// Selection applied to one axis of a [`Matrix::slice`] call.
///
/// Tuples convert for brevity: `(0, 4).into()` is a span,
/// `(4, 0, -2).into()` a stepped range, `1.into()` a single index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisRange {
    /// A single index; the axis keeps length 1.
    Index(isize),
    /// Half-open `[start, stop)` with an implied unit step toward `stop`.
    Span { start: isize, stop: isize },
    /// Half-open `[start, stop)` with an explicit non-zero step.
    Step {
        start: isize,
        stop: isize,
        step: isize,
    },
}

impl From<isize> for AxisRange {
    fn from(index: isize) -> Self {
        AxisRange::Index(index)
    }
}

impl From<(isize, isize)> for AxisRange {
    fn from((start, stop): (isize, isize)) -> Self {
        AxisRange::Span { start, stop }
    }
}

impl From<(isize, isize, isize)> for AxisRange {
    fn from((start, stop, step): (isize, isize, isize)) -> Self {
        AxisRange::Step { start, stop, step }
    }
}

impl AxisRange {
    /// Expands this range into the source indices it selects on an axis of
    /// length `len`.
    fn resolve(&self, len: usize, axis: usize) -> LinalgResult<Vec<usize>> {
        match *self {
            AxisRange::Index(index) => {
                Ok(vec![Matrix::normalize_index(index, len, axis, OP)?])
            }
            AxisRange::Span { start, stop } => {
                let (start, stop) = normalize_bounds(start, stop, len, axis)?;
                let step = if stop > start { 1 } else { -1 };
                expand(start, stop, step, axis)
            }
            AxisRange::Step { start, stop, step } => {
                if step == 0 {
                    return Err(LinalgError::invalid_value(
                        OP,
                        &format!("step must be non-zero on axis {}", axis),
                    ));
                }
                let (start, stop) = normalize_bounds(start, stop, len, axis)?;
                expand(start, stop, step, axis)
            }
        }
    }
}

/// Normalizes both bounds of a range. `start` must land in `[0, len)`,
/// `stop` in `[0, len]`.
fn normalize_bounds(
    start: isize,
    stop: isize,
    len: usize,
    axis: usize,
) -> LinalgResult<(isize, isize)> {
    let len_i = len as isize;
    let start_n = if start < 0 { start + len_i } else { start };
    if start_n < 0 || start_n >= len_i {
        return Err(LinalgError::out_of_range(
            OP,
            &format!("start {} outside [-{}, {}) on axis {}", start, len, len, axis),
        ));
    }
    let stop_n = if stop < 0 { stop + len_i } else { stop };
    if stop_n < 0 || stop_n > len_i {
        return Err(LinalgError::out_of_range(
            OP,
            &format!("stop {} outside [-{}, {}] on axis {}", stop, len, len, axis),
        ));
    }
    Ok((start_n, stop_n))
}

/// Walks normalized bounds into the list of selected indices.
fn expand(start: isize, stop: isize, step: isize, axis: usize) -> LinalgResult<Vec<usize>> {
    if (stop > start) != (step > 0) && stop != start {
        return Err(LinalgError::invalid_value(
            OP,
            &format!(
                "step {} moves away from stop {} (start {}) on axis {}",
                step, stop, start, axis
            ),
        ));
    }
    let count = start.abs_diff(stop) / step.unsigned_abs();
    if count == 0 {
        return Err(LinalgError::invalid_value(
            OP,
            &format!("range [{}, {}) selects nothing on axis {}", start, stop, axis),
        ));
    }
    let mut selected = Vec::with_capacity(count);
    let mut index = start;
    for _ in 0..count {
        selected.push(index as usize);
        index += step;
    }
    Ok(selected)
}

impl Matrix {
    /// Extracts a sub-matrix by selecting indices independently per axis.
    ///
    /// At most one range per axis may be supplied (fewer is fine — trailing
    /// axes keep their full extent). The result is built in row-major order
    /// over the selected shape, outermost axis first, reading each source
    /// element at the corresponding multi-index.
    ///
    /// Fails with an invalid-value error for excess ranges, zero or
    /// wrong-signed steps, and empty selections; with an out-of-range error
    /// for bounds outside the axis.
    pub fn slice(&self, ranges: &[AxisRange]) -> LinalgResult<Matrix> {
        if ranges.len() > self.dim().len() {
            return Err(LinalgError::invalid_value(
                OP,
                &format!(
                    "got {} ranges for {} axes",
                    ranges.len(),
                    self.dim().len()
                ),
            ));
        }
        let mut selected = Vec::with_capacity(self.dim().len());
        for (axis, &len) in self.dim().iter().enumerate() {
            match ranges.get(axis) {
                Some(range) => selected.push(range.resolve(len, axis)?),
                None => selected.push((0..len).collect()),
            }
        }

        let out_dim: Vec<usize> = selected.iter().map(Vec::len).collect();
        let count = out_dim.iter().product();
        let mut data = Vec::with_capacity(count);
        let mut cursor = vec![0usize; out_dim.len()];
        for _ in 0..count {
            let mut offset = 0;
            for (axis, &len) in self.dim().iter().enumerate() {
                offset = offset * len + selected[axis][cursor[axis]];
            }
            data.push(self.data()[offset]);
            // Odometer step: last axis varies fastest
            for axis in (0..cursor.len()).rev() {
                cursor[axis] += 1;
                if cursor[axis] < out_dim[axis] {
                    break;
                }
                cursor[axis] = 0;
            }
        }
        Ok(Matrix::from_raw_parts(out_dim, data))
    }
}
