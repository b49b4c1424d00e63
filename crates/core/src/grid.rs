//! Normalized coordinate grids for gradient generation.
//!
//! A [`CoordinateGrid`] holds two fields X and Y of shape (height, width):
//! X varies by column only from 0 to 1, Y varies by row only from 0 to 1.
//! Every gradient generator starts from one of these.

use crate::error::GradientError;
use crate::field::{checked_len, Field};

/// Normalized X/Y coordinate fields over a width x height pixel grid.
///
/// `x()[r, c] = c / (width - 1)` and `y()[r, c] = r / (height - 1)`.
/// A single-column grid has an all-zero X field and a single-row grid an
/// all-zero Y field, so degenerate grids never divide by zero.
#[derive(Debug, Clone)]
pub struct CoordinateGrid {
    x: Field,
    y: Field,
}

impl CoordinateGrid {
    /// Builds the coordinate grid for the given dimensions.
    ///
    /// Returns `GradientError::InvalidDimension` if either dimension is zero
    /// or `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, GradientError> {
        let len = checked_len(width, height)?;

        let x_axis = axis_positions(width);
        let y_axis = axis_positions(height);

        let mut x_data = Vec::with_capacity(len);
        let mut y_data = Vec::with_capacity(len);
        for &row_value in &y_axis {
            x_data.extend_from_slice(&x_axis);
            y_data.extend(std::iter::repeat(row_value).take(width));
        }

        Ok(Self {
            x: Field::from_data(width, height, x_data)?,
            y: Field::from_data(width, height, y_data)?,
        })
    }

    /// The X coordinate field: constant along rows, 0 to 1 across columns.
    pub fn x(&self) -> &Field {
        &self.x
    }

    /// The Y coordinate field: constant along columns, 0 to 1 down rows.
    pub fn y(&self) -> &Field {
        &self.y
    }

    /// Consumes the grid and returns the (X, Y) field pair.
    pub fn into_fields(self) -> (Field, Field) {
        (self.x, self.y)
    }
}

/// Evenly spaced positions 0..=1 along one axis of `n` samples.
///
/// Dividing each index by `n - 1` keeps the endpoints exact: `0 / (n-1)` is
/// 0.0 and `(n-1) / (n-1)` is 1.0 in IEEE arithmetic. A single-sample axis
/// collapses to `[0.0]`.
fn axis_positions(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![0.0];
    }
    let last = (n - 1) as f64;
    (0..n).map(|i| i as f64 / last).collect()
}
