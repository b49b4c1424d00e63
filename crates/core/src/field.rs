//! Two-dimensional scalar field over a pixel grid.
//!
//! A `Field` stores `width * height` f64 values in row-major layout. Values
//! are intended to lie in [0, 1], but construction does not clamp them: the
//! channel compositor is the single clamping point of the pipeline, so
//! intermediate stages (a reversed field, an unnormalized distance field)
//! may carry out-of-range values. Construction does reject non-finite
//! values, so a `Field` never holds NaN or infinity.
//!
//! Fields are immutable values: every operation returns a fresh field.

use crate::error::GradientError;

/// An immutable 2D scalar field in row-major layout.
#[derive(Debug, Clone)]
pub struct Field {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Field {
    /// Creates a zero-filled field of the given dimensions.
    ///
    /// Returns `GradientError::InvalidDimension` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, GradientError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Creates a field filled with `value`.
    ///
    /// The value is not clamped. Returns `GradientError::InvalidDimension`
    /// for zero or overflowing dimensions and `GradientError::InvalidFieldType`
    /// for a non-finite fill value.
    pub fn filled(width: usize, height: usize, value: f64) -> Result<Self, GradientError> {
        let len = checked_len(width, height)?;
        if !value.is_finite() {
            return Err(GradientError::InvalidFieldType(format!(
                "fill value {value} is not finite"
            )));
        }
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Creates a field from a pre-built row-major data vector.
    ///
    /// Returns `GradientError::InvalidDimension` for zero or overflowing
    /// dimensions, and `GradientError::InvalidFieldType` if the vector length
    /// is not `width * height` or any value is non-finite. Values are not
    /// clamped.
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self, GradientError> {
        let len = checked_len(width, height)?;
        if data.len() != len {
            return Err(GradientError::InvalidFieldType(format!(
                "expected {len} values for a {width}x{height} field, got {}",
                data.len()
            )));
        }
        if let Some(idx) = data.iter().position(|v| !v.is_finite()) {
            return Err(GradientError::InvalidFieldType(format!(
                "value at index {idx} is not finite"
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Field width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Value at `(x, y)` where `x` is the column and `y` the row.
    ///
    /// # Panics
    ///
    /// Panics when either coordinate is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) out of bounds for {}x{} field",
            self.width,
            self.height
        );
        self.data[y * self.width + x]
    }

    /// Smallest value in the field.
    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest value in the field.
    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns a new field with every value `v` replaced by `1 - v`.
    ///
    /// Values are not re-clamped: reversing an out-of-range field leaves it
    /// out of range. Clamping happens once, when channels are composited.
    pub fn reversed(&self) -> Field {
        Field {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|v| 1.0 - v).collect(),
        }
    }
}

/// Validates dimensions and returns `width * height`.
pub(crate) fn checked_len(width: usize, height: usize) -> Result<usize, GradientError> {
    if width == 0 || height == 0 {
        return Err(GradientError::InvalidDimension);
    }
    width
        .checked_mul(height)
        .ok_or(GradientError::InvalidDimension)
}
