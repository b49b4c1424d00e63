//! Channel composition: stacking three scalar fields into one RGB image.

use crate::error::GradientError;
use crate::field::Field;

/// A three-channel image of shape (height, width, 3).
///
/// Stored as interleaved row-major triples with every element clamped to
/// [0,1]. Channel order is fixed (0, 1, 2); the caller decides the semantic
/// meaning, conventionally red/green/blue.
#[derive(Debug, Clone)]
pub struct CompositeImage {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl CompositeImage {
    /// Stacks three same-shaped fields into one composite image.
    ///
    /// This is the single clamping point of the pipeline: every element is
    /// clamped to [0,1] here, so unclamped intermediates (a reversed
    /// out-of-range field, floating-point overshoot) are tolerated upstream.
    /// Channel 0 is the reference shape; a differing channel 1 or 2 fails
    /// with `ShapeMismatch`.
    pub fn combine(
        channel0: &Field,
        channel1: &Field,
        channel2: &Field,
    ) -> Result<Self, GradientError> {
        for other in [channel1, channel2] {
            if other.width() != channel0.width() || other.height() != channel0.height() {
                return Err(GradientError::ShapeMismatch {
                    lhs_w: channel0.width(),
                    lhs_h: channel0.height(),
                    rhs_w: other.width(),
                    rhs_h: other.height(),
                });
            }
        }
        let mut data = Vec::with_capacity(channel0.data().len() * 3);
        for ((&c0, &c1), &c2) in channel0
            .data()
            .iter()
            .zip(channel1.data())
            .zip(channel2.data())
        {
            data.push(c0.clamp(0.0, 1.0));
            data.push(c1.clamp(0.0, 1.0));
            data.push(c2.clamp(0.0, 1.0));
        }
        Ok(CompositeImage {
            width: channel0.width(),
            height: channel0.height(),
            data,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Interleaved row-major channel data, every element in [0,1].
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// The channel triple at pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when either coordinate is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> [f64; 3] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        let base = (y * self.width + x) * 3;
        [self.data[base], self.data[base + 1], self.data[base + 2]]
    }

    /// Extracts one channel plane as a fresh field.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not 0, 1, or 2.
    pub fn channel(&self, index: usize) -> Field {
        assert!(index < 3, "channel index {index} out of bounds");
        let plane: Vec<f64> = self.data[index..].iter().step_by(3).copied().collect();
        Field::from_data(self.width, self.height, plane)
            .expect("clamped channel data is a valid field")
    }
}
