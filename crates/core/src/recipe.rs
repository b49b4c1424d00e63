//! Serializable recipe for a composite gradient image.
//!
//! A [`Recipe`] captures everything needed to recreate a three-channel
//! composite: grid dimensions plus a source and direction for each channel.

use serde::{Deserialize, Serialize};

use crate::composite::CompositeImage;
use crate::direction::Direction;
use crate::error::GradientError;
use crate::field::{checked_len, Field};
use crate::gradient;

fn default_center() -> f64 {
    0.5
}

/// The gradient family one channel is generated from.
///
/// Serializes internally tagged on `kind`: `{"kind": "linear_x"}`,
/// `{"kind": "linear_y"}`, or `{"kind": "radial", "center_x": …,
/// "center_y": …}` with both center components defaulting to 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChannelSource {
    LinearX,
    LinearY,
    Radial {
        #[serde(default = "default_center")]
        center_x: f64,
        #[serde(default = "default_center")]
        center_y: f64,
    },
}

impl ChannelSource {
    /// Generates this source's field for a grid of the given dimensions.
    pub fn generate(&self, width: usize, height: usize) -> Result<Field, GradientError> {
        match *self {
            ChannelSource::LinearX => Ok(gradient::linear(width, height)?.0),
            ChannelSource::LinearY => Ok(gradient::linear(width, height)?.1),
            ChannelSource::Radial { center_x, center_y } => {
                gradient::radial(width, height, center_x, center_y)
            }
        }
    }
}

/// One channel of a recipe: a source field and the polarity applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelSpec {
    pub source: ChannelSource,
    #[serde(default)]
    pub direction: Direction,
}

impl ChannelSpec {
    /// Creates a channel spec with the default `Forward` direction.
    pub fn new(source: ChannelSource) -> Self {
        Self {
            source,
            direction: Direction::default(),
        }
    }

    /// Sets the direction, builder style.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Generates the channel field: source first, then direction.
    pub fn generate(&self, width: usize, height: usize) -> Result<Field, GradientError> {
        let field = self.source.generate(width, height)?;
        Ok(self.direction.apply(&field))
    }
}

/// Complete serializable description of a composite gradient image.
///
/// Two identical `Recipe` values produce bit-identical composites; the JSON
/// round-trip through serde is lossless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub width: usize,
    pub height: usize,
    pub channels: [ChannelSpec; 3],
}

impl Recipe {
    pub fn new(width: usize, height: usize, channels: [ChannelSpec; 3]) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Validates dimensions and any radial centers without generating.
    pub fn validate(&self) -> Result<(), GradientError> {
        checked_len(self.width, self.height)?;
        for channel in &self.channels {
            if let ChannelSource::Radial { center_x, center_y } = channel.source {
                if !center_x.is_finite() || !center_y.is_finite() {
                    return Err(GradientError::InvalidCenter {
                        x: center_x,
                        y: center_y,
                    });
                }
            }
        }
        Ok(())
    }

    /// Generates each channel field and composites them in order.
    pub fn generate(&self) -> Result<CompositeImage, GradientError> {
        let [c0, c1, c2] = &self.channels;
        let channel0 = c0.generate(self.width, self.height)?;
        let channel1 = c1.generate(self.width, self.height)?;
        let channel2 = c2.generate(self.width, self.height)?;
        CompositeImage::combine(&channel0, &channel1, &channel2)
    }
}
