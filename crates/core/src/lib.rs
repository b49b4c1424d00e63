#![deny(unsafe_code)]
//! Core types for the gradgen gradient-image system.
//!
//! Provides the `Field` scalar grid, `CoordinateGrid` normalized coordinates,
//! linear/radial/directional gradient generators, the `Direction` polarity,
//! `CompositeImage` three-channel stacking, and the serializable `Recipe`
//! describing a composite.

pub mod composite;
pub mod direction;
pub mod error;
pub mod field;
pub mod gradient;
pub mod grid;
pub mod recipe;

pub use composite::CompositeImage;
pub use direction::Direction;
pub use error::GradientError;
pub use field::Field;
pub use grid::CoordinateGrid;
pub use recipe::{ChannelSource, ChannelSpec, Recipe};
