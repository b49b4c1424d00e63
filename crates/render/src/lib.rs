#![deny(unsafe_code)]
//! Rendering collaborators for gradgen: colormaps, pixel-buffer conversion,
//! and PNG export.
//!
//! `gradgen-core` produces bare scalar fields and composites; this crate
//! turns them into pixels. The conversion surface in [`pixel`] is always
//! available, while PNG encoding in [`snapshot`] sits behind the `png`
//! feature (default on).

pub mod color;
pub mod colormap;
pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use color::Srgb;
pub use colormap::Colormap;
