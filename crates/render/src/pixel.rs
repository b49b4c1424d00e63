//! Pure pixel-buffer conversion from fields and composite images.
//!
//! This module is always available (no feature gate); only the PNG encoding
//! in [`crate::snapshot`] needs the `image` crate.

use gradgen_core::composite::CompositeImage;
use gradgen_core::field::Field;

use crate::colormap::Colormap;

/// Maps field values through a colormap to produce an RGBA8 pixel buffer.
///
/// Each value is sampled from the colormap (which clamps into [0, 1]) and
/// written as four bytes (R, G, B, 255). The buffer length is
/// `width * height * 4`.
pub fn field_to_rgba(field: &Field, colormap: &Colormap) -> Vec<u8> {
    field
        .data()
        .iter()
        .flat_map(|&t| {
            let srgb = colormap.sample(t);
            [
                (srgb.r * 255.0).round() as u8,
                (srgb.g * 255.0).round() as u8,
                (srgb.b * 255.0).round() as u8,
                255u8,
            ]
        })
        .collect()
}

/// Converts a composite image to an RGB8 pixel buffer.
///
/// Composite data is already clamped to [0, 1], so each channel value maps
/// straight to one byte. The buffer length is `width * height * 3`.
pub fn composite_to_rgb(image: &CompositeImage) -> Vec<u8> {
    image
        .data()
        .iter()
        .map(|&v| (v * 255.0).round() as u8)
        .collect()
}
