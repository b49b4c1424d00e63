//! PNG export of fields and composite images.
//!
//! Feature-gated behind `png` (default on) so that buffer-only consumers can
//! depend on this crate without pulling in the `image` crate. The pixel
//! conversion itself lives in [`crate::pixel`] (always available).

use std::path::Path;

use gradgen_core::composite::CompositeImage;
use gradgen_core::error::GradientError;
use gradgen_core::field::Field;

use crate::colormap::Colormap;
use crate::pixel::{composite_to_rgb, field_to_rgba};

/// Writes a field as a PNG image, mapping values through the given colormap.
///
/// Returns `GradientError::InvalidDimension` if the field dimensions overflow
/// `u32`, or `GradientError::Io` on write failure.
pub fn write_field_png(
    field: &Field,
    colormap: &Colormap,
    path: &Path,
) -> Result<(), GradientError> {
    let rgba = field_to_rgba(field, colormap);
    let w = u32::try_from(field.width()).map_err(|_| GradientError::InvalidDimension)?;
    let h = u32::try_from(field.height()).map_err(|_| GradientError::InvalidDimension)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| GradientError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| GradientError::Io(e.to_string()))
}

/// Writes a composite image as an RGB PNG.
///
/// Same error contract as [`write_field_png`].
pub fn write_composite_png(image: &CompositeImage, path: &Path) -> Result<(), GradientError> {
    let rgb = composite_to_rgb(image);
    let w = u32::try_from(image.width()).map_err(|_| GradientError::InvalidDimension)?;
    let h = u32::try_from(image.height()).map_err(|_| GradientError::InvalidDimension)?;
    let img = image::RgbImage::from_raw(w, h, rgb)
        .ok_or_else(|| GradientError::Io("RGB buffer size mismatch".into()))?;
    img.save(path).map_err(|e| GradientError::Io(e.to_string()))
}
