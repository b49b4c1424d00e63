//! sRGB color type used for colormap stops.

use gradgen_core::error::GradientError;

/// sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `GradientError::InvalidColormap` if the input is not a valid
    /// 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, GradientError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GradientError::InvalidColormap(format!(
                "'{hex}' is not a #rrggbb color"
            )));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| GradientError::InvalidColormap(e.to_string()))?;
        Ok(Srgb {
            r: ((value >> 16) & 0xff) as f64 / 255.0,
            g: ((value >> 8) & 0xff) as f64 / 255.0,
            b: (value & 0xff) as f64 / 255.0,
        })
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are clamped and quantized to 8-bit with rounding.
    pub fn to_hex(self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}
