//! Colormaps: ordered sRGB stops sampled by piecewise-linear interpolation.
//!
//! Stops are evenly spaced along the `t` parameter and interpolated component
//! by component in sRGB space, which matches how the built-in single-hue
//! ramps are defined.

use gradgen_core::error::GradientError;

use crate::color::Srgb;

/// All built-in colormap names.
const COLORMAP_NAMES: &[&str] = &["gray", "reds", "greens", "blues", "viridis"];

/// An ordered list of sRGB color stops sampled by interpolation.
///
/// Stops are evenly spaced: `sample(0.0)` returns the first stop,
/// `sample(1.0)` the last.
#[derive(Debug, Clone)]
pub struct Colormap {
    stops: Vec<Srgb>,
}

impl Colormap {
    /// Creates a colormap from a vector of sRGB stops.
    ///
    /// Requires at least one stop.
    pub fn new(stops: Vec<Srgb>) -> Result<Self, GradientError> {
        if stops.is_empty() {
            return Err(GradientError::InvalidColormap(
                "colormap requires at least 1 stop".to_string(),
            ));
        }
        Ok(Self { stops })
    }

    /// Creates a colormap by parsing hex color strings.
    ///
    /// Each string can be "#rrggbb" or "rrggbb" (case insensitive).
    pub fn from_hex_stops(hexes: &[&str]) -> Result<Self, GradientError> {
        let stops: Result<Vec<Srgb>, GradientError> =
            hexes.iter().map(|h| Srgb::from_hex(h)).collect();
        Self::new(stops?)
    }

    /// Constructs a built-in colormap by name.
    ///
    /// Returns `GradientError::InvalidColormap` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, GradientError> {
        match name {
            "gray" => Ok(Self::gray()),
            "reds" => Ok(Self::reds()),
            "greens" => Ok(Self::greens()),
            "blues" => Ok(Self::blues()),
            "viridis" => Ok(Self::viridis()),
            other => Err(GradientError::InvalidColormap(format!(
                "unknown colormap '{other}'"
            ))),
        }
    }

    /// Returns a slice of all built-in colormap names.
    pub fn list_names() -> &'static [&'static str] {
        COLORMAP_NAMES
    }

    /// Returns the number of color stops in this colormap.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if this colormap has no stops. (Always false for valid colormaps.)
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Samples the colormap at parameter `t` in [0, 1].
    ///
    /// `t` is clamped to [0, 1]; NaN maps to 0. For a single-stop colormap,
    /// returns that stop for any `t`.
    pub fn sample(&self, t: f64) -> Srgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.stops.len();
        if n == 1 {
            return self.stops[0];
        }

        // Map t to a segment index and a local interpolation factor.
        let scaled = t * (n - 1) as f64;
        let idx = (scaled as usize).min(n - 2);
        let frac = scaled - idx as f64;

        let lo = self.stops[idx];
        let hi = self.stops[idx + 1];
        Srgb {
            r: lo.r + frac * (hi.r - lo.r),
            g: lo.g + frac * (hi.g - lo.g),
            b: lo.b + frac * (hi.b - lo.b),
        }
    }

    // -- Built-in colormaps --

    /// Black to white.
    pub fn gray() -> Self {
        Colormap::from_hex_stops(&["#000000", "#ffffff"])
            .expect("gray colormap hex values are valid")
    }

    /// Near-white through deep red.
    pub fn reds() -> Self {
        Colormap::from_hex_stops(&["#fff5f0", "#fcbba1", "#fb6a4a", "#cb181d", "#67000d"])
            .expect("reds colormap hex values are valid")
    }

    /// Near-white through deep green.
    pub fn greens() -> Self {
        Colormap::from_hex_stops(&["#f7fcf5", "#c7e9c0", "#74c476", "#238b45", "#00441b"])
            .expect("greens colormap hex values are valid")
    }

    /// Near-white through deep blue.
    pub fn blues() -> Self {
        Colormap::from_hex_stops(&["#f7fbff", "#c6dbef", "#6baed6", "#2171b5", "#08306b"])
            .expect("blues colormap hex values are valid")
    }

    /// Dark purple through teal to bright yellow.
    pub fn viridis() -> Self {
        Colormap::from_hex_stops(&["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"])
            .expect("viridis colormap hex values are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Constructor tests --

    #[test]
    fn new_rejects_empty_stop_list() {
        assert!(matches!(
            Colormap::new(Vec::new()),
            Err(GradientError::InvalidColormap(_))
        ));
    }

    #[test]
    fn from_hex_stops_rejects_empty_and_malformed() {
        assert!(Colormap::from_hex_stops(&[]).is_err());
        assert!(Colormap::from_hex_stops(&["#000000", "oops"]).is_err());
    }

    #[test]
    fn from_name_builds_every_listed_colormap() {
        for name in Colormap::list_names() {
            let map = Colormap::from_name(name).unwrap();
            assert!(!map.is_empty(), "{name} should have stops");
        }
    }

    #[test]
    fn from_name_rejects_unknown_name() {
        let result = Colormap::from_name("plasma");
        assert!(matches!(
            result,
            Err(GradientError::InvalidColormap(msg)) if msg.contains("plasma")
        ));
    }

    // -- Sampling tests --

    #[test]
    fn sample_endpoints_return_first_and_last_stop() {
        let map = Colormap::viridis();
        assert_eq!(map.sample(0.0), Srgb::from_hex("#440154").unwrap());
        assert_eq!(map.sample(1.0), Srgb::from_hex("#fde725").unwrap());
    }

    #[test]
    fn sample_midpoint_of_gray_is_mid_gray() {
        let mid = Colormap::gray().sample(0.5);
        assert!((mid.r - 0.5).abs() < 1e-12);
        assert!((mid.g - 0.5).abs() < 1e-12);
        assert!((mid.b - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sample_lands_on_interior_stops() {
        // Five stops put the third one exactly at t = 0.5.
        let map = Colormap::blues();
        assert_eq!(map.sample(0.5), Srgb::from_hex("#6baed6").unwrap());
    }

    #[test]
    fn sample_clamps_t_and_maps_nan_to_zero() {
        let map = Colormap::reds();
        assert_eq!(map.sample(-3.0), map.sample(0.0));
        assert_eq!(map.sample(7.0), map.sample(1.0));
        assert_eq!(map.sample(f64::NAN), map.sample(0.0));
    }

    #[test]
    fn single_stop_colormap_is_constant() {
        let map = Colormap::from_hex_stops(&["#123456"]).unwrap();
        let stop = Srgb::from_hex("#123456").unwrap();
        for t in [0.0, 0.3, 0.99, 1.0] {
            assert_eq!(map.sample(t), stop);
        }
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn builtin_samples_stay_in_unit_range(
                name_idx in 0_usize..5,
                t in -1.0_f64..=2.0,
            ) {
                let map = Colormap::from_name(Colormap::list_names()[name_idx]).unwrap();
                let c = map.sample(t);
                for component in [c.r, c.g, c.b] {
                    prop_assert!((0.0..=1.0).contains(&component));
                }
            }

            #[test]
            fn gray_sample_tracks_t_linearly(t in 0.0_f64..=1.0) {
                let c = Colormap::gray().sample(t);
                prop_assert!((c.r - t).abs() < 1e-9);
                prop_assert!((c.g - t).abs() < 1e-9);
                prop_assert!((c.b - t).abs() < 1e-9);
            }
        }
    }
}
