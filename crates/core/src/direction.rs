//! Gradient polarity: forward (0 to 1) or reverse (1 to 0).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GradientError;
use crate::field::Field;

/// Polarity applied to a gradient field.
///
/// `Forward` leaves values unchanged; `Reverse` maps every value `v` to
/// `1 - v`. Serializes as `"forward"` / `"reverse"`. The enum is closed:
/// invalid directions only exist at the name-parsing boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    /// Parses a direction from its lowercase name.
    ///
    /// Returns `GradientError::InvalidDirection` for anything other than
    /// `"forward"` or `"reverse"`.
    pub fn from_name(name: &str) -> Result<Self, GradientError> {
        match name {
            "forward" => Ok(Direction::Forward),
            "reverse" => Ok(Direction::Reverse),
            other => Err(GradientError::InvalidDirection(other.to_string())),
        }
    }

    /// The lowercase name of this direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        }
    }

    /// Applies this direction to a field, returning a fresh field.
    ///
    /// `Forward` copies the values unchanged; `Reverse` returns `1 - v`
    /// elementwise without re-clamping (clamping happens at composite time).
    pub fn apply(self, field: &Field) -> Field {
        match self {
            Direction::Forward => field.clone(),
            Direction::Reverse => field.reversed(),
        }
    }
}

impl FromStr for Direction {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_parses_both_directions() {
        assert_eq!(Direction::from_name("forward").unwrap(), Direction::Forward);
        assert_eq!(Direction::from_name("reverse").unwrap(), Direction::Reverse);
    }

    #[test]
    fn from_name_rejects_unknown_name() {
        let result = Direction::from_name("sideways");
        assert!(matches!(
            result,
            Err(GradientError::InvalidDirection(name)) if name == "sideways"
        ));
    }

    #[test]
    fn from_name_is_case_sensitive() {
        assert!(Direction::from_name("Forward").is_err());
        assert!(Direction::from_name("REVERSE").is_err());
    }

    #[test]
    fn from_str_delegates_to_from_name() {
        let dir: Direction = "reverse".parse().unwrap();
        assert_eq!(dir, Direction::Reverse);
        assert!("backwards".parse::<Direction>().is_err());
    }

    #[test]
    fn name_round_trips_through_from_name() {
        for dir in [Direction::Forward, Direction::Reverse] {
            assert_eq!(Direction::from_name(dir.name()).unwrap(), dir);
        }
    }

    #[test]
    fn default_is_forward() {
        assert_eq!(Direction::default(), Direction::Forward);
    }

    #[test]
    fn serializes_as_snake_case_string() {
        let json = serde_json::to_string(&Direction::Reverse).unwrap();
        assert_eq!(json, "\"reverse\"");
        let back: Direction = serde_json::from_str("\"forward\"").unwrap();
        assert_eq!(back, Direction::Forward);
    }

    #[test]
    fn deserialize_rejects_unknown_variant() {
        let result: Result<Direction, _> = serde_json::from_str("\"diagonal\"");
        assert!(result.is_err());
    }

    #[test]
    fn forward_apply_is_identity() {
        let field = Field::from_data(2, 2, vec![0.0, 0.3, 0.6, 1.0]).unwrap();
        let out = Direction::Forward.apply(&field);
        assert_eq!(out.data(), field.data());
    }

    #[test]
    fn reverse_apply_flips_values() {
        let field = Field::from_data(2, 1, vec![0.0, 0.25]).unwrap();
        let out = Direction::Reverse.apply(&field);
        assert!((out.get(0, 0) - 1.0).abs() < f64::EPSILON);
        assert!((out.get(1, 0) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn reverse_applied_twice_restores_values() {
        let field = Field::from_data(3, 1, vec![0.1, 0.5, 0.9]).unwrap();
        let back = Direction::Reverse.apply(&Direction::Reverse.apply(&field));
        for (a, b) in field.data().iter().zip(back.data()) {
            assert!((a - b).abs() < 1e-15, "{a} vs {b}");
        }
    }

    #[test]
    fn reverse_does_not_clamp_out_of_range_input() {
        let field = Field::filled(2, 2, 2.0).unwrap();
        let out = Direction::Reverse.apply(&field);
        assert!(out.data().iter().all(|&v| (v - (-1.0)).abs() < f64::EPSILON));
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn forward_preserves_every_value(
                values in prop::collection::vec(0.0_f64..=1.0, 1..=64),
            ) {
                let w = values.len();
                let field = Field::from_data(w, 1, values).unwrap();
                let out = Direction::Forward.apply(&field);
                prop_assert_eq!(out.data(), field.data());
            }

            #[test]
            fn reverse_is_an_involution(
                values in prop::collection::vec(0.0_f64..=1.0, 1..=64),
            ) {
                let w = values.len();
                let field = Field::from_data(w, 1, values).unwrap();
                let back = Direction::Reverse.apply(&Direction::Reverse.apply(&field));
                for (a, b) in field.data().iter().zip(back.data()) {
                    prop_assert!((a - b).abs() < 1e-15, "{} vs {}", a, b);
                }
            }
        }
    }
}
