//! Error types for the gradgen core.

use thiserror::Error;

/// Errors produced by gradient operations.
///
/// Every validation failure is raised at the entry point of the offending
/// call; library code never prints or terminates the process.
#[derive(Debug, Error)]
pub enum GradientError {
    /// Width or height was zero, or `width * height` overflowed `usize`.
    #[error("invalid dimension: width and height must be positive")]
    InvalidDimension,

    /// A radial center coordinate was NaN or infinite.
    #[error("invalid center: ({x}, {y}) has a non-finite coordinate")]
    InvalidCenter { x: f64, y: f64 },

    /// A direction name was not one of "forward" or "reverse".
    #[error("invalid direction '{0}': expected 'forward' or 'reverse'")]
    InvalidDirection(String),

    /// Two fields had different shapes in an operation requiring identical shapes.
    #[error("shape mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    ShapeMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// Raw data did not form a valid numeric array of the requested shape.
    #[error("invalid field data: {0}")]
    InvalidFieldType(String),

    /// A colormap name was not recognized, or a color stop could not be parsed.
    #[error("invalid colormap: {0}")]
    InvalidColormap(String),

    /// An I/O failure while persisting an image.
    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimension_displays_readable_message() {
        let err = GradientError::InvalidDimension;
        let msg = format!("{err}");
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn invalid_center_includes_coordinates() {
        let err = GradientError::InvalidCenter {
            x: f64::NAN,
            y: 0.5,
        };
        let msg = format!("{err}");
        assert!(msg.contains("NaN"), "missing x in: {msg}");
        assert!(msg.contains("0.5"), "missing y in: {msg}");
    }

    #[test]
    fn invalid_direction_includes_offending_name() {
        let err = GradientError::InvalidDirection("sideways".into());
        let msg = format!("{err}");
        assert!(msg.contains("sideways"), "missing name in: {msg}");
        assert!(msg.contains("forward"), "missing hint in: {msg}");
    }

    #[test]
    fn shape_mismatch_includes_all_dimensions() {
        let err = GradientError::ShapeMismatch {
            lhs_w: 4,
            lhs_h: 4,
            rhs_w: 5,
            rhs_h: 5,
        };
        let msg = format!("{err}");
        assert!(msg.contains('4'), "missing lhs in: {msg}");
        assert!(msg.contains('5'), "missing rhs in: {msg}");
    }

    #[test]
    fn invalid_field_type_includes_message() {
        let err = GradientError::InvalidFieldType("value at index 3 is NaN".into());
        let msg = format!("{err}");
        assert!(msg.contains("index 3"), "missing message in: {msg}");
    }

    #[test]
    fn invalid_colormap_includes_message() {
        let err = GradientError::InvalidColormap("plasma".into());
        let msg = format!("{err}");
        assert!(msg.contains("plasma"), "missing message in: {msg}");
    }

    #[test]
    fn io_includes_message() {
        let err = GradientError::Io("disk full".into());
        let msg = format!("{err}");
        assert!(msg.contains("disk full"), "missing message in: {msg}");
    }

    #[test]
    fn gradient_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GradientError>();
    }

    #[test]
    fn gradient_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<GradientError>();
    }
}
