//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: gradient error (bad dimensions, bad center, shape mismatch)
//! - 11: I/O error (PNG write, recipe file read)
//! - 12: input error (bad colormap, source, direction, or recipe JSON)
//! - 13: serialization error

use gradgen_core::GradientError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A gradient-core error (bad dimensions, bad center, shape mismatch).
    Gradient(GradientError),
    /// An I/O error (file write, PNG encoding, recipe file read).
    Io(String),
    /// A user input error (bad colormap, channel source, direction, recipe JSON).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Gradient(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Gradient(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<GradientError> for CliError {
    fn from(e: GradientError) -> Self {
        match e {
            GradientError::Io(msg) => CliError::Io(msg),
            other => CliError::Gradient(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_formatting_names_the_variant() {
        // Tests unwrap Result<_, CliError>, which needs the Debug impl.
        let repr = format!("{:?}", CliError::Input("unknown axis 'diagonal'".into()));
        assert!(repr.contains("Input"), "unexpected debug repr: {repr}");
    }

    #[test]
    fn exit_codes_are_distinct_per_variant() {
        let errs = [
            CliError::Gradient(GradientError::InvalidDimension),
            CliError::Io("cannot create samples directory".into()),
            CliError::Input("unknown colormap 'plasma'".into()),
            CliError::Serialization("summary is not valid JSON".into()),
        ];
        let codes: Vec<i32> = errs.iter().map(CliError::exit_code).collect();
        assert_eq!(codes, vec![10, 11, 12, 13]);
    }

    #[test]
    fn display_passes_the_inner_message_through() {
        let err = CliError::Input("unknown channel source 'spiral'".into());
        assert_eq!(err.to_string(), "unknown channel source 'spiral'");
        let err = CliError::Gradient(GradientError::InvalidDimension);
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn gradient_io_becomes_a_cli_io_error() {
        let err: CliError = GradientError::Io("no space left on device".into()).into();
        assert_eq!(err.exit_code(), 11);
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn other_gradient_errors_keep_the_gradient_code() {
        let err: CliError = GradientError::InvalidCenter {
            x: f64::NAN,
            y: 0.0,
        }
        .into();
        assert_eq!(err.exit_code(), 10);
        assert!(matches!(err, CliError::Gradient(_)));
    }

    #[test]
    fn serde_json_failures_carry_the_serialization_code() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(CliError::from(parse_err).exit_code(), 13);
    }
}
