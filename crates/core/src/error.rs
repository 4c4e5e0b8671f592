//! Error taxonomy for validated construction and interactive input.

use thiserror::Error;

/// Errors raised by constructors, arithmetic guards, and prompt-driven input.
///
/// Library code propagates these with `?`; the demo binaries catch them at
/// the point of interactive use and print the message. Nothing is retried
/// and nothing is fatal to the process.
#[derive(Debug, Error)]
pub enum Error {
    /// A numeric argument was not a finite number.
    ///
    /// Raised by constructors and by `Vec3::scale`. Coordinates and scalars
    /// must always be finite; `NaN` and infinities are rejected at the point
    /// of violation.
    #[error("invalid argument '{name}': expected a finite number, got {value}")]
    InvalidArgument {
        /// Name of the offending parameter (e.g. `"x"`, `"scalar"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A prompted input line could not be parsed as the requested type.
    #[error("could not parse {field} from input {input:?}")]
    Parse {
        /// Name of the field being prompted for.
        field: &'static str,
        /// The offending line, trimmed. Empty if the stream ended early.
        input: String,
    },

    /// The input or output stream failed during prompting.
    #[error("input stream error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validate that `value` is finite, naming the parameter on failure.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(name, value, "rejected non-finite argument");
        Err(Error::InvalidArgument { name, value })
    }
}

