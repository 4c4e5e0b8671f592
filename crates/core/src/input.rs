//! Prompt-and-parse helpers for interactive construction.
//!
//! Both `Vec3::read_from` and `Pair::read_from` follow the same pattern:
//! write a prompt, flush, read one line, trim, parse. The helpers are
//! generic over `BufRead`/`Write` so tests can drive them with in-memory
//! cursors instead of a terminal.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::Error;

/// Prompt for a single value and parse the next input line as `T`.
///
/// A line that fails to parse, or a stream that ends before yielding a
/// line, produces [`Error::Parse`] naming `field`. Stream failures surface
/// as [`Error::Io`].
pub(crate) fn prompt_value<T, R, W>(input: &mut R, output: &mut W, field: &'static str) -> Result<T, Error>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    write!(output, "Enter {field}: ")?;
    output.flush()?;

    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        // Stream closed before a value was entered.
        tracing::debug!(field, "input stream ended during prompt");
        return Err(Error::Parse {
            field,
            input: String::new(),
        });
    }

    let trimmed = line.trim();
    trimmed.parse().map_err(|_| {
        tracing::debug!(field, input = trimmed, "prompted input failed to parse");
        Error::Parse {
            field,
            input: trimmed.to_string(),
        }
    })
}

/// Prompt for a floating-point value, rejecting non-finite results.
///
/// `"inf"` and `"NaN"` parse successfully as `f64`, so a parsed value is
/// funneled through the same finiteness check as direct construction.
pub(crate) fn prompt_finite<R, W>(input: &mut R, output: &mut W, field: &'static str) -> Result<f64, Error>
where
    R: BufRead,
    W: Write,
{
    let value: f64 = prompt_value(input, output, field)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidArgument { name: field, value })
    }
}
