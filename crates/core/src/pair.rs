//! Base/exponent pair with an integer power operation.

use std::fmt;
use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Error};
use crate::input::{prompt_finite, prompt_value};

/// A finite floating-point base paired with an integer exponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    first: f64,
    second: i32,
}

impl Pair {
    /// Create a pair. Rejects a non-finite base with
    /// [`Error::InvalidArgument`].
    pub fn new(first: f64, second: i32) -> Result<Self, Error> {
        Ok(Pair {
            first: ensure_finite("first", first)?,
            second,
        })
    }

    /// The base.
    #[inline]
    pub fn first(&self) -> f64 {
        self.first
    }

    /// The exponent.
    #[inline]
    pub fn second(&self) -> i32 {
        self.second
    }

    /// Raise the base to the integer exponent.
    #[inline]
    pub fn power(&self) -> f64 {
        self.first.powi(self.second)
    }

    /// Build a pair from two sequential prompts: a float, then an integer.
    ///
    /// Returns a new pair instead of mutating in place; on malformed input
    /// the error identifies the offending field and no pair is produced.
    pub fn read_from<R, W>(input: &mut R, output: &mut W) -> Result<Self, Error>
    where
        R: BufRead,
        W: Write,
    {
        let first = prompt_finite(input, output, "first")?;
        let second = prompt_value(input, output, "second")?;
        Self::new(first, second)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair(first={}, second={})", self.first, self.second)
    }
}
