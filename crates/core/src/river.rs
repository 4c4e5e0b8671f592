//! Named rivers and an insertion-ordered registry.
//!
//! The registry is an explicit, owned value rather than process-wide
//! state: callers create one, register rivers into it, and iterate it.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Error};

/// A river with a name and a length in kilometers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct River {
    name: String,
    length_km: f64,
}

impl River {
    /// Create a river. Rejects a non-finite or negative length with
    /// [`Error::InvalidArgument`].
    pub fn new(name: impl Into<String>, length_km: f64) -> Result<Self, Error> {
        let length_km = ensure_finite("length_km", length_km)?;
        if length_km < 0.0 {
            return Err(Error::InvalidArgument {
                name: "length_km",
                value: length_km,
            });
        }
        Ok(River {
            name: name.into(),
            length_km,
        })
    }

    /// The river's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The river's length in kilometers.
    #[inline]
    pub fn length_km(&self) -> f64 {
        self.length_km
    }
}

/// An insertion-ordered collection of rivers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiverRegistry {
    rivers: Vec<River>,
}

impl RiverRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a river to the registry.
    pub fn register(&mut self, river: River) {
        tracing::debug!(name = river.name(), length_km = river.length_km(), "registered river");
        self.rivers.push(river);
    }

    /// Number of registered rivers.
    #[inline]
    pub fn len(&self) -> usize {
        self.rivers.len()
    }

    /// Whether the registry is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rivers.is_empty()
    }

    /// Iterate over rivers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &River> {
        self.rivers.iter()
    }

    /// Iterate over river names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rivers.iter().map(River::name)
    }
}
