//! Vector Lab Core Library
//!
//! Classroom linear-algebra and object exercises as a reusable library:
//! a validated 3D vector value type with the standard arithmetic and
//! comparison operations, a base/exponent pair with an integer power
//! operation, and an insertion-ordered river registry.
//!
//! All constructors validate that numeric inputs are finite and return
//! `Result`; the interactive `read_from` constructors build values from
//! sequential prompts over any `BufRead`/`Write` pair.

pub mod error;
mod input;
pub mod pair;
pub mod river;
pub mod vec3;

// Re-export the value types and the shared error
pub use error::Error;
pub use pair::Pair;
pub use river::{River, RiverRegistry};
pub use vec3::Vec3;
