//! Core functionality for sprig generators.
//!
//! This crate provides the building blocks for producing randomized,
//! size-controlled test values: the splittable [`Seed`], the [`Size`]
//! parameter, the [`Gen`] type with its combinators, and [`Arbitrary`],
//! which pairs a generator with a shrinker.
//!
//! Every generator is a pure function of its size and seed. Combinators that
//! draw more than once split the seed into independent substreams, so
//! composed values never correlate and generators can be evaluated from
//! several threads without synchronisation.

pub mod arbitrary;
pub mod checked;
pub mod choice;
pub mod collection;
pub mod combine;
pub mod data;
pub mod error;
pub mod filter;
pub mod gen;
pub mod shrink;

// Re-export the main types
pub use arbitrary::*;
pub use choice::*;
pub use collection::*;
pub use data::*;
pub use error::*;
pub use gen::*;
pub use shrink::{ShrinkIter, Shrinker};
