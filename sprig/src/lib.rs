//! sprig: sized, splittable generators and shrinkers.
//!
//! This is the main entry point, re-exporting the generator algebra from
//! `sprig-core`.

pub use sprig_core::*;
