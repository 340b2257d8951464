//! Post-processing of decoded rasters. Inputs are never mutated.

pub mod enhance;
pub mod filter;

pub use enhance::{EnhanceKind, enhance};
pub use filter::{FilterKind, Kernel, filter};
