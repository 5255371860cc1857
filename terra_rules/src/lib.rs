//! # Terra Rules
//!
//! The static tables behind every Lumi Terra reading: compass directions,
//! the eight trigrams and the family roles they carry, the intention
//! vocabulary, and the household layout a caller can place on the compass.
//! This crate performs no I/O and holds no state.

pub mod compass;
pub mod error;
pub mod household;
pub mod symbols;

pub use compass::*;
pub use error::*;
pub use household::*;
pub use symbols::*;
