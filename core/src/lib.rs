//! Core

#[macro_use]
extern crate hexf;

// Re-export.
pub mod error;
pub mod geometry;
pub mod math;
pub mod rng;
pub mod sampling;
pub mod spectrum;
