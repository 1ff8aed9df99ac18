//! Physical-plausibility verification.

#[macro_use]
extern crate log;

mod diag;
mod report;
mod verify;

// Re-export
pub use diag::*;
pub use report::*;
pub use verify::*;
