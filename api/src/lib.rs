//! Model definition loading and registration.

#[macro_use]
extern crate log;

mod loader;
mod registry;

// Re-export
pub use loader::*;
pub use registry::*;
