//! File discovery and the check run.

mod discovery;
mod processing;

pub use discovery::*;
pub use processing::*;
