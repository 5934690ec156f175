//! Problem module: requirement keys, compiled problems, and the JSON
//! compilation boundary.
//!
//! Depends on `carrier`, `operators` and `proof` (for the payload digest).

pub mod compile;
#[allow(clippy::module_inception)]
pub mod problem;
pub mod requirement;
