//! MRW Harness: world-level orchestration for the search engine.
//!
//! The harness runs a world (or a problem file) through the pipeline
//! `encode_payload` → `compile` → `search` → `validate_plan` and packages
//! the outcome as a `RunReportV1`, optionally appended to result files.
//!
//! The harness does NOT implement search or proof logic; it delegates to
//! the kernel and the search crate. Worlds provide problem data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod contract;
pub mod results;
pub mod runner;
pub mod worlds;
