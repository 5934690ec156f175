//! MRW kernel: the deterministic planning model under the random-walk search.
//!
//! # API Surface
//!
//! - [`problem::compile::compile`] -- compile a grounded JSON payload into a `ProblemV1`
//! - [`carrier::state::StateV1::apply`] -- apply an action's effect to a state
//! - [`proof::replay::validate_plan`] -- replay a plan and judge it against the goal
//! - [`proof::plan_hash::plan_digest`] -- content digest of a plan under a problem
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `problem` ← `proof::{replay, plan_hash}`
//!
//! One-way only. `proof::{canon, hash, hash_domain}` are leaves used by
//! `operators` and `problem` for canonical bytes and digests.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod problem;
pub mod proof;
