//! Operators module: grounded actions and the action registry.
//!
//! Depends on `carrier`. The registry uses `proof::canon` for its digest form.

pub mod action;
pub mod action_registry;
