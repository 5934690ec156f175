//! Carrier module: fluent sets, states, conditions and effects.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod condition;
pub mod fluent_set;
pub mod state;
