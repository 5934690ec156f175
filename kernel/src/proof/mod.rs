//! Proof module: canonical JSON, domain-separated hashing, plan replay and
//! plan digests.
//!
//! `canon`, `hash` and `hash_domain` are leaf utilities. `replay` and
//! `plan_hash` depend on `problem`.

pub mod canon;
pub mod hash;
pub mod hash_domain;
pub mod plan_hash;
pub mod replay;
