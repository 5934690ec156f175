//! Shared helpers for the cross-crate lock tests and the fixture binary.

#![forbid(unsafe_code)]

pub mod search_test_helpers;
