//! # stackforge-common
//!
//! Shared error definitions, constants, and domain primitives used across
//! the stackforge workspace.
//!
//! This crate is the leaf of the dependency graph — it depends on no other
//! internal crate and provides the foundational primitives that all other
//! crates build upon.

pub mod constants;
pub mod error;
pub mod types;
