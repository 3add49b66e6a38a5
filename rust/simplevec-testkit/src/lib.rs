//! Test utilities and helpers for the simplevec crates.
//!
//! This crate provides:
//! - Instrumented element types that record clones and drops
//! - A move-only element type with no `Clone` implementation
//! - Seeded random data and operation generators for differential tests
//! - Builders for the vectors the scenario suites start from
//!
//! # Usage
//!
//! This crate is intended for use within the simplevec test suites and the
//! `simplevec-cmd` scenario runner.

pub mod builders;
pub mod data_gen;
pub mod fixtures;

pub use fixtures::{CopyCounter, CopyTally, DropCounter, DropTally, NonCopyable};
