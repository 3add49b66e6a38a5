//! Command implementations for simplevec-cmd

pub mod list;
pub mod run;
pub mod stress;
