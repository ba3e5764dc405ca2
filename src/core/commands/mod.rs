// src/core/commands/mod.rs

//! Command construction: the `CommandSpec` seam and the JSON verb family.

pub mod command_spec;
pub mod json;

pub use command_spec::CommandSpec;
