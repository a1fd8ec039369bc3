//! Memory Puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates as `memory_puzzle::{core,input,term,types}`
//! and hosts the binary's environment config and log setup.

pub mod config;
pub mod logging;

pub use memory_puzzle_core as core;
pub use memory_puzzle_input as input;
pub use memory_puzzle_term as term;
pub use memory_puzzle_types as types;
