//! Core data types and structures
//!
//! This module contains the raw module snapshot consumed by the graph
//! builder, separated from the graph and detection logic.

pub mod types;

pub use types::*;
