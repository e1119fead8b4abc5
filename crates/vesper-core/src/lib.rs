//! Vesper Core
//!
//! This crate contains the core functionality shared by the vesper engine
//! crates: logging setup, geometry primitives, and math re-exports.

pub mod geometry;
pub mod logging;
pub mod math;
