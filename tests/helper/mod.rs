//! Shared test utilities

#![allow(dead_code)]

pub mod fixtures;
pub mod registry;

pub use fixtures::*;
pub use registry::*;
