//! Ana SUPERIA console smoke test
//!
//! This library holds the transcript driver and its GPU display record so
//! the binary and the tests share one implementation.

pub mod cli;
pub mod common;
pub mod demo;

// Re-export commonly used types for tests
pub use common::{Error, Result, Script};
pub use demo::gpu::Gpu;
