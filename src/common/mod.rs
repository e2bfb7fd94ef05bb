//! Common utilities shared by the driver and the binary

pub mod config;
pub mod error;
pub mod logging;

pub use config::{GpuSpec, Script};
pub use error::{Error, Result};
