//! GPU display record rendered in phase 4

use std::fmt;
use std::io::Write;

use crate::common::Result;

/// A GPU model and its memory size in GiB
///
/// Stored verbatim: zero or negative sizes are printed as given.
#[derive(Debug, Clone)]
pub struct Gpu {
    model: String,
    vram_gb: i32,
}

impl Gpu {
    pub fn new(model: impl Into<String>, vram_gb: i32) -> Self {
        Self {
            model: model.into(),
            vram_gb,
        }
    }

    /// The rendered line, without its terminator
    pub fn line(&self) -> String {
        self.to_string()
    }

    /// Write the record as exactly one line
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self)?;
        Ok(())
    }
}

impl fmt::Display for Gpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPU: {} avec {}GB VRAM", self.model, self.vram_gb)
    }
}
