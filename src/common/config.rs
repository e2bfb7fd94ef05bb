//! Script constants
//!
//! Everything the transcript prints comes from here. Values are compiled
//! in; nothing is read from files, the environment or the command line.

/// Inputs for the GPU display record built in phase 4
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuSpec {
    pub model: String,
    pub vram_gb: i32,
}

impl Default for GpuSpec {
    fn default() -> Self {
        Self {
            model: "RTX 3070".to_string(),
            vram_gb: 8,
        }
    }
}

/// Fixed data driving the four phases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    /// Name greeted in phase 1
    pub name: String,

    /// Version printed after the greeting
    pub version: i32,

    /// Locality flag. Carried but never printed.
    pub local: bool,

    /// The two operands of phase 2
    pub addends: (i32, i32),

    /// Languages enumerated in phase 3, in order
    pub languages: [&'static str; 4],

    /// Display record inputs for phase 4
    pub gpu: GpuSpec,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            name: "Alain".to_string(),
            version: 2025,
            local: true,
            addends: (42, 58),
            languages: ["JavaScript", "Python", "TypeScript", "Java"],
            gpu: GpuSpec::default(),
        }
    }
}

impl Script {
    pub fn sum(&self) -> i32 {
        self.addends.0 + self.addends.1
    }
}
