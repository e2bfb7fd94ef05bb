//! Console demo driver
//!
//! Writes the transcript in four phases followed by a closing banner.
//! Every line goes out through its own `writeln!`.

pub mod gpu;

use std::io::Write;

use tracing::debug;

use crate::common::{Result, Script};
use gpu::Gpu;

/// Write the whole transcript to `out`
pub fn run<W: Write>(out: &mut W, script: &Script) -> Result<()> {
    debug!(local = script.local, "starting transcript");

    greet(out, script)?;
    arithmetic(out, script)?;
    enumerate_languages(out, script)?;
    render_gpu(out, script)?;
    banner(out)?;

    debug!("transcript complete");
    Ok(())
}

/// Render the transcript into memory
pub fn transcript(script: &Script) -> Result<String> {
    let mut buf = Vec::new();
    run(&mut buf, script)?;
    Ok(String::from_utf8(buf)?)
}

/// Phase 1
pub fn greet<W: Write>(out: &mut W, script: &Script) -> Result<()> {
    debug!(phase = 1, "greeting");
    writeln!(out, "Bonjour {}! Ana SUPERIA {}", script.name, script.version)?;
    Ok(())
}

/// Phase 2
pub fn arithmetic<W: Write>(out: &mut W, script: &Script) -> Result<()> {
    debug!(phase = 2, "arithmetic");
    let (a, b) = script.addends;
    writeln!(out, "Calcul: {a} + {b} = {}", script.sum())?;
    Ok(())
}

/// Phase 3: header, then one line per language with a 1-based index
pub fn enumerate_languages<W: Write>(out: &mut W, script: &Script) -> Result<()> {
    debug!(phase = 3, count = script.languages.len(), "enumeration");
    writeln!(out, "Langages supportes:")?;
    for (i, lang) in script.languages.iter().enumerate() {
        writeln!(out, "   {}. {}", i + 1, lang)?;
    }
    Ok(())
}

/// Phase 4
pub fn render_gpu<W: Write>(out: &mut W, script: &Script) -> Result<()> {
    debug!(phase = 4, "record rendering");
    let gpu = Gpu::new(script.gpu.model.as_str(), script.gpu.vram_gb);
    gpu.render(out)
}

/// Blank line, then the success banner
pub fn banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Tous les tests Java ont reussi!")?;
    Ok(())
}
