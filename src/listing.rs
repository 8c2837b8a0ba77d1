use std::io::Write;

use anyhow::Result;

use crate::disasm::Disassembler;

/// Largest ROM of the M68HC05 family
pub const ROM_SIZE: usize = 32 * 1024;

/// Totals of a written listing
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Summary {
    /// Number of records (source lines) produced
    pub lines: usize,

    /// The image is larger than the ROM of any family member
    pub oversized: bool,
}

/// Writes the full disassembly listing of `image` to `out`.
/// `name` is only used in the header and warning lines.
pub fn write_listing(out: &mut impl Write, name: &str, image: &[u8]) -> Result<Summary> {
    writeln!(out, "Disassembly of {}", name)?;
    writeln!(out)?;

    let mut lines = 0;
    for record in Disassembler::new(image) {
        writeln!(out, "{}", record)?;
        // Blank line after code that does not fall through
        if record.is_terminator() {
            writeln!(out)?;
        }
        lines += 1;
    }
    writeln!(out)?;

    let oversized = image.len() > ROM_SIZE;
    if oversized {
        tracing::warn!(
            "{} is {} bytes, ROM is at most {} bytes",
            name,
            image.len(),
            ROM_SIZE
        );
        writeln!(out, "Warning: {} exceeds M68HC05 ROM-Size", name)?;
    }
    writeln!(out, "{} Source lines produced", lines)?;

    Ok(Summary { lines, oversized })
}
