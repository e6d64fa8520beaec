use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Writes a multi-line block followed by a blank separator line.
pub fn write_block(out: &mut dyn Write, block: &str) -> std::io::Result<()> {
    writeln!(out, "{}", block)?;
    writeln!(out)
}
