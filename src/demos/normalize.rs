use std::io::{
    BufRead,
    Write,
};

use Result;
use core::normalize::normalize_text;

/// Reads one entry per line from the source and writes the normalized list
/// to the sink.
pub fn normalize<R: BufRead, W: Write>(source: R, mut sink: W) -> Result<()> {
    let mut entries = Vec::new();
    for line in source.lines() {
        entries.push(line?);
    }

    for entry in normalize_text(&entries)? {
        writeln!(sink, "{}", entry)?;
    }

    Ok(())
}
