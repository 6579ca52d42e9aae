use std::io::{
    Read,
    Write,
};

use Result;
use core::stream::validate_stream;

/// Validates the byte stream and writes the line number of each of the
/// first n invalid lines to the sink.
pub fn validate<R: Read, W: Write>(source: R, mut sink: W, n: usize) -> Result<()> {
    for line_number in validate_stream(source, n)? {
        writeln!(sink, "{}", line_number)?;
    }

    Ok(())
}
