use std::io::{
    Read,
    Write,
};

use Result;
use core::stream::strip_invalid;

/// Copies the source to the sink, dropping syntactically invalid lines.
pub fn filter<R: Read, W: Write>(source: R, sink: W) -> Result<()> {
    strip_invalid(source, sink)
}
