use std::cmp;
use std::io::{
    Read,
    Result as IOResult,
};

/// Reader that hands out at most chunk_len bytes per read call, regardless
/// of how large a buffer the caller provides.
pub struct Chunked<'a> {
    bytes: &'a [u8],
    chunk_len: usize,
}

impl<'a> Chunked<'a> {
    pub fn new(bytes: &'a [u8], chunk_len: usize) -> Chunked<'a> {
        assert!(chunk_len > 0);

        Chunked { bytes, chunk_len }
    }
}

impl<'a> Read for Chunked<'a> {
    fn read(&mut self, buffer: &mut [u8]) -> IOResult<usize> {
        let len = cmp::min(self.chunk_len, cmp::min(self.bytes.len(), buffer.len()));
        buffer[.. len].copy_from_slice(&self.bytes[.. len]);
        self.bytes = &self.bytes[len ..];
        Ok(len)
    }
}
