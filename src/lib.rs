#[cfg(test)]
#[macro_use]
extern crate assert_matches;
extern crate byteorder;
#[macro_use]
extern crate log;

pub mod core;
pub mod demos;

#[derive(Debug)]
pub enum Error {
    /// Indicates a buffer too short for the requested decode.
    Exhausted,
    /// Indicates a syntactically invalid textual entry.
    InvalidEntry(String),
    /// Indicates an argument outside of its documented domain.
    BadArgument(&'static str),
    /// Indicates a generic IO error.
    IO(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IO(error)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
