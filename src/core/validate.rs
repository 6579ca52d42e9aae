//! In-memory validation of entry lists.

use {
    Error,
    Result,
};
use core::entry::Entry;

/// Reports the 1-based indices of the first n entries that fail to parse.
///
/// Returns an empty list when every entry is well formed.
pub fn validate<S: AsRef<str>>(entries: &[S], n: usize) -> Result<Vec<usize>> {
    if n == 0 {
        return Err(Error::BadArgument("n must be strictly positive"));
    }

    let mut invalid = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        if let Entry::Invalid = Entry::parse(entry.as_ref()) {
            invalid.push(i + 1);
            if invalid.len() >= n {
                break;
            }
        }
    }
    Ok(invalid)
}
