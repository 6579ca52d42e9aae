//! Serialization of textual entries into sorted, deduplicated records.

use {
    Error,
    Result,
};
use core::entry::Entry;
use core::repr::{
    Address,
    Record,
    RECORD_LEN,
};

/// Serializes entries into a single buffer of encoded records, sorted by
/// lexicographic byte comparison and stripped of adjacent duplicates.
///
/// Ranges expand into one /32 record per covered address, so a wide range is
/// a resource-consuming input.
pub fn serialize<I>(entries: I) -> Result<Vec<u8>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let records = serialize_records(entries)?;

    let mut buffer = Vec::with_capacity(records.len() * RECORD_LEN);
    for record in &records {
        buffer.extend_from_slice(record);
    }
    Ok(buffer)
}

/// Record-array form of serialize(...), shared with the normalizer.
pub fn serialize_records<I>(entries: I) -> Result<Vec<[u8; RECORD_LEN]>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut parsed = Vec::new();
    for entry in entries {
        let entry = entry.as_ref();
        match Entry::parse(entry) {
            Entry::Invalid => return Err(Error::InvalidEntry(entry.to_string())),
            valid => parsed.push(valid),
        }
    }

    let expanded: usize = parsed
        .iter()
        .map(|entry| match *entry {
            Entry::Range { first, last } => (last.as_int() - first.as_int()) as usize + 1,
            _ => 1,
        })
        .sum();

    let mut records = Vec::with_capacity(expanded);
    for entry in &parsed {
        match *entry {
            Entry::Single { address, mask } => {
                records.push(Record::new(address, mask).network().encode());
            }
            Entry::Range { first, last } => {
                for addr in first.as_int() ..= last.as_int() {
                    records.push(Record::new(Address::from(addr), 32).encode());
                }
            }
            Entry::Invalid => unreachable!(),
        }
    }

    records.sort_unstable();
    records.dedup();

    debug!(
        "Serialized {} entries into {} distinct records.",
        parsed.len(),
        records.len()
    );

    Ok(records)
}
