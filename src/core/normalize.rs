//! Normalization of entry lists into canonical text.
//!
//! Works over the sorted, deduplicated record buffer from the serializer.
//! Runs of 2^n contiguous, aligned /32 records are folded back into the
//! tightest enclosing network before formatting.

use byteorder::{
    ByteOrder,
    NetworkEndian,
};

use Result;
use core::repr::{
    Record,
    RECORD_LEN,
};
use core::serialize::serialize_records;

/// Normalizes entries into a sorted, unique, coalesced list of canonical
/// text entries.
///
/// Only byte-equal records are suppressed; a network and a strictly narrower
/// network at the same base both survive.
pub fn normalize_text<I>(entries: I) -> Result<Vec<String>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut records = serialize_records(entries)?;
    let mut normalized = Vec::new();

    let mut last: Option<[u8; RECORD_LEN]> = None;
    let mut p = 0;
    while p < records.len() {
        p = coalesce(&mut records, p);
        let record = records[p];
        if last != Some(record) {
            normalized.push(Record::try_decode(&record[..]).unwrap().to_string());
            last = Some(record);
        }
        p += 1;
    }

    Ok(normalized)
}

/// Finds the largest aligned run of 2^n contiguous /32 records starting at p,
/// rewrites the last record of the run as the enclosing /(32-n) network, and
/// returns its position. Runs shorter than 8 addresses are left alone.
fn coalesce(records: &mut [[u8; RECORD_LEN]], p: usize) -> usize {
    if records[p][4] != 32 {
        return p;
    }

    let start = NetworkEndian::read_u32(&records[p][.. 4]);

    let mut best = 0;
    for n in 3 .. 32 {
        if start & ((1u32 << n) - 1) != 0 {
            break;
        }
        let run = 1usize << n;
        if p + run > records.len() {
            break;
        }
        let tail = &records[p + run - 1];
        if tail[4] != 32 {
            break;
        }
        let tail_addr = NetworkEndian::read_u32(&tail[.. 4]);
        if tail_addr - start != (1u32 << n) - 1 {
            break;
        }
        best = n;
    }

    if best == 0 {
        return p;
    }

    let q = p + (1usize << best) - 1;
    let network = start & !((1u32 << best) - 1);
    NetworkEndian::write_u32(&mut records[q][.. 4], network);
    records[q][4] = 32 - best as u8;
    q
}
