#[macro_use]
extern crate lazy_static;
extern crate iplist;

mod context;

use context::Chunked;
use iplist::core::stream::validate_stream;
use iplist::core::validate::validate;

lazy_static! {
    static ref ENTRIES: Vec<String> = {
        [
            "1.1.1.1",
            "bad",
            "2.2.2.2",
            "3.3.3.300",
            "10.0.0.0/24",
            "10.0.0.0/33",
            "1.2.3.4,5.6.7.8",
            "1.2.3.4,5.6.7",
        ].iter()
            .map(|entry| entry.to_string())
            .collect()
    };

    static ref INVALID: Vec<usize> = vec![2, 4, 6, 8];
}

fn as_stream(entries: &[String]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for entry in entries {
        bytes.extend_from_slice(entry.as_bytes());
        bytes.push(b'\n');
    }
    bytes
}

#[test]
fn validate_reports_invalid_entries() {
    assert_eq!(validate(&*ENTRIES, 10).unwrap(), *INVALID);
}

#[test]
fn validate_list_and_stream_agree() {
    let stream = as_stream(&*ENTRIES);
    let lines = validate_stream(&stream[..], 10).unwrap();
    let indices: Vec<_> = INVALID.iter().map(|&i| i as u64).collect();
    assert_eq!(lines, indices);
}

#[test]
fn validate_stream_chunk_size_is_irrelevant() {
    let stream = as_stream(&*ENTRIES);
    let whole = validate_stream(&stream[..], 10).unwrap();

    for chunk_len in &[1, 2, 3, 7] {
        let chunked = Chunked::new(&stream, *chunk_len);
        assert_eq!(validate_stream(chunked, 10).unwrap(), whole);
    }
}

#[test]
fn validate_stream_accepts_short_masks() {
    // The line grammar admits masks in [1, 32]; the in-memory parser demands
    // [8, 32]. Both behaviors are deliberate.
    let entries = vec!["1.2.3.4/1".to_string()];
    assert_eq!(validate(&entries, 10).unwrap(), vec![1]);
    assert_eq!(
        validate_stream(&as_stream(&entries)[..], 10).unwrap(),
        vec![]
    );
}

#[test]
fn validate_stream_ignores_range_order() {
    // The line grammar is purely syntactic; only the in-memory parser
    // compares range endpoints.
    let entries = vec!["9.9.9.9,1.1.1.1".to_string()];
    assert_eq!(validate(&entries, 10).unwrap(), vec![1]);
    assert_eq!(
        validate_stream(&as_stream(&entries)[..], 10).unwrap(),
        vec![]
    );
}

#[test]
fn validate_defaults_to_first_match() {
    assert_eq!(validate(&*ENTRIES, 1).unwrap(), vec![2]);
    assert_eq!(
        validate_stream(&as_stream(&*ENTRIES)[..], 1).unwrap(),
        vec![2]
    );
}
