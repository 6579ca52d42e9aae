//! Parsing of textual IP list entries.
//!
//! An entry is a single address ("10.0.0.1"), a CIDR block ("10.0.0.0/24"),
//! or an inclusive range ("10.0.0.1,10.0.0.9"). Octets and masks are decimal
//! and greedily consumed; no surrounding whitespace is tolerated.

use std::result::Result as StdResult;
use std::str::FromStr;

use core::repr::Address;

/// One parsed textual IP list entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    /// A single address with a prefix mask in [8, 32].
    Single { address: Address, mask: u8 },
    /// An inclusive interval of addresses with first <= last.
    Range { first: Address, last: Address },
    /// An entry matching no production of the grammar.
    Invalid,
}

impl Entry {
    /// Parses one textual entry.
    ///
    /// The parser never fails; malformed input yields Entry::Invalid. A bare
    /// dotted quad parses as a single address with a /32 mask.
    pub fn parse(entry: &str) -> Entry {
        let bytes = entry.as_bytes();

        let (address, rest) = match read_dotted_quad(bytes) {
            Some(result) => result,
            None => return Entry::Invalid,
        };

        match rest.split_first() {
            None => Entry::Single { address, mask: 32 },
            Some((&b'/', rest)) => match read_mask(rest) {
                Some((mask, rest)) if rest.is_empty() => Entry::Single { address, mask },
                _ => Entry::Invalid,
            },
            Some((&b',', rest)) => match read_dotted_quad(rest) {
                Some((last, rest)) if rest.is_empty() && address.as_int() <= last.as_int() => {
                    Entry::Range {
                        first: address,
                        last,
                    }
                }
                _ => Entry::Invalid,
            },
            Some(_) => Entry::Invalid,
        }
    }
}

impl FromStr for Address {
    type Err = ();

    /// Parses an IPv4 address from an A.B.C.D style string.
    fn from_str(addr: &str) -> StdResult<Address, Self::Err> {
        match read_dotted_quad(addr.as_bytes()) {
            Some((address, rest)) if rest.is_empty() => Ok(address),
            _ => Err(()),
        }
    }
}

/// Reads a decimal octet in [0, 255], returning the value and the remainder.
fn read_octet(bytes: &[u8]) -> Option<(u8, &[u8])> {
    let mut value: u32 = 0;
    let mut rest = bytes;

    match rest.first() {
        Some(&byte) if byte >= b'0' && byte <= b'9' => {}
        _ => return None,
    }

    while let Some((&byte, tail)) = rest.split_first() {
        if byte < b'0' || byte > b'9' {
            break;
        }
        value = 10 * value + u32::from(byte - b'0');
        if value > 255 {
            return None;
        }
        rest = tail;
    }

    Some((value as u8, rest))
}

fn read_dot(bytes: &[u8]) -> Option<&[u8]> {
    match bytes.split_first() {
        Some((&b'.', rest)) => Some(rest),
        _ => None,
    }
}

/// Reads a decimal prefix mask in [8, 32].
fn read_mask(bytes: &[u8]) -> Option<(u8, &[u8])> {
    let (mask, rest) = read_octet(bytes)?;
    if mask < 8 || mask > 32 {
        None
    } else {
        Some((mask, rest))
    }
}

/// Reads an A.B.C.D dotted quad into an address.
fn read_dotted_quad(bytes: &[u8]) -> Option<(Address, &[u8])> {
    let (a, rest) = read_octet(bytes)?;
    let rest = read_dot(rest)?;
    let (b, rest) = read_octet(rest)?;
    let rest = read_dot(rest)?;
    let (c, rest) = read_octet(rest)?;
    let rest = read_dot(rest)?;
    let (d, rest) = read_octet(rest)?;
    Some((Address::new([a, b, c, d]), rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_address() {
        assert_eq!(
            Entry::parse("192.168.1.5"),
            Entry::Single {
                address: Address::new([192, 168, 1, 5]),
                mask: 32,
            }
        );
    }

    #[test]
    fn test_parse_cidr() {
        assert_eq!(
            Entry::parse("10.0.0.0/24"),
            Entry::Single {
                address: Address::new([10, 0, 0, 0]),
                mask: 24,
            }
        );
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            Entry::parse("10.0.0.1,10.0.0.9"),
            Entry::Range {
                first: Address::new([10, 0, 0, 1]),
                last: Address::new([10, 0, 0, 9]),
            }
        );
    }

    #[test]
    fn test_parse_range_of_one() {
        assert_eq!(
            Entry::parse("1.2.3.4,1.2.3.4"),
            Entry::Range {
                first: Address::new([1, 2, 3, 4]),
                last: Address::new([1, 2, 3, 4]),
            }
        );
    }

    #[test]
    fn test_parse_reversed_range() {
        assert_eq!(Entry::parse("10.0.0.9,10.0.0.1"), Entry::Invalid);
    }

    #[test]
    fn test_parse_octet_out_of_range() {
        assert_eq!(Entry::parse("3.3.3.300"), Entry::Invalid);
        assert_eq!(Entry::parse("256.1.1.1"), Entry::Invalid);
    }

    #[test]
    fn test_parse_leading_zeros() {
        // Greedy decimal consumption permits redundant leading zeros.
        assert_eq!(
            Entry::parse("010.0.0.001"),
            Entry::Single {
                address: Address::new([10, 0, 0, 1]),
                mask: 32,
            }
        );
        assert_eq!(
            Entry::parse("1.2.3.4/08"),
            Entry::Single {
                address: Address::new([1, 2, 3, 4]),
                mask: 8,
            }
        );
    }

    #[test]
    fn test_parse_mask_out_of_range() {
        assert_eq!(Entry::parse("1.2.3.4/7"), Entry::Invalid);
        assert_eq!(Entry::parse("1.2.3.4/33"), Entry::Invalid);
        assert_eq!(Entry::parse("1.2.3.4/0"), Entry::Invalid);
    }

    #[test]
    fn test_parse_trailing_bytes() {
        assert_eq!(Entry::parse("1.2.3.4 "), Entry::Invalid);
        assert_eq!(Entry::parse("1.2.3.4.5"), Entry::Invalid);
        assert_eq!(Entry::parse("1.2.3.4/24x"), Entry::Invalid);
        assert_eq!(Entry::parse("1.2.3.4,5.6.7.8,9.10.11.12"), Entry::Invalid);
    }

    #[test]
    fn test_parse_truncated() {
        assert_eq!(Entry::parse(""), Entry::Invalid);
        assert_eq!(Entry::parse("1.2.3"), Entry::Invalid);
        assert_eq!(Entry::parse("1.2.3."), Entry::Invalid);
        assert_eq!(Entry::parse("1.2.3.4/"), Entry::Invalid);
        assert_eq!(Entry::parse("1.2.3.4,"), Entry::Invalid);
    }

    #[test]
    fn test_address_from_str() {
        assert_eq!("10.0.0.1".parse(), Ok(Address::new([10, 0, 0, 1])));
        assert_eq!("10.0.0.1/8".parse::<Address>(), Err(()));
        assert_eq!("10.0.0".parse::<Address>(), Err(()));
    }
}
