//! Registration records parsed from registry text.

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::index::Span;

const HEX_MARKER: &str = "(hex)";
const BASE16_MARKER: &str = "(base 16)";

/// One IEEE registration as found in an OUI or IAB table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier value the record was looked up by
    pub idx: u64,
    /// Rendered identifier, e.g. `00-1B-77`
    pub identifier: String,
    /// Registered organisation name
    pub org: String,
    /// Postal address lines in file order
    pub address: Vec<String>,
    /// Byte offset of the record in its source
    pub offset: u64,
    /// Byte length of the record in its source
    pub size: u64,
}

impl Record {
    /// Parse the text of one span.
    ///
    /// The `(hex)` line names the organisation from its third
    /// whitespace-separated field onwards, `(base 16)` lines are dropped and
    /// every other non-blank line is an address line.
    pub fn parse(text: &str, idx: u64, identifier: String, span: Span) -> Result<Self> {
        let mut org = String::new();
        let mut address = Vec::new();

        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            if line.contains(HEX_MARKER) {
                org = third_field(line)
                    .ok_or_else(|| {
                        RegistryError::malformed(
                            span.offset,
                            format!("no organisation on line {line:?}"),
                        )
                    })?
                    .to_owned();
            } else if line.contains(BASE16_MARKER) {
                continue;
            } else {
                address.push(line.to_owned());
            }
        }

        Ok(Self {
            idx,
            identifier,
            org,
            address,
            offset: span.offset,
            size: span.size,
        })
    }
}

/// Everything after the second run of whitespace.
fn third_field(line: &str) -> Option<&str> {
    let mut rest = line.trim_start();
    for _ in 0..2 {
        let end = rest.find(char::is_whitespace)?;
        rest = rest.get(end..)?.trim_start();
    }
    (!rest.is_empty()).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const INTEL: &str = "00-1B-77   (hex)\t\tIntel Corporate\n\
                         001B77     (base 16)\t\tIntel Corporate\n\
                         \t\t\t\tLot 8, Jalan Hi-Tech 2/3\n\
                         \t\t\t\tKulim  Kedah  09000\n\
                         \t\t\t\tMY\n\n";

    #[test]
    fn test_parse_record() {
        let record =
            Record::parse(INTEL, 0x001B77, "00-1B-77".into(), Span::new(40, 200)).unwrap();
        assert_eq!(record.org, "Intel Corporate");
        assert_eq!(
            record.address,
            vec!["Lot 8, Jalan Hi-Tech 2/3", "Kulim  Kedah  09000", "MY"]
        );
        assert_eq!(record.idx, 0x001B77);
        assert_eq!(record.identifier, "00-1B-77");
        assert_eq!((record.offset, record.size), (40, 200));
    }

    #[test]
    fn test_org_keeps_inner_spacing() {
        assert_eq!(third_field("00-50-C2 (hex)  ACME  Widgets Ltd"), Some("ACME  Widgets Ltd"));
        assert_eq!(third_field("00-50-C2 (hex)"), None);
    }

    #[test]
    fn test_missing_org_is_malformed() {
        assert_matches!(
            Record::parse("00-1B-77 (hex)\n", 1, String::new(), Span::new(7, 1)),
            Err(RegistryError::MalformedRecord { offset: 7, .. })
        );
    }
}
