//! Organisationally unique identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};

use eui_primitives::EuiError;
use serde::Serialize;

use crate::error::Result;
use crate::record::Record;
use crate::registry::{RecordKind, Registry};

/// A registered 24-bit OUI and every registration found for it.
#[derive(Debug, Clone, Serialize)]
pub struct Oui {
    value: u32,
    records: Vec<Record>,
}

impl Oui {
    /// Largest OUI value.
    pub const MAX: u32 = 0xFF_FFFF;

    /// Look up `value` in `registry`.
    pub fn lookup(value: u32, registry: &Registry) -> Result<Self> {
        if value > Self::MAX {
            return Err(
                EuiError::value(format!("OUI int outside expected range: {value:#x}")).into(),
            );
        }

        let kind = RecordKind::Oui;
        let key = u64::from(value);
        let identifier = kind.render(key);
        let records = registry
            .table(kind)
            .read(kind, key, None)?
            .into_iter()
            .map(|(span, text)| Record::parse(&text, key, identifier.clone(), span))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { value, records })
    }

    /// Parse `XX-XX-XX` or six bare hex digits and look the result up.
    pub fn parse(s: &str, registry: &Registry) -> Result<Self> {
        Self::lookup(parse_oui(s)?, registry)
    }

    /// The 24-bit value.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// All registrations in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of registrations for this OUI.
    pub fn reg_count(&self) -> usize {
        self.records.len()
    }

    /// Registration at `index`; the first one is the usual choice.
    pub fn registration(&self, index: usize) -> Result<&Record> {
        self.records.get(index).ok_or_else(|| {
            EuiError::index(format!(
                "OUI {self} has {} registrations, no index {index}",
                self.records.len()
            ))
            .into()
        })
    }
}

fn parse_oui(s: &str) -> std::result::Result<u32, EuiError> {
    let groups: Vec<&str> = s.split('-').collect();
    let well_formed = match groups.as_slice() {
        [bare] => bare.len() == 6,
        [_, _, _] => groups.iter().all(|group| group.len() == 2),
        _ => false,
    };
    let digits = groups.concat();
    if !well_formed || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EuiError::format(format!("unexpected OUI format: {s:?}")));
    }
    u32::from_str_radix(&digits, 16)
        .map_err(|e| EuiError::format(format!("unexpected OUI format: {s:?}: {e}")))
}

impl PartialEq for Oui {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Oui {}

impl Hash for Oui {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Oui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&RecordKind::Oui.render(u64::from(self.value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use crate::test_utils::registry;
    use assert_matches::assert_matches;

    #[test]
    fn test_lookup() {
        let oui = Oui::lookup(0x001B77, &registry()).unwrap();
        assert_eq!(oui.to_string(), "00-1B-77");
        assert_eq!(oui.reg_count(), 1);

        let record = oui.registration(0).unwrap();
        assert_eq!(record.org, "Intel Corporate");
        assert_eq!(record.identifier, "00-1B-77");
        assert_eq!(record.idx, 0x001B77);
        assert_eq!(record.address.last().map(String::as_str), Some("MY"));
    }

    #[test]
    fn test_multiple_registrations() {
        let oui = Oui::parse("08-00-30", &registry()).unwrap();
        assert_eq!(oui.reg_count(), 2);
        assert_eq!(oui.records()[0].org, "NETWORK RESEARCH CORPORATION");
        assert_eq!(oui.records()[1].org, "CERN");
        assert!(oui.records()[0].offset < oui.records()[1].offset);
        assert_matches!(
            oui.registration(2),
            Err(RegistryError::Eui(EuiError::Index(_)))
        );
    }

    #[test]
    fn test_parse_forms() {
        let registry = registry();
        assert_eq!(
            Oui::parse("001b77", &registry).unwrap(),
            Oui::lookup(0x001B77, &registry).unwrap()
        );
        for input in ["00-1B", "00-1B-7", "001B7", "00:1B:77", "0G-1B-77", ""] {
            assert_matches!(
                Oui::parse(input, &registry),
                Err(RegistryError::Eui(EuiError::Format(_))),
                "{input}"
            );
        }
    }

    #[test]
    fn test_unregistered_and_out_of_range() {
        let registry = registry();
        assert_matches!(
            Oui::lookup(0xABCDEF, &registry),
            Err(RegistryError::NotRegistered { kind: RecordKind::Oui, .. })
        );
        assert_matches!(
            Oui::lookup(0x100_0000, &registry),
            Err(RegistryError::Eui(EuiError::Value(_)))
        );
    }
}
