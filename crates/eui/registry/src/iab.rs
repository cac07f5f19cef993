//! Individual address blocks.

use std::fmt;
use std::hash::{Hash, Hasher};

use eui_primitives::{EuiError, split_iab_mac};
use serde::Serialize;

use crate::error::{RegistryError, Result};
use crate::record::Record;
use crate::registry::{RecordKind, Registry};

/// A registered 36-bit IAB and its registration.
#[derive(Debug, Clone, Serialize)]
pub struct Iab {
    value: u64,
    record: Record,
}

impl Iab {
    /// Look up an IAB by its 36-bit key or by any EUI-48 inside the block.
    ///
    /// With `strict` set, an address with non-zero low 12 bits is rejected.
    pub fn lookup(value: u64, strict: bool, registry: &Registry) -> Result<Self> {
        let (key, _) = split_iab_mac(value, strict)?;

        let kind = RecordKind::Iab;
        let (span, text) = registry
            .table(kind)
            .read(kind, key, Some(1))?
            .into_iter()
            .next()
            .ok_or_else(|| RegistryError::not_registered(kind, key))?;
        let record = Record::parse(&text, key, kind.render(key), span)?;

        Ok(Self { value: key, record })
    }

    /// Parse a dash-separated hex address such as `00-50-C2-AB-C0-00` and
    /// look it up.
    pub fn parse(s: &str, strict: bool, registry: &Registry) -> Result<Self> {
        let digits: String = s.chars().filter(|&c| c != '-').collect();
        if digits.is_empty() || digits.len() > 12 || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(EuiError::format(format!("unexpected IAB format: {s:?}")).into());
        }
        let value = u64::from_str_radix(&digits, 16)
            .map_err(|e| EuiError::format(format!("unexpected IAB format: {s:?}: {e}")))?;
        Self::lookup(value, strict, registry)
    }

    /// The 36-bit key.
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// The registration for this block.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Alias of [`record`](Self::record).
    pub fn registration(&self) -> &Record {
        &self.record
    }
}

impl PartialEq for Iab {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Iab {}

impl Hash for Iab {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Iab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&RecordKind::Iab.render(self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::registry;
    use assert_matches::assert_matches;

    #[test]
    fn test_lookup_by_key_and_address() {
        let registry = registry();
        let by_key = Iab::lookup(0x0050_C2AB_C, true, &registry).unwrap();
        let by_addr = Iab::lookup(0x0050_C2AB_C123, false, &registry).unwrap();
        assert_eq!(by_key, by_addr);
        assert_eq!(by_key.value(), 0x0050_C2AB_C);
        assert_eq!(by_key.to_string(), "00-50-C2-AB-C0-00");

        let record = by_key.registration();
        assert_eq!(record.org, "ACME Widgets");
        assert_eq!(record.identifier, "00-50-C2-AB-C0-00");
        assert_eq!(record.address, vec!["1 Main Street", "Springfield", "US"]);
    }

    #[test]
    fn test_strict_rejects_user_bits() {
        assert_matches!(
            Iab::lookup(0x0050_C2AB_C123, true, &registry()),
            Err(RegistryError::Eui(EuiError::Value(_)))
        );
    }

    #[test]
    fn test_parse() {
        let registry = registry();
        let iab = Iab::parse("00-50-C2-AB-C0-00", true, &registry).unwrap();
        assert_eq!(iab.value(), 0x0050_C2AB_C);
        assert_matches!(
            Iab::parse("00-50-C2-ZZ-C0-00", false, &registry),
            Err(RegistryError::Eui(EuiError::Format(_)))
        );
    }

    #[test]
    fn test_not_iab_or_not_registered() {
        let registry = registry();
        assert_matches!(
            Iab::lookup(0x001B_7749_54FD, false, &registry),
            Err(RegistryError::Eui(EuiError::Value(_)))
        );
        assert_matches!(
            Iab::lookup(0x40D8_5500_0000, false, &registry),
            Err(RegistryError::NotRegistered { kind: RecordKind::Iab, .. })
        );
    }
}
