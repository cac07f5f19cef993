//! Serde support for the value types.
//!
//! Addresses and prefixes travel as strings, ranges as `{ start, end }` and
//! sets as ascending sequences.

use std::fmt;

use serde::de::{self, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::eui::Eui;
use crate::prefix::EuiPrefix;
use crate::range::EuiRange;
use crate::set::EuiSet;

impl Serialize for Eui {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let strategy = self.version().strategy();
        serializer.serialize_str(&strategy.format(self.value(), &strategy.default_dialect))
    }
}

impl<'de> Deserialize<'de> for Eui {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EuiVisitor;

        impl Visitor<'_> for EuiVisitor {
            type Value = Eui;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an EUI-48 or EUI-64 address")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Eui::new(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(EuiVisitor)
    }
}

impl Serialize for EuiPrefix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EuiPrefix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
struct RangeRepr {
    start: Eui,
    end: Eui,
}

impl Serialize for EuiRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RangeRepr {
            start: self.start(),
            end: self.end(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EuiRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RangeRepr { start, end } = RangeRepr::deserialize(deserializer)?;
        Self::new(start, end).map_err(de::Error::custom)
    }
}

impl Serialize for EuiSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for eui in self {
            seq.serialize_element(&eui)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for EuiSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Vec::<Eui>::deserialize(deserializer)?.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::MAC_CISCO;
    use crate::version::Version;

    #[test]
    fn test_eui_uses_default_dialect() {
        let eui: Eui = "00-1B-77-49-54-FD".parse().unwrap();
        let cisco = eui.with_dialect(MAC_CISCO).unwrap();
        assert_eq!(serde_json::to_string(&cisco).unwrap(), r#""00-1B-77-49-54-FD""#);
    }

    #[test]
    fn test_eui_version_survives() {
        let small64 = Eui::with_version(1, Version::Eui64).unwrap();
        let json = serde_json::to_string(&small64).unwrap();
        assert_eq!(json, r#""00-00-00-00-00-00-00-01""#);
        assert_eq!(serde_json::from_str::<Eui>(&json).unwrap(), small64);
        assert_eq!(serde_json::from_str::<Eui>("16").unwrap(), Eui::new(16));
        assert!(serde_json::from_str::<Eui>(r#""zz""#).is_err());
    }

    #[test]
    fn test_range_validated() {
        let r = EuiRange::new(1u64, 5u64).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"start":"00-00-00-00-00-01","end":"00-00-00-00-00-05"}"#
        );
        assert_eq!(serde_json::from_str::<EuiRange>(&json).unwrap(), r);

        let reversed = r#"{"start":"00-00-00-00-00-05","end":"00-00-00-00-00-01"}"#;
        assert!(serde_json::from_str::<EuiRange>(reversed).is_err());
    }

    #[test]
    fn test_prefix_and_set() {
        let p: EuiPrefix = "aa-bb-c".parse().unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), r#""AA-BB-C""#);
        assert_eq!(serde_json::from_str::<EuiPrefix>(r#""AA-BB-C""#).unwrap(), p);

        let s: EuiSet = [3u64, 1, 2].into_iter().map(Eui::new).collect();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(
            json,
            r#"["00-00-00-00-00-01","00-00-00-00-00-02","00-00-00-00-00-03"]"#
        );
        assert_eq!(serde_json::from_str::<EuiSet>(&json).unwrap(), s);
    }
}
