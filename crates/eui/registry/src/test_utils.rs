//! In-memory registry used by the unit tests.

use crate::index::{RegistryIndex, Span};
use crate::registry::{Registry, RegistryTable};
use crate::source::MemorySource;

pub(crate) const OUI_RECORDS: &[(u64, &str)] = &[
    (
        0x001B77,
        "00-1B-77   (hex)\t\tIntel Corporate\n\
         001B77     (base 16)\t\tIntel Corporate\n\
         \t\t\t\tLot 8, Jalan Hi-Tech 2/3\n\
         \t\t\t\tKulim  Kedah  09000\n\
         \t\t\t\tMY\n\n",
    ),
    (
        0x0050C2,
        "00-50-C2   (hex)\t\tIEEE Registration Authority\n\
         0050C2     (base 16)\t\tIEEE Registration Authority\n\
         \t\t\t\t445 Hoes Lane\n\
         \t\t\t\tPiscataway  NJ  08554\n\
         \t\t\t\tUS\n\n",
    ),
    (
        0x080030,
        "08-00-30   (hex)\t\tNETWORK RESEARCH CORPORATION\n\
         080030     (base 16)\t\tNETWORK RESEARCH CORPORATION\n\
         \t\t\t\t2380 N. ROSE AVENUE\n\
         \t\t\t\tOXNARD  CA  93010\n\
         \t\t\t\tUS\n\n",
    ),
    (
        0x080030,
        "08-00-30   (hex)\t\tCERN\n\
         080030     (base 16)\t\tCERN\n\
         \t\t\t\tCH-1211\n\
         \t\t\t\tGENEVE  SUISSE/SWITZ  023\n\
         \t\t\t\tCH\n\n",
    ),
];

pub(crate) const IAB_RECORDS: &[(u64, &str)] = &[(
    0x0050_C2AB_C,
    "00-50-C2   (hex)\t\tACME Widgets\n\
     ABC000-ABCFFF     (base 16)\t\tACME Widgets\n\
     \t\t\t\t1 Main Street\n\
     \t\t\t\tSpringfield\n\
     \t\t\t\tUS\n\n",
)];

/// Concatenate `records` into one text and index every record's span.
pub(crate) fn table(records: &[(u64, &str)]) -> RegistryTable {
    let mut text = String::new();
    let mut index = RegistryIndex::new();
    for &(key, record) in records {
        index.insert(key, Span::new(text.len() as u64, record.len() as u64));
        text.push_str(record);
    }
    RegistryTable::new(index, MemorySource::new(text))
}

pub(crate) fn registry() -> Registry {
    Registry::new(table(OUI_RECORDS), table(IAB_RECORDS))
}
