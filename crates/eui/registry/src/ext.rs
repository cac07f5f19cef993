//! Registry lookups on [`Eui`] values.

use eui_primitives::Eui;
use serde::Serialize;

use crate::error::Result;
use crate::iab::Iab;
use crate::oui::Oui;
use crate::record::Record;
use crate::registry::Registry;

/// Registration details of an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EuiInfo {
    /// First registration of the address's OUI
    pub oui: Record,
    /// Registration of its IAB, for addresses inside an IAB block
    pub iab: Option<Record>,
}

/// Registry lookups derived from an address's top bits.
pub trait EuiRegistryExt {
    /// The OUI formed by the top 24 bits.
    fn oui(&self, registry: &Registry) -> Result<Oui>;

    /// The IAB formed by the top 36 bits, if the OUI is reserved for IABs.
    fn iab(&self, registry: &Registry) -> Result<Option<Iab>>;

    /// OUI and IAB registration details.
    fn info(&self, registry: &Registry) -> Result<EuiInfo>;
}

impl EuiRegistryExt for Eui {
    fn oui(&self, registry: &Registry) -> Result<Oui> {
        Oui::lookup(self.oui_value(), registry)
    }

    fn iab(&self, registry: &Registry) -> Result<Option<Iab>> {
        self.iab_value()
            .map(|key| Iab::lookup(key, false, registry))
            .transpose()
    }

    fn info(&self, registry: &Registry) -> Result<EuiInfo> {
        let oui = self.oui(registry)?.registration(0)?.clone();
        let iab = self.iab(registry)?.map(|iab| iab.record().clone());
        Ok(EuiInfo { oui, iab })
    }
}
