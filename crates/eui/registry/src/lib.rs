//! IEEE OUI and IAB registry lookups.
//!
//! A [`Registry`] pairs an offset index with the registry text it points
//! into, one table per record kind. Lookups open their [`RecordSource`] for
//! the duration of a single read, parse the spans they need and release the
//! source again; nothing is cached between lookups.
//!
//! ```no_run
//! use eui_primitives::Eui;
//! use eui_registry::{EuiRegistryExt, Registry, RegistryConfig};
//!
//! # fn main() -> eui_registry::Result<()> {
//! let registry = Registry::from_config(&RegistryConfig::load(None)?)?;
//! let eui: Eui = "00-1B-77-49-54-FD".parse()?;
//! println!("{}", eui.oui(&registry)?.registration(0)?.org);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod ext;
pub mod iab;
pub mod index;
pub mod oui;
pub mod record;
pub mod registry;
pub mod source;

#[cfg(test)]
mod test_utils;

pub use config::{RegistryConfig, TableConfig};
pub use error::{RegistryError, Result};
pub use ext::{EuiInfo, EuiRegistryExt};
pub use iab::Iab;
pub use index::{RegistryIndex, Span};
pub use oui::Oui;
pub use record::Record;
pub use registry::{RecordKind, Registry, RegistryTable};
pub use source::{FileSource, MemorySource, ReadSeek, RecordSource};
