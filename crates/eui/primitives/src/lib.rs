//! IEEE EUI-48 / EUI-64 address values.
//!
//! This crate models hardware addresses as a single integer tagged with its
//! version, together with the algebra built on top of it: formatting
//! dialects, word access, EUI-64 and IPv6 interface derivation, the IAB bit
//! split, contiguous [`EuiRange`]s, textual [`EuiPrefix`]es and mutable
//! [`EuiSet`]s.
//!
//! ```
//! use eui_primitives::{Eui, EuiPrefix, MAC_UNIX_EXPANDED};
//!
//! let eui: Eui = "00-1B-77-49-54-FD".parse().unwrap();
//! assert_eq!(eui.format(&MAC_UNIX_EXPANDED).unwrap(), "00:1b:77:49:54:fd");
//! assert_eq!(eui.eui64().to_string(), "00-1B-77-FF-FE-49-54-FD");
//!
//! let prefix: EuiPrefix = "00:1B:77".parse().unwrap();
//! assert!(prefix.contains(&eui));
//! ```
//!
//! Registry lookups of OUI and IAB records live in a separate crate; nothing
//! here performs I/O.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod dialect;
pub mod error;
pub mod eui;
pub mod iab;
pub mod prefix;
pub mod range;
pub mod set;
pub mod slice;
pub mod version;

#[cfg(feature = "serde")]
mod serde_impl;

pub use dialect::{
    Dialect, EUI64_BARE, EUI64_BASE, EUI64_CISCO, EUI64_UNIX, EUI64_UNIX_EXPANDED, MAC_BARE,
    MAC_CISCO, MAC_EUI48, MAC_PGSQL, MAC_UNIX, MAC_UNIX_EXPANDED, WordFormat,
};
pub use error::{EuiError, Result};
pub use eui::{Eui, IntoEui};
pub use iab::{IAB_OUI_VALUES, IAB_USER_BITS, is_iab_oui, split_iab_mac};
pub use prefix::EuiPrefix;
pub use range::{EuiIter, EuiRange};
pub use set::EuiSet;
pub use slice::Slice;
pub use version::{Strategy, Version};
