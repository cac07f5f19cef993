//! Individual Address Block bit layout.
//!
//! Two OUI values are reserved by the IEEE for IAB assignments. Inside an
//! EUI-48 under one of them the top 36 bits identify the block and the low
//! 12 bits are free for the registrant.

use crate::error::{EuiError, Result};

/// OUI values reserved for IAB assignments
pub const IAB_OUI_VALUES: [u32; 2] = [0x0050C2, 0x40D855];

/// Bits left to the registrant below an IAB key
pub const IAB_USER_BITS: u32 = 12;

const USER_MASK: u64 = (1 << IAB_USER_BITS) - 1;

/// Whether `oui` is one of the reserved IAB OUI values.
pub fn is_iab_oui(oui: u64) -> bool {
    IAB_OUI_VALUES.iter().any(|&reserved| u64::from(reserved) == oui)
}

/// Split an IAB MAC address into its 36-bit block key and 12 user bits.
///
/// A value that already is a 36-bit block key is returned unchanged with no
/// user bits. With `strict` set, non-zero user bits are rejected.
pub fn split_iab_mac(eui_int: u64, strict: bool) -> Result<(u64, u64)> {
    if is_iab_oui(eui_int >> IAB_USER_BITS) {
        return Ok((eui_int, 0));
    }

    let iab_bits = eui_int >> IAB_USER_BITS;
    let user_bits = eui_int & USER_MASK;

    if !is_iab_oui(iab_bits >> IAB_USER_BITS) {
        return Err(EuiError::value(format!("{eui_int:#x} is not an IAB address")));
    }
    if strict && user_bits != 0 {
        return Err(EuiError::value(format!("{user_bits:#x} is not a strict IAB")));
    }

    Ok((iab_bits, user_bits))
}
