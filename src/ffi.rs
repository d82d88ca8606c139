//! C-callable export surface
//!
//! Built as a `cdylib`, the crate exposes one exported symbol for non-Rust
//! hosts. There is no configuration and no state; the symbol is the whole
//! contract.

// The exported name follows the dynamic-library contract, not Rust naming
#![allow(non_snake_case)]

/// C-callable wrapper around [`crate::probe_hdr_enabled`].
///
/// Returns 1 (true) when any connected display output is in an HDR color
/// mode, 0 (false) otherwise, including on every failure path. Safe to call
/// from any thread; each call performs its own COM apartment setup and
/// teardown and shares no state with other calls.
#[unsafe(no_mangle)]
#[allow(unsafe_code)] // unmangled export
pub extern "C" fn IsHDREnabled() -> bool {
    crate::probe::probe_hdr_enabled()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_matches_library_surface() {
        assert_eq!(IsHDREnabled(), crate::probe_hdr_enabled());
    }
}
