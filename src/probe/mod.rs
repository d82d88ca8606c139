//! HDR probe module
//!
//! This module answers whether any connected display output is currently
//! configured for the HDR10 color space, using the DXGI enumeration API on
//! Windows.
//!
//! # Architecture
//!
//! - [`topology`]: the enumeration seam: traits for an indexed adapter
//!   source, indexed outputs per adapter, and a per-output color-space query,
//!   plus the nested-loop scan over them
//! - `dxgi`: Windows backend implementing the seam over
//!   `IDXGIFactory1` / `IDXGIAdapter1` / `IDXGIOutput` / `IDXGIOutput6`
//! - `com`: RAII guard scoping the single-threaded-apartment COM
//!   initialization to the probe call
//!
//! The seam exists so the scan can be exercised against fake topologies in
//! tests; the DXGI backend is the only production implementation.
//!
//! # Example Usage
//!
//! ```
//! // Never fails; platform errors report false
//! let enabled = hdrprobe::probe::probe_hdr_enabled();
//!
//! // Distinguishes query failure from "no HDR output"
//! match hdrprobe::probe::try_probe_hdr_enabled() {
//!     Ok(enabled) => println!("HDR enabled: {enabled}"),
//!     Err(e) => println!("probe unavailable: {e}"),
//! }
//! ```

pub mod topology;

#[cfg(windows)]
mod com;
#[cfg(windows)]
mod dxgi;

#[cfg(windows)]
pub use dxgi::DxgiTopology;

use crate::error::Result;
use tracing::debug;

/// Check whether any connected display output is in an HDR color mode.
///
/// This is the silent surface: COM or DXGI initialization failures, an empty
/// enumeration, and outputs without the extended descriptor all produce
/// `false`. The call is synchronous and owns all of its platform handles, so
/// concurrent calls from multiple threads are safe.
pub fn probe_hdr_enabled() -> bool {
    match try_probe_hdr_enabled() {
        Ok(enabled) => enabled,
        Err(e) => {
            debug!("HDR probe unavailable, reporting no HDR output: {e}");
            false
        }
    }
}

/// Check whether any connected display output is in an HDR color mode,
/// surfacing initialization failures.
///
/// Returns `Ok(false)` both when no output is in an HDR mode and when no
/// outputs are enumerable at all; only COM apartment initialization and DXGI
/// factory creation failures produce an error.
#[cfg(windows)]
pub fn try_probe_hdr_enabled() -> Result<bool> {
    let topology = DxgiTopology::new()?;
    Ok(topology::any_output_hdr(&topology))
}

/// Check whether any connected display output is in an HDR color mode,
/// surfacing initialization failures.
///
/// Always `Err(ProbeError::Unsupported)` on non-Windows platforms.
#[cfg(not(windows))]
pub fn try_probe_hdr_enabled() -> Result<bool> {
    Err(crate::error::ProbeError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_never_panics() {
        let _ = probe_hdr_enabled();
    }

    #[test]
    fn test_probe_idempotent() {
        // Process display state is assumed unchanged between the two calls
        assert_eq!(probe_hdr_enabled(), probe_hdr_enabled());
    }

    #[test]
    fn test_boolean_surface_matches_fallible_surface() {
        let expected = try_probe_hdr_enabled().unwrap_or(false);
        assert_eq!(probe_hdr_enabled(), expected);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_unsupported_platform_reports_false() {
        assert!(!probe_hdr_enabled());
        assert!(try_probe_hdr_enabled().is_err());
    }
}
