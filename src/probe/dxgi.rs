//! DXGI display topology backend
//!
//! Implements the enumeration seam over the DXGI factory. The `windows`
//! crate's COM wrappers are reference counted and release their interface on
//! drop, so the seam's one-iteration handle ownership maps directly onto
//! Rust scopes with no manual `Release` calls on any path.

use crate::error::{ProbeError, Result};
use crate::probe::com::ComGuard;
use crate::probe::topology::{Adapter, ColorSpace, Output, Topology};
use tracing::debug;
use windows::Win32::Graphics::Dxgi::{
    CreateDXGIFactory1, DXGI_ERROR_NOT_FOUND, IDXGIAdapter1, IDXGIFactory1, IDXGIOutput,
    IDXGIOutput6,
};
use windows::core::Interface;

/// Display topology backed by the DXGI enumeration factory.
///
/// Field order is load-bearing: `factory` must drop before `_com` so the
/// factory's COM reference is released before `CoUninitialize` runs.
pub struct DxgiTopology {
    factory: IDXGIFactory1,
    _com: ComGuard,
}

impl DxgiTopology {
    /// Enter a COM apartment and create the enumeration factory.
    ///
    /// On factory-creation failure the already-acquired apartment guard
    /// drops, so the apartment is torn down before the error reaches the
    /// caller.
    #[allow(unsafe_code)] // DXGI FFI
    pub fn new() -> Result<Self> {
        let com = ComGuard::new()?;
        let factory: IDXGIFactory1 =
            unsafe { CreateDXGIFactory1() }.map_err(ProbeError::FactoryCreation)?;
        Ok(Self { factory, _com: com })
    }
}

impl Topology for DxgiTopology {
    type Adapter = DxgiAdapter;

    #[allow(unsafe_code)] // DXGI FFI
    fn adapter(&self, index: u32) -> Option<DxgiAdapter> {
        match unsafe { self.factory.EnumAdapters1(index) } {
            Ok(adapter) => Some(DxgiAdapter { adapter }),
            Err(e) if e.code() == DXGI_ERROR_NOT_FOUND => None,
            Err(e) => {
                debug!(index, "adapter enumeration ended early: {e}");
                None
            }
        }
    }
}

/// One DXGI adapter, owned for a single outer-loop iteration.
pub struct DxgiAdapter {
    adapter: IDXGIAdapter1,
}

impl Adapter for DxgiAdapter {
    type Output = DxgiOutput;

    #[allow(unsafe_code)] // DXGI FFI
    fn output(&self, index: u32) -> Option<DxgiOutput> {
        match unsafe { self.adapter.EnumOutputs(index) } {
            Ok(output) => Some(DxgiOutput { output }),
            Err(e) if e.code() == DXGI_ERROR_NOT_FOUND => None,
            Err(e) => {
                debug!(index, "output enumeration ended early: {e}");
                None
            }
        }
    }
}

/// One DXGI output, owned for a single inner-loop iteration.
pub struct DxgiOutput {
    output: IDXGIOutput,
}

impl Output for DxgiOutput {
    #[allow(unsafe_code)] // DXGI FFI
    fn color_space(&self) -> Option<ColorSpace> {
        // IDXGIOutput6 requires Windows 10 1709+; absence is "no descriptor",
        // not an error, and the same goes for a failed descriptor fetch
        let output6: IDXGIOutput6 = self.output.cast().ok()?;
        let desc = unsafe { output6.GetDesc1() }.ok()?;
        Some(ColorSpace(desc.ColorSpace.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_creation() {
        // Factory creation works on headless systems too
        let topology = DxgiTopology::new();
        assert!(topology.is_ok());
    }

    #[test]
    fn test_hdr10_matches_dxgi_constant() {
        use windows::Win32::Graphics::Dxgi::Common::DXGI_COLOR_SPACE_RGB_FULL_G2084_NONE_P2020;
        assert_eq!(
            ColorSpace::HDR10.0,
            DXGI_COLOR_SPACE_RGB_FULL_G2084_NONE_P2020.0
        );
    }
}
