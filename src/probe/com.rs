//! Scoped COM apartment initialization
//!
//! DXGI enumeration runs from a single-threaded COM apartment. [`ComGuard`]
//! scopes that process-level state to one probe call so every exit path,
//! including early error returns, tears it down exactly once.

use crate::error::{ProbeError, Result};
use tracing::trace;
use windows::Win32::System::Com::{COINIT_APARTMENTTHREADED, CoInitializeEx, CoUninitialize};

/// RAII guard for a single-threaded-apartment COM initialization.
///
/// A successful `CoInitializeEx` (including `S_FALSE`, the
/// already-initialized case) must be balanced by exactly one
/// `CoUninitialize`; a failed one must not be. The guard encodes that rule:
/// it only exists after success and uninitializes on drop.
pub struct ComGuard(());

impl ComGuard {
    /// Enter a single-threaded apartment on the calling thread.
    ///
    /// Fails with [`ProbeError::ComInit`] when the thread is already in an
    /// incompatible apartment (`RPC_E_CHANGED_MODE`) or COM cannot start.
    #[allow(unsafe_code)] // COM FFI
    pub fn new() -> Result<Self> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }
            .ok()
            .map_err(ProbeError::ComInit)?;
        trace!("entered single-threaded COM apartment");
        Ok(Self(()))
    }
}

impl Drop for ComGuard {
    #[allow(unsafe_code)] // COM FFI
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
        trace!("left COM apartment");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_acquires_and_releases() {
        let guard = ComGuard::new();
        assert!(guard.is_ok());
    }

    #[test]
    fn test_guard_nests_on_one_thread() {
        // S_FALSE on the inner init still needs a balancing CoUninitialize,
        // which the inner guard's drop provides
        let outer = ComGuard::new().expect("outer apartment init failed");
        {
            let inner = ComGuard::new();
            assert!(inner.is_ok());
        }
        drop(outer);

        // The apartment can be re-entered after a full teardown
        assert!(ComGuard::new().is_ok());
    }
}
