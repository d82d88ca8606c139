//! Error types for the `hdrprobe` crate
//!
//! These errors exist on the internal [`Result`] surface only. The public
//! boolean surfaces ([`crate::probe_hdr_enabled`] and the `IsHDREnabled`
//! export) collapse every variant to `false` before returning.
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use thiserror::Error;

/// Main error type for HDR probe operations
#[derive(Debug, Error)]
pub enum ProbeError {
    /// COM apartment initialization failed
    ///
    /// Includes `RPC_E_CHANGED_MODE` when the calling thread is already in a
    /// multi-threaded apartment.
    #[cfg(windows)]
    #[error("COM initialization failed: {0}")]
    ComInit(#[source] windows::core::Error),

    /// DXGI enumeration factory could not be created
    #[cfg(windows)]
    #[error("Failed to create DXGI factory: {0}")]
    FactoryCreation(#[source] windows::core::Error),

    /// The platform has no display-enumeration API this crate can query
    #[error("HDR probing is not supported on this platform")]
    Unsupported,
}

/// Result type alias for HDR probe operations
pub type Result<T> = std::result::Result<T, ProbeError>;
