//! `hdrprobe` - HDR display mode detection for Windows
//!
//! Answers a single question for a host application: is any connected display
//! currently operating in an HDR color mode? The probe enumerates DXGI
//! adapters and their outputs and checks each output's advertised color space
//! against the HDR10 identifier (ST.2084 PQ transfer function with Rec.2020
//! primaries, full-range RGB).
//!
//! # Usage
//!
//! ```
//! if hdrprobe::probe_hdr_enabled() {
//!     // offer the HDR rendering path
//! }
//! ```
//!
//! The boolean surface never fails: platform errors, missing displays, and
//! missing HDR support all report `false`. Callers that want to distinguish
//! "query failed" from "no HDR output" can use
//! [`try_probe_hdr_enabled`](probe::try_probe_hdr_enabled).
//!
//! Built as a `cdylib`, the crate also exports the C-callable `IsHDREnabled`
//! symbol (see [`ffi`]) for non-Rust hosts.
//!
//! # Requirements
//!
//! - Windows 10 1709+ (build 16299) for `IDXGIOutput6`; earlier systems and
//!   non-Windows platforms report `false`

// Module declarations
pub mod error;
pub mod ffi;
pub mod probe;

// Re-export commonly used types
pub use error::{ProbeError, Result};
pub use probe::{probe_hdr_enabled, try_probe_hdr_enabled};
