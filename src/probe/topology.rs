//! Display topology enumeration seam
//!
//! The probe algorithm is a nested walk: for each graphics adapter, for each
//! display output attached to it, inspect the output's advertised color
//! space. These traits describe exactly that shape (an indexed adapter
//! source, indexed outputs per adapter, and an optional color-space query)
//! so [`any_output_hdr`] can run unchanged over the DXGI backend and over
//! fake topologies in tests.
//!
//! Handle lifetime follows the iteration structure: an adapter handle lives
//! for one outer iteration, an output handle for one inner iteration, and
//! both are dropped on every exit path including the early return on a
//! match.

use tracing::{debug, trace};

/// Color space identifier advertised by a display output.
///
/// Wraps the platform's color-space enumeration value
/// (`DXGI_COLOR_SPACE_TYPE` on Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpace(pub i32);

impl ColorSpace {
    /// `DXGI_COLOR_SPACE_RGB_FULL_G2084_NONE_P2020` (value 12): ST.2084 PQ
    /// transfer function, Rec.2020 primaries, full-range RGB. The single
    /// color space recognized as HDR.
    pub const HDR10: Self = Self(12);

    /// Whether this is the recognized HDR color space.
    pub fn is_hdr(self) -> bool {
        self == Self::HDR10
    }
}

/// An enumerable collection of graphics adapters.
pub trait Topology {
    /// Adapter handle type, owned for one outer-loop iteration.
    type Adapter: Adapter;

    /// The adapter at `index`, or `None` once enumeration is exhausted.
    fn adapter(&self, index: u32) -> Option<Self::Adapter>;
}

/// One graphics adapter with enumerable display outputs.
pub trait Adapter {
    /// Output handle type, owned for one inner-loop iteration.
    type Output: Output;

    /// The output at `index`, or `None` once enumeration is exhausted.
    fn output(&self, index: u32) -> Option<Self::Output>;
}

/// One display output attached to an adapter.
pub trait Output {
    /// The output's advertised color space, or `None` when the extended
    /// descriptor is unavailable or its fetch fails. `None` is not an error;
    /// older platform versions and some output types lack the descriptor.
    fn color_space(&self) -> Option<ColorSpace>;
}

/// Walk every output of every adapter until one advertises the HDR color
/// space.
///
/// Stops at the first match; otherwise exhausts the enumeration and returns
/// `false`. Terminates for any finite topology because each loop ends at the
/// first index its source declines to produce.
pub fn any_output_hdr<T: Topology>(topology: &T) -> bool {
    for adapter_index in 0u32.. {
        let Some(adapter) = topology.adapter(adapter_index) else {
            break;
        };
        for output_index in 0u32.. {
            let Some(output) = adapter.output(output_index) else {
                break;
            };
            match output.color_space() {
                Some(space) if space.is_hdr() => {
                    debug!(
                        adapter_index,
                        output_index, "output advertises the HDR color space"
                    );
                    return true;
                }
                Some(space) => {
                    trace!(
                        adapter_index,
                        output_index,
                        color_space = space.0,
                        "output is not in an HDR mode"
                    );
                }
                None => {
                    trace!(
                        adapter_index,
                        output_index, "output has no extended descriptor, skipping"
                    );
                }
            }
        }
    }
    false
}
