//! Footprint geometry for PLCC plug sockets.
//!
//! A plug is soldered onto a PCB in place of a PLCC socket. Its footprint is
//! computed from the datasheet dimensions of the plug:
//!
//! - [`catalog`] - Datasheet values per vendor and pin count
//! - [`pads`] - Pad positions, sizes and drill offsets
//! - [`outline`] - Silkscreen, courtyard and fabrication strokes
//! - [`text`] - Reference, value and user label anchors
//!
//! # Example
//!
//! ```
//! use plcc_gen::plcc::{self, geometry::MountingOptions};
//!
//! let spec = plcc::catalog::lookup(84).unwrap();
//! let geometry = plcc::build(&spec, &MountingOptions::default());
//!
//! assert_eq!(geometry.pads.len(), 84);
//! assert_eq!(geometry.courtyard.len(), 4);
//! ```

pub mod catalog;
pub mod geometry;
pub mod outline;
pub mod pads;
pub mod text;

pub use catalog::{lookup, ComponentSpec, Vendor, SUPPORTED_PIN_COUNTS};
pub use geometry::{FootprintGeometry, Layer, MountingOptions};

use tracing::debug;

use crate::error::FootprintError;

/// Computes the complete geometry of `spec` mounted with `opts`.
///
/// Every call returns a fresh document; neither input is modified.
#[must_use]
pub fn build(spec: &ComponentSpec, opts: &MountingOptions) -> FootprintGeometry {
    debug!(
        name = spec.name,
        pins = spec.pins,
        double_sided = opts.double_sided,
        via_outside = opts.via_outside,
        "Building footprint geometry"
    );

    FootprintGeometry {
        pads: pads::layout(spec, opts),
        front_silkscreen: outline::silkscreen(spec, Layer::FrontSilkscreen),
        back_silkscreen: outline::silkscreen(spec, Layer::BackSilkscreen),
        courtyard: outline::courtyard(spec),
        fabrication: outline::fabrication(),
        text: text::anchors(spec),
    }
}

/// Looks up `pins` in the `vendor` catalog and builds its geometry.
///
/// # Errors
///
/// Returns [`FootprintError::UnsupportedPinCount`] if the catalog has no
/// entry with `pins` pins.
pub fn generate(
    vendor: Vendor,
    pins: u32,
    opts: &MountingOptions,
) -> Result<(ComponentSpec, FootprintGeometry), FootprintError> {
    let spec = vendor.lookup(pins)?;
    let geometry = build(&spec, opts);
    Ok((spec, geometry))
}
