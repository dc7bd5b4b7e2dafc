//! Datasheet catalog of the supported PLCC plugs.
//!
//! Body dimensions follow the datasheet naming: `A`/`B` are the outer and
//! inner extents along X, `C`/`D` the outer and inner extents along Y.
//!
//! ```text
//!            1 ->
//!     +------*------\
//!     |             |
//!     |             |
//!     |             |
//!     +-------------+
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FootprintError;

/// Pin counts available in every vendor catalog.
pub const SUPPORTED_PIN_COUNTS: [u32; 7] = [20, 28, 32, 44, 52, 68, 84];

/// Body dimensions from the datasheet (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyDimensions {
    /// Outer extent along X.
    pub a: f64,
    /// Inner extent along X.
    pub b: f64,
    /// Outer extent along Y.
    pub c: f64,
    /// Inner extent along Y.
    pub d: f64,
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentSpec {
    /// Part name, used as the footprint name.
    pub name: &'static str,
    /// Total pin count.
    pub pins: u32,
    /// Pins along each X-facing edge.
    pub pins_x: u32,
    /// Pins along each Y-facing edge.
    pub pins_y: u32,
    /// Pin pitch (mm).
    pub pitch: f64,
    /// Body dimensions.
    pub body: BodyDimensions,
    /// Pad width across the pin (mm).
    pub pad_width: f64,
}

impl ComponentSpec {
    const fn new(
        name: &'static str,
        pins: u32,
        pins_x: u32,
        pins_y: u32,
        (a, b, c, d): (f64, f64, f64, f64),
    ) -> Self {
        Self {
            name,
            pins,
            pins_x,
            pins_y,
            pitch: 1.27,
            body: BodyDimensions { a, b, c, d },
            pad_width: 0.9,
        }
    }

    /// Pad length along the pin, `(C - D) / 2`.
    #[must_use]
    pub fn pad_length(&self) -> f64 {
        (self.body.c - self.body.d) / 2.0
    }
}

/// Plug manufacturer whose datasheet values are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    /// Adapt-Plus APW932x plugs.
    #[default]
    #[value(name = "adaptplus")]
    AdaptPlus,
    /// Winslow W932x plugs.
    Winslow,
}

const ADAPTPLUS: [ComponentSpec; 7] = [
    ComponentSpec::new("APW9322", 20, 5, 5, (15.00, 8.70, 15.00, 8.70)),
    ComponentSpec::new("APW9323", 28, 7, 7, (17.40, 11.15, 17.40, 11.15)),
    ComponentSpec::new("APW9324", 32, 7, 9, (17.40, 11.15, 19.90, 13.60)),
    ComponentSpec::new("APW9325", 44, 11, 11, (22.50, 16.40, 22.50, 16.40)),
    ComponentSpec::new("APW9326", 52, 13, 13, (25.10, 18.90, 25.10, 18.90)),
    ComponentSpec::new("APW9327", 68, 17, 17, (30.10, 23.90, 30.10, 23.90)),
    ComponentSpec::new("APW9328", 84, 21, 21, (36.60, 27.50, 36.60, 27.50)),
];

const WINSLOW: [ComponentSpec; 7] = [
    ComponentSpec::new("W9322", 20, 5, 5, (15.00, 8.70, 15.00, 8.70)),
    ComponentSpec::new("W9323", 28, 7, 7, (17.40, 11.15, 17.40, 11.15)),
    ComponentSpec::new("W9324", 32, 7, 9, (17.40, 11.02, 19.90, 13.60)),
    ComponentSpec::new("W9325", 44, 11, 11, (22.50, 16.40, 22.50, 16.40)),
    ComponentSpec::new("W9326", 52, 13, 13, (25.10, 18.90, 25.10, 18.90)),
    ComponentSpec::new("W9327", 68, 17, 17, (30.10, 23.90, 30.10, 23.90)),
    ComponentSpec::new("W9328", 84, 21, 21, (35.20, 28.90, 35.20, 28.90)),
];

impl Vendor {
    /// Returns every catalog entry of this vendor.
    #[must_use]
    pub const fn catalog(self) -> &'static [ComponentSpec] {
        match self {
            Self::AdaptPlus => &ADAPTPLUS,
            Self::Winslow => &WINSLOW,
        }
    }

    /// Looks up the entry with the given pin count.
    ///
    /// # Errors
    ///
    /// Returns [`FootprintError::UnsupportedPinCount`] if no entry has `pins` pins.
    pub fn lookup(self, pins: u32) -> Result<ComponentSpec, FootprintError> {
        self.catalog()
            .iter()
            .find(|spec| spec.pins == pins)
            .copied()
            .ok_or_else(|| FootprintError::UnsupportedPinCount {
                pins,
                supported: supported_list(),
            })
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdaptPlus => write!(f, "adaptplus"),
            Self::Winslow => write!(f, "winslow"),
        }
    }
}

/// Looks up an Adapt-Plus plug by pin count.
///
/// # Errors
///
/// Returns [`FootprintError::UnsupportedPinCount`] if `pins` is not in
/// [`SUPPORTED_PIN_COUNTS`].
pub fn lookup(pins: u32) -> Result<ComponentSpec, FootprintError> {
    Vendor::AdaptPlus.lookup(pins)
}

fn supported_list() -> String {
    SUPPORTED_PIN_COUNTS
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_count_resolves() {
        for vendor in [Vendor::AdaptPlus, Vendor::Winslow] {
            for pins in SUPPORTED_PIN_COUNTS {
                let spec = vendor.lookup(pins).unwrap();
                assert_eq!(spec.pins, pins);
            }
        }
    }

    #[test]
    fn pin_count_matches_grid() {
        for vendor in [Vendor::AdaptPlus, Vendor::Winslow] {
            for spec in vendor.catalog() {
                assert_eq!(spec.pins, 2 * spec.pins_x + 2 * spec.pins_y, "{}", spec.name);
                assert_eq!(spec.pins_x % 2, 1, "{}", spec.name);
                assert_eq!(spec.pins_y % 2, 1, "{}", spec.name);
            }
        }
    }

    #[test]
    fn lookup_84() {
        let spec = lookup(84).unwrap();
        assert_eq!(spec.name, "APW9328");
        assert!((spec.body.a - 36.60).abs() < f64::EPSILON);
        assert!((spec.pad_length() - 4.55).abs() < 1e-9);
    }

    #[test]
    fn winslow_names() {
        assert_eq!(Vendor::Winslow.lookup(32).unwrap().name, "W9324");
        assert!((Vendor::Winslow.lookup(84).unwrap().body.a - 35.20).abs() < f64::EPSILON);
    }

    #[test]
    fn unsupported_pin_count() {
        let err = lookup(99).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("99"));
        assert!(msg.contains("20, 28, 32, 44, 52, 68, 84"));
    }

    #[test]
    fn vendor_display() {
        assert_eq!(Vendor::AdaptPlus.to_string(), "adaptplus");
        assert_eq!(Vendor::Winslow.to_string(), "winslow");
    }
}
