//! plcc-gen: KiCad footprint generator for PLCC plug sockets
//!
//! Generates `.kicad_mod` footprints for the APW932x family of surface-mount
//! PLCC plugs, parameterised by pin count. A plug is soldered to the board in
//! place of a PLCC socket, either with pure SMD pads or with through-hole
//! pads whose vias are biased towards or away from the package body.
//!
//! # Architecture
//!
//! Generation is a pure function of the pin count and the mounting options:
//!
//! - **Catalog lookup**: datasheet dimensions for the requested pin count
//! - **Geometry**: pads, outlines and text anchors in one [`plcc::FootprintGeometry`]
//! - **Output**: the geometry rendered as a KiCad footprint or as JSON
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types
//! - [`plcc`] - Catalog and geometry engine
//! - [`kicad`] - KiCad footprint writer
//! - [`export`] - JSON export
//! - [`output`] - Output destination handling

pub mod config;
pub mod error;
pub mod export;
pub mod kicad;
pub mod output;
pub mod plcc;
