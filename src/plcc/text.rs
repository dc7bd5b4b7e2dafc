//! Text annotation placement.

use crate::plcc::catalog::ComponentSpec;
use crate::plcc::geometry::{Point, TextAnchors};

/// Font height of every annotation (mm).
pub const FONT_SIZE: f64 = 1.0;

/// Places the reference above the body, the value below it and the user
/// label near the centre.
#[must_use]
pub fn anchors(spec: &ComponentSpec) -> TextAnchors {
    let offset = spec.body.a / 2.0 + FONT_SIZE;

    TextAnchors {
        reference: Point::new(0.0, -offset),
        value: Point::new(0.0, offset + 0.5),
        user: Point::new(0.0, 0.525),
    }
}
