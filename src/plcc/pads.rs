//! Pad layout for PLCC plugs.
//!
//! Pins are numbered the way a PLCC package is: pin 1 sits at the centre of
//! the top edge and numbering runs clockwise (as seen from the top), so the
//! top row is split into a right half that opens the sequence and a left
//! half that closes it. For 84 pins:
//!
//! ```text
//!   75 .. 84  1 .. 11   top
//!   12 .. 32            right
//!   33 .. 53            bottom
//!   54 .. 74            left
//! ```

use tracing::trace;

use crate::plcc::catalog::ComponentSpec;
use crate::plcc::geometry::{DrillSpec, Layer, MountingOptions, Pad, PadKind, Point, Size};

/// Drill diameter of through-hole pads (mm).
pub const DRILL_DIAMETER: f64 = 0.3;

/// One straight run of pins along a package edge.
#[derive(Debug, Clone, Copy)]
struct EdgeRun {
    /// Number of pads in the run.
    count: u32,
    /// Nominal centre of the first pad.
    start: Point,
    /// Per-pin step.
    step: Point,
    /// Pad size, identical for every pad in the run.
    size: Size,
}

/// Computes every pad of `spec`, in pin-number order.
///
/// The returned vector always holds `spec.pins` pads numbered `1..=spec.pins`.
#[must_use]
pub fn layout(spec: &ComponentSpec, opts: &MountingOptions) -> Vec<Pad> {
    let mut pads = Vec::with_capacity(spec.pins as usize);
    let mut number = 1;

    for run in edge_runs(spec) {
        let mut nominal = run.start;
        for _ in 0..run.count {
            pads.push(place_pad(number, nominal, run.size, opts));
            number += 1;
            nominal.x += run.step.x;
            nominal.y += run.step.y;
        }
    }

    trace!(pins = spec.pins, pads = pads.len(), "pad layout complete");
    pads
}

/// Splits the pins into the five runs walked around the package.
fn edge_runs(spec: &ComponentSpec) -> [EdgeRun; 5] {
    let pitch = spec.pitch;
    let a = spec.body.a;
    let c = spec.body.c;
    let pad_length = spec.pad_length();

    let pins_width = f64::from(spec.pins_x) * pitch;
    let pins_height = f64::from(spec.pins_y) * pitch;

    // Horizontal edges carry tall pads, vertical edges wide ones.
    let horizontal = Size::new(spec.pad_width, pad_length);
    let vertical = Size::new(pad_length, spec.pad_width);

    let top_y = -(c - pad_length) / 2.0;
    let right_x = (a - pad_length) / 2.0;
    let bottom_y = (c - pad_length) / 2.0;
    let left_x = -(a - pad_length) / 2.0;

    let top_right = spec.pins_x / 2 + 1;
    let right = spec.pins_y;
    let bottom = spec.pins_x;
    let left = spec.pins_y;
    let top_left = spec.pins - top_right - right - bottom - left;

    [
        EdgeRun {
            count: top_right,
            start: Point::new(0.0, top_y),
            step: Point::new(pitch, 0.0),
            size: horizontal,
        },
        EdgeRun {
            count: right,
            start: Point::new(right_x, -(pins_height - pitch) / 2.0),
            step: Point::new(0.0, pitch),
            size: vertical,
        },
        EdgeRun {
            count: bottom,
            start: Point::new((pins_width - pitch) / 2.0, bottom_y),
            step: Point::new(-pitch, 0.0),
            size: horizontal,
        },
        EdgeRun {
            count: left,
            start: Point::new(left_x, (pins_height - pitch) / 2.0),
            step: Point::new(0.0, -pitch),
            size: vertical,
        },
        EdgeRun {
            count: top_left,
            start: Point::new(-(pins_width - pitch) / 2.0, top_y),
            step: Point::new(pitch, 0.0),
            size: horizontal,
        },
    ]
}

/// Builds one pad at its nominal pin position.
fn place_pad(number: u32, nominal: Point, size: Size, opts: &MountingOptions) -> Pad {
    if !opts.double_sided {
        return Pad {
            number,
            position: nominal,
            size,
            kind: PadKind::SurfaceMount,
            drill: None,
            layers: Layer::SMD_PAD.to_vec(),
        };
    }

    let offset = drill_offset(nominal, size, opts.via_outside);
    Pad {
        number,
        position: Point::new(nominal.x - offset.x, nominal.y - offset.y),
        size,
        kind: PadKind::PlatedThroughHole,
        drill: Some(DrillSpec {
            diameter: DRILL_DIAMETER,
            offset,
        }),
        layers: Layer::THROUGH_HOLE_PAD.to_vec(),
    }
}

/// Drill offset along the long axis of the pad, a quarter of its length.
///
/// With `via_outside` the offset points towards the package centre; the pad
/// is drawn shifted the opposite way so the hole stays on the pin.
#[must_use]
pub fn drill_offset(nominal: Point, size: Size, via_outside: bool) -> Point {
    let offset = if size.width > size.height {
        let ox = if nominal.x < 0.0 {
            size.width / 4.0
        } else {
            -(size.width / 4.0)
        };
        Point::new(ox, 0.0)
    } else {
        let oy = if nominal.y < 0.0 {
            size.height / 4.0
        } else {
            -(size.height / 4.0)
        };
        Point::new(0.0, oy)
    };

    if via_outside {
        offset
    } else {
        Point::new(-offset.x, -offset.y)
    }
}
