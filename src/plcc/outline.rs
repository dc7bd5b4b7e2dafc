//! Silkscreen, courtyard and fabrication outlines.

use crate::plcc::catalog::ComponentSpec;
use crate::plcc::geometry::{Layer, LineSegment};

/// Stroke width of the silkscreen body outline (mm).
pub const SILKSCREEN_WIDTH: f64 = 0.12;

/// Stroke width of the silkscreen pad-row marks (mm).
pub const MARK_WIDTH: f64 = 0.1;

/// Stroke width of the courtyard (mm).
pub const COURTYARD_WIDTH: f64 = 0.05;

/// Stroke width of the fabrication outline (mm).
pub const FABRICATION_WIDTH: f64 = 0.1;

/// Clearance between the body edge and the silkscreen outline (mm).
const SILKSCREEN_MARGIN: f64 = 0.2;

/// Half-width of the gap left in the top silkscreen line around pin 1 (mm).
const PIN1_GAP: f64 = 1.0;

/// Size of the pin-1 chamfer on the silkscreen outline (mm).
const CHAMFER: f64 = 1.0;

/// Body extent (A and C) of the reference part the marks were measured on.
const REFERENCE_BODY: f64 = 36.60;

/// Pin count of the reference part; it gets the marks unscaled.
const REFERENCE_PINS: u32 = 84;

/// Pad-row corner marks as measured on the 84-pin reference part.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CornerMarks {
    inner_x: f64,
    outer_x: f64,
    edge_x: f64,
    top_y: f64,
    top_inner_y: f64,
    top_gap_y: f64,
    bottom_y: f64,
    bottom_gap_y: f64,
}

const REFERENCE_MARKS: CornerMarks = CornerMarks {
    inner_x: 13.675,
    outer_x: 14.175,
    edge_x: 15.325,
    top_y: -14.8,
    top_inner_y: -13.65,
    top_gap_y: -13.15,
    bottom_y: 15.85,
    bottom_gap_y: 14.2,
};

impl CornerMarks {
    /// Returns the marks for `spec`.
    ///
    /// Parts other than the reference get the reference marks scaled by
    /// `A / 36.60` along X and `C / 36.60` along Y instead of marks derived
    /// from their own pad rows. This is an approximation that has not been
    /// checked against fabricated boards.
    fn for_spec(spec: &ComponentSpec) -> Self {
        if spec.pins == REFERENCE_PINS {
            return REFERENCE_MARKS;
        }

        let sx = spec.body.a / REFERENCE_BODY;
        let sy = spec.body.c / REFERENCE_BODY;
        let r = REFERENCE_MARKS;
        Self {
            inner_x: r.inner_x * sx,
            outer_x: r.outer_x * sx,
            edge_x: r.edge_x * sx,
            top_y: r.top_y * sy,
            top_inner_y: r.top_inner_y * sy,
            top_gap_y: r.top_gap_y * sy,
            bottom_y: r.bottom_y * sy,
            bottom_gap_y: r.bottom_gap_y * sy,
        }
    }
}

/// Silkscreen outline on `layer`.
///
/// Six strokes outline the body with a chamfer at the top-right corner and
/// a gap above pin 1, followed by nine thinner marks at the ends of the pad
/// rows (eight corner marks and a pin-1 corner chamfer).
#[must_use]
pub fn silkscreen(spec: &ComponentSpec, layer: Layer) -> Vec<LineSegment> {
    let ox = spec.body.a / 2.0;
    let oy = spec.body.c / 2.0;

    //  x1/y1      x2/y2
    //    +----------+
    //    |          |
    //    +----------+
    //  x4/y4      x3/y3
    let (x1, y1) = (-ox - SILKSCREEN_MARGIN, -oy - SILKSCREEN_MARGIN);
    let (x2, y2) = (ox + SILKSCREEN_MARGIN, -oy - SILKSCREEN_MARGIN);
    let (x3, y3) = (ox + SILKSCREEN_MARGIN, oy + SILKSCREEN_MARGIN);
    let (x4, y4) = (-ox - SILKSCREEN_MARGIN, oy + SILKSCREEN_MARGIN);

    let body = |x1, y1, x2, y2| LineSegment::new(x1, y1, x2, y2, SILKSCREEN_WIDTH, layer);
    let mark = |x1, y1, x2, y2| LineSegment::new(x1, y1, x2, y2, MARK_WIDTH, layer);

    let m = CornerMarks::for_spec(spec);

    vec![
        body(x2, y2 + CHAMFER, x3, y3),
        body(x4, y4, x1, y1),
        body(x3, y3, x4, y4),
        body(x2 - CHAMFER, y2, x2, y2 + CHAMFER),
        body(x1, y1, -PIN1_GAP, y1),
        body(PIN1_GAP, y1, x2 - CHAMFER, y2),
        mark(m.inner_x, m.top_y, m.outer_x, m.top_y),
        mark(m.outer_x, m.top_y, m.edge_x, m.top_inner_y),
        mark(-m.inner_x, m.top_y, -m.edge_x, m.top_y),
        mark(m.edge_x, m.top_inner_y, m.edge_x, m.top_gap_y),
        mark(m.edge_x, m.bottom_y, m.edge_x, m.bottom_gap_y),
        mark(-m.inner_x, m.bottom_y, -m.edge_x, m.bottom_y),
        mark(-m.edge_x, m.bottom_y, -m.edge_x, m.bottom_gap_y),
        mark(-m.edge_x, m.top_y, -m.edge_x, m.top_gap_y),
        mark(m.inner_x, m.bottom_y, m.edge_x, m.bottom_y),
    ]
}

/// Courtyard rectangle on the body outline `(±A/2, ±C/2)`.
#[must_use]
pub fn courtyard(spec: &ComponentSpec) -> Vec<LineSegment> {
    let ox = spec.body.a / 2.0;
    let oy = spec.body.c / 2.0;
    let side = |x1, y1, x2, y2| {
        LineSegment::new(x1, y1, x2, y2, COURTYARD_WIDTH, Layer::FrontCourtyard)
    };

    vec![
        side(-ox, -oy, ox, -oy),
        side(-ox, oy, -ox, -oy),
        side(ox, oy, -ox, oy),
        side(ox, -oy, ox, oy),
    ]
}

const FABRICATION: [(f64, f64, f64, f64); 16] = [
    (-18.0, -17.475, 17.0, -17.475),
    (18.0, 18.525, -18.0, 18.525),
    (18.0, -16.475, 18.0, 18.525),
    (-18.0, 18.525, -18.0, -17.475),
    (17.0, -17.475, 18.0, -16.475),
    (-16.73, -16.205, 16.73, -16.205),
    (-16.73, 17.255, -16.73, -16.205),
    (15.175, 15.7, -15.175, 15.7),
    (-15.175, 15.7, -15.175, -14.65),
    (-15.175, -14.65, 14.175, -14.65),
    (15.175, -13.65, 15.175, 15.7),
    (16.73, 17.255, -16.73, 17.255),
    (0.0, -16.475, -0.5, -17.475),
    (0.5, -17.475, 0.0, -16.475),
    (16.73, -16.205, 16.73, 17.255),
    (14.175, -14.65, 15.175, -13.65),
];

// TODO: derive the outline from the body dimensions once a real 3D model of the plugs exists.
/// Fabrication outline of the reference plug body.
///
/// The outline is the same for every part.
#[must_use]
pub fn fabrication() -> Vec<LineSegment> {
    FABRICATION
        .iter()
        .map(|&(x1, y1, x2, y2)| {
            LineSegment::new(x1, y1, x2, y2, FABRICATION_WIDTH, Layer::FrontFabrication)
        })
        .collect()
}
