//! Geometry document produced for one footprint.
//!
//! All coordinates are in millimetres, in KiCad footprint space (origin at
//! the package centre, Y growing downwards).

use serde::Serialize;
use uuid::Uuid;

/// A 2D point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    /// X coordinate (mm).
    pub x: f64,
    /// Y coordinate (mm).
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangular pad size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    /// Extent along X (mm).
    pub width: f64,
    /// Extent along Y (mm).
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the pad area in mm².
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// KiCad drawing and copper layers used by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Layer {
    /// Front copper.
    #[serde(rename = "F.Cu")]
    FrontCopper,
    /// All copper layers (through-hole pads).
    #[serde(rename = "*.Cu")]
    AllCopper,
    /// Front solder paste.
    #[serde(rename = "F.Paste")]
    FrontPaste,
    /// Front solder mask.
    #[serde(rename = "F.Mask")]
    FrontMask,
    /// Solder mask on both sides.
    #[serde(rename = "*.Mask")]
    AllMask,
    /// Front silkscreen.
    #[serde(rename = "F.SilkS")]
    FrontSilkscreen,
    /// Back silkscreen.
    #[serde(rename = "B.SilkS")]
    BackSilkscreen,
    /// Front courtyard.
    #[serde(rename = "F.CrtYd")]
    FrontCourtyard,
    /// Front fabrication.
    #[serde(rename = "F.Fab")]
    FrontFabrication,
}

impl Layer {
    /// Layer set of a surface-mount pad.
    pub const SMD_PAD: [Self; 3] = [Self::FrontCopper, Self::FrontPaste, Self::FrontMask];

    /// Layer set of a plated through-hole pad.
    pub const THROUGH_HOLE_PAD: [Self; 2] = [Self::AllCopper, Self::AllMask];

    /// Returns the KiCad layer name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FrontCopper => "F.Cu",
            Self::AllCopper => "*.Cu",
            Self::FrontPaste => "F.Paste",
            Self::FrontMask => "F.Mask",
            Self::AllMask => "*.Mask",
            Self::FrontSilkscreen => "F.SilkS",
            Self::BackSilkscreen => "B.SilkS",
            Self::FrontCourtyard => "F.CrtYd",
            Self::FrontFabrication => "F.Fab",
        }
    }
}

/// One drawn outline stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Stroke width (mm).
    pub width: f64,
    /// Layer the stroke is drawn on.
    pub layer: Layer,
}

impl LineSegment {
    /// Creates a line segment from raw coordinates.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, width: f64, layer: Layer) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
            width,
            layer,
        }
    }
}

/// Pad mounting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PadKind {
    /// Copper on the front side only.
    SurfaceMount,
    /// Plated hole through the board with copper on all layers.
    PlatedThroughHole,
}

/// Drill hole of a plated through-hole pad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrillSpec {
    /// Hole diameter (mm).
    pub diameter: f64,
    /// Hole centre relative to the pad centre (mm).
    pub offset: Point,
}

/// A copper pad for one pin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pad {
    /// Pin number, starting at 1.
    pub number: u32,
    /// Drawn pad centre.
    pub position: Point,
    /// Rectangular pad size.
    pub size: Size,
    /// Mounting style.
    pub kind: PadKind,
    /// Drill hole, present for through-hole pads only.
    pub drill: Option<DrillSpec>,
    /// Layers the pad exists on.
    pub layers: Vec<Layer>,
}

impl Pad {
    /// Returns `true` if the pad has a drilled hole.
    #[must_use]
    pub const fn is_through_hole(&self) -> bool {
        matches!(self.kind, PadKind::PlatedThroughHole)
    }
}

/// Options that change how the pads are mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountingOptions {
    /// Through-hole pads with vias (`true`) or pure SMD pads (`false`).
    pub double_sided: bool,
    /// Bias drill holes towards the package exterior.
    pub via_outside: bool,
    /// Placeholder timestamp written into every KiCad record.
    pub tstamp: Uuid,
}

impl Default for MountingOptions {
    fn default() -> Self {
        Self {
            double_sided: true,
            via_outside: true,
            tstamp: Uuid::nil(),
        }
    }
}

/// Anchor points of the three text annotations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextAnchors {
    /// Reference designator.
    pub reference: Point,
    /// Value (part name).
    pub value: Point,
    /// User-visible reference on the fabrication layer.
    pub user: Point,
}

/// Complete geometry of one footprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintGeometry {
    /// Pads in pin-number order.
    pub pads: Vec<Pad>,
    /// Front silkscreen outline.
    pub front_silkscreen: Vec<LineSegment>,
    /// Back silkscreen outline.
    pub back_silkscreen: Vec<LineSegment>,
    /// Courtyard rectangle.
    pub courtyard: Vec<LineSegment>,
    /// Fabrication layer outline.
    pub fabrication: Vec<LineSegment>,
    /// Text annotation anchors.
    pub text: TextAnchors,
}

impl FootprintGeometry {
    /// Iterates over every line segment in output order: front silkscreen,
    /// back silkscreen, courtyard, fabrication.
    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        self.front_silkscreen
            .iter()
            .chain(&self.back_silkscreen)
            .chain(&self.courtyard)
            .chain(&self.fabrication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_names_match_kicad() {
        assert_eq!(Layer::FrontCopper.as_str(), "F.Cu");
        assert_eq!(Layer::AllMask.as_str(), "*.Mask");
        assert_eq!(Layer::BackSilkscreen.as_str(), "B.SilkS");
        assert_eq!(Layer::FrontCourtyard.as_str(), "F.CrtYd");
    }

    #[test]
    fn layer_serialises_as_kicad_name() {
        let json = serde_json::to_string(&Layer::FrontFabrication).unwrap();
        assert_eq!(json, "\"F.Fab\"");
    }

    #[test]
    fn default_options() {
        let opts = MountingOptions::default();
        assert!(opts.double_sided);
        assert!(opts.via_outside);
        assert!(opts.tstamp.is_nil());
    }

    #[test]
    fn size_area() {
        let size = Size::new(0.9, 4.55);
        assert!((size.area() - 4.095).abs() < 1e-9);
    }
}
