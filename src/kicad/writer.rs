//! S-expression writer for footprint geometry.

use std::fmt;

use uuid::Uuid;

use crate::plcc::catalog::ComponentSpec;
use crate::plcc::geometry::{FootprintGeometry, Layer, LineSegment, Pad, PadKind, Point};
use crate::plcc::text::FONT_SIZE;

/// Format version written into the footprint header.
pub const FORMAT_VERSION: &str = "20210228";

/// Reference designator used for the footprint.
const REFERENCE: &str = "IC2";

/// Renders a footprint as a `.kicad_mod` document.
///
/// ```
/// use plcc_gen::kicad::KicadFootprint;
/// use plcc_gen::plcc::{self, MountingOptions};
///
/// let opts = MountingOptions::default();
/// let spec = plcc::lookup(20).unwrap();
/// let geometry = plcc::build(&spec, &opts);
/// let text = KicadFootprint::new(&spec, &geometry, opts.tstamp).to_string();
///
/// assert!(text.starts_with("(footprint \"APW9322\""));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KicadFootprint<'a> {
    spec: &'a ComponentSpec,
    geometry: &'a FootprintGeometry,
    tstamp: Uuid,
}

impl<'a> KicadFootprint<'a> {
    /// Creates a renderer for `geometry` built from `spec`.
    #[must_use]
    pub const fn new(spec: &'a ComponentSpec, geometry: &'a FootprintGeometry, tstamp: Uuid) -> Self {
        Self {
            spec,
            geometry,
            tstamp,
        }
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "(footprint \"{}\" (version {FORMAT_VERSION}) (generator pcbnew) (layer \"F.Cu\")",
            self.spec.name
        )?;
        writeln!(f, "  (tedit 60690F97)")?;
        writeln!(f, "  (descr \"PLCC plug, {} pins, surface mount\")", self.spec.pins)?;
        writeln!(f, "  (tags \"plcc smt\")")?;
        writeln!(f, "  (autoplace_cost180 1)")?;
        writeln!(f, "  (attr smd)")
    }

    fn write_text(
        &self,
        f: &mut fmt::Formatter<'_>,
        kind: &str,
        text: &str,
        at: Point,
        layer: Layer,
    ) -> fmt::Result {
        writeln!(
            f,
            "  (fp_text {kind} \"{text}\" (at {:.0} {:.3} -180) (layer \"{}\")",
            at.x,
            at.y,
            layer.as_str()
        )?;
        writeln!(
            f,
            "    (effects (font (size {FONT_SIZE:.3} {FONT_SIZE:.3}) (thickness 0.15)))"
        )?;
        writeln!(f, "    (tstamp {})", self.tstamp)?;
        writeln!(f, "  )")
    }

    fn write_line(&self, f: &mut fmt::Formatter<'_>, line: &LineSegment) -> fmt::Result {
        writeln!(
            f,
            "  (fp_line (start {:.3} {:.3}) (end {:.3} {:.3}) (layer \"{}\") (width {}) (tstamp {}))",
            line.start.x,
            line.start.y,
            line.end.x,
            line.end.y,
            line.layer.as_str(),
            line.width,
            self.tstamp
        )
    }

    fn write_pad(&self, f: &mut fmt::Formatter<'_>, pad: &Pad) -> fmt::Result {
        let kind = match pad.kind {
            PadKind::SurfaceMount => "smd",
            PadKind::PlatedThroughHole => "thru_hole",
        };
        write!(
            f,
            "  (pad \"{}\" {kind} rect (at {:.3} {:.3}) (locked) (size {:.3} {:.3}) ",
            pad.number, pad.position.x, pad.position.y, pad.size.width, pad.size.height
        )?;
        if let Some(drill) = &pad.drill {
            write!(
                f,
                "(drill {:.1} (offset {:.3} {:.3})) ",
                drill.diameter, drill.offset.x, drill.offset.y
            )?;
        }
        let layers = pad
            .layers
            .iter()
            .map(|layer| format!("\"{}\"", layer.as_str()))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "(layers {layers}) (tstamp {}))", self.tstamp)
    }

    fn write_model(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "(model \"${{KISYS3DMOD}}/Package_LCC.3dshapes/PLCC-{}_SMD-Socket.wrl\"",
            self.spec.pins
        )?;
        writeln!(f, "    (offset (xyz 0 0 0))")?;
        writeln!(f, "    (scale (xyz 1 1 1))")?;
        writeln!(f, "    (rotate (xyz 0 0 0))")?;
        writeln!(f, "  )")
    }
}

impl fmt::Display for KicadFootprint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = &self.geometry.text;

        self.write_header(f)?;
        self.write_text(f, "reference", REFERENCE, text.reference, Layer::FrontSilkscreen)?;
        self.write_text(f, "value", self.spec.name, text.value, Layer::FrontFabrication)?;
        self.write_text(f, "user", "${REFERENCE}", text.user, Layer::FrontFabrication)?;

        for line in self.geometry.lines() {
            self.write_line(f, line)?;
        }
        for pad in &self.geometry.pads {
            self.write_pad(f, pad)?;
        }

        self.write_model(f)?;
        writeln!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plcc::{self, MountingOptions};

    const NIL: &str = "00000000-0000-0000-0000-000000000000";

    fn render(pins: u32, opts: &MountingOptions) -> String {
        let spec = plcc::lookup(pins).unwrap();
        let geometry = plcc::build(&spec, opts);
        KicadFootprint::new(&spec, &geometry, opts.tstamp).to_string()
    }

    #[test]
    fn header_lines() {
        let text = render(84, &MountingOptions::default());
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("(footprint \"APW9328\" (version 20210228) (generator pcbnew) (layer \"F.Cu\")")
        );
        assert_eq!(lines.next(), Some("  (tedit 60690F97)"));
        assert_eq!(lines.next(), Some("  (descr \"PLCC plug, 84 pins, surface mount\")"));
        assert_eq!(lines.next(), Some("  (tags \"plcc smt\")"));
        assert_eq!(lines.next(), Some("  (autoplace_cost180 1)"));
        assert_eq!(lines.next(), Some("  (attr smd)"));
    }

    #[test]
    fn text_records() {
        let text = render(84, &MountingOptions::default());
        let expected = format!(
            "  (fp_text reference \"IC2\" (at 0 -19.300 -180) (layer \"F.SilkS\")\n    \
             (effects (font (size 1.000 1.000) (thickness 0.15)))\n    \
             (tstamp {NIL})\n  )\n"
        );
        assert!(text.contains(&expected));
        assert!(text.contains("  (fp_text value \"APW9328\" (at 0 19.800 -180) (layer \"F.Fab\")\n"));
        assert!(text.contains("  (fp_text user \"${REFERENCE}\" (at 0 0.525 -180) (layer \"F.Fab\")\n"));
    }

    #[test]
    fn line_records() {
        let text = render(84, &MountingOptions::default());
        assert!(text.contains(&format!(
            "  (fp_line (start 13.675 -14.800) (end 14.175 -14.800) (layer \"F.SilkS\") (width 0.1) (tstamp {NIL}))\n"
        )));
        assert!(text.contains(&format!(
            "  (fp_line (start 18.500 -17.500) (end 18.500 18.500) (layer \"B.SilkS\") (width 0.12) (tstamp {NIL}))\n"
        )));
        assert!(text.contains(&format!(
            "  (fp_line (start -18.300 -18.300) (end 18.300 -18.300) (layer \"F.CrtYd\") (width 0.05) (tstamp {NIL}))\n"
        )));
        assert!(text.contains(&format!(
            "  (fp_line (start -18.000 -17.475) (end 17.000 -17.475) (layer \"F.Fab\") (width 0.1) (tstamp {NIL}))\n"
        )));
        assert_eq!(text.matches("(fp_line ").count(), 15 + 15 + 4 + 16);
    }

    #[test]
    fn through_hole_pad_record() {
        let text = render(84, &MountingOptions::default());
        assert!(text.contains(&format!(
            "  (pad \"1\" thru_hole rect (at 0.000 -17.162) (locked) (size 0.900 4.550) \
             (drill 0.3 (offset 0.000 1.138)) (layers \"*.Cu\" \"*.Mask\") (tstamp {NIL}))\n"
        )));
    }

    #[test]
    fn smd_pad_record() {
        let opts = MountingOptions {
            double_sided: false,
            ..MountingOptions::default()
        };
        let text = render(84, &opts);
        assert!(text.contains(&format!(
            "  (pad \"1\" smd rect (at 0.000 -16.025) (locked) (size 0.900 4.550) \
             (layers \"F.Cu\" \"F.Paste\" \"F.Mask\") (tstamp {NIL}))\n"
        )));
        assert!(!text.contains("thru_hole"));
        assert!(!text.contains("(drill"));
    }

    #[test]
    fn model_and_footer() {
        let text = render(44, &MountingOptions::default());
        assert!(text.ends_with(
            "(model \"${KISYS3DMOD}/Package_LCC.3dshapes/PLCC-44_SMD-Socket.wrl\"\n    \
             (offset (xyz 0 0 0))\n    (scale (xyz 1 1 1))\n    (rotate (xyz 0 0 0))\n  )\n)\n"
        ));
    }

    #[test]
    fn custom_tstamp() {
        let opts = MountingOptions {
            tstamp: Uuid::from_u128(0x1234),
            ..MountingOptions::default()
        };
        let text = render(20, &opts);
        assert!(!text.contains(NIL));
        assert!(text.contains("(tstamp 00000000-0000-0000-0000-000000001234)"));
    }
}
