//! KiCad footprint (`.kicad_mod`) output.
//!
//! Footprints are written in the S-expression format of KiCad 6
//! (`version 20210228`). The output is kept byte-compatible with the
//! footprints shipped so far, so field order, number formatting and the
//! placeholder timestamps must not change.
//!
//! # Record Layout
//!
//! ```text
//! (footprint "APW9328" (version 20210228) (generator pcbnew) (layer "F.Cu")
//!   header fields
//!   (fp_text ...)        reference, value, user
//!   (fp_line ...)        silkscreen F/B, courtyard, fabrication
//!   (pad ...)            one per pin
//! (model ...)
//! )
//! ```

mod writer;

pub use writer::KicadFootprint;
