//! JSON export of the footprint geometry.

use serde::Serialize;

use crate::error::FootprintError;
use crate::plcc::catalog::ComponentSpec;
use crate::plcc::geometry::FootprintGeometry;

/// Serialised document: the catalog entry next to its geometry.
#[derive(Debug, Serialize)]
struct Document<'a> {
    component: &'a ComponentSpec,
    geometry: &'a FootprintGeometry,
}

/// Renders `geometry` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`FootprintError::Json`] if serialisation fails.
pub fn to_json(spec: &ComponentSpec, geometry: &FootprintGeometry) -> Result<String, FootprintError> {
    let document = Document {
        component: spec,
        geometry,
    };
    let mut json =
        serde_json::to_string_pretty(&document).map_err(|source| FootprintError::Json { source })?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plcc::{self, MountingOptions};

    #[test]
    fn json_contains_geometry() {
        let spec = plcc::lookup(20).unwrap();
        let geometry = plcc::build(&spec, &MountingOptions::default());
        let json = to_json(&spec, &geometry).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["component"]["name"], "APW9322");
        assert_eq!(value["component"]["pins"], 20);
        assert_eq!(value["geometry"]["pads"].as_array().unwrap().len(), 20);
        assert_eq!(value["geometry"]["pads"][0]["kind"], "plated_through_hole");
        assert_eq!(value["geometry"]["pads"][0]["layers"][0], "*.Cu");
        assert_eq!(value["geometry"]["courtyard"][0]["layer"], "F.CrtYd");
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn smd_pads_have_null_drill() {
        let spec = plcc::lookup(20).unwrap();
        let opts = MountingOptions {
            double_sided: false,
            ..MountingOptions::default()
        };
        let geometry = plcc::build(&spec, &opts);
        let value: serde_json::Value =
            serde_json::from_str(&to_json(&spec, &geometry).unwrap()).unwrap();
        assert!(value["geometry"]["pads"][0]["drill"].is_null());
        assert_eq!(value["geometry"]["pads"][0]["kind"], "surface_mount");
    }
}
