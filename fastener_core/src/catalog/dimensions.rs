//! # Dimension Tables
//!
//! Standard dimension rows keyed by (family, diameter). Several fastener types
//! share one family table: every bolt reads the `hex_bolt` table, every nut
//! reads `hex_nut`, and so on. [`DimensionFamily`] owns that mapping.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

/// One row of a dimension table, all lengths in mm.
///
/// Which fields are present depends on the family: bolts carry head
/// dimensions, nuts carry `across_flats`/`height`, washers carry
/// `outer_diameter`/`inner_diameter`/`thickness`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    /// Metric designation (e.g., "M10")
    pub diameter: String,

    /// Thread pitch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,

    /// Bolt head across flats (s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_across_flats: Option<f64>,

    /// Bolt/screw head height (k)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_height: Option<f64>,

    /// Cylindrical head diameter (dk)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_diameter: Option<f64>,

    /// Nut across flats (s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub across_flats: Option<f64>,

    /// Nut height (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Washer outer diameter (d2)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_diameter: Option<f64>,

    /// Washer inner diameter (d1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_diameter: Option<f64>,

    /// Washer thickness (h)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
}

impl Dimension {
    /// Case-insensitive match on the `M` prefix, exact otherwise
    pub fn is_diameter(&self, diameter: &str) -> bool {
        self.diameter.eq_ignore_ascii_case(diameter.trim())
    }
}

/// The dimension tables shipped with the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionFamily {
    HexBolt,
    HexNut,
    SocketHeadCapScrew,
    PlainWasher,
    SpringWasher,
}

impl DimensionFamily {
    /// Key of the family in `dimensions.json`
    pub fn key(&self) -> &'static str {
        match self {
            DimensionFamily::HexBolt => "hex_bolt",
            DimensionFamily::HexNut => "hex_nut",
            DimensionFamily::SocketHeadCapScrew => "socket_head_cap_screw",
            DimensionFamily::PlainWasher => "plain_washer",
            DimensionFamily::SpringWasher => "spring_washer",
        }
    }

    /// Family table a fastener type reads its dimensions from
    pub fn for_fastener_type(fastener_type_id: &str) -> Option<Self> {
        let family = match fastener_type_id {
            "hex_bolt" | "hex_bolt_full_thread" | "stud_bolt" | "carriage_bolt" | "eye_bolt"
            | "flange_bolt" | "anchor_bolt" => DimensionFamily::HexBolt,
            "hex_nut" | "lock_nut" | "flange_nut" | "wing_nut" | "castle_nut" | "thin_hex_nut" => {
                DimensionFamily::HexNut
            }
            "plain_washer" | "heavy_duty_washer" => DimensionFamily::PlainWasher,
            "spring_washer" => DimensionFamily::SpringWasher,
            "socket_head_cap_screw" | "machine_screw" | "self_tapping_screw" | "wood_screw"
            | "set_screw" => DimensionFamily::SocketHeadCapScrew,
            _ => return None,
        };
        Some(family)
    }
}

impl std::fmt::Display for DimensionFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Resolve a fastener type id to the key of the table it shares.
///
/// Ids with no known family resolve to themselves, so a dataset may add a
/// table under a new type id without code changes.
pub fn family_key(fastener_type_id: &str) -> &str {
    match DimensionFamily::for_fastener_type(fastener_type_id) {
        Some(family) => family.key(),
        None => fastener_type_id,
    }
}

/// Standard codes per system for one family
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StandardRefs {
    #[serde(default)]
    pub din: Vec<String>,
    #[serde(default)]
    pub iso: Vec<String>,
    #[serde(default)]
    pub is: Vec<String>,
}

/// Source of dimension rows for the shape formulas.
///
/// Returning `Ok(None)` sends a formula to its proportional fallback.
pub trait DimensionLookup {
    fn dimension_row(&self, family: DimensionFamily, diameter: &str) -> CalcResult<Option<&Dimension>>;
}

/// A lookup with no tables; every formula uses its fallback ratios
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDimensions;

impl DimensionLookup for NoDimensions {
    fn dimension_row(&self, _family: DimensionFamily, _diameter: &str) -> CalcResult<Option<&Dimension>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_mapping() {
        assert_eq!(DimensionFamily::for_fastener_type("flange_bolt"), Some(DimensionFamily::HexBolt));
        assert_eq!(DimensionFamily::for_fastener_type("castle_nut"), Some(DimensionFamily::HexNut));
        assert_eq!(
            DimensionFamily::for_fastener_type("heavy_duty_washer"),
            Some(DimensionFamily::PlainWasher)
        );
        assert_eq!(
            DimensionFamily::for_fastener_type("wood_screw"),
            Some(DimensionFamily::SocketHeadCapScrew)
        );
        assert_eq!(DimensionFamily::for_fastener_type("rivet"), None);
    }

    #[test]
    fn test_family_key_falls_back_to_id() {
        assert_eq!(family_key("lock_nut"), "hex_nut");
        assert_eq!(family_key("spring_washer"), "spring_washer");
        assert_eq!(family_key("rivet"), "rivet");
    }

    #[test]
    fn test_diameter_match() {
        let row = Dimension {
            diameter: "M10".to_string(),
            ..Default::default()
        };
        assert!(row.is_diameter("M10"));
        assert!(row.is_diameter("m10"));
        assert!(!row.is_diameter("M1"));
        assert!(!row.is_diameter("M10.0"));
    }

    #[test]
    fn test_absent_fields_not_serialized() {
        let row = Dimension {
            diameter: "M8".to_string(),
            inner_diameter: Some(8.4),
            outer_diameter: Some(16.0),
            thickness: Some(1.6),
            ..Default::default()
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(!json.contains("pitch"));
        assert!(!json.contains("head_height"));
        assert!(json.contains("\"thickness\":1.6"));
    }

    #[test]
    fn test_no_dimensions() {
        let row = NoDimensions.dimension_row(DimensionFamily::HexBolt, "M10").unwrap();
        assert!(row.is_none());
    }
}
