//! Catalog records: fastener types, materials, HSN codes and GST rates.
//!
//! These mirror the bundled JSON datasets one-to-one. They are loaded once
//! and never mutated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_true() -> bool {
    true
}

// ============================================================================
// Fastener Types
// ============================================================================

/// Broad fastener family used for grouping in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FastenerCategory {
    Bolt,
    Nut,
    Washer,
    Screw,
}

impl FastenerCategory {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FastenerCategory::Bolt => "Bolt",
            FastenerCategory::Nut => "Nut",
            FastenerCategory::Washer => "Washer",
            FastenerCategory::Screw => "Screw",
        }
    }
}

impl std::fmt::Display for FastenerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A fastener type as listed in the catalog.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "hex_bolt",
///   "name": "Hex Bolt",
///   "category": "bolt",
///   "description": "Hexagon head bolt, partially threaded",
///   "has_length": true,
///   "has_thread_length": true,
///   "diagram_available": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastenerType {
    /// Stable identifier (e.g., "hex_bolt")
    pub id: String,

    /// Display name
    pub name: String,

    /// Bolt, nut, washer or screw
    pub category: FastenerCategory,

    #[serde(default)]
    pub description: String,

    /// Whether a length is required to compute weight
    #[serde(default = "default_true")]
    pub has_length: bool,

    /// Whether the part has a distinct thread length
    #[serde(default)]
    pub has_thread_length: bool,

    /// Whether a dimension diagram can be drawn
    #[serde(default = "default_true")]
    pub diagram_available: bool,
}

// ============================================================================
// Materials
// ============================================================================

/// A fastener material with its density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Stable identifier (e.g., "stainless_steel_304")
    pub id: String,

    /// Display name
    pub name: String,

    /// Density in g/cm³
    pub density: f64,

    /// Property class or grade label (e.g., "8.8", "A2-70")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl Material {
    /// Get display name including grade when present
    pub fn display_name(&self) -> String {
        match &self.grade {
            Some(grade) => format!("{} ({})", self.name, grade),
            None => self.name.clone(),
        }
    }
}

// ============================================================================
// HSN / GST
// ============================================================================

/// Harmonized System of Nomenclature code with its GST rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HsnCode {
    /// Heading or sub-heading (e.g., "7318", "73181500")
    pub code: String,

    pub description: String,

    /// GST rate in percent
    pub gst_rate: f64,

    /// GST material category key (e.g., "iron_steel")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_type: Option<String>,
}

impl HsnCode {
    /// Case-insensitive substring match on code or description.
    ///
    /// `query_lower` must already be lowercase.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.code.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
    }
}

/// GST rate for one material category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstCategory {
    pub name: String,
    /// Main HSN heading for the category
    pub main_hsn: String,
    /// Rate in percent
    pub rate: f64,
}

/// Global GST information block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GstInfo {
    /// Standard rate in percent
    pub current_rate: f64,

    #[serde(default)]
    pub note: String,

    /// Categories keyed by material type (e.g., "iron_steel")
    #[serde(default)]
    pub categories: BTreeMap<String, GstCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fastener_type_defaults() {
        let json = r#"{"id": "rivet", "name": "Rivet", "category": "bolt"}"#;
        let ft: FastenerType = serde_json::from_str(json).unwrap();
        assert!(ft.has_length);
        assert!(!ft.has_thread_length);
        assert!(ft.diagram_available);
        assert!(ft.description.is_empty());
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&FastenerCategory::Washer).unwrap();
        assert_eq!(json, "\"washer\"");
        assert_eq!(FastenerCategory::Nut.to_string(), "Nut");
    }

    #[test]
    fn test_material_display_name() {
        let ss = Material {
            id: "stainless_steel_304".to_string(),
            name: "Stainless Steel 304".to_string(),
            density: 7.93,
            grade: Some("A2-70".to_string()),
        };
        assert_eq!(ss.display_name(), "Stainless Steel 304 (A2-70)");

        let brass = Material {
            id: "brass".to_string(),
            name: "Brass".to_string(),
            density: 8.5,
            grade: None,
        };
        assert_eq!(brass.display_name(), "Brass");
        let json = serde_json::to_string(&brass).unwrap();
        assert!(!json.contains("grade"));
    }

    #[test]
    fn test_hsn_matches() {
        let hsn = HsnCode {
            code: "73181500".to_string(),
            description: "Other screws and Bolts".to_string(),
            gst_rate: 18.0,
            material_type: None,
        };
        assert!(hsn.matches("bolt"));
        assert!(hsn.matches("7318"));
        assert!(hsn.matches("1500"));
        assert!(!hsn.matches("washer"));
    }
}
