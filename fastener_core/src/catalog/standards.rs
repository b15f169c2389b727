//! # Standards Reference
//!
//! Built-in descriptions of the DIN, ISO and IS standards the catalog cites,
//! in the same tuple-table style as the other built-in databases. The
//! family-to-code mapping itself lives in `dimensions.json` and is read
//! through [`ReferenceStore::standards_map`].

use serde::{Deserialize, Serialize};

use super::store::ReferenceStore;
use crate::errors::{CalcError, CalcResult};

/// Standards body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StandardSystem {
    Din,
    Iso,
    Is,
}

impl StandardSystem {
    pub const ALL: [StandardSystem; 3] = [StandardSystem::Din, StandardSystem::Iso, StandardSystem::Is];

    pub fn label(&self) -> &'static str {
        match self {
            StandardSystem::Din => "DIN",
            StandardSystem::Iso => "ISO",
            StandardSystem::Is => "IS",
        }
    }
}

impl std::fmt::Display for StandardSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Detailed information about one standard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardInfo {
    pub code: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub system: StandardSystem,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equivalent_iso: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equivalent_din: Option<&'static str>,
    /// Property classes the standard covers
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub material_grades: &'static [&'static str],
    pub size_range: &'static str,
}

/// One standard code as applied to one fastener family
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardListing {
    pub code: String,
    #[serde(rename = "type")]
    pub system: StandardSystem,
    pub fastener_type: String,
    pub description: String,
}

const BOLT_GRADES: &[&str] = &["4.6", "4.8", "5.6", "5.8", "8.8", "10.9", "12.9"];
const CAP_SCREW_GRADES: &[&str] = &["8.8", "10.9", "12.9"];
const NUT_GRADES: &[&str] = &["4", "5", "6", "8", "10", "12"];

/// Built-in standards table
///
/// Format: (code, system, name, description, equivalent ISO, equivalent DIN,
/// grades, size range)
#[allow(clippy::type_complexity)]
const BUILTIN_STANDARDS: &[(
    &str,
    StandardSystem,
    &str,
    &str,
    Option<&str>,
    Option<&str>,
    &[&str],
    &str,
)] = &[
    // DIN
    ("DIN 931", StandardSystem::Din, "Hexagon Head Bolts - Partially Threaded",
        "Hexagonal head bolts with partial threading, thread to head",
        Some("ISO 4014"), None, BOLT_GRADES, "M1.6 to M64"),
    ("DIN 933", StandardSystem::Din, "Hexagon Head Bolts - Fully Threaded",
        "Hexagonal head bolts with full threading along entire shank",
        Some("ISO 4017"), None, BOLT_GRADES, "M1.6 to M64"),
    ("DIN 912", StandardSystem::Din, "Socket Head Cap Screws",
        "Cylindrical head with internal hexagon (Allen) drive",
        Some("ISO 4762"), None, CAP_SCREW_GRADES, "M1.6 to M64"),
    ("DIN 934", StandardSystem::Din, "Hexagon Nuts",
        "Standard hexagonal nuts, style 1",
        Some("ISO 4032"), None, NUT_GRADES, "M1.6 to M64"),
    ("DIN 125", StandardSystem::Din, "Plain Washers",
        "Plain washers, Form A (without chamfer) and Form B (with chamfer)",
        Some("ISO 7089, ISO 7090"), None, &[], "M1.6 to M64"),
    ("DIN 127", StandardSystem::Din, "Spring Lock Washers",
        "Spring lock washers with square ends",
        None, None, &[], "M2 to M48"),
    ("DIN 9021", StandardSystem::Din, "Plain Washers - Large Series",
        "Plain washers with larger outer diameter",
        Some("ISO 7093"), None, &[], "M3 to M36"),
    // ISO
    ("ISO 4014", StandardSystem::Iso, "Hexagon Head Bolts - Product Grades A and B",
        "Partially threaded hexagon head bolts",
        None, Some("DIN 931"), &[], "M1.6 to M64"),
    ("ISO 4017", StandardSystem::Iso, "Hexagon Head Screws - Product Grades A and B",
        "Fully threaded hexagon head screws",
        None, Some("DIN 933"), &[], "M1.6 to M64"),
    ("ISO 4762", StandardSystem::Iso, "Socket Head Cap Screws",
        "Hexagon socket head cap screws",
        None, Some("DIN 912"), &[], "M1.6 to M64"),
    ("ISO 4032", StandardSystem::Iso, "Hexagon Nuts - Style 1",
        "Hexagon nuts, style 1, product grades A and B",
        None, Some("DIN 934"), &[], "M1.6 to M64"),
    ("ISO 7089", StandardSystem::Iso, "Plain Washers - Normal Series",
        "Plain washers, normal series, product grade A",
        None, Some("DIN 125 Form A"), &[], "M1.6 to M64"),
    ("ISO 7093", StandardSystem::Iso, "Plain Washers - Large Series",
        "Plain washers, large series, product grade A",
        None, Some("DIN 9021"), &[], "M3 to M36"),
    // IS (Bureau of Indian Standards)
    ("IS 1363-1", StandardSystem::Is, "Hexagon Head Bolts",
        "Hexagon head bolts, screws and nuts of product grade C - Part 1: Hexagon head bolts",
        None, None, &[], "M5 to M64"),
    ("IS 1363-3", StandardSystem::Is, "Hexagon Nuts",
        "Hexagon head bolts, screws and nuts of product grade C - Part 3: Hexagon nuts",
        None, None, &[], "M5 to M64"),
    ("IS 1364-1", StandardSystem::Is, "Hexagon Head Bolts - Product Grades A and B",
        "Hexagon head bolts, screws and nuts of product grades A and B - Part 1: Hexagon head bolts",
        None, None, &[], "M1.6 to M64"),
    ("IS 1364-3", StandardSystem::Is, "Hexagon Nuts - Style 1",
        "Style 1 hexagon nuts of product grades A and B",
        None, None, &[], "M1.6 to M64"),
    ("IS 2016", StandardSystem::Is, "Plain Washers",
        "Plain washers for metric fasteners",
        None, None, &[], "M1.6 to M64"),
    ("IS 2269", StandardSystem::Is, "Socket Head Cap Screws",
        "Hexagon socket head cap screws",
        None, None, &[], "M1.6 to M64"),
    ("IS 6735", StandardSystem::Is, "Spring Lock Washers",
        "Spring lock washers for screws with cylindrical heads",
        None, None, &[], "M2 to M48"),
];

/// All built-in standards
pub fn builtin_standards() -> Vec<StandardInfo> {
    BUILTIN_STANDARDS
        .iter()
        .map(
            |&(code, system, name, description, equivalent_iso, equivalent_din, material_grades, size_range)| {
                StandardInfo {
                    code,
                    name,
                    system,
                    description,
                    equivalent_iso,
                    equivalent_din,
                    material_grades,
                    size_range,
                }
            },
        )
        .collect()
}

/// Detailed information for a standard code, e.g. "DIN 933" (case-insensitive)
pub fn standard_info(code: &str) -> CalcResult<StandardInfo> {
    let code = code.trim();
    builtin_standards()
        .into_iter()
        .find(|info| info.code.eq_ignore_ascii_case(code))
        .ok_or_else(|| CalcError::not_found("Standard", code))
}

/// Short description for a code, or the code itself when unknown
pub fn describe_standard(code: &str) -> String {
    match standard_info(code) {
        Ok(info) => info.description.to_string(),
        Err(_) => code.to_string(),
    }
}

/// Flatten the catalog's family-to-standards map into one listing.
///
/// Ordered by family key, then DIN, ISO, IS, then file order.
pub fn list_standards(store: &ReferenceStore) -> CalcResult<Vec<StandardListing>> {
    let mut listings = Vec::new();
    for (family, refs) in store.standards_map()? {
        let systems = [
            (StandardSystem::Din, &refs.din),
            (StandardSystem::Iso, &refs.iso),
            (StandardSystem::Is, &refs.is),
        ];
        for (system, codes) in systems {
            for code in codes {
                listings.push(StandardListing {
                    code: code.clone(),
                    system,
                    fastener_type: family.clone(),
                    description: describe_standard(code),
                });
            }
        }
    }
    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let standards = builtin_standards();
        assert_eq!(standards.len(), 20);
        assert_eq!(standards.iter().filter(|s| s.system == StandardSystem::Din).count(), 7);
        assert_eq!(standards.iter().filter(|s| s.system == StandardSystem::Iso).count(), 6);
        assert_eq!(standards.iter().filter(|s| s.system == StandardSystem::Is).count(), 7);
    }

    #[test]
    fn test_standard_info() {
        let din = standard_info("DIN 931").unwrap();
        assert_eq!(din.equivalent_iso, Some("ISO 4014"));
        assert!(din.material_grades.contains(&"8.8"));

        let iso = standard_info("iso 4017").unwrap();
        assert_eq!(iso.equivalent_din, Some("DIN 933"));

        assert!(matches!(standard_info("ANSI B18.2.1"), Err(CalcError::NotFound { .. })));
    }

    #[test]
    fn test_info_serialization() {
        let json = serde_json::to_value(standard_info("IS 6735").unwrap()).unwrap();
        assert_eq!(json["type"], "IS");
        assert!(json.get("material_grades").is_none());
        assert!(json.get("equivalent_iso").is_none());
        assert_eq!(json["size_range"], "M2 to M48");
    }

    #[test]
    fn test_describe_falls_back_to_code() {
        assert_eq!(describe_standard("DIN 127"), "Spring lock washers with square ends");
        assert_eq!(describe_standard("JIS B1180"), "JIS B1180");
    }

    #[test]
    fn test_list_standards() {
        let store = ReferenceStore::embedded();
        let listings = list_standards(&store).unwrap();

        // Every code in the bundled map has a description
        assert!(listings.iter().all(|l| l.description != l.code));

        let bolt: Vec<&StandardListing> = listings.iter().filter(|l| l.fastener_type == "hex_bolt").collect();
        let codes: Vec<&str> = bolt.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["DIN 931", "DIN 933", "ISO 4014", "ISO 4017", "IS 1363-1", "IS 1364-1"]
        );
        assert_eq!(bolt[2].system, StandardSystem::Iso);

        // No ISO entries for spring washers
        assert!(!listings
            .iter()
            .any(|l| l.fastener_type == "spring_washer" && l.system == StandardSystem::Iso));
    }
}
