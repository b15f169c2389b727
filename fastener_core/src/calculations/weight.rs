//! # Weight and Piece Count
//!
//! Converts between piece counts and bulk weight for one fastener
//! description (type, material, diameter, length).
//!
//! ## Rounding
//!
//! - `unit_weight_grams` is rounded to 3 decimals
//! - `total_weight_kg` is rounded to 4 decimals from the unrounded unit weight
//! - `pieces_per_50kg` and `total_pieces` are floor-divided by the rounded
//!   unit weight, so `pieces × unit ≤ weight < (pieces + 1) × unit` holds on
//!   the reported numbers
//!
//! ## Example
//!
//! ```rust
//! use fastener_core::calculations::weight::{calculate_weight, WeightInput};
//! use fastener_core::catalog::ReferenceStore;
//!
//! let store = ReferenceStore::embedded();
//! let input = WeightInput {
//!     fastener_type_id: "hex_bolt".to_string(),
//!     material_id: "mild_steel".to_string(),
//!     diameter: "M10".to_string(),
//!     length: Some(50.0),
//!     quantity: 100,
//! };
//!
//! let result = calculate_weight(&store, &input).unwrap();
//! assert!((result.unit_weight_grams - 43.401).abs() < 1e-9);
//! assert!((result.total_weight_kg - 4.3401).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::shapes::ShapeFormula;
use crate::catalog::{FastenerType, Material, ReferenceStore};
use crate::errors::{CalcError, CalcResult};
use crate::units::{round_to, GramsPerCm3, NominalDiameter};

/// Bundle weight used for the pieces-per-bundle figure
pub const BUNDLE_WEIGHT_KG: f64 = 50.0;

/// Pieces needed to weigh a quantity of pieces.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fastener_type_id": "hex_bolt",
///   "material_id": "stainless_steel_304",
///   "diameter": "M12",
///   "length": 60.0,
///   "quantity": 500
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightInput {
    pub fastener_type_id: String,
    pub material_id: String,
    /// Metric designation (e.g., "M10")
    pub diameter: String,
    /// Length in mm, required for bolts and screws
    #[serde(default)]
    pub length: Option<f64>,
    /// Number of pieces
    pub quantity: u32,
}

impl WeightInput {
    /// Validate request-level fields.
    ///
    /// Reference ids, length and diameter are checked during calculation,
    /// once the fastener type is known.
    pub fn validate(&self) -> CalcResult<()> {
        if self.quantity == 0 {
            return Err(CalcError::invalid_input(
                "quantity",
                self.quantity.to_string(),
                "Quantity must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Pieces contained in a given bulk weight.
///
/// The weight field is named `weight` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiecesInput {
    pub fastener_type_id: String,
    pub material_id: String,
    pub diameter: String,
    #[serde(default)]
    pub length: Option<f64>,
    /// Bulk weight in kg
    #[serde(rename = "weight")]
    pub weight_kg: f64,
}

impl PiecesInput {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(CalcError::invalid_input(
                "weight",
                self.weight_kg.to_string(),
                "Weight must be a positive number of kilograms",
            ));
        }
        Ok(())
    }

    /// The same fastener as a single-piece weight request
    pub fn single_piece(&self) -> WeightInput {
        WeightInput {
            fastener_type_id: self.fastener_type_id.clone(),
            material_id: self.material_id.clone(),
            diameter: self.diameter.clone(),
            length: self.length,
            quantity: 1,
        }
    }
}

/// Result of [`calculate_weight`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightResult {
    /// Fastener type display name
    pub fastener_type: String,
    /// Material display name
    pub material: String,
    pub material_grade: Option<String>,
    pub diameter: String,
    pub length: Option<f64>,
    pub unit_weight_grams: f64,
    pub quantity: u32,
    pub total_weight_kg: f64,
    pub pieces_per_50kg: u64,
}

/// Result of [`calculate_pieces_from_weight`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiecesResult {
    pub fastener_type: String,
    pub material: String,
    pub material_grade: Option<String>,
    pub diameter: String,
    pub length: Option<f64>,
    pub unit_weight_grams: f64,
    pub input_weight_kg: f64,
    pub total_pieces: u64,
    pub pieces_per_50kg: u64,
}

/// Whole pieces of `unit_weight_grams` that fit in `weight_kg`; 0 for a
/// zero unit weight.
pub fn pieces_in(weight_kg: f64, unit_weight_grams: f64) -> u64 {
    if unit_weight_grams <= 0.0 {
        return 0;
    }
    (weight_kg * 1000.0 / unit_weight_grams).floor() as u64
}

/// Weight of `quantity` pieces.
///
/// Checks run in order: quantity, material, fastener type, formula
/// registration, length, diameter. The first failure is returned.
pub fn calculate_weight(store: &ReferenceStore, input: &WeightInput) -> CalcResult<WeightResult> {
    input.validate()?;

    let material = store
        .find::<Material>(&input.material_id)?
        .ok_or_else(|| CalcError::unknown_reference("material", &input.material_id))?;
    let fastener = store
        .find::<FastenerType>(&input.fastener_type_id)?
        .ok_or_else(|| CalcError::unknown_reference("fastener type", &input.fastener_type_id))?;
    let formula = ShapeFormula::for_type(&fastener.id)?;

    let length = if fastener.has_length {
        let length = input
            .length
            .ok_or_else(|| CalcError::length_required(&fastener.id))?;
        if !length.is_finite() || length <= 0.0 {
            return Err(CalcError::invalid_input(
                "length",
                length.to_string(),
                "Length must be a positive number of millimeters",
            ));
        }
        Some(length)
    } else {
        None
    };

    let diameter = NominalDiameter::parse(&input.diameter)?;
    let grams = formula.unit_weight(store, &diameter, length, GramsPerCm3(material.density))?;

    let unit_weight_grams = round_to(grams.value(), 3);
    let total_weight_kg = round_to(grams.value() * f64::from(input.quantity) / 1000.0, 4);
    if !unit_weight_grams.is_finite() || !total_weight_kg.is_finite() {
        return Err(out_of_range(input, &diameter, length));
    }

    Ok(WeightResult {
        fastener_type: fastener.name.clone(),
        material: material.name.clone(),
        material_grade: material.grade.clone(),
        diameter: diameter.designation().to_string(),
        length: input.length,
        unit_weight_grams,
        quantity: input.quantity,
        total_weight_kg,
        pieces_per_50kg: pieces_in(BUNDLE_WEIGHT_KG, unit_weight_grams),
    })
}

/// Blame whichever of length and diameter is the larger dimension
fn out_of_range(input: &WeightInput, diameter: &NominalDiameter, length: Option<f64>) -> CalcError {
    match length {
        Some(length) if length > diameter.mm() => {
            CalcError::invalid_input("length", length.to_string(), "Result is out of range")
        }
        _ => CalcError::invalid_input("diameter", &input.diameter, "Result is out of range"),
    }
}

/// Number of whole pieces in a bulk weight
pub fn calculate_pieces_from_weight(store: &ReferenceStore, input: &PiecesInput) -> CalcResult<PiecesResult> {
    input.validate()?;
    let unit = calculate_weight(store, &input.single_piece())?;

    Ok(PiecesResult {
        total_pieces: pieces_in(input.weight_kg, unit.unit_weight_grams),
        fastener_type: unit.fastener_type,
        material: unit.material,
        material_grade: unit.material_grade,
        diameter: unit.diameter,
        length: unit.length,
        unit_weight_grams: unit.unit_weight_grams,
        input_weight_kg: input.weight_kg,
        pieces_per_50kg: unit.pieces_per_50kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ReferenceStore {
        ReferenceStore::embedded()
    }

    fn weight_input(fastener: &str, material: &str, dia: &str, length: Option<f64>, quantity: u32) -> WeightInput {
        WeightInput {
            fastener_type_id: fastener.to_string(),
            material_id: material.to_string(),
            diameter: dia.to_string(),
            length,
            quantity,
        }
    }

    fn pieces_input(fastener: &str, dia: &str, length: Option<f64>, weight_kg: f64) -> PiecesInput {
        PiecesInput {
            fastener_type_id: fastener.to_string(),
            material_id: "mild_steel".to_string(),
            diameter: dia.to_string(),
            length,
            weight_kg,
        }
    }

    #[test]
    fn test_hex_bolt_m10() {
        let result = calculate_weight(&store(), &weight_input("hex_bolt", "mild_steel", "M10", Some(50.0), 1)).unwrap();

        assert_eq!(result.fastener_type, "Hex Bolt");
        assert_eq!(result.material, "Mild Steel");
        assert_eq!(result.material_grade.as_deref(), Some("4.6"));
        assert_eq!(result.diameter, "M10");
        assert_eq!(result.length, Some(50.0));
        assert!((result.unit_weight_grams - 43.401).abs() < 1e-9);
        assert!((result.total_weight_kg - 0.0434).abs() < 1e-9);
        // 50000 / 43.401 = 1152.05
        assert_eq!(result.pieces_per_50kg, 1152);
    }

    #[test]
    fn test_total_scales_with_quantity() {
        let result =
            calculate_weight(&store(), &weight_input("hex_nut", "stainless_steel_304", "M10", None, 250)).unwrap();
        // 1373.87 mm³ × 7.93 = 10.8948 g
        assert!((result.unit_weight_grams - 10.895).abs() < 1e-9);
        assert!((result.total_weight_kg - 2.7237).abs() < 1e-9);
        assert_eq!(result.length, None);
        assert_eq!(result.material_grade.as_deref(), Some("A2-70"));
    }

    #[test]
    fn test_material_without_grade() {
        let result = calculate_weight(&store(), &weight_input("plain_washer", "brass", "M8", None, 1)).unwrap();
        assert_eq!(result.material_grade, None);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["material_grade"].is_null());
    }

    #[test]
    fn test_bundle_bracket() {
        let store = store();
        for (fastener, dia, length) in [
            ("hex_bolt", "M16", Some(80.0)),
            ("spring_washer", "M6", None),
            ("wood_screw", "M5", Some(40.0)),
            ("eye_bolt", "M20", Some(120.0)),
        ] {
            let r = calculate_weight(&store, &weight_input(fastener, "mild_steel", dia, length, 1)).unwrap();
            let n = r.pieces_per_50kg as f64;
            assert!(n * r.unit_weight_grams <= 50000.0, "{}", fastener);
            assert!((n + 1.0) * r.unit_weight_grams > 50000.0, "{}", fastener);
        }
    }

    #[test]
    fn test_pieces_from_weight() {
        let result = calculate_pieces_from_weight(&store(), &pieces_input("hex_bolt", "M10", Some(50.0), 10.0)).unwrap();
        assert!((result.unit_weight_grams - 43.401).abs() < 1e-9);
        assert!((result.input_weight_kg - 10.0).abs() < 1e-12);
        // 10000 / 43.401 = 230.4
        assert_eq!(result.total_pieces, 230);
        assert_eq!(result.pieces_per_50kg, 1152);
    }

    #[test]
    fn test_round_trip_single_piece() {
        let store = store();
        for (fastener, dia, length) in [("hex_bolt", "M10", Some(50.0)), ("flange_nut", "M12", None)] {
            let single = calculate_weight(&store, &weight_input(fastener, "mild_steel", dia, length, 1)).unwrap();
            let back =
                calculate_pieces_from_weight(&store, &pieces_input(fastener, dia, length, single.total_weight_kg))
                    .unwrap();
            // total_weight_kg keeps 4 places (0.1 g), so it can sit just below
            // one unit weight and floor to 0
            assert!(matches!(back.total_pieces, 0 | 1), "{}", fastener);
            if fastener == "hex_bolt" {
                // 0.0434 kg < 43.401 g
                assert_eq!(back.total_pieces, 0);
            }

            let hundred = calculate_weight(&store, &weight_input(fastener, "mild_steel", dia, length, 100)).unwrap();
            let back =
                calculate_pieces_from_weight(&store, &pieces_input(fastener, dia, length, hundred.total_weight_kg))
                    .unwrap();
            assert!((99..=100).contains(&back.total_pieces), "{}", fastener);
        }
    }

    #[test]
    fn test_unknown_material() {
        let err = calculate_weight(&store(), &weight_input("hex_bolt", "unobtainium", "M10", Some(50.0), 1)).unwrap_err();
        assert_eq!(err, CalcError::unknown_reference("material", "unobtainium"));
        assert!(err.to_string().contains("unobtainium"));
        assert_eq!(err.error_code(), "UNKNOWN_REFERENCE");
    }

    #[test]
    fn test_unknown_fastener_type() {
        let err = calculate_weight(&store(), &weight_input("rivet", "mild_steel", "M10", Some(50.0), 1)).unwrap_err();
        assert!(err.to_string().contains("rivet"));
        assert!(matches!(err, CalcError::UnknownReference { .. }));
    }

    #[test]
    fn test_length_required() {
        let err = calculate_weight(&store(), &weight_input("socket_head_cap_screw", "mild_steel", "M8", None, 1))
            .unwrap_err();
        assert_eq!(err.to_string(), "Length required for socket_head_cap_screw");
    }

    #[test]
    fn test_invalid_length() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = calculate_weight(&store(), &weight_input("stud_bolt", "mild_steel", "M8", Some(bad), 1))
                .unwrap_err();
            assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "length"));
        }
    }

    #[test]
    fn test_result_out_of_range() {
        let err = calculate_weight(&store(), &weight_input("hex_bolt", "mild_steel", "M1e300", Some(50.0), 1))
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "diameter"));

        let err = calculate_weight(&store(), &weight_input("stud_bolt", "mild_steel", "M10", Some(1e308), 1))
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "length"));

        // Finite unit weight, but the total overflows
        let err = calculate_weight(&store(), &weight_input("hex_nut", "mild_steel", "M1e100", None, u32::MAX))
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "diameter"));

        let err = calculate_pieces_from_weight(&store(), &pieces_input("hex_nut", "M1e300", None, 5.0)).unwrap_err();
        assert_eq!(err.kind(), crate::errors::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_invalid_diameter() {
        let err = calculate_weight(&store(), &weight_input("hex_nut", "mild_steel", "10mm", None, 1)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "diameter"));
    }

    #[test]
    fn test_zero_quantity() {
        let err = calculate_weight(&store(), &weight_input("hex_nut", "mild_steel", "M10", None, 0)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "quantity"));
    }

    #[test]
    fn test_check_order() {
        // Unknown material is reported before the bad diameter and missing length
        let err = calculate_weight(&store(), &weight_input("hex_bolt", "nope", "bogus", None, 1)).unwrap_err();
        assert!(matches!(err, CalcError::UnknownReference { ref kind, .. } if kind == "material"));

        // Missing length is reported before the bad diameter
        let err = calculate_weight(&store(), &weight_input("hex_bolt", "mild_steel", "bogus", None, 1)).unwrap_err();
        assert!(matches!(err, CalcError::LengthRequired { .. }));
    }

    #[test]
    fn test_invalid_weight() {
        for bad in [0.0, -1.0, f64::NAN] {
            let err = calculate_pieces_from_weight(&store(), &pieces_input("hex_nut", "M10", None, bad)).unwrap_err();
            assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "weight"));
        }
    }

    #[test]
    fn test_pieces_in() {
        assert_eq!(pieces_in(50.0, 0.0), 0);
        assert_eq!(pieces_in(1.0, 250.0), 4);
        assert_eq!(pieces_in(1.0, 333.0), 3);
    }

    #[test]
    fn test_input_json() {
        let json = r#"{
            "fastener_type_id": "hex_bolt",
            "material_id": "mild_steel",
            "diameter": "M10",
            "weight": 25.0
        }"#;
        let input: PiecesInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.length, None);
        assert!((input.weight_kg - 25.0).abs() < 1e-12);
    }
}
