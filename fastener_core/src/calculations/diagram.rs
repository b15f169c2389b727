//! # Diagram Data
//!
//! Dimension row plus the labelled callouts a front end needs to draw a
//! dimensioned sketch of one fastener size.

use serde::Serialize;

use crate::catalog::{family_key, Dimension, FastenerType, ReferenceStore};
use crate::errors::{CalcError, CalcResult};

/// Value of a diagram callout: a length, or the thread designation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LabelValue {
    Millimeters(f64),
    Text(String),
}

/// One callout on the diagram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramLabel {
    /// Drawing symbol (s, k, m, d1, ...)
    pub key: &'static str,
    pub name: &'static str,
    /// `None` serializes as null (pitch not listed)
    pub value: Option<LabelValue>,
    pub unit: &'static str,
}

impl DiagramLabel {
    fn mm(key: &'static str, name: &'static str, value: f64) -> Self {
        DiagramLabel {
            key,
            name,
            value: Some(LabelValue::Millimeters(value)),
            unit: "mm",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramData<'a> {
    pub fastener_type_id: &'a str,
    pub fastener_type_name: &'a str,
    pub diameter: String,
    pub dimensions: &'a Dimension,
    pub labels: Vec<DiagramLabel>,
}

/// Callouts in drawing order; thread diameter and pitch always come last
pub fn diagram_labels(row: &Dimension, diameter: &str) -> Vec<DiagramLabel> {
    let optional = [
        ("s", "Across Flats", row.head_across_flats),
        ("k", "Head Height", row.head_height),
        ("s", "Across Flats", row.across_flats),
        ("m", "Height", row.height),
        ("d2", "Outer Diameter", row.outer_diameter),
        ("d1", "Inner Diameter", row.inner_diameter),
        ("h", "Thickness", row.thickness),
        ("dk", "Head Diameter", row.head_diameter),
    ];

    let mut labels: Vec<DiagramLabel> = optional
        .into_iter()
        .filter_map(|(key, name, value)| value.map(|v| DiagramLabel::mm(key, name, v)))
        .collect();

    labels.push(DiagramLabel {
        key: "d",
        name: "Thread Diameter",
        value: Some(LabelValue::Text(diameter.to_string())),
        unit: "",
    });
    labels.push(DiagramLabel {
        key: "P",
        name: "Pitch",
        value: row.pitch.map(LabelValue::Millimeters),
        unit: "mm",
    });
    labels
}

/// Diagram data for one fastener type and size.
///
/// The row is looked up under the type's own table first, then under the
/// family table it shares.
pub fn diagram_data<'a>(
    store: &'a ReferenceStore,
    fastener_type_id: &str,
    diameter: &str,
) -> CalcResult<DiagramData<'a>> {
    let fastener = store.get::<FastenerType>(fastener_type_id)?;

    let row = match store.find_dimension(&fastener.id, diameter)? {
        Some(row) => row,
        None => store
            .find_dimension(family_key(&fastener.id), diameter)?
            .ok_or_else(|| CalcError::not_found("Dimensions", format!("{} {}", fastener.id, diameter.trim())))?,
    };

    let diameter = diameter.trim().to_string();
    Ok(DiagramData {
        fastener_type_id: &fastener.id,
        fastener_type_name: &fastener.name,
        labels: diagram_labels(row, &diameter),
        diameter,
        dimensions: row,
    })
}
