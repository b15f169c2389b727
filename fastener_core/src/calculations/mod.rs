//! # Fastener Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate_*(store, input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`shapes`] - Per-type volume formulas and the registry that maps type ids to them
//! - [`weight`] - Weight from quantity and quantity from weight
//! - [`diagram`] - Labelled dimension data for drawing a fastener

pub mod diagram;
pub mod shapes;
pub mod weight;

// Re-export commonly used types
pub use diagram::{diagram_data, DiagramData, DiagramLabel, LabelValue};
pub use shapes::ShapeFormula;
pub use weight::{
    calculate_pieces_from_weight, calculate_weight, PiecesInput, PiecesResult, WeightInput, WeightResult,
};
