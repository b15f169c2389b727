//! # fastener_core - Fastener Reference Data and Weight Engine
//!
//! `fastener_core` holds the catalog of fastener types, materials, dimension
//! tables, standards and HSN/GST codes, and computes piece weights from
//! closed-form geometry. All inputs and outputs are JSON-serializable so the
//! HTTP and terminal front ends stay thin.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Calculations are pure functions over an immutable store
//! - **JSON-First**: All request and result types implement Serialize
//! - **Rich Errors**: Structured error types that name the offending value
//!
//! ## Quick Start
//!
//! ```rust
//! use fastener_core::calculations::{calculate_pieces_from_weight, PiecesInput};
//! use fastener_core::catalog::ReferenceStore;
//!
//! let store = ReferenceStore::embedded();
//! store.load_all().unwrap();
//!
//! let input = PiecesInput {
//!     fastener_type_id: "hex_nut".to_string(),
//!     material_id: "mild_steel".to_string(),
//!     diameter: "M10".to_string(),
//!     length: None,
//!     weight_kg: 25.0,
//! };
//! let result = calculate_pieces_from_weight(&store, &input).unwrap();
//! assert!(result.total_pieces > 2000);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Reference data records and the lazily loaded store
//! - [`calculations`] - Shape formulas, weight/pieces conversion, diagram data
//! - [`equations`] - Solid volume formulas
//! - [`units`] - Type-safe unit wrappers and diameter parsing
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod equations;
pub mod errors;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use catalog::{DataSource, ReferenceStore};
pub use errors::{CalcError, CalcResult, ErrorKind};
