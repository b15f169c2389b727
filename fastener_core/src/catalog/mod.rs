//! # Fastener Catalog
//!
//! Static reference data: fastener types, materials, dimension tables,
//! standards and HSN/GST codes.
//!
//! ## Modules
//!
//! - [`records`] - Record types for the JSON datasets
//! - [`dimensions`] - Dimension rows and the family tables they live in
//! - [`store`] - [`ReferenceStore`], the lazily loaded read-only store
//! - [`standards`] - Built-in DIN/ISO/IS descriptions

pub mod dimensions;
pub mod records;
pub mod standards;
pub mod store;

pub use dimensions::{family_key, Dimension, DimensionFamily, DimensionLookup, NoDimensions, StandardRefs};
pub use records::{FastenerCategory, FastenerType, GstCategory, GstInfo, HsnCode, Material};
pub use standards::{
    builtin_standards, describe_standard, list_standards, standard_info, StandardInfo, StandardListing,
    StandardSystem,
};
pub use store::{DataSource, DimensionSheet, Record, ReferenceStore};
