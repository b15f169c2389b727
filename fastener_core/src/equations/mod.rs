//! # Geometry Equations
//!
//! Pure volume formulas for the solids fastener shapes are built from.
//! Keeping them in one place makes each shape formula in
//! [`crate::calculations::shapes`] read as a sum of named parts.
//!
//! ## Modules
//!
//! - [`solids`] - Cylinders, prisms, rings, cones and domes (mm in, mm³ out)

pub mod solids;

pub use solids::{
    annulus_volume,
    cone_volume,
    cylinder_volume,
    hemisphere_volume,
    hex_prism_volume,
    split_ring_volume,
    square_prism_volume,
    torus_volume,
    HEX_AREA_FACTOR,
};
