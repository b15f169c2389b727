//! # Solid Volume Formulas
//!
//! Closed-form volumes of the primitive solids that fastener shapes are
//! assembled from. All inputs are millimeters and all outputs are cubic
//! millimeters.
//!
//! ## Notation
//!
//! - `d` = diameter
//! - `s` = across flats of a hexagon
//! - `h` = height / length along the axis
//! - `t` = thickness
//! - `od`, `id` = outer and inner diameter of a ring
//!
//! These are the approximations used for trade weight tables, not exact
//! CAD volumes: threads, chamfers and fillets are ignored.

use std::f64::consts::PI;

use crate::units::CubicMillimeters;

/// Area factor for a regular hexagon measured across flats (√3/2 ≈ 0.866).
pub const HEX_AREA_FACTOR: f64 = 0.866;

// =============================================================================
// PRISMS AND CYLINDERS
// =============================================================================

/// Volume of a solid cylinder
///
/// # Formula
/// V = π/4 × d² × h
///
/// # Example
/// ```rust
/// use fastener_core::equations::solids::cylinder_volume;
///
/// // M10 shank, 50 mm long
/// let v = cylinder_volume(10.0, 50.0);
/// assert!((v.0 - 3926.99).abs() < 0.01);
/// ```
#[inline]
pub fn cylinder_volume(d: f64, h: f64) -> CubicMillimeters {
    CubicMillimeters(PI / 4.0 * d * d * h)
}

/// Volume of a regular hexagonal prism
///
/// ```text
///      ____
///     /    \
///    /      \  s (across flats)
///    \      /
///     \____/
/// ```
///
/// # Formula
/// V = 0.866 × s² × h
#[inline]
pub fn hex_prism_volume(s: f64, h: f64) -> CubicMillimeters {
    CubicMillimeters(HEX_AREA_FACTOR * s * s * h)
}

/// Volume of a square prism
///
/// # Formula
/// V = side² × h
#[inline]
pub fn square_prism_volume(side: f64, h: f64) -> CubicMillimeters {
    CubicMillimeters(side * side * h)
}

// =============================================================================
// RINGS
// =============================================================================

/// Volume of a flat annulus (washer disc)
///
/// # Formula
/// V = π/4 × (od² − id²) × t
#[inline]
pub fn annulus_volume(od: f64, id: f64, t: f64) -> CubicMillimeters {
    CubicMillimeters(PI / 4.0 * (od * od - id * id) * t)
}

/// Volume of a split ring with rectangular section (spring washer)
///
/// The ring is unrolled into a bar of length π × mean diameter.
///
/// # Formula
/// - mean = (od + id) / 2
/// - width = (od − id) / 2
/// - V = π × mean × width × t
#[inline]
pub fn split_ring_volume(od: f64, id: f64, t: f64) -> CubicMillimeters {
    let mean_diameter = (od + id) / 2.0;
    let width = (od - id) / 2.0;
    CubicMillimeters(PI * mean_diameter * width * t)
}

/// Volume of a torus as used for forged eyes
///
/// Uses the trade approximation V = π²/4 × wire² × outer, with the outer
/// diameter standing in for the centerline diameter.
#[inline]
pub fn torus_volume(wire_d: f64, outer_d: f64) -> CubicMillimeters {
    CubicMillimeters(PI * PI / 4.0 * wire_d * wire_d * outer_d)
}

// =============================================================================
// CONES AND DOMES
// =============================================================================

/// Volume of a right circular cone
///
/// # Formula
/// V = π/12 × d² × h
#[inline]
pub fn cone_volume(d: f64, h: f64) -> CubicMillimeters {
    CubicMillimeters(PI / 12.0 * d * d * h)
}

/// Volume of a hemisphere
///
/// # Formula
/// V = 2/3 × π × r³
#[inline]
pub fn hemisphere_volume(r: f64) -> CubicMillimeters {
    CubicMillimeters(2.0 / 3.0 * PI * r * r * r)
}
