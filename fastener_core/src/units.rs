//! # Unit Types
//!
//! Type-safe wrappers for the handful of metric units the weight engine
//! touches. They are plain f64 newtypes that serialize as bare numbers.
//!
//! ## Metric Units
//!
//! - Length: millimeters (mm)
//! - Volume: cubic millimeters (mm³), cubic centimeters (cm³)
//! - Density: grams per cubic centimeter (g/cm³)
//! - Mass: grams (g), kilograms (kg)
//!
//! Nothing outside mm/g/kg is supported. Thread sizes are always given as
//! metric designations such as `"M10"`, parsed by [`NominalDiameter`].
//!
//! ## Example
//!
//! ```rust
//! use fastener_core::units::{CubicCentimeters, CubicMillimeters, Grams, GramsPerCm3, Kilograms};
//!
//! let volume: CubicCentimeters = CubicMillimeters(5291.9).into();
//! let mass: Grams = volume * GramsPerCm3(7.85);
//! let kg: Kilograms = mass.into();
//! assert!((kg.0 - 0.04154).abs() < 1e-5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Volume
// ============================================================================

/// Volume in cubic millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMillimeters(pub f64);

/// Volume in cubic centimeters (1 cm³ = 1000 mm³)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicCentimeters(pub f64);

impl From<CubicMillimeters> for CubicCentimeters {
    fn from(mm3: CubicMillimeters) -> Self {
        CubicCentimeters(mm3.0 / 1000.0)
    }
}

impl From<CubicCentimeters> for CubicMillimeters {
    fn from(cm3: CubicCentimeters) -> Self {
        CubicMillimeters(cm3.0 * 1000.0)
    }
}

// ============================================================================
// Density and Mass
// ============================================================================

/// Density in grams per cubic centimeter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GramsPerCm3(pub f64);

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Grams> for Kilograms {
    fn from(g: Grams) -> Self {
        Kilograms(g.0 / 1000.0)
    }
}

impl From<Kilograms> for Grams {
    fn from(kg: Kilograms) -> Self {
        Grams(kg.0 * 1000.0)
    }
}

impl Mul<GramsPerCm3> for CubicCentimeters {
    type Output = Grams;
    fn mul(self, density: GramsPerCm3) -> Grams {
        Grams(self.0 * density.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(CubicMillimeters);
impl_arithmetic!(CubicCentimeters);
impl_arithmetic!(Grams);
impl_arithmetic!(Kilograms);

// ============================================================================
// Nominal Diameter
// ============================================================================

/// Metric thread designation such as `"M10"`.
///
/// Keeps the designation as given (for echoing back and for table lookup)
/// alongside the parsed nominal diameter in millimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalDiameter {
    designation: String,
    mm: f64,
}

impl NominalDiameter {
    /// Parse a designation: an `M` (either case) followed by a positive number.
    ///
    /// ```rust
    /// use fastener_core::units::NominalDiameter;
    ///
    /// let d = NominalDiameter::parse("m6").unwrap();
    /// assert_eq!(d.mm(), 6.0);
    /// assert!(NominalDiameter::parse("M").is_err());
    /// assert!(NominalDiameter::parse("10").is_err());
    /// ```
    pub fn parse(designation: &str) -> CalcResult<Self> {
        let trimmed = designation.trim();
        let number = trimmed
            .strip_prefix('M')
            .or_else(|| trimmed.strip_prefix('m'))
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "diameter",
                    designation,
                    "Diameter must be a metric size such as M10",
                )
            })?;

        let mm: f64 = number.parse().map_err(|_| {
            CalcError::invalid_input("diameter", designation, "Diameter size is not a number")
        })?;

        if !mm.is_finite() || mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "diameter",
                designation,
                "Diameter must be positive",
            ));
        }

        Ok(NominalDiameter {
            designation: trimmed.to_string(),
            mm,
        })
    }

    /// Nominal diameter in millimeters
    pub fn mm(&self) -> f64 {
        self.mm
    }

    /// The designation as supplied (trimmed)
    pub fn designation(&self) -> &str {
        &self.designation
    }
}

impl std::fmt::Display for NominalDiameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation)
    }
}

/// Round half away from zero to a fixed number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
