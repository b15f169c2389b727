//! # Shape Formulas
//!
//! One closed-form volume model per fastener type. [`ShapeFormula::from_id`]
//! is the registry: a catalog type id with no variant here has no
//! calculation method.
//!
//! Each formula parses nothing itself. It receives a [`NominalDiameter`],
//! looks up its family table for that exact designation and, when the row
//! (or a field of it) is missing, falls back to fixed multiples of `d`. The
//! fallback never fails, so every formula yields a weight from `d` alone.
//!
//! ## Volume Models
//!
//! | Formula | Model | Fallback ratios |
//! |---|---|---|
//! | hex bolt (both) | shank + hex head | s = 1.5d, k = 0.7d |
//! | socket head cap screw | shank + round head − socket | dk = 1.5d, k = d |
//! | stud / anchor / set screw | plain cylinder | - |
//! | carriage bolt | dome r = 1.2d + square neck 1.1d × 0.5d + shank | - |
//! | eye bolt | shank + torus (outer 3d, wire d) | - |
//! | flange bolt | hex bolt + flange (2.5d / 1.5d × 0.15d) | - |
//! | hex nut | hex prism − bore | s = 1.5d, m = 0.8d |
//! | lock / wing / castle / thin nut | hex nut × 1.1 / 1.5 / 1.0 / 0.6 | - |
//! | flange nut | hex nut + flange (2.2d / 1.5d × 0.15d) | - |
//! | plain washer | annulus | d1 = 1.05d, d2 = 2d, h = 0.15d |
//! | heavy duty washer | plain washer × 1.5 | - |
//! | spring washer | split ring | d1 = 1.02d, d2 = 1.8d, h = 0.25d |
//! | machine / self-tapping screw | shank + 0.8 × head (1.8d × 0.6d) | - |
//! | wood screw | cone shank + cone head (2d × 0.5d) | - |
//!
//! The eye bolt torus, the castle nut factor and the straight anchor bolt
//! are trade approximations and are kept as such.

use serde::{Deserialize, Serialize};

use crate::catalog::{Dimension, DimensionFamily, DimensionLookup};
use crate::equations::{
    annulus_volume, cone_volume, cylinder_volume, hemisphere_volume, hex_prism_volume, split_ring_volume,
    square_prism_volume, torus_volume,
};
use crate::errors::{CalcError, CalcResult};
use crate::units::{CubicCentimeters, CubicMillimeters, Grams, GramsPerCm3, NominalDiameter};

/// Weight formula for one fastener type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeFormula {
    HexBolt,
    HexBoltFullThread,
    SocketHeadCapScrew,
    StudBolt,
    CarriageBolt,
    EyeBolt,
    FlangeBolt,
    AnchorBolt,
    HexNut,
    LockNut,
    FlangeNut,
    WingNut,
    CastleNut,
    ThinHexNut,
    PlainWasher,
    SpringWasher,
    HeavyDutyWasher,
    MachineScrew,
    SelfTappingScrew,
    WoodScrew,
    SetScrew,
}

impl ShapeFormula {
    pub const ALL: [ShapeFormula; 21] = [
        ShapeFormula::HexBolt,
        ShapeFormula::HexBoltFullThread,
        ShapeFormula::SocketHeadCapScrew,
        ShapeFormula::StudBolt,
        ShapeFormula::CarriageBolt,
        ShapeFormula::EyeBolt,
        ShapeFormula::FlangeBolt,
        ShapeFormula::AnchorBolt,
        ShapeFormula::HexNut,
        ShapeFormula::LockNut,
        ShapeFormula::FlangeNut,
        ShapeFormula::WingNut,
        ShapeFormula::CastleNut,
        ShapeFormula::ThinHexNut,
        ShapeFormula::PlainWasher,
        ShapeFormula::SpringWasher,
        ShapeFormula::HeavyDutyWasher,
        ShapeFormula::MachineScrew,
        ShapeFormula::SelfTappingScrew,
        ShapeFormula::WoodScrew,
        ShapeFormula::SetScrew,
    ];

    /// Fastener type id this formula is registered under
    pub fn id(&self) -> &'static str {
        match self {
            ShapeFormula::HexBolt => "hex_bolt",
            ShapeFormula::HexBoltFullThread => "hex_bolt_full_thread",
            ShapeFormula::SocketHeadCapScrew => "socket_head_cap_screw",
            ShapeFormula::StudBolt => "stud_bolt",
            ShapeFormula::CarriageBolt => "carriage_bolt",
            ShapeFormula::EyeBolt => "eye_bolt",
            ShapeFormula::FlangeBolt => "flange_bolt",
            ShapeFormula::AnchorBolt => "anchor_bolt",
            ShapeFormula::HexNut => "hex_nut",
            ShapeFormula::LockNut => "lock_nut",
            ShapeFormula::FlangeNut => "flange_nut",
            ShapeFormula::WingNut => "wing_nut",
            ShapeFormula::CastleNut => "castle_nut",
            ShapeFormula::ThinHexNut => "thin_hex_nut",
            ShapeFormula::PlainWasher => "plain_washer",
            ShapeFormula::SpringWasher => "spring_washer",
            ShapeFormula::HeavyDutyWasher => "heavy_duty_washer",
            ShapeFormula::MachineScrew => "machine_screw",
            ShapeFormula::SelfTappingScrew => "self_tapping_screw",
            ShapeFormula::WoodScrew => "wood_screw",
            ShapeFormula::SetScrew => "set_screw",
        }
    }

    /// Registry lookup by fastener type id
    pub fn from_id(fastener_type_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|formula| formula.id() == fastener_type_id)
    }

    /// Registry lookup that reports a missing formula as an error
    pub fn for_type(fastener_type_id: &str) -> CalcResult<Self> {
        Self::from_id(fastener_type_id).ok_or_else(|| CalcError::no_calculation_method(fastener_type_id))
    }

    /// Whether the volume depends on length
    pub fn needs_length(&self) -> bool {
        !matches!(
            self,
            ShapeFormula::HexNut
                | ShapeFormula::LockNut
                | ShapeFormula::FlangeNut
                | ShapeFormula::WingNut
                | ShapeFormula::CastleNut
                | ShapeFormula::ThinHexNut
                | ShapeFormula::PlainWasher
                | ShapeFormula::SpringWasher
                | ShapeFormula::HeavyDutyWasher
        )
    }

    /// Dimension table the formula reads, `None` for ratio-only models
    pub fn table(&self) -> Option<DimensionFamily> {
        match self {
            ShapeFormula::HexBolt | ShapeFormula::HexBoltFullThread | ShapeFormula::FlangeBolt => {
                Some(DimensionFamily::HexBolt)
            }
            ShapeFormula::SocketHeadCapScrew => Some(DimensionFamily::SocketHeadCapScrew),
            ShapeFormula::HexNut
            | ShapeFormula::LockNut
            | ShapeFormula::FlangeNut
            | ShapeFormula::WingNut
            | ShapeFormula::CastleNut
            | ShapeFormula::ThinHexNut => Some(DimensionFamily::HexNut),
            ShapeFormula::PlainWasher | ShapeFormula::HeavyDutyWasher => Some(DimensionFamily::PlainWasher),
            ShapeFormula::SpringWasher => Some(DimensionFamily::SpringWasher),
            ShapeFormula::StudBolt
            | ShapeFormula::CarriageBolt
            | ShapeFormula::EyeBolt
            | ShapeFormula::AnchorBolt
            | ShapeFormula::MachineScrew
            | ShapeFormula::SelfTappingScrew
            | ShapeFormula::WoodScrew
            | ShapeFormula::SetScrew => None,
        }
    }

    /// One-line description of the volume model
    pub fn model(&self) -> &'static str {
        match self {
            ShapeFormula::HexBolt | ShapeFormula::HexBoltFullThread => "shank cylinder + hexagonal head",
            ShapeFormula::SocketHeadCapScrew => "shank cylinder + cylindrical head - hex socket",
            ShapeFormula::StudBolt | ShapeFormula::AnchorBolt => "plain cylinder",
            ShapeFormula::CarriageBolt => "dome head + square neck + shank",
            ShapeFormula::EyeBolt => "shank cylinder + torus eye",
            ShapeFormula::FlangeBolt => "hex bolt + flange ring",
            ShapeFormula::HexNut => "hexagonal prism - threaded bore",
            ShapeFormula::LockNut => "hex nut x 1.1",
            ShapeFormula::FlangeNut => "hex nut + flange ring",
            ShapeFormula::WingNut => "hex nut x 1.5",
            ShapeFormula::CastleNut => "hex nut x 1.0",
            ShapeFormula::ThinHexNut => "hex nut x 0.6",
            ShapeFormula::PlainWasher => "flat annulus",
            ShapeFormula::SpringWasher => "split ring, rectangular section",
            ShapeFormula::HeavyDutyWasher => "plain washer x 1.5",
            ShapeFormula::MachineScrew | ShapeFormula::SelfTappingScrew => "shank cylinder + pan head x 0.8",
            ShapeFormula::WoodScrew => "tapered shank cone + countersunk head cone",
            ShapeFormula::SetScrew => "headless cylinder",
        }
    }

    /// Solid volume of one piece.
    ///
    /// `length` is ignored by formulas that do not need it; a formula that
    /// needs it fails with `LengthRequired` when it is absent.
    pub fn volume<D>(&self, dims: &D, diameter: &NominalDiameter, length: Option<f64>) -> CalcResult<CubicMillimeters>
    where
        D: DimensionLookup + ?Sized,
    {
        let d = diameter.mm();
        let length = match (self.needs_length(), length) {
            (true, None) => return Err(CalcError::length_required(self.id())),
            (_, l) => l.unwrap_or(0.0),
        };
        let row = match self.table() {
            Some(family) => dims.dimension_row(family, diameter.designation())?,
            None => None,
        };

        let volume = match self {
            ShapeFormula::HexBolt | ShapeFormula::HexBoltFullThread => hex_bolt(row, d, length),
            ShapeFormula::SocketHeadCapScrew => socket_head_cap_screw(row, d, length),
            ShapeFormula::StudBolt | ShapeFormula::AnchorBolt | ShapeFormula::SetScrew => {
                cylinder_volume(d, length)
            }
            ShapeFormula::CarriageBolt => carriage_bolt(d, length),
            ShapeFormula::EyeBolt => cylinder_volume(d, length) + torus_volume(d, 3.0 * d),
            ShapeFormula::FlangeBolt => {
                hex_bolt(row, d, length) + annulus_volume(2.5 * d, 1.5 * d, 0.15 * d)
            }
            ShapeFormula::HexNut => hex_nut(row, d),
            ShapeFormula::LockNut => hex_nut(row, d) * 1.1,
            ShapeFormula::FlangeNut => hex_nut(row, d) + annulus_volume(2.2 * d, 1.5 * d, 0.15 * d),
            ShapeFormula::WingNut => hex_nut(row, d) * 1.5,
            ShapeFormula::CastleNut => hex_nut(row, d),
            ShapeFormula::ThinHexNut => hex_nut(row, d) * 0.6,
            ShapeFormula::PlainWasher => plain_washer(row, d),
            ShapeFormula::HeavyDutyWasher => plain_washer(row, d) * 1.5,
            ShapeFormula::SpringWasher => spring_washer(row, d),
            ShapeFormula::MachineScrew | ShapeFormula::SelfTappingScrew => {
                cylinder_volume(d, length) + cylinder_volume(1.8 * d, 0.6 * d) * 0.8
            }
            ShapeFormula::WoodScrew => cone_volume(d, length) + cone_volume(2.0 * d, 0.5 * d),
        };
        Ok(volume)
    }

    /// Mass of one piece: volume (cm³) × density
    pub fn unit_weight<D>(
        &self,
        dims: &D,
        diameter: &NominalDiameter,
        length: Option<f64>,
        density: GramsPerCm3,
    ) -> CalcResult<Grams>
    where
        D: DimensionLookup + ?Sized,
    {
        let volume: CubicCentimeters = self.volume(dims, diameter, length)?.into();
        Ok(volume * density)
    }
}

impl std::fmt::Display for ShapeFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

// =============================================================================
// BASE SHAPES
// =============================================================================

fn hex_bolt(row: Option<&Dimension>, d: f64, length: f64) -> CubicMillimeters {
    let s = row.and_then(|r| r.head_across_flats).unwrap_or(1.5 * d);
    let k = row.and_then(|r| r.head_height).unwrap_or(0.7 * d);
    cylinder_volume(d, length) + hex_prism_volume(s, k)
}

fn socket_head_cap_screw(row: Option<&Dimension>, d: f64, length: f64) -> CubicMillimeters {
    let head_d = row.and_then(|r| r.head_diameter).unwrap_or(1.5 * d);
    let head_h = row.and_then(|r| r.head_height).unwrap_or(d);
    let socket = cylinder_volume(0.6 * head_d, 0.8 * head_h);
    cylinder_volume(d, length) + cylinder_volume(head_d, head_h) - socket
}

fn carriage_bolt(d: f64, length: f64) -> CubicMillimeters {
    let neck_height = 0.5 * d;
    let shank_length = (length - neck_height).max(0.0);
    hemisphere_volume(1.2 * d) + square_prism_volume(1.1 * d, neck_height) + cylinder_volume(d, shank_length)
}

fn hex_nut(row: Option<&Dimension>, d: f64) -> CubicMillimeters {
    let s = row.and_then(|r| r.across_flats).unwrap_or(1.5 * d);
    let m = row.and_then(|r| r.height).unwrap_or(0.8 * d);
    hex_prism_volume(s, m) - cylinder_volume(d, m)
}

fn plain_washer(row: Option<&Dimension>, d: f64) -> CubicMillimeters {
    let inner = row.and_then(|r| r.inner_diameter).unwrap_or(1.05 * d);
    let outer = row.and_then(|r| r.outer_diameter).unwrap_or(2.0 * d);
    let t = row.and_then(|r| r.thickness).unwrap_or(0.15 * d);
    annulus_volume(outer, inner, t)
}

fn spring_washer(row: Option<&Dimension>, d: f64) -> CubicMillimeters {
    let inner = row.and_then(|r| r.inner_diameter).unwrap_or(1.02 * d);
    let outer = row.and_then(|r| r.outer_diameter).unwrap_or(1.8 * d);
    let t = row.and_then(|r| r.thickness).unwrap_or(0.25 * d);
    split_ring_volume(outer, inner, t)
}
