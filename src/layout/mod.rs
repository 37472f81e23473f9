//! Layout representations
//!
//! A drilling layout locates the pin and the PSA relative to the bowler's PAP.
//! Pro shops describe the same physical drilling in three interchangeable ways:
//!
//! - **Dual Angle**: drilling angle, pin-to-PAP distance, VAL angle
//! - **VLS / Pin Buffer**: pin-to-PAP, PSA-to-PAP, pin buffer (pin to VAL)
//! - **2LS**: pin-to-PAP, PSA-to-PAP, pin-to-COG
//!
//! Dual Angle is the hub every conversion passes through. Converting to or
//! from 2LS needs the PAP because the COG sits at the grip center, so the
//! pin-to-COG arc depends on where the PAP is.

pub mod convert;
pub mod presets;

use std::fmt;

use crate::sphere::{pap_to_grip_angle, SurfacePoint};
use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

pub use convert::{
    dual_angle_to_two_ls, dual_angle_to_vls, two_ls_to_dual_angle, two_ls_to_vls,
    vls_to_dual_angle, vls_to_two_ls,
};

/// Bowler's Positive Axis Point, as offsets in inches from the grip center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pap {
    /// Horizontal offset (positive toward the bowler's side)
    pub over: f64,
    /// Vertical offset (positive above the grip center)
    pub up: f64,
}

impl Pap {
    pub fn new(over: f64, up: f64) -> Self {
        Pap { over, up }
    }

    /// Position on the unit sphere (latitude from `up`, longitude from `over`)
    pub fn surface_point(&self) -> SurfacePoint {
        SurfacePoint::from_offsets(self.over, self.up)
    }

    /// Angular separation in radians between the PAP and the grip center
    pub fn grip_angle(&self) -> f64 {
        pap_to_grip_angle(self.over, self.up)
    }

    pub(crate) fn ensure_finite(&self) -> Result<()> {
        ensure_finite("pap.over", self.over)?;
        ensure_finite("pap.up", self.up)
    }
}

/// Dual Angle layout: angles in degrees, distance in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualAngle {
    /// Drilling angle in degrees (between the pin-PAP line and the pin-PSA line)
    pub drill: f64,
    /// Pin to PAP arc in inches
    pub pin_to_pap: f64,
    /// VAL angle in degrees (between the VAL and the pin-PAP line)
    pub val: f64,
}

impl DualAngle {
    pub fn new(drill: f64, pin_to_pap: f64, val: f64) -> Self {
        DualAngle {
            drill,
            pin_to_pap,
            val,
        }
    }
}

/// VLS / Pin Buffer layout, all distances in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vls {
    pub pin_to_pap: f64,
    pub psa_to_pap: f64,
    /// Shortest arc from the pin to the VAL
    pub pin_buffer: f64,
}

impl Vls {
    pub fn new(pin_to_pap: f64, psa_to_pap: f64, pin_buffer: f64) -> Self {
        Vls {
            pin_to_pap,
            psa_to_pap,
            pin_buffer,
        }
    }
}

/// 2LS layout, all distances in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoLs {
    pub pin_to_pap: f64,
    pub psa_to_pap: f64,
    /// Pin to COG (grip center) arc
    pub pin_to_cog: f64,
}

impl TwoLs {
    pub fn new(pin_to_pap: f64, psa_to_pap: f64, pin_to_cog: f64) -> Self {
        TwoLs {
            pin_to_pap,
            psa_to_pap,
            pin_to_cog,
        }
    }
}

/// The three layout systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutSystem {
    DualAngle,
    Vls,
    TwoLs,
}

impl LayoutSystem {
    /// All systems in display order
    pub const ALL: [LayoutSystem; 3] = [LayoutSystem::DualAngle, LayoutSystem::Vls, LayoutSystem::TwoLs];

    /// Get the system's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            LayoutSystem::DualAngle => "Dual Angle",
            LayoutSystem::Vls => "Pin Buffer (VLS)",
            LayoutSystem::TwoLs => "2LS",
        }
    }

    /// Names and units of the three fields, in value order
    pub fn fields(&self) -> [(&'static str, Unit); 3] {
        match self {
            LayoutSystem::DualAngle => [
                ("drill", Unit::Degrees),
                ("pin_to_pap", Unit::Inches),
                ("val", Unit::Degrees),
            ],
            LayoutSystem::Vls => [
                ("pin_to_pap", Unit::Inches),
                ("psa_to_pap", Unit::Inches),
                ("pin_buffer", Unit::Inches),
            ],
            LayoutSystem::TwoLs => [
                ("pin_to_pap", Unit::Inches),
                ("psa_to_pap", Unit::Inches),
                ("pin_to_cog", Unit::Inches),
            ],
        }
    }
}

impl fmt::Display for LayoutSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unit of a layout field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Degrees,
    Inches,
}

/// A layout expressed in one of the three systems
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "system", rename_all = "snake_case")]
pub enum Layout {
    DualAngle(DualAngle),
    Vls(Vls),
    TwoLs(TwoLs),
}

impl Layout {
    /// Builds a layout from its three values in field order (see [`LayoutSystem::fields`])
    pub fn from_values(system: LayoutSystem, values: [f64; 3]) -> Self {
        let [a, b, c] = values;
        match system {
            LayoutSystem::DualAngle => Layout::DualAngle(DualAngle::new(a, b, c)),
            LayoutSystem::Vls => Layout::Vls(Vls::new(a, b, c)),
            LayoutSystem::TwoLs => Layout::TwoLs(TwoLs::new(a, b, c)),
        }
    }

    /// The three values in field order
    pub fn values(&self) -> [f64; 3] {
        match self {
            Layout::DualAngle(da) => [da.drill, da.pin_to_pap, da.val],
            Layout::Vls(vls) => [vls.pin_to_pap, vls.psa_to_pap, vls.pin_buffer],
            Layout::TwoLs(two) => [two.pin_to_pap, two.psa_to_pap, two.pin_to_cog],
        }
    }

    pub fn system(&self) -> LayoutSystem {
        match self {
            Layout::DualAngle(_) => LayoutSystem::DualAngle,
            Layout::Vls(_) => LayoutSystem::Vls,
            Layout::TwoLs(_) => LayoutSystem::TwoLs,
        }
    }

    /// Pin to PAP distance, which every system carries
    pub fn pin_to_pap(&self) -> f64 {
        match self {
            Layout::DualAngle(da) => da.pin_to_pap,
            Layout::Vls(vls) => vls.pin_to_pap,
            Layout::TwoLs(two) => two.pin_to_pap,
        }
    }

    /// Converts this layout into `target`
    ///
    /// `pap` is required whenever 2LS is the source or the target and ignored
    /// otherwise. Converting into the layout's own system returns it unchanged.
    pub fn convert(&self, target: LayoutSystem, pap: Option<&Pap>) -> Result<Layout> {
        match target {
            LayoutSystem::DualAngle => self.to_dual_angle(pap).map(Layout::DualAngle),
            LayoutSystem::Vls => self.to_vls(pap).map(Layout::Vls),
            LayoutSystem::TwoLs => match (self, pap) {
                (Layout::TwoLs(two), _) => Ok(Layout::TwoLs(*two)),
                (_, Some(pap)) => self.to_two_ls(pap).map(Layout::TwoLs),
                (_, None) => Err(self.pap_required(target)),
            },
        }
    }

    /// The Dual Angle description of this layout
    pub fn to_dual_angle(&self, pap: Option<&Pap>) -> Result<DualAngle> {
        match (self, pap) {
            (Layout::DualAngle(da), _) => Ok(*da),
            (Layout::Vls(vls), _) => vls_to_dual_angle(vls),
            (Layout::TwoLs(two), Some(pap)) => two_ls_to_dual_angle(two, pap),
            (Layout::TwoLs(_), None) => Err(self.pap_required(LayoutSystem::DualAngle)),
        }
    }

    /// The VLS description of this layout
    pub fn to_vls(&self, pap: Option<&Pap>) -> Result<Vls> {
        match (self, pap) {
            (Layout::DualAngle(da), _) => dual_angle_to_vls(da),
            (Layout::Vls(vls), _) => Ok(*vls),
            (Layout::TwoLs(two), Some(pap)) => two_ls_to_vls(two, pap),
            (Layout::TwoLs(_), None) => Err(self.pap_required(LayoutSystem::Vls)),
        }
    }

    /// The 2LS description of this layout relative to `pap`
    pub fn to_two_ls(&self, pap: &Pap) -> Result<TwoLs> {
        match self {
            Layout::DualAngle(da) => dual_angle_to_two_ls(da, pap),
            Layout::Vls(vls) => vls_to_two_ls(vls, pap),
            Layout::TwoLs(two) => Ok(*two),
        }
    }

    fn pap_required(&self, to: LayoutSystem) -> LayoutError {
        LayoutError::PapRequired {
            from: self.system(),
            to,
        }
    }
}

impl From<DualAngle> for Layout {
    fn from(da: DualAngle) -> Self {
        Layout::DualAngle(da)
    }
}

impl From<Vls> for Layout {
    fn from(vls: Vls) -> Self {
        Layout::Vls(vls)
    }
}

impl From<TwoLs> for Layout {
    fn from(two: TwoLs) -> Self {
        Layout::TwoLs(two)
    }
}

pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::InvalidInput(format!("{} is not a finite number ({})", name, value)))
    }
}
