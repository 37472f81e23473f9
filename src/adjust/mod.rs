//! # PAP Relocation
//!
//! Holes already drilled stay where they are when a bowler's PAP moves, but the
//! layout that describes them changes because every layout is measured from
//! the PAP. This module re-expresses a Dual Angle layout relative to a new PAP.
//!
//! ## Method
//!
//! The ball surface is treated as a unit sphere, with each PAP placed at
//! latitude `up` and longitude `over` (both as arcs from the grip center).
//!
//! 1. Direct problem from the old PAP: walk `pin_to_pap` along a bearing of
//!    `-val` to find the pin.
//! 2. Inverse problem from the new PAP: the haversine distance to the pin is
//!    the new pin-to-PAP, and the minor angle between the new PAP's meridian
//!    and its bearing to the pin is the new VAL angle.
//! 3. The bearing from the pin back to the old PAP plus the old drilling angle
//!    is the bearing from the pin to the PSA; walking the fixed pin-to-PSA arc
//!    along it locates the PSA.
//! 4. The angle at the pin between the new PAP and the PSA is the new drilling
//!    angle, reported both signed (for choosing a rotation sense) and absolute.
//!
//! ## Poles
//!
//! A PAP exactly on a pole (`up = ±6.75`) has no unique meridian; its VAL is
//! then measured from the meridian of its own `over` offset (see
//! [`SurfacePoint`]). A pin that lands on a pole needs no fallback because the
//! drilling angle is the difference of two bearings taken in the same frame.

use crate::constants::{MAX_LAYOUT_ANGLE, PIN_TO_PSA_DISTANCE};
use crate::layout::{ensure_finite, DualAngle, Layout, Pap};
use crate::sphere::{inch_from_rad, normalize_signed, rad_from_inch, SurfacePoint};
use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Dual Angle layout seen from a relocated PAP
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PapAdjustment {
    /// Drilling angle in degrees, in `[0, 180]`
    pub drill: f64,
    /// Drilling angle in degrees with its sense, in `(-180, 180]`
    pub drill_signed: f64,
    /// Pin to new PAP in inches
    pub pin_to_pap: f64,
    /// VAL angle in degrees, in `[0, 90]`
    pub val: f64,
}

impl PapAdjustment {
    /// The adjusted layout as a plain Dual Angle
    pub fn dual_angle(&self) -> DualAngle {
        DualAngle::new(self.drill, self.pin_to_pap, self.val)
    }
}

impl From<PapAdjustment> for DualAngle {
    fn from(adjustment: PapAdjustment) -> Self {
        adjustment.dual_angle()
    }
}

/// Absolute positions of the layout's reference points on the unit sphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoints {
    pub pap: SurfacePoint,
    pub pin: SurfacePoint,
    pub psa: SurfacePoint,
}

impl LayoutPoints {
    /// Locates the pin and PSA of `layout` measured from `pap`
    pub fn locate(pap: &Pap, layout: &DualAngle) -> LayoutPoints {
        let pap = pap.surface_point();
        let pin = pap.destination(rad_from_inch(layout.pin_to_pap), -layout.val.to_radians());

        let bearing_to_psa = pin.bearing_to(&pap) + layout.drill.to_radians();
        let psa = pin.destination(rad_from_inch(PIN_TO_PSA_DISTANCE), bearing_to_psa);

        LayoutPoints { pap, pin, psa }
    }

    /// Describes the pin and PSA as a Dual Angle layout measured from `new_pap`
    pub fn describe_from(&self, new_pap: &Pap) -> PapAdjustment {
        let new_pap = new_pap.surface_point();

        let pin_to_pap = inch_from_rad(new_pap.central_angle_to(&self.pin));

        let bearing = new_pap.bearing_to(&self.pin);
        let val = bearing.abs().min((PI - bearing.abs()).abs()).to_degrees().min(MAX_LAYOUT_ANGLE);

        let bearing_to_pap = self.pin.bearing_to(&new_pap);
        let bearing_to_psa = self.pin.bearing_to(&self.psa);
        let drill_signed = normalize_signed(bearing_to_psa - bearing_to_pap).to_degrees();

        PapAdjustment {
            drill: drill_signed.abs(),
            drill_signed,
            pin_to_pap,
            val,
        }
    }
}

/// Re-expresses `layout`, measured from `old_pap`, relative to `new_pap`
///
/// The pin and PSA stay fixed on the ball; only the reference point moves.
/// With `new_pap == old_pap` the input layout comes back unchanged (to
/// rounding).
pub fn adjust_pap(old_pap: &Pap, layout: &DualAngle, new_pap: &Pap) -> Result<PapAdjustment> {
    old_pap.ensure_finite()?;
    new_pap.ensure_finite()?;
    ensure_finite("drill", layout.drill)?;
    ensure_finite("pin_to_pap", layout.pin_to_pap)?;
    ensure_finite("val", layout.val)?;

    let adjustment = LayoutPoints::locate(old_pap, layout).describe_from(new_pap);
    log::debug!(
        "PAP ({}, {}) -> ({}, {}): {:?} -> {:?}",
        old_pap.over,
        old_pap.up,
        new_pap.over,
        new_pap.up,
        layout,
        adjustment
    );

    let values = [
        adjustment.drill,
        adjustment.drill_signed,
        adjustment.pin_to_pap,
        adjustment.val,
    ];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(LayoutError::UndefinedLayout(format!(
            "PAP adjustment produced non-finite values {:?}",
            adjustment
        )));
    }
    Ok(adjustment)
}

/// Adjusts a layout in any system for a PAP move, returning it in the same system
///
/// The layout is read as Dual Angle relative to `old_pap`, relocated, and
/// written back relative to `new_pap`.
pub fn adjust_layout(old_pap: &Pap, layout: &Layout, new_pap: &Pap) -> Result<Layout> {
    adjust_layout_signed(old_pap, layout, new_pap).map(|(adjusted, _)| adjusted)
}

/// Same as [`adjust_layout`] but also returns the signed drilling angle for renderers
pub fn adjust_layout_signed(old_pap: &Pap, layout: &Layout, new_pap: &Pap) -> Result<(Layout, f64)> {
    let da = layout.to_dual_angle(Some(old_pap))?;
    let adjusted = adjust_pap(old_pap, &da, new_pap)?;
    let converted = Layout::DualAngle(adjusted.dual_angle()).convert(layout.system(), Some(new_pap))?;
    Ok((converted, adjusted.drill_signed))
}
