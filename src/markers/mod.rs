//! # Marker Positions
//!
//! Cartesian positions of the layout's reference points, for a renderer that
//! draws markers on a ball. Nothing here draws; it only places points.
//!
//! ## Frame
//!
//! - **X**: to the bowler's right
//! - **Y**: up, through the pole reached by `up = 6.75`
//! - **Z**: out of the grip center toward the bowler
//!
//! The PAP sits at `(cos(up)·sin(over), sin(up), cos(up)·cos(over))`. Pin and
//! PSA come from [`LayoutPoints::locate`], so the markers always agree with
//! the PAP adjuster: the pin lies `pin_to_pap` from the PAP at a bearing of
//! `-val`, and the PSA a right angle from the pin at the pin→PAP bearing plus
//! the drilling angle.
//!
//! Left-handed layouts are the mirror image across the YZ plane.

use crate::adjust::LayoutPoints;
use crate::layout::{DualAngle, Layout, Pap};
use crate::Result;
use nalgebra::Vector3;

/// Bowling hand, which decides the mirror sense of the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hand {
    #[default]
    Right,
    Left,
}

/// Unit vectors of the markers a renderer places on the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMarkers {
    pub pap: Vector3<f64>,
    pub pin: Vector3<f64>,
    pub psa: Vector3<f64>,
    /// Previous PAP when showing a PAP adjustment
    pub old_pap: Option<Vector3<f64>>,
}

impl LayoutMarkers {
    /// Places the markers for a Dual Angle layout measured from `pap`
    ///
    /// `drill_signed`, when given, replaces `layout.drill` so that a drilling
    /// angle coming out of a PAP adjustment keeps its rotation sense.
    pub fn place(pap: &Pap, layout: &DualAngle, drill_signed: Option<f64>) -> LayoutMarkers {
        let drill = drill_signed.filter(|d| d.is_finite()).unwrap_or(layout.drill);
        let points = LayoutPoints::locate(pap, &DualAngle { drill, ..*layout });

        LayoutMarkers {
            pap: points.pap.to_unit_vector(),
            pin: points.pin.to_unit_vector(),
            psa: points.psa.to_unit_vector(),
            old_pap: None,
        }
    }

    /// Places the markers for a layout in any system
    pub fn for_layout(pap: &Pap, layout: &Layout) -> Result<LayoutMarkers> {
        let da = layout.to_dual_angle(Some(pap))?;
        Ok(Self::place(pap, &da, None))
    }

    /// Adds the previous PAP marker
    pub fn with_old_pap(mut self, old_pap: &Pap) -> Self {
        self.old_pap = Some(old_pap.surface_point().to_unit_vector());
        self
    }

    /// Mirrors the markers for the given hand
    pub fn for_hand(self, hand: Hand) -> Self {
        match hand {
            Hand::Right => self,
            Hand::Left => LayoutMarkers {
                pap: mirror_x(&self.pap),
                pin: mirror_x(&self.pin),
                psa: mirror_x(&self.psa),
                old_pap: self.old_pap.as_ref().map(mirror_x),
            },
        }
    }

    /// Scales every marker onto a sphere of `radius`
    pub fn scaled(&self, radius: f64) -> LayoutMarkers {
        LayoutMarkers {
            pap: self.pap * radius,
            pin: self.pin * radius,
            psa: self.psa * radius,
            old_pap: self.old_pap.map(|p| p * radius),
        }
    }
}

fn mirror_x(v: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(-v.x, v.y, v.z)
}
