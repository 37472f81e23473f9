//! Physical plausibility checks for layouts
//!
//! The pin, the PAP and the COG (grip center) form a spherical triangle, so the
//! pin-to-COG arc is bounded by the other two sides:
//!
//! `|pin_to_pap - pap_to_grip| <= pin_to_cog <= min(pin_to_pap + pap_to_grip, 6.75)`
//!
//! A small tolerance absorbs the rounding of hand-measured layouts. Checks never
//! fail loudly; they report a [`GeometryWarning`] for the caller to surface.

use crate::constants::{MAX_SURFACE_DISTANCE, PLAUSIBILITY_TOLERANCE};
use crate::layout::{Layout, Pap};
use crate::sphere::inch_from_rad;
use crate::LayoutError;
use thiserror::Error;

/// Why a layout cannot exist on a real ball
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryWarning {
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} = {value} is outside [0, {max}]", max = MAX_SURFACE_DISTANCE)]
    OutOfRange { field: &'static str, value: f64 },

    #[error("pin to COG {pin_to_cog} is outside the reachable range [{min}, {max}]")]
    Unreachable { pin_to_cog: f64, min: f64, max: f64 },

    #[error("layout has no 2LS form: {0}")]
    Undefined(#[from] LayoutError),
}

/// Triangle-inequality check with a configurable tolerance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlausibilityCheck {
    tolerance: f64,
}

impl PlausibilityCheck {
    /// Create a check with the default tolerance of 0.05in
    pub fn new() -> Self {
        Self {
            tolerance: PLAUSIBILITY_TOLERANCE,
        }
    }

    /// Set a custom tolerance in inches
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Checks a pin-to-PAP / pin-to-COG pair against a PAP position
    pub fn assess(&self, pin_to_pap: f64, pin_to_cog: f64, pap: &Pap) -> Result<(), GeometryWarning> {
        for (field, value) in [
            ("pin_to_pap", pin_to_pap),
            ("pin_to_cog", pin_to_cog),
            ("pap.over", pap.over),
            ("pap.up", pap.up),
        ] {
            if !value.is_finite() {
                return Err(GeometryWarning::NotFinite { field });
            }
        }
        check_distance("pin_to_pap", pin_to_pap)?;
        check_distance("pin_to_cog", pin_to_cog)?;

        let pap_to_grip = inch_from_rad(pap.grip_angle());
        let min = (pin_to_pap - pap_to_grip).abs();
        let max = (pin_to_pap + pap_to_grip).min(MAX_SURFACE_DISTANCE);

        if pin_to_cog < min - self.tolerance || pin_to_cog > max + self.tolerance {
            return Err(GeometryWarning::Unreachable { pin_to_cog, min, max });
        }
        Ok(())
    }

    /// Boolean form of [`PlausibilityCheck::assess`]
    pub fn is_plausible(&self, pin_to_pap: f64, pin_to_cog: f64, pap: &Pap) -> bool {
        self.assess(pin_to_pap, pin_to_cog, pap).is_ok()
    }

    /// Checks a layout in any system by way of its 2LS form relative to `pap`
    pub fn assess_layout(&self, layout: &Layout, pap: &Pap) -> Result<(), GeometryWarning> {
        let two = layout.to_two_ls(pap)?;
        check_distance("psa_to_pap", two.psa_to_pap)?;
        self.assess(two.pin_to_pap, two.pin_to_cog, pap)
    }
}

impl Default for PlausibilityCheck {
    fn default() -> Self {
        Self::new()
    }
}

fn check_distance(field: &'static str, value: f64) -> Result<(), GeometryWarning> {
    if !value.is_finite() {
        Err(GeometryWarning::NotFinite { field })
    } else if !(0.0..=MAX_SURFACE_DISTANCE).contains(&value) {
        Err(GeometryWarning::OutOfRange { field, value })
    } else {
        Ok(())
    }
}

/// Whether a pin-to-PAP / pin-to-COG pair can exist for a PAP at (`pap_over`, `pap_up`)
///
/// Uses the default 0.05in tolerance. Never panics; non-finite inputs and
/// distances outside `[0, 6.75]` are simply implausible.
pub fn is_plausible(pin_to_pap: f64, pin_to_cog: f64, pap_over: f64, pap_up: f64) -> bool {
    PlausibilityCheck::default().is_plausible(pin_to_pap, pin_to_cog, &Pap::new(pap_over, pap_up))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DualAngle, TwoLs};
    use rstest::rstest;

    #[rstest]
    #[case(4.0, 4.0, 5.0, 1.0, true)]
    #[case(0.1, 6.75, 0.0, 0.0, false)]
    #[case(4.0, 4.0, 0.0, 0.0, true)]
    #[case(4.0, 4.04, 0.0, 0.0, true)]
    #[case(4.0, 4.1, 0.0, 0.0, false)]
    #[case(6.75, 6.75, 5.0, 1.0, true)]
    #[case(-0.5, 4.0, 5.0, 1.0, false)]
    #[case(4.0, 7.0, 5.0, 1.0, false)]
    #[case(f64::NAN, 4.0, 5.0, 1.0, false)]
    #[case(4.0, 4.0, f64::NAN, 1.0, false)]
    #[case(4.0, 4.0, f64::INFINITY, 1.0, false)]
    #[case(0.1, 6.75, 0.0, f64::NEG_INFINITY, false)]
    #[case(f64::INFINITY, 4.0, 5.0, 1.0, false)]
    fn test_is_plausible(
        #[case] pin: f64,
        #[case] cog: f64,
        #[case] over: f64,
        #[case] up: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(is_plausible(pin, cog, over, up), expected);
    }

    #[test]
    fn test_warning_kinds() {
        let check = PlausibilityCheck::default();
        let grip = Pap::new(0.0, 0.0);

        assert_eq!(
            check.assess(f64::NAN, 1.0, &grip),
            Err(GeometryWarning::NotFinite { field: "pin_to_pap" })
        );
        assert_eq!(
            check.assess(4.0, 4.0, &Pap::new(5.0, f64::INFINITY)),
            Err(GeometryWarning::NotFinite { field: "pap.up" })
        );
        assert_eq!(
            check.assess(7.0, 1.0, &grip),
            Err(GeometryWarning::OutOfRange {
                field: "pin_to_pap",
                value: 7.0
            })
        );
        assert!(matches!(
            check.assess(0.1, 6.75, &grip),
            Err(GeometryWarning::Unreachable { .. })
        ));
    }

    #[test]
    fn test_custom_tolerance() {
        let grip = Pap::new(0.0, 0.0);
        let strict = PlausibilityCheck::new().with_tolerance(0.0);
        let loose = PlausibilityCheck::new().with_tolerance(0.5);

        assert_eq!(PlausibilityCheck::new().tolerance(), 0.05);
        assert!(!strict.is_plausible(4.0, 4.04, &grip));
        assert!(loose.is_plausible(4.0, 4.4, &grip));
    }

    #[test]
    fn test_converted_layouts_are_plausible() {
        let pap = Pap::new(5.0, 1.0);
        let check = PlausibilityCheck::default();
        let layout = Layout::DualAngle(DualAngle::new(40.0, 4.0, 55.0));
        assert_eq!(check.assess_layout(&layout, &pap), Ok(()));
    }

    #[test]
    fn test_assess_layout_reports_undefined() {
        let pap = Pap::new(5.0, 1.0);
        let layout = Layout::TwoLs(TwoLs::new(0.0, 4.0, 4.0));
        // 2LS -> 2LS is the identity, so the triangle check runs directly
        assert!(PlausibilityCheck::default().assess_layout(&layout, &pap).is_err());

        let vls = Layout::Vls(crate::layout::Vls::new(0.0, 4.0, 2.0));
        assert!(matches!(
            PlausibilityCheck::default().assess_layout(&vls, &pap),
            Err(GeometryWarning::Undefined(LayoutError::UndefinedLayout(_)))
        ));
    }

    #[test]
    fn test_warning_messages() {
        let warning = GeometryWarning::OutOfRange {
            field: "pin_to_cog",
            value: 7.0,
        };
        assert_eq!(warning.to_string(), "pin_to_cog = 7 is outside [0, 6.75]");
    }
}
