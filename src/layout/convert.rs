//! Conversions between the three layout systems
//!
//! All six directions share one spherical triangle: PAP, pin and PSA, with the
//! PSA a right angle away from the pin. With `a` the pin-to-PAP arc:
//!
//! - `cos(psa_to_pap) = sin(a)·cos(drill)`
//! - `sin(pin_buffer) = sin(a)·sin(val)`
//!
//! The 2LS conversions add the COG at the grip center, `g` away from the PAP:
//!
//! - `cos(pin_to_cog) = cos(a)·cos(g) + sin(a)·sin(g)·sin(val)`
//!
//! Every inverse trig evaluation goes through the clamped helpers. Going from
//! VLS or 2LS back to angles divides by `sin(a)`, which is undefined when the
//! pin sits on the PAP; that case is reported as [`LayoutError::UndefinedLayout`].

use super::{ensure_finite, DualAngle, Pap, TwoLs, Vls};
use crate::constants::DEGENERATE_EPSILON;
use crate::sphere::{acos_clamped, asin_clamped, inch_from_rad, rad_from_inch};
use crate::{LayoutError, Result};

/// Pin-to-PAP central angle and its sine, rejecting a pin on the PAP
fn pin_angle(pin_to_pap: f64) -> Result<(f64, f64)> {
    let alpha_pin = rad_from_inch(pin_to_pap);
    let sin_pin = alpha_pin.sin();
    if sin_pin.abs() < DEGENERATE_EPSILON {
        return Err(LayoutError::UndefinedLayout(format!(
            "pin to PAP distance {} leaves the pin on the PAP axis",
            pin_to_pap
        )));
    }
    Ok((alpha_pin, sin_pin))
}

fn defined(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutError::UndefinedLayout(format!("{} evaluated to {}", name, value)))
    }
}

fn psa_to_pap_from_drill(alpha_pin: f64, drill: f64) -> f64 {
    inch_from_rad(acos_clamped(alpha_pin.sin() * drill.to_radians().cos()))
}

fn drill_from_psa_to_pap(sin_pin: f64, psa_to_pap: f64) -> f64 {
    acos_clamped(rad_from_inch(psa_to_pap).cos() / sin_pin).to_degrees()
}

fn pin_buffer_from_val(alpha_pin: f64, val: f64) -> f64 {
    inch_from_rad(asin_clamped(alpha_pin.sin() * val.to_radians().sin()))
}

fn val_from_pin_buffer(sin_pin: f64, pin_buffer: f64) -> f64 {
    asin_clamped(rad_from_inch(pin_buffer).sin() / sin_pin).to_degrees()
}

fn pin_to_cog_from_val(alpha_pin: f64, val: f64, pap: &Pap) -> f64 {
    let grip = pap.grip_angle();
    let cos_pin_cog = alpha_pin.cos() * grip.cos() + alpha_pin.sin() * grip.sin() * val.to_radians().sin();
    inch_from_rad(acos_clamped(cos_pin_cog))
}

fn val_from_pin_to_cog(alpha_pin: f64, pin_to_cog: f64, pap: &Pap) -> f64 {
    let grip = pap.grip_angle();
    let numer = rad_from_inch(pin_to_cog).cos() - alpha_pin.cos() * grip.cos();
    let denom = alpha_pin.sin() * grip.sin();
    if denom.abs() < DEGENERATE_EPSILON {
        // PAP on the grip center: every VAL gives the same pin-to-COG arc
        log::debug!("PAP ({}, {}) coincides with the grip center, VAL set to 0", pap.over, pap.up);
        return 0.0;
    }
    asin_clamped(numer / denom).to_degrees()
}

/// VLS → Dual Angle
pub fn vls_to_dual_angle(vls: &Vls) -> Result<DualAngle> {
    ensure_finite("pin_to_pap", vls.pin_to_pap)?;
    ensure_finite("psa_to_pap", vls.psa_to_pap)?;
    ensure_finite("pin_buffer", vls.pin_buffer)?;

    let (_, sin_pin) = pin_angle(vls.pin_to_pap)?;
    Ok(DualAngle {
        drill: defined("drill", drill_from_psa_to_pap(sin_pin, vls.psa_to_pap))?,
        pin_to_pap: vls.pin_to_pap,
        val: defined("val", val_from_pin_buffer(sin_pin, vls.pin_buffer))?,
    })
}

/// Dual Angle → VLS
pub fn dual_angle_to_vls(da: &DualAngle) -> Result<Vls> {
    ensure_finite("drill", da.drill)?;
    ensure_finite("pin_to_pap", da.pin_to_pap)?;
    ensure_finite("val", da.val)?;

    let alpha_pin = rad_from_inch(da.pin_to_pap);
    Ok(Vls {
        pin_to_pap: da.pin_to_pap,
        psa_to_pap: defined("psa_to_pap", psa_to_pap_from_drill(alpha_pin, da.drill))?,
        pin_buffer: defined("pin_buffer", pin_buffer_from_val(alpha_pin, da.val))?,
    })
}

/// VLS → 2LS, relative to `pap`
pub fn vls_to_two_ls(vls: &Vls, pap: &Pap) -> Result<TwoLs> {
    ensure_finite("pin_to_pap", vls.pin_to_pap)?;
    ensure_finite("psa_to_pap", vls.psa_to_pap)?;
    ensure_finite("pin_buffer", vls.pin_buffer)?;
    pap.ensure_finite()?;

    let (alpha_pin, sin_pin) = pin_angle(vls.pin_to_pap)?;
    let val = val_from_pin_buffer(sin_pin, vls.pin_buffer);
    Ok(TwoLs {
        pin_to_pap: vls.pin_to_pap,
        psa_to_pap: vls.psa_to_pap,
        pin_to_cog: defined("pin_to_cog", pin_to_cog_from_val(alpha_pin, val, pap))?,
    })
}

/// 2LS → VLS, relative to `pap`
pub fn two_ls_to_vls(two: &TwoLs, pap: &Pap) -> Result<Vls> {
    let da = two_ls_to_dual_angle(two, pap)?;
    let alpha_pin = rad_from_inch(two.pin_to_pap);
    Ok(Vls {
        pin_to_pap: two.pin_to_pap,
        psa_to_pap: two.psa_to_pap,
        pin_buffer: defined("pin_buffer", pin_buffer_from_val(alpha_pin, da.val))?,
    })
}

/// Dual Angle → 2LS, relative to `pap`
pub fn dual_angle_to_two_ls(da: &DualAngle, pap: &Pap) -> Result<TwoLs> {
    ensure_finite("drill", da.drill)?;
    ensure_finite("pin_to_pap", da.pin_to_pap)?;
    ensure_finite("val", da.val)?;
    pap.ensure_finite()?;

    let alpha_pin = rad_from_inch(da.pin_to_pap);
    Ok(TwoLs {
        pin_to_pap: da.pin_to_pap,
        psa_to_pap: defined("psa_to_pap", psa_to_pap_from_drill(alpha_pin, da.drill))?,
        pin_to_cog: defined("pin_to_cog", pin_to_cog_from_val(alpha_pin, da.val, pap))?,
    })
}

/// 2LS → Dual Angle, relative to `pap`
pub fn two_ls_to_dual_angle(two: &TwoLs, pap: &Pap) -> Result<DualAngle> {
    ensure_finite("pin_to_pap", two.pin_to_pap)?;
    ensure_finite("psa_to_pap", two.psa_to_pap)?;
    ensure_finite("pin_to_cog", two.pin_to_cog)?;
    pap.ensure_finite()?;

    let (alpha_pin, sin_pin) = pin_angle(two.pin_to_pap)?;
    Ok(DualAngle {
        drill: defined("drill", drill_from_psa_to_pap(sin_pin, two.psa_to_pap))?,
        pin_to_pap: two.pin_to_pap,
        val: defined("val", val_from_pin_to_cog(alpha_pin, two.pin_to_cog, pap))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    const PAP: Pap = Pap { over: 5.0, up: 1.0 };

    #[test]
    fn test_dual_angle_to_vls_known_values() {
        let vls = dual_angle_to_vls(&DualAngle::new(45.0, 3.375, 45.0)).unwrap();
        // sin(45°)·cos(45°) = 1/2 puts the PSA at 60° (4.5in); the buffer is 30° (2.25in)
        assert_eq!(vls.pin_to_pap, 3.375);
        assert_abs_diff_eq!(vls.psa_to_pap, 4.5, epsilon = 1e-12);
        assert_abs_diff_eq!(vls.pin_buffer, 2.25, epsilon = 1e-12);
    }

    #[test]
    fn test_vls_to_dual_angle_known_values() {
        let da = vls_to_dual_angle(&Vls::new(3.375, 4.5, 2.25)).unwrap();
        assert_abs_diff_eq!(da.drill, 45.0, epsilon = 1e-9);
        assert_eq!(da.pin_to_pap, 3.375);
        assert_abs_diff_eq!(da.val, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dual_angle_to_two_ls_reference() {
        let two = dual_angle_to_two_ls(&DualAngle::new(40.0, 4.0, 55.0), &PAP).unwrap();
        assert_eq!(two.pin_to_pap, 4.0);
        assert_abs_diff_eq!(two.psa_to_pap, 3.906537022477511, epsilon = 1e-9);
        assert_abs_diff_eq!(two.pin_to_cog, 2.4924761162613076, epsilon = 1e-9);
    }

    #[test]
    fn test_vls_to_dual_angle_reference() {
        let da = vls_to_dual_angle(&Vls::new(4.5, 3.5, 2.0)).unwrap();
        assert_abs_diff_eq!(da.drill, 37.58929864585068, epsilon = 1e-9);
        assert_abs_diff_eq!(da.val, 31.213508009371367, epsilon = 1e-9);
    }

    #[test]
    fn test_vls_and_two_ls_share_psa() {
        let vls = Vls::new(4.0, 4.5, 3.0);
        let two = vls_to_two_ls(&vls, &PAP).unwrap();
        assert_eq!(two.pin_to_pap, vls.pin_to_pap);
        assert_eq!(two.psa_to_pap, vls.psa_to_pap);

        let back = two_ls_to_vls(&two, &PAP).unwrap();
        assert_abs_diff_eq!(back.pin_buffer, vls.pin_buffer, epsilon = 1e-9);
    }

    #[rstest]
    #[case(0.0)]
    #[case(1e-14)]
    #[case(13.5)]
    fn test_pin_on_pap_axis_is_undefined(#[case] pin: f64) {
        assert!(matches!(
            vls_to_dual_angle(&Vls::new(pin, 4.0, 2.0)),
            Err(LayoutError::UndefinedLayout(_))
        ));
        assert!(matches!(
            vls_to_two_ls(&Vls::new(pin, 4.0, 2.0), &PAP),
            Err(LayoutError::UndefinedLayout(_))
        ));
        assert!(matches!(
            two_ls_to_dual_angle(&TwoLs::new(pin, 4.0, 4.0), &PAP),
            Err(LayoutError::UndefinedLayout(_))
        ));
        assert!(matches!(
            two_ls_to_vls(&TwoLs::new(pin, 4.0, 4.0), &PAP),
            Err(LayoutError::UndefinedLayout(_))
        ));
    }

    #[test]
    fn test_pin_on_pap_forward_conversions_stay_finite() {
        // No division by sin(alpha_pin) going out of Dual Angle
        let vls = dual_angle_to_vls(&DualAngle::new(40.0, 0.0, 55.0)).unwrap();
        assert_abs_diff_eq!(vls.psa_to_pap, 6.75, epsilon = 1e-12);
        assert_eq!(vls.pin_buffer, 0.0);

        let two = dual_angle_to_two_ls(&DualAngle::new(40.0, 0.0, 55.0), &PAP).unwrap();
        assert_abs_diff_eq!(two.pin_to_cog, crate::sphere::inch_from_rad(PAP.grip_angle()), epsilon = 1e-12);
    }

    #[test]
    fn test_max_pin_distance_is_finite() {
        let da = DualAngle::new(30.0, 6.75, 60.0);
        let vls = dual_angle_to_vls(&da).unwrap();
        let back = vls_to_dual_angle(&vls).unwrap();
        assert_abs_diff_eq!(back.drill, 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(back.val, 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pap_on_grip_center_gives_zero_val() {
        let grip = Pap::new(0.0, 0.0);
        let two = dual_angle_to_two_ls(&DualAngle::new(40.0, 4.0, 55.0), &grip).unwrap();
        // COG and PAP coincide
        assert_abs_diff_eq!(two.pin_to_cog, 4.0, epsilon = 1e-12);

        let da = two_ls_to_dual_angle(&TwoLs::new(4.0, 4.5, 4.0), &grip).unwrap();
        assert_eq!(da.val, 0.0);
        assert!(da.drill.is_finite());
    }

    #[test]
    fn test_boundary_ratios_are_clamped() {
        // PSA-to-PAP shorter than the pin allows: ratio cos(psa)/sin(pin) > 1
        let da = vls_to_dual_angle(&Vls::new(2.0, 0.5, 1.0)).unwrap();
        assert_eq!(da.drill, 0.0);

        // Buffer longer than the pin: ratio > 1
        let da = vls_to_dual_angle(&Vls::new(2.0, 5.0, 3.0)).unwrap();
        assert_abs_diff_eq!(da.val, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_inputs_are_rejected() {
        assert!(matches!(
            dual_angle_to_vls(&DualAngle::new(f64::NAN, 4.0, 55.0)),
            Err(LayoutError::InvalidInput(_))
        ));
        assert!(matches!(
            two_ls_to_dual_angle(&TwoLs::new(4.0, f64::INFINITY, 4.0), &PAP),
            Err(LayoutError::InvalidInput(_))
        ));
        assert!(matches!(
            dual_angle_to_two_ls(&DualAngle::new(40.0, 4.0, 55.0), &Pap::new(5.0, f64::NAN)),
            Err(LayoutError::InvalidInput(_))
        ));
    }
}
