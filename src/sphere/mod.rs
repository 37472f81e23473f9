//! # Spherical Trigonometry Primitives
//!
//! Conversions between surface arcs on the ball and the central angles they
//! subtend, plus the clamped inverse trigonometric functions every layout
//! formula goes through.
//!
//! ## Units
//!
//! Distances are surface arcs in inches on a ball of circumference 27in
//! (radius 13.5/π). An arc of `d` inches subtends `d·π/13.5` radians at the
//! center, so the longest layout distance (6.75in) is a right angle and a PAP
//! offset of ±6.75in `up` reaches a pole.
//!
//! ## Clamping
//!
//! Ratios such as `cos(alpha_psa) / sin(alpha_pin)` are mathematically inside
//! `[-1, 1]` for every realisable layout, but at the geometric boundary they
//! routinely land a few ULPs outside after rounding. `asin`/`acos` would turn
//! that into NaN, so [`asin_clamped`] and [`acos_clamped`] clamp first.
//!
//! ```rust
//! use bowling_layout::sphere::{acos_clamped, rad_from_inch, inch_from_rad};
//!
//! assert_eq!(acos_clamped(1.0 + 1e-15), 0.0);
//! assert!((inch_from_rad(rad_from_inch(4.5)) - 4.5).abs() < 1e-12);
//! ```

pub mod geodesic;

pub use geodesic::SurfacePoint;

use crate::constants::HALF_CIRCUMFERENCE;
use std::f64::consts::PI;

/// Central angle in radians subtended by a surface arc of `inch` inches
pub fn rad_from_inch(inch: f64) -> f64 {
    inch * PI / HALF_CIRCUMFERENCE
}

/// Surface arc in inches for a central angle of `rad` radians
pub fn inch_from_rad(rad: f64) -> f64 {
    rad * HALF_CIRCUMFERENCE / PI
}

/// Clamps `x` into `[-1, 1]`
///
/// NaN passes through unchanged so that genuinely undefined inputs stay visible.
pub fn clamp_unit(x: f64) -> f64 {
    if x > 1.0 || x < -1.0 {
        log::debug!("clamping trig ratio {} into [-1, 1]", x);
    }
    x.clamp(-1.0, 1.0)
}

/// `asin` of a trigonometric ratio, tolerating rounding overshoot past ±1
pub fn asin_clamped(ratio: f64) -> f64 {
    clamp_unit(ratio).asin()
}

/// `acos` of a trigonometric ratio, tolerating rounding overshoot past ±1
pub fn acos_clamped(ratio: f64) -> f64 {
    clamp_unit(ratio).acos()
}

/// Angular separation in radians between the PAP and the grip center
///
/// The PAP is reached from the grip center by rotating `over` inches
/// horizontally and then `up` inches vertically, so the separation is
/// `acos(cos(over)·cos(up))` with both offsets taken as arcs.
pub fn pap_to_grip_angle(over: f64, up: f64) -> f64 {
    acos_clamped(rad_from_inch(over).cos() * rad_from_inch(up).cos())
}

/// Reduces an angle in radians into `(-π, π]`
pub fn normalize_signed(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI {
        wrapped + 2.0 * PI
    } else {
        wrapped
    }
}
