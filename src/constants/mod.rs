//! Constants module for bowling ball layout calculations

use std::f64::consts::PI;

// Ball geometry
/// Standard ball circumference in inches
pub const BALL_CIRCUMFERENCE: f64 = 27.0;
/// Surface arc in inches subtending π radians (half the circumference)
pub const HALF_CIRCUMFERENCE: f64 = BALL_CIRCUMFERENCE / 2.0;
/// Ball radius in inches (13.5 / π, about 4.297in)
pub const BALL_RADIUS: f64 = HALF_CIRCUMFERENCE / PI;
/// Longest layout distance in inches (a quarter of the circumference, 90° of arc)
pub const MAX_SURFACE_DISTANCE: f64 = HALF_CIRCUMFERENCE / 2.0;

// Layout geometry
/// Arc distance from the pin to the PSA used when locating the PSA in inches
pub const PIN_TO_PSA_DISTANCE: f64 = MAX_SURFACE_DISTANCE;
/// Largest drilling or VAL angle in degrees
pub const MAX_LAYOUT_ANGLE: f64 = 90.0;

// Numerical thresholds
/// Default slack in inches for the spherical triangle inequality check
pub const PLAUSIBILITY_TOLERANCE: f64 = 0.05;
/// Below this magnitude `sin(alpha_pin)` is treated as zero (pin on the PAP or its antipode)
pub const DEGENERATE_EPSILON: f64 = 1e-12;
/// Below this magnitude `cos(lat)` is treated as zero (point sits on a pole)
pub const POLE_EPSILON: f64 = 1e-12;
