//! Bowling-layout: conversion engine for bowling ball drilling layouts
//!
//! This crate converts layouts between the three systems pro shops use
//! (Dual Angle, VLS / Pin Buffer and 2LS), re-expresses a layout when the
//! bowler's PAP moves, and checks that a layout can exist on a real ball.
//!
//! All geometry is spherical: distances are arcs on the ball surface in
//! inches, angles are in degrees, and the PAP is given as `over`/`up` offsets
//! from the grip center.
//!
//! ```
//! use bowling_layout::{Layout, LayoutSystem, Pap, Vls};
//!
//! let vls = Layout::Vls(Vls::new(4.5, 3.5, 2.0));
//! let da = vls.convert(LayoutSystem::DualAngle, None).unwrap();
//! assert_eq!(da.system(), LayoutSystem::DualAngle);
//!
//! let two = vls.convert(LayoutSystem::TwoLs, Some(&Pap::new(5.0, 1.0))).unwrap();
//! assert_eq!(two.pin_to_pap(), 4.5);
//! ```

use thiserror::Error;

pub mod adjust;
pub mod constants;
pub mod layout;
pub mod markers;
pub mod sphere;
pub mod validate;

// Re-export commonly used types
pub use adjust::{adjust_layout, adjust_pap, PapAdjustment};
pub use layout::presets::{find_preset, TWO_LS_PRESETS};
pub use layout::{DualAngle, Layout, LayoutSystem, Pap, TwoLs, Vls};
pub use markers::{Hand, LayoutMarkers};
pub use validate::{is_plausible, GeometryWarning, PlausibilityCheck};

/// Main error type for layout operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Undefined layout: {0}")]
    UndefinedLayout(String),

    #[error("Converting {from} to {to} needs a PAP")]
    PapRequired { from: LayoutSystem, to: LayoutSystem },
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LayoutError::PapRequired {
            from: LayoutSystem::Vls,
            to: LayoutSystem::TwoLs,
        };
        assert_eq!(err.to_string(), "Converting Pin Buffer (VLS) to 2LS needs a PAP");
        assert_eq!(
            LayoutError::InvalidInput("drill is not a finite number (NaN)".into()).to_string(),
            "Invalid input: drill is not a finite number (NaN)"
        );
    }

    #[test]
    fn test_reexports_work_together() {
        let pap = Pap::new(5.0, 1.0);
        let preset = find_preset("4").unwrap();
        let layout = Layout::TwoLs(preset.layout);

        let adjusted = adjust_layout(&pap, &layout, &Pap::new(4.5, 1.0)).unwrap();
        assert_eq!(adjusted.system(), LayoutSystem::TwoLs);
        assert!(PlausibilityCheck::default().assess_layout(&layout, &pap).is_ok());
    }
}
