//! Canned 2LS layouts offered as starting points

use super::TwoLs;

/// A named 2LS layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoLsPreset {
    pub label: &'static str,
    pub layout: TwoLs,
}

const fn preset(label: &'static str, pin_to_pap: f64, psa_to_pap: f64, pin_to_cog: f64) -> TwoLsPreset {
    TwoLsPreset {
        label,
        layout: TwoLs {
            pin_to_pap,
            psa_to_pap,
            pin_to_cog,
        },
    }
}

/// The six 2LS presets (pin to PAP, PSA to PAP, pin to COG)
pub static TWO_LS_PRESETS: [TwoLsPreset; 6] = [
    preset("1", 5.5, 5.0, 2.0),
    preset("2", 2.0, 6.0, 5.0),
    preset("3", 5.0, 4.0, 3.5),
    preset("4", 4.5, 3.0, 4.5),
    preset("5", 4.0, 4.0, 5.0),
    preset("6", 3.5, 4.0, 6.5),
];

/// Looks up a preset by its label
pub fn find_preset(label: &str) -> Option<&'static TwoLsPreset> {
    TWO_LS_PRESETS.iter().find(|p| p.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_LAYOUT_ANGLE;
    use crate::layout::{two_ls_to_dual_angle, Pap};

    #[test]
    fn test_find_preset() {
        assert_eq!(find_preset("3").unwrap().layout, TwoLs::new(5.0, 4.0, 3.5));
        assert!(find_preset("7").is_none());
    }

    #[test]
    fn test_presets_convert_with_default_pap() {
        let pap = Pap::new(5.0, 1.0);
        for preset in TWO_LS_PRESETS.iter() {
            let da = two_ls_to_dual_angle(&preset.layout, &pap).unwrap();
            assert!(da.drill >= 0.0 && da.drill <= MAX_LAYOUT_ANGLE, "preset {}", preset.label);
            assert!(da.val.abs() <= MAX_LAYOUT_ANGLE, "preset {}", preset.label);
        }
    }
}
