//! Unlock points earned by reading further into the articles.
//!
//! Progression is derived, never edited flag by flag: the navigator computes the
//! whole map from the highest article reached and commits it to the settings
//! store in one `set`.

use serde::{Deserialize, Serialize};

/// Named unlock points, in the order they are earned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProgressionPoint {
    GameUnlocked,
    SizeAndSpeedUnlocked,
    AutoclickUnlocked,
    ColorPickerUnlocked,
}

impl ProgressionPoint {
    pub const ALL: [ProgressionPoint; 4] = [
        ProgressionPoint::GameUnlocked,
        ProgressionPoint::SizeAndSpeedUnlocked,
        ProgressionPoint::AutoclickUnlocked,
        ProgressionPoint::ColorPickerUnlocked,
    ];

    /// Lowest article index that unlocks this point.
    pub fn threshold(self) -> usize {
        match self {
            ProgressionPoint::GameUnlocked => 1,
            ProgressionPoint::SizeAndSpeedUnlocked => 2,
            ProgressionPoint::AutoclickUnlocked => 3,
            ProgressionPoint::ColorPickerUnlocked => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProgressionPoint::GameUnlocked => "gameUnlocked",
            ProgressionPoint::SizeAndSpeedUnlocked => "sizeAndSpeedUnlocked",
            ProgressionPoint::AutoclickUnlocked => "autoclickUnlocked",
            ProgressionPoint::ColorPickerUnlocked => "colorPickerUnlocked",
        }
    }
}

/// Unlock flags. All false at session start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub game_unlocked: bool,
    pub size_and_speed_unlocked: bool,
    pub autoclick_unlocked: bool,
    pub color_picker_unlocked: bool,
}

impl Progression {
    pub fn is_unlocked(&self, point: ProgressionPoint) -> bool {
        match point {
            ProgressionPoint::GameUnlocked => self.game_unlocked,
            ProgressionPoint::SizeAndSpeedUnlocked => self.size_and_speed_unlocked,
            ProgressionPoint::AutoclickUnlocked => self.autoclick_unlocked,
            ProgressionPoint::ColorPickerUnlocked => self.color_picker_unlocked,
        }
    }

    /// Points that are set here but not in `earlier`.
    pub fn newly_unlocked(&self, earlier: &Progression) -> Vec<ProgressionPoint> {
        ProgressionPoint::ALL
            .into_iter()
            .filter(|p| self.is_unlocked(*p) && !earlier.is_unlocked(*p))
            .collect()
    }
}

/// Full progression map for the highest article index reached.
pub fn progression_for(highest: usize) -> Progression {
    let reached = |p: ProgressionPoint| highest >= p.threshold();
    Progression {
        game_unlocked: reached(ProgressionPoint::GameUnlocked),
        size_and_speed_unlocked: reached(ProgressionPoint::SizeAndSpeedUnlocked),
        autoclick_unlocked: reached(ProgressionPoint::AutoclickUnlocked),
        color_picker_unlocked: reached(ProgressionPoint::ColorPickerUnlocked),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_flags_monotonic_in_highest(a in 0usize..20, b in 0usize..20) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let low = progression_for(lo);
            let high = progression_for(hi);
            for point in ProgressionPoint::ALL {
                prop_assert!(!low.is_unlocked(point) || high.is_unlocked(point));
            }
        }
    }
}
