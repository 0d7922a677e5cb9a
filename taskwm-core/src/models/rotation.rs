use serde::{Deserialize, Serialize};

/// Quarter-turn rotation a display reports for its current orientation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Number of quarter turns from `self` to `to`, in `0..4`.
    #[must_use]
    pub const fn delta(self, to: Self) -> u32 {
        (to as u32).wrapping_sub(self as u32) % 4
    }

    /// A quarter rotation swaps the display's width and height.
    #[must_use]
    pub const fn swaps_dimensions(self) -> bool {
        matches!(self, Self::R90 | Self::R270)
    }
}
