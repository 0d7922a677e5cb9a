//! Configuration values a container may override and inherit.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// A sparse configuration: `None` fields inherit from the parent container,
/// `Some` fields override it. The empty configuration inherits everything.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Configuration {
    pub orientation: Option<Orientation>,
    pub screen_width_dp: Option<i32>,
    pub screen_height_dp: Option<i32>,
    pub smallest_screen_width_dp: Option<i32>,
    pub density_dpi: Option<i32>,
}

impl Configuration {
    pub const EMPTY: Self = Self {
        orientation: None,
        screen_width_dp: None,
        screen_height_dp: None,
        smallest_screen_width_dp: None,
        density_dpi: None,
    };

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// The effective configuration of a container: its own overrides where
    /// present, the parent's merged configuration everywhere else.
    #[must_use]
    pub fn merged_over(&self, parent: &Self) -> Self {
        Self {
            orientation: self.orientation.or(parent.orientation),
            screen_width_dp: self.screen_width_dp.or(parent.screen_width_dp),
            screen_height_dp: self.screen_height_dp.or(parent.screen_height_dp),
            smallest_screen_width_dp: self
                .smallest_screen_width_dp
                .or(parent.smallest_screen_width_dp),
            density_dpi: self.density_dpi.or(parent.density_dpi),
        }
    }
}
