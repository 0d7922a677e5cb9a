//! The geometric frame stacks and tasks resolve their bounds against:
//! logical display rect, rotation, and the transient docked-stack state.
use serde::{Deserialize, Serialize};

use super::{Configuration, DisplayId, Rect, Rotation};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Display {
    pub id: DisplayId,
    // Dimensions in the natural (rotation 0) orientation.
    base_width: i32,
    base_height: i32,
    rotation: Rotation,
    configuration: Configuration,
    docked_stack_visible: bool,
    divider_resizing: bool,
}

impl Display {
    #[must_use]
    pub fn new(id: DisplayId, base_width: i32, base_height: i32) -> Self {
        Self {
            id,
            base_width,
            base_height,
            rotation: Rotation::default(),
            configuration: Configuration::EMPTY,
            docked_stack_visible: false,
            divider_resizing: false,
        }
    }

    /// Usable rect of the display under its current rotation.
    #[must_use]
    pub const fn logical_display_rect(&self) -> Rect {
        if self.rotation.swaps_dimensions() {
            Rect::new(0, 0, self.base_height, self.base_width)
        } else {
            Rect::new(0, 0, self.base_width, self.base_height)
        }
    }

    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// A docked (split-screen) stack is currently visible on this display.
    #[must_use]
    pub const fn docked_stack_visible(&self) -> bool {
        self.docked_stack_visible
    }

    pub fn set_docked_stack_visible(&mut self, visible: bool) {
        self.docked_stack_visible = visible;
    }

    /// The split-screen divider is being dragged right now.
    #[must_use]
    pub const fn divider_resizing(&self) -> bool {
        self.divider_resizing
    }

    pub fn set_divider_resizing(&mut self, resizing: bool) {
        self.divider_resizing = resizing;
    }

    #[must_use]
    pub const fn configuration(&self) -> Configuration {
        self.configuration
    }

    pub fn set_configuration(&mut self, configuration: Configuration) {
        self.configuration = configuration;
    }

    /// Transform `bounds` from the coordinate space of the `old` rotation
    /// into the space of the `new` one, keeping the rect over the same
    /// physical pixels.
    pub fn rotate_bounds(&self, old: Rotation, new: Rotation, bounds: &mut Rect) {
        // Dimensions of the display as the old rotation saw them.
        let (width, height) = if old.swaps_dimensions() {
            (self.base_height, self.base_width)
        } else {
            (self.base_width, self.base_height)
        };
        let r = *bounds;
        *bounds = match old.delta(new) {
            0 => r,
            1 => Rect::new(height - r.bottom, r.left, height - r.top, r.right),
            2 => Rect::new(width - r.right, height - r.bottom, width - r.left, height - r.top),
            3 => Rect::new(r.top, width - r.right, r.bottom, width - r.left),
            _ => unreachable!("rotation delta is always in 0..4"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_rect_swaps_dimensions_on_quarter_turns() {
        let mut display = Display::new(0, 1920, 1080);
        assert_eq!(display.logical_display_rect(), Rect::new(0, 0, 1920, 1080));
        display.set_rotation(Rotation::R90);
        assert_eq!(display.logical_display_rect(), Rect::new(0, 0, 1080, 1920));
        display.set_rotation(Rotation::R180);
        assert_eq!(display.logical_display_rect(), Rect::new(0, 0, 1920, 1080));
    }

    #[test]
    fn rotate_bounds_quarter_turn_keeps_the_rect_on_screen() {
        let display = Display::new(0, 200, 100);
        let mut rect = Rect::new(10, 20, 30, 40);
        display.rotate_bounds(Rotation::R0, Rotation::R90, &mut rect);
        assert_eq!(rect, Rect::new(60, 10, 80, 30));
        // The rotated rect fits the rotated display.
        assert!(Rect::new(0, 0, 100, 200).contains(&rect));
    }

    #[test]
    fn rotate_bounds_half_turn_mirrors_both_axes() {
        let display = Display::new(0, 200, 100);
        let mut rect = Rect::new(0, 0, 50, 25);
        display.rotate_bounds(Rotation::R0, Rotation::R180, &mut rect);
        assert_eq!(rect, Rect::new(150, 75, 200, 100));
    }

    #[test]
    fn rotate_bounds_round_trip_restores_the_rect() {
        let display = Display::new(0, 200, 100);
        let original = Rect::new(10, 20, 30, 40);
        let mut rect = original;
        display.rotate_bounds(Rotation::R0, Rotation::R90, &mut rect);
        display.rotate_bounds(Rotation::R90, Rotation::R0, &mut rect);
        assert_eq!(rect, original);
        display.rotate_bounds(Rotation::R0, Rotation::R270, &mut rect);
        display.rotate_bounds(Rotation::R270, Rotation::R0, &mut rect);
        assert_eq!(rect, original);
    }
}
