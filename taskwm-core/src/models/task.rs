//! The unit the bounds engine is about: a task owns its window groups,
//! carries the authoritative bounds rect, and knows how those bounds react to
//! docked stacks, rotation, and drag-resizing.
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TaskWmError};

use super::{
    BoundsChange, Configurable, Configuration, Container, DimLayerOwner, Display, DragResizeMode,
    Rect, ResizeMode, Rotation, StackFrame, TaskId, WindowGroup, WindowingMode,
};

/// Removal lifecycle of a task. A task whose removal was requested while its
/// stack was animating parks in `PendingRemoval` until its windows die.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RemovalState {
    #[default]
    Active,
    PendingRemoval,
    Removed,
}

// `#[serde(bound = "")]` stops the derive from adding its own `G:
// Deserialize<'de>` bound, which is ambiguous next to the `DeserializeOwned`
// the `WindowGroup` bound already carries (serde issue #1296).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(bound = "")]
pub struct Task<G: WindowGroup> {
    id: TaskId,
    user_id: i32,
    bounds: Rect,
    /// Insets to report to clients during a docked-stack adjustment, instead
    /// of insets derived from the real bounds.
    temp_inset_bounds: Rect,
    frozen_bounds: Rect,
    frozen_merged_configuration: Configuration,
    /// Display rotation the current bounds were resolved under.
    rotation: Rotation,
    /// The task tracks its parent's bounds instead of keeping its own.
    fills_parent: bool,
    resize_mode: ResizeMode,
    drag_resizing: bool,
    drag_resize_mode: DragResizeMode,
    drag_resize_reported: bool,
    removal: RemovalState,
    container: Container<G>,
}

impl<G: WindowGroup> Task<G> {
    #[must_use]
    pub fn new(id: TaskId, user_id: i32) -> Self {
        Self {
            id,
            user_id,
            bounds: Rect::default(),
            temp_inset_bounds: Rect::default(),
            frozen_bounds: Rect::default(),
            frozen_merged_configuration: Configuration::EMPTY,
            rotation: Rotation::default(),
            fills_parent: true,
            resize_mode: ResizeMode::default(),
            drag_resizing: false,
            drag_resize_mode: DragResizeMode::default(),
            drag_resize_reported: false,
            removal: RemovalState::Active,
            container: Container::default(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub const fn user_id(&self) -> i32 {
        self.user_id
    }

    /// The raw stored bounds. Most callers want [`Self::bounds_in`], which
    /// accounts for a vanished docked stack.
    #[must_use]
    pub const fn raw_bounds(&self) -> Rect {
        self.bounds
    }

    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[must_use]
    pub const fn resize_mode(&self) -> ResizeMode {
        self.resize_mode
    }

    #[must_use]
    pub const fn removal_state(&self) -> RemovalState {
        self.removal
    }

    pub fn set_removal_state(&mut self, state: RemovalState) {
        self.removal = state;
    }

    /// Replace this task's bounds and override configuration.
    ///
    /// `None` bounds mean "track the parent": the task turns fullscreen and
    /// resolves against the display's logical rect. The returned flags
    /// classify what actually changed; an empty set means the call was a
    /// no-op.
    pub fn set_bounds(
        &mut self,
        frame: &StackFrame<'_>,
        bounds: Option<Rect>,
        override_configuration: Configuration,
        dim: &mut impl DimLayerOwner,
    ) -> Result<BoundsChange> {
        if bounds.is_none() && !override_configuration.is_empty() {
            return Err(TaskWmError::OverrideWithoutBounds(override_configuration));
        }
        if bounds.is_some() && override_configuration.is_empty() {
            return Err(TaskWmError::BoundsWithoutOverride);
        }

        let old_fills_parent = self.fills_parent;
        let mut rotation = Rotation::R0;
        let mut resolved = bounds;
        if let Some(display) = frame.display {
            rotation = display.rotation();
            self.fills_parent = bounds.is_none();
            if self.fills_parent {
                resolved = Some(display.logical_display_rect());
            }
        }

        let Some(new_bounds) = resolved else {
            // Can't go fullscreen without a display to take bounds from.
            return Ok(BoundsChange::empty());
        };

        if self.bounds == new_bounds
            && old_fills_parent == self.fills_parent
            && self.rotation == rotation
        {
            return Ok(BoundsChange::empty());
        }

        let mut change = BoundsChange::empty();
        if self.bounds.left != new_bounds.left || self.bounds.top != new_bounds.top {
            change |= BoundsChange::POSITION;
        }
        if self.bounds.width() != new_bounds.width() || self.bounds.height() != new_bounds.height()
        {
            change |= BoundsChange::SIZE;
        }

        self.bounds = new_bounds;
        self.rotation = rotation;
        if frame.display.is_some() {
            dim.update_dim_layer(self.id);
        }
        let effective = if self.fills_parent {
            Configuration::EMPTY
        } else {
            override_configuration
        };
        self.container
            .set_override_configuration(effective, frame.merged_configuration);
        Ok(change)
    }

    /// [`Self::set_bounds`] plus client notification: window groups learn
    /// whether they were resized or merely moved. `force` upgrades a pure
    /// move to a resize so clients relayout anyway. Returns whether anything
    /// was reported.
    pub fn resize(
        &mut self,
        frame: &StackFrame<'_>,
        bounds: Option<Rect>,
        override_configuration: Configuration,
        force: bool,
        dim: &mut impl DimLayerOwner,
    ) -> Result<bool> {
        let mut change = self.set_bounds(frame, bounds, override_configuration, dim)?;
        if force {
            change |= BoundsChange::SIZE;
        }
        if change.is_empty() {
            return Ok(false);
        }
        if change.contains(BoundsChange::SIZE) {
            for group in self.container.children_mut() {
                group.on_resize();
            }
        } else {
            for group in self.container.children_mut() {
                group.on_moved_by_resize();
            }
        }
        Ok(true)
    }

    fn use_current_bounds(&self, frame: &StackFrame<'_>) -> bool {
        self.fills_parent
            || !frame.windowing_mode.resizeable_by_docked_stack()
            || frame.display.map_or(true, Display::docked_stack_visible)
    }

    /// The bounds the rest of the system should see. A task that was shrunk
    /// for a docked stack which has since gone away springs back to the full
    /// display until the next relayout catches up.
    #[must_use]
    pub fn bounds_in(&self, frame: &StackFrame<'_>) -> Rect {
        if self.use_current_bounds(frame) {
            return self.bounds;
        }
        match frame.display {
            Some(display) => display.logical_display_rect(),
            // use_current_bounds holds whenever the stack is off-display.
            None => self.bounds,
        }
    }

    /// Where a dim layer attached to this task should be drawn.
    #[must_use]
    pub fn dim_bounds(&self, frame: &StackFrame<'_>) -> Rect {
        let divider_resizing = frame.display.is_some_and(Display::divider_resizing);
        if self.use_current_bounds(frame) {
            if frame.windowing_mode == WindowingMode::Freeform {
                if let Some(bounds) = self.max_visible_bounds() {
                    return bounds;
                }
            }

            if !self.fills_parent {
                if divider_resizing {
                    // Mid-drag the task may lag behind the divider; the dim
                    // keeps up with the stack instead.
                    return frame.bounds;
                }
                // Minimizing the docked stack leaves the task bounds alone,
                // so clip them to the stack here.
                let mut dim = frame.bounds;
                dim.intersect(&self.bounds);
                return dim;
            }
            return self.bounds;
        }
        match frame.display {
            Some(display) => display.logical_display_rect(),
            // use_current_bounds holds whenever the stack is off-display.
            None => self.bounds,
        }
    }

    /// Union of the visible frames of all window groups that are neither
    /// exiting nor hidden, or `None` when no group qualifies.
    #[must_use]
    pub fn max_visible_bounds(&self) -> Option<Rect> {
        let mut found: Option<Rect> = None;
        for group in self.container.children().iter().rev() {
            if group.is_exiting() || group.is_hidden() || group.hidden_requested() {
                continue;
            }
            let Some(frame) = group.visible_frame() else {
                continue;
            };
            match found.as_mut() {
                Some(bounds) => bounds.union(&frame),
                None => found = Some(frame),
            }
        }
        found
    }

    /// React to a display rotation. Freeform tasks keep their place on the
    /// physical panel by rotating their bounds; for every other mode the
    /// stack drives the new layout and the stored bounds are re-applied as
    /// they are. Returns the new bounds when they changed and the owner
    /// should be told.
    pub fn update_display_info(
        &mut self,
        frame: &StackFrame<'_>,
        dim: &mut impl DimLayerOwner,
    ) -> Result<Option<Rect>> {
        let Some(display) = frame.display else {
            return Ok(None);
        };
        if self.fills_parent {
            self.set_bounds(frame, None, Configuration::EMPTY, dim)?;
            return Ok(None);
        }
        let new_rotation = display.rotation();
        if self.rotation == new_rotation {
            return Ok(None);
        }

        let mut rotated = self.bounds;
        let override_configuration = self.container.override_configuration();
        if !frame.windowing_mode.task_resize_allowed() {
            self.set_bounds(frame, Some(rotated), override_configuration, dim)?;
            return Ok(None);
        }

        display.rotate_bounds(self.rotation, new_rotation, &mut rotated);
        let change = self.set_bounds(frame, Some(rotated), override_configuration, dim)?;
        if change.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.bounds))
        }
    }

    /// Snap the task to bounds adjusted for a docked stack: keep its size,
    /// anchor it at the adjusted top-left (or bottom edge when
    /// `align_bottom`), and install the temporary insets clients should see
    /// while the adjustment lasts.
    pub fn align_to_adjusted_bounds(
        &mut self,
        frame: &StackFrame<'_>,
        adjusted_bounds: Rect,
        temp_inset_bounds: Option<Rect>,
        align_bottom: bool,
        force_resizable: bool,
        dim: &mut impl DimLayerOwner,
    ) -> Result<bool> {
        let override_configuration = self.container.override_configuration();
        if !self.is_resizable(force_resizable) || override_configuration.is_empty() {
            return Ok(false);
        }

        let mut aligned = self.bounds_in(frame);
        if align_bottom {
            aligned.offset(0, adjusted_bounds.bottom - aligned.bottom);
        } else {
            aligned.offset_to(adjusted_bounds.left, adjusted_bounds.top);
        }
        self.set_temp_inset_bounds(temp_inset_bounds);
        self.resize(frame, Some(aligned), override_configuration, false, dim)
    }

    #[must_use]
    pub const fn is_resizable(&self, force_resizable: bool) -> bool {
        self.resize_mode.is_resizable() || force_resizable
    }

    /// Mark the start or end of an interactive resize. Rejects drag modes
    /// the stack's windowing mode does not support.
    pub fn set_drag_resizing(
        &mut self,
        windowing_mode: WindowingMode,
        drag_resizing: bool,
        mode: DragResizeMode,
    ) -> Result<()> {
        if self.drag_resizing == drag_resizing {
            return Ok(());
        }
        if !mode.allowed_for(windowing_mode) {
            return Err(TaskWmError::DragResizeModeNotAllowed {
                mode,
                windowing_mode,
            });
        }
        self.drag_resizing = drag_resizing;
        self.drag_resize_mode = mode;
        self.drag_resize_reported = false;
        Ok(())
    }

    #[must_use]
    pub const fn drag_resizing(&self) -> bool {
        self.drag_resizing
    }

    #[must_use]
    pub const fn drag_resize_mode(&self) -> DragResizeMode {
        self.drag_resize_mode
    }

    /// Whether the current drag-resize state has been delivered to clients.
    #[must_use]
    pub const fn drag_resize_reported(&self) -> bool {
        self.drag_resize_reported
    }

    pub fn set_drag_resize_reported(&mut self, reported: bool) {
        self.drag_resize_reported = reported;
    }

    pub fn set_temp_inset_bounds(&mut self, bounds: Option<Rect>) {
        match bounds {
            Some(bounds) => self.temp_inset_bounds = bounds,
            None => self.temp_inset_bounds.set_empty(),
        }
    }

    #[must_use]
    pub const fn temp_inset_bounds(&self) -> Rect {
        self.temp_inset_bounds
    }

    /// Snapshot the bounds and merged configuration ahead of an operation
    /// that will replace them, so surfaces can keep drawing with the old
    /// values until the clients catch up.
    pub fn prepare_freezing_bounds(&mut self) {
        self.frozen_bounds = self.bounds;
        self.frozen_merged_configuration = self.container.merged_configuration();
    }

    #[must_use]
    pub const fn frozen_bounds(&self) -> Rect {
        self.frozen_bounds
    }

    #[must_use]
    pub const fn frozen_merged_configuration(&self) -> Configuration {
        self.frozen_merged_configuration
    }

    /// Window groups in z-order, bottom first.
    #[must_use]
    pub fn groups(&self) -> &[G] {
        self.container.children()
    }

    pub fn groups_mut(&mut self) -> &mut [G] {
        self.container.children_mut()
    }

    /// Attach a window group. Adding a group revives a task that was parked
    /// for removal, and the group's declared resize policy becomes the
    /// task's.
    pub fn attach_group(&mut self, group: G, position: usize, resize_mode: ResizeMode) {
        if self.removal == RemovalState::PendingRemoval {
            self.removal = RemovalState::Active;
        }
        self.resize_mode = resize_mode;
        self.container.attach(group, position);
    }

    /// Detach a window group. A group the task does not hold is logged and
    /// ignored.
    pub fn detach_group(&mut self, group: &G) -> bool {
        let Some(index) = self.container.children().iter().position(|g| g == group) else {
            tracing::error!(task = self.id, "window group is not attached to this task");
            return false;
        };
        self.container.detach(index);
        true
    }

    #[must_use]
    pub fn has_windows_alive(&self) -> bool {
        self.container
            .children()
            .iter()
            .any(WindowGroup::has_windows_alive)
    }

    /// Top-most group that is neither exiting nor hidden.
    #[must_use]
    pub fn top_visible_group(&self) -> Option<&G> {
        self.container
            .children()
            .iter()
            .rev()
            .find(|g| !g.is_exiting() && !g.is_hidden() && !g.hidden_requested())
    }

    /// Whether the rest of the system should treat this task as fullscreen.
    /// Like [`Self::bounds_in`], a task shrunk for a docked stack that went
    /// away reads as fullscreen again.
    #[must_use]
    pub fn is_fullscreen(&self, frame: &StackFrame<'_>) -> bool {
        if self.use_current_bounds(frame) {
            return self.fills_parent;
        }
        true
    }

    #[must_use]
    pub const fn override_configuration(&self) -> Configuration {
        self.container.override_configuration()
    }

    #[must_use]
    pub const fn merged_configuration(&self) -> Configuration {
        self.container.merged_configuration()
    }
}

impl<G: WindowGroup> Configurable for Task<G> {
    fn configure(&mut self, parent_merged: Configuration) {
        self.container.configure(parent_merged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DimLayerUsers, MockWindowGroup};

    fn frame<'a>(
        windowing_mode: WindowingMode,
        bounds: Rect,
        display: Option<&'a Display>,
    ) -> StackFrame<'a> {
        StackFrame {
            windowing_mode,
            bounds,
            merged_configuration: Configuration::EMPTY,
            animating: false,
            display,
        }
    }

    fn override_config() -> Configuration {
        Configuration {
            density_dpi: Some(160),
            ..Configuration::EMPTY
        }
    }

    fn task() -> Task<MockWindowGroup> {
        Task::new(1, 0)
    }

    #[test]
    fn null_bounds_on_a_display_resolve_to_the_logical_rect() {
        let display = Display::new(0, 800, 600);
        let frame = frame(WindowingMode::Fullscreen, Rect::default(), Some(&display));
        let mut dim = DimLayerUsers::default();
        let mut subject = task();

        let change = subject
            .set_bounds(&frame, None, Configuration::EMPTY, &mut dim)
            .unwrap();
        assert_eq!(change, BoundsChange::SIZE);
        assert_eq!(subject.raw_bounds(), Rect::new(0, 0, 800, 600));
        assert!(subject.is_fullscreen(&frame));
        assert!(dim.contains(1));
    }

    #[test]
    fn reapplying_the_same_bounds_changes_nothing() {
        let display = Display::new(0, 800, 600);
        let frame = frame(WindowingMode::Freeform, Rect::default(), Some(&display));
        let mut dim = DimLayerUsers::default();
        let mut subject = task();

        let bounds = Rect::new(10, 10, 110, 210);
        subject
            .set_bounds(&frame, Some(bounds), override_config(), &mut dim)
            .unwrap();
        let change = subject
            .set_bounds(&frame, Some(bounds), override_config(), &mut dim)
            .unwrap();
        assert_eq!(change, BoundsChange::empty());
    }

    #[test]
    fn a_pure_move_is_classified_as_position_only() {
        let display = Display::new(0, 800, 600);
        let frame = frame(WindowingMode::Freeform, Rect::default(), Some(&display));
        let mut dim = DimLayerUsers::default();
        let mut subject = task();

        subject
            .set_bounds(&frame, Some(Rect::new(0, 0, 100, 100)), override_config(), &mut dim)
            .unwrap();
        let change = subject
            .set_bounds(&frame, Some(Rect::new(50, 50, 150, 150)), override_config(), &mut dim)
            .unwrap();
        assert_eq!(change, BoundsChange::POSITION);

        let change = subject
            .set_bounds(&frame, Some(Rect::new(50, 50, 250, 150)), override_config(), &mut dim)
            .unwrap();
        assert_eq!(change, BoundsChange::SIZE);

        let change = subject
            .set_bounds(&frame, Some(Rect::new(0, 0, 100, 100)), override_config(), &mut dim)
            .unwrap();
        assert_eq!(change, BoundsChange::POSITION | BoundsChange::SIZE);
    }

    #[test]
    fn bounds_and_override_configuration_must_be_paired() {
        let display = Display::new(0, 800, 600);
        let frame = frame(WindowingMode::Freeform, Rect::default(), Some(&display));
        let mut dim = DimLayerUsers::default();
        let mut subject = task();

        let err = subject
            .set_bounds(&frame, None, override_config(), &mut dim)
            .unwrap_err();
        assert_eq!(err, TaskWmError::OverrideWithoutBounds(override_config()));

        let err = subject
            .set_bounds(&frame, Some(Rect::new(0, 0, 10, 10)), Configuration::EMPTY, &mut dim)
            .unwrap_err();
        assert_eq!(err, TaskWmError::BoundsWithoutOverride);
    }

    #[test]
    fn null_bounds_without_a_display_are_a_no_op() {
        let frame = frame(WindowingMode::Fullscreen, Rect::default(), None);
        let mut dim = DimLayerUsers::default();
        let mut subject = task();

        let change = subject
            .set_bounds(&frame, None, Configuration::EMPTY, &mut dim)
            .unwrap();
        assert_eq!(change, BoundsChange::empty());
        assert_eq!(subject.raw_bounds(), Rect::default());
        assert!(dim.is_empty());
    }

    #[test]
    fn explicit_bounds_without_a_display_still_apply() {
        let frame = frame(WindowingMode::Freeform, Rect::default(), None);
        let mut dim = DimLayerUsers::default();
        let mut subject = task();

        let change = subject
            .set_bounds(&frame, Some(Rect::new(0, 0, 100, 100)), override_config(), &mut dim)
            .unwrap();
        assert_eq!(change, BoundsChange::SIZE);
        assert_eq!(subject.rotation(), Rotation::R0);
        assert!(dim.is_empty());
    }

    #[test]
    fn resize_tells_groups_whether_they_resized_or_moved() {
        let display = Display::new(0, 800, 600);
        let frame = frame(WindowingMode::Freeform, Rect::default(), Some(&display));
        let mut dim = DimLayerUsers::default();
        let mut subject = task();
        subject.attach_group(MockWindowGroup::new(1), 0, ResizeMode::Resizable);

        assert!(subject
            .resize(&frame, Some(Rect::new(0, 0, 100, 100)), override_config(), false, &mut dim)
            .unwrap());
        assert_eq!(subject.groups()[0].resize_count, 1);

        assert!(subject
            .resize(&frame, Some(Rect::new(20, 20, 120, 120)), override_config(), false, &mut dim)
            .unwrap());
        assert_eq!(subject.groups()[0].move_count, 1);
        assert_eq!(subject.groups()[0].resize_count, 1);

        // An unchanged rect reports nothing unless forced.
        assert!(!subject
            .resize(&frame, Some(Rect::new(20, 20, 120, 120)), override_config(), false, &mut dim)
            .unwrap());
        assert!(subject
            .resize(&frame, Some(Rect::new(20, 20, 120, 120)), override_config(), true, &mut dim)
            .unwrap());
        assert_eq!(subject.groups()[0].resize_count, 2);
    }

    #[test]
    fn bounds_spring_back_when_the_docked_stack_goes_away() {
        let mut display = Display::new(0, 800, 600);
        display.set_docked_stack_visible(true);
        let stack_bounds = Rect::new(0, 300, 800, 600);
        let mut dim = DimLayerUsers::default();
        let mut subject = task();
        {
            let frame = frame(WindowingMode::Fullscreen, stack_bounds, Some(&display));
            subject
                .set_bounds(&frame, Some(stack_bounds), override_config(), &mut dim)
                .unwrap();
            assert_eq!(subject.bounds_in(&frame), stack_bounds);
            assert!(!subject.is_fullscreen(&frame));
        }

        display.set_docked_stack_visible(false);
        let frame = frame(WindowingMode::Fullscreen, stack_bounds, Some(&display));
        assert_eq!(subject.bounds_in(&frame), Rect::new(0, 0, 800, 600));
        assert!(subject.is_fullscreen(&frame));
        // The stored rect is untouched; only the reported one springs back.
        assert_eq!(subject.raw_bounds(), stack_bounds);
    }

    #[test]
    fn freeform_dim_bounds_cover_all_visible_group_frames() {
        let mut display = Display::new(0, 1000, 1000);
        display.set_docked_stack_visible(true);
        let frame = frame(
            WindowingMode::Freeform,
            Rect::new(0, 0, 1000, 1000),
            Some(&display),
        );
        let mut dim = DimLayerUsers::default();
        let mut subject = task();
        subject
            .set_bounds(&frame, Some(Rect::new(0, 0, 300, 300)), override_config(), &mut dim)
            .unwrap();

        subject.attach_group(
            MockWindowGroup::with_frame(1, Rect::new(0, 0, 100, 100)),
            usize::MAX,
            ResizeMode::Resizable,
        );
        subject.attach_group(
            MockWindowGroup::with_frame(2, Rect::new(50, 50, 200, 150)),
            usize::MAX,
            ResizeMode::Resizable,
        );
        let mut hidden = MockWindowGroup::with_frame(3, Rect::new(500, 500, 900, 900));
        hidden.hidden = true;
        subject.attach_group(hidden, usize::MAX, ResizeMode::Resizable);

        assert_eq!(subject.dim_bounds(&frame), Rect::new(0, 0, 200, 150));
    }

    #[test]
    fn max_visible_bounds_is_none_without_a_visible_group() {
        let mut subject = task();
        let mut exiting = MockWindowGroup::with_frame(1, Rect::new(0, 0, 100, 100));
        exiting.exiting = true;
        subject.attach_group(exiting, usize::MAX, ResizeMode::Resizable);
        let mut hidden = MockWindowGroup::with_frame(2, Rect::new(0, 0, 100, 100));
        hidden.hidden = true;
        subject.attach_group(hidden, usize::MAX, ResizeMode::Resizable);
        // Visible but without a primary window frame.
        subject.attach_group(MockWindowGroup::new(3), usize::MAX, ResizeMode::Resizable);

        assert_eq!(subject.max_visible_bounds(), None);
    }

    #[test]
    fn freeform_dim_bounds_fall_back_to_the_intersection_without_visible_groups() {
        let mut display = Display::new(0, 1000, 1000);
        display.set_docked_stack_visible(true);
        let frame = frame(
            WindowingMode::Freeform,
            Rect::new(0, 0, 500, 500),
            Some(&display),
        );
        let mut dim = DimLayerUsers::default();
        let mut subject = task();
        subject
            .set_bounds(&frame, Some(Rect::new(200, 200, 700, 700)), override_config(), &mut dim)
            .unwrap();
        let mut hidden = MockWindowGroup::with_frame(1, Rect::new(0, 0, 50, 50));
        hidden.hidden = true;
        subject.attach_group(hidden, 0, ResizeMode::Resizable);

        assert_eq!(subject.dim_bounds(&frame), Rect::new(200, 200, 500, 500));
    }

    #[test]
    fn dim_bounds_clip_the_task_to_the_stack() {
        let mut display = Display::new(0, 1000, 1000);
        display.set_docked_stack_visible(true);
        let frame = frame(
            WindowingMode::Fullscreen,
            Rect::new(0, 0, 1000, 500),
            Some(&display),
        );
        let mut dim = DimLayerUsers::default();
        let mut subject = task();
        subject
            .set_bounds(&frame, Some(Rect::new(0, 200, 1000, 800)), override_config(), &mut dim)
            .unwrap();

        assert_eq!(subject.dim_bounds(&frame), Rect::new(0, 200, 1000, 500));
    }

    #[test]
    fn dim_bounds_follow_the_stack_while_the_divider_moves() {
        let mut display = Display::new(0, 1000, 1000);
        display.set_docked_stack_visible(true);
        display.set_divider_resizing(true);
        let frame = frame(
            WindowingMode::Fullscreen,
            Rect::new(0, 0, 1000, 500),
            Some(&display),
        );
        let mut dim = DimLayerUsers::default();
        let mut subject = task();
        subject
            .set_bounds(&frame, Some(Rect::new(0, 0, 1000, 400)), override_config(), &mut dim)
            .unwrap();

        assert_eq!(subject.dim_bounds(&frame), Rect::new(0, 0, 1000, 500));
    }

    #[test]
    fn rotation_rotates_freeform_bounds_in_place() {
        let mut display = Display::new(0, 200, 100);
        let mut dim = DimLayerUsers::default();
        let mut subject = task();
        {
            let frame = frame(WindowingMode::Freeform, Rect::default(), Some(&display));
            subject
                .set_bounds(&frame, Some(Rect::new(10, 20, 30, 40)), override_config(), &mut dim)
                .unwrap();
        }

        display.set_rotation(Rotation::R90);
        let frame = frame(WindowingMode::Freeform, Rect::default(), Some(&display));
        let notified = subject.update_display_info(&frame, &mut dim).unwrap();
        assert_eq!(notified, Some(Rect::new(60, 10, 80, 30)));
        assert_eq!(subject.rotation(), Rotation::R90);

        // Same rotation again is quiet.
        assert_eq!(subject.update_display_info(&frame, &mut dim).unwrap(), None);
    }

    #[test]
    fn rotation_leaves_stack_managed_bounds_alone() {
        let mut display = Display::new(0, 200, 100);
        let mut dim = DimLayerUsers::default();
        let mut subject = task();
        let bounds = Rect::new(10, 20, 30, 40);
        {
            let frame = frame(WindowingMode::Fullscreen, Rect::default(), Some(&display));
            subject
                .set_bounds(&frame, Some(bounds), override_config(), &mut dim)
                .unwrap();
        }

        display.set_rotation(Rotation::R90);
        let frame = frame(WindowingMode::Fullscreen, Rect::default(), Some(&display));
        let notified = subject.update_display_info(&frame, &mut dim).unwrap();
        assert_eq!(notified, None);
        assert_eq!(subject.raw_bounds(), bounds);
        assert_eq!(subject.rotation(), Rotation::R90);
    }

    #[test]
    fn fullscreen_tasks_track_the_rotated_display() {
        let mut display = Display::new(0, 200, 100);
        let mut dim = DimLayerUsers::default();
        let mut subject = task();
        {
            let frame = frame(WindowingMode::Fullscreen, Rect::default(), Some(&display));
            subject
                .set_bounds(&frame, None, Configuration::EMPTY, &mut dim)
                .unwrap();
        }

        display.set_rotation(Rotation::R90);
        let frame = frame(WindowingMode::Fullscreen, Rect::default(), Some(&display));
        subject.update_display_info(&frame, &mut dim).unwrap();
        assert_eq!(subject.raw_bounds(), Rect::new(0, 0, 100, 200));
    }

    #[test]
    fn align_to_adjusted_bounds_anchors_the_bottom_edge() {
        let mut display = Display::new(0, 800, 600);
        display.set_docked_stack_visible(true);
        let frame = frame(WindowingMode::Freeform, Rect::default(), Some(&display));
        let mut dim = DimLayerUsers::default();
        let mut subject = task();
        subject.attach_group(MockWindowGroup::new(1), 0, ResizeMode::Resizable);
        subject
            .set_bounds(&frame, Some(Rect::new(100, 100, 300, 300)), override_config(), &mut dim)
            .unwrap();

        let insets = Rect::new(0, 0, 800, 500);
        let moved = subject
            .align_to_adjusted_bounds(&frame, Rect::new(0, 0, 800, 500), Some(insets), true, false, &mut dim)
            .unwrap();
        assert!(moved);
        assert_eq!(subject.raw_bounds(), Rect::new(100, 300, 300, 500));
        assert_eq!(subject.temp_inset_bounds(), insets);
    }

    #[test]
    fn unresizable_tasks_ignore_adjusted_bounds_unless_forced() {
        let mut display = Display::new(0, 800, 600);
        display.set_docked_stack_visible(true);
        let frame = frame(WindowingMode::Fullscreen, Rect::default(), Some(&display));
        let mut dim = DimLayerUsers::default();
        let mut subject = task();
        subject
            .set_bounds(&frame, Some(Rect::new(0, 0, 100, 100)), override_config(), &mut dim)
            .unwrap();

        let moved = subject
            .align_to_adjusted_bounds(&frame, Rect::new(10, 10, 110, 110), None, false, false, &mut dim)
            .unwrap();
        assert!(!moved);

        let moved = subject
            .align_to_adjusted_bounds(&frame, Rect::new(10, 10, 110, 110), None, false, true, &mut dim)
            .unwrap();
        assert!(moved);
        assert_eq!(subject.raw_bounds(), Rect::new(10, 10, 110, 110));
    }

    #[test]
    fn drag_resizing_rejects_an_incompatible_mode() {
        let mut subject = task();
        let err = subject
            .set_drag_resizing(WindowingMode::Fullscreen, true, DragResizeMode::Freeform)
            .unwrap_err();
        assert_eq!(
            err,
            TaskWmError::DragResizeModeNotAllowed {
                mode: DragResizeMode::Freeform,
                windowing_mode: WindowingMode::Fullscreen,
            }
        );
        assert!(!subject.drag_resizing());
    }

    #[test]
    fn drag_resizing_resets_the_reported_flag_on_every_transition() {
        let mut subject = task();
        subject
            .set_drag_resizing(WindowingMode::Freeform, true, DragResizeMode::Freeform)
            .unwrap();
        assert!(subject.drag_resizing());
        subject.set_drag_resize_reported(true);

        // Same state again keeps the flag.
        subject
            .set_drag_resizing(WindowingMode::Freeform, true, DragResizeMode::Freeform)
            .unwrap();
        assert!(subject.drag_resize_reported());

        subject
            .set_drag_resizing(WindowingMode::Freeform, false, DragResizeMode::Freeform)
            .unwrap();
        assert!(!subject.drag_resize_reported());
    }

    #[test]
    fn prepare_freezing_bounds_snapshots_the_current_state() {
        let display = Display::new(0, 800, 600);
        let frame = frame(WindowingMode::Freeform, Rect::default(), Some(&display));
        let mut dim = DimLayerUsers::default();
        let mut subject = task();
        let bounds = Rect::new(5, 5, 105, 105);
        subject
            .set_bounds(&frame, Some(bounds), override_config(), &mut dim)
            .unwrap();

        subject.prepare_freezing_bounds();
        assert_eq!(subject.frozen_bounds(), bounds);
        assert_eq!(subject.frozen_merged_configuration(), subject.merged_configuration());

        subject
            .set_bounds(&frame, Some(Rect::new(50, 50, 150, 150)), override_config(), &mut dim)
            .unwrap();
        assert_eq!(subject.frozen_bounds(), bounds);
    }

    #[test]
    fn attaching_a_group_revives_a_task_parked_for_removal() {
        let mut subject = task();
        subject.set_removal_state(RemovalState::PendingRemoval);
        subject.attach_group(MockWindowGroup::new(1), 0, ResizeMode::Unresizable);
        assert_eq!(subject.removal_state(), RemovalState::Active);
        assert_eq!(subject.resize_mode(), ResizeMode::Unresizable);
    }

    #[test]
    fn detach_group_ignores_a_group_it_does_not_hold() {
        let mut subject = task();
        subject.attach_group(MockWindowGroup::new(1), 0, ResizeMode::Resizable);
        assert!(!subject.detach_group(&MockWindowGroup::new(2)));
        assert!(subject.detach_group(&MockWindowGroup::new(1)));
        assert!(subject.groups().is_empty());
    }

    #[test]
    fn top_visible_group_skips_exiting_and_hidden_groups() {
        let mut subject = task();
        subject.attach_group(MockWindowGroup::new(1), usize::MAX, ResizeMode::Resizable);
        let mut exiting = MockWindowGroup::new(2);
        exiting.exiting = true;
        subject.attach_group(exiting, usize::MAX, ResizeMode::Resizable);
        let mut hide_requested = MockWindowGroup::new(3);
        hide_requested.hide_requested = true;
        subject.attach_group(hide_requested, usize::MAX, ResizeMode::Resizable);

        assert_eq!(subject.top_visible_group().map(|g| g.id), Some(1));
    }
}
