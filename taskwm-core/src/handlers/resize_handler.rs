//! Resizing tasks in place: explicit resizes, docked-stack alignment, inset
//! overrides, and bounds freezing.
use crate::errors::{Result, TaskWmError};
use crate::models::{Configuration, DimLayerOwner, Manager, Rect, TaskId, WindowGroup};
use crate::notify::ResizeNotifier;

impl<G, DIM, NOTIFY> Manager<G, DIM, NOTIFY>
where
    G: WindowGroup,
    DIM: DimLayerOwner,
    NOTIFY: ResizeNotifier,
{
    /// Resize a task and notify its window groups. `force` makes the groups
    /// relayout even when the geometry did not change. Returns whether the
    /// groups were notified.
    pub fn resize_task(
        &mut self,
        task_id: TaskId,
        bounds: Option<Rect>,
        override_configuration: Configuration,
        force: bool,
    ) -> Result<bool> {
        let Self {
            state, dim_layer, ..
        } = self;
        let stack_id = state
            .registry
            .stack_of(task_id)
            .ok_or(TaskWmError::UnknownTask(task_id))?;
        let (stack, display) = state
            .stack_and_display_mut(stack_id)
            .ok_or(TaskWmError::UnknownStack(stack_id))?;
        let frame = stack.frame(display);
        let task = stack
            .task_mut(task_id)
            .ok_or(TaskWmError::UnknownTask(task_id))?;
        task.resize(&frame, bounds, override_configuration, force, dim_layer)
    }

    /// Align a task to bounds adjusted for a docked stack. See
    /// [`crate::models::Task::align_to_adjusted_bounds`].
    pub fn align_task_to_adjusted_bounds(
        &mut self,
        task_id: TaskId,
        adjusted_bounds: Rect,
        temp_inset_bounds: Option<Rect>,
        align_bottom: bool,
    ) -> Result<bool> {
        let Self {
            state,
            dim_layer,
            force_resizable_tasks,
            ..
        } = self;
        let force_resizable = *force_resizable_tasks;
        let stack_id = state
            .registry
            .stack_of(task_id)
            .ok_or(TaskWmError::UnknownTask(task_id))?;
        let (stack, display) = state
            .stack_and_display_mut(stack_id)
            .ok_or(TaskWmError::UnknownStack(stack_id))?;
        let frame = stack.frame(display);
        let task = stack
            .task_mut(task_id)
            .ok_or(TaskWmError::UnknownTask(task_id))?;
        task.align_to_adjusted_bounds(
            &frame,
            adjusted_bounds,
            temp_inset_bounds,
            align_bottom,
            force_resizable,
            dim_layer,
        )
    }

    /// Install (or clear, with `None`) the insets clients should see while a
    /// docked-stack adjustment is in effect.
    pub fn set_task_temp_inset_bounds(
        &mut self,
        task_id: TaskId,
        bounds: Option<Rect>,
    ) -> Result<()> {
        let task = self.owned_task_mut(task_id)?;
        task.set_temp_inset_bounds(bounds);
        Ok(())
    }

    /// Snapshot the task's bounds and merged configuration for an in-flight
    /// animation before a bounds-changing operation replaces them.
    pub fn prepare_freezing_task_bounds(&mut self, task_id: TaskId) -> Result<()> {
        let task = self.owned_task_mut(task_id)?;
        task.prepare_freezing_bounds();
        Ok(())
    }
}
