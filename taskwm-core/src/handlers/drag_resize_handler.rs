//! Interactive resize state, gated by the owning stack's windowing mode.
use crate::errors::{Result, TaskWmError};
use crate::models::{DimLayerOwner, DragResizeMode, Manager, TaskId, WindowGroup};
use crate::notify::ResizeNotifier;

impl<G, DIM, NOTIFY> Manager<G, DIM, NOTIFY>
where
    G: WindowGroup,
    DIM: DimLayerOwner,
    NOTIFY: ResizeNotifier,
{
    /// Mark a task as being drag-resized (or not). The requested mode must
    /// be compatible with the owning stack's windowing mode.
    pub fn set_task_drag_resizing(
        &mut self,
        task_id: TaskId,
        drag_resizing: bool,
        mode: DragResizeMode,
    ) -> Result<()> {
        let stack_id = self
            .state
            .registry
            .stack_of(task_id)
            .ok_or(TaskWmError::UnknownTask(task_id))?;
        let stack = self
            .state
            .stack_mut(stack_id)
            .ok_or(TaskWmError::UnknownStack(stack_id))?;
        let windowing_mode = stack.windowing_mode();
        let task = stack
            .task_mut(task_id)
            .ok_or(TaskWmError::UnknownTask(task_id))?;
        task.set_drag_resizing(windowing_mode, drag_resizing, mode)
    }
}
