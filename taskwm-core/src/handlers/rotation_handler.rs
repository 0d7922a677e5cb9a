//! Display rotation: re-resolve every task on the display and queue resize
//! notifications for tasks that moved on their own.
use crate::errors::{Result, TaskWmError};
use crate::models::{DimLayerOwner, DisplayId, Manager, Rotation, WindowGroup};
use crate::notify::{ResizeNotification, ResizeNotifier, ResizeReason};

impl<G, DIM, NOTIFY> Manager<G, DIM, NOTIFY>
where
    G: WindowGroup,
    DIM: DimLayerOwner,
    NOTIFY: ResizeNotifier,
{
    /// Apply a new rotation to a display and recompute the bounds of every
    /// task on it.
    pub fn rotate_display(&mut self, display_id: DisplayId, rotation: Rotation) -> Result<()> {
        let display = self
            .state
            .display_mut(display_id)
            .ok_or(TaskWmError::UnknownDisplay(display_id))?;
        display.set_rotation(rotation);
        self.update_display_info(display_id)
    }

    /// Re-resolve all tasks on a display after its geometry changed.
    /// Fullscreen tasks track the new logical rect; freeform tasks rotate in
    /// place and their owner is notified through the queue. The notification
    /// stays one-way so the lifecycle side is never entered while the caller
    /// holds the hierarchy lock.
    pub fn update_display_info(&mut self, display_id: DisplayId) -> Result<()> {
        let Self {
            state,
            dim_layer,
            notifier,
            ..
        } = self;
        let display = state
            .displays
            .iter()
            .find(|d| d.id == display_id)
            .ok_or(TaskWmError::UnknownDisplay(display_id))?;

        for stack in state
            .stacks
            .iter_mut()
            .filter(|s| s.display == Some(display_id))
        {
            let frame = stack.frame(Some(display));
            for task in stack.tasks_mut() {
                if let Some(bounds) = task.update_display_info(&frame, dim_layer)? {
                    notifier.notify_task_resized(ResizeNotification {
                        task_id: task.id(),
                        reason: ResizeReason::SystemScreenRotation,
                        bounds,
                    });
                }
            }
        }
        Ok(())
    }
}
