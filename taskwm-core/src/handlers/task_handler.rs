//! Task lifecycle: creation, window-group membership, reparenting, and the
//! deferred-removal state machine.
use crate::errors::{Result, TaskWmError};
use crate::models::{
    Configuration, DimLayerOwner, Manager, Rect, RemovalState, ResizeMode, StackId, Task, TaskId,
    WindowGroup,
};
use crate::notify::ResizeNotifier;

impl<G, DIM, NOTIFY> Manager<G, DIM, NOTIFY>
where
    G: WindowGroup,
    DIM: DimLayerOwner,
    NOTIFY: ResizeNotifier,
{
    /// Create a task inside `stack_id` with initial bounds and override
    /// configuration, register it, and place it on top of the stack.
    pub fn create_task(
        &mut self,
        id: TaskId,
        user_id: i32,
        stack_id: StackId,
        bounds: Option<Rect>,
        override_configuration: Configuration,
    ) -> Result<()> {
        if self.state.registry.contains(id) {
            return Err(TaskWmError::TaskExists(id));
        }
        let Self {
            state, dim_layer, ..
        } = self;
        let (stack, display) = state
            .stack_and_display_mut(stack_id)
            .ok_or(TaskWmError::UnknownStack(stack_id))?;
        let frame = stack.frame(display);

        let mut task = Task::new(id, user_id);
        task.set_bounds(&frame, bounds, override_configuration, dim_layer)?;
        stack.attach_task(task, usize::MAX);
        state.registry.register(id, stack_id);
        tracing::debug!(task = id, stack = stack_id, "created task");
        Ok(())
    }

    /// Attach a window group to a task at `position` in z-order.
    pub fn add_window_group(
        &mut self,
        task_id: TaskId,
        group: G,
        position: usize,
        resize_mode: ResizeMode,
    ) -> Result<()> {
        let task = self.owned_task_mut(task_id)?;
        task.attach_group(group, position, resize_mode);
        Ok(())
    }

    /// Detach a window group. When that empties a task whose removal was
    /// deferred, the removal finally proceeds; the removed task is returned
    /// in that case.
    pub fn remove_window_group(
        &mut self,
        task_id: TaskId,
        group: &G,
    ) -> Result<Option<Task<G>>> {
        let task = self.owned_task_mut(task_id)?;
        task.detach_group(group);
        if task.groups().is_empty() && task.removal_state() == RemovalState::PendingRemoval {
            return self.remove_task_if_possible(task_id);
        }
        Ok(None)
    }

    /// Remove a task, unless an animation still references its windows; in
    /// that case the task parks in `PendingRemoval` and the removal re-runs
    /// when its last window group detaches. Returns the removed task when
    /// removal went through.
    pub fn remove_task_if_possible(&mut self, task_id: TaskId) -> Result<Option<Task<G>>> {
        let Self {
            state, dim_layer, ..
        } = self;
        let stack_id = state
            .registry
            .stack_of(task_id)
            .ok_or(TaskWmError::UnknownTask(task_id))?;
        let stack = state
            .stack_mut(stack_id)
            .ok_or(TaskWmError::UnknownStack(stack_id))?;
        let animating = stack.animating();
        let task = stack
            .task_mut(task_id)
            .ok_or(TaskWmError::UnknownTask(task_id))?;

        if task.has_windows_alive() && animating {
            tracing::debug!(task = task_id, "deferring task removal until the animation ends");
            task.set_removal_state(RemovalState::PendingRemoval);
            return Ok(None);
        }

        let mut task = stack
            .detach_task(task_id)
            .ok_or(TaskWmError::UnknownTask(task_id))?;
        task.set_removal_state(RemovalState::Removed);
        dim_layer.remove_dim_layer_user(task_id);
        state.registry.deregister(task_id);
        tracing::debug!(task = task_id, "removed task");
        Ok(Some(task))
    }

    /// Move a task onto another stack, on top. A task already on the target
    /// stack is left alone. Detach-then-attach is atomic: the target is
    /// verified before the task leaves its source stack.
    pub fn move_task_to_stack(
        &mut self,
        task_id: TaskId,
        stack_id: StackId,
        bounds: Option<Rect>,
        override_configuration: Configuration,
    ) -> Result<bool> {
        if self.state.registry.stack_of(task_id) == Some(stack_id) {
            return Ok(false);
        }
        self.position_task_in_stack(task_id, stack_id, usize::MAX, bounds, override_configuration)
    }

    /// Place a task at `position` in `stack_id`, reparenting it if it lives
    /// elsewhere, then resize it against the (possibly new) stack frame.
    /// Returns whether the resize reported a change.
    pub fn position_task_in_stack(
        &mut self,
        task_id: TaskId,
        stack_id: StackId,
        position: usize,
        bounds: Option<Rect>,
        override_configuration: Configuration,
    ) -> Result<bool> {
        let source_id = self
            .state
            .registry
            .stack_of(task_id)
            .ok_or(TaskWmError::UnknownTask(task_id))?;
        if self.state.stack(stack_id).is_none() {
            return Err(TaskWmError::UnknownStack(stack_id));
        }

        if source_id == stack_id {
            let stack = self
                .state
                .stack_mut(stack_id)
                .ok_or(TaskWmError::UnknownStack(stack_id))?;
            let task = stack
                .detach_task(task_id)
                .ok_or(TaskWmError::UnknownTask(task_id))?;
            stack.attach_task(task, position);
        } else {
            let source = self
                .state
                .stack_mut(source_id)
                .ok_or(TaskWmError::UnknownStack(source_id))?;
            let task = source
                .detach_task(task_id)
                .ok_or(TaskWmError::UnknownTask(task_id))?;
            // Existence was checked above; the task is never lost here.
            let target = self
                .state
                .stack_mut(stack_id)
                .ok_or(TaskWmError::UnknownStack(stack_id))?;
            target.attach_task(task, position);
            self.state.registry.register(task_id, stack_id);
            tracing::debug!(task = task_id, from = source_id, to = stack_id, "reparented task");
        }

        self.resize_task(task_id, bounds, override_configuration, false)
    }

    /// Effective bounds of a task as the rest of the system should see them.
    pub fn task_bounds(&self, task_id: TaskId) -> Result<Rect> {
        self.with_task(task_id, |task, frame| task.bounds_in(frame))
    }

    /// Where a dim layer tied to the task should be drawn.
    pub fn task_dim_bounds(&self, task_id: TaskId) -> Result<Rect> {
        self.with_task(task_id, |task, frame| task.dim_bounds(frame))
    }

    pub fn is_task_fullscreen(&self, task_id: TaskId) -> Result<bool> {
        self.with_task(task_id, |task, frame| task.is_fullscreen(frame))
    }

    fn with_task<T>(
        &self,
        task_id: TaskId,
        query: impl FnOnce(&Task<G>, &crate::models::StackFrame<'_>) -> T,
    ) -> Result<T> {
        let stack_id = self
            .state
            .registry
            .stack_of(task_id)
            .ok_or(TaskWmError::UnknownTask(task_id))?;
        let stack = self
            .state
            .stack(stack_id)
            .ok_or(TaskWmError::UnknownStack(stack_id))?;
        let frame = stack.frame(self.state.display_of(stack));
        let task = stack
            .task(task_id)
            .ok_or(TaskWmError::UnknownTask(task_id))?;
        Ok(query(task, &frame))
    }

    pub(crate) fn owned_task_mut(&mut self, task_id: TaskId) -> Result<&mut Task<G>> {
        let stack_id = self
            .state
            .registry
            .stack_of(task_id)
            .ok_or(TaskWmError::UnknownTask(task_id))?;
        self.state
            .stack_mut(stack_id)
            .ok_or(TaskWmError::UnknownStack(stack_id))?
            .task_mut(task_id)
            .ok_or(TaskWmError::UnknownTask(task_id))
    }
}
