//! A stack groups tasks that share a windowing policy. The stack provides
//! the frame a task resolves its bounds against; tasks never reach back into
//! the stack except to request reparenting through the manager.
use serde::{Deserialize, Serialize};

use super::{
    Configurable, Configuration, Container, Display, DisplayId, Rect, StackId, Task, TaskId,
    WindowGroup, WindowingMode,
};

// serde needs the empty bound here, same as on `Task` (serde issue #1296).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(bound = "")]
pub struct Stack<G: WindowGroup> {
    pub id: StackId,
    windowing_mode: WindowingMode,
    bounds: Rect,
    animating: bool,
    /// Non-owning back-reference to the display this stack sits on.
    pub display: Option<DisplayId>,
    container: Container<Task<G>>,
}

/// Snapshot of the stack context a task operation needs. Built once per
/// operation so the dependency on transient stack/display state is an
/// explicit parameter rather than a hidden live query.
#[derive(Clone, Copy, Debug)]
pub struct StackFrame<'a> {
    pub windowing_mode: WindowingMode,
    pub bounds: Rect,
    pub merged_configuration: Configuration,
    pub animating: bool,
    pub display: Option<&'a Display>,
}

impl<G: WindowGroup> Stack<G> {
    #[must_use]
    pub fn new(id: StackId, windowing_mode: WindowingMode, bounds: Rect) -> Self {
        Self {
            id,
            windowing_mode,
            bounds,
            animating: false,
            display: None,
            container: Container::default(),
        }
    }

    #[must_use]
    pub const fn windowing_mode(&self) -> WindowingMode {
        self.windowing_mode
    }

    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// An animation referencing this stack's windows is in flight. Task
    /// removal defers while this is set.
    #[must_use]
    pub const fn animating(&self) -> bool {
        self.animating
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    #[must_use]
    pub fn frame<'a>(&self, display: Option<&'a Display>) -> StackFrame<'a> {
        StackFrame {
            windowing_mode: self.windowing_mode,
            bounds: self.bounds,
            merged_configuration: self.container.merged_configuration(),
            animating: self.animating,
            display,
        }
    }

    /// Tasks in z-order, bottom first.
    #[must_use]
    pub fn tasks(&self) -> &[Task<G>] {
        self.container.children()
    }

    pub fn tasks_mut(&mut self) -> &mut [Task<G>] {
        self.container.children_mut()
    }

    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task<G>> {
        self.container.children().iter().find(|t| t.id() == id)
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task<G>> {
        self.container
            .children_mut()
            .iter_mut()
            .find(|t| t.id() == id)
    }

    /// Insert a task at `position` in z-order (clamped; `usize::MAX` means
    /// on top). The task picks up this stack's merged configuration.
    pub fn attach_task(&mut self, task: Task<G>, position: usize) {
        self.container.attach(task, position);
    }

    pub fn detach_task(&mut self, id: TaskId) -> Option<Task<G>> {
        let index = self.container.children().iter().position(|t| t.id() == id)?;
        Some(self.container.detach(index))
    }

    #[must_use]
    pub const fn override_configuration(&self) -> Configuration {
        self.container.override_configuration()
    }

    #[must_use]
    pub const fn merged_configuration(&self) -> Configuration {
        self.container.merged_configuration()
    }

    pub fn set_override_configuration(
        &mut self,
        configuration: Configuration,
        parent_merged: Configuration,
    ) {
        self.container
            .set_override_configuration(configuration, parent_merged);
    }
}

impl<G: WindowGroup> Configurable for Stack<G> {
    fn configure(&mut self, parent_merged: Configuration) {
        self.container.configure(parent_merged);
    }
}
