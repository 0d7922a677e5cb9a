//! The flat hierarchy the manager mutates: displays, stacks, and the
//! id-to-stack registry. Stacks own their tasks; everything else links by id.
use serde::{Deserialize, Serialize};

use crate::models::{Display, DisplayId, Stack, StackId, Task, TaskId, TaskRegistry, WindowGroup};

// serde needs the empty bound here, same as on `Task` (serde issue #1296).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(bound = "")]
pub struct State<G: WindowGroup> {
    pub displays: Vec<Display>,
    pub stacks: Vec<Stack<G>>,
    pub registry: TaskRegistry,
}

impl<G: WindowGroup> Default for State<G> {
    fn default() -> Self {
        Self {
            displays: Vec::new(),
            stacks: Vec::new(),
            registry: TaskRegistry::default(),
        }
    }
}

impl<G: WindowGroup> State<G> {
    pub fn add_display(&mut self, display: Display) {
        self.displays.push(display);
    }

    pub fn add_stack(&mut self, stack: Stack<G>) {
        self.stacks.push(stack);
    }

    #[must_use]
    pub fn display(&self, id: DisplayId) -> Option<&Display> {
        self.displays.iter().find(|d| d.id == id)
    }

    pub fn display_mut(&mut self, id: DisplayId) -> Option<&mut Display> {
        self.displays.iter_mut().find(|d| d.id == id)
    }

    #[must_use]
    pub fn stack(&self, id: StackId) -> Option<&Stack<G>> {
        self.stacks.iter().find(|s| s.id == id)
    }

    pub fn stack_mut(&mut self, id: StackId) -> Option<&mut Stack<G>> {
        self.stacks.iter_mut().find(|s| s.id == id)
    }

    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task<G>> {
        let stack = self.stack(self.registry.stack_of(id)?)?;
        stack.task(id)
    }

    /// Display backing a stack, if the stack sits on one.
    #[must_use]
    pub fn display_of(&self, stack: &Stack<G>) -> Option<&Display> {
        self.display(stack.display?)
    }

    /// Split borrow: the stack mutably, its display shared. Needed because a
    /// task mutation reads the display while the stack is borrowed mutably.
    pub(crate) fn stack_and_display_mut(
        &mut self,
        id: StackId,
    ) -> Option<(&mut Stack<G>, Option<&Display>)> {
        let stack = self.stacks.iter_mut().find(|s| s.id == id)?;
        let display = match stack.display {
            Some(display_id) => self.displays.iter().find(|d| d.id == display_id),
            None => None,
        };
        Some((stack, display))
    }
}
