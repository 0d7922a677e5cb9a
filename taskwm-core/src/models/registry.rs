//! Explicit id-to-stack lookup table with an owned, controlled lifetime;
//! nothing in the crate relies on process-wide state.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{StackId, TaskId};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TaskRegistry {
    tasks: HashMap<TaskId, StackId>,
}

impl TaskRegistry {
    /// Record where a task lives. Re-registering an id updates the stack,
    /// which is how reparenting keeps the table current.
    pub fn register(&mut self, task: TaskId, stack: StackId) {
        self.tasks.insert(task, stack);
    }

    pub fn deregister(&mut self, task: TaskId) {
        self.tasks.remove(&task);
    }

    #[must_use]
    pub fn stack_of(&self, task: TaskId) -> Option<StackId> {
        self.tasks.get(&task).copied()
    }

    #[must_use]
    pub fn contains(&self, task: TaskId) -> bool {
        self.tasks.contains_key(&task)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
