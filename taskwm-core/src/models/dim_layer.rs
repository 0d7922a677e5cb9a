//! Dim-overlay bookkeeping. The engine tells the dim-layer owner which tasks
//! changed or went away; the owner queries `dim_bounds` when it actually
//! draws.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::TaskId;

pub trait DimLayerOwner {
    /// A task's bounds changed; refresh any dim layer tied to it.
    fn update_dim_layer(&mut self, task: TaskId);

    /// A task was removed; drop its dim layer state.
    fn remove_dim_layer_user(&mut self, task: TaskId);
}

/// Tracks which tasks currently own a dim layer.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct DimLayerUsers {
    users: HashSet<TaskId>,
}

impl DimLayerUsers {
    #[must_use]
    pub fn contains(&self, task: TaskId) -> bool {
        self.users.contains(&task)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl DimLayerOwner for DimLayerUsers {
    fn update_dim_layer(&mut self, task: TaskId) {
        self.users.insert(task);
    }

    fn remove_dim_layer_user(&mut self, task: TaskId) {
        self.users.remove(&task);
    }
}
