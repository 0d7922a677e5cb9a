use serde::{Deserialize, Serialize};

/// Windowing policy of a stack. The mode decides how tasks inside the stack
/// react to docked stacks, rotation, and drag-resizing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowingMode {
    /// Ordinary full-screen stack.
    Fullscreen,
    /// Secondary split-screen stack; its presence shrinks sibling tasks.
    Docked,
    /// Desktop-style workspace with freely placed, floating tasks.
    Freeform,
    /// Picture-in-picture stack pinned above everything else.
    Pinned,
    /// The launcher's stack.
    Home,
}

impl WindowingMode {
    /// Tasks in this mode have their bounds adjusted when a docked stack
    /// appears next to them.
    #[must_use]
    pub const fn resizeable_by_docked_stack(self) -> bool {
        matches!(self, Self::Fullscreen | Self::Freeform)
    }

    /// Tasks in this mode may be resized and rotated independently of the
    /// owning stack.
    #[must_use]
    pub const fn task_resize_allowed(self) -> bool {
        matches!(self, Self::Freeform)
    }
}
