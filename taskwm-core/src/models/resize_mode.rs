use serde::{Deserialize, Serialize};

use super::WindowingMode;

/// Resize policy of a task, as declared by its top window group.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizeMode {
    #[default]
    Unresizable,
    Resizable,
    /// Resizable, but the content declares min/max size constraints.
    ResizableWithSizeConstraints,
    /// Forced resizable regardless of what the content declared.
    ForceResizable,
}

impl ResizeMode {
    #[must_use]
    pub const fn is_resizable(self) -> bool {
        !matches!(self, Self::Unresizable)
    }
}

/// How an interactive resize is being driven.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragResizeMode {
    /// Grab handle on the edge of a freeform task.
    #[default]
    Freeform,
    /// The split-screen divider.
    DockedDivider,
}

impl DragResizeMode {
    /// Whether this drag mode may be used on a stack in the given windowing
    /// mode. An incompatible pairing is a caller bug.
    #[must_use]
    pub const fn allowed_for(self, windowing_mode: WindowingMode) -> bool {
        match self {
            Self::Freeform => matches!(windowing_mode, WindowingMode::Freeform),
            Self::DockedDivider => matches!(
                windowing_mode,
                WindowingMode::Fullscreen | WindowingMode::Docked | WindowingMode::Home
            ),
        }
    }
}
