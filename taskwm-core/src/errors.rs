//! Error type shared across the crate.
use thiserror::Error;

use crate::models::{
    Configuration, DisplayId, DragResizeMode, StackId, TaskId, WindowingMode,
};

pub type Result<T> = std::result::Result<T, TaskWmError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskWmError {
    #[error("override configuration {0:?} given without bounds")]
    OverrideWithoutBounds(Configuration),

    #[error("explicit bounds given with an empty override configuration")]
    BoundsWithoutOverride,

    #[error("drag resize mode {mode:?} is not allowed on a {windowing_mode:?} stack")]
    DragResizeModeNotAllowed {
        mode: DragResizeMode,
        windowing_mode: WindowingMode,
    },

    #[error("no task with id {0}")]
    UnknownTask(TaskId),

    #[error("no stack with id {0}")]
    UnknownStack(StackId),

    #[error("no display with id {0}")]
    UnknownDisplay(DisplayId),

    #[error("a task with id {0} already exists")]
    TaskExists(TaskId),
}
