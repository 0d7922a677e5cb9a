mod bounds_change;
mod configuration;
mod container;
mod dim_layer;
mod display;
mod rect;
mod registry;
mod resize_mode;
mod rotation;
mod stack;
mod task;
mod window_group;
mod windowing_mode;

pub mod manager;

pub use bounds_change::BoundsChange;
pub use configuration::{Configuration, Orientation};
pub use container::{Configurable, Container};
pub use dim_layer::{DimLayerOwner, DimLayerUsers};
pub use display::Display;
pub use manager::Manager;
pub use rect::Rect;
pub use registry::TaskRegistry;
pub use resize_mode::{DragResizeMode, ResizeMode};
pub use rotation::Rotation;
pub use stack::{Stack, StackFrame};
pub use task::{RemovalState, Task};
pub use window_group::WindowGroup;
pub use windowing_mode::WindowingMode;

#[cfg(test)]
pub(crate) use window_group::MockWindowGroup;

pub type TaskId = i32;
pub type StackId = i32;
pub type DisplayId = i32;
